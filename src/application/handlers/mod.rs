//! Command and query handlers, one per operation.
//!
//! Handlers own the orchestration between ports; the domain stays pure.

pub mod admin;
pub mod catalog;
pub mod survey;
