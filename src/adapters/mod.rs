//! Adapters - implementations of ports against concrete infrastructure.

pub mod http;
pub mod postgres;
pub mod storage;
