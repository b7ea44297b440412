//! Skinsage - Skincare Recommendation Service
//!
//! This crate implements a skin-type survey with a fixed scoring rule and a
//! product catalog filtered by the resulting classification.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
