//! Core data types for the fuel quote service

pub mod market;
pub mod quote;
