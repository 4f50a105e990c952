//! # qp-network
//!
//! reqwest-backed implementation of the remote blog service port.

pub mod client;
pub mod wire;

pub use client::RestClient;
