//! Re-exports the shared building blocks consumed by the EStock
//! microservices: configuration handling, the common error taxonomy, wire
//! DTOs, and Kafka broker helpers.

pub mod config;
pub mod dto;
pub mod error;
pub mod kafka;
