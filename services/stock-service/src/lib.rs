//! CRUD microservice for stock records, fed by HTTP and by a Kafka topic.

pub mod api;
pub mod consumer;
pub mod repository;
pub mod service;
