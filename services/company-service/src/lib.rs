//! CRUD microservice for company records.

pub mod api;
pub mod repository;
pub mod service;
