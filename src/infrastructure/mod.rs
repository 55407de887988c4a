//! Infrastructure layer - HTTP clients and storage

pub mod api_clients;
pub mod database;
