//! Configuration, connectivity and credential check handlers.

pub mod auth;
pub mod config;
pub mod connection;
pub mod env;
