//! Video Catalog - Admin backend for a video catalog
//!
//! Manages categories and cast members through a layered core: domain
//! aggregates with notification-based validation, repository ports with
//! in-memory and PostgreSQL adapters, use-case handlers, and an Axum API.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
