//! Persistence gateway for the larder meal-planning assistant.
//!
//! Thin per-entity operations against PostgreSQL: state collections are
//! replaced wholesale on every save (inside one transaction), logs are
//! insert-only. No validation happens here beyond what the schema
//! enforces; any store error aborts the whole call and is surfaced to the
//! caller with context.

pub mod config;
pub mod models;
pub mod pool;
pub mod queries;
