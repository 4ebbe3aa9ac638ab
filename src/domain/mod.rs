//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (ids, timestamps, validation, search, errors)
//! - `category` - Category aggregate
//! - `cast_member` - Cast member aggregate and type enumeration

pub mod cast_member;
pub mod category;
pub mod foundation;
