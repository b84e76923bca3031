//! Stockroom Core - Shared types and access policy.
//!
//! This crate provides common types used across all Stockroom components:
//! - `api` - Session-authenticated HTTP service for users and products
//! - `cli` - Command-line tools for migrations and admin seeding
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no I/O, no database
//! access, no HTTP. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, emails, and roles
//! - [`policy`] - Ownership scoping rules derived from a caller's role

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod policy;
pub mod types;

pub use policy::*;
pub use types::*;
