//! Stockroom API library.
//!
//! Session-authenticated CRUD for users and products with role-based access
//! control. Admins operate on every record, members only on records they
//! own, and a missing record is always reported before an ownership
//! failure.
//!
//! The binary in `main.rs` wires this library to a `PostgreSQL` pool, a
//! tower-sessions store, and an axum server.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod response;
pub mod routes;
pub mod services;
pub mod state;
