//! Networking modules for the intel API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls through the server's same-origin `/api`
//! relay, and `types` defines the shared wire schema.

pub mod api;
pub mod types;
