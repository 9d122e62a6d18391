//! Reactive state shared across the client UI.
//!
//! SYSTEM CONTEXT
//! ==============
//! State structs are plain data wrapped in `RwSignal`s provided via
//! context from the root `App` component.

pub mod auth;
