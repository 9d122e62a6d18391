//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and data surfaces while reading
//! shared state from Leptos context providers.

pub mod charts;
pub mod header;
pub mod kpi_card;
pub mod severity_badge;
pub mod shell;
pub mod sidebar;
pub mod skeleton;
