//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering
//! details to `components`. Protected pages wrap themselves in
//! `DashboardShell`, which runs the session bootstrap on mount.

pub mod dashboard;
pub mod iocs;
pub mod login;
pub mod register;
pub mod reports;
pub mod reset_password;
pub mod verify_otp;
