//! Test fixtures shared across the litemapper workspace.
//!
//! This crate holds the model graph the integration tests map between —
//! flat person records, single-level address nesting and a three-level
//! employee/company/address chain — together with sample constructors so
//! individual tests stay focused on behaviour rather than setup.

pub mod models;
