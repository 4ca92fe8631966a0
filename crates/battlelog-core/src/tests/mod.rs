//! Integration and property tests for the battle presenter.
//!
//! - `helpers.rs`: fixtures for players, battles and catalogs
//! - `integration.rs`: end-to-end presenter scenarios, including JSON input
//! - `properties.rs`: proptest invariants over generated histories

pub(crate) mod helpers;
