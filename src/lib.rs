#![doc(test(attr(deny(warnings))))]

//! Expense Tracker keeps a personal expense ledger and its category registry
//! in two JSON files, shared by an interactive menu and a small web front end.

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod export;
pub mod storage;
pub mod utils;
pub mod web;

pub use crate::core::{Result, Tracker, TrackerError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            version = %utils::build_info::current().label(),
            "expense tracker tracing initialized"
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
