#![doc(test(attr(deny(warnings))))]

//! Matchbook Core offers the match-result and budget-proration primitives
//! that power the demo scoreboard and budgeting screens.

pub mod domain;
pub mod errors;
pub mod mock;
pub mod services;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Matchbook Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
