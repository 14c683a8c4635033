//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, RateTable};

/// Shared application state.
///
/// Holds the rate table loaded at startup. It is read-only for the life of
/// the server, so handlers share it without locking.
#[derive(Clone)]
pub struct AppState {
    /// The active rate table.
    rates: Arc<RateTable>,
}

impl AppState {
    /// Creates a new application state from a validated rate table.
    ///
    /// Taking a [`ConfigLoader`] rather than a bare [`RateTable`] guarantees
    /// the calculators never see a zero divisor or minimum wage.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            rates: Arc::new(config.into_rates()),
        }
    }

    /// Returns a reference to the rate table.
    pub fn rates(&self) -> &RateTable {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_state_holds_validated_table() {
        let config = ConfigLoader::from_table(RateTable::default()).unwrap();
        let state = AppState::new(config);
        assert_eq!(state.rates(), &RateTable::default());
    }
}
