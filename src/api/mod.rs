//! HTTP API module for the domestic payroll engine.
//!
//! This module provides the REST endpoints that calculate a month of
//! domestic work from a calendar selection and expose the active rates.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{CalculationRequest, DayRequest, PreparedCalculation};
pub use response::{ApiError, ApiErrorResponse, CalculationResponse};
pub use state::AppState;
