//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: quiet logging
//! initialization, Problem Details assertions and unique-name helpers.

pub mod logging;
pub mod problem_details;
pub mod unique_helpers;
