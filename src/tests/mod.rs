//! Cross-module test suites.
//!
//! - `golden_fixtures`: hard-coded expected outputs, identical for every
//!   build configuration
//! - `backend_equivalence`: randomised checks that the dispatched operations
//!   agree with the portable reference and with per-lane scalar formulas

mod golden_fixtures;
