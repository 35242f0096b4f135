//! Core business logic abstractions

pub mod calculator;
pub mod config;
pub mod error;
pub mod log;
pub mod quote;
pub mod rates;
pub mod session;

// Re-export main types for cleaner imports
pub use calculator::{CalculationInput, CalculationResult, calculate, evaluate};
pub use error::{CalculationError, RateError};
pub use quote::QuoteName;
pub use rates::{RateProvider, RateSnapshot, RateSource};
pub use session::Session;
