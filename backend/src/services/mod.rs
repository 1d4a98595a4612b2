//! Business logic services
//!
//! Services wrap the shared calculators with logging and counters so the
//! route handlers stay thin.

pub mod calculations;
pub mod nutrition;
pub mod profile;

pub use calculations::CalculationService;
pub use nutrition::NutritionService;
pub use profile::ProfileService;
