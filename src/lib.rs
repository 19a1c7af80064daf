pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{FieldDefaults, FormInput, LocalStorage};
pub use config::toml_config::TomlConfig;
pub use core::batch::{BatchCalculator, BatchSummary};
pub use core::calculator::{calculate, compute_staff_needed, compute_total_cost};
pub use core::engine::CalculatorEngine;
pub use domain::model::{CostFormat, StaffingReport, StaffingRequest, StaffingResult};
pub use utils::error::{CalcError, Result};
