pub mod batch;
pub mod calculator;
pub mod engine;

pub use crate::domain::model::{StaffingReport, StaffingRequest, StaffingResult};
pub use crate::domain::ports::{RequestSource, Storage};
pub use crate::utils::error::Result;
