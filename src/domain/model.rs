use crate::utils::error::Result;
use crate::utils::validation::{validate_non_negative, validate_positive, Validate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inputs of one staffing calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingRequest {
    pub required_hours: f64,
    pub hours_per_employee: f64,
    pub hourly_rate: f64,
}

impl StaffingRequest {
    pub fn new(required_hours: f64, hours_per_employee: f64, hourly_rate: f64) -> Self {
        Self {
            required_hours,
            hours_per_employee,
            hourly_rate,
        }
    }
}

impl Validate for StaffingRequest {
    fn validate(&self) -> Result<()> {
        validate_non_negative("required_hours", self.required_hours)?;
        validate_positive("hours_per_employee", self.hours_per_employee)?;
        validate_non_negative("hourly_rate", self.hourly_rate)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StaffingResult {
    pub staff_needed: u64,
    pub total_cost: f64,
}

/// How money amounts are rendered in text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostFormat {
    pub currency_symbol: String,
    pub precision: usize,
}

impl Default for CostFormat {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            precision: 2,
        }
    }
}

impl CostFormat {
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.*}", self.currency_symbol, self.precision, amount)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaffingReport {
    pub request: StaffingRequest,
    pub result: StaffingResult,
    #[serde(skip)]
    pub cost_format: CostFormat,
}

impl StaffingReport {
    pub fn new(request: StaffingRequest, result: StaffingResult) -> Self {
        Self {
            request,
            result,
            cost_format: CostFormat::default(),
        }
    }

    pub fn with_cost_format(mut self, cost_format: CostFormat) -> Self {
        self.cost_format = cost_format;
        self
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for StaffingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Staff needed: {}", self.result.staff_needed)?;
        write!(
            f,
            "Total cost: {}",
            self.cost_format.format(self.result.total_cost)
        )
    }
}
