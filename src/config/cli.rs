use crate::adapters::form::{FieldDefaults, HOURLY_RATE, HOURS_PER_EMPLOYEE, REQUIRED_HOURS};
use crate::core::RequestSource;
use crate::domain::model::StaffingRequest;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_required_field, Validate};
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "staffing-calc")]
#[command(about = "Compute how many staff a workload needs and what they cost")]
pub struct CliConfig {
    /// Total hours of work required
    #[arg(long, allow_negative_numbers = true)]
    pub required_hours: Option<f64>,

    /// Hours each employee works
    #[arg(long, allow_negative_numbers = true)]
    pub hours_per_employee: Option<f64>,

    /// Hourly rate paid per employee
    #[arg(long, allow_negative_numbers = true)]
    pub hourly_rate: Option<f64>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(skip)]
    #[serde(skip)]
    pub defaults: FieldDefaults,
}

impl CliConfig {
    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

impl RequestSource for CliConfig {
    fn staffing_request(&self) -> Result<StaffingRequest> {
        let hours_per_employee = self.hours_per_employee.or(self.defaults.hours_per_employee);
        let hourly_rate = self.hourly_rate.or(self.defaults.hourly_rate);

        let request = StaffingRequest {
            required_hours: *validate_required_field(REQUIRED_HOURS, &self.required_hours)?,
            hours_per_employee: *validate_required_field(
                HOURS_PER_EMPLOYEE,
                &hours_per_employee,
            )?,
            hourly_rate: *validate_required_field(HOURLY_RATE, &hourly_rate)?,
        };
        request.validate()?;
        Ok(request)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            crate::utils::validation::validate_path("config", path)?;
        }
        if self.required_hours.is_none() {
            return Err(CalcError::MissingField {
                field: REQUIRED_HOURS.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_arguments() {
        let config = CliConfig::parse_from([
            "staffing-calc",
            "--required-hours",
            "100",
            "--hours-per-employee",
            "40",
            "--hourly-rate",
            "25",
            "--format",
            "json",
        ]);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(
            config.staffing_request().unwrap(),
            StaffingRequest::new(100.0, 40.0, 25.0)
        );
    }

    #[test]
    fn test_defaults_fill_missing_arguments() {
        let config = CliConfig::parse_from(["staffing-calc", "--required-hours", "100"])
            .with_defaults(FieldDefaults {
                hours_per_employee: Some(40.0),
                hourly_rate: Some(25.0),
            });
        assert_eq!(
            config.staffing_request().unwrap(),
            StaffingRequest::new(100.0, 40.0, 25.0)
        );
    }

    #[test]
    fn test_command_line_wins_over_defaults() {
        let config = CliConfig::parse_from([
            "staffing-calc",
            "--required-hours",
            "100",
            "--hourly-rate",
            "30",
        ])
        .with_defaults(FieldDefaults {
            hours_per_employee: Some(40.0),
            hourly_rate: Some(25.0),
        });
        assert_eq!(config.staffing_request().unwrap().hourly_rate, 30.0);
    }

    #[test]
    fn test_missing_rate_without_default() {
        let config = CliConfig::parse_from([
            "staffing-calc",
            "--required-hours",
            "100",
            "--hours-per-employee",
            "40",
        ]);
        assert!(matches!(
            config.staffing_request(),
            Err(CalcError::MissingField { field }) if field == HOURLY_RATE
        ));
    }

    #[test]
    fn test_negative_hours_rejected() {
        let config = CliConfig::parse_from([
            "staffing-calc",
            "--required-hours",
            "100",
            "--hours-per-employee",
            "-40",
            "--hourly-rate",
            "25",
        ]);
        assert!(config.staffing_request().is_err());
    }

    #[test]
    fn test_validate_requires_hours() {
        let config = CliConfig::parse_from(["staffing-calc"]);
        assert!(config.validate().is_err());
    }
}
