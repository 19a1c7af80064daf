use crate::core::RequestSource;
use crate::domain::model::StaffingRequest;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{parse_number, Validate};
use serde::Deserialize;
use std::collections::HashMap;

pub const REQUIRED_HOURS: &str = "required_hours";
pub const HOURS_PER_EMPLOYEE: &str = "hours_per_employee";
pub const HOURLY_RATE: &str = "hourly_rate";

/// Fallback values for fields the submitter left blank.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FieldDefaults {
    pub hours_per_employee: Option<f64>,
    pub hourly_rate: Option<f64>,
}

/// Raw calculator form submission, one string per field, as posted.
///
/// Also used as the row type of batch CSV files, so blank cells and missing
/// columns behave the same as blank form fields.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FormInput {
    #[serde(default)]
    pub required_hours: Option<String>,
    #[serde(default)]
    pub hours_per_employee: Option<String>,
    #[serde(default)]
    pub hourly_rate: Option<String>,
    #[serde(skip)]
    pub defaults: FieldDefaults,
}

impl FormInput {
    pub fn from_fields<K, V, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut form = FormInput::default();
        for (key, value) in fields {
            let slot = match key.as_ref() {
                REQUIRED_HOURS => &mut form.required_hours,
                HOURS_PER_EMPLOYEE => &mut form.hours_per_employee,
                HOURLY_RATE => &mut form.hourly_rate,
                other => {
                    tracing::debug!("Ignoring unknown form field '{}'", other);
                    continue;
                }
            };
            *slot = Some(value.into());
        }
        form
    }

    pub fn from_map(fields: &HashMap<String, String>) -> Self {
        Self::from_fields(fields.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }

    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    fn field(name: &str, raw: &Option<String>, default: Option<f64>) -> Result<f64> {
        match raw.as_deref().map(str::trim) {
            Some(value) if !value.is_empty() => parse_number(name, value),
            _ => default.ok_or_else(|| CalcError::MissingField {
                field: name.to_string(),
            }),
        }
    }
}

impl RequestSource for FormInput {
    /// Parses and range-checks all three fields. The returned request is safe
    /// to hand to the calculator.
    fn staffing_request(&self) -> Result<StaffingRequest> {
        let request = StaffingRequest {
            required_hours: Self::field(REQUIRED_HOURS, &self.required_hours, None)?,
            hours_per_employee: Self::field(
                HOURS_PER_EMPLOYEE,
                &self.hours_per_employee,
                self.defaults.hours_per_employee,
            )?,
            hourly_rate: Self::field(HOURLY_RATE, &self.hourly_rate, self.defaults.hourly_rate)?,
        };
        request.validate()?;
        Ok(request)
    }
}
