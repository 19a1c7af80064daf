use crate::adapters::form::FieldDefaults;
use crate::domain::model::CostFormat;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_path, validate_positive, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const MAX_PRECISION: usize = 10;
const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub calculator: CalculatorConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub batch: BatchConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "default_precision")]
    pub precision: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            precision: default_precision(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_precision() -> usize {
    2
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub hours_per_employee: Option<f64>,
    pub hourly_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: default_log_format(),
        }
    }
}

fn default_log_format() -> String {
    "compact".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    #[serde(default)]
    pub fail_fast: bool,
}

impl TomlConfig {
    /// Loads and parses a TOML config file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn cost_format(&self) -> CostFormat {
        CostFormat {
            currency_symbol: self.calculator.currency_symbol.clone(),
            precision: self.calculator.precision,
        }
    }

    pub fn field_defaults(&self) -> FieldDefaults {
        FieldDefaults {
            hours_per_employee: self.defaults.hours_per_employee,
            hourly_rate: self.defaults.hourly_rate,
        }
    }

    pub fn log_format(&self) -> &str {
        &self.logging.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_range("calculator.precision", self.calculator.precision, 0, MAX_PRECISION)?;

        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(CalcError::invalid_input(
                "logging.format",
                &self.logging.format,
                format!("Unsupported format. Valid formats: {}", LOG_FORMATS.join(", ")),
            ));
        }

        if let Some(hours) = self.defaults.hours_per_employee {
            validate_positive("defaults.hours_per_employee", hours)?;
        }
        if let Some(rate) = self.defaults.hourly_rate {
            crate::utils::validation::validate_non_negative("defaults.hourly_rate", rate)?;
        }

        if let Some(path) = &self.batch.input_path {
            validate_path("batch.input_path", path)?;
        }
        if let Some(path) = &self.batch.output_path {
            validate_path("batch.output_path", path)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert_eq!(config.calculator.currency_symbol, "$");
        assert_eq!(config.calculator.precision, 2);
        assert_eq!(config.log_format(), "compact");
        assert!(config.defaults.hours_per_employee.is_none());
        assert!(!config.batch.fail_fast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[calculator]
currency_symbol = "€"
precision = 0

[defaults]
hours_per_employee = 37.5
hourly_rate = 18.0

[logging]
format = "json"

[batch]
input_path = "requests.csv"
output_path = "results.csv"
fail_fast = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.cost_format().format(1234.4), "€1234");
        assert_eq!(config.field_defaults().hours_per_employee, Some(37.5));
        assert_eq!(config.field_defaults().hourly_rate, Some(18.0));
        assert_eq!(config.log_format(), "json");
        assert_eq!(config.batch.input_path.as_deref(), Some("requests.csv"));
        assert!(config.batch.fail_fast);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STAFFING_TEST_HOURLY_RATE", "31.5");

        let toml_content = r#"
[defaults]
hourly_rate = ${STAFFING_TEST_HOURLY_RATE}
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.defaults.hourly_rate, Some(31.5));

        std::env::remove_var("STAFFING_TEST_HOURLY_RATE");
    }

    #[test]
    fn test_unset_env_var_is_left_in_place() {
        let toml_content = r#"
[batch]
input_path = "${STAFFING_TEST_UNSET_VARIABLE}/in.csv"
"#;
        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.batch.input_path.as_deref(),
            Some("${STAFFING_TEST_UNSET_VARIABLE}/in.csv")
        );
    }

    #[test]
    fn test_config_validation() {
        let bad_precision = TomlConfig::from_toml_str("[calculator]\nprecision = 11\n").unwrap();
        assert!(bad_precision.validate().is_err());

        let bad_format = TomlConfig::from_toml_str("[logging]\nformat = \"xml\"\n").unwrap();
        assert!(bad_format.validate().is_err());

        let bad_hours =
            TomlConfig::from_toml_str("[defaults]\nhours_per_employee = 0.0\n").unwrap();
        assert!(bad_hours.validate().is_err());
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert!(matches!(
            TomlConfig::from_toml_str("[server]\nport = 5000\n"),
            Err(CalcError::TomlError(_))
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[defaults]\nhours_per_employee = 40.0\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.defaults.hours_per_employee, Some(40.0));
    }
}
