use crate::core::calculator::calculate;
use crate::core::RequestSource;
use crate::domain::model::{CostFormat, StaffingReport};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Runs one calculation end to end: read the request from its source,
/// validate it, then compute staff and cost.
pub struct CalculatorEngine<S: RequestSource> {
    source: S,
    cost_format: CostFormat,
}

impl<S: RequestSource> CalculatorEngine<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            cost_format: CostFormat::default(),
        }
    }

    pub fn with_cost_format(mut self, cost_format: CostFormat) -> Self {
        self.cost_format = cost_format;
        self
    }

    pub fn run(&self) -> Result<StaffingReport> {
        let request = self.source.staffing_request()?;
        tracing::debug!(?request, "Received staffing request");

        if let Err(e) = request.validate() {
            tracing::warn!("Rejected staffing request: {}", e);
            return Err(e);
        }

        let result = calculate(&request)?;

        tracing::info!(
            required_hours = request.required_hours,
            hours_per_employee = request.hours_per_employee,
            staff_needed = result.staff_needed,
            total_cost = result.total_cost,
            "Staffing calculated"
        );

        Ok(StaffingReport::new(request, result).with_cost_format(self.cost_format.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::StaffingRequest;
    use crate::utils::error::CalcError;

    struct FailingSource;

    impl RequestSource for FailingSource {
        fn staffing_request(&self) -> Result<StaffingRequest> {
            Err(CalcError::MissingField {
                field: "required_hours".to_string(),
            })
        }
    }

    #[test]
    fn test_engine_runs_request() {
        let engine = CalculatorEngine::new(StaffingRequest::new(100.0, 40.0, 25.0));
        let report = engine.run().unwrap();
        assert_eq!(report.result.staff_needed, 3);
        assert_eq!(report.result.total_cost, 3000.0);
    }

    #[test]
    fn test_engine_rejects_invalid_request_before_calculating() {
        let engine = CalculatorEngine::new(StaffingRequest::new(100.0, 0.0, 25.0));
        assert!(matches!(engine.run(), Err(CalcError::InvalidInput { field, .. }) if field == "hours_per_employee"));
    }

    #[test]
    fn test_engine_propagates_source_error() {
        let engine = CalculatorEngine::new(FailingSource);
        assert!(matches!(engine.run(), Err(CalcError::MissingField { .. })));
    }

    #[test]
    fn test_engine_applies_cost_format() {
        let engine = CalculatorEngine::new(StaffingRequest::new(10.0, 4.0, 10.0)).with_cost_format(
            CostFormat {
                currency_symbol: "£".to_string(),
                precision: 1,
            },
        );
        let report = engine.run().unwrap();
        assert_eq!(report.to_string(), "Staff needed: 3\nTotal cost: £120.0");
    }
}
