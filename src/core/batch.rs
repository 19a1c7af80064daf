use crate::adapters::form::{FieldDefaults, FormInput};
use crate::core::calculator::calculate;
use crate::core::{RequestSource, Storage};
use crate::domain::model::StaffingRequest;
use crate::utils::error::{CalcError, Result};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct BatchOutputRow {
    required_hours: f64,
    hours_per_employee: f64,
    hourly_rate: f64,
    staff_needed: u64,
    total_cost: f64,
}

/// A row that could not be calculated. `line` is the 1-based line in the
/// input file where the record starts, header included.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    pub line: u64,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub processed: usize,
    pub rejected: Vec<RejectedRow>,
    pub total_staff: u64,
    pub total_cost: f64,
}

/// Calculates every row of a CSV file and writes a CSV of results.
pub struct BatchCalculator<S: Storage> {
    storage: S,
    defaults: FieldDefaults,
    fail_fast: bool,
}

impl<S: Storage> BatchCalculator<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            defaults: FieldDefaults::default(),
            fail_fast: false,
        }
    }

    pub fn with_defaults(mut self, defaults: FieldDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Stop at the first bad row instead of skipping it.
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Parses every data row of `input_path`. Rows that cannot be read or
    /// validated come back as `Err` next to their line number; only a missing
    /// file or an unreadable header fails the whole call.
    pub fn read_requests(&self, input_path: &str) -> Result<Vec<(u64, Result<StaffingRequest>)>> {
        let data = self.storage.read_file(input_path)?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(data.as_slice());
        let headers = reader.headers()?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let row = match record {
                Ok(record) => {
                    let line = record.position().map_or(0, |pos| pos.line());
                    (line, self.parse_record(&record, &headers))
                }
                Err(e) => {
                    let line = e.position().map_or(0, |pos| pos.line());
                    (line, Err(CalcError::from(e)))
                }
            };
            rows.push(row);
        }
        Ok(rows)
    }

    fn parse_record(
        &self,
        record: &csv::StringRecord,
        headers: &csv::StringRecord,
    ) -> Result<StaffingRequest> {
        if record.len() != headers.len() {
            return Err(CalcError::invalid_input(
                "row",
                record.iter().collect::<Vec<_>>().join(","),
                format!("expected {} columns, found {}", headers.len(), record.len()),
            ));
        }

        let form: FormInput = record.deserialize(Some(headers))?;
        form.with_defaults(self.defaults).staffing_request()
    }

    pub fn run(&self, input_path: &str, output_path: &str) -> Result<BatchSummary> {
        tracing::info!("Reading staffing requests from {}", input_path);
        let rows = self.read_requests(input_path)?;

        let mut writer = csv::Writer::from_writer(Vec::new());
        let mut summary = BatchSummary::default();

        for (line, request) in rows {
            let outcome = request.and_then(|request| Ok((request, calculate(&request)?)));
            match outcome {
                Ok((request, result)) => {
                    writer.serialize(BatchOutputRow {
                        required_hours: request.required_hours,
                        hours_per_employee: request.hours_per_employee,
                        hourly_rate: request.hourly_rate,
                        staff_needed: result.staff_needed,
                        total_cost: result.total_cost,
                    })?;
                    summary.processed += 1;
                    summary.total_staff = summary.total_staff.saturating_add(result.staff_needed);
                    summary.total_cost += result.total_cost;
                }
                Err(e) if self.fail_fast => {
                    tracing::error!("Line {}: {}", line, e);
                    return Err(e);
                }
                Err(e) => {
                    tracing::warn!("Skipping line {}: {}", line, e);
                    summary.rejected.push(RejectedRow {
                        line,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let output = writer
            .into_inner()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        self.storage.write_file(output_path, &output)?;

        tracing::info!(
            processed = summary.processed,
            rejected = summary.rejected.len(),
            "Batch results written to {}",
            output_path
        );
        Ok(summary)
    }
}
