//! Staffing arithmetic: how many people a workload needs and what they cost.

use crate::domain::model::{StaffingRequest, StaffingResult};
use crate::utils::error::{CalcError, Result};

/// Smallest staff count whose combined hours cover `required_hours`.
///
/// Fails with [`CalcError::DivisionError`] unless `hours_per_employee > 0`.
/// No other checks are made: a negative workload needs no staff, and an
/// unbounded one saturates at `u64::MAX`.
pub fn compute_staff_needed(required_hours: f64, hours_per_employee: f64) -> Result<u64> {
    if hours_per_employee.is_nan() || hours_per_employee <= 0.0 {
        return Err(CalcError::DivisionError { hours_per_employee });
    }

    let mut staff = (required_hours / hours_per_employee).ceil();

    // The quotient is rounded before `ceil` sees it, so it can land one off
    // in either direction. Settle on the count the multiplication agrees with.
    if staff * hours_per_employee < required_hours {
        staff += 1.0;
    } else if staff >= 1.0 && (staff - 1.0) * hours_per_employee >= required_hours {
        staff -= 1.0;
    }

    if staff <= 0.0 {
        return Ok(0);
    }
    Ok(staff as u64)
}

/// Wage cost of `staff_needed` people each working `hours_per_employee` at
/// `hourly_rate`.
pub fn compute_total_cost(staff_needed: u64, hourly_rate: f64, hours_per_employee: f64) -> f64 {
    staff_needed as f64 * hourly_rate * hours_per_employee
}

pub fn calculate(request: &StaffingRequest) -> Result<StaffingResult> {
    let staff_needed = compute_staff_needed(request.required_hours, request.hours_per_employee)?;
    let total_cost = compute_total_cost(staff_needed, request.hourly_rate, request.hours_per_employee);

    Ok(StaffingResult {
        staff_needed,
        total_cost,
    })
}
