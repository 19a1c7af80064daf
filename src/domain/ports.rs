use crate::domain::model::StaffingRequest;
use crate::utils::error::Result;

/// Anything that can supply the numbers for one calculation: parsed form
/// fields, command-line arguments, a batch row.
pub trait RequestSource: Send + Sync {
    fn staffing_request(&self) -> Result<StaffingRequest>;
}

impl RequestSource for StaffingRequest {
    fn staffing_request(&self) -> Result<StaffingRequest> {
        Ok(*self)
    }
}

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
