// Adapters layer: turn outside inputs (form fields, files on disk) into domain values.

pub mod form;
pub mod storage;

pub use form::{FieldDefaults, FormInput};
pub use storage::LocalStorage;
