// Common module - shared types and utilities across all modules

pub mod config;
pub mod error;
pub mod helpers;
pub mod validation;

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use error::{ClientError, ConflictKind, FieldErrors};
pub use helpers::safe_token_log;
pub use validation::{RequiredFields, ValidationError, ValidationResult, Validator};

pub type RecordId = i64;
pub type ClientResult<T> = Result<T, ClientError>;
