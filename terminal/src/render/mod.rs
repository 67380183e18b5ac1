pub mod field;
pub mod traits;
pub mod types;
