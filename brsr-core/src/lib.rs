pub mod aggregate;
pub mod error;
pub mod export;
pub mod factors;
pub mod report;
