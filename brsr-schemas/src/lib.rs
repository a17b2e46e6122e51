pub mod activity;
pub mod company;
pub mod file_formats;
pub mod report;
