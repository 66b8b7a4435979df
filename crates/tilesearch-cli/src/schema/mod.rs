pub mod puzzle;
pub mod report;
