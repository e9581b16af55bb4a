pub mod analytics;
pub mod config;
pub mod dataset;
pub mod enrichment;
pub mod exceptions;
pub mod implementation;
pub mod report;
pub mod session;
