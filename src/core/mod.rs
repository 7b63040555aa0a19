pub mod alerts;
pub mod classifier;
pub mod commands;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod feed;
pub mod model;
pub mod parser;
pub mod preferences;
pub mod valuation;
