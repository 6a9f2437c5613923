pub mod edit_distance;
pub mod error_rate;
pub mod normalization;
pub mod report;
pub mod whitespace;
