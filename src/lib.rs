pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{AppConfig, Environment};
pub use crate::core::gateway::ApiGateway;
pub use crate::core::summary::{
    financial_summary_processor, process_cash_data, process_ie_data, process_raising_data,
    process_spending_data,
};
pub use crate::utils::error::{FecError, Result};
