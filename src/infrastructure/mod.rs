//! 基础设施模块

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod logger;
