//! # SCM Calculation Engine
//!
//! 篩選與彙總統計引擎

pub mod aggregation;
pub mod summary;

// Re-export 主要類型
pub use aggregation::AggregationEngine;
pub use summary::{ForecastSummary, PurchaseOrderSummary, SupplierStats};
