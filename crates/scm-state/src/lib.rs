//! # SCM Dashboard State
//!
//! 儀表板狀態持有者、資料快照載入與預測生成（模擬）

pub mod generation;
pub mod snapshot;
pub mod store;

// Re-export 主要類型
pub use generation::{ForecastGenerator, GenerationTicket};
pub use snapshot::DashboardSnapshot;
pub use store::{DashboardState, ForecastPanel, GenerationOutcome, OrderPanel, SupplierPanel};
