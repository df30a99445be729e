//! # SCM Core
//!
//! 核心資料模型與類型定義

pub mod config;
pub mod criteria;
pub mod forecast;
pub mod geometry;
pub mod palette;
pub mod period;
pub mod purchase;
pub mod seasonal;
pub mod supplier;

// Re-export 主要類型
pub use config::{DashboardConfig, GenerationConfig, LineChartConfig, ScatterConfig};
pub use criteria::{Filterable, FilterCriteria, Selection};
pub use forecast::{ForecastMethod, ForecastRecord};
pub use geometry::{AxisDomain, PlotRect, Point};
pub use palette::{Color, Grade};
pub use period::Period;
pub use purchase::{OrderPriority, OrderStatus, PurchaseOrder, PurchaseOrderItem};
pub use seasonal::{SeasonalPoint, SeasonalTrend};
pub use supplier::{ContactInfo, RiskLevel, SupplierPerformance, SupplierRecord};

/// SCM 錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum ScmError {
    #[error("輸入資料格式錯誤: {0}")]
    InputShape(String),

    #[error("無效的期間（需為 YYYY-MM）: {0}")]
    InvalidPeriod(String),

    #[error("數值域退化，無法進行線性投影: min = max = {0}")]
    DegenerateDomain(f64),

    #[error("配置錯誤: {0}")]
    InvalidConfig(String),

    #[error("JSON 解析錯誤: {0}")]
    Json(#[from] serde_json::Error),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, ScmError>;

/// 檢查百分比欄位（0-100）
pub(crate) fn check_percentage(field: &str, owner: &str, value: f64) -> Result<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(ScmError::InputShape(format!(
            "{owner}: {field} 必須介於 0 到 100，實際為 {value}"
        )));
    }
    Ok(())
}
