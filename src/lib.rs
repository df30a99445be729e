//! # SCM Dashboard
//!
//! 供應鏈管理儀表板核心：篩選彙總引擎、圖表座標計算與狀態持有者。

pub use scm_calc as calc;
pub use scm_chart as chart;
pub use scm_core as model;
pub use scm_state as state;

/// 常用類型
pub mod prelude {
    pub use scm_calc::{AggregationEngine, ForecastSummary, PurchaseOrderSummary, SupplierStats};
    pub use scm_chart::{
        project_scatter, project_series, LineChartGeometry, ScatterGeometry, SeasonalChart,
        SupplierMatrix,
    };
    pub use scm_core::{
        AxisDomain, DashboardConfig, FilterCriteria, ForecastMethod, ForecastRecord, Period,
        PlotRect, Point, RiskLevel, ScmError, Selection, SupplierRecord,
    };
    pub use scm_state::{
        DashboardSnapshot, DashboardState, ForecastGenerator, GenerationOutcome, GenerationTicket,
    };
}
