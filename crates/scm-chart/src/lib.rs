//! # SCM Chart Geometry
//!
//! 圖表座標計算：將數列投影到繪圖區域，輸出與繪圖 API 無關的點、線段、矩形與文字錨點。

pub mod line;
pub mod primitives;
pub mod scale;
pub mod scatter;

// Re-export 主要類型
pub use line::{project_series, LineChartGeometry, LinePoint, ReferenceLine, SeasonalChart};
pub use primitives::{AxisTick, Polyline, Segment, TextAlign, TextAnchor};
pub use scale::LinearScale;
pub use scatter::{
    project_scatter, Quadrant, QuadrantRegion, ScatterDatum, ScatterGeometry, ScatterPoint,
    SupplierMatrix,
};
