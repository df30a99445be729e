//! 散佈圖投影（供應商評估矩陣）

use std::borrow::Borrow;

use scm_core::{
    AxisDomain, Color, PlotRect, Point, RiskLevel, ScatterConfig, ScmError, SupplierRecord,
};
use serde::Serialize;

use crate::primitives::{AxisTick, Segment, TextAnchor};
use crate::scale::LinearScale;

/// 象限
///
/// 橫軸為成本競爭力、縱軸為準時交貨率；落在分界線上視為「高」。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    /// 左上：成本競爭力低、交貨率高
    NeedsImprovement,
    /// 右上：成本競爭力高、交貨率高
    StrategicPartner,
    /// 左下：成本競爭力低、交貨率低
    CostFocused,
    /// 右下：成本競爭力高、交貨率低
    StableSupply,
}

impl Quadrant {
    pub const ALL: [Quadrant; 4] = [
        Quadrant::NeedsImprovement,
        Quadrant::StrategicPartner,
        Quadrant::CostFocused,
        Quadrant::StableSupply,
    ];

    pub fn classify(high_x: bool, high_y: bool) -> Self {
        match (high_x, high_y) {
            (false, true) => Quadrant::NeedsImprovement,
            (true, true) => Quadrant::StrategicPartner,
            (false, false) => Quadrant::CostFocused,
            (true, false) => Quadrant::StableSupply,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Quadrant::NeedsImprovement => "要改善",
            Quadrant::StrategicPartner => "戦略的パートナー",
            Quadrant::CostFocused => "コスト重視",
            Quadrant::StableSupply => "安定供給",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Quadrant::NeedsImprovement => Color::RED,
            Quadrant::StrategicPartner => Color::GREEN,
            Quadrant::CostFocused => Color::YELLOW,
            Quadrant::StableSupply => Color::BLUE,
        }
    }

    fn is_right(&self) -> bool {
        matches!(self, Quadrant::StrategicPartner | Quadrant::StableSupply)
    }

    fn is_top(&self) -> bool {
        matches!(self, Quadrant::NeedsImprovement | Quadrant::StrategicPartner)
    }
}

/// 散佈圖輸入資料
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterDatum {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub risk: RiskLevel,
    pub label: String,
}

impl ScatterDatum {
    /// 由供應商建立：x = 成本競爭力，y = 準時交貨率
    pub fn from_supplier(supplier: &SupplierRecord, label_chars: usize) -> Self {
        Self {
            id: supplier.id.clone(),
            x: supplier.performance.cost_competitiveness,
            y: supplier.performance.on_time_delivery,
            risk: supplier.risk(),
            label: supplier.short_label(label_chars),
        }
    }
}

/// 散佈圖上的點
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub id: String,
    pub position: Point,
    pub color: Color,
    pub quadrant: Quadrant,
    pub label: TextAnchor,
}

/// 象限區域
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuadrantRegion {
    pub quadrant: Quadrant,
    pub rect: PlotRect,
    pub color: Color,
    pub label: TextAnchor,
}

/// 散佈圖幾何
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterGeometry {
    pub points: Vec<ScatterPoint>,
    pub quadrants: Vec<QuadrantRegion>,

    /// 橫軸分界線的螢幕 x
    pub midline_x: f64,

    /// 縱軸分界線的螢幕 y
    pub midline_y: f64,

    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    pub x_axis: Segment,
    pub y_axis: Segment,
}

impl ScatterGeometry {
    pub fn region(&self, quadrant: Quadrant) -> Option<&QuadrantRegion> {
        self.quadrants.iter().find(|region| region.quadrant == quadrant)
    }
}

/// 將 (x, y) 資料投影到繪圖區域並劃分象限
///
/// 兩軸各自線性映射，y 反轉；數值域外的值不截斷。
/// 數值域須為遞增，分界線須落在數值域內，否則回傳 `InvalidConfig`。
pub fn project_scatter(
    data: &[ScatterDatum],
    config: &ScatterConfig,
) -> scm_core::Result<ScatterGeometry> {
    let rect = config.rect;
    let x_scale = LinearScale::horizontal(config.x_domain, &rect)?;
    let y_scale = LinearScale::vertical(config.y_domain, &rect)?;

    let midline_value_x = config.effective_midline_x();
    let midline_value_y = config.effective_midline_y();
    check_axis("x", config.x_domain, midline_value_x)?;
    check_axis("y", config.y_domain, midline_value_y)?;

    let midline_x = x_scale.map(midline_value_x);
    let midline_y = y_scale.map(midline_value_y);

    let points = data
        .iter()
        .map(|datum| {
            let position = Point::new(x_scale.map(datum.x), y_scale.map(datum.y));
            ScatterPoint {
                id: datum.id.clone(),
                position,
                color: datum.risk.color(),
                quadrant: Quadrant::classify(datum.x >= midline_value_x, datum.y >= midline_value_y),
                label: TextAnchor::centered(
                    position.x,
                    position.y - config.label_offset,
                    datum.label.clone(),
                ),
            }
        })
        .collect();

    let quadrants = Quadrant::ALL
        .into_iter()
        .map(|quadrant| {
            let (left, right) = if quadrant.is_right() {
                (midline_x, rect.right())
            } else {
                (rect.origin_x, midline_x)
            };
            let (top, bottom) = if quadrant.is_top() {
                (rect.origin_y, midline_y)
            } else {
                (midline_y, rect.bottom())
            };
            let region = PlotRect::new(left, top, right - left, bottom - top);
            let center = region.center();

            QuadrantRegion {
                quadrant,
                rect: region,
                color: quadrant.color(),
                label: TextAnchor::centered(center.x, center.y, quadrant.label()),
            }
        })
        .collect();

    tracing::debug!(
        "散佈圖投影：{} 點，分界線 ({:.2}, {:.2})",
        data.len(),
        midline_x,
        midline_y
    );

    Ok(ScatterGeometry {
        points,
        quadrants,
        midline_x,
        midline_y,
        x_ticks: x_scale.ticks(config.tick_step),
        y_ticks: y_scale.ticks(config.tick_step),
        x_axis: Segment::horizontal(rect.origin_x, rect.right(), rect.bottom()),
        y_axis: Segment::vertical(rect.origin_x, rect.origin_y, rect.bottom()),
    })
}

/// 象限以螢幕座標劃分，點以數值分類；兩者一致需要遞增數值域與域內分界線
fn check_axis(axis: &str, domain: AxisDomain, midline: f64) -> scm_core::Result<()> {
    if domain.min > domain.max {
        return Err(ScmError::InvalidConfig(format!(
            "{axis} 軸數值域必須遞增: [{}, {}]",
            domain.min, domain.max
        )));
    }

    if !(domain.min..=domain.max).contains(&midline) {
        return Err(ScmError::InvalidConfig(format!(
            "{axis} 軸分界線 {midline} 不在數值域 [{}, {}] 內",
            domain.min, domain.max
        )));
    }

    Ok(())
}

/// 供應商評估矩陣（成本競爭力 × 準時交貨率）
pub struct SupplierMatrix;

impl SupplierMatrix {
    pub fn build<R: Borrow<SupplierRecord>>(
        suppliers: &[R],
        config: &ScatterConfig,
    ) -> scm_core::Result<ScatterGeometry> {
        let data: Vec<ScatterDatum> = suppliers
            .iter()
            .map(|supplier| {
                ScatterDatum::from_supplier(
                    Borrow::<SupplierRecord>::borrow(supplier),
                    config.label_chars,
                )
            })
            .collect();

        project_scatter(&data, config)
    }
}
