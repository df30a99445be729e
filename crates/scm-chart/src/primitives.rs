//! 繪圖原語（與繪圖 API 無關）

use scm_core::Point;
use serde::Serialize;

/// 線段
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

impl Segment {
    pub fn new(from: Point, to: Point) -> Self {
        Self { from, to }
    }

    pub fn horizontal(x1: f64, x2: f64, y: f64) -> Self {
        Self::new(Point::new(x1, y), Point::new(x2, y))
    }

    pub fn vertical(x: f64, y1: f64, y2: f64) -> Self {
        Self::new(Point::new(x, y1), Point::new(x, y2))
    }
}

/// 折線
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 轉為 SVG path 指令（`M x y L x y ...`）
    pub fn to_svg_path(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let command = if i == 0 { "M" } else { "L" };
                format!("{command} {:.2} {:.2}", p.x, p.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// 文字對齊
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    Start,
    Middle,
    End,
}

/// 文字錨點
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextAnchor {
    pub position: Point,
    pub text: String,
    pub align: TextAlign,
}

impl TextAnchor {
    pub fn new(x: f64, y: f64, text: impl Into<String>, align: TextAlign) -> Self {
        Self {
            position: Point::new(x, y),
            text: text.into(),
            align,
        }
    }

    pub fn centered(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(x, y, text, TextAlign::Middle)
    }
}

/// 軸刻度
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    /// 數值域中的值
    pub value: f64,

    /// 沿軸的螢幕座標
    pub position: f64,

    pub label: String,
}
