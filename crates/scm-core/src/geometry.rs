//! 繪圖區域與數值域

use serde::{Deserialize, Serialize};

/// 螢幕座標點
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 可繪圖矩形（螢幕單位，y 向下遞增）
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotRect {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotRect {
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.origin_x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.origin_y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin_x + self.width / 2.0,
            self.origin_y + self.height / 2.0,
        )
    }

    /// 點是否落在矩形內（含邊界）
    pub fn contains(&self, point: Point) -> bool {
        (self.origin_x..=self.right()).contains(&point.x)
            && (self.origin_y..=self.bottom()).contains(&point.y)
    }
}

/// 輸入數值域 `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

impl AxisDomain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// 百分比數值域 `[0, 100]`
    pub fn percent() -> Self {
        Self::new(0.0, 100.0)
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// 寬度為零或非有限值時無法線性映射
    pub fn is_degenerate(&self) -> bool {
        let span = self.span();
        span == 0.0 || !span.is_finite()
    }

    /// 數值域中點
    pub fn midpoint(&self) -> f64 {
        self.min + self.span() / 2.0
    }

    /// 值在數值域中的相對位置（0 = min，1 = max），不做截斷
    pub fn normalize(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}
