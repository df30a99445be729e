//! 線性比例尺

use scm_core::{AxisDomain, PlotRect, ScmError};

use crate::primitives::AxisTick;

/// 單軸刻度數上限
pub const MAX_TICKS: usize = 1_000;

/// 線性比例尺：數值域 → 螢幕座標
///
/// `pixel = start + (v - min) / (max - min) * extent`，數值域外的值照公式映射，不截斷。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: AxisDomain,
    start: f64,
    extent: f64,
}

impl LinearScale {
    /// 創建比例尺，數值域寬度為零時回傳 `DegenerateDomain`
    pub fn try_new(domain: AxisDomain, start: f64, extent: f64) -> scm_core::Result<Self> {
        if domain.is_degenerate() {
            tracing::warn!(
                "數值域退化 [{}, {}]，拒絕建立比例尺",
                domain.min,
                domain.max
            );
            return Err(ScmError::DegenerateDomain(domain.min));
        }

        Ok(Self {
            domain,
            start,
            extent,
        })
    }

    /// 橫軸：min → 左緣，max → 右緣
    pub fn horizontal(domain: AxisDomain, rect: &PlotRect) -> scm_core::Result<Self> {
        Self::try_new(domain, rect.origin_x, rect.width)
    }

    /// 縱軸：min → 下緣，max → 上緣（螢幕 y 反轉）
    pub fn vertical(domain: AxisDomain, rect: &PlotRect) -> scm_core::Result<Self> {
        Self::try_new(domain, rect.origin_y + rect.height, -rect.height)
    }

    pub fn domain(&self) -> AxisDomain {
        self.domain
    }

    pub fn map(&self, value: f64) -> f64 {
        self.start + self.domain.normalize(value) * self.extent
    }

    /// 以固定間距產生刻度（含兩端）
    ///
    /// 間距無效或刻度數超過 [`MAX_TICKS`] 時回傳空集合。
    pub fn ticks(&self, step: f64) -> Vec<AxisTick> {
        if !(step > 0.0 && step.is_finite()) {
            return Vec::new();
        }

        let intervals = (self.domain.span().abs() / step + 1e-9).floor();
        if intervals >= MAX_TICKS as f64 {
            tracing::warn!(
                "刻度間距 {} 過小，超過 {} 個刻度，不產生刻度",
                step,
                MAX_TICKS
            );
            return Vec::new();
        }

        let low = self.domain.min.min(self.domain.max);
        let count = intervals as usize + 1;
        let decimals = tick_decimals(step);

        (0..count)
            .map(|k| {
                let value = low + k as f64 * step;
                AxisTick {
                    value,
                    position: self.map(value),
                    label: format!("{value:.decimals$}"),
                }
            })
            .collect()
    }
}

/// 刻度標籤所需的小數位數（最多 2 位）
fn tick_decimals(step: f64) -> usize {
    (0..2)
        .find(|&places| {
            let scaled = step * 10f64.powi(places as i32);
            (scaled - scaled.round()).abs() < 1e-9
        })
        .unwrap_or(2)
}
