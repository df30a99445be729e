//! 季節調整係數

use serde::{Deserialize, Serialize};

use crate::criteria::Filterable;
use crate::palette::Color;
use crate::ScmError;

/// 季節調整係數點
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonalPoint {
    /// 月份（1-12）
    pub month: u32,

    /// 調整係數（通常 0.5-1.5）
    pub factor: f64,

    /// 物料分類
    pub category: String,
}

impl SeasonalPoint {
    pub fn new(month: u32, factor: f64, category: String) -> Self {
        Self {
            month,
            factor,
            category,
        }
    }

    pub fn trend(&self) -> SeasonalTrend {
        SeasonalTrend::from_factor(self.factor)
    }

    /// 月份標籤
    pub fn month_label(&self) -> String {
        format!("{}月", self.month)
    }

    /// 驗證記錄形狀
    pub fn validate(&self) -> crate::Result<()> {
        if !(1..=12).contains(&self.month) {
            return Err(ScmError::InputShape(format!(
                "{}: 月份必須介於 1 到 12，實際為 {}",
                self.category, self.month
            )));
        }

        if !(self.factor > 0.0 && self.factor.is_finite()) {
            return Err(ScmError::InputShape(format!(
                "{} {}月: 調整係數必須為正數，實際為 {}",
                self.category, self.month, self.factor
            )));
        }

        Ok(())
    }
}

impl Filterable for SeasonalPoint {
    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.category.as_str()]
    }
}

/// 季節趨勢（相對於基準 1.0）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SeasonalTrend {
    /// 需求增加期（係數 > 1.0）
    Increase,
    /// 通常期（係數 = 1.0）
    Normal,
    /// 需求減少期（係數 < 1.0）
    Decrease,
}

impl SeasonalTrend {
    pub fn from_factor(factor: f64) -> Self {
        if factor > 1.0 {
            SeasonalTrend::Increase
        } else if factor < 1.0 {
            SeasonalTrend::Decrease
        } else {
            SeasonalTrend::Normal
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeasonalTrend::Increase => "需要増加期",
            SeasonalTrend::Normal => "通常期",
            SeasonalTrend::Decrease => "需要減少期",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            SeasonalTrend::Increase => Color::GREEN,
            SeasonalTrend::Normal => Color::BLUE,
            SeasonalTrend::Decrease => Color::RED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_from_factor() {
        assert_eq!(SeasonalTrend::from_factor(1.4), SeasonalTrend::Increase);
        assert_eq!(SeasonalTrend::from_factor(1.0), SeasonalTrend::Normal);
        assert_eq!(SeasonalTrend::from_factor(0.7), SeasonalTrend::Decrease);
        assert_eq!(SeasonalTrend::Decrease.color(), Color::RED);
    }

    #[test]
    fn test_validate_seasonal_point() {
        let point = SeasonalPoint::new(10, 1.4, "原材料".to_string());
        assert!(point.validate().is_ok());
        assert_eq!(point.month_label(), "10月");

        assert!(SeasonalPoint::new(13, 1.0, "原材料".to_string()).validate().is_err());
        assert!(SeasonalPoint::new(3, 0.0, "原材料".to_string()).validate().is_err());
    }
}
