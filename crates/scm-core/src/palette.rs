//! 顯示用色票與分級

use serde::Serialize;

/// 顯示顏色（十六進位色碼）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    pub const GREEN: Color = Color("#27ae60");
    pub const AMBER: Color = Color("#f39c12");
    pub const RED: Color = Color("#e74c3c");
    pub const GREY: Color = Color("#95a5a6");
    pub const BLUE: Color = Color("#3498db");
    pub const ORANGE: Color = Color("#e67e22");
    pub const PURPLE: Color = Color("#9b59b6");
    pub const YELLOW: Color = Color("#f1c40f");

    pub fn hex(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// 指標分級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Grade {
    /// 良好
    Good,
    /// 尚可
    Fair,
    /// 不佳
    Poor,
    /// 無資料
    Unknown,
}

impl Grade {
    /// 依門檻分級：`value >= good` 為良好，`value >= fair` 為尚可
    pub fn from_thresholds(value: f64, good: f64, fair: f64) -> Self {
        if value >= good {
            Grade::Good
        } else if value >= fair {
            Grade::Fair
        } else {
            Grade::Poor
        }
    }

    /// 預測精度分級（缺值為無資料）
    pub fn accuracy(accuracy: Option<f64>) -> Self {
        match accuracy {
            Some(value) => Self::from_thresholds(value, 95.0, 85.0),
            None => Grade::Unknown,
        }
    }

    /// 信賴度分級
    pub fn confidence(confidence: f64) -> Self {
        Self::from_thresholds(confidence, 85.0, 70.0)
    }

    /// 準時交貨率分級
    pub fn on_time_delivery(rate: f64) -> Self {
        Self::from_thresholds(rate, 90.0, 80.0)
    }

    /// 品質分數分級
    pub fn quality(score: f64) -> Self {
        Self::from_thresholds(score, 95.0, 85.0)
    }

    /// 成本競爭力分級
    pub fn cost_competitiveness(score: f64) -> Self {
        Self::from_thresholds(score, 90.0, 80.0)
    }

    pub fn color(&self) -> Color {
        match self {
            Grade::Good => Color::GREEN,
            Grade::Fair => Color::AMBER,
            Grade::Poor => Color::RED,
            Grade::Unknown => Color::GREY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(96.5), Grade::Good)]
    #[case(Some(95.0), Grade::Good)]
    #[case(Some(90.0), Grade::Fair)]
    #[case(Some(70.0), Grade::Poor)]
    #[case(Some(0.0), Grade::Poor)]
    #[case(None, Grade::Unknown)]
    fn test_accuracy_grade(#[case] accuracy: Option<f64>, #[case] expected: Grade) {
        assert_eq!(Grade::accuracy(accuracy), expected);
    }

    #[test]
    fn test_grade_colors() {
        assert_eq!(Grade::confidence(88.0).color(), Color::GREEN);
        assert_eq!(Grade::confidence(75.0).color(), Color::AMBER);
        assert_eq!(Grade::on_time_delivery(82.4).color(), Color::AMBER);
        assert_eq!(Grade::quality(91.5).color(), Color::AMBER);
        assert_eq!(Grade::cost_competitiveness(78.9).color(), Color::RED);
        assert_eq!(Grade::Unknown.color().hex(), "#95a5a6");
    }

    #[test]
    fn test_zero_accuracy_is_measured() {
        assert_eq!(Grade::accuracy(Some(0.0)).color(), Color::RED);
        assert_eq!(Grade::accuracy(None).color(), Color::GREY);
    }
}
