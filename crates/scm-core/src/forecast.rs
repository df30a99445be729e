//! 需求預測模型

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::criteria::Filterable;
use crate::palette::{Color, Grade};
use crate::{check_percentage, Period, ScmError};

/// 預測手法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ForecastMethod {
    /// 歷史資料
    Historical,
    /// 季節調整
    Seasonal,
    /// 趨勢分析
    Trend,
    /// AI 預測
    Ai,
}

impl ForecastMethod {
    pub const ALL: [ForecastMethod; 4] = [
        ForecastMethod::Historical,
        ForecastMethod::Seasonal,
        ForecastMethod::Trend,
        ForecastMethod::Ai,
    ];

    /// 顯示標籤
    pub fn label(&self) -> &'static str {
        match self {
            ForecastMethod::Historical => "履歴ベース",
            ForecastMethod::Seasonal => "季節調整",
            ForecastMethod::Trend => "トレンド分析",
            ForecastMethod::Ai => "AI予測",
        }
    }

    /// 徽章顏色
    pub fn color(&self) -> Color {
        match self {
            ForecastMethod::Historical => Color::BLUE,
            ForecastMethod::Seasonal => Color::ORANGE,
            ForecastMethod::Trend => Color::PURPLE,
            ForecastMethod::Ai => Color::RED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ForecastMethod::Historical => "historical",
            ForecastMethod::Seasonal => "seasonal",
            ForecastMethod::Trend => "trend",
            ForecastMethod::Ai => "ai",
        }
    }
}

impl FromStr for ForecastMethod {
    type Err = ScmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| ScmError::InputShape(format!("未知的預測手法: {s}")))
    }
}

/// 需求預測記錄
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    /// 預測ID
    pub id: String,

    /// 物料ID
    pub product_id: String,

    /// 物料名稱
    pub product_name: String,

    /// 預測期間
    pub period: Period,

    /// 預測數量
    pub forecast_quantity: Decimal,

    /// 實績數量（期間結束後才有）
    #[serde(default)]
    pub actual_quantity: Option<Decimal>,

    /// 預測精度（%），僅在有實績時存在
    #[serde(default)]
    pub accuracy: Option<f64>,

    /// 預測手法
    pub method: ForecastMethod,

    /// 信賴度（%）
    pub confidence: f64,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl ForecastRecord {
    /// 創建新的預測記錄
    pub fn new(
        id: String,
        product_id: String,
        product_name: String,
        period: Period,
        method: ForecastMethod,
        forecast_quantity: Decimal,
        confidence: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            product_id,
            product_name,
            period,
            forecast_quantity,
            actual_quantity: None,
            accuracy: None,
            method,
            confidence,
            created_at: now,
            updated_at: now,
        }
    }

    /// 建構器模式：設置實績數量與精度
    pub fn with_actual(mut self, actual_quantity: Decimal, accuracy: f64) -> Self {
        self.actual_quantity = Some(actual_quantity);
        self.accuracy = Some(accuracy);
        self
    }

    /// 建構器模式：僅設置實績數量（精度尚未計算）
    pub fn with_actual_quantity(mut self, actual_quantity: Decimal) -> Self {
        self.actual_quantity = Some(actual_quantity);
        self
    }

    /// 建構器模式：設置時間戳記
    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self.updated_at = at;
        self
    }

    /// 是否已有實績
    pub fn has_actual(&self) -> bool {
        self.actual_quantity.is_some()
    }

    pub fn accuracy_grade(&self) -> Grade {
        Grade::accuracy(self.accuracy)
    }

    pub fn confidence_grade(&self) -> Grade {
        Grade::confidence(self.confidence)
    }

    /// 驗證記錄形狀
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.is_empty() {
            return Err(ScmError::InputShape("預測記錄缺少 id".to_string()));
        }

        if self.forecast_quantity < Decimal::ZERO {
            return Err(ScmError::InputShape(format!(
                "{}: 預測數量不可為負數",
                self.id
            )));
        }

        if let Some(actual) = self.actual_quantity {
            if actual < Decimal::ZERO {
                return Err(ScmError::InputShape(format!(
                    "{}: 實績數量不可為負數",
                    self.id
                )));
            }
        }

        if let Some(accuracy) = self.accuracy {
            if self.actual_quantity.is_none() {
                return Err(ScmError::InputShape(format!(
                    "{}: 沒有實績數量卻有預測精度",
                    self.id
                )));
            }
            check_percentage("accuracy", &self.id, accuracy)?;
        }

        check_percentage("confidence", &self.id, self.confidence)
    }
}

impl Filterable for ForecastRecord {
    fn period(&self) -> Option<Period> {
        Some(self.period)
    }

    fn method(&self) -> Option<ForecastMethod> {
        Some(self.method)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.product_name.as_str(), self.product_id.as_str()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ForecastRecord {
        ForecastRecord::new(
            "DF001".to_string(),
            "INV001".to_string(),
            "スチール板材 5mm".to_string(),
            "2025-02".parse().unwrap(),
            ForecastMethod::Ai,
            Decimal::from(85),
            88.0,
        )
    }

    #[test]
    fn test_create_forecast() {
        let forecast = record().with_actual(Decimal::from(82), 96.5);

        assert_eq!(forecast.product_id, "INV001");
        assert_eq!(forecast.actual_quantity, Some(Decimal::from(82)));
        assert!(forecast.has_actual());
        assert_eq!(forecast.accuracy_grade(), Grade::Good);
        assert!(forecast.validate().is_ok());
    }

    #[test]
    fn test_accuracy_requires_actual() {
        let mut forecast = record();
        forecast.accuracy = Some(90.0);

        assert!(matches!(forecast.validate(), Err(ScmError::InputShape(_))));
    }

    #[test]
    fn test_actual_without_accuracy_is_valid() {
        let forecast = record().with_actual_quantity(Decimal::from(80));

        assert!(forecast.validate().is_ok());
        assert_eq!(forecast.accuracy_grade(), Grade::Unknown);
    }

    #[test]
    fn test_reject_out_of_range_confidence() {
        let mut forecast = record();
        forecast.confidence = 120.0;
        assert!(forecast.validate().is_err());

        forecast.confidence = 80.0;
        forecast.forecast_quantity = Decimal::from(-1);
        assert!(forecast.validate().is_err());
    }

    #[test]
    fn test_method_labels_and_parse() {
        assert_eq!(ForecastMethod::Seasonal.label(), "季節調整");
        assert_eq!(ForecastMethod::Ai.color(), Color::RED);
        assert_eq!("trend".parse::<ForecastMethod>().unwrap(), ForecastMethod::Trend);
        assert!("weekly".parse::<ForecastMethod>().is_err());
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "id": "DF003",
            "product_id": "INV003",
            "product_name": "アルミニウム角材",
            "period": "2025-02",
            "forecast_quantity": 65,
            "method": "trend",
            "confidence": 75,
            "created_at": "2025-01-15T10:00:00Z",
            "updated_at": "2025-01-15T10:00:00Z"
        }"#;

        let forecast: ForecastRecord = serde_json::from_str(json).unwrap();
        assert_eq!(forecast.actual_quantity, None);
        assert_eq!(forecast.accuracy, None);
        assert_eq!(forecast.forecast_quantity, Decimal::from(65));
    }
}
