//! 供應商模型

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::criteria::Filterable;
use crate::palette::{Color, Grade};
use crate::{check_percentage, ScmError};

/// 風險等級
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::Low, RiskLevel::Medium, RiskLevel::High];

    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "低リスク",
            RiskLevel::Medium => "中リスク",
            RiskLevel::High => "高リスク",
        }
    }

    /// 風險顏色（低→綠、中→琥珀、高→紅）
    pub fn color(&self) -> Color {
        match self {
            RiskLevel::Low => Color::GREEN,
            RiskLevel::Medium => Color::AMBER,
            RiskLevel::High => Color::RED,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }
}

impl FromStr for RiskLevel {
    type Err = ScmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|risk| risk.as_str() == s)
            .ok_or_else(|| ScmError::InputShape(format!("未知的風險等級: {s}")))
    }
}

/// 供應商績效
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SupplierPerformance {
    /// 準時交貨率（%）
    pub on_time_delivery: f64,

    /// 品質分數（%）
    pub quality_score: f64,

    /// 成本競爭力（%）
    pub cost_competitiveness: f64,

    /// 風險等級
    pub risk_level: RiskLevel,
}

impl SupplierPerformance {
    pub fn new(
        on_time_delivery: f64,
        quality_score: f64,
        cost_competitiveness: f64,
        risk_level: RiskLevel,
    ) -> Self {
        Self {
            on_time_delivery,
            quality_score,
            cost_competitiveness,
            risk_level,
        }
    }
}

/// 聯絡資訊
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// 供應商
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplierRecord {
    /// 供應商ID
    pub id: String,

    /// 名稱
    pub name: String,

    /// 分類（原材料、部品、工具…）
    pub category: String,

    #[serde(default)]
    pub contact: ContactInfo,

    /// 評分（0-5）
    pub rating: f64,

    /// 績效
    pub performance: SupplierPerformance,

    /// 認證
    #[serde(default)]
    pub certifications: Vec<String>,

    /// 付款條件
    #[serde(default)]
    pub payment_terms: String,

    /// 提前期（天）
    #[serde(default)]
    pub lead_time_days: u32,

    /// 最小訂購金額
    #[serde(default)]
    pub minimum_order: Decimal,

    /// 是否啟用
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl SupplierRecord {
    /// 創建新的供應商
    pub fn new(
        id: String,
        name: String,
        category: String,
        rating: f64,
        performance: SupplierPerformance,
    ) -> Self {
        Self {
            id,
            name,
            category,
            contact: ContactInfo::default(),
            rating,
            performance,
            certifications: Vec::new(),
            payment_terms: String::new(),
            lead_time_days: 0,
            minimum_order: Decimal::ZERO,
            is_active: true,
        }
    }

    /// 建構器模式：設置聯絡資訊
    pub fn with_contact(mut self, contact: ContactInfo) -> Self {
        self.contact = contact;
        self
    }

    /// 建構器模式：設置認證
    pub fn with_certifications(mut self, certifications: Vec<String>) -> Self {
        self.certifications = certifications;
        self
    }

    /// 建構器模式：設置交易條件
    pub fn with_terms(mut self, payment_terms: String, lead_time_days: u32, minimum_order: Decimal) -> Self {
        self.payment_terms = payment_terms;
        self.lead_time_days = lead_time_days;
        self.minimum_order = minimum_order;
        self
    }

    /// 建構器模式：設置啟用狀態
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn risk(&self) -> RiskLevel {
        self.performance.risk_level
    }

    pub fn is_high_risk(&self) -> bool {
        self.performance.risk_level == RiskLevel::High
    }

    /// 截斷名稱作為圖表標籤（依字元計算）
    pub fn short_label(&self, max_chars: usize) -> String {
        let mut label: String = self.name.chars().take(max_chars).collect();
        label.push_str("...");
        label
    }

    pub fn delivery_grade(&self) -> Grade {
        Grade::on_time_delivery(self.performance.on_time_delivery)
    }

    pub fn quality_grade(&self) -> Grade {
        Grade::quality(self.performance.quality_score)
    }

    pub fn cost_grade(&self) -> Grade {
        Grade::cost_competitiveness(self.performance.cost_competitiveness)
    }

    /// 驗證記錄形狀
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.is_empty() {
            return Err(ScmError::InputShape("供應商缺少 id".to_string()));
        }

        if !(0.0..=5.0).contains(&self.rating) {
            return Err(ScmError::InputShape(format!(
                "{}: 評分必須介於 0 到 5，實際為 {}",
                self.id, self.rating
            )));
        }

        check_percentage("on_time_delivery", &self.id, self.performance.on_time_delivery)?;
        check_percentage("quality_score", &self.id, self.performance.quality_score)?;
        check_percentage(
            "cost_competitiveness",
            &self.id,
            self.performance.cost_competitiveness,
        )
    }
}

impl Filterable for SupplierRecord {
    fn category(&self) -> Option<&str> {
        Some(self.category.as_str())
    }

    fn risk_level(&self) -> Option<RiskLevel> {
        Some(self.performance.risk_level)
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.category.as_str()]
    }
}
