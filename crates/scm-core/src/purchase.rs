//! 採購訂單模型

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::criteria::Filterable;
use crate::palette::Color;
use crate::ScmError;

/// 訂單狀態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// 草稿
    Draft,
    /// 已送出
    Sent,
    /// 已確認
    Confirmed,
    /// 已交貨
    Delivered,
    /// 已取消
    Cancelled,
}

impl OrderStatus {
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Draft => "下書き",
            OrderStatus::Sent => "送信済み",
            OrderStatus::Confirmed => "確認済み",
            OrderStatus::Delivered => "納品済み",
            OrderStatus::Cancelled => "キャンセル",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            OrderStatus::Draft => Color::GREY,
            OrderStatus::Sent => Color::BLUE,
            OrderStatus::Confirmed => Color::AMBER,
            OrderStatus::Delivered => Color::GREEN,
            OrderStatus::Cancelled => Color::RED,
        }
    }

    /// 是否仍在進行中（未交貨且未取消）
    pub fn is_open(&self) -> bool {
        matches!(
            self,
            OrderStatus::Draft | OrderStatus::Sent | OrderStatus::Confirmed
        )
    }
}

/// 訂單優先級
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPriority {
    Low,
    Normal,
    High,
    Urgent,
}

impl OrderPriority {
    pub fn label(&self) -> &'static str {
        match self {
            OrderPriority::Low => "低",
            OrderPriority::Normal => "通常",
            OrderPriority::High => "高",
            OrderPriority::Urgent => "緊急",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            OrderPriority::Low => Color::GREY,
            OrderPriority::Normal => Color::BLUE,
            OrderPriority::High => Color::AMBER,
            OrderPriority::Urgent => Color::RED,
        }
    }
}

/// 採購訂單明細
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrderItem {
    /// 物料ID
    pub product_id: String,

    /// 物料名稱
    pub product_name: String,

    /// 數量
    pub quantity: Decimal,

    /// 單價
    pub unit_price: Decimal,

    /// 小計
    pub total_price: Decimal,

    /// 交貨日期
    pub delivery_date: NaiveDate,

    /// 規格說明
    #[serde(default)]
    pub specifications: Option<String>,
}

impl PurchaseOrderItem {
    /// 創建新的明細（小計 = 數量 × 單價）
    pub fn new(
        product_id: String,
        product_name: String,
        quantity: Decimal,
        unit_price: Decimal,
        delivery_date: NaiveDate,
    ) -> Self {
        Self {
            product_id,
            product_name,
            quantity,
            unit_price,
            total_price: quantity * unit_price,
            delivery_date,
            specifications: None,
        }
    }

    /// 建構器模式：設置規格
    pub fn with_specifications(mut self, specifications: String) -> Self {
        self.specifications = Some(specifications);
        self
    }
}

/// 採購訂單
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseOrder {
    /// 訂單編號
    pub id: String,

    /// 供應商ID
    pub supplier_id: String,

    /// 供應商名稱
    pub supplier_name: String,

    /// 明細
    pub items: Vec<PurchaseOrderItem>,

    /// 訂單總額
    pub total_amount: Decimal,

    /// 幣別
    pub currency: String,

    /// 下單日期
    pub order_date: NaiveDate,

    /// 預計交貨日期
    pub expected_delivery_date: NaiveDate,

    /// 實際交貨日期
    #[serde(default)]
    pub actual_delivery_date: Option<NaiveDate>,

    pub status: OrderStatus,

    pub priority: OrderPriority,

    /// 付款條件
    #[serde(default)]
    pub terms: String,

    #[serde(default)]
    pub notes: Option<String>,
}

impl PurchaseOrder {
    /// 創建新的採購訂單（草稿、通常優先級）
    pub fn new(
        id: String,
        supplier_id: String,
        supplier_name: String,
        order_date: NaiveDate,
        expected_delivery_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            supplier_id,
            supplier_name,
            items: Vec::new(),
            total_amount: Decimal::ZERO,
            currency: "JPY".to_string(),
            order_date,
            expected_delivery_date,
            actual_delivery_date: None,
            status: OrderStatus::Draft,
            priority: OrderPriority::Normal,
            terms: String::new(),
            notes: None,
        }
    }

    /// 建構器模式：加入明細並更新總額
    pub fn with_item(mut self, item: PurchaseOrderItem) -> Self {
        self.total_amount += item.total_price;
        self.items.push(item);
        self
    }

    /// 建構器模式：設置狀態
    pub fn with_status(mut self, status: OrderStatus) -> Self {
        self.status = status;
        self
    }

    /// 建構器模式：設置優先級
    pub fn with_priority(mut self, priority: OrderPriority) -> Self {
        self.priority = priority;
        self
    }

    /// 建構器模式：設置實際交貨日期
    pub fn with_actual_delivery(mut self, date: NaiveDate) -> Self {
        self.actual_delivery_date = Some(date);
        self
    }

    /// 建構器模式：設置備註
    pub fn with_notes(mut self, notes: String) -> Self {
        self.notes = Some(notes);
        self
    }

    /// 明細小計加總
    pub fn items_total(&self) -> Decimal {
        self.items.iter().map(|item| item.total_price).sum()
    }

    pub fn is_open(&self) -> bool {
        self.status.is_open()
    }

    /// 是否準時交貨（尚未交貨時為 None）
    pub fn delivered_on_time(&self) -> Option<bool> {
        self.actual_delivery_date
            .map(|actual| actual <= self.expected_delivery_date)
    }

    /// 驗證記錄形狀
    pub fn validate(&self) -> crate::Result<()> {
        if self.id.is_empty() {
            return Err(ScmError::InputShape("採購訂單缺少 id".to_string()));
        }

        for item in &self.items {
            if item.quantity < Decimal::ZERO || item.unit_price < Decimal::ZERO {
                return Err(ScmError::InputShape(format!(
                    "{}: 明細 {} 的數量或單價為負數",
                    self.id, item.product_id
                )));
            }
            if item.total_price != item.quantity * item.unit_price {
                return Err(ScmError::InputShape(format!(
                    "{}: 明細 {} 小計與數量×單價不符",
                    self.id, item.product_id
                )));
            }
        }

        if self.total_amount != self.items_total() {
            return Err(ScmError::InputShape(format!(
                "{}: 訂單總額 {} 與明細加總 {} 不符",
                self.id,
                self.total_amount,
                self.items_total()
            )));
        }

        Ok(())
    }
}

impl Filterable for PurchaseOrder {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.id.as_str(), self.supplier_name.as_str()]
    }
}
