//! 摘要統計

use std::borrow::Borrow;

use rust_decimal::Decimal;
use scm_core::{ForecastRecord, PurchaseOrder, RiskLevel, SupplierRecord};
use serde::Serialize;

use crate::AggregationEngine;

/// 需求預測摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastSummary {
    /// 預測筆數
    pub count: usize,

    /// 已有實績的筆數
    pub with_actual: usize,

    /// 平均預測精度（%，僅計入有精度的記錄）
    pub average_accuracy: f64,

    /// 平均信賴度（%）
    pub average_confidence: f64,

    /// 總預測數量
    pub total_forecast_quantity: Decimal,
}

impl ForecastSummary {
    /// 計算摘要（接受記錄本身或其參考）
    pub fn summarize<R: Borrow<ForecastRecord>>(records: &[R]) -> Self {
        let rows: Vec<&ForecastRecord> = records.iter().map(Borrow::borrow).collect();

        Self {
            count: AggregationEngine::count(&rows),
            with_actual: AggregationEngine::count_where(&rows, |f| f.has_actual()),
            average_accuracy: AggregationEngine::average(&rows, |f| f.accuracy),
            average_confidence: AggregationEngine::average(&rows, |f| Some(f.confidence)),
            total_forecast_quantity: rows.iter().map(|f| f.forecast_quantity).sum(),
        }
    }
}

/// 供應商統計
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierStats {
    /// 登錄供應商數
    pub total: usize,

    /// 啟用中
    pub active: usize,

    /// 平均評分
    pub average_rating: f64,

    /// 平均準時交貨率（%）
    pub average_on_time_delivery: f64,

    /// 平均品質分數（%）
    pub average_quality: f64,

    /// 高風險供應商數
    pub high_risk: usize,

    /// 各風險等級的供應商數
    pub by_risk: Vec<(RiskLevel, usize)>,
}

impl SupplierStats {
    pub fn summarize<R: Borrow<SupplierRecord>>(records: &[R]) -> Self {
        let rows: Vec<&SupplierRecord> = records.iter().map(Borrow::borrow).collect();

        let by_risk = RiskLevel::ALL
            .into_iter()
            .map(|risk| {
                (
                    risk,
                    AggregationEngine::count_where(&rows, |s| s.risk() == risk),
                )
            })
            .collect();

        Self {
            total: AggregationEngine::count(&rows),
            active: AggregationEngine::count_where(&rows, |s| s.is_active),
            average_rating: AggregationEngine::average(&rows, |s| Some(s.rating)),
            average_on_time_delivery: AggregationEngine::average(&rows, |s| {
                Some(s.performance.on_time_delivery)
            }),
            average_quality: AggregationEngine::average(&rows, |s| {
                Some(s.performance.quality_score)
            }),
            high_risk: AggregationEngine::count_where(&rows, |s| s.is_high_risk()),
            by_risk,
        }
    }
}

/// 採購訂單摘要
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseOrderSummary {
    pub count: usize,

    /// 進行中（未交貨且未取消）
    pub open: usize,

    /// 已有交貨實績
    pub delivered: usize,

    /// 訂單總額
    pub total_amount: Decimal,

    /// 準時交貨率（%，僅計入已有交貨實績的訂單）
    pub on_time_rate: f64,
}

impl PurchaseOrderSummary {
    pub fn summarize<R: Borrow<PurchaseOrder>>(records: &[R]) -> Self {
        let rows: Vec<&PurchaseOrder> = records.iter().map(Borrow::borrow).collect();

        Self {
            count: AggregationEngine::count(&rows),
            open: AggregationEngine::count_where(&rows, |o| o.is_open()),
            delivered: AggregationEngine::count_where(&rows, |o| o.actual_delivery_date.is_some()),
            total_amount: rows.iter().map(|o| o.total_amount).sum(),
            on_time_rate: AggregationEngine::average(&rows, |o| {
                o.delivered_on_time()
                    .map(|on_time| if on_time { 100.0 } else { 0.0 })
            }),
        }
    }
}
