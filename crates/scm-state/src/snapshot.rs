//! 儀表板資料快照（資料匯入邊界）

use std::collections::HashSet;

use scm_core::{ForecastRecord, PurchaseOrder, ScmError, SeasonalPoint, SupplierRecord};
use serde::{Deserialize, Serialize};

const SAMPLE_JSON: &str = include_str!("../data/sample_dashboard.json");

/// 儀表板資料快照
///
/// 記錄在此驗證後才交給引擎，引擎本身假設輸入形狀正確。
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    #[serde(default)]
    pub forecasts: Vec<ForecastRecord>,

    #[serde(default)]
    pub seasonal_factors: Vec<SeasonalPoint>,

    #[serde(default)]
    pub suppliers: Vec<SupplierRecord>,

    #[serde(default)]
    pub purchase_orders: Vec<PurchaseOrder>,
}

impl DashboardSnapshot {
    /// 內建的示範資料
    pub fn sample() -> scm_core::Result<Self> {
        Self::from_json_str(SAMPLE_JSON)
    }

    /// 從 JSON 載入並驗證
    pub fn from_json_str(json: &str) -> scm_core::Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;

        tracing::info!(
            "載入快照：預測 {} 筆，季節係數 {} 筆，供應商 {} 筆，採購訂單 {} 筆",
            snapshot.forecasts.len(),
            snapshot.seasonal_factors.len(),
            snapshot.suppliers.len(),
            snapshot.purchase_orders.len()
        );

        Ok(snapshot)
    }

    pub fn to_json_string(&self) -> scm_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 驗證所有記錄與跨記錄約束
    pub fn validate(&self) -> scm_core::Result<()> {
        let mut forecast_ids = HashSet::new();
        for forecast in &self.forecasts {
            forecast.validate()?;
            if !forecast_ids.insert(forecast.id.as_str()) {
                return Err(duplicate("預測", &forecast.id));
            }
        }

        let mut months = HashSet::new();
        for point in &self.seasonal_factors {
            point.validate()?;
            if !months.insert((point.category.as_str(), point.month)) {
                return Err(ScmError::InputShape(format!(
                    "分類 {} 的 {} 月季節係數重複",
                    point.category, point.month
                )));
            }
        }

        let mut supplier_ids = HashSet::new();
        for supplier in &self.suppliers {
            supplier.validate()?;
            if !supplier_ids.insert(supplier.id.as_str()) {
                return Err(duplicate("供應商", &supplier.id));
            }
        }

        let mut order_ids = HashSet::new();
        for order in &self.purchase_orders {
            order.validate()?;
            if !order_ids.insert(order.id.as_str()) {
                return Err(duplicate("採購訂單", &order.id));
            }
            if !supplier_ids.contains(order.supplier_id.as_str()) {
                return Err(ScmError::InputShape(format!(
                    "{}: 找不到供應商 {}",
                    order.id, order.supplier_id
                )));
            }
        }

        Ok(())
    }
}

fn duplicate(kind: &str, id: &str) -> ScmError {
    ScmError::InputShape(format!("{kind} id 重複: {id}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_sample_snapshot_loads() {
        let snapshot = DashboardSnapshot::sample().unwrap();

        assert_eq!(snapshot.forecasts.len(), 4);
        assert_eq!(snapshot.seasonal_factors.len(), 12);
        assert_eq!(snapshot.suppliers.len(), 4);
        assert_eq!(snapshot.purchase_orders.len(), 2);

        let df003 = &snapshot.forecasts[2];
        assert_eq!(df003.actual_quantity, None);
        assert_eq!(df003.accuracy, None);
        assert_eq!(snapshot.purchase_orders[0].total_amount, Decimal::from(750_000));
    }

    #[test]
    fn test_json_roundtrip_preserves_snapshot() {
        let snapshot = DashboardSnapshot::sample().unwrap();
        let json = snapshot.to_json_string().unwrap();

        assert_eq!(DashboardSnapshot::from_json_str(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_reject_accuracy_without_actual() {
        let json = r#"{
            "forecasts": [{
                "id": "DF009",
                "product_id": "INV009",
                "product_name": "X",
                "period": "2025-02",
                "forecast_quantity": 10,
                "accuracy": 90.0,
                "method": "ai",
                "confidence": 80,
                "created_at": "2025-01-15T10:00:00Z",
                "updated_at": "2025-01-15T10:00:00Z"
            }]
        }"#;

        assert!(matches!(
            DashboardSnapshot::from_json_str(json),
            Err(ScmError::InputShape(_))
        ));
    }

    #[test]
    fn test_reject_missing_required_field() {
        let json = r#"{ "seasonal_factors": [{ "month": 1, "category": "原材料" }] }"#;

        assert!(matches!(
            DashboardSnapshot::from_json_str(json),
            Err(ScmError::Json(_))
        ));
    }

    #[test]
    fn test_reject_duplicate_seasonal_month() {
        let mut snapshot = DashboardSnapshot::sample().unwrap();
        let duplicate = snapshot.seasonal_factors[0].clone();
        snapshot.seasonal_factors.push(duplicate);

        assert!(snapshot.validate().is_err());
    }

    #[test]
    fn test_reject_unknown_supplier_reference() {
        let mut snapshot = DashboardSnapshot::sample().unwrap();
        snapshot.purchase_orders[0].supplier_id = "SUP999".to_string();

        assert!(matches!(snapshot.validate(), Err(ScmError::InputShape(_))));
    }

    #[test]
    fn test_reject_duplicate_forecast_id() {
        let mut snapshot = DashboardSnapshot::sample().unwrap();
        let duplicate = snapshot.forecasts[0].clone();
        snapshot.forecasts.push(duplicate);

        assert!(snapshot.validate().is_err());
    }
}
