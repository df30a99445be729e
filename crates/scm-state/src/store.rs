//! 儀表板狀態
//!
//! 持有記錄集合，每次查詢都把目前的篩選條件明確傳給計算與圖表模組。

use chrono::Utc;
use rand::rngs::ThreadRng;
use scm_calc::{AggregationEngine, ForecastSummary, PurchaseOrderSummary, SupplierStats};
use scm_chart::{LineChartGeometry, ScatterGeometry, SeasonalChart, SupplierMatrix};
use scm_core::{
    DashboardConfig, FilterCriteria, ForecastRecord, Period, PurchaseOrder, ScmError,
    SupplierRecord,
};
use serde::Serialize;

use crate::generation::{ForecastGenerator, GenerationTicket};
use crate::snapshot::DashboardSnapshot;

/// 生成完成的處理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationOutcome {
    /// 已追加到預測列表
    Applied,
    /// 畫面已卸載或憑證失效，結果丟棄
    Discarded,
}

/// 需求預測面板
#[derive(Debug, Clone, Serialize)]
pub struct ForecastPanel<'a> {
    pub rows: Vec<&'a ForecastRecord>,
    pub summary: ForecastSummary,
}

/// 供應商面板
#[derive(Debug, Clone, Serialize)]
pub struct SupplierPanel<'a> {
    pub rows: Vec<&'a SupplierRecord>,

    /// 全部供應商的統計（摘要卡片）
    pub overall: SupplierStats,

    /// 篩選後的統計
    pub filtered: SupplierStats,

    /// 分類選單（出現順序）
    pub categories: Vec<String>,
}

/// 採購訂單面板
#[derive(Debug, Clone, Serialize)]
pub struct OrderPanel<'a> {
    pub rows: Vec<&'a PurchaseOrder>,
    pub summary: PurchaseOrderSummary,
}

/// 儀表板狀態持有者
///
/// 記錄只能追加。預測生成分為「開始」與「完成」兩步，
/// 中間畫面若被卸載，完成時的結果會被丟棄。
#[derive(Debug, Clone)]
pub struct DashboardState {
    snapshot: DashboardSnapshot,
    config: DashboardConfig,

    /// 掛載會話編號，每次重新掛載遞增
    session: u64,
    mounted: bool,
    pending: Option<GenerationTicket>,
}

impl DashboardState {
    /// 創建狀態（快照先經驗證）
    pub fn new(snapshot: DashboardSnapshot, config: DashboardConfig) -> scm_core::Result<Self> {
        snapshot.validate()?;

        Ok(Self {
            snapshot,
            config,
            session: 1,
            mounted: true,
            pending: None,
        })
    }

    /// 以示範資料與預設配置創建
    pub fn sample() -> scm_core::Result<Self> {
        Self::new(DashboardSnapshot::sample()?, DashboardConfig::default())
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn forecasts(&self) -> &[ForecastRecord] {
        &self.snapshot.forecasts
    }

    pub fn suppliers(&self) -> &[SupplierRecord] {
        &self.snapshot.suppliers
    }

    pub fn purchase_orders(&self) -> &[PurchaseOrder] {
        &self.snapshot.purchase_orders
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&GenerationTicket> {
        self.pending.as_ref()
    }

    /// 追加一筆預測（驗證形狀與 id 唯一性）
    pub fn append_forecast(&mut self, record: ForecastRecord) -> scm_core::Result<()> {
        record.validate()?;

        if self.snapshot.forecasts.iter().any(|f| f.id == record.id) {
            return Err(ScmError::InputShape(format!("預測 id 重複: {}", record.id)));
        }

        tracing::info!("追加預測 {}（{}）", record.id, record.period);
        self.snapshot.forecasts.push(record);
        Ok(())
    }

    /// 依配置建立預測生成器
    pub fn generator(&self) -> ForecastGenerator<ThreadRng> {
        ForecastGenerator::new(self.config.generation.clone())
    }

    /// 開始預測生成
    ///
    /// 同時只允許一個進行中的生成。
    pub fn begin_generation(&mut self, period: Period) -> scm_core::Result<GenerationTicket> {
        if !self.mounted {
            return Err(ScmError::Other("儀表板已卸載，無法開始生成".to_string()));
        }

        if let Some(pending) = &self.pending {
            return Err(ScmError::Other(format!(
                "已有進行中的預測生成: {}",
                pending.id
            )));
        }

        let ticket = GenerationTicket::new(period, self.session);
        tracing::info!("開始預測生成 {}（期間 {}）", ticket.id, period);

        self.pending = Some(ticket.clone());
        Ok(ticket)
    }

    /// 完成預測生成
    ///
    /// 已卸載、會話不符或憑證不是目前進行中的那一張時丟棄結果，不視為錯誤。
    /// 記錄期間與憑證期間不符時回傳 `InputShape`，憑證保持有效。
    pub fn complete_generation(
        &mut self,
        ticket: &GenerationTicket,
        record: ForecastRecord,
    ) -> scm_core::Result<GenerationOutcome> {
        if !self.mounted {
            tracing::warn!("儀表板已卸載，丟棄預測 {}", record.id);
            return Ok(GenerationOutcome::Discarded);
        }

        if ticket.session != self.session {
            if self.pending.as_ref().is_some_and(|pending| pending.id == ticket.id) {
                self.pending = None;
            }
            tracing::warn!(
                "會話不符（{} != {}），丟棄預測 {}",
                ticket.session,
                self.session,
                record.id
            );
            return Ok(GenerationOutcome::Discarded);
        }

        match &self.pending {
            Some(pending) if pending.id == ticket.id => {}
            _ => {
                tracing::warn!("憑證 {} 不是進行中的生成，丟棄預測 {}", ticket.id, record.id);
                return Ok(GenerationOutcome::Discarded);
            }
        }

        if record.period != ticket.period {
            return Err(ScmError::InputShape(format!(
                "{}: 期間 {} 與生成請求的期間 {} 不符",
                record.id, record.period, ticket.period
            )));
        }

        self.pending = None;
        self.append_forecast(record)?;

        tracing::info!(
            "預測生成完成 {}（耗時 {} ms）",
            ticket.id,
            (Utc::now() - ticket.requested_at).num_milliseconds()
        );

        Ok(GenerationOutcome::Applied)
    }

    /// 卸載畫面：進行中的生成失效
    pub fn teardown(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::warn!("卸載時仍有進行中的生成 {}，結果將被丟棄", pending.id);
        }
        self.mounted = false;
        tracing::debug!("儀表板卸載（會話 {}）", self.session);
    }

    /// 重新掛載：開始新的會話，舊會話的生成失效
    pub fn remount(&mut self) {
        if let Some(pending) = self.pending.take() {
            tracing::warn!("重新掛載時仍有進行中的生成 {}，結果將被丟棄", pending.id);
        }
        self.session += 1;
        self.mounted = true;
        tracing::debug!("儀表板重新掛載（會話 {}）", self.session);
    }

    /// 需求預測面板：篩選後的列與摘要
    pub fn forecast_panel(&self, criteria: &FilterCriteria) -> ForecastPanel<'_> {
        let rows = AggregationEngine::filter(&self.snapshot.forecasts, criteria);
        let summary = ForecastSummary::summarize(&rows);

        ForecastPanel { rows, summary }
    }

    /// 供應商面板
    pub fn supplier_panel(&self, criteria: &FilterCriteria) -> SupplierPanel<'_> {
        let suppliers = &self.snapshot.suppliers;
        let rows = AggregationEngine::filter(suppliers, criteria);

        SupplierPanel {
            overall: SupplierStats::summarize(suppliers),
            filtered: SupplierStats::summarize(&rows),
            categories: AggregationEngine::distinct(suppliers, |s| s.category.as_str()),
            rows,
        }
    }

    /// 採購訂單面板（依文字搜尋篩選）
    pub fn order_panel(&self, criteria: &FilterCriteria) -> OrderPanel<'_> {
        let rows = AggregationEngine::filter(&self.snapshot.purchase_orders, criteria);
        let summary = PurchaseOrderSummary::summarize(&rows);

        OrderPanel { rows, summary }
    }

    /// 有季節係數的分類
    pub fn seasonal_categories(&self) -> Vec<String> {
        AggregationEngine::distinct(&self.snapshot.seasonal_factors, |p| p.category.as_str())
    }

    /// 季節調整係數折線圖
    pub fn seasonal_chart(&self, category: &str) -> scm_core::Result<LineChartGeometry> {
        SeasonalChart::for_category(
            &self.snapshot.seasonal_factors,
            category,
            &self.config.seasonal_chart,
        )
    }

    /// 供應商評估矩陣（全部供應商）
    pub fn supplier_matrix(&self) -> scm_core::Result<ScatterGeometry> {
        SupplierMatrix::build(&self.snapshot.suppliers, &self.config.supplier_matrix)
    }
}
