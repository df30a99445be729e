//! 預測生成（模擬）
//!
//! 不是真正的預測演算法：數量與信賴度在設定範圍內隨機產生。

use chrono::{DateTime, Utc};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use scm_core::{ForecastRecord, GenerationConfig, Period};
use serde::Serialize;
use uuid::Uuid;

/// 生成請求憑證
///
/// 完成時必須帶回同一張憑證，會話不符則結果丟棄。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationTicket {
    pub id: Uuid,

    /// 目標期間（發出請求時選取的期間）
    pub period: Period,

    /// 發出請求時的掛載會話編號
    pub session: u64,

    pub requested_at: DateTime<Utc>,
}

impl GenerationTicket {
    pub fn new(period: Period, session: u64) -> Self {
        Self {
            id: Uuid::new_v4(),
            period,
            session,
            requested_at: Utc::now(),
        }
    }
}

/// 預測生成器
pub struct ForecastGenerator<R: Rng = ThreadRng> {
    config: GenerationConfig,
    rng: R,
}

impl ForecastGenerator<ThreadRng> {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }
}

impl ForecastGenerator<StdRng> {
    /// 固定種子（可重現的結果）
    pub fn with_seed(config: GenerationConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> ForecastGenerator<R> {
    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// 產生一筆預測記錄
    ///
    /// id 為前綴加上 `now` 的毫秒時間戳。
    pub fn generate(&mut self, period: Period, now: DateTime<Utc>) -> ForecastRecord {
        let quantity = sample(&mut self.rng, self.config.quantity_min, self.config.quantity_max);
        let confidence = sample(
            &mut self.rng,
            self.config.confidence_min,
            self.config.confidence_max,
        );
        let id = format!("{}{}", self.config.id_prefix, now.timestamp_millis());

        tracing::debug!(
            "生成預測 {}：期間 {}，數量 {}，信賴度 {}%",
            id,
            period,
            quantity,
            confidence
        );

        ForecastRecord::new(
            id,
            self.config.product_id.clone(),
            self.config.product_name.clone(),
            period,
            self.config.method,
            Decimal::from(quantity),
            f64::from(confidence),
        )
        .with_timestamp(now)
    }
}

/// 在 `[min, max)` 取值；範圍為空時取 `min`
fn sample<R: Rng>(rng: &mut R, min: u32, max: u32) -> u32 {
    if max <= min {
        min
    } else {
        rng.gen_range(min..max)
    }
}
