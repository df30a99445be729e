//! 篩選與彙總

use scm_core::{FilterCriteria, Filterable};

/// 彙總引擎
///
/// 純函式：不修改輸入、不保存狀態。
pub struct AggregationEngine;

impl AggregationEngine {
    /// 篩選記錄
    ///
    /// 回傳滿足所有有效條件的記錄，維持原始順序。
    pub fn filter<'a, T: Filterable>(records: &'a [T], criteria: &FilterCriteria) -> Vec<&'a T> {
        let filtered: Vec<&T> = records
            .iter()
            .filter(|record| criteria.matches(*record))
            .collect();

        tracing::debug!(
            "篩選完成：{} 筆中符合 {} 筆（有效條件 {} 個）",
            records.len(),
            filtered.len(),
            criteria.active_count()
        );

        filtered
    }

    /// 平均值
    ///
    /// 缺值（`None`）不計入分子與分母；沒有任何有效值時回傳 0。
    pub fn average<T, F>(records: &[T], selector: F) -> f64
    where
        F: Fn(&T) -> Option<f64>,
    {
        let (sum, count) = records
            .iter()
            .filter_map(&selector)
            .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));

        if count == 0 {
            0.0
        } else {
            sum / count as f64
        }
    }

    /// 加總（缺值視為 0）
    pub fn sum<T, F>(records: &[T], selector: F) -> f64
    where
        F: Fn(&T) -> Option<f64>,
    {
        records
            .iter()
            .map(|record| selector(record).unwrap_or(0.0))
            .sum()
    }

    /// 筆數
    pub fn count<T>(records: &[T]) -> usize {
        records.len()
    }

    /// 符合條件的筆數
    pub fn count_where<T, F>(records: &[T], predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        records.iter().filter(|record| predicate(record)).count()
    }

    /// 去重後的值，依首次出現順序
    pub fn distinct<T, F>(records: &[T], selector: F) -> Vec<String>
    where
        F: Fn(&T) -> &str,
    {
        let mut values: Vec<String> = Vec::new();

        for record in records {
            let value = selector(record);
            if !values.iter().any(|existing| existing == value) {
                values.push(value.to_string());
            }
        }

        values
    }
}
