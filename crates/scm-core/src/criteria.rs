//! 篩選條件

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{ForecastMethod, Period, RiskLevel};

/// 選單選擇值：`All` 為不篩選的哨兵值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection<T> {
    All,
    Only(T),
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Selection::All
    }
}

impl<T: PartialEq> Selection<T> {
    /// 是否為有效（非 "all"）的條件
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Only(_))
    }

    /// 檢查值是否符合選擇
    ///
    /// 記錄不具備此維度（`None`）時，有效條件視為不符合。
    pub fn admits(&self, value: Option<&T>) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => value == Some(expected),
        }
    }
}

impl<T: FromStr> FromStr for Selection<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            Ok(Selection::All)
        } else {
            s.parse().map(Selection::Only)
        }
    }
}

impl<T> From<T> for Selection<T> {
    fn from(value: T) -> Self {
        Selection::Only(value)
    }
}

/// 可被篩選的記錄
///
/// 記錄只回報自己具備的維度，其餘維度維持預設的 `None`。
pub trait Filterable {
    fn period(&self) -> Option<Period> {
        None
    }

    fn method(&self) -> Option<ForecastMethod> {
        None
    }

    fn category(&self) -> Option<&str> {
        None
    }

    fn risk_level(&self) -> Option<RiskLevel> {
        None
    }

    /// 自由文字搜尋的比對欄位
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }
}

/// 篩選條件（純輸入，不保存）
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// 期間
    #[serde(default)]
    pub period: Selection<Period>,

    /// 預測手法
    #[serde(default)]
    pub method: Selection<ForecastMethod>,

    /// 自由文字搜尋（空字串表示不篩選）
    #[serde(default)]
    pub search: String,

    /// 分類
    #[serde(default)]
    pub category: Selection<String>,

    /// 風險等級
    #[serde(default)]
    pub risk: Selection<RiskLevel>,
}

impl FilterCriteria {
    /// 創建不含任何條件的篩選
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：設置期間
    pub fn with_period(mut self, period: Period) -> Self {
        self.period = Selection::Only(period);
        self
    }

    /// 建構器模式：設置預測手法
    pub fn with_method(mut self, method: Selection<ForecastMethod>) -> Self {
        self.method = method;
        self
    }

    /// 建構器模式：設置搜尋字串
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// 建構器模式：設置分類
    pub fn with_category(mut self, category: Selection<String>) -> Self {
        self.category = category;
        self
    }

    /// 建構器模式：設置風險等級
    pub fn with_risk(mut self, risk: Selection<RiskLevel>) -> Self {
        self.risk = risk;
        self
    }

    /// 有效條件數量
    pub fn active_count(&self) -> usize {
        [
            self.period.is_active(),
            self.method.is_active(),
            !self.search.is_empty(),
            self.category.is_active(),
            self.risk.is_active(),
        ]
        .into_iter()
        .filter(|&active| active)
        .count()
    }

    /// 檢查記錄是否滿足所有有效條件（AND）
    pub fn matches<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        self.period.admits(record.period().as_ref())
            && self.method.admits(record.method().as_ref())
            && self.category_admits(record.category())
            && self.risk.admits(record.risk_level().as_ref())
            && self.search_admits(record)
    }

    fn category_admits(&self, category: Option<&str>) -> bool {
        match &self.category {
            Selection::All => true,
            Selection::Only(expected) => category == Some(expected.as_str()),
        }
    }

    /// 不分大小寫的子字串比對，任一欄位命中即可
    fn search_admits<T: Filterable + ?Sized>(&self, record: &T) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let needle = self.search.to_lowercase();
        record
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        category: &'static str,
        risk: RiskLevel,
    }

    impl Filterable for Row {
        fn category(&self) -> Option<&str> {
            Some(self.category)
        }

        fn risk_level(&self) -> Option<RiskLevel> {
            Some(self.risk)
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.category]
        }
    }

    fn row() -> Row {
        Row {
            name: "Tokyo Steel",
            category: "原材料",
            risk: RiskLevel::Low,
        }
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = FilterCriteria::new();

        assert_eq!(criteria.active_count(), 0);
        assert!(criteria.matches(&row()));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert!(FilterCriteria::new().with_search("tokyo").matches(&row()));
        assert!(FilterCriteria::new().with_search("STEEL").matches(&row()));
        assert!(FilterCriteria::new().with_search("原材").matches(&row()));
        assert!(!FilterCriteria::new().with_search("osaka").matches(&row()));
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let criteria = FilterCriteria::new()
            .with_category(Selection::Only("原材料".to_string()))
            .with_risk(Selection::Only(RiskLevel::High));

        assert_eq!(criteria.active_count(), 2);
        assert!(!criteria.matches(&row()));

        let criteria = criteria.with_risk(Selection::Only(RiskLevel::Low));
        assert!(criteria.matches(&row()));
    }

    #[test]
    fn test_missing_dimension_fails_active_predicate() {
        let criteria = FilterCriteria::new().with_period("2025-02".parse().unwrap());

        assert!(!criteria.matches(&row()));
    }

    #[test]
    fn test_selection_from_str() {
        assert_eq!("all".parse::<Selection<ForecastMethod>>().unwrap(), Selection::All);
        assert_eq!(
            "ai".parse::<Selection<ForecastMethod>>().unwrap(),
            Selection::Only(ForecastMethod::Ai)
        );
        assert!("bogus".parse::<Selection<RiskLevel>>().is_err());
    }
}
