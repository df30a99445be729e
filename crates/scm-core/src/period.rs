//! 預測期間（YYYY-MM）

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::ScmError;

/// 月份期間
///
/// 以 `YYYY-MM` 字串進行序列化，與前端選單的值一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// 創建新的期間
    pub fn new(year: i32, month: u32) -> crate::Result<Self> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() || !(0..=9999).contains(&year) {
            return Err(ScmError::InvalidPeriod(format!("{year}-{month}")));
        }
        Ok(Self { year, month })
    }

    /// 由日期取得所屬期間
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// 期間第一天
    pub fn first_day(&self) -> NaiveDate {
        // new() 已驗證過年月
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or_default()
    }
}

impl FromStr for Period {
    type Err = ScmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ScmError::InvalidPeriod(s.to_string());

        if s.len() != 7 || s.as_bytes()[4] != b'-' {
            return Err(invalid());
        }

        let date = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
            .map_err(|_| invalid())?;

        Ok(Self::from_date(date))
    }
}

impl TryFrom<String> for Period {
    type Error = ScmError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Period> for String {
    fn from(period: Period) -> Self {
        period.to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}
