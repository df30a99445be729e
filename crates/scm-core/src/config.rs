//! 圖表與儀表板配置

use serde::{Deserialize, Serialize};

use crate::{AxisDomain, ForecastMethod, PlotRect};

/// 折線圖（季節調整係數）配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    /// 繪圖區域
    pub rect: PlotRect,

    /// 縱軸數值域
    pub domain: AxisDomain,

    /// 水平內距（首尾點與邊界距離）
    pub padding: f64,

    /// 參考線數值（None 表示不繪製）
    pub reference_value: Option<f64>,

    /// 縱軸刻度間距（<= 0 表示不產生刻度）
    pub tick_step: f64,

    /// 數值標籤在點上方的距離
    pub value_label_above: f64,

    /// 數值標籤在點下方的距離
    pub value_label_below: f64,

    /// 月份標籤與橫軸的距離
    pub axis_label_offset: f64,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            rect: PlotRect::new(50.0, 50.0, 700.0, 200.0),
            domain: AxisDomain::new(0.0, 2.0),
            padding: 58.33,
            reference_value: Some(1.0),
            tick_step: 0.5,
            value_label_above: 10.0,
            value_label_below: 20.0,
            axis_label_offset: 20.0,
        }
    }
}

impl LineChartConfig {
    pub fn new(rect: PlotRect, domain: AxisDomain) -> Self {
        Self {
            rect,
            domain,
            ..Self::default()
        }
    }

    /// 建構器模式：設置水平內距
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// 建構器模式：設置參考線
    pub fn with_reference_value(mut self, value: Option<f64>) -> Self {
        self.reference_value = value;
        self
    }

    /// 建構器模式：設置刻度間距
    pub fn with_tick_step(mut self, step: f64) -> Self {
        self.tick_step = step;
        self
    }
}

/// 散佈圖（供應商評估矩陣）配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// 繪圖區域
    pub rect: PlotRect,

    /// 橫軸數值域（成本競爭力）
    pub x_domain: AxisDomain,

    /// 縱軸數值域（準時交貨率）
    pub y_domain: AxisDomain,

    /// 橫軸象限分界（數值域單位，None 為數值域中點）
    pub midline_x: Option<f64>,

    /// 縱軸象限分界（數值域單位，None 為數值域中點）
    pub midline_y: Option<f64>,

    /// 點標籤保留字元數
    pub label_chars: usize,

    /// 點標籤在點上方的距離
    pub label_offset: f64,

    /// 刻度間距
    pub tick_step: f64,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            rect: PlotRect::new(50.0, 50.0, 400.0, 300.0),
            x_domain: AxisDomain::percent(),
            y_domain: AxisDomain::percent(),
            midline_x: None,
            midline_y: None,
            label_chars: 6,
            label_offset: 15.0,
            tick_step: 25.0,
        }
    }
}

impl ScatterConfig {
    pub fn new(rect: PlotRect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }

    /// 建構器模式：設置數值域
    pub fn with_domains(mut self, x_domain: AxisDomain, y_domain: AxisDomain) -> Self {
        self.x_domain = x_domain;
        self.y_domain = y_domain;
        self
    }

    /// 建構器模式：設置象限分界
    pub fn with_midlines(mut self, midline_x: f64, midline_y: f64) -> Self {
        self.midline_x = Some(midline_x);
        self.midline_y = Some(midline_y);
        self
    }

    pub fn effective_midline_x(&self) -> f64 {
        self.midline_x.unwrap_or_else(|| self.x_domain.midpoint())
    }

    pub fn effective_midline_y(&self) -> f64 {
        self.midline_y.unwrap_or_else(|| self.y_domain.midpoint())
    }
}

/// 預測生成（模擬）配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub product_id: String,

    pub product_name: String,

    pub method: ForecastMethod,

    /// 預測數量下限（含）
    pub quantity_min: u32,

    /// 預測數量上限（不含）
    pub quantity_max: u32,

    /// 信賴度下限（含）
    pub confidence_min: u32,

    /// 信賴度上限（不含）
    pub confidence_max: u32,

    /// 預測ID前綴
    pub id_prefix: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            product_id: "INV005".to_string(),
            product_name: "完成品 モーターケース".to_string(),
            method: ForecastMethod::Ai,
            quantity_min: 50,
            quantity_max: 150,
            confidence_min: 75,
            confidence_max: 95,
            id_prefix: "DF".to_string(),
        }
    }
}

impl GenerationConfig {
    /// 建構器模式：設置目標物料
    pub fn with_product(mut self, product_id: String, product_name: String) -> Self {
        self.product_id = product_id;
        self.product_name = product_name;
        self
    }

    /// 建構器模式：設置預測數量範圍 `[min, max)`
    pub fn with_quantity_range(mut self, min: u32, max: u32) -> Self {
        self.quantity_min = min;
        self.quantity_max = max;
        self
    }

    /// 建構器模式：設置信賴度範圍 `[min, max)`
    pub fn with_confidence_range(mut self, min: u32, max: u32) -> Self {
        self.confidence_min = min;
        self.confidence_max = max;
        self
    }
}

/// 儀表板配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub seasonal_chart: LineChartConfig,

    pub supplier_matrix: ScatterConfig,

    pub generation: GenerationConfig,
}

impl DashboardConfig {
    /// 從 JSON 字串載入（缺少的欄位使用預設值）
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
