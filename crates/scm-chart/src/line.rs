//! 時間序列折線圖投影（季節調整係數）

use scm_core::{
    AxisDomain, Color, LineChartConfig, PlotRect, Point, SeasonalPoint, SeasonalTrend,
};
use serde::Serialize;

use crate::primitives::{AxisTick, Polyline, Segment, TextAlign, TextAnchor};
use crate::scale::LinearScale;

/// 將有序數列投影到繪圖區域
///
/// 第 `i` 點的 x 為 `origin_x + padding + i * step`，
/// `step = (width - 2 * padding) / (n - 1)`；只有一點時置於水平中央。
/// 空數列回傳空集合，數值域退化回傳 `DegenerateDomain`。
pub fn project_series(
    values: &[f64],
    rect: &PlotRect,
    domain: AxisDomain,
    padding: f64,
) -> scm_core::Result<Vec<Point>> {
    if values.is_empty() {
        return Ok(Vec::new());
    }

    let y_scale = LinearScale::vertical(domain, rect)?;
    let n = values.len();

    let points = values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let x = if n == 1 {
                rect.origin_x + rect.width / 2.0
            } else {
                let step = (rect.width - 2.0 * padding) / (n - 1) as f64;
                rect.origin_x + padding + i as f64 * step
            };
            Point::new(x, y_scale.map(value))
        })
        .collect();

    Ok(points)
}

/// 折線圖上的資料點
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePoint {
    pub month: u32,
    pub value: f64,
    pub position: Point,
    pub trend: SeasonalTrend,
    pub color: Color,

    /// 橫軸下方的月份標籤
    pub month_label: TextAnchor,

    /// 數值標籤（係數 > 1 在點上方，否則在下方）
    pub value_label: TextAnchor,
}

/// 參考線（例如係數 1.0）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceLine {
    pub value: f64,
    pub segment: Segment,
    pub label: TextAnchor,
}

/// 折線圖幾何
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct LineChartGeometry {
    pub points: Vec<LinePoint>,
    pub path: Polyline,
    pub reference_line: Option<ReferenceLine>,
    pub y_ticks: Vec<AxisTick>,
    pub x_axis: Option<Segment>,
    pub y_axis: Option<Segment>,
}

impl LineChartGeometry {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// 季節調整係數折線圖
pub struct SeasonalChart;

impl SeasonalChart {
    /// 建立單一分類的折線圖
    pub fn for_category(
        points: &[SeasonalPoint],
        category: &str,
        config: &LineChartConfig,
    ) -> scm_core::Result<LineChartGeometry> {
        let series: Vec<SeasonalPoint> = points
            .iter()
            .filter(|point| point.category == category)
            .cloned()
            .collect();

        Self::build(&series, config)
    }

    /// 建立折線圖（依月份排序）
    pub fn build(
        points: &[SeasonalPoint],
        config: &LineChartConfig,
    ) -> scm_core::Result<LineChartGeometry> {
        if points.is_empty() {
            tracing::debug!("季節係數為空，回傳空圖");
            return Ok(LineChartGeometry::default());
        }

        let mut series: Vec<&SeasonalPoint> = points.iter().collect();
        series.sort_by_key(|point| point.month);

        let values: Vec<f64> = series.iter().map(|point| point.factor).collect();
        let positions = project_series(&values, &config.rect, config.domain, config.padding)?;
        let y_scale = LinearScale::vertical(config.domain, &config.rect)?;
        let rect = &config.rect;

        let line_points: Vec<LinePoint> = series
            .iter()
            .zip(&positions)
            .map(|(point, &position)| {
                let trend = point.trend();
                let label_y = if trend == SeasonalTrend::Increase {
                    position.y - config.value_label_above
                } else {
                    position.y + config.value_label_below
                };

                LinePoint {
                    month: point.month,
                    value: point.factor,
                    position,
                    trend,
                    color: trend.color(),
                    month_label: TextAnchor::centered(
                        position.x,
                        rect.bottom() + config.axis_label_offset,
                        point.month_label(),
                    ),
                    value_label: TextAnchor::centered(
                        position.x,
                        label_y,
                        format!("{:.1}", point.factor),
                    ),
                }
            })
            .collect();

        let reference_line = config.reference_value.map(|value| {
            let y = y_scale.map(value);
            ReferenceLine {
                value,
                segment: Segment::horizontal(rect.origin_x, rect.right(), y),
                label: TextAnchor::new(rect.right() + 10.0, y + 5.0, format!("{value:.1}"), TextAlign::Start),
            }
        });

        tracing::debug!(
            "季節係數折線圖：{} 點，數值域 [{}, {}]",
            line_points.len(),
            config.domain.min,
            config.domain.max
        );

        Ok(LineChartGeometry {
            points: line_points,
            path: Polyline::new(positions),
            reference_line,
            y_ticks: y_scale.ticks(config.tick_step),
            x_axis: Some(Segment::horizontal(rect.origin_x, rect.right(), rect.bottom())),
            y_axis: Some(Segment::vertical(rect.origin_x, rect.origin_y, rect.bottom())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scm_core::ScmError;

    const FACTORS: [f64; 12] = [0.8, 0.9, 1.2, 1.3, 1.1, 1.0, 0.9, 0.8, 1.1, 1.4, 1.2, 0.7];

    fn seasonal_points() -> Vec<SeasonalPoint> {
        FACTORS
            .iter()
            .enumerate()
            .map(|(i, &factor)| SeasonalPoint::new(i as u32 + 1, factor, "原材料".to_string()))
            .collect()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_endpoints_respect_padding() {
        let rect = PlotRect::new(50.0, 50.0, 700.0, 200.0);
        let points = project_series(&FACTORS, &rect, AxisDomain::new(0.0, 2.0), 30.0).unwrap();

        assert_eq!(points.len(), 12);
        assert!(approx(points[0].x, 80.0));
        assert!(approx(points[11].x, 720.0));
    }

    #[test]
    fn test_higher_value_maps_to_smaller_y() {
        let rect = PlotRect::new(50.0, 50.0, 700.0, 200.0);
        let points = project_series(&[1.4, 0.7], &rect, AxisDomain::new(0.0, 2.0), 0.0).unwrap();

        assert!(points[0].y < points[1].y);
        assert!(approx(points[0].y, 110.0));
        assert!(approx(points[1].y, 180.0));
    }

    #[test]
    fn test_single_point_is_centered() {
        let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);
        let points = project_series(&[1.0], &rect, AxisDomain::new(0.0, 2.0), 10.0).unwrap();

        assert_eq!(points, vec![Point::new(50.0, 50.0)]);
    }

    #[test]
    fn test_empty_series() {
        let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);

        assert!(project_series(&[], &rect, AxisDomain::new(0.0, 2.0), 10.0)
            .unwrap()
            .is_empty());
        assert!(SeasonalChart::build(&[], &LineChartConfig::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_degenerate_domain_fails_fast() {
        let rect = PlotRect::new(0.0, 0.0, 100.0, 100.0);
        let result = project_series(&[1.0, 1.0], &rect, AxisDomain::new(1.0, 1.0), 0.0);

        assert!(matches!(result, Err(ScmError::DegenerateDomain(_))));
    }

    #[test]
    fn test_seasonal_chart_geometry() {
        let config = LineChartConfig::default();
        let chart = SeasonalChart::build(&seasonal_points(), &config).unwrap();

        assert_eq!(chart.points.len(), 12);
        assert_eq!(chart.path.points.len(), 12);

        let reference = chart.reference_line.as_ref().unwrap();
        assert!(approx(reference.segment.from.y, 150.0));
        assert_eq!(reference.label.text, "1.0");

        // 10 月 1.4：需求增加期，標籤在點上方
        let october = &chart.points[9];
        assert_eq!(october.trend, SeasonalTrend::Increase);
        assert_eq!(october.color, Color::GREEN);
        assert!(approx(october.position.y, 110.0));
        assert!(approx(october.value_label.position.y, 100.0));
        assert_eq!(october.value_label.text, "1.4");
        assert_eq!(october.month_label.text, "10月");
        assert!(approx(october.month_label.position.y, 270.0));

        // 6 月 1.0：通常期，標籤在點下方
        let june = &chart.points[5];
        assert_eq!(june.trend, SeasonalTrend::Normal);
        assert!(approx(june.value_label.position.y, 170.0));

        assert_eq!(chart.y_ticks.len(), 5);
    }

    #[test]
    fn test_points_sorted_by_month() {
        let mut points = seasonal_points();
        points.reverse();

        let chart = SeasonalChart::build(&points, &LineChartConfig::default()).unwrap();
        let months: Vec<u32> = chart.points.iter().map(|p| p.month).collect();

        assert_eq!(months, (1..=12).collect::<Vec<_>>());
        assert!(chart.points.windows(2).all(|w| w[0].position.x < w[1].position.x));
    }

    #[test]
    fn test_for_category() {
        let mut points = seasonal_points();
        points.push(SeasonalPoint::new(1, 1.5, "部品".to_string()));

        let chart = SeasonalChart::for_category(&points, "部品", &LineChartConfig::default()).unwrap();
        assert_eq!(chart.points.len(), 1);
        assert!(approx(chart.points[0].position.x, 400.0));

        let none = SeasonalChart::for_category(&points, "工具", &LineChartConfig::default()).unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_tiny_tick_step_skips_ticks() {
        let config = LineChartConfig::default().with_tick_step(1e-13);
        let chart = SeasonalChart::build(&seasonal_points(), &config).unwrap();

        assert!(chart.y_ticks.is_empty());
        assert_eq!(chart.points.len(), 12);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let config = LineChartConfig::default();
        let first = SeasonalChart::build(&seasonal_points(), &config).unwrap();
        let second = SeasonalChart::build(&seasonal_points(), &config).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.path.to_svg_path(), second.path.to_svg_path());
    }
}
