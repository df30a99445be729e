//! 儀表板示例：篩選、摘要、圖表座標與預測生成

use std::time::Duration;

use chrono::Utc;
use scm::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== SCM 儀表板示例 ===\n");

    let mut state = DashboardState::sample()?;
    let period: Period = "2025-02".parse()?;

    // 需求預測
    let criteria = FilterCriteria::new().with_period(period);
    let panel = state.forecast_panel(&criteria);

    println!("需求預測（{period}）:");
    for forecast in &panel.rows {
        let accuracy = forecast
            .accuracy
            .map(|a| format!("{a:.1}%"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  - {} {}: 預測 {}, 精度 {} ({:?}), 手法 {}",
            forecast.id,
            forecast.product_name,
            forecast.forecast_quantity,
            accuracy,
            forecast.accuracy_grade(),
            forecast.method.label()
        );
    }
    println!(
        "  平均精度 {:.1}%，平均信賴度 {:.1}%，總預測數量 {}\n",
        panel.summary.average_accuracy,
        panel.summary.average_confidence,
        panel.summary.total_forecast_quantity
    );

    // 季節調整係數
    for category in state.seasonal_categories() {
        let chart = state.seasonal_chart(&category)?;
        println!("季節調整係數（{category}）:");
        println!("  path: {}", chart.path.to_svg_path());
        if let Some(reference) = &chart.reference_line {
            println!("  參考線 {} 於 y = {:.2}\n", reference.value, reference.segment.from.y);
        }
    }

    // 供應商
    let suppliers = state.supplier_panel(&FilterCriteria::new().with_risk(Selection::Only(RiskLevel::Low)));
    println!(
        "低風險供應商 {}/{}（分類: {}）",
        suppliers.rows.len(),
        suppliers.overall.total,
        suppliers.categories.join(", ")
    );

    let matrix = state.supplier_matrix()?;
    for point in &matrix.points {
        println!(
            "  - {} ({:.1}, {:.1}) {} {}",
            point.label.text,
            point.position.x,
            point.position.y,
            point.quadrant.label(),
            point.color
        );
    }

    // 預測生成（模擬延遲）
    println!("\n生成新預測...");
    let ticket = state.begin_generation(period)?;
    std::thread::sleep(Duration::from_millis(300));
    let record = state.generator().generate(ticket.period, Utc::now());
    let outcome = state.complete_generation(&ticket, record)?;

    println!("結果: {outcome:?}，預測筆數 {}", state.forecasts().len());

    // 卸載後完成的生成會被丟棄
    let ticket = state.begin_generation(period)?;
    let record = state.generator().generate(ticket.period, Utc::now());
    state.teardown();
    let outcome = state.complete_generation(&ticket, record)?;

    println!("卸載後結果: {outcome:?}，預測筆數 {}", state.forecasts().len());

    Ok(())
}
