//! 集成測試

use chrono::{TimeZone, Utc};
use rstest::rstest;
use rust_decimal::Decimal;
use scm::prelude::*;
use scm_chart::Quadrant;

fn february() -> Period {
    "2025-02".parse().unwrap()
}

#[test]
fn test_forecast_tab_flow() {
    // 場景：預測分頁，期間 2025-02，全部手法
    let state = DashboardState::sample().unwrap();
    let criteria = FilterCriteria::new().with_period(february());

    let panel = state.forecast_panel(&criteria);

    assert_eq!(panel.rows.len(), 4);
    let ids: Vec<&str> = panel.rows.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["DF001", "DF002", "DF003", "DF004"]);

    // 只有 DF001、DF002 有精度
    assert!((panel.summary.average_accuracy - 96.6).abs() < 1e-9);
    assert!((panel.summary.average_confidence - 78.75).abs() < 1e-9);
    assert_eq!(panel.summary.total_forecast_quantity, Decimal::from(720));
}

#[test]
fn test_generation_round_trip() {
    // 1. 開始生成
    let mut state = DashboardState::sample().unwrap();
    let ticket = state.begin_generation(february()).unwrap();

    // 2. 生成記錄
    let mut generator =
        ForecastGenerator::with_seed(state.config().generation.clone(), 2025);
    let record = generator.generate(ticket.period, Utc.with_ymd_and_hms(2025, 1, 20, 10, 0, 0).unwrap());
    let id = record.id.clone();

    // 3. 完成並追加
    let outcome = state.complete_generation(&ticket, record).unwrap();
    assert_eq!(outcome, GenerationOutcome::Applied);

    let panel = state.forecast_panel(
        &FilterCriteria::new()
            .with_period(february())
            .with_method(Selection::Only(ForecastMethod::Ai)),
    );
    let ids: Vec<&str> = panel.rows.iter().map(|f| f.id.as_str()).collect();
    assert_eq!(ids, vec!["DF001", id.as_str()]);

    // 新記錄沒有精度，平均精度不變
    assert_eq!(panel.summary.average_accuracy, 96.5);
}

#[test]
fn test_generation_discarded_after_teardown() {
    let mut state = DashboardState::sample().unwrap();
    let ticket = state.begin_generation(february()).unwrap();
    let record = state.generator().generate(ticket.period, Utc::now());

    state.teardown();

    assert_eq!(
        state.complete_generation(&ticket, record).unwrap(),
        GenerationOutcome::Discarded
    );
    assert_eq!(state.forecasts().len(), 4);
}

#[test]
fn test_supplier_tab_flow() {
    let state = DashboardState::sample().unwrap();

    let all = state.supplier_panel(&FilterCriteria::new());
    assert_eq!(all.rows.len(), 4);
    assert!((all.overall.average_rating - 4.375).abs() < 1e-9);
    assert_eq!(all.overall.high_risk, 0);

    let raw = state.supplier_panel(
        &FilterCriteria::new().with_category(Selection::Only("原材料".to_string())),
    );
    let ids: Vec<&str> = raw.rows.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["SUP001", "SUP003"]);
}

#[test]
fn test_supplier_matrix_from_sample() {
    let state = DashboardState::sample().unwrap();
    let matrix = state.supplier_matrix().unwrap();

    // 預設分界線在 50%，樣本全部落在右上
    assert!(matrix
        .points
        .iter()
        .all(|p| p.quadrant == Quadrant::StrategicPartner));

    let tokyo = &matrix.points[0];
    assert!((tokyo.position.x - 399.2).abs() < 1e-9);
    assert!((tokyo.position.y - 60.5).abs() < 1e-9);
    assert_eq!(tokyo.label.text, "東京鉄鋼株式...");
}

#[test]
fn test_seasonal_chart_from_sample() {
    let state = DashboardState::sample().unwrap();
    let chart = state.seasonal_chart("原材料").unwrap();

    assert_eq!(chart.points.len(), 12);
    assert!((chart.points[0].position.x - 108.33).abs() < 1e-9);
    assert!((chart.points[11].position.x - 691.67).abs() < 1e-9);

    let reference = chart.reference_line.as_ref().unwrap();
    assert_eq!(reference.segment.from.y, 150.0);

    let path = chart.path.to_svg_path();
    assert!(path.starts_with("M 108.33"));
    assert_eq!(path.matches(" L ").count(), 11);
}

#[rstest]
#[case("", 4)]
#[case("steel", 0)]
#[case("ボルト", 1)]
#[case("inv00", 4)]
#[case("INV003", 1)]
fn test_forecast_search(#[case] search: &str, #[case] expected: usize) {
    let state = DashboardState::sample().unwrap();
    let criteria = FilterCriteria::new()
        .with_period(february())
        .with_search(search);

    assert_eq!(state.forecast_panel(&criteria).rows.len(), expected);
}

#[test]
fn test_generation_after_remount() {
    // 生成中重新掛載：舊憑證作廢，新會話可再次生成
    let mut state = DashboardState::sample().unwrap();
    let stale = state.begin_generation(february()).unwrap();
    let record = state.generator().generate(stale.period, Utc::now());

    state.remount();
    assert_eq!(
        state.complete_generation(&stale, record).unwrap(),
        GenerationOutcome::Discarded
    );

    let ticket = state.begin_generation(february()).unwrap();
    let record = state.generator().generate(ticket.period, Utc::now());
    assert_eq!(
        state.complete_generation(&ticket, record).unwrap(),
        GenerationOutcome::Applied
    );
    assert_eq!(state.forecasts().len(), 5);
}

#[test]
fn test_geometry_serializes_to_json() {
    let state = DashboardState::sample().unwrap();
    let matrix = state.supplier_matrix().unwrap();

    let json = serde_json::to_value(&matrix).unwrap();

    assert_eq!(json["points"].as_array().unwrap().len(), 4);
    assert_eq!(json["points"][0]["color"], "#27ae60");
    assert_eq!(json["quadrants"][1]["quadrant"], "strategic_partner");
}

#[test]
fn test_custom_config_from_json() {
    let config = DashboardConfig::from_json_str(
        r#"{ "supplier_matrix": { "midline_x": 90.0, "midline_y": 90.0 } }"#,
    )
    .unwrap();
    let state = DashboardState::new(DashboardSnapshot::sample().unwrap(), config).unwrap();

    let matrix = state.supplier_matrix().unwrap();
    let quadrants: Vec<Quadrant> = matrix.points.iter().map(|p| p.quadrant).collect();

    assert_eq!(
        quadrants,
        vec![
            Quadrant::NeedsImprovement,
            Quadrant::StableSupply,
            Quadrant::StableSupply,
            Quadrant::NeedsImprovement,
        ]
    );
}
