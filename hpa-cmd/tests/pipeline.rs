use hpa_chart::ImageFormat;
use hpa_cmd::pipeline::{run_analyze, run_generate, run_pipeline};
use hpa_core::record::DailyRecord;
use hpa_data::{
    dataset::{read_dataset, write_dataset},
    monthly::{aggregate_monthly, select_month},
    summary::read_summary,
};
use hpa_model::multi::fit_multi_feature;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

fn scratch_dir(name: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "hpa-{}-{}-{}",
        name,
        std::process::id(),
        nanos
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_pipeline_writes_every_artifact() {
    let dir = scratch_dir("artifacts");
    let report = run_pipeline(&dir).unwrap();

    for path in [
        &report.paths.dataset,
        &report.paths.workbook,
        &report.paths.trend_chart,
        &report.paths.regression_chart,
        &report.paths.monthly_chart,
        &report.paths.summary,
    ] {
        assert!(path.exists(), "missing {}", path.display());
    }
    assert_eq!(report.records.len(), 365);
    assert_eq!(report.monthly.len(), 12);
    assert!(report.simple.slope() > 0.0);
    assert!((0.0..=1.0).contains(&report.summary.r_squared));
    assert!(report.summary.mean_absolute_error >= 0.0);

    let summary_text = std::fs::read_to_string(&report.paths.summary).unwrap();
    let lines: Vec<&str> = summary_text.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Metric,Value");
    assert!(lines[1].starts_with("Model R2,"));
    assert!(lines[2].starts_with("MAE (MW),"));
    assert!(lines[3].starts_with("Forecast (January Avg Power MW),"));
}

#[test]
fn test_dataset_is_byte_identical_across_runs() {
    let first = scratch_dir("first");
    let second = scratch_dir("second");
    let a = run_pipeline(&first).unwrap();
    let b = run_pipeline(&second).unwrap();

    let dataset_a = std::fs::read(&a.paths.dataset).unwrap();
    let dataset_b = std::fs::read(&b.paths.dataset).unwrap();
    assert_eq!(dataset_a, dataset_b);

    let workbook_a = std::fs::read(&a.paths.workbook).unwrap();
    let workbook_b = std::fs::read(&b.paths.workbook).unwrap();
    assert_eq!(&workbook_a[..2], b"PK");
    assert_eq!(workbook_a, workbook_b);

    let summary_a = std::fs::read(&a.paths.summary).unwrap();
    let summary_b = std::fs::read(&b.paths.summary).unwrap();
    assert_eq!(summary_a, summary_b);
}

#[cfg(feature = "bitmap")]
#[test]
fn test_charts_default_to_png() {
    let dir = scratch_dir("png");
    let report = run_pipeline(&dir).unwrap();

    for path in [
        &report.paths.trend_chart,
        &report.paths.regression_chart,
        &report.paths.monthly_chart,
    ] {
        assert_eq!(path.extension().unwrap(), "png");
        let bytes = std::fs::read(path).unwrap();
        assert_eq!(&bytes[..4], b"\x89PNG", "{} is not a PNG", path.display());
    }
}

#[test]
fn test_forecast_rederived_from_files() {
    let dir = scratch_dir("rederive");
    let report = run_pipeline(&dir).unwrap();

    let stored = read_summary(&report.paths.summary).unwrap();
    assert_eq!(stored, report.summary);

    let records = read_dataset(&report.paths.dataset).unwrap();
    assert_eq!(records, report.records);
    let monthly = aggregate_monthly(&records);
    let january = select_month(&monthly, 1).unwrap();
    let fit = fit_multi_feature(&records).unwrap();

    let c = fit.model.coefficients();
    let rederived = fit.model.intercept()
        + c[0] * january.water_inflow
        + c[1] * january.rainfall
        + c[2] * january.reservoir_level;
    assert!((rederived - stored.forecast).abs() < 1e-9);
    assert!((fit.r_squared - stored.r_squared).abs() < 1e-12);
}

#[test]
fn test_analyze_existing_dataset_matches_full_run() {
    let generated = scratch_dir("generated");
    let analyzed = scratch_dir("analyzed");
    let records = run_generate(&generated).unwrap();
    assert_eq!(records.len(), 365);

    let dataset = generated.join(hpa_utils::paths::DATASET_FILE);
    let report = run_analyze(&dataset, &analyzed).unwrap();
    let full = run_pipeline(&scratch_dir("full")).unwrap();
    assert_eq!(report.summary, full.summary);
    assert!(!analyzed.join(hpa_utils::paths::DATASET_FILE).exists());
}

#[test]
fn test_missing_january_aborts_before_summary() {
    let dir = scratch_dir("no-january");
    let records: Vec<DailyRecord> = run_generate(&dir)
        .unwrap()
        .into_iter()
        .filter(|r| r.month() != 1)
        .collect();
    let input = dir.join("no_january.csv");
    write_dataset(&input, &records).unwrap();

    let out = dir.join("out");
    let err = run_analyze(&input, &out).unwrap_err();
    assert!(format!("{err:#}").contains("month 1"));
    assert!(!out.join(hpa_utils::paths::SUMMARY_FILE).exists());
    // charts from earlier steps stay on disk
    let trend = format!(
        "{}.{}",
        hpa_utils::paths::TREND_CHART_STEM,
        ImageFormat::default().extension()
    );
    assert!(out.join(trend).exists());
}

#[test]
fn test_unreadable_input_fails() {
    let dir = scratch_dir("unreadable");
    let err = run_analyze(&dir.join("absent.csv"), &dir).unwrap_err();
    assert!(format!("{err:#}").contains("reading dataset"));
}
