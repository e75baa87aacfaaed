//! The generate → fit → chart → forecast sequence.
//!
//! Steps run strictly in order; the first failure stops the run and files
//! written by earlier steps stay on disk.

use anyhow::Context;
use hpa_chart::{
    monthly::MonthlyChart, regression::RegressionChart, render, trend::TrendChart, ImageFormat,
};
use hpa_core::{
    record::{column, DailyRecord, MonthlyAggregate},
    summary::ForecastSummary,
};
use hpa_data::{
    dataset::{read_dataset, write_dataset},
    monthly::{aggregate_monthly, select_month},
    summary::write_summary,
    synthetic::{generate, GeneratorConfig},
    workbook::write_workbook,
};
use hpa_model::{
    forecast::{summarize, FORECAST_MONTH},
    multi::{fit_multi_feature, MultiFeatureFit},
    simple::SimpleRegression,
};
use hpa_utils::paths::OutputPaths;
use log::info;
use std::path::Path;

/// Everything the analysis steps computed, for callers that want more than
/// the files on disk.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub paths: OutputPaths,
    pub records: Vec<DailyRecord>,
    pub monthly: Vec<MonthlyAggregate>,
    pub simple: SimpleRegression,
    pub multi: MultiFeatureFit,
    pub summary: ForecastSummary,
}

fn prepare_paths(output_dir: &Path, format: ImageFormat) -> anyhow::Result<OutputPaths> {
    OutputPaths::prepare(output_dir, format.extension())
        .with_context(|| format!("cannot create output directory {}", output_dir.display()))
}

/// Generate the synthetic year and save it as a workbook and as the
/// delimited table `analyze` reads back.
pub fn generate_dataset(paths: &OutputPaths) -> anyhow::Result<Vec<DailyRecord>> {
    let config = GeneratorConfig::default();
    let records = generate(&config).context("generating synthetic dataset")?;
    write_workbook(&paths.workbook, &records)
        .with_context(|| format!("writing spreadsheet {}", paths.workbook.display()))?;
    write_dataset(&paths.dataset, &records)
        .with_context(|| format!("writing dataset {}", paths.dataset.display()))?;
    Ok(records)
}

/// Chart, fit and forecast over `records`, writing charts and the summary.
pub fn analyze(
    records: Vec<DailyRecord>,
    paths: OutputPaths,
    format: ImageFormat,
) -> anyhow::Result<PipelineReport> {
    render(&TrendChart::new(&records), &paths.trend_chart, format)
        .with_context(|| format!("rendering {}", paths.trend_chart.display()))?;

    let simple = SimpleRegression::fit_inflow_power(&records).context("fitting inflow regression")?;
    let inflow = column(&records, |r| r.water_inflow);
    let line = simple.fitted_line(&inflow);
    render(
        &RegressionChart::new(&records, &line),
        &paths.regression_chart,
        format,
    )
    .with_context(|| format!("rendering {}", paths.regression_chart.display()))?;

    let multi = fit_multi_feature(&records).context("fitting multi-feature regression")?;

    let monthly = aggregate_monthly(&records);
    render(&MonthlyChart::new(&monthly), &paths.monthly_chart, format)
        .with_context(|| format!("rendering {}", paths.monthly_chart.display()))?;

    let january = select_month(&monthly, FORECAST_MONTH).context("selecting forecast month")?;
    let summary = summarize(&multi, january);
    info!("Forecast (January): {:.2} MW", summary.forecast);
    write_summary(&paths.summary, &summary)
        .with_context(|| format!("writing summary {}", paths.summary.display()))?;

    Ok(PipelineReport {
        paths,
        records,
        monthly,
        simple,
        multi,
        summary,
    })
}

/// Full pipeline into `output_dir`.
pub fn run_pipeline(output_dir: &Path) -> anyhow::Result<PipelineReport> {
    let paths = prepare_paths(output_dir, ImageFormat::default())?;
    let records = generate_dataset(&paths)?;
    let report = analyze(records, paths, ImageFormat::default())?;
    info!("All visualizations & reports generated.");
    Ok(report)
}

/// Dataset only.
pub fn run_generate(output_dir: &Path) -> anyhow::Result<Vec<DailyRecord>> {
    let paths = prepare_paths(output_dir, ImageFormat::default())?;
    generate_dataset(&paths)
}

/// Analysis steps over a dataset file that already exists.
pub fn run_analyze(input: &Path, output_dir: &Path) -> anyhow::Result<PipelineReport> {
    let records =
        read_dataset(input).with_context(|| format!("reading dataset {}", input.display()))?;
    let paths = prepare_paths(output_dir, ImageFormat::default())?;
    let report = analyze(records, paths, ImageFormat::default())?;
    info!("All visualizations & reports generated.");
    Ok(report)
}
