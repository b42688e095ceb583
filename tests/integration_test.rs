use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use anyhow::Result;
use tempfile::tempdir;

fn binary() -> Command {
    Command::new(env!("CARGO_BIN_EXE_morsel-sales"))
}

fn samples_directory() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("samples").join("data")
}

fn write_config(directory: &Path, data_directory: &Path, product_filter: &str) -> Result<PathBuf> {
    let path = directory.join("sales_config.yaml");

    fs::write(&path, format!(
        "data_directory: \"{}\"\nproduct_filter: {}\noutput_directory: \"{}\"\n",
        data_directory.display(),
        product_filter,
        directory.display()
    ))?;

    Ok(path)
}

fn ingest(config: &Path) -> Result<Output> {
    Ok(binary().arg("ingest").arg("--config").arg(config).output()?)
}

#[test]
fn test_cli_writes_sales_summary_for_samples() -> Result<()> {
    let directory = tempdir()?;
    let config = write_config(directory.path(), &samples_directory(), "pink morsel")?;

    let output = ingest(&config)?;

    assert!(output.status.success());

    let summary = fs::read_to_string(directory.path().join("pink_morsel_sales_summary.csv"))?;
    let lines: Vec<&str> = summary.lines().collect();

    assert_eq!(lines, vec![
        "sales,date,region",
        "$15.00,2020-01-01,north",
        "$6.00,2020-01-01,north",
        "$12.00,2020-01-02,south",
        "$6.00,2020-01-01,south",
        "$0.00,2020-01-02,east"
    ]);

    Ok(())
}

#[test]
fn test_cli_exits_cleanly_without_output_when_nothing_matches() -> Result<()> {
    let directory = tempdir()?;
    let config = write_config(directory.path(), &samples_directory(), "blue morsel")?;

    let output = ingest(&config)?;

    assert!(output.status.success());
    assert!(!directory.path().join("blue_morsel_sales_summary.csv").exists());

    Ok(())
}

#[test]
fn test_cli_fails_without_configuration() -> Result<()> {
    let directory = tempdir()?;

    let output = ingest(&directory.path().join("missing.yaml"))?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("missing.yaml"));

    Ok(())
}

#[test]
fn test_cli_renders_dashboard_from_summary() -> Result<()> {
    let directory = tempdir()?;
    let config = write_config(directory.path(), &samples_directory(), "pink morsel")?;
    let page_path = directory.path().join("dashboard.html");

    assert!(ingest(&config)?.status.success());

    let output = binary()
        .arg("render")
        .arg("--input").arg(directory.path().join("pink_morsel_sales_summary.csv"))
        .arg("--output").arg(&page_path)
        .output()?;

    assert!(output.status.success());

    let page = fs::read_to_string(&page_path)?;

    assert!(page.contains("Pink Morsel Sales Analysis Dashboard"));
    assert!(page.contains("Data Source: pink_morsel_sales_summary.csv"));
    assert!(page.contains(r#""name":"north","x":["2020-01-01"],"y":[21.0]"#));
    assert!(page.contains(r#""name":"south","x":["2020-01-01","2020-01-02"],"y":[6.0,12.0]"#));
    assert!(page.contains("Total Sales ($)"));

    Ok(())
}

#[test]
fn test_cli_renders_empty_chart_for_missing_summary() -> Result<()> {
    let directory = tempdir()?;
    let page_path = directory.path().join("dashboard.html");

    let output = binary()
        .arg("--log-level").arg("error")
        .arg("render")
        .arg("--input").arg(directory.path().join("pink_morsel_sales_summary.csv"))
        .arg("--output").arg(&page_path)
        .output()?;

    assert!(output.status.success());
    assert!(fs::read_to_string(&page_path)?.contains(r#""data":[]"#));

    Ok(())
}
