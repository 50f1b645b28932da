// File: crates/tschart-cli/src/main.rs
// Summary: CLI host: loads JSON/CSV series data and an optional TOML config, renders the
//          line chart, and writes bare SVG or substitutes it into an HTML page.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tschart_core::{parse_timestamp, render, render_into, ChartConfig, ChartData, ChartError, HtmlPage, Series};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum DataFormat {
    /// `{"x": [...dates], "y": [...values]}`
    Json,
    /// Header row with a date column and a value column
    Csv,
}

#[derive(Debug, Parser)]
#[command(name = "tschart", version, about = "Render a time-series line chart to SVG")]
struct Cli {
    /// Input data file
    #[arg(long)]
    data: PathBuf,

    /// Input format; inferred from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<DataFormat>,

    /// TOML file with chart settings (size, margins, bounds, line style, target)
    #[arg(long)]
    config: Option<PathBuf>,

    /// HTML page whose placeholder element is replaced by the chart
    #[arg(long)]
    page: Option<PathBuf>,

    /// Selector of the placeholder element inside --page
    #[arg(long)]
    target: Option<String>,

    #[arg(long, value_parser = parse_date_arg)]
    x_min: Option<DateTime<Utc>>,
    #[arg(long, value_parser = parse_date_arg)]
    x_max: Option<DateTime<Utc>>,
    #[arg(long, allow_negative_numbers = true)]
    y_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_max: Option<f64>,

    #[arg(long)]
    width: Option<u32>,
    #[arg(long)]
    height: Option<u32>,

    /// Output file; stdout when omitted
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Also write min/max/mean/stdev of the values to this TOML file
    #[arg(long)]
    stats: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Logs go to stderr so SVG on stdout stays clean
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "tschart=info,tschart_core=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<()> {
    let base = match &cli.config {
        Some(path) => load_config(path)?,
        None => ChartConfig::default(),
    };
    let config = apply_overrides(base, &cli);

    let format = cli.format.unwrap_or_else(|| infer_format(&cli.data));
    let series = load_series(&cli.data, format)
        .with_context(|| format!("failed to load data '{}'", cli.data.display()))?;
    tracing::info!(points = series.len(), ?format, "loaded {}", cli.data.display());

    if let Some(stats) = series.summary() {
        tracing::info!(%stats, "series summary");
        if let Some(path) = &cli.stats {
            let text = toml::to_string_pretty(&stats).context("encoding summary")?;
            write_output(Some(path), &text)?;
        }
    } else if cli.stats.is_some() {
        tracing::warn!("no data points; summary file not written");
    }

    let output = match &cli.page {
        Some(page_path) => {
            if config.target.trim().is_empty() {
                anyhow::bail!("--page needs a target selector (--target or `target` in the config file)");
            }
            let html = std::fs::read_to_string(page_path)
                .with_context(|| format!("reading page {}", page_path.display()))?;
            let mut page = HtmlPage::new(html);
            render_into(&mut page, &series, &config)
                .with_context(|| format!("rendering into {}", page_path.display()))?;
            page.into_string()
        }
        None => render(&series, &config).context("rendering chart")?.to_svg_string(),
    };

    write_output(cli.out.as_deref(), &output)
}

fn parse_date_arg(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    parse_timestamp(raw).ok_or_else(|| format!("unrecognized timestamp `{raw}`"))
}

fn load_config(path: &Path) -> Result<ChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
    parse_config(&text).with_context(|| format!("parsing config {}", path.display()))
}

fn parse_config(text: &str) -> Result<ChartConfig> {
    Ok(toml::from_str(text)?)
}

/// Command-line values win over the config file.
fn apply_overrides(mut config: ChartConfig, cli: &Cli) -> ChartConfig {
    if let Some(t) = &cli.target { config.target = t.clone(); }
    if cli.x_min.is_some() { config.x_min = cli.x_min; }
    if cli.x_max.is_some() { config.x_max = cli.x_max; }
    if cli.y_min.is_some() { config.y_min = cli.y_min; }
    if cli.y_max.is_some() { config.y_max = cli.y_max; }
    if let Some(w) = cli.width { config.width = w; }
    if let Some(h) = cli.height { config.height = h; }
    config
}

fn infer_format(path: &Path) -> DataFormat {
    match path.extension().map(|e| e.to_string_lossy().to_lowercase()).as_deref() {
        Some("csv") => DataFormat::Csv,
        _ => DataFormat::Json,
    }
}

fn load_series(path: &Path, format: DataFormat) -> Result<Series> {
    match format {
        DataFormat::Json => {
            let text = std::fs::read_to_string(path).with_context(|| format!("opening {}", path.display()))?;
            load_json(&text)
        }
        DataFormat::Csv => {
            let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
            load_csv(file)
        }
    }
}

fn load_json(text: &str) -> Result<Series> {
    let data = ChartData::from_json(text).context("decoding chart data JSON")?;
    Ok(data.to_series()?)
}

/// Read a header row plus records. Any unparseable row aborts the load.
fn load_csv<R: Read>(reader: R) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();
    tracing::debug!(?headers, "csv headers");

    let idx = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
    let i_date = idx(&["date", "timestamp", "time", "x"]).context("no date column (date/timestamp/time/x)")?;
    let i_value = idx(&["value", "y"]).context("no value column (value/y)")?;

    let mut series = Series::new();
    for (index, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let raw_date = rec.get(i_date).unwrap_or("");
        let date = parse_timestamp(raw_date).ok_or_else(|| ChartError::MalformedPoint {
            index,
            reason: format!("unparseable date `{raw_date}`"),
        })?;
        let raw_value = rec.get(i_value).unwrap_or("");
        let value = raw_value
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ChartError::MalformedPoint { index, reason: format!("unparseable value `{raw_value}`") })?;
        series.push(date, value);
    }
    Ok(series)
}

fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
            }
            std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => println!("{text}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn csv_with_named_columns() {
        let csv = "Date,Value\n2023-02-15 00:00:00,45\n2023-04-10 00:00:00, 62.5\n";
        let series = load_csv(csv.as_bytes()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.points()[1].value, 62.5);
        assert_eq!(series.points()[0].date, Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap());
    }

    #[test]
    fn csv_bad_row_aborts() {
        let csv = "timestamp,y\n2023-01-01,1\n2023-01-02,n/a\n";
        let err = load_csv(csv.as_bytes()).unwrap_err();
        let chart_err = err.downcast_ref::<ChartError>().expect("chart error");
        assert!(matches!(chart_err, ChartError::MalformedPoint { index: 1, .. }));
    }

    #[test]
    fn csv_without_value_column_fails() {
        assert!(load_csv("date,temp\n2023-01-01,1\n".as_bytes()).is_err());
    }

    #[test]
    fn json_payload_loads() {
        let series = load_json(r#"{"x":["2023-02-15 00:00:00"],"y":[45]}"#).unwrap();
        assert_eq!(series.len(), 1);
        assert!(load_json(r#"{"x":["2023-02-15 00:00:00"],"y":[null]}"#).is_err());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(infer_format(Path::new("data/temps.CSV")), DataFormat::Csv);
        assert_eq!(infer_format(Path::new("data/temps.json")), DataFormat::Json);
        assert_eq!(infer_format(Path::new("data/temps")), DataFormat::Json);
    }

    #[test]
    fn toml_config_then_flags() {
        let cfg = parse_config(
            r##"
            target = "#graph"
            width = 800
            y_min = 0.0
            y_max = 100.0
            x_min = "2023-01-01T00:00:00Z"

            [margins]
            left = 60

            [line]
            stroke = "steelblue"
            "##,
        )
        .unwrap();
        assert_eq!(cfg.target, "#graph");
        assert_eq!((cfg.width, cfg.height), (800, 400));
        assert_eq!((cfg.margins.left, cfg.margins.top), (60, 20));
        assert_eq!(cfg.line.stroke, "steelblue");
        assert_eq!(cfg.line.stroke_width, 1.5);
        assert_eq!(cfg.x_min, Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()));

        let cli = Cli::parse_from(["tschart", "--data", "d.json", "--target", "img", "--y-min", "-5", "--height", "300"]);
        let cfg = apply_overrides(cfg, &cli);
        assert_eq!(cfg.target, "img");
        assert_eq!((cfg.y_min, cfg.y_max), (Some(-5.0), Some(100.0)));
        assert_eq!(cfg.height, 300);
    }

    #[test]
    fn date_flags_accept_host_formats() {
        let cli = Cli::parse_from(["tschart", "--data", "d.csv", "--x-min", "2023-02-15 00:00:00", "--x-max", "2023-12-05"]);
        assert_eq!(cli.x_min, Some(Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap()));
        assert!(Cli::try_parse_from(["tschart", "--data", "d.csv", "--x-min", "yesterday"]).is_err());
    }

    #[test]
    fn page_mode_substitutes_placeholder() {
        let dir = std::env::temp_dir().join(format!("tschart-cli-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let data = dir.join("d.json");
        let page = dir.join("p.html");
        let out = dir.join("out/p.html");
        std::fs::write(&data, r#"{"x":["2023-02-15 00:00:00","2023-12-05 00:00:00"],"y":[45,95]}"#).unwrap();
        std::fs::write(&page, r#"<body><img id="chart"></body>"#).unwrap();

        let stats = dir.join("out/stats.toml");
        let cli = Cli::parse_from([
            "tschart",
            "--data", data.to_str().unwrap(),
            "--page", page.to_str().unwrap(),
            "--target", "#chart",
            "--out", out.to_str().unwrap(),
            "--stats", stats.to_str().unwrap(),
        ]);
        run(cli).unwrap();
        let html = std::fs::read_to_string(&out).unwrap();
        assert!(html.starts_with("<body><svg"));
        assert!(html.ends_with("</svg></body>"));

        let stats: toml::Value = toml::from_str(&std::fs::read_to_string(&stats).unwrap()).unwrap();
        assert_eq!(stats["count"].as_integer(), Some(2));
        assert_eq!(stats["mean"].as_float(), Some(70.0));
        assert_eq!(stats["stdev"].as_float(), Some(25.0));
        std::fs::remove_dir_all(&dir).ok();
    }
}
