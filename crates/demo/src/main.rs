// File: crates/demo/src/main.rs
// Summary: Demo loads an x,y CSV (or synthesizes a waveform) and renders idle and hovered SVGs.

use anyhow::{Context, Result};
use plotline_core::types::{HEIGHT, WIDTH};
use plotline_core::{theme, Chart, CurveKind, Dataset, Hover, LayoutCache, PointerEvent};
use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
struct XyRow {
    x: f64,
    y: f64,
    label: String,
}

fn main() -> Result<()> {
    // Accept a CSV path from the CLI or fall back to generated sample data.
    let rows = match std::env::args().nth(1) {
        Some(raw) => {
            let path = PathBuf::from(&raw);
            let rows = load_xy_csv(&path)
                .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
            println!("Loaded {} rows from {}", rows.len(), path.display());
            rows
        }
        None => {
            let rows = synth_waveform(100);
            println!("No input file given; generated {} sample rows", rows.len());
            rows
        }
    };

    let mut chart: Chart<XyRow> = Chart::new();
    chart.title = "Sample Dataset".to_string();
    chart.x_axis.label = "x axis label".to_string();
    chart.y_axis.label = "y axis label".to_string();
    chart.curve = CurveKind::CatmullRom;
    // Optional second argument selects a theme preset by name.
    let theme_name = std::env::args().nth(2).unwrap_or_default();
    chart.theme = theme::find(&theme_name);
    chart.add_dataset(
        Dataset::new("Sample Dataset", rows, |r: &XyRow| (r.x, r.y))
            .with_subtitle("Example data for demonstration")
            .with_style("blue", "none"),
    );

    let mut cache = LayoutCache::new();
    let layout = cache.layout(&chart, WIDTH, HEIGHT);
    println!(
        "Plot inner size {}x{}, x domain [{:.3}, {:.3}], y domain [{:.3}, {:.3}]",
        layout.inner_width, layout.inner_height,
        layout.domain.x.0, layout.domain.x.1,
        layout.domain.y.0, layout.domain.y.1,
    );

    // Idle frame.
    let idle = chart.scene(layout, &Hover::Idle);
    let out_idle = out_name("line_idle");
    plotline_svg::write_svg(&idle, &out_idle)?;
    println!("Wrote {}", out_idle.display());

    // Hovered frame: simulate a pointer move at the plot center.
    let event = PointerEvent::Move {
        x: layout.inner_width / 2.0,
        y: layout.inner_height / 2.0,
    };
    let hover = Hover::Idle.advance(event, layout);
    if let Hover::Hovering { x, y, hit } = hover {
        let label = chart.datum(hit).map(|r| r.label.clone()).unwrap_or_default();
        println!("Hover hit '{label}' at pixel ({x}, {y})");
    }
    let hovered = chart.scene(layout, &hover);
    let out_hover = out_name("line_hover");
    plotline_svg::write_svg(&hovered, &out_hover)?;
    println!("Wrote {}", out_hover.display());

    Ok(())
}

/// Load rows from a CSV with `x,y[,label]` headers (case-insensitive).
fn load_xy_csv(path: &Path) -> Result<Vec<XyRow>> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();
    let col = |name: &str| -> Option<usize> {
        headers.iter().position(|h| h.trim().eq_ignore_ascii_case(name))
    };
    let x_col = col("x").context("missing 'x' column")?;
    let y_col = col("y").context("missing 'y' column")?;
    let label_col = col("label");

    let mut rows = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        let x: f64 = record
            .get(x_col)
            .context("short record")?
            .trim()
            .parse()
            .with_context(|| format!("bad x value on row {}", i + 1))?;
        let y: f64 = record
            .get(y_col)
            .context("short record")?
            .trim()
            .parse()
            .with_context(|| format!("bad y value on row {}", i + 1))?;
        let label = label_col
            .and_then(|c| record.get(c))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Point {}", i + 1));
        rows.push(XyRow { x, y, label });
    }
    Ok(rows)
}

/// Deterministic noisy sine, the same waveform the UI demo mounts with.
fn synth_waveform(n: usize) -> Vec<XyRow> {
    let mut seed: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) as f64 / (1u64 << 31) as f64
    };
    (0..n)
        .map(|i| {
            let x = i as f64;
            let y = (x.sin() + next() * 3.0 + 2.0 * (2.0 * x).cos()).abs();
            XyRow { x, y, label: format!("Point {}", i + 1) }
        })
        .collect()
}

/// Output file name like target/out/chart_<suffix>.svg
fn out_name(suffix: &str) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("chart_{suffix}.svg"));
    out
}
