// src/plot.rs
//
// Presentation sink: turns fetched rows into PNG charts. Rows without a
// mean value are skipped, same as every other consumer of the store.

use std::path::Path;

use chrono::Datelike;
use plotters::prelude::*;

use crate::config::consts::{PLOT_HEIGHT, PLOT_WIDTH};
use crate::data::WeatherRow;
use crate::error::PlotError;

/// Box plot of mean temperatures per calendar month, pooled over the
/// inclusive year range.
pub fn monthly_boxplot(
    rows: &[WeatherRow],
    start_year: i32,
    end_year: i32,
    out: &Path,
) -> Result<(), PlotError> {
    let buckets = monthly_buckets(rows, start_year, end_year);
    let values: Vec<f64> = buckets.iter().flatten().copied().collect();
    if values.is_empty() {
        return Err(PlotError::NoData);
    }
    let (lo, hi) = padded_range(&values);

    let root = BitMapBackend::new(out, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Mean monthly temperatures ({start_year}-{end_year})"),
            ("sans-serif", 28),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d((1u32..13u32).into_segmented(), (lo as f32)..(hi as f32))
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc("Month")
        .y_desc("Temperature (°C)")
        .x_label_formatter(&|v| match v {
            SegmentValue::CenterOf(m) | SegmentValue::Exact(m) => m.to_string(),
            SegmentValue::Last => String::new(),
        })
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(buckets.iter().enumerate().filter(|(_, b)| !b.is_empty()).map(
            |(i, bucket)| {
                let month = i as u32 + 1;
                Boxplot::new_vertical(
                    SegmentValue::CenterOf(month),
                    &Quartiles::new(bucket),
                )
            },
        ))
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

/// Line plot of mean temperatures per day for one (year, month).
pub fn daily_lineplot(
    rows: &[WeatherRow],
    year: i32,
    month: u32,
    out: &Path,
) -> Result<(), PlotError> {
    let series = daily_series(rows, year, month);
    if series.is_empty() {
        return Err(PlotError::NoData);
    }
    let values: Vec<f64> = series.iter().map(|&(_, t)| t).collect();
    let (lo, hi) = padded_range(&values);
    let last_day = series.last().map(|&(d, _)| d).unwrap_or(31);

    let root = BitMapBackend::new(out, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("Daily mean temperatures - {year:04}-{month:02}"),
            ("sans-serif", 28),
        )
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(1u32..last_day + 1, lo..hi)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .x_desc("Day")
        .y_desc("Temperature (°C)")
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(LineSeries::new(series.iter().copied(), &BLUE))
        .map_err(render_err)?;
    chart
        .draw_series(series.iter().map(|&(d, t)| Circle::new((d, t), 3, BLUE.filled())))
        .map_err(render_err)?;

    root.present().map_err(render_err)
}

/* ---------- series assembly (pure, tested) ---------- */

fn monthly_buckets(rows: &[WeatherRow], start_year: i32, end_year: i32) -> [Vec<f64>; 12] {
    let mut buckets: [Vec<f64>; 12] = Default::default();
    for row in rows {
        let Some(avg) = row.avg_temp else { continue };
        let year = row.date.year();
        if year >= start_year && year <= end_year {
            buckets[row.date.month0() as usize].push(avg);
        }
    }
    buckets
}

fn daily_series(rows: &[WeatherRow], year: i32, month: u32) -> Vec<(u32, f64)> {
    rows.iter()
        .filter(|r| r.date.year() == year && r.date.month() == month)
        .filter_map(|r| r.avg_temp.map(|avg| (r.date.day(), avg)))
        .collect()
}

fn padded_range(values: &[f64]) -> (f64, f64) {
    let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
    let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let pad = ((hi - lo) * 0.1).max(1.0);
    (lo - pad, hi + pad)
}

fn render_err(e: impl std::fmt::Display) -> PlotError {
    PlotError::Render(e.to_string())
}
