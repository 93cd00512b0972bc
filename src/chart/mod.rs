// src/chart/mod.rs

pub mod backend;
pub mod fonts;

use anyhow::{anyhow, Context, Result};
use image::{codecs::png::PngEncoder, ExtendedColorType, ImageEncoder};
use plotters::coord::Shift;
use plotters::prelude::*;

use crate::data::GroupTotal;
pub use backend::FontSafeBackend;
pub use fonts::install_chart_font;

/// Family every chart text element is drawn with; see [`install_chart_font`].
pub const FONT_FAMILY: &str = "sans-serif";

pub const OVERVIEW_COLOR: RGBColor = RGBColor(135, 206, 235); // skyblue
pub const REGION_COLOR: RGBColor = RGBColor(255, 165, 0); // orange

const PNG_SIGNATURE: &[u8] = b"\x89PNG\r\n\x1a\n";

/// A titled bar chart: one bar per group, height = group total.
#[derive(Debug, Clone)]
pub struct BarChart {
    pub title: String,
    pub x_desc: String,
    pub y_desc: String,
    pub color: RGBColor,
    pub bars: Vec<GroupTotal>,
}

impl BarChart {
    /// Totals across all regions.
    pub fn overview(bars: Vec<GroupTotal>) -> Self {
        Self {
            title: "Сума значень по областях".into(),
            x_desc: "Область".into(),
            y_desc: "Значення".into(),
            color: OVERVIEW_COLOR,
            bars,
        }
    }

    /// Totals across the subregions of `region`.
    pub fn region(region: &str, bars: Vec<GroupTotal>) -> Self {
        Self {
            title: format!("Райони області: {}", region),
            x_desc: "Місто / Район".into(),
            y_desc: "Значення".into(),
            color: REGION_COLOR,
            bars,
        }
    }

    /// Y-axis range: always includes zero, with headroom above the tallest bar.
    fn value_range(&self) -> (f64, f64) {
        let (lo, hi) = self
            .bars
            .iter()
            .map(|b| b.total)
            .filter(|v| v.is_finite())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if hi - lo <= f64::EPSILON {
            return (0.0, 1.0);
        }
        (lo * 1.1, hi * 1.1)
    }
}

/// Render `chart` at `size` pixels and return the PNG bytes.
pub fn render_png(chart: &BarChart, size: (u32, u32)) -> Result<Vec<u8>> {
    let (width, height) = size;
    let mut pixels = vec![0u8; width as usize * height as usize * 3];
    {
        let root =
            FontSafeBackend::new(BitMapBackend::with_buffer(&mut pixels, size)).into_drawing_area();
        draw_bar_chart(&root, chart).with_context(|| format!("drawing chart {:?}", chart.title))?;
        root.present().context("flushing chart bitmap")?;
    }
    encode_png(&pixels, width, height)
}

fn draw_bar_chart<DB>(root: &DrawingArea<DB, Shift>, chart: &BarChart) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let labels: Vec<&str> = chart.bars.iter().map(|b| b.label.as_str()).collect();
    let slots = (labels.len() as u32).max(1);
    let (y_min, y_max) = chart.value_range();

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT_FAMILY, 24))
        .margin(20)
        .x_label_area_size(140)
        .y_label_area_size(80)
        .build_cartesian_2d((0u32..slots).into_segmented(), y_min..y_max)?;

    let tick_style =
        TextStyle::from((FONT_FAMILY, 14).into_font()).transform(FontTransform::Rotate90);
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(labels.len().max(1))
        .x_label_style(tick_style)
        .x_label_formatter(&|v| segment_label(v, &labels))
        .x_desc(chart.x_desc.as_str())
        .y_desc(chart.y_desc.as_str())
        .axis_desc_style((FONT_FAMILY, 16))
        .draw()?;

    ctx.draw_series(
        Histogram::vertical(&ctx)
            .style(chart.color.filled())
            .margin(10)
            .data(
                chart
                    .bars
                    .iter()
                    .enumerate()
                    .map(|(i, bar)| (i as u32, bar.total)),
            ),
    )?;

    Ok(())
}

fn segment_label(value: &SegmentValue<u32>, labels: &[&str]) -> String {
    match value {
        SegmentValue::CenterOf(idx) => labels
            .get(*idx as usize)
            .map(|s| s.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

fn encode_png(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(rgb.len() / 8);
    PngEncoder::new(&mut out)
        .write_image(rgb, width, height, ExtendedColorType::Rgb8)
        .context("encoding PNG")?;
    if !out.starts_with(PNG_SIGNATURE) {
        return Err(anyhow!("encoder produced a non-PNG stream"));
    }
    Ok(out)
}
