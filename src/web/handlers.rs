// src/web/handlers.rs

use percent_encoding::percent_decode_str;
use std::sync::Arc;
use tracing::{error, info, warn};
use warp::{
    http::StatusCode,
    reject::Rejection,
    reply::{self, Reply, Response},
};

use super::error::{
    HandlerError, CSV_NOT_FOUND, INTERNAL_ERROR, INVALID_CSV_STRUCTURE, UNKNOWN_REGION,
};
use super::page::IndexPage;
use crate::chart::{render_png, BarChart};
use crate::config::AppConfig;
use crate::data::{load_dataset, LoadError, REQUIRED_COLUMNS};

/// Context for the landing page: the sorted distinct regions.
pub fn index_page(config: &AppConfig) -> Result<IndexPage, HandlerError> {
    let dataset = load_dataset(&config.csv_path)?;
    Ok(IndexPage {
        regions: dataset.regions(),
    })
}

/// PNG of the per-region totals.
pub fn overview_png(config: &AppConfig) -> Result<Vec<u8>, HandlerError> {
    let dataset = load_dataset(&config.csv_path)?;
    dataset.ensure_columns(&REQUIRED_COLUMNS)?;
    let chart = BarChart::overview(dataset.region_totals());
    let png = render_png(&chart, config.chart_size)?;
    info!(bars = chart.bars.len(), bytes = png.len(), "rendered overview chart");
    Ok(png)
}

/// PNG of the per-subregion totals inside the region named by the
/// percent-encoded path segment `raw_name`.
///
/// The file is loaded before the name is looked at, so a missing CSV fails
/// the same way whatever the segment holds.
pub fn region_png(config: &AppConfig, raw_name: &str) -> Result<Vec<u8>, HandlerError> {
    let dataset = load_dataset(&config.csv_path)?;
    let region = match percent_decode_str(raw_name).decode_utf8() {
        Ok(name) if dataset.has_region(&name) => name,
        _ => return Err(HandlerError::UnknownRegion(raw_name.to_string())),
    };
    let region = region.as_ref();
    dataset.ensure_columns(&REQUIRED_COLUMNS)?;
    let chart = BarChart::region(region, dataset.subregion_totals(region));
    let png = render_png(&chart, config.chart_size)?;
    info!(region, bars = chart.bars.len(), bytes = png.len(), "rendered region chart");
    Ok(png)
}

pub async fn index(config: Arc<AppConfig>) -> Result<Response, Rejection> {
    let outcome = run_blocking(move || index_page(&config)).await;
    Ok(match outcome {
        Ok(page) => reply::html(page.render()).into_response(),
        Err(e) => internal_error(&e),
    })
}

pub async fn chart_png(config: Arc<AppConfig>) -> Result<Response, Rejection> {
    let outcome = run_blocking(move || overview_png(&config)).await;
    Ok(match outcome {
        Ok(png) => png_response(png),
        Err(HandlerError::Load(LoadError::NotFound(path))) => {
            warn!(path = %path.display(), "overview requested but CSV is missing");
            bad_request(CSV_NOT_FOUND)
        }
        Err(HandlerError::Load(e)) if e.is_structural() => {
            warn!("overview requested but CSV is malformed: {}", e);
            bad_request(INVALID_CSV_STRUCTURE)
        }
        Err(e) => internal_error(&e),
    })
}

pub async fn region_chart(raw_name: String, config: Arc<AppConfig>) -> Result<Response, Rejection> {
    let outcome = run_blocking(move || region_png(&config, &raw_name)).await;
    Ok(match outcome {
        Ok(png) => png_response(png),
        Err(HandlerError::UnknownRegion(name)) => {
            warn!(region = %name, "unknown region requested");
            bad_request(UNKNOWN_REGION)
        }
        Err(e) => internal_error(&e),
    })
}

pub async fn health_check() -> Result<impl Reply, Rejection> {
    Ok(reply::json(&serde_json::json!({
        "status": "healthy",
        "service": "regionchart"
    })))
}

/// File reads and rasterising run on the blocking pool.
async fn run_blocking<T, F>(f: F) -> Result<T, HandlerError>
where
    F: FnOnce() -> Result<T, HandlerError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f).await?
}

fn png_response(png: Vec<u8>) -> Response {
    reply::with_header(png, "content-type", "image/png").into_response()
}

fn bad_request(message: &'static str) -> Response {
    reply::with_status(message, StatusCode::BAD_REQUEST).into_response()
}

fn internal_error(err: &HandlerError) -> Response {
    error!("request failed: {}", err);
    reply::with_status(INTERNAL_ERROR, StatusCode::INTERNAL_SERVER_ERROR).into_response()
}
