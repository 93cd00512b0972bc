// src/web/mod.rs

pub mod error;
pub mod handlers;
pub mod page;

use std::sync::Arc;
use warp::{reject::Rejection, reply::Reply, Filter};

use crate::config::AppConfig;
pub use error::HandlerError;
pub use page::IndexPage;

/// All routes of the service:
///
/// | route | reply |
/// |---|---|
/// | `GET /` | landing page |
/// | `GET /chart.png` | per-region totals |
/// | `GET /region/<name>/` | per-subregion totals for one region |
/// | `GET /health` | liveness JSON |
pub fn routes(
    config: Arc<AppConfig>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let with_config = warp::any().map(move || Arc::clone(&config));

    let index = warp::path::end()
        .and(warp::get())
        .and(with_config.clone())
        .and_then(handlers::index);

    let chart = warp::path!("chart.png")
        .and(warp::get())
        .and(with_config.clone())
        .and_then(handlers::chart_png);

    let region = warp::path!("region" / String)
        .and(warp::get())
        .and(with_config)
        .and_then(handlers::region_chart);

    let health = warp::path!("health")
        .and(warp::get())
        .and_then(handlers::health_check);

    index
        .or(chart)
        .or(region)
        .or(health)
        .with(warp::trace::request())
}
