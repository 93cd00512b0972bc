use anyhow::Result;
use clap::Parser;
use regionchart::{
    chart::install_chart_font,
    config::{AppConfig, Args},
    web,
};
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("").add_directive(args.log_level.parse().unwrap_or(Level::INFO.into()))
    });
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) configure data source & fonts ────────────────────────────
    let config = Arc::new(AppConfig::from(&args));
    if !config.csv_path.is_file() {
        warn!(
            "CSV {} not found; chart requests will fail until it exists",
            config.csv_path.display()
        );
    }
    match install_chart_font(args.font.as_deref()) {
        Some(font) => info!("chart font {}", font.display()),
        None => warn!("charts will be rendered without text"),
    }

    // ─── 3) serve ────────────────────────────────────────────────────
    let addr = args.bind_addr();
    info!("Server starting on {}", addr);
    info!("Landing page: http://{}/", addr);
    info!("Health check: http://{}/health", addr);

    warp::serve(web::routes(config)).run(addr).await;

    Ok(())
}
