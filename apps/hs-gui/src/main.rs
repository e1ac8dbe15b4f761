use eframe::egui;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod app;
mod tabs;
mod theme;
mod utils;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if std::env::var("HS_LOG_FORMAT").as_deref() == Ok("json") {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

fn main() -> eframe::Result<()> {
    init_logging();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_min_inner_size([820.0, 560.0])
            .with_title("HLS Shell"),
        ..Default::default()
    };
    tracing::info!("Starting HLS Shell");

    eframe::run_native(
        "HLS Shell",
        options,
        Box::new(|_cc| Box::new(app::HsApp::restore())),
    )
}
