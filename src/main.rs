use anyhow::Context;
use salescast::application::bootstrap::DashboardContext;
use salescast::config::Config;
use salescast::interfaces::SalesDashboard;
use salescast::interfaces::design_system::DesignSystem;
use salescast::interfaces::view_models::LogFeed;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
        // Dropped silently if the UI has gone away
        let _ = self.sender.try_send(msg);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

// Cloneable wrapper for MakeWriter
#[derive(Clone)]
struct ChannelWriterFactory {
    sender: crossbeam_channel::Sender<String>,
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for ChannelWriterFactory {
    type Writer = ChannelWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ChannelWriter {
            sender: self.sender.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Create Log Channel
    let (log_tx, log_rx) = crossbeam_channel::unbounded();

    // 2. Setup Logging (Stdout + UI)
    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false).pretty();

    let ui_layer = tracing_subscriber::fmt::layer()
        .with_writer(ChannelWriterFactory { sender: log_tx })
        .with_ansi(false) // No color codes for UI text
        .with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .with(ui_layer)
        .init();

    info!("Initializing Sales Forecasting Dashboard...");

    // 3. Load Config
    let config = Config::from_env().context("Failed to load configuration")?;

    // 4. Load model + tables once for the lifetime of the process
    let context = DashboardContext::load(&config.data).with_context(|| {
        format!(
            "Failed to load dashboard data from {:?}",
            config.data.data_dir
        )
    })?;

    let log_feed = LogFeed::new(log_rx, config.ui.log_panel_lines);
    let dashboard = SalesDashboard::new(context, Some(log_feed));
    info!("Data loaded. Launching UI.");

    // 5. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_title("Sales Forecasting Dashboard"),
        ..Default::default()
    };

    eframe::run_native(
        "Sales Forecasting Dashboard",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_theme(eframe::egui::Theme::Dark);
            cc.egui_ctx.set_style(DesignSystem::style());
            Ok(Box::new(dashboard))
        }),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
