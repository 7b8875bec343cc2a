use frauddesk::application::console::FraudConsole;
use frauddesk::application::ml::{
    ModelCache, ModelContract, OnnxFraudClassifier, SharedClassifier,
};
use frauddesk::config::Config;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::prelude::*;

// A writer that sends logs to the UI via a crossbeam channel
struct ChannelWriter {
    sender: crossbeam_channel::Sender<String>,
}

impl std::io::Write for ChannelWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let msg = String::from_utf8_lossy(buf).to_string();
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

    info!("Initializing Fraud Desk...");

    // 3. Load Config
    let config = Config::from_env()?;

    // 4. Load the model once for the process lifetime. A missing or broken
    // artifact is fatal: the console has nothing to show without it.
    let cache = ModelCache::new();
    let classifier = cache
        .get_or_load(|| {
            let contract = ModelContract::load(config.contract_path.as_deref())?;
            let model = OnnxFraudClassifier::load(config.model_path.clone(), contract)?;
            Ok(Arc::new(model) as SharedClassifier)
        })
        .map_err(|e| anyhow::anyhow!("Failed to load fraud model: {}", e))?;

    info!(
        "Model ready: {} {}",
        classifier.name(),
        classifier.version()
    );

    // 5. Run UI (Blocks Main Thread)
    let console = FraudConsole::new(classifier, log_rx);

    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 780.0])
            .with_title("Fraud Desk"),
        ..Default::default()
    };

    eframe::run_native(
        "Fraud Desk",
        native_options,
        Box::new(|_cc| Ok(Box::new(console))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
