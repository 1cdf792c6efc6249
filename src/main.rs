use eframe::egui;
use sinescope::audio_engine::CpalOutput;
use sinescope::ui::WaveformUI;
use sinescope::{SessionConfig, WaveformSession};

struct SineApp {
    ui: WaveformUI<CpalOutput>,
}

impl eframe::App for SineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui.update(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.ui.shutdown();
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SessionConfig::default();
    log::info!(
        "surface {}x{}, {} Hz, amplitude {}",
        config.width,
        config.height,
        config.frequency,
        config.amplitude
    );
    let session = WaveformSession::with_canvas(config, CpalOutput::new())?;
    let ui = WaveformUI::new(session);

    let options = eframe::NativeOptions {
        initial_window_size: Some(egui::Vec2::new(760.0, 320.0)),
        ..Default::default()
    };

    eframe::run_native(
        "Sine Wave",
        options,
        Box::new(|_cc| Box::new(SineApp { ui })),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))?;

    Ok(())
}
