use anyhow::Context;
use geomc::{
    ui::{ConverterPanel, ConverterStyle, UiConverterExt},
    Converter, WorldScale,
};

/// Standalone converter window.
///
/// Usage: `geomc-app [scale.json]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scale = match std::env::args_os().nth(1) {
        Some(path) => WorldScale::load(&path)
            .with_context(|| format!("failed to load world scale from {:?}", path))?,
        None => WorldScale::default(),
    };
    log::info!(
        "Using world half extents {} x {}",
        scale.half_width,
        scale.half_height
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 420.0])
            .with_title("GeoMC Coordinate Converter"),
        ..Default::default()
    };

    eframe::run_native(
        "geomc-app",
        options,
        Box::new(move |cc| Box::new(GeoMcApp::new(cc, scale))),
    )
    .map_err(|e| anyhow::anyhow!("failed to open converter window: {e}"))
}

/// The main application struct
struct GeoMcApp {
    panel: ConverterPanel,
    dark_mode: bool,
}

impl GeoMcApp {
    fn new(cc: &eframe::CreationContext<'_>, scale: WorldScale) -> Self {
        let dark_mode = cc.egui_ctx.style().visuals.dark_mode;
        let style = if dark_mode {
            ConverterStyle::dark()
        } else {
            ConverterStyle::default()
        };

        Self {
            panel: ConverterPanel::new()
                .with_converter(Converter::with_scale(scale))
                .with_style(style),
            dark_mode,
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.dark_mode {
            self.dark_mode = dark_mode;
            self.panel.style = if dark_mode {
                ConverterStyle::dark()
            } else {
                ConverterStyle::default()
            };
        }
    }
}

impl eframe::App for GeoMcApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                egui::widgets::global_dark_light_mode_switch(ui);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let scale = self.panel.converter.scale();
                    ui.label(format!(
                        "World: ±{} × ±{}",
                        scale.half_width, scale.half_height
                    ));
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.converter_panel(&mut self.panel);
        });
    }
}
