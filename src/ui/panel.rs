use crate::{
    data::{conversion::Converter, formats::GeoNotation},
    ui::{
        form::{FormOutcome, GameInput, GeoInput},
        style::ConverterStyle,
    },
};
use egui::{Grid, Response, RichText, TextEdit, Ui};

/// Two-way converter panel
///
/// Outputs are recomputed from the input text on every frame, so whatever is
/// on screen always reflects the latest edit.
///
/// ```rust,ignore
/// let mut panel = ConverterPanel::new();
/// ui.converter_panel(&mut panel);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConverterPanel {
    pub converter: Converter,
    pub game: GameInput,
    pub geo: GeoInput,
    pub style: ConverterStyle,
}

impl ConverterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_converter(mut self, converter: Converter) -> Self {
        self.converter = converter;
        self
    }

    pub fn with_style(mut self, style: ConverterStyle) -> Self {
        self.style = style;
        self
    }

    pub fn show(&mut self, ui: &mut Ui) -> Response {
        ui.vertical(|ui| {
            self.game_section(ui);
            ui.add_space(self.style.section_gap);
            ui.separator();
            self.geo_section(ui);
        })
        .response
    }

    fn game_section(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Game → Geographic").font(self.style.heading_font.clone()));

        let style = &self.style;
        Grid::new("geomc_game_to_geo")
            .num_columns(2)
            .spacing(style.grid_spacing)
            .show(ui, |ui| {
                input_row(ui, "X", &mut self.game.x, style);
                input_row(ui, "Z", &mut self.game.z, style);

                let outcome = self.game.evaluate(&self.converter);
                for notation in GeoNotation::ALL {
                    let text = outcome.notation_text(notation);
                    output_row(ui, notation.label(), text, &outcome, style);
                }
            });
    }

    fn geo_section(&mut self, ui: &mut Ui) {
        ui.label(RichText::new("Geographic → Game").font(self.style.heading_font.clone()));

        let style = &self.style;
        Grid::new("geomc_geo_to_game")
            .num_columns(2)
            .spacing(style.grid_spacing)
            .show(ui, |ui| {
                input_row(ui, "Latitude", &mut self.geo.lat, style);
                input_row(ui, "Longitude", &mut self.geo.lng, style);

                let outcome = self.geo.evaluate(&self.converter);
                output_row(ui, "Result", outcome.result_text(), &outcome, style);
            });
    }
}

fn input_row(ui: &mut Ui, label: &str, text: &mut String, style: &ConverterStyle) {
    ui.label(label);
    ui.add(TextEdit::singleline(text).desired_width(style.field_width));
    ui.end_row();
}

fn output_row<T>(
    ui: &mut Ui,
    label: &str,
    text: String,
    outcome: &FormOutcome<T>,
    style: &ConverterStyle,
) {
    ui.label(label);
    ui.add(
        TextEdit::singleline(&mut text.as_str())
            .desired_width(style.field_width)
            .text_color(style.tone_color(outcome.tone())),
    );
    ui.end_row();
}

/// Convenience for placing a converter panel
pub trait UiConverterExt {
    fn converter_panel(&mut self, panel: &mut ConverterPanel) -> Response;
}

impl UiConverterExt for Ui {
    fn converter_panel(&mut self, panel: &mut ConverterPanel) -> Response {
        panel.show(self)
    }
}
