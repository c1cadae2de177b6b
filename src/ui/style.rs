use crate::ui::form::FieldTone;
use egui::{Color32, FontId, Vec2};

/// Style configuration for the converter panel
#[derive(Debug, Clone)]
pub struct ConverterStyle {
    /// Text color for computed results
    pub normal_text: Color32,
    /// Text color for "Invalid input!" outputs
    pub error_text: Color32,
    /// Font for section headings
    pub heading_font: FontId,
    /// Width of every input and output field
    pub field_width: f32,
    /// Spacing between grid cells
    pub grid_spacing: Vec2,
    /// Vertical gap between the two sections
    pub section_gap: f32,
}

impl ConverterStyle {
    pub fn tone_color(&self, tone: FieldTone) -> Color32 {
        match tone {
            FieldTone::Normal => self.normal_text,
            FieldTone::Error => self.error_text,
        }
    }

    pub fn dark() -> Self {
        Self {
            normal_text: Color32::WHITE,
            error_text: Color32::from_rgb(255, 90, 90),
            ..Self::default()
        }
    }
}

impl Default for ConverterStyle {
    fn default() -> Self {
        Self {
            normal_text: Color32::BLACK,
            error_text: Color32::RED,
            heading_font: FontId::proportional(16.0),
            field_width: 320.0,
            grid_spacing: Vec2::new(12.0, 6.0),
            section_gap: 18.0,
        }
    }
}
