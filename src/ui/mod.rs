pub mod form;

#[cfg(feature = "egui")]
pub mod panel;
#[cfg(feature = "egui")]
pub mod style;

pub use form::{FieldTone, FormOutcome, GameInput, GeoInput};

#[cfg(feature = "egui")]
pub use panel::{ConverterPanel, UiConverterExt};
#[cfg(feature = "egui")]
pub use style::ConverterStyle;
