//! Reusable dialog building blocks.

pub mod dialog_frame;
pub mod input_field;

pub use dialog_frame::{render_dialog_frame, DialogFrameConfig};
pub use input_field::{render_input_field, InputFieldConfig, INPUT_FIELD_HEIGHT};
