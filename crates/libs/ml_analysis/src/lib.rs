#![deny(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

mod caption_data;
mod clip_encoder;
mod demographics;
mod structs;
mod visual_analyzer;

pub use caption_data::get_caption_data;
pub use clip_encoder::{ClipEncoder, l2_normalize, pick_device, preprocess_image};
pub use demographics::get_face_demographics;
pub use structs::*;
pub use visual_analyzer::VisualAnalyzer;
