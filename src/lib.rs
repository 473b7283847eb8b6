mod color;
mod quantize;

pub use color::Color;
pub use quantize::{byte_color, quantize_channel};
