/// RGB color
#[derive(Clone, Copy)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Default for Color {
    fn default() -> Self {
        Self { r: 0, g: 0, b: 0 }
    }
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r: r, g: g, b: b }
    }

    /// Packs the color into a single-byte color code.
    ///
    /// See [`byte_color`](crate::byte_color) for the bit layout.
    pub fn byte_color(self) -> u8 {
        crate::quantize::byte_color(self.r, self.g, self.b)
    }
}
