/// Quantizes an 8-bit channel value down to 4 bits.
///
/// Equivalent to `round(c * 15 / 255)` with ties rounded to even.
pub fn quantize_channel(c: u8) -> u8 {
    (c as f64 / 255.0 * 15.0).round_ties_even() as u8
}

// Red and green share the same bucketing: the low two bits of the
// quantized value decide whether one or two low bits get cleared.
fn bucket_rg(q: u8) -> u8 {
    if (q & 3) >= 2 { q & 0xE } else { q & 0xC }
}

// Blue keeps only 2 bits of resolution.
fn bucket_b(q: u8) -> u8 {
    if q >= 14 {
        3
    } else if q >= 8 {
        2
    } else if q >= 2 {
        1
    } else {
        0
    }
}

/// Packs an RGB triple into a single-byte color code.
///
/// Each channel is quantized to 4 bits first, then reduced further:
/// red lands in bits 7-5, green in bits 4-2, blue in bits 1-0.
pub fn byte_color(r: u8, g: u8, b: u8) -> u8 {
    let qr = quantize_channel(r);
    let qg = quantize_channel(g);
    let qb = quantize_channel(b);

    (bucket_rg(qr) << 4) + (bucket_rg(qg) << 1) + bucket_b(qb)
}
