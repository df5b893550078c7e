//! Seed to pastel color utility
//!
//! Pure function from a 32-bit seed to a packed RGB integer. Each channel is
//! forced into the upper half of its range, which reads as pastel against
//! the black clear color. Same seed, same color, every call.

/// Derive a packed `0xRRGGBB` pastel color from a 32-bit seed
pub fn pastel_rgb(seed: u32) -> u32 {
    let r = 0x80 | ((seed >> 16) & 0x7F);
    let g = 0x80 | ((seed >> 8) & 0x7F);
    let b = 0x80 | (seed & 0x7F);
    (r << 16) | (g << 8) | b
}
