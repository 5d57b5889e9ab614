pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

pub(crate) fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
}

/// `floor(v / 2)`, matching integer halving of pixel widths.
pub(crate) fn half_px(v: u32) -> f64 {
    f64::from(v / 2)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
