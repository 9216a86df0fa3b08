use crate::core::data::colour::Colour;

/// Converts HSV to 8-bit RGB using the six-sector hexagon model.
///
/// `hue` is in degrees and wraps into `[0, 360)`; `saturation` and `value`
/// are expected in `[0, 1]`. Channels are rounded and clamped to `[0, 255]`.
#[must_use]
pub fn hsv_to_rgb(hue: f64, saturation: f64, value: f64) -> Colour {
    let hue = hue.rem_euclid(360.0);
    let chroma = value * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - chroma;

    let (r1, g1, b1) = match (hue / 60.0) as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Colour {
        r: to_channel(r1 + m),
        g: to_channel(g1 + m),
        b: to_channel(b1 + m),
    }
}

fn to_channel(component: f64) -> u8 {
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}
