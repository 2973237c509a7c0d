use macroquad::color::Color;
use macroquad::math::Vec3;

/// Linear interpolation between two f32 values
pub fn lerp(start: f32, end: f32, alpha: f32) -> f32 {
    start + (end - start) * alpha
}

/// Split a 0xRRGGBB value into its channels
pub fn hex_to_rgb(hex: u32) -> (u8, u8, u8) {
    (
        ((hex >> 16) & 0xff) as u8,
        ((hex >> 8) & 0xff) as u8,
        (hex & 0xff) as u8,
    )
}

/// Opaque color from a 0xRRGGBB value
pub fn hex_color(hex: u32) -> Color {
    let (r, g, b) = hex_to_rgb(hex);
    Color::from_rgba(r, g, b, 255)
}

/// Per-channel interpolation between two colors
pub fn lerp_color(start: Color, end: Color, alpha: f32) -> Color {
    Color::new(
        lerp(start.r, end.r, alpha),
        lerp(start.g, end.g, alpha),
        lerp(start.b, end.b, alpha),
        lerp(start.a, end.a, alpha),
    )
}

pub fn with_alpha(mut color: Color, alpha: f32) -> Color {
    color.a = alpha;
    color
}

/// Lights `base` per channel, then blends it toward `fog_color`. Alpha is
/// kept from `base`.
pub fn shade(base: Color, light: Vec3, fog_color: Color, fog: f32) -> Color {
    let lit = Color::new(base.r * light.x, base.g * light.y, base.b * light.z, base.a);
    with_alpha(lerp_color(lit, fog_color, fog), base.a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_lerp() {
        assert_approx_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_approx_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_approx_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_approx_eq!(lerp(5.0, 10.0, 0.5), 7.5);
    }

    #[test]
    fn test_hex_to_rgb() {
        assert_eq!(hex_to_rgb(0x7c3aed), (0x7c, 0x3a, 0xed));
        assert_eq!(hex_to_rgb(0x000000), (0, 0, 0));
        assert_eq!(hex_to_rgb(0xffffff), (255, 255, 255));
    }

    #[test]
    fn test_hex_color() {
        let color = hex_color(0xff8000);
        assert_approx_eq!(color.r, 1.0);
        assert_approx_eq!(color.g, 128.0 / 255.0);
        assert_approx_eq!(color.b, 0.0);
        assert_approx_eq!(color.a, 1.0);
    }

    #[test]
    fn test_lerp_color() {
        let black = Color::new(0.0, 0.0, 0.0, 1.0);
        let white = Color::new(1.0, 1.0, 1.0, 0.0);
        let mid = lerp_color(black, white, 0.25);
        assert_approx_eq!(mid.r, 0.25);
        assert_approx_eq!(mid.g, 0.25);
        assert_approx_eq!(mid.a, 0.75);
    }

    #[test]
    fn test_shade() {
        let white = Color::new(1.0, 1.0, 1.0, 1.0);
        let fog = Color::new(0.0, 0.0, 0.2, 0.0);

        let lit = shade(white, Vec3::new(0.5, 0.25, 1.0), fog, 0.0);
        assert_approx_eq!(lit.r, 0.5);
        assert_approx_eq!(lit.g, 0.25);
        assert_approx_eq!(lit.b, 1.0);
        assert_approx_eq!(lit.a, 1.0);

        let hazy = shade(white, Vec3::ONE, fog, 0.5);
        assert_approx_eq!(hazy.r, 0.5);
        assert_approx_eq!(hazy.b, 0.6);
        assert_approx_eq!(hazy.a, 1.0);
    }
}
