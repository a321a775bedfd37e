#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };
    pub const RED: Self = Self { r: 255, g: 0, b: 0 };

    /// Converts unit-range channels, clamping anything outside `[0, 1]`.
    #[must_use]
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        let channel = |value: f64| (value.clamp(0.0, 1.0) * 255.0).round() as u8;

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_scales_and_clamps() {
        assert_eq!(Colour::from_unit(0.0, 0.5, 1.0), Colour { r: 0, g: 128, b: 255 });
        assert_eq!(Colour::from_unit(-0.3, 1.7, f64::NAN), Colour { r: 0, g: 255, b: 0 });
    }
}
