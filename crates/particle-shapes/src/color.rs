/// RGBA color in linear space with values in [0, 1]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert sRGB color (0-255) to linear space
    #[inline]
    pub const fn from_srgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        const fn srgb_to_linear(c: u8) -> f32 {
            let x = c as f32 / 255.0;
            if x <= 0.04045 {
                x / 12.92
            } else {
                // Polynomial approximation of ((x + 0.055) / 1.055)^2.4
                let t = (x + 0.055) / 1.055;
                t * t * (0.5870 * t + 0.4130)
            }
        }

        Self::new(
            srgb_to_linear(r),
            srgb_to_linear(g),
            srgb_to_linear(b),
            a as f32 / 255.0,
        )
    }

    /// Opaque color from a `0xRRGGBB` literal, the way stylesheet colors are written.
    pub const fn from_hex(rgb: u32) -> Self {
        Self::from_srgba(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
            255,
        )
    }

    /// with alpha builder method taking f32
    pub const fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Multiply the current alpha, used for distance faded connection lines.
    pub fn fade(mut self, factor: f32) -> Self {
        self.a *= factor.clamp(0.0, 1.0);
        self
    }

    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The handful of stylesheet colors the page themes draw with.
pub mod palette {
    use super::Color;

    pub const WHITE: Color = Color::from_hex(0xffffff);
    pub const WHITE_40: Color = WHITE.with_alpha(0.4);

    pub const BLUE_500: Color = Color::from_hex(0x3b82f6);
    pub const VIOLET_500: Color = Color::from_hex(0x8b5cf6);
    pub const EMERALD_500: Color = Color::from_hex(0x10b981);
    pub const EMERALD_400: Color = Color::from_hex(0x34d399);
    pub const RED_500: Color = Color::from_hex(0xef4444);
    pub const AMBER_400: Color = Color::from_hex(0xfbbf24);
    pub const CYAN_400: Color = Color::from_hex(0x22d3ee);
    pub const PINK_400: Color = Color::from_hex(0xf472b6);
    pub const INDIGO_400: Color = Color::from_hex(0x818cf8);
    pub const SLATE_400: Color = Color::from_hex(0x94a3b8);
    pub const SKY_TRACE: Color = Color::from_srgba(50, 200, 250, 255);
    pub const PERIWINKLE: Color = Color::from_srgba(200, 200, 255, 255);

    /// Page background behind the canvas.
    pub const SLATE_950: Color = Color::from_hex(0x020617);
}
