/// Straight-alpha sRGB color, one byte per channel.
///
/// This is the form the host framework consumes (packed ARGB). Template
/// colors arrive as `#rrggbb`, `#aarrggbb`, or a small set of names.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::from_argb(0x0000_0000);
    pub const BLACK: Color = Color::from_argb(0xFF00_0000);
    pub const WHITE: Color = Color::from_argb(0xFFFF_FFFF);

    #[inline]
    pub const fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpacks `0xAARRGGBB`.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Packs into `0xAARRGGBB`.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Parses `#rrggbb`, `#aarrggbb`, or a color name.
    ///
    /// Alpha comes first in the 8-digit form, matching packed ARGB.
    /// Returns `None` for anything else; callers substitute their own fallback.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            if !hex.bytes().all(|c| c.is_ascii_hexdigit()) {
                return None;
            }
            let v = u32::from_str_radix(hex, 16).ok()?;
            return match hex.len() {
                6 => Some(Self::from_argb(0xFF00_0000 | v)),
                8 => Some(Self::from_argb(v)),
                _ => None,
            };
        }
        Self::named(s)
    }

    fn named(name: &str) -> Option<Self> {
        let argb = match name.to_ascii_lowercase().as_str() {
            "black" => 0xFF00_0000,
            "darkgray" | "darkgrey" => 0xFF44_4444,
            "gray" | "grey" => 0xFF88_8888,
            "lightgray" | "lightgrey" => 0xFFCC_CCCC,
            "white" => 0xFFFF_FFFF,
            "red" => 0xFFFF_0000,
            "green" => 0xFF00_FF00,
            "blue" => 0xFF00_00FF,
            "yellow" => 0xFFFF_FF00,
            "cyan" | "aqua" => 0xFF00_FFFF,
            "magenta" | "fuchsia" => 0xFFFF_00FF,
            "lime" => 0xFF00_FF00,
            "maroon" => 0xFF80_0000,
            "navy" => 0xFF00_0080,
            "olive" => 0xFF80_8000,
            "purple" => 0xFF80_0080,
            "silver" => 0xFFC0_C0C0,
            "teal" => 0xFF00_8080,
            "transparent" => 0x0000_0000,
            _ => return None,
        };
        Some(Self::from_argb(argb))
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }
}
