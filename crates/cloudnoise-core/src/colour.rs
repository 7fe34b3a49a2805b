/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::new(0, 0, 0);
    pub const WHITE: Colour = Colour::new(255, 255, 255);

    /// Mask used by the `filter` command.
    pub const FILTER_MASK: Colour = Colour::new(127, 127, 254);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn grey(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }

    /// Pack as `R << 16 | G << 8 | B`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Inverse of [`Colour::to_packed`]; bits above 24 are ignored.
    #[inline]
    pub const fn from_packed(packed: u32) -> Self {
        Self {
            r: (packed >> 16 & 0xFF) as u8,
            g: (packed >> 8 & 0xFF) as u8,
            b: (packed & 0xFF) as u8,
        }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
