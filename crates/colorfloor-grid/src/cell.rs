#![forbid(unsafe_code)]

//! Packed cell colors.
//!
//! Every floor cell stores a [`PackedRgb`]: a 24-bit `0xRRGGBB` value in a
//! single `u32`. All constructors mask to 24 bits, so any reachable value is
//! a valid color: the grid invariant "every cell holds a valid color" falls
//! out of the type rather than being policed at write sites.

/// A packed 24-bit RGB color (`0xRRGGBB`, R in bits 23..16).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct PackedRgb(u32);

impl PackedRgb {
    /// Largest packed value (equal to [`PackedRgb::WHITE`]).
    pub const MAX: u32 = 0x00FF_FFFF;

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Create a color from channel values.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Reconstruct from a raw packed value. Bits above 23 are discarded.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw & Self::MAX)
    }

    /// Raw packed value, always in `[0, MAX]`.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }
}

impl core::fmt::Debug for PackedRgb {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "PackedRgb(#{:06x})", self.0)
    }
}
