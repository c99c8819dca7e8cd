//!
//! 24-bit RGB color as used in base16 schemes.
//!
//! The value is stored in an i32 with the layout `R << 16 | G << 8 | B`.
//! The upper 8 bits are reserved. [Color::NONE] (-1) marks an unset or
//! unparseable color.
//!

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Color(i32);

impl Default for Color {
    fn default() -> Self {
        Color::NONE
    }
}

impl Color {
    /// No color.
    pub const NONE: Color = Color(-1);

    /// Color from a `0xRRGGBB` value. Bits above 24 are dropped.
    pub const fn new(rgb: u32) -> Self {
        Color((rgb & 0xff_ffff) as i32)
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Color(((r as i32) << 16) | ((g as i32) << 8) | b as i32)
    }

    /// Parse a `rrggbb` hex string, case-insensitive, no prefix.
    ///
    /// Anything else gives [Color::NONE]. This doesn't fail,
    /// check for the sentinel if you need to know.
    pub fn parse(rrggbb: &str) -> Color {
        if rrggbb.len() != 6 || !rrggbb.bytes().all(|c| c.is_ascii_hexdigit()) {
            return Color::NONE;
        }
        match u32::from_str_radix(rrggbb, 16) {
            Ok(v) => Color::new(v),
            Err(_) => Color::NONE,
        }
    }

    /// Raw value.
    pub const fn raw(self) -> i32 {
        self.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == Color::NONE.0
    }

    /// Components, None for [Color::NONE].
    pub const fn rgb(self) -> Option<(u8, u8, u8)> {
        if self.is_none() {
            None
        } else {
            Some((
                ((self.0 >> 16) & 0xff) as u8,
                ((self.0 >> 8) & 0xff) as u8,
                (self.0 & 0xff) as u8,
            ))
        }
    }

    /// Exactly 6 lower-case hex digits of the low 24 bits.
    ///
    /// __Note__
    ///
    /// This formats whatever is stored, so [Color::NONE] comes
    /// out as `ffffff`.
    pub fn to_hex_string(self) -> String {
        format!(
            "{:02x}{:02x}{:02x}",
            (self.0 >> 16) & 0xff,
            (self.0 >> 8) & 0xff,
            self.0 & 0xff
        )
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

#[cfg(feature = "serde-impl")]
mod serde_impl {
    use crate::color::Color;
    use serde::de::{Error, Unexpected};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Color {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            if self.is_none() {
                serializer.serialize_none()
            } else {
                serializer.serialize_some(&self.to_hex_string())
            }
        }
    }

    impl<'de> Deserialize<'de> for Color {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            match Option::<String>::deserialize(deserializer)? {
                None => Ok(Color::NONE),
                Some(s) => {
                    let c = Color::parse(&s);
                    if c.is_none() {
                        Err(D::Error::invalid_value(
                            Unexpected::Str(&s),
                            &"a rrggbb hex color",
                        ))
                    } else {
                        Ok(c)
                    }
                }
            }
        }
    }
}
