//!
//! The base16 scheme.
//!
//! A [Scheme] has a name, an author and 16 colors `base00` .. `base0f`.
//! In extended mode it can have up to 32 colors `base00` .. `base1f`.
//!
//! Color names are converted to lower case for all accesses,
//! `base0A` and `base0a` are the same slot.
//!

use crate::color::Color;
use crate::color_name::{
    BASE16_DEFAULT_COLORS, EXTENDED_MODE_MAX_COLORS, all_names, is_valid_color_name,
    name_of,
};
use crate::error::Base16Error;
use std::collections::HashMap;

/// Access to a base16 color scheme.
///
/// Load and store work with this trait, so you can hand
/// them something else than a [Scheme].
pub trait ColorScheme {
    /// Author of the scheme.
    fn author(&self) -> &str;

    fn set_author(&mut self, author: &str);

    /// Scheme identifier.
    fn name(&self) -> &str;

    fn set_name(&mut self, name: &str);

    /// Number of color slots.
    fn color_count(&self) -> usize;

    /// Color for the name. Unknown names give [Color::NONE].
    fn color(&self, name: &str) -> Color;

    /// Set the color for a slot.
    fn set_color(&mut self, name: &str, color: Color) -> Result<(), Base16Error>;

    /// **Sorted** list of all slot names.
    fn color_names(&self) -> &[String];

    /// More than 16 colors.
    fn is_extended(&self) -> bool;
}

/// Options for creating a [Scheme].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SchemeOptions {
    /// Number of colors. Defaults to 16, at most 32.
    pub color_count: Option<usize>,
    /// Allows set_color() to add new slots.
    pub extensible: bool,
}

impl SchemeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color_count(mut self, count: usize) -> Self {
        self.color_count = Some(count);
        self
    }

    pub fn extensible(mut self, extensible: bool) -> Self {
        self.extensible = extensible;
        self
    }
}

/// base16 color scheme.
///
/// All slots start out as [Color::NONE].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scheme {
    name: String,
    author: String,
    colors: HashMap<String, Color>,
    color_names: Vec<String>,
    extended: bool,
    extensible: bool,
}

impl Scheme {
    /// Standard scheme with 16 colors.
    pub fn new(name: impl Into<String>, author: impl Into<String>) -> Self {
        Self::create(name.into(), author.into(), BASE16_DEFAULT_COLORS, false)
    }

    /// Scheme with 16 to 32 colors.
    /// More than 16 colors switch to extended mode.
    pub fn with_color_count(
        name: impl Into<String>,
        author: impl Into<String>,
        count: usize,
    ) -> Result<Self, Base16Error> {
        Self::with_options(name, author, SchemeOptions::new().color_count(count))
    }

    pub fn with_options(
        name: impl Into<String>,
        author: impl Into<String>,
        options: SchemeOptions,
    ) -> Result<Self, Base16Error> {
        let count = match options.color_count {
            Some(n) if !(BASE16_DEFAULT_COLORS..=EXTENDED_MODE_MAX_COLORS).contains(&n) => {
                return Err(Base16Error::InvalidColorCount(n));
            }
            Some(n) => n,
            None => BASE16_DEFAULT_COLORS,
        };
        Ok(Self::create(
            name.into(),
            author.into(),
            count,
            options.extensible,
        ))
    }

    fn create(name: String, author: String, count: usize, extensible: bool) -> Self {
        let color_names = all_names(count);
        let colors = color_names
            .iter()
            .map(|v| (v.clone(), Color::NONE))
            .collect::<HashMap<_, _>>();
        Self {
            name,
            author,
            colors,
            color_names,
            extended: count > BASE16_DEFAULT_COLORS,
            extensible,
        }
    }

    /// set_color() can add new slots.
    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    /// Iterate name and color in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.color_names
            .iter()
            .map(|v| (v.as_str(), self.color(v.as_str())))
    }
}

impl ColorScheme for Scheme {
    fn author(&self) -> &str {
        self.author.as_str()
    }

    fn set_author(&mut self, author: &str) {
        self.author = author.to_string();
    }

    fn name(&self) -> &str {
        self.name.as_str()
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn color_count(&self) -> usize {
        self.colors.len()
    }

    fn color(&self, name: &str) -> Color {
        self.colors
            .get(&name.to_ascii_lowercase())
            .copied()
            .unwrap_or(Color::NONE)
    }

    /// Overwrites an existing slot.
    ///
    /// Unknown names fail with [Base16Error::UnknownColorName].
    /// An extensible scheme can add the next slot after the last one,
    /// which keeps the slots `base00` .. `base(n-1)` without gaps.
    fn set_color(&mut self, name: &str, color: Color) -> Result<(), Base16Error> {
        let key = name.to_ascii_lowercase();
        if let Some(c) = self.colors.get_mut(&key) {
            *c = color;
            return Ok(());
        }

        if !self.extensible {
            return Err(Base16Error::UnknownColorName(name.to_string()));
        }
        if !is_valid_color_name(&key, true) {
            return Err(Base16Error::MalformedColorKey(name.to_string()));
        }
        // valid extended names are below 32, so the count fits too.
        if key != name_of(self.colors.len() as u8) {
            return Err(Base16Error::UnknownColorName(name.to_string()));
        }

        self.colors.insert(key.clone(), color);
        self.color_names.push(key);
        self.extended = self.colors.len() > BASE16_DEFAULT_COLORS;
        Ok(())
    }

    fn color_names(&self) -> &[String] {
        &self.color_names
    }

    fn is_extended(&self) -> bool {
        self.extended
    }
}

#[cfg(feature = "serde-impl")]
mod serde_impl {
    use crate::codec::{RawMapping, scheme_from_mapping, scheme_to_mapping};
    use crate::scheme::Scheme;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Scheme {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            scheme_to_mapping(self).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Scheme {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let map = RawMapping::deserialize(deserializer)?;
            scheme_from_mapping(&map).map_err(D::Error::custom)
        }
    }
}
