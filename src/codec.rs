//!
//! Conversion between a [Scheme] and the raw key-value mapping
//! of a base16 file.
//!
//! The mapping holds the color slots `base00` .. `base1f` with
//! `rrggbb` values, and the two keys `scheme` and `author`.
//! Nothing else is allowed.
//!

use crate::color::Color;
use crate::color_name::{BASE16_DEFAULT_COLORS, is_valid_color_name};
use crate::error::Base16Error;
use crate::scheme::{ColorScheme, Scheme};
use indexmap::IndexMap;
use log::warn;
use std::collections::HashSet;

/// Key for the scheme name.
pub const SCHEME_KEY: &str = "scheme";
/// Key for the author.
pub const AUTHOR_KEY: &str = "author";

/// String to string mapping as read from/written to a file.
pub type RawMapping = IndexMap<String, String>;

/// Create a scheme from the mapping.
///
/// More than 16 color keys switch to extended mode. Every color key
/// must be a valid color name for the mode, and together they must
/// cover exactly the slots of the scheme.
///
/// Color values that don't parse end up as [Color::NONE],
/// this is not an error. An empty value is the regular way
/// to write an unset color.
pub fn scheme_from_mapping(map: &RawMapping) -> Result<Scheme, Base16Error> {
    let color_keys = map
        .keys()
        .filter(|k| k.as_str() != SCHEME_KEY && k.as_str() != AUTHOR_KEY)
        .collect::<Vec<_>>();
    let extended = color_keys.len() > BASE16_DEFAULT_COLORS;

    let mut seen = HashSet::new();
    for key in &color_keys {
        if !is_valid_color_name(key, extended) {
            return Err(Base16Error::MalformedColorKey(key.to_string()));
        }
        if !seen.insert(key.to_ascii_lowercase()) {
            return Err(Base16Error::DuplicateColorKey(key.to_string()));
        }
    }

    let Some(name) = map.get(SCHEME_KEY) else {
        return Err(Base16Error::MissingRequiredKey(SCHEME_KEY));
    };
    let Some(author) = map.get(AUTHOR_KEY) else {
        return Err(Base16Error::MissingRequiredKey(AUTHOR_KEY));
    };

    let mut scheme = Scheme::with_color_count(name, author, color_keys.len())?;
    for key in color_keys {
        let value = &map[key.as_str()];
        let color = Color::parse(value);
        if color.is_none() && !value.is_empty() {
            warn!("{:?}: invalid color {:?} for {}", name, value, key);
        }
        scheme.set_color(key, color).map_err(|e| match e {
            Base16Error::UnknownColorName(n) => Base16Error::MalformedColorKey(n),
            e => e,
        })?;
    }

    Ok(scheme)
}

/// Mapping for the scheme.
///
/// Starts with `scheme` and `author`, followed by the colors
/// in slot order. Color names are lower-case.
///
/// Unset colors are written as empty string, which reads back
/// as [Color::NONE].
pub fn scheme_to_mapping<S: ColorScheme + ?Sized>(scheme: &S) -> RawMapping {
    let mut map = RawMapping::with_capacity(scheme.color_count() + 2);
    map.insert(SCHEME_KEY.to_string(), scheme.name().to_string());
    map.insert(AUTHOR_KEY.to_string(), scheme.author().to_string());
    for name in scheme.color_names() {
        let color = scheme.color(name);
        let value = if color.is_none() {
            String::new()
        } else {
            color.to_hex_string()
        };
        map.insert(name.clone(), value);
    }
    map
}
