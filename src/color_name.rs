//!
//! Names of the color slots.
//!
//! A slot is named `base` + two hex digits: `base00` .. `base0f`
//! for standard schemes, up to `base1f` in extended mode.
//! The canonical form is lower-case.
//!

/// Number of colors in a standard scheme.
pub const BASE16_DEFAULT_COLORS: usize = 16;
/// Maximum number of colors in extended mode.
pub const EXTENDED_MODE_MAX_COLORS: usize = 32;

/// Index of a color name.
///
/// The name must be exactly `base` (any case) followed by two hex digits.
pub fn index_of(name: &str) -> Option<u8> {
    if name.len() != 6 || !name.is_char_boundary(4) {
        return None;
    }
    let (prefix, digits) = name.split_at(4);
    if !prefix.eq_ignore_ascii_case("base") {
        return None;
    }
    if !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u8::from_str_radix(digits, 16).ok()
}

/// Canonical name for an index.
pub fn name_of(index: u8) -> String {
    format!("base{:02x}", index)
}

/// Sorted names for the first `count` slots.
pub fn all_names(count: usize) -> Vec<String> {
    let mut names = (0..=u8::MAX).take(count).map(name_of).collect::<Vec<_>>();
    names.sort();
    names
}

/// Is this a valid color name?
///
/// Without extended mode only `base00` .. `base0f` are accepted,
/// with extended mode `base00` .. `base1f`. Case doesn't matter.
pub fn is_valid_color_name(name: &str, extended: bool) -> bool {
    let limit = if extended {
        EXTENDED_MODE_MAX_COLORS
    } else {
        BASE16_DEFAULT_COLORS
    };
    match index_of(name) {
        Some(idx) => (idx as usize) < limit,
        None => false,
    }
}
