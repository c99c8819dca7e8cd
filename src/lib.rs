//!
//! base16 color-schemes.
//!
//! A [Scheme] holds the 16 colors `base00` .. `base0f` of a
//! base16 scheme plus its name and author. With more than 16
//! colors it switches to the non-standard extended mode that
//! allows up to 32 colors `base00` .. `base1f`.
//!
//! Schemes can be loaded from and stored as the yaml files
//! used by the base16 repositories.
//!
//! ```rust
//! # use rat_base16::{Color, ColorScheme, Scheme, load_scheme, store_scheme};
//! let mut scheme = Scheme::new("Demo", "nobody");
//! scheme.set_color("base0A", Color::parse("f7ca88")).expect("slot");
//!
//! let mut buf = Vec::new();
//! store_scheme(&scheme, &mut buf).expect("store");
//! let loaded = load_scheme(buf.as_slice()).expect("load");
//!
//! assert_eq!(loaded.color("base0a").to_hex_string(), "f7ca88");
//! ```
//!

pub mod codec;
pub mod color;
pub mod color_name;
mod error;
pub mod scheme;
pub mod scheme_io;
pub mod yaml;

pub use codec::{RawMapping, scheme_from_mapping, scheme_to_mapping};
pub use color::Color;
pub use error::Base16Error;
pub use scheme::{ColorScheme, Scheme, SchemeOptions};
pub use scheme_io::{
    FileReader, FileWriter, SchemeReader, SchemeWriter, load, load_scheme, load_with, save,
    save_with, store_scheme,
};
