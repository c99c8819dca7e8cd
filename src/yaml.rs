//!
//! Text format for the [RawMapping].
//!
//! base16 files are flat yaml documents:
//!
//! ```yaml
//! scheme: "Default Dark"
//! author: "Chris Kempson (http://chriskempson.com)"
//! base00: "181818"
//! base01: "282828"
//! ```
//!
//! Both directions use serde_yaml. Writing keeps the order of
//! the mapping and quotes whatever needs quotes to read back
//! as the same string.
//!

use crate::codec::RawMapping;
use crate::error::Base16Error;
use std::io;

/// Parse a flat yaml mapping of strings.
pub fn parse_mapping(data: &[u8]) -> Result<RawMapping, Base16Error> {
    Ok(serde_yaml::from_slice::<RawMapping>(data)?)
}

/// Write the mapping as yaml, one entry per line for single-line values.
pub fn write_mapping(map: &RawMapping, buf: impl io::Write) -> Result<(), Base16Error> {
    Ok(serde_yaml::to_writer(buf, map)?)
}
