//!
//! Load/store base16 yaml files.
//!
//! [load_scheme] and [store_scheme] work with any stream.
//! [load] and [save] go through a [SchemeReader]/[SchemeWriter],
//! which default to the filesystem and can be replaced for tests.
//!
//! Writes are not atomic. A failing write can leave a truncated file.
//!

use crate::codec::{scheme_from_mapping, scheme_to_mapping};
use crate::error::Base16Error;
use crate::scheme::{ColorScheme, Scheme};
use crate::yaml::{parse_mapping, write_mapping};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Reads a whole file.
pub trait SchemeReader {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, io::Error>;
}

/// Writes a whole file with the given permissions.
pub trait SchemeWriter {
    fn write_file(&self, path: &Path, data: &[u8], perm: u32) -> Result<(), io::Error>;
}

impl<F> SchemeReader for F
where
    F: Fn(&Path) -> Result<Vec<u8>, io::Error>,
{
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, io::Error> {
        self(path)
    }
}

impl<F> SchemeWriter for F
where
    F: Fn(&Path, &[u8], u32) -> Result<(), io::Error>,
{
    fn write_file(&self, path: &Path, data: &[u8], perm: u32) -> Result<(), io::Error> {
        self(path, data, perm)
    }
}

/// Uses std::fs.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileReader;

impl SchemeReader for FileReader {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>, io::Error> {
        fs::read(path)
    }
}

/// Uses std::fs.
///
/// The permissions are used when the file is created.
/// They are ignored on non-unix systems.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileWriter;

impl SchemeWriter for FileWriter {
    fn write_file(&self, path: &Path, data: &[u8], perm: u32) -> Result<(), io::Error> {
        use std::io::Write;

        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(perm);
        }
        #[cfg(not(unix))]
        {
            _ = perm;
        }

        let mut f = options.open(path)?;
        f.write_all(data)?;
        f.flush()
    }
}

/// Load a scheme from a base16 yaml stream.
pub fn load_scheme(mut r: impl io::Read) -> Result<Scheme, Base16Error> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    let map = parse_mapping(&buf)?;
    scheme_from_mapping(&map)
}

/// Store a scheme as base16 yaml.
pub fn store_scheme<S: ColorScheme + ?Sized>(
    scheme: &S,
    buf: impl io::Write,
) -> Result<(), Base16Error> {
    write_mapping(&scheme_to_mapping(scheme), buf)
}

/// Load a base16 yaml file.
pub fn load(path: impl AsRef<Path>) -> Result<Scheme, Base16Error> {
    load_with(path, &FileReader)
}

/// Load a base16 yaml file with the given reader.
pub fn load_with<R: SchemeReader + ?Sized>(
    path: impl AsRef<Path>,
    reader: &R,
) -> Result<Scheme, Base16Error> {
    let path = path.as_ref();
    let data = reader.read_file(path)?;
    let scheme = load_scheme(data.as_slice())?;
    debug!(
        "loaded {:?} from {:?}: {} colors, extended {}",
        scheme.name(),
        path,
        scheme.color_count(),
        scheme.is_extended()
    );
    Ok(scheme)
}

/// Save as base16 yaml file.
pub fn save<S: ColorScheme + ?Sized>(
    path: impl AsRef<Path>,
    scheme: &S,
    perm: u32,
) -> Result<(), Base16Error> {
    save_with(path, scheme, perm, &FileWriter)
}

/// Save as base16 yaml file with the given writer.
pub fn save_with<S: ColorScheme + ?Sized, W: SchemeWriter + ?Sized>(
    path: impl AsRef<Path>,
    scheme: &S,
    perm: u32,
    writer: &W,
) -> Result<(), Base16Error> {
    let path = path.as_ref();
    let mut data = Vec::new();
    store_scheme(scheme, &mut data)?;
    writer.write_file(path, &data, perm)?;
    debug!(
        "saved {:?} to {:?}: {} colors",
        scheme.name(),
        path,
        scheme.color_count()
    );
    Ok(())
}
