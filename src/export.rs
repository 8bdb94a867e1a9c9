//! Serialize a rendered canvas to a PNG file or base64 bytes

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::rendering::Canvas;
use crate::{Error, Result};

const DATA_URI_PREFIX: &[u8] = b"data:image/png;base64,";

/// Write `canvas` as PNG to `path`, overwriting any existing file.
///
/// A `.png` extension is appended when `path` does not already end in one;
/// the path actually written is returned. The canvas is fully encoded before
/// the file is opened, so a failed encode never leaves a partial file.
pub fn to_file(canvas: &Canvas, path: impl AsRef<Path>) -> Result<PathBuf> {
    let path = png_path(path.as_ref());
    let png = canvas.encode_png()?;
    fs::write(&path, &png).map_err(|source| Error::IoError {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {} byte PNG to {}", png.len(), path.display());
    Ok(path)
}

/// PNG-encode `canvas` and base64-encode the result
pub fn to_base64(canvas: &Canvas) -> Result<Vec<u8>> {
    let png = canvas.encode_png()?;
    Ok(STANDARD.encode(png).into_bytes())
}

/// Like [`to_base64`], prefixed with `data:image/png;base64,`
pub fn to_data_uri(canvas: &Canvas) -> Result<Vec<u8>> {
    let b64 = to_base64(canvas)?;
    let mut out = Vec::with_capacity(DATA_URI_PREFIX.len() + b64.len());
    out.extend_from_slice(DATA_URI_PREFIX);
    out.extend_from_slice(&b64);
    Ok(out)
}

fn png_path(path: &Path) -> PathBuf {
    let has_png_ext = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png_ext {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".png");
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Rgba;

    #[test]
    fn png_extension_is_appended_once() {
        assert_eq!(png_path(Path::new("out/board.png")), PathBuf::from("out/board.png"));
        assert_eq!(png_path(Path::new("out/board.PNG")), PathBuf::from("out/board.PNG"));
        assert_eq!(png_path(Path::new("board")), PathBuf::from("board.png"));
        assert_eq!(png_path(Path::new("board.jpg")), PathBuf::from("board.jpg.png"));
    }

    #[test]
    fn base64_decodes_back_to_png() {
        let canvas = Canvas::new(3, 3, Rgba::TRANSPARENT).unwrap();
        let b64 = to_base64(&canvas).unwrap();
        let png = STANDARD.decode(&b64).unwrap();
        assert_eq!(png, canvas.encode_png().unwrap());
    }

    #[test]
    fn data_uri_has_prefix() {
        let canvas = Canvas::new(3, 3, Rgba::TRANSPARENT).unwrap();
        let uri = to_data_uri(&canvas).unwrap();
        assert!(uri.starts_with(DATA_URI_PREFIX));
        assert_eq!(&uri[DATA_URI_PREFIX.len()..], to_base64(&canvas).unwrap().as_slice());
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let canvas = Canvas::new(3, 3, Rgba::TRANSPARENT).unwrap();
        let err = to_file(&canvas, "/nonexistent-dir/for/sure/board.png").unwrap_err();
        match err {
            Error::IoError { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent-dir/for/sure/board.png"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
