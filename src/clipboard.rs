/// Clipboard Copier
///
/// Loads the full-resolution source image, re-encodes it as a 24-bit DIB
/// and hands it to a clipboard backend. On Windows the DIB is written
/// verbatim as CF_DIB; elsewhere the same pixels go through arboard.

use std::path::Path;

use crate::error::CopyError;
use crate::imaging::bitmap::{encode_dib, Dib};

/// Somewhere a DIB payload can be placed, replacing whatever was there
pub trait ClipboardSink {
    fn put_dib(&mut self, dib: &Dib) -> Result<(), CopyError>;
}

/// Copy the image at `path` onto `sink`
pub fn copy_image(path: &Path, sink: &mut dyn ClipboardSink) -> Result<(), CopyError> {
    let img = image::open(path).map_err(|source| CopyError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    let dib = encode_dib(&img)?;
    sink.put_dib(&dib)?;

    log::info!(
        "Copied {} ({}x{}, {} bytes) to the clipboard",
        path.display(),
        dib.width,
        dib.height,
        dib.bytes.len()
    );
    Ok(())
}

fn to_err(e: impl std::fmt::Display) -> CopyError {
    CopyError::Clipboard(e.to_string())
}

/// The operating system clipboard
#[derive(Default)]
pub struct SystemClipboard {
    // X11/Wayland only serve clipboard contents while the owner is alive
    #[cfg(not(windows))]
    inner: Option<arboard::Clipboard>,
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish()
    }
}

#[cfg(windows)]
impl ClipboardSink for SystemClipboard {
    fn put_dib(&mut self, dib: &Dib) -> Result<(), CopyError> {
        use clipboard_win::{formats, raw, Clipboard};

        // Closed when `_clip` is dropped
        let _clip = Clipboard::new_attempts(10).map_err(to_err)?;
        raw::empty().map_err(to_err)?;
        raw::set_without_clear(formats::CF_DIB, &dib.bytes).map_err(to_err)?;

        Ok(())
    }
}

#[cfg(not(windows))]
impl ClipboardSink for SystemClipboard {
    fn put_dib(&mut self, dib: &Dib) -> Result<(), CopyError> {
        use std::borrow::Cow;

        let rgba = dib.to_rgba()?;

        let clipboard = match self.inner.take() {
            Some(clipboard) => clipboard,
            None => arboard::Clipboard::new().map_err(to_err)?,
        };
        let clipboard = self.inner.insert(clipboard);

        clipboard.clear().map_err(to_err)?;
        clipboard
            .set_image(arboard::ImageData {
                width: dib.width as usize,
                height: dib.height as usize,
                bytes: Cow::Owned(rgba),
            })
            .map_err(to_err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    #[derive(Default)]
    struct MemoryClipboard {
        contents: Option<Dib>,
    }

    impl ClipboardSink for MemoryClipboard {
        fn put_dib(&mut self, dib: &Dib) -> Result<(), CopyError> {
            self.contents = Some(dib.clone());
            Ok(())
        }
    }

    struct BusyClipboard;

    impl ClipboardSink for BusyClipboard {
        fn put_dib(&mut self, _dib: &Dib) -> Result<(), CopyError> {
            Err(CopyError::Clipboard("clipboard is locked".to_string()))
        }
    }

    #[test]
    fn test_copy_uses_full_resolution() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png");
        RgbImage::from_pixel(640, 480, Rgb([200, 100, 50])).save(&path).unwrap();

        let mut clipboard = MemoryClipboard::default();
        copy_image(&path, &mut clipboard).unwrap();

        let dib = clipboard.contents.unwrap();
        assert_eq!((dib.width, dib.height), (640, 480));
        let width = u32::from_le_bytes(dib.bytes[4..8].try_into().unwrap());
        let height = i32::from_le_bytes(dib.bytes[8..12].try_into().unwrap());
        assert_eq!(width, 640);
        assert_eq!(height.abs(), 480);
    }

    #[test]
    fn test_copy_flattens_transparent_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ghost.png");
        RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 128])).save(&path).unwrap();

        let mut clipboard = MemoryClipboard::default();
        copy_image(&path, &mut clipboard).unwrap();

        let dib = clipboard.contents.unwrap();
        assert_eq!(u16::from_le_bytes([dib.bytes[14], dib.bytes[15]]), 24);
    }

    #[test]
    fn test_copy_deleted_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone.png");

        let mut clipboard = MemoryClipboard::default();
        let result = copy_image(&path, &mut clipboard);

        assert!(matches!(result, Err(CopyError::Decode { .. })));
        assert!(clipboard.contents.is_none());
    }

    #[test]
    fn test_clipboard_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.png");
        RgbImage::new(2, 2).save(&path).unwrap();

        let err = copy_image(&path, &mut BusyClipboard).unwrap_err();
        assert!(err.to_string().contains("clipboard is locked"));
    }
}
