/// Device-independent bitmap encoding for clipboard transfer
///
/// The image is flattened to 24-bit RGB, written as an uncompressed BMP,
/// and the 14-byte BITMAPFILEHEADER is dropped. What remains is a
/// BITMAPINFOHEADER followed by bottom-up BGR rows padded to 4 bytes,
/// which is exactly the CF_DIB clipboard payload.

use image::{DynamicImage, ImageFormat};
use std::io::Cursor;

use crate::config::BMP_FILE_HEADER_LEN;
use crate::error::CopyError;

/// Size of BITMAPINFOHEADER
const INFO_HEADER_LEN: usize = 40;
const BI_RGB: u32 = 0;

/// A header-stripped bitmap ready for the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dib {
    pub width: u32,
    pub height: u32,
    /// BITMAPINFOHEADER + pixel data
    pub bytes: Vec<u8>,
}

/// Fields of BITMAPINFOHEADER that we care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct InfoHeader {
    size: u32,
    width: i32,
    height: i32,
    bit_count: u16,
    compression: u32,
}

impl InfoHeader {
    fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < INFO_HEADER_LEN {
            return None;
        }
        let u32_at = |at: usize| u32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]);

        Some(InfoHeader {
            size: u32_at(0),
            width: u32_at(4) as i32,
            height: u32_at(8) as i32,
            bit_count: u16::from_le_bytes([bytes[14], bytes[15]]),
            compression: u32_at(16),
        })
    }

    fn is_rgb24(&self) -> bool {
        self.size as usize == INFO_HEADER_LEN
            && self.bit_count == 24
            && self.compression == BI_RGB
            && self.width > 0
            && self.height != 0
    }
}

/// Bytes per pixel row, padded to a 4-byte boundary
fn row_stride(width: u32) -> usize {
    (width as usize * 3 + 3) & !3
}

/// Encode an image as a 24-bit DIB (BMP without its file header)
pub fn encode_dib(img: &DynamicImage) -> Result<Dib, CopyError> {
    let rgb = img.to_rgb8();

    let mut bmp = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bmp), ImageFormat::Bmp)?;

    let bytes = bmp
        .get(BMP_FILE_HEADER_LEN..)
        .ok_or(CopyError::InvalidBitmap)?
        .to_vec();

    Ok(Dib {
        width: rgb.width(),
        height: rgb.height(),
        bytes,
    })
}

impl Dib {
    /// Decode the pixel rows back into top-down RGBA8
    ///
    /// Used by clipboard backends that take raw pixels instead of CF_DIB.
    pub fn to_rgba(&self) -> Result<Vec<u8>, CopyError> {
        let header = InfoHeader::parse(&self.bytes).ok_or(CopyError::InvalidBitmap)?;
        if !header.is_rgb24() {
            return Err(CopyError::InvalidBitmap);
        }

        let width = header.width as usize;
        let height = header.height.unsigned_abs() as usize;
        let bottom_up = header.height > 0;
        let stride = row_stride(header.width as u32);
        let pixels = &self.bytes[INFO_HEADER_LEN..];

        if pixels.len() < stride * height {
            return Err(CopyError::InvalidBitmap);
        }

        let mut rgba = Vec::with_capacity(width * height * 4);
        for y in 0..height {
            let src_row = if bottom_up { height - 1 - y } else { y };
            let row = &pixels[src_row * stride..src_row * stride + width * 3];
            for bgr in row.chunks_exact(3) {
                rgba.extend_from_slice(&[bgr[2], bgr[1], bgr[0], 255]);
            }
        }

        Ok(rgba)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, Rgba, RgbaImage};

    fn sample() -> DynamicImage {
        let mut img = RgbImage::new(3, 2);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 255, 0]));
        img.put_pixel(2, 0, Rgb([0, 0, 255]));
        img.put_pixel(0, 1, Rgb([1, 2, 3]));
        img.put_pixel(1, 1, Rgb([4, 5, 6]));
        img.put_pixel(2, 1, Rgb([7, 8, 9]));
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_dib_starts_with_info_header() {
        let dib = encode_dib(&sample()).unwrap();
        let header = InfoHeader::parse(&dib.bytes).unwrap();

        assert_eq!(header.size, 40);
        assert_eq!(header.width, 3);
        assert_eq!(header.height.abs(), 2);
        assert_eq!(header.bit_count, 24);
        assert_eq!(header.compression, BI_RGB);
        assert_eq!((dib.width, dib.height), (3, 2));
    }

    #[test]
    fn test_dib_has_no_file_header() {
        let dib = encode_dib(&sample()).unwrap();
        assert_ne!(&dib.bytes[..2], b"BM");
        // 3 pixels * 3 bytes = 9, padded to 12 per row
        assert!(dib.bytes.len() >= 40 + 12 * 2);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let img = RgbaImage::from_pixel(5, 5, Rgba([10, 20, 30, 0]));
        let dib = encode_dib(&DynamicImage::ImageRgba8(img)).unwrap();
        let header = InfoHeader::parse(&dib.bytes).unwrap();
        assert_eq!(header.bit_count, 24);

        let rgba = dib.to_rgba().unwrap();
        assert_eq!(&rgba[..4], &[10, 20, 30, 255]);
    }

    #[test]
    fn test_to_rgba_restores_top_down_order() {
        let dib = encode_dib(&sample()).unwrap();
        let rgba = dib.to_rgba().unwrap();

        assert_eq!(rgba.len(), 3 * 2 * 4);
        assert_eq!(&rgba[0..4], &[255, 0, 0, 255]);
        assert_eq!(&rgba[12..16], &[1, 2, 3, 255]);
        assert_eq!(&rgba[20..24], &[7, 8, 9, 255]);
    }

    #[test]
    fn test_truncated_dib_is_rejected() {
        let dib = Dib {
            width: 1,
            height: 1,
            bytes: vec![40, 0, 0],
        };
        assert!(matches!(dib.to_rgba(), Err(CopyError::InvalidBitmap)));
    }
}
