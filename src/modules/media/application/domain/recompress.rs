use std::io::Cursor;
use std::path::Path;

use fast_image_resize::{images::Image, FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, GenericImageView, ImageReader};

/// Long-edge ceiling for recompressed uploads.
pub const MAX_LONG_EDGE: u32 = 1920;

/// JPEG quality for recompressed uploads.
pub const JPEG_QUALITY: u8 = 75;

pub struct RecompressedImage {
    /// Original stem with a `.jpg` extension.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Decode, scale down to the long-edge ceiling when needed, and re-encode
/// as JPEG. Alpha is flattened since JPEG has no transparency. Fails on
/// anything the decoder cannot read (HEIC included); callers fall back to
/// uploading the original bytes.
pub fn recompress_to_jpeg(file_name: &str, bytes: &[u8]) -> Result<RecompressedImage, String> {
    let img = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| format!("Failed to guess format: {e}"))?
        .decode()
        .map_err(|e| format!("Failed to decode image: {e}"))?;

    let (w, h) = img.dimensions();
    let rgb = img.to_rgb8();

    let (out_w, out_h) = scaled_dimensions(w, h);

    let pixels = if (out_w, out_h) == (w, h) {
        rgb.into_raw()
    } else {
        let src = Image::from_vec_u8(w, h, rgb.into_raw(), PixelType::U8x3)
            .map_err(|e| format!("Failed to create source image: {e}"))?;
        let mut dst = Image::new(out_w, out_h, PixelType::U8x3);

        Resizer::new()
            .resize(
                &src,
                &mut dst,
                &ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear)),
            )
            .map_err(|e| format!("Resize failed: {e}"))?;

        dst.buffer().to_vec()
    };

    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY)
        .encode(&pixels, out_w, out_h, ExtendedColorType::Rgb8)
        .map_err(|e| format!("JPEG encode failed: {e}"))?;

    Ok(RecompressedImage {
        file_name: jpeg_file_name(file_name),
        bytes: out,
    })
}

/// Fit within the long-edge ceiling, preserving aspect ratio. Images
/// already within bounds keep their dimensions.
pub fn scaled_dimensions(w: u32, h: u32) -> (u32, u32) {
    let long_edge = w.max(h);
    if long_edge <= MAX_LONG_EDGE {
        return (w, h);
    }

    let scale = MAX_LONG_EDGE as f32 / long_edge as f32;
    let out_w = ((w as f32 * scale).round() as u32).max(1);
    let out_h = ((h as f32 * scale).round() as u32).max(1);
    (out_w, out_h)
}

fn jpeg_file_name(file_name: &str) -> String {
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);
    format!("{stem}.jpg")
}
