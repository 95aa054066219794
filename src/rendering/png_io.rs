//! PNG decoding and encoding for pixel buffers.
//!
//! Every supported PNG is normalised to 8-bit RGBA on the way in; output is
//! always 8-bit RGBA.

use bilevel_dither::{Method, PixelBuffer};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Decode PNG bytes into an RGBA buffer.
///
/// Palette and sub-byte images are expanded and 16-bit samples stripped,
/// so every frame arrives as 8-bit gray, gray+alpha, RGB or RGBA.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let frame = &buf[..info.buffer_size()];

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedPng {
            color_type: info.color_type,
            bit_depth: info.bit_depth,
        });
    }

    let pixel_count = info.width as usize * info.height as usize;
    let mut rgba = Vec::with_capacity(pixel_count * 4);
    match info.color_type {
        png::ColorType::Rgba => rgba.extend_from_slice(frame),
        png::ColorType::Rgb => {
            for px in frame.chunks_exact(3) {
                rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
            }
        }
        png::ColorType::GrayscaleAlpha => {
            for px in frame.chunks_exact(2) {
                rgba.extend_from_slice(&[px[0], px[0], px[0], px[1]]);
            }
        }
        png::ColorType::Grayscale => {
            for &v in frame {
                rgba.extend_from_slice(&[v, v, v, 255]);
            }
        }
        color_type => {
            return Err(AppError::UnsupportedPng {
                color_type,
                bit_depth: info.bit_depth,
            })
        }
    }

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );
    Ok(PixelBuffer::new(info.width, info.height, rgba)?)
}

/// Encode an RGBA buffer as an 8-bit RGBA PNG.
pub fn encode_png(buffer: &PixelBuffer) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(buffer.as_bytes())?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<PixelBuffer, AppError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode and write a PNG file.
pub fn write_png(path: &Path, buffer: &PixelBuffer) -> Result<(), AppError> {
    std::fs::write(path, encode_png(buffer)?)?;
    tracing::info!(path = %path.display(), "Wrote PNG");
    Ok(())
}

/// Default output path for a dithered image: `<stem>_<method>.png` next to
/// the input.
pub fn output_path(input: &Path, method: Method) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_{}.png", method.selector()))
}
