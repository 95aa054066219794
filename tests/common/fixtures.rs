//! Test images and on-disk helpers.

use bilevel_dither::PixelBuffer;
use ditherlab::rendering::write_png;
use std::path::{Path, PathBuf};

/// Horizontal gray ramp from black to white.
pub fn gray_ramp(width: u32, height: u32) -> PixelBuffer {
    let values: Vec<u8> = (0..width * height)
        .map(|i| ((i % width) * 255 / (width - 1)) as u8)
        .collect();
    PixelBuffer::from_gray(width, height, &values).expect("ramp dimensions")
}

/// Red rises left to right, blue top to bottom, green is constant.
pub fn color_gradient(width: u32, height: u32) -> PixelBuffer {
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[
                (x * 255 / (width - 1)) as u8,
                96,
                (y * 255 / (height - 1)) as u8,
                255,
            ]);
        }
    }
    PixelBuffer::new(width, height, data).expect("gradient dimensions")
}

/// Write `buffer` as `name` inside `dir` and return the path.
pub fn write_fixture(dir: &Path, name: &str, buffer: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    write_png(&path, buffer).expect("write fixture png");
    path
}

/// Encode raw pixel rows with a specific PNG color type and bit depth.
pub fn encode_raw_png(
    width: u32,
    height: u32,
    color: png::ColorType,
    depth: png::BitDepth,
    data: &[u8],
) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(depth);
        let mut writer = encoder.write_header().expect("png header");
        writer.write_image_data(data).expect("png data");
    }
    out
}
