//! # Output Module
//!
//! Turns a rendered [`FrameBuffer`] into files on disk:
//! - TGA: uncompressed 32-bit truecolor, gamma encoded, bottom-up rows
//! - PNG: 8-bit RGB with the same gamma encoding, upright
//! - EXR: linear f32 RGB with no gamma correction, upright
//!
//! ## Gamma
//!
//! The 8-bit formats store `round(linear^2.2 * 255)` per channel, after
//! clipping the linear value to `[0, 1]`. [`gamma_decode`] is the inverse
//! curve on floats.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use exr::prelude::write_rgb_file;
use image::{ImageBuffer, Rgb};
use log::{debug, info};

use crate::camera::FrameBuffer;

/// Exponent of the encoding curve.
pub const GAMMA: f32 = 2.2;

/// Size of the TGA file header in bytes.
pub const TGA_HEADER_LEN: usize = 18;

/// Apply the encoding curve to a linear value.
pub fn gamma_encode(linear: f32) -> f32 {
    linear.powf(GAMMA)
}

/// Invert [`gamma_encode`].
pub fn gamma_decode(encoded: f32) -> f32 {
    encoded.powf(1.0 / GAMMA)
}

/// Clip, gamma encode and quantize one channel to a byte.
pub fn encode_channel(linear: f32) -> u8 {
    (gamma_encode(linear.clamp(0.0, 1.0)) * 255.0).round() as u8
}

/// Serialize `image` as an uncompressed 32 bpp TGA.
///
/// Pixels are written in buffer order (bottom row first, matching the TGA
/// origin for descriptor 0) as `[c2, c1, c0, 255]`, i.e. the blue, green and
/// red channels of the framebuffer in the BGRA order TGA expects.
pub fn encode_tga(image: &FrameBuffer) -> io::Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let too_large = |what: &str, value: u32| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("TGA {} {} does not fit in 16 bits", what, value),
        )
    };
    let width = u16::try_from(width).map_err(|_| too_large("width", width))?;
    let height = u16::try_from(height).map_err(|_| too_large("height", height))?;

    let [w_lo, w_hi] = width.to_le_bytes();
    let [h_lo, h_hi] = height.to_le_bytes();
    let header: [u8; TGA_HEADER_LEN] = [
        0, 0, 2, // uncompressed true color
        0, 0, 0, 0, 0, // no color map
        0, 0, 0, 0, // x/y origin
        w_lo, w_hi, h_lo, h_hi, 32, // bits per pixel
        0,  // descriptor
    ];

    let mut bytes = Vec::with_capacity(TGA_HEADER_LEN + image.as_raw().len());
    bytes.extend_from_slice(&header);
    for pixel in image.pixels() {
        let [r, g, b, _] = pixel.0;
        bytes.extend_from_slice(&[encode_channel(b), encode_channel(g), encode_channel(r), 255]);
    }

    Ok(bytes)
}

/// Write `image` to `output_path` as TGA.
pub fn write_tga(image: &FrameBuffer, output_path: impl AsRef<Path>) -> io::Result<()> {
    let bytes = encode_tga(image)?;
    debug!("Writing {} bytes of TGA data", bytes.len());

    let mut writer = BufWriter::new(File::create(output_path)?);
    writer.write_all(&bytes)?;
    writer.flush()
}

/// Save `image` as 8-bit PNG, flipped so the first row is the top.
pub fn save_png(image: &FrameBuffer, output_path: impl AsRef<Path>) -> image::ImageResult<()> {
    let (width, height) = image.dimensions();
    let u8_image: ImageBuffer<Rgb<u8>, Vec<u8>> = ImageBuffer::from_fn(width, height, |x, y| {
        let [r, g, b, _] = image.get_pixel(x, height - 1 - y).0;
        Rgb([encode_channel(r), encode_channel(g), encode_channel(b)])
    });
    u8_image.save(output_path)
}

/// Save `image` as linear f32 EXR, flipped so the first row is the top.
pub fn save_exr(image: &FrameBuffer, output_path: impl AsRef<Path>) -> exr::error::UnitResult {
    let (width, height) = image.dimensions();
    write_rgb_file(output_path, width as usize, height as usize, |x, y| {
        let [r, g, b, _] = image.get_pixel(x as u32, height - 1 - y as u32).0;
        (r, g, b)
    })
}

/// Save `image`, picking the format from the file extension.
///
/// Accepts `.tga`, `.png` and `.exr` (case-insensitive).
pub fn save_image(image: &FrameBuffer, output_path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let extension = Path::new(output_path)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "tga" => write_tga(image, output_path)?,
        "png" => save_png(image, output_path)?,
        "exr" => save_exr(image, output_path)?,
        other => {
            return Err(format!(
                "Unsupported file extension '{}'. Only .tga, .png and .exr formats are supported.",
                other
            )
            .into())
        }
    }

    info!("Image saved as {}", output_path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn gamma_round_trip() {
        for i in 0..=100 {
            let linear = i as f32 / 100.0;
            let back = gamma_decode(gamma_encode(linear));
            assert!((back - linear).abs() < 1e-4, "{} -> {}", linear, back);
        }
    }

    #[test]
    fn encode_channel_endpoints_and_clipping() {
        assert_eq!(encode_channel(0.0), 0);
        assert_eq!(encode_channel(1.0), 255);
        assert_eq!(encode_channel(-3.0), 0);
        assert_eq!(encode_channel(7.0), 255);
        // 0.5^2.2 * 255 = 55.497...
        assert_eq!(encode_channel(0.5), 55);
    }

    #[test]
    fn tga_header_and_channel_order() {
        let mut image = FrameBuffer::new(300, 2);
        image.put_pixel(0, 0, Rgba([1.0, 0.0, 0.5, 0.0]));

        let bytes = encode_tga(&image).unwrap();
        assert_eq!(bytes.len(), TGA_HEADER_LEN + 300 * 2 * 4);
        assert_eq!(
            bytes[..TGA_HEADER_LEN],
            [0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x2c, 0x01, 2, 0, 32, 0]
        );
        assert_eq!(bytes[TGA_HEADER_LEN..TGA_HEADER_LEN + 4], [encode_channel(0.5), 0, 255, 255]);
        // Every pixel is opaque
        assert!(bytes[TGA_HEADER_LEN..].chunks(4).all(|px| px[3] == 255));
    }

    #[test]
    fn tga_rejects_oversized_images() {
        let image = FrameBuffer::new(70_000, 1);
        let err = encode_tga(&image).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn unknown_extension_is_an_error() {
        let image = FrameBuffer::new(1, 1);
        assert!(save_image(&image, "render.bmp").is_err());
        assert!(save_image(&image, "render").is_err());
    }
}
