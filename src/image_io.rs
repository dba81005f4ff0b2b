//! Conversion between image files and pixel matrices.
//!
//! Decoded images of any color type are reduced to 8 bit luma before they
//! reach the compression routines. Reconstructions are written as PNG.

use crate::types::{ImageCompressionError, PixelMatrix, Result};
use image::{DynamicImage, GrayImage, ImageFormat, ImageOutputFormat};
use log::debug;
use ndarray::ArrayView2;
use std::io::Cursor;
use std::path::Path;

/// Decode an in-memory image file into a grayscale pixel matrix.
pub fn decode_grayscale(bytes: &[u8]) -> Result<PixelMatrix> {
    let image = image::load_from_memory(bytes)?;
    to_pixel_matrix(image.to_luma8())
}

/// Load an image file from disk into a grayscale pixel matrix.
pub fn load_grayscale<P: AsRef<Path>>(path: P) -> Result<PixelMatrix> {
    let image = image::open(path.as_ref())?;
    debug!(
        "Loaded {:?} image of size {}x{} from {}",
        image.color(),
        image.width(),
        image.height(),
        path.as_ref().display()
    );
    to_pixel_matrix(image.to_luma8())
}

/// Encode a pixel matrix as PNG.
pub fn encode_png(pixels: ArrayView2<u8>) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(to_gray_image(pixels)?)
        .write_to(&mut Cursor::new(&mut bytes), ImageOutputFormat::Png)?;
    Ok(bytes)
}

/// Write a pixel matrix to disk as PNG.
pub fn save_png<P: AsRef<Path>>(pixels: ArrayView2<u8>, path: P) -> Result<()> {
    to_gray_image(pixels)?.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// File name offered for the download of a rank `rank` reconstruction.
pub fn download_file_name(rank: usize) -> String {
    format!("compressed_k{}.png", rank)
}

fn to_pixel_matrix(image: GrayImage) -> Result<PixelMatrix> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageCompressionError::InvalidInput(format!(
            "image has zero dimensions {}x{}",
            width, height
        )));
    }

    Ok(PixelMatrix::from_shape_vec(
        (height as usize, width as usize),
        image.into_raw(),
    )?)
}

fn to_gray_image(pixels: ArrayView2<u8>) -> Result<GrayImage> {
    let (height, width) = pixels.dim();
    if pixels.is_empty() {
        return Err(ImageCompressionError::InvalidInput(format!(
            "cannot encode an empty {}x{} image",
            height, width
        )));
    }

    // Logical iteration order is row major for any memory layout.
    let raw: Vec<u8> = pixels.iter().copied().collect();

    GrayImage::from_raw(width as u32, height as u32, raw).ok_or_else(|| {
        ImageCompressionError::InvalidInput(format!(
            "pixel buffer does not fit a {}x{} image",
            height, width
        ))
    })
}
