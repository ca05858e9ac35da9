use image::{GrayImage, Rgb, RgbImage};

use super::PipelineError;

/// Mask samples at or above this select the binarized image.
pub const SELECT_CUTOFF: u8 = 128;

fn check_dimensions(
    which: &'static str,
    expected: (u32, u32),
    actual: (u32, u32),
) -> Result<(), PipelineError> {
    if expected != actual {
        return Err(PipelineError::DimensionMismatch {
            image: which,
            expected_width: expected.0,
            expected_height: expected.1,
            actual_width: actual.0,
            actual_height: actual.1,
        });
    }
    Ok(())
}

/// Merges the binarized image and the contour rendering. Each output pixel is
/// taken whole from one of the two inputs, decided by the mask sample at that
/// position. All three images must have the same dimensions.
pub fn composite(
    binary: &GrayImage,
    contour: &RgbImage,
    mask: &GrayImage,
) -> Result<RgbImage, PipelineError> {
    let dimensions = binary.dimensions();
    check_dimensions("contour", dimensions, contour.dimensions())?;
    check_dimensions("mask", dimensions, mask.dimensions())?;

    let mut out = RgbImage::new(dimensions.0, dimensions.1);
    for (x, y, pixel) in out.enumerate_pixels_mut() {
        *pixel = if mask.get_pixel(x, y)[0] >= SELECT_CUTOFF {
            let v = binary.get_pixel(x, y)[0];
            Rgb([v, v, v])
        } else {
            *contour.get_pixel(x, y)
        };
    }

    Ok(out)
}
