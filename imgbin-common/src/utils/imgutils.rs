use image::imageops::{self, FilterType};
use image::{GenericImageView, GrayImage, Luma, Rgb, RgbImage};

pub const WHITE: u8 = u8::MAX;
pub const BLACK: u8 = u8::MIN;

pub fn filled(width: u32, height: u32, red: u8, green: u8, blue: u8) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([red, green, blue]))
}

/// Builds a grayscale image from rows of samples. All rows must be equally
/// long.
pub fn construct_gray(rows: &[&[u8]]) -> GrayImage {
    let height = rows.len() as u32;
    let width = rows.first().map_or(0, |row| row.len()) as u32;
    assert!(rows.iter().all(|row| row.len() as u32 == width));
    GrayImage::from_fn(width, height, |x, y| Luma([rows[y as usize][x as usize]]))
}

/// Expands a single channel image to three identical channels.
pub fn gray_to_rgb(img: &GrayImage) -> RgbImage {
    RgbImage::from_fn(img.width(), img.height(), |x, y| {
        let Luma([v]) = *img.get_pixel(x, y);
        Rgb([v, v, v])
    })
}

pub fn is_img_empty<T>(img: &T) -> bool
where
    T: GenericImageView,
{
    img.width() == 0 || img.height() == 0
}

/// Shrinks the image until both sides fit within `max_side`, keeping the
/// aspect ratio. Images that already fit are returned unscaled.
pub fn fit_within(img: &RgbImage, max_side: u32) -> RgbImage {
    assert_ne!(max_side, 0);
    let (width, height) = img.dimensions();
    let longest = width.max(height);
    if longest <= max_side {
        return img.clone();
    }

    let new_width = ((width as u64 * max_side as u64) / longest as u64).max(1) as u32;
    let new_height = ((height as u64 * max_side as u64) / longest as u64).max(1) as u32;
    imageops::resize(img, new_width, new_height, FilterType::Lanczos3)
}
