use clap::Args;
use image::{Rgb, RgbImage};

pub const DEFAULT_STRENGTH: f32 = 1.0;

type Kernel3 = [[i32; 3]; 3];

/// An 8-neighbor difference kernel. It sums to zero, so a constant
/// neighborhood maps to exactly the offset.
const CONTOUR_KERNEL: Kernel3 = [[-1, -1, -1], [-1, 8, -1], [-1, -1, -1]];
const CONTOUR_OFFSET: i32 = 255;

#[derive(Args, Debug)]
pub struct ContourCli {
    /// How strongly edges darken the contour rendering
    #[arg(long, default_value_t = DEFAULT_STRENGTH)]
    strength: f32,
}

impl ContourCli {
    pub fn to_args(&self) -> ContourArgs {
        ContourArgs::default().strength(self.strength)
    }
}

#[derive(Debug, Clone)]
pub struct ContourArgs {
    strength: f32,
}

impl Default for ContourArgs {
    fn default() -> Self {
        Self {
            strength: DEFAULT_STRENGTH,
        }
    }
}

impl ContourArgs {
    pub fn strength(mut self, strength: f32) -> Self {
        self.strength = strength;
        self
    }
}

/// Renders the outlines of the image: flat regions come out white, edges
/// dark. Border pixels are convolved with their coordinates clamped to the
/// image.
pub fn contour(img: &RgbImage, args: &ContourArgs) -> RgbImage {
    let (width, height) = img.dimensions();
    let mut out = RgbImage::new(width, height);

    for y in 0..height {
        let ys = [y.saturating_sub(1), y, (y + 1).min(height - 1)];
        for x in 0..width {
            let xs = [x.saturating_sub(1), x, (x + 1).min(width - 1)];

            let mut sums = [0i32; 3];
            for (ky, &yy) in ys.iter().enumerate() {
                for (kx, &xx) in xs.iter().enumerate() {
                    let weight = CONTOUR_KERNEL[ky][kx];
                    let pixel = img.get_pixel(xx, yy);
                    for (sum, &sample) in sums.iter_mut().zip(pixel.0.iter()) {
                        *sum += weight * i32::from(sample);
                    }
                }
            }

            let mut rendered = [0u8; 3];
            for (channel, sum) in rendered.iter_mut().zip(sums) {
                let response = (sum as f32 * args.strength).round() as i32;
                *channel = (CONTOUR_OFFSET + response).clamp(0, 255) as u8;
            }
            out.put_pixel(x, y, Rgb(rendered));
        }
    }

    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utils::imgutils::{filled, BLACK, WHITE};

    fn lone_bright_pixel() -> RgbImage {
        let mut img = filled(5, 5, BLACK, BLACK, BLACK);
        img.put_pixel(2, 2, Rgb([WHITE, WHITE, WHITE]));
        img
    }

    #[test]
    fn uniform_images_render_all_white() {
        let img = filled(6, 5, 128, 128, 128);
        let out = contour(&img, &ContourArgs::default());

        assert_eq!((6, 5), out.dimensions());
        assert!(out.pixels().all(|p| *p == Rgb([WHITE, WHITE, WHITE])));
    }

    #[test]
    fn edges_darken_their_neighborhood() {
        let out = contour(&lone_bright_pixel(), &ContourArgs::default());

        for (x, y, pixel) in out.enumerate_pixels() {
            let beside_the_dot =
                x.abs_diff(2) <= 1 && y.abs_diff(2) <= 1 && (x, y) != (2, 2);
            if beside_the_dot {
                assert_eq!(Rgb([BLACK, BLACK, BLACK]), *pixel, "at {x},{y}");
            } else {
                assert_eq!(Rgb([WHITE, WHITE, WHITE]), *pixel, "at {x},{y}");
            }
        }
    }

    #[test]
    fn strength_scales_the_response() {
        let out = contour(&lone_bright_pixel(), &ContourArgs::default().strength(0.2));

        // -255 * 0.2 rounds to -51
        assert_eq!(Rgb([204, 204, 204]), *out.get_pixel(1, 2));
        assert_eq!(Rgb([WHITE, WHITE, WHITE]), *out.get_pixel(2, 2));
        assert_eq!(Rgb([WHITE, WHITE, WHITE]), *out.get_pixel(0, 0));
    }
}
