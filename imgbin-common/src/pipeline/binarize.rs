use clap::Args;
use image::GrayImage;

use crate::utils::imgutils::{BLACK, WHITE};

pub const DEFAULT_THRESHOLD: i32 = 128;

#[derive(Args, Debug)]
pub struct BinarizeCli {
    /// Gray values above this become white, the rest black
    #[arg(long, short = 't', default_value_t = DEFAULT_THRESHOLD)]
    threshold: i32,

    /// Swap the two output levels
    #[arg(long)]
    invert: bool,
}

impl BinarizeCli {
    pub fn to_args(&self) -> BinarizeArgs {
        BinarizeArgs::default()
            .threshold(self.threshold)
            .invert(self.invert)
    }
}

#[derive(Debug, Clone)]
pub struct BinarizeArgs {
    threshold: i32,
    invert: bool,
}

impl Default for BinarizeArgs {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            invert: false,
        }
    }
}

impl BinarizeArgs {
    pub fn threshold(mut self, threshold: i32) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }
}

/// Maps every sample to one of exactly two levels. The threshold is not
/// clamped to the sample range, values outside of it simply turn the whole
/// image into one level.
pub fn binarize(img: &GrayImage, args: &BinarizeArgs) -> GrayImage {
    let (above, below) = if args.invert {
        (BLACK, WHITE)
    } else {
        (WHITE, BLACK)
    };

    let raw = img
        .as_raw()
        .iter()
        .map(|&v| {
            if i32::from(v) > args.threshold {
                above
            } else {
                below
            }
        })
        .collect();

    GrayImage::from_raw(img.width(), img.height(), raw).expect("one sample per pixel")
}
