use clap::Args;
use image::imageops::grayscale;
use image::{DynamicImage, RgbImage};

use crate::utils::imgutils;

use self::binarize::{BinarizeArgs, BinarizeCli};
use self::contour::{ContourArgs, ContourCli};

pub mod binarize;
pub mod composite;
pub mod contour;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PipelineError {
    #[error(
        "the {image} image is {actual_width}x{actual_height}, \
         expected {expected_width}x{expected_height}"
    )]
    DimensionMismatch {
        image: &'static str,
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

#[derive(Args, Debug)]
pub struct RenderCli {
    #[command(flatten)]
    binarize_args: BinarizeCli,

    #[command(flatten)]
    contour_args: ContourCli,

    /// Skip the contour overlay and output the binarized image alone
    #[arg(long)]
    no_edges: bool,
}

impl RenderCli {
    pub fn to_args(&self) -> RenderArgs {
        RenderArgs::default()
            .binarize_args(self.binarize_args.to_args())
            .contour_args(self.contour_args.to_args())
            .overlay_edges(!self.no_edges)
    }
}

#[derive(Debug, Clone)]
pub struct RenderArgs {
    binarize_args: BinarizeArgs,
    contour_args: ContourArgs,
    overlay_edges: bool,
}

impl Default for RenderArgs {
    fn default() -> Self {
        Self {
            binarize_args: BinarizeArgs::default(),
            contour_args: ContourArgs::default(),
            overlay_edges: true,
        }
    }
}

impl RenderArgs {
    pub fn binarize_args(mut self, binarize_args: BinarizeArgs) -> Self {
        self.binarize_args = binarize_args;
        self
    }

    pub fn contour_args(mut self, contour_args: ContourArgs) -> Self {
        self.contour_args = contour_args;
        self
    }

    pub fn overlay_edges(mut self, overlay_edges: bool) -> Self {
        self.overlay_edges = overlay_edges;
        self
    }

    /// Runs the whole pipeline on one image: grayscale and binarize it, and
    /// unless the overlay is disabled, lay the result over the contour
    /// rendering of the original, selected per pixel by the contour's own
    /// grayscale.
    pub fn render(&self, img: &DynamicImage) -> Result<RgbImage, PipelineError> {
        let rgb = img.to_rgb8();

        let gray = grayscale(&rgb);
        let binary = binarize::binarize(&gray, &self.binarize_args);

        if !self.overlay_edges {
            return Ok(imgutils::gray_to_rgb(&binary));
        }

        let edges = contour::contour(&rgb, &self.contour_args);
        let mask = grayscale(&edges);
        composite::composite(&binary, &edges, &mask)
    }
}
