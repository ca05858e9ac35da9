use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{self, Context};
use image::{imageops::grayscale, DynamicImage, GenericImageView};
use imgbin_common::{
    bin_common::init::init_eyre,
    pipeline::{
        binarize::{self, BinarizeCli},
        composite,
        contour::{self, ContourCli},
    },
    utils::imgutils,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Stage {
    Preview,
    Gray,
    Binary,
    Contour,
    Mask,
    Composite,
}

#[derive(Parser)]
#[command()]
/// Dumps intermediate stages of the binarize pipeline
struct Cli {
    /// The stage to dump
    #[arg(long, short = 's', value_enum, default_value = "composite")]
    stage: Stage,

    #[command(flatten)]
    binarize_args: BinarizeCli,

    #[command(flatten)]
    contour_args: ContourCli,

    /// Longest side of the preview stage
    #[arg(long, default_value_t = 250)]
    max_side: u32,

    /// Where to save the resulting image
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// The image file to process
    input: PathBuf,
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();

    let material = image::open(&cli.input)
        .wrap_err_with(|| format!("Could not open {:?}", cli.input))?
        .to_rgb8();
    println!("input:  {:?}", material.bounds());

    let binarize_args = cli.binarize_args.to_args();
    let contour_args = cli.contour_args.to_args();

    let output: DynamicImage = match cli.stage {
        Stage::Preview => imgutils::fit_within(&material, cli.max_side).into(),
        Stage::Gray => grayscale(&material).into(),
        Stage::Binary => binarize::binarize(&grayscale(&material), &binarize_args).into(),
        Stage::Contour => contour::contour(&material, &contour_args).into(),
        Stage::Mask => grayscale(&contour::contour(&material, &contour_args)).into(),
        Stage::Composite => {
            let binary = binarize::binarize(&grayscale(&material), &binarize_args);
            let edges = contour::contour(&material, &contour_args);
            let mask = grayscale(&edges);
            composite::composite(&binary, &edges, &mask)?.into()
        }
    };

    println!("output: {:?}", output.bounds());

    if let Some(output_path) = cli.output {
        output
            .save(&output_path)
            .wrap_err_with(|| format!("Could not save to {output_path:?}"))?;
    }

    Ok(())
}
