use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{self, Context};
use imgbin_common::{
    bin_common::init::{init_eyre, init_logger},
    pipeline::RenderCli,
    session::Session,
};

#[derive(Parser)]
#[command()]
/// Binarizes an image and lays the result over its own contours
struct Cli {
    #[command(flatten)]
    render_args: RenderCli,

    /// Where to save the resulting image
    #[arg(long, short = 'o', default_value = "image.png")]
    output: PathBuf,

    /// Open the saved result in the system image viewer
    #[arg(long)]
    show: bool,

    /// A file to additionally write the logs to
    #[arg(long)]
    logfile: Option<PathBuf>,

    /// The image file to process
    input: PathBuf,
}

fn main() -> eyre::Result<()> {
    init_eyre()?;
    let cli = Cli::parse();
    init_logger(cli.logfile.as_deref())?;

    let mut session = Session::new();
    session
        .load(&cli.input)
        .wrap_err_with(|| format!("Could not open {:?}", cli.input))?;

    let Some(result) = session.render(&cli.render_args.to_args())? else {
        log::warn!("No image is loaded, there is nothing to do");
        return Ok(());
    };

    result
        .save(&cli.output)
        .wrap_err_with(|| format!("Could not save to {:?}", cli.output))?;
    log::info!("Saved the result to: {}", cli.output.display());

    if cli.show {
        opener::open(&cli.output)
            .wrap_err_with(|| format!("Could not show {:?}", cli.output))?;
    }

    Ok(())
}
