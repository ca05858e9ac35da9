use std::{fs::File, path::Path};

use color_eyre::eyre::{self, Context};

pub fn init_eyre() -> eyre::Result<()> {
    use color_eyre::config::{HookBuilder, Theme};
    let eyre_color = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        Theme::dark()
    } else {
        Theme::new()
    };

    HookBuilder::default()
        .theme(eyre_color)
        .install()
        .wrap_err("Failed to install eyre")
}

pub fn init_logger(logfile: Option<&Path>) -> eyre::Result<()> {
    use simplelog::*;

    let mut builder = ConfigBuilder::new();
    builder.set_target_level(LevelFilter::Error);
    builder.set_level_padding(LevelPadding::Right);

    // NOTE: set_time_offset_to_local can only be run while there is a single
    // thread active.
    let timezone_failed = builder.set_time_offset_to_local().is_err();

    let level = LevelFilter::Debug;
    let log_color = if std::io::IsTerminal::is_terminal(&std::io::stdout()) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        builder.build(),
        TerminalMode::Stdout,
        log_color,
    )];

    if let Some(logfile) = logfile {
        let file = File::create(logfile).wrap_err_with(|| {
            format!("Failed to create the log file at: {}", logfile.display())
        })?;
        loggers.push(WriteLogger::new(level, builder.build(), file));
    }

    CombinedLogger::init(loggers).wrap_err("Failed to set the logger")?;

    if timezone_failed {
        log::warn!("Failed to set the logger to the local time zone, using UTC");
    }

    Ok(())
}
