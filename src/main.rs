// src/main.rs

use captioner::config::{CliConfig, CommandLineInput};
use captioner::{parse_script, run_script, AppError, Captioner, ScriptReport};
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    Config,
};
use std::fs;

/// Sets up logging configuration. Logs go to stderr so stdout stays clean for captions.
fn setup_logging(verbose: bool) -> Result<(), AppError> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .build(Root::builder().appender("stderr").build(log_level))
        .map_err(|e| AppError::Logging(e.to_string()))?;

    log4rs::init_config(config)?;
    log::debug!("Logging initialized");
    Ok(())
}

/// Loads the script, replays it and writes the results.
fn execute(config: &CliConfig) -> anyhow::Result<()> {
    let json = fs::read_to_string(&config.script).map_err(|source| AppError::ScriptNotFound {
        path: config.script.display().to_string(),
        source,
    })?;
    let calls = parse_script(&json).map_err(|source| AppError::JsonParseError {
        path: config.script.clone(),
        source,
    })?;
    log::info!("Loaded {} call(s) from {}", calls.len(), config.script.display());

    let mut captioner = Captioner::new(config.captioner.clone());
    let report = run_script(&mut captioner, &calls)?;

    let rendered = compose_output(config, &captioner, &report)
        .context("Failed to serialize the caption registry")?;
    match &config.output_file {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write captions to {}", path.display()))?;
            log::info!("Captions written to {}", path.display());
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn compose_output(
    config: &CliConfig,
    captioner: &Captioner,
    report: &ScriptReport,
) -> Result<String, AppError> {
    let mut out = String::new();
    for line in &report.lines {
        out.push_str(line);
        out.push('\n');
    }
    if config.listing {
        out.push('\n');
        out.push_str(&captioner.listing());
    }
    if config.dump_registry {
        let entries: Vec<_> = captioner.registry().entries().collect();
        out.push('\n');
        out.push_str(&serde_json::to_string_pretty(&entries)?);
        out.push('\n');
    }
    Ok(out)
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    setup_logging(cli.verbose)?;

    let config = CliConfig::resolve(cli).context("Failed to resolve captioner configuration")?;

    execute(&config)?;

    Ok(())
}
