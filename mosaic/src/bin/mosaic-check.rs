use anyhow::{bail, Result};
use clap::{arg, command};
use mosaic::Config;
use std::path::Path;

fn main() -> Result<()> {
    let matches = command!("Mosaic Check")
        .about("Checks syntax of the configuration file")
        .help_template(mosaic::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs received configuration file."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let config_file = matches.get_one::<String>("INPUT").map(String::as_str);
    let verbose = matches.get_flag("verbose");

    println!(
        "\x1b[0;94m::\x1b[0m Mosaic version: {}",
        env!("CARGO_PKG_VERSION")
    );

    println!("\x1b[0;94m::\x1b[0m Loading configuration . . .");
    let config = match check_config_file(config_file) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            let level = if verbose { "debug" } else { config.log_level.as_str() };
            mosaic::utils::log::setup_logging(level)?;
            if verbose {
                dbg!(&config);
            }
            config
        }
        Err(e) => bail!("Configuration failed. Reason: {e}"),
    };

    println!("\x1b[0;94m::\x1b[0m Checking configuration . . .");
    match config.check(verbose) {
        0 => println!("\x1b[0;92m    -> Configuration OK \x1b[0m"),
        n => bail!("{n} problem(s) found"),
    }
    Ok(())
}

/// Loads configuration from either specified file (preferred) or default.
fn check_config_file(fspath: Option<&str>) -> Result<Config> {
    let config = match fspath {
        Some(path) => {
            let path = Path::new(path);
            if !path.exists() {
                bail!("\"{}\" does not exist", path.display());
            }
            mosaic::read_config(path)?
        }
        None => mosaic::load_from_file()?,
    };
    Ok(config)
}
