mod cli;

use std::io::Write;

use anstream::AutoStream;
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;

use promptline::PromptError;
use promptline::config::path::{get_config_path, set_config_path};
use promptline::config::{PromptConfig, UserConfig};
use promptline::environment;
use promptline::prompt::render_prompt;
use promptline::styling::{eprintln, error_message, hint_message};

use cli::Cli;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("{}", error_message(format!("{err:#}")));
        if let Some(err) = err.downcast_ref::<PromptError>() {
            eprintln!("{}", hint_message(err.hint()));
        }
        std::process::exit(1);
    }
}

/// Logs go to stderr and are off unless `RUST_LOG` or `-v` asks for them.
fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(path) = cli.config {
        set_config_path(path);
    }

    let mut input = environment::read_input(|name| std::env::var_os(name));
    if cli.limited {
        input.limited = true;
    }
    if let Some(max_length) = cli.max_length {
        input.max_length = Some(i64::from(max_length));
    }

    let config_path = get_config_path();
    log::debug!("Config path: {config_path:?}");
    let file_layer = UserConfig::load(config_path.as_deref());
    let env_layer = environment::read_overrides(|name| std::env::var_os(name));
    let config = PromptConfig::from_layers(input.limited, [&file_layer, &env_layer])?;

    let rendered = render_prompt(input, config.style, &config.exit_codes)?;

    let mut stdout = AutoStream::new(std::io::stdout(), cli.color.choice());
    stdout
        .write_all(rendered.as_bytes())
        .context("Failed to write prompt")?;
    stdout.flush().context("Failed to flush prompt")?;
    Ok(())
}
