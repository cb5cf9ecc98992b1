use anyhow::Result;
use clap::Parser;

use nbtl_cli::cli::commands::{config, translate};
use nbtl_cli::cli::{Args, Command, exit_code};
use nbtl_cli::output::{self, OutputConfig};
use nbtl_cli::translation::print_languages;
use nbtl_cli::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    init_logging(args.verbose);
    output::init(OutputConfig {
        quiet: args.quiet,
        ..OutputConfig::default()
    });

    if let Err(err) = run(args).await {
        eprintln!("{} {err:#}", Style::error("Error:"));
        std::process::exit(exit_code(&err));
    }
}

/// `RUST_LOG` wins; otherwise warnings only, or everything from this crate
/// with `--verbose`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "nbtl_cli=debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(args: Args) -> Result<()> {
    let recursive = args.recursive();

    match args.command {
        Some(Command::Languages { translator }) => {
            print_languages(translator);
        }
        Some(Command::Config) => {
            config::show_config()?;
        }
        None => {
            let options = translate::TranslateOptions {
                path: args.path,
                source: args.source,
                target: args.target,
                delay: args.delay,
                retries: args.retries,
                translator: args.translator,
                rename: args.rename,
                print: args.print,
                directory: args.directory,
                recursive,
                no_cache: args.no_cache,
            };
            translate::run_translate(options).await?;
        }
    }

    Ok(())
}
