use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::translation::Backend;

#[derive(Parser, Debug)]
#[command(name = "nbtl")]
#[command(about = "Translate the text of Jupyter notebooks between natural languages")]
#[command(version)]
pub struct Args {
    /// Notebook file or directory of notebooks
    pub path: Option<PathBuf>,

    /// Source language code or name (e.g., en, english; auto with google)
    #[arg(short = 's', long)]
    pub source: Option<String>,

    /// Target language code or name (e.g., pt, ja, zh-TW)
    #[arg(short = 't', long)]
    pub target: Option<String>,

    /// Seconds to wait before retrying a failed translation
    #[arg(short = 'd', long, value_name = "SECS")]
    pub delay: Option<u64>,

    /// Attempts per text unit before giving up
    #[arg(short = 'r', long, value_name = "N")]
    pub retries: Option<u32>,

    /// Translation backend
    #[arg(long, value_enum)]
    pub translator: Option<Backend>,

    /// Rename the original to <stem>_bk.<ext> and write the translation in its place
    #[arg(long)]
    pub rename: bool,

    /// Print every translated cell to stdout
    #[arg(long)]
    pub print: bool,

    /// Treat PATH as a directory of notebooks
    #[arg(long)]
    pub directory: bool,

    /// Descend into subdirectories in directory mode (default)
    #[arg(long, overrides_with = "no_recursive")]
    pub recursive: bool,

    /// Only translate notebooks at the top level of the directory
    #[arg(long, overrides_with = "recursive")]
    pub no_recursive: bool,

    /// Bypass the translation cache
    #[arg(short = 'n', long)]
    pub no_cache: bool,

    /// Suppress status output and progress bars
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(short = 'v', long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Directory mode walks subdirectories unless `--no-recursive` was given last.
    pub const fn recursive(&self) -> bool {
        !self.no_recursive
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported language codes
    Languages {
        /// Backend whose languages to list
        #[arg(long, value_enum, default_value_t = Backend::Google)]
        translator: Backend,
    },
    /// Show the configuration file path and the effective defaults
    Config,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_args_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_full_invocation() {
        let args = Args::try_parse_from([
            "nbtl",
            "-s",
            "english",
            "-t",
            "pt",
            "-d",
            "2",
            "-r",
            "5",
            "--translator",
            "mymemory",
            "--rename",
            "--print",
            "lessons/",
        ])
        .unwrap();

        assert_eq!(args.path, Some(PathBuf::from("lessons/")));
        assert_eq!(args.source.as_deref(), Some("english"));
        assert_eq!(args.target.as_deref(), Some("pt"));
        assert_eq!(args.delay, Some(2));
        assert_eq!(args.retries, Some(5));
        assert_eq!(args.translator, Some(Backend::MyMemory));
        assert!(args.rename && args.print);
        assert!(args.recursive());
    }

    #[test]
    fn test_last_recursion_flag_wins() {
        let args = Args::try_parse_from(["nbtl", "--recursive", "--no-recursive", "d"]).unwrap();
        assert!(!args.recursive());

        let args = Args::try_parse_from(["nbtl", "--no-recursive", "--recursive", "d"]).unwrap();
        assert!(args.recursive());
    }

    #[test]
    fn test_unknown_translator_is_rejected() {
        assert!(Args::try_parse_from(["nbtl", "--translator", "deepl", "x.ipynb"]).is_err());
    }

    #[test]
    fn test_languages_subcommand() {
        let args = Args::try_parse_from(["nbtl", "languages", "--translator", "mymemory"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Command::Languages {
                translator: Backend::MyMemory
            })
        ));
    }
}
