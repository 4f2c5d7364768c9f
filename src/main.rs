use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead};
use std::path::PathBuf;

use moviename::config::Config;
use moviename::logging;
use moviename::normalize::{extract_year, Category, CategorySet, NormalizeOptions, Pipeline};
use moviename::{fileslug, from_path};

/// Clean movie titles out of media file names.
#[derive(Debug, Parser)]
#[command(name = "moviename", version)]
#[command(about = "Extract clean movie titles from noisy media file names", long_about = None)]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/moviename/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every stage's output at debug level.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the cleaned title of each name (reads stdin lines when none given).
    Normalize {
        names: Vec<String>,

        #[command(flatten)]
        flags: NormalizeFlags,
    },

    /// Print the slug of each name.
    Slug { names: Vec<String> },

    /// Clean every video file in a directory or .torrent file.
    Scan {
        path: PathBuf,

        #[command(flatten)]
        flags: NormalizeFlags,
    },
}

#[derive(Debug, clap::Args)]
struct NormalizeFlags {
    /// Do not re-append a stripped release year.
    #[arg(long)]
    no_year: bool,

    /// Append the lowercased file extension.
    #[arg(long)]
    extension: bool,

    /// Keep a detached `-GROUP` tail.
    #[arg(long)]
    keep_group: bool,

    /// Apply only these blacklist categories.
    #[arg(long, value_parser = parse_category, conflicts_with = "skip")]
    only: Vec<Category>,

    /// Apply every blacklist category except these.
    #[arg(long, value_parser = parse_category)]
    skip: Vec<Category>,

    /// One JSON object per line.
    #[arg(long)]
    json: bool,
}

impl NormalizeFlags {
    fn apply(&self, mut options: NormalizeOptions) -> NormalizeOptions {
        if self.no_year {
            options.append_year = false;
        }
        if self.extension {
            options.append_extension = true;
        }
        if self.keep_group {
            options.strip_release_group = false;
        }
        if !self.only.is_empty() {
            options.categories = CategorySet::only(&self.only);
        } else if !self.skip.is_empty() {
            options.categories = CategorySet::all_except(&self.skip);
        }
        options
    }
}

fn parse_category(s: &str) -> Result<Category, String> {
    Category::from_str(s).ok_or_else(|| {
        let known: Vec<_> = Category::ALL.iter().map(|c| c.as_str()).collect();
        format!("unknown category {s:?} (expected one of {})", known.join(", "))
    })
}

#[derive(Serialize)]
struct Row<'a> {
    input: &'a str,
    title: String,
    year: Option<String>,
    slug: String,
}

struct Printer {
    pipeline: Pipeline,
    options: NormalizeOptions,
    json: bool,
}

impl Printer {
    fn print(&self, input: &str) -> Result<()> {
        let title = self.pipeline.run(input, &self.options);
        if self.json {
            let row = Row {
                input,
                year: extract_year(&title).map(str::to_string),
                slug: fileslug(input),
                title,
            };
            println!("{}", serde_json::to_string(&row)?);
        } else {
            println!("{title}");
        }
        Ok(())
    }
}

fn read_stdin_lines() -> Result<Vec<String>> {
    let mut names = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read stdin")?;
        let line = line.trim();
        if !line.is_empty() {
            names.push(line.to_string());
        }
    }
    Ok(names)
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("moviename error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::discover(cli.config.as_deref()).context("failed to load config")?;
    tracing::debug!("loaded config: {:?}", config);

    match cli.command {
        Command::Normalize { names, flags } => {
            let names = if names.is_empty() {
                read_stdin_lines()?
            } else {
                names
            };
            let printer = Printer {
                pipeline: Pipeline::standard(),
                options: flags.apply(config.normalize_options()),
                json: flags.json,
            };
            for name in &names {
                printer.print(name)?;
            }
        }
        Command::Slug { names } => {
            let names = if names.is_empty() {
                read_stdin_lines()?
            } else {
                names
            };
            for name in &names {
                println!("{}", fileslug(name));
            }
        }
        Command::Scan { path, flags } => {
            let info = from_path(&path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            let videos = info.video_files();
            tracing::info!(name = %info.name, videos = videos.len(), "scanning");

            let printer = Printer {
                pipeline: Pipeline::standard(),
                options: flags.apply(config.normalize_options()),
                json: flags.json,
            };
            for file in videos {
                printer.print(&file.filename)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "moviename",
            "normalize",
            "--no-year",
            "--extension",
            "--only",
            "source",
            "Movie.2012.DVDRip.avi",
        ]);
        let Command::Normalize { names, flags } = cli.command else {
            panic!("expected normalize");
        };
        let options = flags.apply(NormalizeOptions::default());

        assert_eq!(names, ["Movie.2012.DVDRip.avi"]);
        assert!(!options.append_year);
        assert!(options.append_extension);
        assert_eq!(options.categories, CategorySet::only(&[Category::Source]));
    }

    #[test]
    fn test_unknown_category_rejected() {
        let res = Cli::try_parse_from(["moviename", "normalize", "--skip", "codecs", "x.avi"]);
        assert!(res.is_err());
    }
}
