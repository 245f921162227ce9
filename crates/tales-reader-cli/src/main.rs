mod render;

use anyhow::{Context, Result, bail};
use clap::{Parser as ClapParser, Subcommand};
use relative_path::RelativePathBuf;
use std::io::{Write, stdout};
use std::path::{Path, PathBuf};
use tales_reader_config::Config;
use tales_reader_engine::{Manifest, Parser, build_manifest, io};

/// Read issues of Tales from the Future and Beyond from their plain-text sources
#[derive(ClapParser, Debug)]
#[command(name = "tales-reader", version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of ~/.config/tales-reader/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the sections of an issue
    Outline {
        /// Issue file, a name inside the configured issues directory, or an issue number
        file: PathBuf,
    },
    /// Print one section as plain text
    Show {
        /// Issue file, a name inside the configured issues directory, or an issue number
        file: PathBuf,
        /// Section index, clamped to the last section
        #[arg(short, long, default_value_t = 0)]
        section: usize,
    },
    /// Print the parsed issue (header and sections) as JSON
    Json {
        /// Issue file, a name inside the configured issues directory, or an issue number
        file: PathBuf,
    },
    /// Build the JSON manifest of an issues directory
    Manifest {
        /// Issues directory; defaults to issues_path from the config
        dir: Option<PathBuf>,
        /// Write the manifest here instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let parser = Parser::new(config.parser.clone())?;
    let issues_path = config.issues_path.as_deref();

    let mut out = stdout().lock();
    match cli.command {
        Command::Outline { file } => {
            let opened = open_issue(&file, issues_path, &parser)?;
            render::write_outline(&mut out, &parser.parse(&opened.text))?;
            if let Some((manifest, number)) = &opened.by_number {
                let (previous, next) = manifest.adjacent(*number);
                render::write_adjacent_issues(&mut out, previous, next)?;
            }
        }
        Command::Show { file, section } => {
            let doc = parser.parse(&open_issue(&file, issues_path, &parser)?.text);
            let index = doc.clamp_index(section);
            if index != section {
                log::warn!("section {section} out of range, showing {index}");
            }
            render::write_section(&mut out, &doc, index)?;
        }
        Command::Json { file } => {
            let issue = parser.parse_issue(&open_issue(&file, issues_path, &parser)?.text);
            writeln!(out, "{}", serde_json::to_string_pretty(&issue)?)?;
        }
        Command::Manifest { dir, output } => {
            let Some(dir) = dir.or_else(|| issues_path.map(Path::to_path_buf)) else {
                bail!(
                    "No issues directory given and no issues_path in config file '{}'",
                    Config::config_path().display()
                );
            };
            io::validate_issues_dir(&dir)
                .with_context(|| format!("Issues path '{}' is invalid", dir.display()))?;

            let manifest = build_manifest(&dir, &parser)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, json)?;
                    log::info!(
                        "wrote {} issues to {}",
                        manifest.total_issues,
                        path.display()
                    );
                }
                None => writeln!(out, "{json}")?,
            }
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if loaded.is_none() {
        log::debug!("no config file found, using defaults");
    }
    Ok(loaded.unwrap_or_default())
}

/// Text of the issue named on the command line.
struct OpenedIssue {
    text: String,
    /// Set when the issue was chosen by number from the issues directory.
    by_number: Option<(Manifest, u32)>,
}

/// Reads `file` directly, or relative to the issues directory when it does
/// not exist as given. A bare number picks that issue from the directory's
/// manifest.
fn open_issue(file: &Path, issues_path: Option<&Path>, parser: &Parser) -> Result<OpenedIssue> {
    if file.exists() {
        return Ok(OpenedIssue {
            text: read_file(file)?,
            by_number: None,
        });
    }

    let Some(root) = issues_path else {
        return Ok(OpenedIssue {
            text: read_file(file)?,
            by_number: None,
        });
    };

    if let Some(number) = file.to_str().and_then(|s| s.parse::<u32>().ok()) {
        let manifest = build_manifest(root, parser)?;
        let Some(summary) = manifest.issue(number) else {
            bail!("Issue {number} not found in '{}'", root.display());
        };
        let relative = RelativePathBuf::from(summary.filename.as_str());
        log::debug!("issue {number} is {relative}");
        return Ok(OpenedIssue {
            text: io::read_issue(&relative, root)?,
            by_number: Some((manifest, number)),
        });
    }

    let relative = RelativePathBuf::from_path(file)
        .with_context(|| format!("Failed to read issue file '{}'", file.display()))?;
    log::debug!("resolving {} against {}", relative, root.display());
    Ok(OpenedIssue {
        text: io::read_issue(&relative, root)?,
        by_number: None,
    })
}

fn read_file(file: &Path) -> Result<String> {
    std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read issue file '{}'", file.display()))
}
