// =============================================================================
// THEOCAT — Point d'entrée : les démonstrations en console
// =============================================================================
//
//   theocat show <topic>                 → une démonstration
//   theocat all                          → toutes les démonstrations
//   theocat topics                       → la liste des démonstrations
//   theocat experiment <name> --keys ..  → rejoue des touches, affiche l'image
//
// Toute erreur remonte jusqu'à main, qui l'affiche et sort avec le code 1.
//
// =============================================================================

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use theocat::config::TheocatConfig;
use theocat::content::catalog::Topic;
use theocat::experiment::{self, Key};
use theocat::render::{self, Format};

#[derive(Parser)]
#[command(name = "theocat")]
#[command(about = "Categorical theology demonstrations: pushforward, pullback and topological defects")]
struct Cli {
    /// Config file (defaults to $THEOCAT_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format: plain or markdown
    #[arg(long, global = true, default_value = "plain")]
    format: Format,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one demonstration
    Show {
        /// michael, history, categorical, defects or divine-name
        topic: String,
    },
    /// Print every demonstration
    All,
    /// List the available demonstrations
    Topics,
    /// Replay keys against an interactive view and print the final frame
    Experiment {
        /// divine-name, push-pull, warrior or defects
        name: String,
        /// Comma-separated keys: space, left, right, escape, 1-9
        #[arg(long, default_value = "")]
        keys: String,
        /// Animation time in seconds
        #[arg(long, default_value_t = 0.0)]
        time: f64,
    },
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // stderr : stdout reste réservé aux démonstrations
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config = TheocatConfig::load_or_default(cli.config.as_deref())
        .context("loading configuration")?;
    let renderer = render::renderer(cli.format, &config.render);

    match cli.command {
        Commands::Show { topic } => {
            let topic: Topic = topic.parse()?;
            print!("{}", render::render_topic(topic, renderer.as_ref()));
        }
        Commands::All => {
            for topic in Topic::ALL {
                print!("{}", render::render_topic(topic, renderer.as_ref()));
                println!();
            }
        }
        Commands::Topics => {
            for topic in Topic::ALL {
                println!("{:<12} {}", topic.slug(), topic.title());
            }
        }
        Commands::Experiment { name, keys, time } => {
            let mut exp = experiment::by_name(&name)?;
            let keys = Key::parse_list(&keys)?;
            let consumed = experiment::replay(exp.as_mut(), &keys);
            if consumed < keys.len() {
                tracing::info!(ignored = keys.len() - consumed, "keys after escape ignored");
            }
            print!("{}", exp.frame(time));
        }
    }
    Ok(())
}

/// Le message affiché pour une erreur remontée jusqu'à main.
fn error_message(e: &anyhow::Error) -> String {
    format!("Error: {e:#}")
}

/// Le seul point de capture : affiche l'erreur et choisit le code de sortie.
fn report(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("{}", error_message(&e));
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    report(run(cli))
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::Path;

    fn cli(config: &Path, args: &[&str]) -> Cli {
        let config = config.to_str().unwrap();
        let mut argv = vec!["theocat", "--config", config];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    fn no_config() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        (dir, path)
    }

    #[test]
    fn test_run_succeeds() {
        let (_dir, config) = no_config();
        assert!(run(cli(&config, &["show", "categorical"])).is_ok());
        assert!(run(cli(&config, &["--format", "markdown", "topics"])).is_ok());
        assert!(run(cli(&config, &["experiment", "defects", "--keys", "1", "--time", "0.5"])).is_ok());
    }

    #[test]
    fn test_unknown_topic_message() {
        let (_dir, config) = no_config();
        let err = run(cli(&config, &["show", "seraphim"])).unwrap_err();
        assert!(error_message(&err).starts_with("Error: unknown topic 'seraphim'"));
    }

    #[test]
    fn test_unknown_key_and_experiment() {
        let (_dir, config) = no_config();
        let err = run(cli(&config, &["experiment", "warrior", "--keys", "space,enter"])).unwrap_err();
        assert!(error_message(&err).starts_with("Error: unknown key 'enter'"));

        let err = run(cli(&config, &["experiment", "seraphim"])).unwrap_err();
        assert!(error_message(&err).starts_with("Error: unknown experiment 'seraphim'"));
    }

    #[test]
    fn test_bad_config_is_reported_with_context() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nwidth = \"wide\"").unwrap();

        let err = run(cli(file.path(), &["all"])).unwrap_err();
        let message = error_message(&err);
        assert!(message.starts_with("Error: loading configuration: failed to parse config at"));
    }

    #[test]
    fn test_report_exit_codes() {
        assert_eq!(report(Ok(())), ExitCode::SUCCESS);
        assert_eq!(report(Err(anyhow::anyhow!("broken covenant"))), ExitCode::FAILURE);
    }
}
