mod config;
mod domain;
mod input;
mod output;
mod report;
mod seed;
mod store;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use config::Settings;
use domain::Category;
use std::io::{self, Write};
use std::path::PathBuf;
use store::UserState;

#[derive(Parser)]
#[command(name = "salva")]
#[command(about = "A small companion for tracking eco-friendly daily challenges", long_about = None)]
struct Cli {
    /// Use ASCII glyphs instead of emoji
    #[arg(long, global = true, env = "SALVA_ASCII")]
    ascii: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read commands from stdin and apply them to a fresh session
    Session,
    /// Show level, points and streak
    Status {
        /// Print the full session state as JSON
        #[arg(long)]
        json: bool,
    },
    /// List catalog challenges
    Challenges {
        /// Category to show (all, transport, energy, waste, water)
        #[arg(short, long, default_value = "all", value_parser = parse_category)]
        category: Category,
    },
    /// Show community impact, leaderboard and feed
    Community,
    /// Generate a markdown progress report
    Report {
        /// Output file path. Defaults to stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_category(tag: &str) -> Result<Category, String> {
    Category::from_tag(tag).ok_or_else(|| {
        let tags: Vec<&str> = Category::all().iter().map(Category::to_tag).collect();
        format!("unknown category '{}', expected one of: {}", tag, tags.join(", "))
    })
}

fn init_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.ascii, cli.verbose);
    init_logging(&settings);

    // One store per process; nothing survives exit
    let mut state = UserState::new()?;
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(Commands::Status { json }) => {
            if json {
                serde_json::to_writer_pretty(&mut stdout, &state)?;
                writeln!(stdout)?;
            } else {
                output::write_status(&mut stdout, &state, &settings)?;
                output::write_highlights(&mut stdout, &seed::profile_highlights())?;
            }
            Ok(())
        }
        Some(Commands::Challenges { category }) => {
            output::write_challenges(&mut stdout, &seed::challenge_catalog(), category)?;
            Ok(())
        }
        Some(Commands::Community) => {
            output::write_community(
                &mut stdout,
                &seed::global_stats(),
                &seed::leaderboard(),
                &seed::community_feed(),
                state.points(),
            )?;
            Ok(())
        }
        Some(Commands::Report { output }) => {
            let catalog = seed::challenge_catalog();
            let achievements = seed::achievements();
            let context = report::ReportContext {
                catalog: &catalog,
                achievements: &achievements,
                global: seed::global_stats(),
            };
            let content = report::render_report(&state, &context, chrono::Local::now().date_naive());

            match output {
                Some(path) => {
                    report::write_report(&path, &content)?;
                    eprintln!("Report generated: {}", path.display());
                }
                None => stdout.write_all(content.as_bytes())?,
            }
            Ok(())
        }
        Some(Commands::Session) | None => {
            let highlights = seed::profile_highlights();
            eprintln!(
                "Hi there! I'm Salva. Member since {}, rank #{}. Type 'help' for commands.",
                highlights.join_date, highlights.rank
            );
            output::write_status(&mut stdout, &state, &settings)?;
            output::write_tasks(&mut stdout, &state, &settings)?;

            let catalog = seed::challenge_catalog();
            let stdin = io::stdin().lock();
            input::run_session(&mut state, &catalog, &settings, stdin, &mut stdout)
        }
    }
}
