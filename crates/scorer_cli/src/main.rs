//! Scorer CLI
//!
//! Drives one match stored as a JSON state file: create, select overs,
//! record deliveries, apply overrides and print the score.

#[cfg(feature = "cli")]
use anyhow::Result;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "scorer")]
#[command(about = "Ball-by-ball cricket scorer", long_about = None)]
struct Cli {
    /// Match state file
    #[arg(long, global = true, default_value = "match.json")]
    state: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Create a new match
    New {
        #[arg(long)]
        title: String,

        #[arg(long, default_value = "")]
        venue: String,

        /// Overs per innings
        #[arg(long)]
        overs: u32,

        /// Team A sheet, one player per line
        #[arg(long)]
        team_a: PathBuf,

        /// Team B sheet, one player per line
        #[arg(long)]
        team_b: PathBuf,

        /// "Team A" or "Team B"
        #[arg(long)]
        bat_first: Option<String>,

        #[arg(long)]
        toss: Option<String>,
    },

    /// Start an over or change the players mid-over
    Select {
        #[arg(long)]
        striker: String,

        #[arg(long)]
        non_striker: String,

        #[arg(long)]
        bowler: String,
    },

    /// Record one delivery
    Ball {
        /// 0, 1, 2, 3, 4, 6, Wicket, Wide, No-Ball, Leg Bye or Bye
        outcome: String,

        /// Runs for extras
        #[arg(long, default_value = "0")]
        runs: u8,

        #[arg(long, default_value = "")]
        dismissal: String,
    },

    /// End the current over now
    EndOver,

    /// End the current innings now
    EndInnings,

    /// Print the live score
    Score,

    /// Print the commentary feed, newest first
    Feed {
        #[arg(long)]
        limit: Option<usize>,

        /// Use the public view limit
        #[arg(long, default_value = "false")]
        public: bool,
    },

    /// Print the full scorecard
    Card,

    /// Print one player's figures
    Stats { player: String },
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    use cricket_core::{BallOutcome, MatchSetup, MatchState, PlayerId};
    use scorer_cli::{load_state, save_state, update_state};

    init_tracing();
    let cli = Cli::parse();
    let config = cricket_core::config_from_env()?;

    match cli.command {
        Commands::New { title, venue, overs, team_a, team_b, bat_first, toss } => {
            let mut setup = MatchSetup::new(
                title,
                overs,
                scorer_cli::read_team_sheet(&team_a)?,
                scorer_cli::read_team_sheet(&team_b)?,
            )
            .with_venue(venue);
            setup.batting_first = bat_first.as_deref().map(parse_side).transpose()?;
            setup.toss_winner = toss.as_deref().map(parse_side).transpose()?;

            let state = MatchState::new(&setup, &config)?;
            save_state(&cli.state, &state)?;
            println!("Created match {} -> {}", state.info().match_id, cli.state.display());
            print_live(&state);
        }

        Commands::Select { striker, non_striker, bowler } => {
            let (striker, non_striker, bowler) =
                (PlayerId::new(striker)?, PlayerId::new(non_striker)?, PlayerId::new(bowler)?);
            update_state(&cli.state, |s| s.select_over(&striker, &non_striker, &bowler))?;
            print_live(&load_state(&cli.state)?);
        }

        Commands::Ball { outcome, runs, dismissal } => {
            let outcome = BallOutcome::from_label(&outcome, runs, &dismissal)?;
            let entry = update_state(&cli.state, |s| s.record_ball(outcome))?;
            println!("{}", entry.render());
            print_live(&load_state(&cli.state)?);
        }

        Commands::EndOver => {
            update_state(&cli.state, |s| s.force_end_over())?;
            print_live(&load_state(&cli.state)?);
        }

        Commands::EndInnings => {
            update_state(&cli.state, |s| s.force_end_innings())?;
            print_live(&load_state(&cli.state)?);
        }

        Commands::Score => print_live(&load_state(&cli.state)?),

        Commands::Feed { limit, public } => {
            let state = load_state(&cli.state)?;
            let limit = match (limit, public) {
                (Some(limit), _) => limit,
                (None, true) => config.public_feed_limit,
                (None, false) => config.feed_display_limit,
            };
            for entry in state.feed(limit) {
                println!("{}", entry.render());
            }
        }

        Commands::Card => {
            let state = load_state(&cli.state)?;
            for line in scorer_cli::render_scorecard(&state.scorecard()) {
                println!("{}", line);
            }
            if state.is_completed() {
                println!("\n{}", scorer_cli::render_crease(&state));
            }
        }

        Commands::Stats { player } => {
            let state = load_state(&cli.state)?;
            let stats = state.get_stats(&PlayerId::new(player)?)?;
            for line in scorer_cli::render_player_stats(&stats) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "cli")]
fn parse_side(s: &str) -> Result<cricket_core::TeamSide> {
    cricket_core::TeamSide::parse(s).ok_or_else(|| anyhow::anyhow!("unknown team: '{}'", s))
}

#[cfg(feature = "cli")]
fn print_live(state: &cricket_core::MatchState) {
    println!("{}", scorer_cli::render_summary(&state.score_summary()));
    println!("{}", scorer_cli::render_crease(state));
}

#[cfg(feature = "cli")]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("scorer CLI is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
