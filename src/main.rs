use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use scoreboard::{Head2Head, Leaderboard, Score, Scoreboard, StyleConfig};

/// Render rankings as PNG scoreboards
#[derive(Parser)]
#[command(name = "scoreboard", version, about)]
struct Cli {
    /// JSON style configuration file
    #[arg(long, global = true)]
    style: Option<PathBuf>,

    /// Title drawn above the scoreboard (overrides the style file)
    #[arg(long, global = true)]
    title: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ranked rows sorted by descending score
    Leaderboard(RenderArgs),
    /// Two entries side by side, in input order
    Head2head(RenderArgs),
}

#[derive(Args)]
struct RenderArgs {
    /// JSON array of [name, score] pairs
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Write base64-encoded PNG bytes instead of a PNG file
    #[arg(long, conflicts_with = "data_uri")]
    b64: bool,

    /// Write a data:image/png;base64 URI instead of a PNG file
    #[arg(long)]
    data_uri: bool,
}

fn load_style(cli: &Cli) -> anyhow::Result<StyleConfig> {
    let mut style = match &cli.style {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading style file {}", path.display()))?;
            StyleConfig::from_json(&json)
                .with_context(|| format!("parsing style file {}", path.display()))?
        }
        None => StyleConfig::default(),
    };
    if let Some(title) = &cli.title {
        style.title = Some(title.clone());
    }
    Ok(style)
}

fn load_ranking(path: &Path) -> anyhow::Result<Vec<(String, Score)>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("reading ranking {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("{} is not a JSON array of [name, score] pairs", path.display()))
}

fn export(board: &mut impl Scoreboard, args: &RenderArgs) -> anyhow::Result<PathBuf> {
    let bytes = if args.b64 {
        board.b64_image()?
    } else if args.data_uri {
        board.data_uri()?
    } else {
        return Ok(board.save_image(&args.output)?);
    };
    fs::write(&args.output, bytes)
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(args.output.clone())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let style = load_style(&cli)?;
    let written = match &cli.command {
        Command::Leaderboard(args) => {
            let mut board = Leaderboard::new(load_ranking(&args.input)?, style)?;
            export(&mut board, args)?
        }
        Command::Head2head(args) => {
            let mut board = Head2Head::new(load_ranking(&args.input)?, style)?;
            export(&mut board, args)?
        }
    };
    println!("{}", written.display());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("scoreboard: {e:#}");
        std::process::exit(1);
    }
}
