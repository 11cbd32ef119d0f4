use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use film_packer_core::prelude::*;
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "film-packer",
    about = "Nest rectangular pieces onto film sheets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action=ArgAction::Count, global=true, help_heading = "Logging/UX")]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(
        short,
        long,
        default_value_t = false,
        global = true,
        help_heading = "Logging/UX"
    )]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a layout and write it as JSON
    Pack(PackArgs),
    /// Pack once and print elapsed time + occupancy
    Bench(PackArgs),
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    // Input/Output
    /// Piece list file (JSON or YAML)
    #[arg(help_heading = "Input/Output")]
    input: PathBuf,
    /// Output file for the layout JSON (stdout when omitted)
    #[arg(short, long, help_heading = "Input/Output")]
    out: Option<PathBuf>,
    /// Pretty-print the layout JSON
    #[arg(long, default_value_t = true, action=ArgAction::Set, help_heading = "Input/Output")]
    pretty: bool,

    // Layout
    /// Sheet width (a `sheet:` block in the input file overrides this)
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    sheet_width: u32,
    /// Sheet height (a `sheet:` block in the input file overrides this)
    #[arg(long, default_value_t = 1024, help_heading = "Layout")]
    sheet_height: u32,
    /// Layout axis: horizontal | vertical
    #[arg(long, default_value = "horizontal", help_heading = "Layout")]
    axis: String,
    /// Margin between sheets along the stacking axis
    #[arg(long, default_value_t = 0, help_heading = "Layout")]
    margin: u32,
    /// Sort order: area_desc|max_side_desc|height_desc|width_desc|none
    #[arg(long, default_value = "area_desc", help_heading = "Layout")]
    sort_order: String,

    // Export
    /// Export packing stats (JSON) to this file
    #[arg(long, help_heading = "Export")]
    export_stats: Option<PathBuf>,
    /// Dry run: compute the layout and stats but do not write files
    #[arg(long, default_value_t = false, help_heading = "Export")]
    dry_run: bool,
}

/// Piece list file. The optional `sheet:` block overrides the dimension
/// flags, so a piece file can carry its own film size.
#[derive(Debug, Deserialize)]
struct PieceFile {
    #[serde(default)]
    sheet: Option<SheetSize>,
    pieces: Vec<PieceSpec>,
}

#[derive(Debug, Deserialize)]
struct SheetSize {
    width: u32,
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing_with_level(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Bench(args) => run_bench(args),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let file = load_piece_file(&args.input)?;
    let cfg = build_config(args, &file)?;
    info!(
        pieces = file.pieces.len(),
        sheet_width = cfg.sheet_width,
        sheet_height = cfg.sheet_height,
        "loaded piece list"
    );

    let layout = pack_pieces(file.pieces, cfg)?;
    for u in &layout.unplaced {
        warn!(
            id = %u.piece.id,
            width = u.piece.width,
            height = u.piece.height,
            reason = ?u.reason,
            "piece not placed"
        );
    }
    let stats = layout.stats();
    info!(
        sheets = stats.num_sheets,
        placed = stats.num_placements,
        unplaced = stats.num_unplaced,
        occupancy = stats.occupancy,
        "layout complete"
    );

    if args.dry_run {
        println!("{}", stats.summary());
        return Ok(());
    }

    let json = if args.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };
    match &args.out {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
            info!(path = %path.display(), "layout written");
        }
        None => println!("{json}"),
    }

    if let Some(stats_path) = &args.export_stats {
        fs::write(stats_path, serde_json::to_string_pretty(&stats)?)
            .with_context(|| format!("write {}", stats_path.display()))?;
    }
    Ok(())
}

fn run_bench(args: &PackArgs) -> anyhow::Result<()> {
    let file = load_piece_file(&args.input)?;
    let cfg = build_config(args, &file)?;

    let start = Instant::now();
    let layout = pack_pieces(file.pieces, cfg)?;
    let elapsed = start.elapsed();

    let stats = layout.stats();
    println!(
        "packed {} pieces onto {} sheets in {:.2?} ({})",
        stats.num_placements,
        stats.num_sheets,
        elapsed,
        stats.summary()
    );
    Ok(())
}

fn load_piece_file(path: &Path) -> anyhow::Result<PieceFile> {
    let text =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let file = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("parse YAML {}", path.display()))?,
        _ => serde_json::from_str(&text)
            .with_context(|| format!("parse JSON {}", path.display()))?,
    };
    Ok(file)
}

fn build_config(args: &PackArgs, file: &PieceFile) -> anyhow::Result<PackConfig> {
    let axis: LayoutAxis = args
        .axis
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown axis: {}", args.axis))?;
    let sort_order: SortOrder = args
        .sort_order
        .parse()
        .map_err(|_| anyhow::anyhow!("unknown sort order: {}", args.sort_order))?;

    let (width, height) = match &file.sheet {
        Some(s) => (s.width, s.height),
        None => (args.sheet_width, args.sheet_height),
    };

    Ok(PackConfig::builder()
        .sheet_dimensions(width, height)
        .axis(axis)
        .sheet_margin(args.margin)
        .sort_order(sort_order)
        .build())
}

fn init_tracing_with_level(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
