#![warn(non_snake_case)]
//! # tile_carver Entry Point
//!
//! Registers a tile catalog, runs either the walker map generator or a
//! landmark template, prints the result as ASCII and optionally exports it.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use log::info;

use tile_carver::render::to_ascii;
use tile_carver::{
    CatalogRegistry, Generator, GeneratorConfig, Grid, LandmarkRanges, LandmarkTemplate,
    Magnification, Position, Tile, TileKind,
};

const CATALOG: &str = "grasslands";

#[derive(Parser, Debug)]
#[command(name = "tile_carver")]
#[command(about = "Carve tile maps with branching random walkers")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Random seed (0 picks a time-derived seed)
    #[arg(short, long, default_value = "0", global = true)]
    seed: u64,

    /// Skip printing the grid to stdout
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(flatten)]
    output: Output,
}

#[derive(Args, Debug)]
struct Output {
    /// Export the grid as JSON
    #[arg(long, global = true)]
    json: Option<PathBuf>,

    /// Export the grid as a PNG image
    #[cfg(feature = "png")]
    #[arg(long, global = true)]
    png: Option<PathBuf>,

    /// Pixels per tile in PNG exports
    #[cfg(feature = "png")]
    #[arg(long, default_value = "4", global = true)]
    cell_size: u32,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Carve a map with random walkers
    Map(MapArgs),
    /// Stamp a bordered landmark room
    Landmark(LandmarkArgs),
}

#[derive(Args, Debug)]
struct MapArgs {
    /// JSON file holding a generator configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    columns: Option<usize>,

    /// Maximum number of walkers spawned in a run
    #[arg(long)]
    walkers: Option<usize>,

    /// Steps each walker may take
    #[arg(long)]
    path_length: Option<u32>,

    /// Chance per tick (0-100) that a walker changes heading
    #[arg(long)]
    divergence: Option<u32>,

    /// Row and column magnification, e.g. `--magnify 2 2`
    #[arg(long, num_args = 2, value_names = ["ROWS", "COLUMNS"])]
    magnify: Option<Vec<u32>>,

    /// Start row (default: centre of the map)
    #[arg(long)]
    start_row: Option<i32>,

    /// Start column (default: centre of the map)
    #[arg(long)]
    start_col: Option<i32>,
}

#[derive(Args, Debug)]
struct LandmarkArgs {
    #[arg(long, num_args = 2, default_values_t = [10, 20])]
    rows: Vec<u32>,

    #[arg(long, num_args = 2, default_values_t = [10, 20])]
    columns: Vec<u32>,

    #[arg(long, num_args = 2, default_values_t = [0, 0])]
    elevation: Vec<u32>,
}

fn range(values: &[u32]) -> (u32, u32) {
    (values[0], values[1])
}

fn load_config(args: &MapArgs) -> Result<GeneratorConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => GeneratorConfig {
            rows: 1000,
            columns: 1000,
            max_walkers: 5,
            max_path_length: 1000,
            divergence_percent: 60,
            magnification: Magnification::new(2, 2),
        },
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(walkers) = args.walkers {
        config.max_walkers = walkers;
    }
    if let Some(length) = args.path_length {
        config.max_path_length = length;
    }
    if let Some(divergence) = args.divergence {
        config.divergence_percent = divergence;
    }
    if let Some(scale) = &args.magnify {
        config.magnification = Magnification::new(scale[0], scale[1]);
    }
    Ok(config)
}

fn run_map(registry: &CatalogRegistry, args: &MapArgs, seed: u64) -> Result<Grid, Box<dyn Error>> {
    let config = load_config(args)?;
    let start = Position::new(
        args.start_row.unwrap_or(config.rows as i32 / 2),
        args.start_col.unwrap_or(config.columns as i32 / 2),
    );
    let generator = Generator::with_config(registry, CATALOG, config);
    info!("Map configuration: {:?}", generator.config());

    let mut grid = Grid::new();
    let stats = generator.generate_map(&mut grid, start, seed)?;
    println!(
        "--- Generated World [{}, {}] (seed {}) ---",
        grid.row_count(),
        grid.column_count(),
        stats.seed
    );
    Ok(grid)
}

fn run_landmark(
    registry: &CatalogRegistry,
    args: &LandmarkArgs,
    seed: u64,
) -> Result<Grid, Box<dyn Error>> {
    let mut template = LandmarkTemplate::new(registry, CATALOG);
    template.set_ranges(LandmarkRanges {
        rows: range(&args.rows),
        columns: range(&args.columns),
        elevation: range(&args.elevation),
    });

    let mut grid = Grid::new();
    let layout = template.generate_landmark(&mut grid, seed)?;
    println!(
        "-----Landmark: [{}, {}] elevation {}-----",
        layout.rows, layout.columns, layout.elevation
    );
    Ok(grid)
}

fn export(grid: &Grid, output: &Output) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &output.json {
        fs::write(path, serde_json::to_string(grid)?)?;
        info!("Wrote JSON grid to {:?}.", path);
    }
    export_png(grid, output)
}

#[cfg(feature = "png")]
fn export_png(grid: &Grid, output: &Output) -> Result<(), Box<dyn Error>> {
    if let Some(path) = &output.png {
        tile_carver::render::save_png(grid, path, output.cell_size)?;
        info!("Wrote PNG grid to {:?}.", path);
    }
    Ok(())
}

#[cfg(not(feature = "png"))]
fn export_png(_grid: &Grid, _output: &Output) -> Result<(), Box<dyn Error>> {
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::init();
    info!("tile_carver starting...");

    let cli = Cli::parse();

    let mut registry = CatalogRegistry::new();
    registry.create(CATALOG, Tile::new(0, true, TileKind::Ground));

    let grid = match &cli.command {
        Command::Map(args) => run_map(&registry, args, cli.seed)?,
        Command::Landmark(args) => run_landmark(&registry, args, cli.seed)?,
    };

    if !cli.quiet {
        print!("{}", to_ascii(&grid));
    }
    export(&grid, &cli.output)?;

    info!("tile_carver exiting.");
    Ok(())
}
