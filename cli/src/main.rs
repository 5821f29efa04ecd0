use clap::{Parser, Subcommand};
use inscribe_common::db::core::PointStore;
use inscribe_common::db::parser::points;
use inscribe_common::util::config::{Config, GeneratorConfig};
use inscribe_common::util::{check, generator, logger, visualization};
use inscribe_search::Solution;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
    config: PathBuf,

    /// Point list to read instead of `input.points_file`.
    #[arg(short, long, value_name = "FILE")]
    input: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Largest pairwise rectangle and largest inscribed rectangle.
    Solve,
    /// Largest rectangle spanned by any two points.
    Largest,
    /// Largest rectangle spanned by two points and covered by the polygon.
    Inscribed,
    /// Write a random rectilinear polygon.
    Generate {
        #[arg(long)]
        columns: Option<usize>,
        #[arg(long)]
        max_width: Option<i64>,
        #[arg(long)]
        max_height: Option<i64>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "inputs/random.txt")]
        output: String,
    },
}

fn main() -> anyhow::Result<()> {
    logger::init();
    let args = Args::parse();

    let config = load_config(&args.config)?;
    let input = args
        .input
        .unwrap_or_else(|| config.input.points_file.clone());

    match args.command.unwrap_or(Commands::Solve) {
        Commands::Generate {
            columns,
            max_width,
            max_height,
            seed,
            output,
        } => {
            let defaults = &config.generator;
            let settings = GeneratorConfig {
                columns: columns.unwrap_or(defaults.columns),
                max_width: max_width.unwrap_or(defaults.max_width),
                max_height: max_height.unwrap_or(defaults.max_height),
                seed: seed.or(defaults.seed),
            };
            prepare_output_dir(&output)?;
            let count = generator::generate_random_polygon(&output, &settings)?;
            log::info!("Generated {} vertices: {}", count, output);
        }
        Commands::Largest => {
            let store = load_points(&input)?;
            println!(
                "Largest rectangle area: {}",
                inscribe_search::largest_area(&store)
            );
        }
        Commands::Inscribed => {
            let store = load_points(&input)?;
            let found = inscribe_search::largest_inscribed(&store, &config.search);
            let solution = Solution {
                largest: None,
                inscribed: found,
            };
            report(&store, &solution, &config, false)?;
        }
        Commands::Solve => {
            let store = load_points(&input)?;
            let solution = inscribe_search::solve(&store, &config.search);
            report(&store, &solution, &config, true)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<Config> {
    if !path.exists() {
        log::warn!(
            "Configuration file {:?} not found. Using internal defaults.",
            path
        );
        return Ok(Config::default());
    }
    log::info!("Loading configuration from {:?}", path);
    let config_str = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file: {}", e))?;
    parse_config(&config_str)
}

fn parse_config(text: &str) -> anyhow::Result<Config> {
    toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
}

fn load_points(path: &str) -> anyhow::Result<PointStore> {
    if !Path::new(path).exists() {
        return Err(anyhow::anyhow!("Input point file missing: {}", path));
    }
    log::info!("Parsing points: {}", path);
    let store = points::parse(path)?;
    log::info!(
        "Loaded {} points ({:?} winding)",
        store.len(),
        store.winding()
    );
    Ok(store)
}

fn prepare_output_dir(path_str: &str) -> anyhow::Result<()> {
    if let Some(parent) = Path::new(path_str).parent()
        && !parent.exists()
        && !parent.as_os_str().is_empty()
    {
        log::info!("Creating output directory: {:?}", parent);
        std::fs::create_dir_all(parent)?;
    }
    Ok(())
}

fn report(
    store: &PointStore,
    solution: &Solution,
    config: &Config,
    with_largest: bool,
) -> anyhow::Result<()> {
    if with_largest {
        println!("Largest rectangle area: {}", solution.largest_area());
    }
    println!(
        "Largest inscribed rectangle area: {}",
        solution.inscribed_area()
    );

    if let Some(path) = &config.output.visualization {
        prepare_output_dir(path)?;
        log::info!("Generating visualization: {}", path);
        visualization::draw_solution(
            store,
            solution.largest.map(|c| c.rect),
            solution.inscribed.map(|c| c.rect),
            path,
            config.output.image_width,
            config.output.image_height,
        )?;
    }

    if config.search.verify_result
        && let Some(found) = solution.inscribed
        && let Err(e) = check::run_inscribed_check(store, found.rect)
    {
        log::error!("Verification Failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
