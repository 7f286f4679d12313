mod error_formatter;
mod formatter;
mod server;

use anyhow::Result;
use clap::{Parser, Subcommand};
use formatter::Formatter;
use powersolve::Engine;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PUZZLE_EXTENSION: &str = "puzzle";

#[derive(Parser)]
#[command(name = "powersolve")]
#[command(about = "Solve product-of-powers letter puzzles.")]
#[command(
    long_about = "Powersolve recovers the value of every letter in a set of equations like 'a^2 * b = 12'.\nThe CLI solves puzzles from .puzzle files, factorizes single numbers, or serves solving over HTTP."
)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve a puzzle and display the letters and checked expressions
    ///
    /// Loads all .puzzle files from the workspace, solves the named puzzle,
    /// and prints the resolved letters.
    Solve {
        /// Name of the puzzle to solve
        puzzle_name: String,
        /// Workspace root directory containing .puzzle files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Print the solution as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the expressions of a puzzle
    Show {
        /// Name of the puzzle to show
        puzzle_name: String,
        /// Workspace root directory containing .puzzle files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
    },
    /// List all puzzles with expression and letter counts
    List {
        /// Workspace root directory containing .puzzle files
        #[arg(default_value = ".")]
        root: PathBuf,
    },
    /// Factorize a number over the built-in prime table
    Factor {
        /// Value to factorize
        value: u64,
    },
    /// Start HTTP REST API server (default: localhost:3000)
    ///
    /// API: GET /solve/{name} for loaded puzzles, POST /solve with {code} for ad-hoc ones.
    Server {
        /// Workspace root directory containing .puzzle files
        #[arg(short = 'd', long = "dir", default_value = ".")]
        workdir: PathBuf,
        /// Host address to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
        /// Port number to listen on
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Server { .. } => "powersolve=info,tower_http=info",
        _ => "powersolve=warn",
    };
    init_tracing(default_filter);

    let result = match &cli.command {
        Commands::Solve {
            workdir,
            puzzle_name,
            json,
        } => solve_command(workdir, puzzle_name, *json),
        Commands::Show {
            workdir,
            puzzle_name,
        } => show_command(workdir, puzzle_name),
        Commands::List { root } => list_command(root),
        Commands::Factor { value } => factor_command(*value),
        Commands::Server {
            workdir,
            host,
            port,
        } => server_command(workdir, host, *port),
    };

    if let Err(e) = result {
        if let Some(solve_err) = e.downcast_ref::<powersolve::SolveError>() {
            eprintln!("{}", error_formatter::format_error(solve_err));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn solve_command(workdir: &Path, puzzle_name: &str, json: bool) -> Result<()> {
    let mut engine = Engine::new();
    load_workspace(&mut engine, workdir)?;

    let solution = engine.solve(puzzle_name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        let formatter = Formatter::default();
        print!("{}", formatter.format_solution(&solution));
    }

    Ok(())
}

fn show_command(workdir: &Path, puzzle_name: &str) -> Result<()> {
    let mut engine = Engine::new();
    load_workspace(&mut engine, workdir)?;

    match engine.get_puzzle(puzzle_name) {
        Some(puzzle) => {
            let formatter = Formatter::default();
            print!("{}", formatter.format_puzzle(puzzle));
            Ok(())
        }
        None => Err(anyhow::anyhow!("Puzzle '{}' not found", puzzle_name)),
    }
}

fn list_command(root: &Path) -> Result<()> {
    let mut engine = Engine::new();

    println!("Loading workspace from {}...", root.display());
    let file_count = load_workspace(&mut engine, root)?;

    let puzzles = engine.list_puzzles();
    let stats: Vec<(String, usize, usize)> = puzzles
        .iter()
        .filter_map(|name| engine.get_puzzle(name))
        .map(|puzzle| {
            (
                puzzle.name.clone(),
                puzzle.sub_expressions().len(),
                puzzle.letter_names().len(),
            )
        })
        .collect();

    println!();
    let formatter = Formatter::default();
    print!(
        "{}",
        formatter.format_workspace_summary(file_count, puzzles.len(), &stats)
    );

    Ok(())
}

fn factor_command(value: u64) -> Result<()> {
    let factors = powersolve::factorize(value)?;
    let formatter = Formatter::default();
    print!("{}", formatter.format_factors(value, &factors));
    Ok(())
}

fn server_command(workdir: &Path, host: &str, port: u16) -> Result<()> {
    #[cfg(feature = "server")]
    {
        use tokio::runtime::Runtime;
        let rt = Runtime::new()?;
        rt.block_on(async {
            let mut engine = Engine::new();
            load_workspace(&mut engine, workdir)?;

            println!(
                "Starting HTTP server with {} puzzle(s) loaded",
                engine.list_puzzles().len()
            );
            server::http::start_server(engine, host, port).await
        })?;
    }

    #[cfg(not(feature = "server"))]
    {
        let _ = (workdir, host, port);
        eprintln!("Error: Server feature not enabled");
        eprintln!("Recompile with: cargo build --features server");
        std::process::exit(1);
    }

    Ok(())
}

/// Load all .puzzle files from the workspace directory, returning how many were read
fn load_workspace(engine: &mut Engine, workdir: &Path) -> Result<usize> {
    let mut file_count = 0;
    for entry in WalkDir::new(workdir).sort_by_file_name() {
        let entry = entry?;
        if entry.path().extension().and_then(|s| s.to_str()) == Some(PUZZLE_EXTENSION) {
            let path = entry.path();
            let source_id = path.to_string_lossy().to_string();
            engine.add_puzzle_code(&fs::read_to_string(path)?, &source_id)?;
            file_count += 1;
        }
    }

    Ok(file_count)
}
