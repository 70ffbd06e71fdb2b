use clap::Parser;
use schema_layout::core::auto_layout::{LayoutConfig, LayoutInput, layout_input_from_graph};
use schema_layout::core::config::Config;
use schema_layout::core::logging::init_logging;
use schema_layout::core::{LayoutResult, create_demo_graph};
use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Compute an entity-relationship diagram layout from a JSON schema description
#[derive(Parser, Debug)]
#[command(name = "schema-layout", version)]
struct Cli {
    /// Input JSON with `nodes` and `edges`; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write the layout here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Seed for the placement jitter (overrides LAYOUT_SEED)
    #[arg(short, long)]
    seed: Option<u64>,

    /// JSON file with layout tuning constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Lay out the built-in example schema instead of reading input
    #[arg(long, conflicts_with = "input")]
    demo: bool,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Log level (trace|debug|info|warn|error|off)
    #[arg(long)]
    log_level: Option<String>,

    /// Log format (compact|pretty|json)
    #[arg(long)]
    log_format: Option<String>,
}

fn main() -> ExitCode {
    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut env = Config::from_env();
    if cli.seed.is_some() {
        env.seed = cli.seed;
    }

    let level = cli.log_level.as_deref().or(env.log_level.as_deref());
    let format = cli.log_format.as_deref().or(env.log_format.as_deref());
    if let Err(e) = init_logging(level, format) {
        eprintln!("Failed to initialize logging: {}", e);
        return ExitCode::FAILURE;
    }

    match run(&cli, &env) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Layout failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli, env: &Config) -> LayoutResult<()> {
    let base: LayoutConfig = match &cli.config {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => LayoutConfig::default(),
    };
    let engine = env.engine(base);

    let input = if cli.demo {
        layout_input_from_graph(&create_demo_graph())
    } else {
        read_input(cli.input.as_ref())?
    };

    tracing::info!(
        nodes = input.nodes.len(),
        edges = input.edges.len(),
        seeded = env.has_seed(),
        "Computing layout"
    );

    let layout = engine.layout(&input)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&layout)?
    } else {
        serde_json::to_string(&layout)?
    };

    match &cli.output {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> LayoutResult<LayoutInput> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };
    Ok(serde_json::from_str(&raw)?)
}
