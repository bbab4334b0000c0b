use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;

use courier_minimax::alternating::{
    MinimaxPlanner, Mode, SearchConfig, DEFAULT_MAX_DEPTH, DEFAULT_TIME_HORIZON,
};

mod input;
mod simulation;

use input::Problem;
use simulation::run_simulation;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    Adversarial,
    SemiCooperative,
    FullyCooperative,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Adversarial => Mode::Adversarial,
            ModeArg::SemiCooperative => Mode::SemiCooperative,
            ModeArg::FullyCooperative => Mode::FullyCooperative,
        }
    }
}

/// Simulate two couriers delivering time-windowed packages on a blocked-edge
/// grid, under each cooperation policy
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Path to the problem definition file
    #[clap(value_parser)]
    problem: PathBuf,

    /// Run a single cooperation policy instead of all three
    #[clap(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Search depth bound, in plies
    #[clap(long, value_parser, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Simulation horizon, in ticks
    #[clap(long, value_parser, default_value_t = DEFAULT_TIME_HORIZON)]
    time_horizon: u32,

    /// Print the reports as JSON instead of text
    #[clap(long)]
    json: bool,

    /// Print the first decision's search tree for each run (use a small
    /// --max-depth, the tree grows five-fold per ply)
    #[clap(long)]
    show_tree: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let text = std::fs::read_to_string(&args.problem)
        .wrap_err_with(|| format!("could not read {}", args.problem.display()))?;
    let problem = Problem::parse(&text)
        .wrap_err_with(|| format!("could not parse {}", args.problem.display()))?;
    let world = problem.to_world()?;

    info!(
        x_max = problem.x_max,
        y_max = problem.y_max,
        packages = problem.packages.len(),
        blocked_edges = problem.blocked_edges.len(),
        "problem loaded"
    );

    let modes: Vec<Mode> = match args.mode {
        Some(mode) => vec![mode.into()],
        None => vec![
            Mode::Adversarial,
            Mode::SemiCooperative,
            Mode::FullyCooperative,
        ],
    };

    let mut reports = Vec::with_capacity(modes.len());
    for mode in modes {
        let config = SearchConfig {
            mode,
            max_depth: args.max_depth,
            time_horizon: args.time_horizon,
        };

        if args.show_tree {
            let planner = MinimaxPlanner::with_package_heuristic(config, "dispatch");
            if let Some(tree) = planner.search(&world).to_text_tree() {
                println!("{}", tree);
            }
        }

        reports.push(run_simulation(&world, config));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            report.print();
        }
        println!();
    }

    Ok(())
}
