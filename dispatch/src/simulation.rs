use colored::Colorize;
use itertools::Itertools;
use serde::Serialize;
use tracing::info;

use courier_game_types::{AgentId, Move, Vertex, World};
use courier_minimax::alternating::{MinimaxPlanner, SearchConfig};

/// One courier's side of a finished run.
#[derive(Debug, Serialize)]
pub(crate) struct AgentReport {
    pub score: u32,
    pub path: Vec<Vertex>,
}

/// The outcome of simulating one cooperation policy to completion.
#[derive(Debug, Serialize)]
pub(crate) struct SimulationReport {
    pub mode: &'static str,
    pub ticks: u32,
    pub agent_one: AgentReport,
    pub agent_two: AgentReport,
}

impl SimulationReport {
    pub(crate) fn print(&self) {
        println!();
        println!("{}", format!("**** {} ****", self.mode).bold());
        for (label, agent) in [("Courier 1", &self.agent_one), ("Courier 2", &self.agent_two)] {
            let score = if agent.score > 0 {
                agent.score.to_string().green()
            } else {
                agent.score.to_string().normal()
            };
            println!(
                "{label}: score {score}, path {}",
                agent.path.iter().join(" -> ")
            );
        }
    }
}

/// Runs one policy from the initial world to the horizon, asking the planner
/// for the acting courier's move at every ply and recording both couriers'
/// locations after each tick.
///
/// The run ends early once every package is delivered or past its deadline.
pub(crate) fn run_simulation(initial: &World, config: SearchConfig) -> SimulationReport {
    let planner = MinimaxPlanner::with_package_heuristic(config, "dispatch");
    let mut world = initial.clone();

    let mut path_one = vec![world.agent(AgentId::One).location];
    let mut path_two = vec![world.agent(AgentId::Two).location];

    while world.time() < config.time_horizon && !game_over(&world) {
        for _ in 0..2 {
            let mv = planner.search(&world).best_move().unwrap_or(Move::Stay);
            world.apply_move(world.acting_agent(), mv);
        }
        path_one.push(world.agent(AgentId::One).location);
        path_two.push(world.agent(AgentId::Two).location);
    }

    info!(
        mode = config.mode.label(),
        ticks = world.time(),
        courier_one_score = world.agent(AgentId::One).score,
        courier_two_score = world.agent(AgentId::Two).score,
        "simulation finished"
    );

    SimulationReport {
        mode: config.mode.label(),
        ticks: world.time(),
        agent_one: AgentReport {
            score: world.agent(AgentId::One).score,
            path: path_one,
        },
        agent_two: AgentReport {
            score: world.agent(AgentId::Two).score,
            path: path_two,
        },
    }
}

fn game_over(world: &World) -> bool {
    world
        .packages()
        .iter()
        .all(|package| package.is_delivered() || package.delivery_time <= world.time())
}

#[cfg(test)]
mod tests {
    use courier_minimax::alternating::Mode;

    use crate::input::Problem;

    use super::*;

    const EXAMPLE: &str = include_str!("../fixtures/example.txt");

    fn example_world() -> World {
        Problem::parse(EXAMPLE).unwrap().to_world().unwrap()
    }

    #[test]
    fn paths_start_at_the_courier_starts_and_stay_connected() {
        let world = example_world();
        let report = run_simulation(&world, SearchConfig::new(Mode::FullyCooperative));

        assert_eq!(report.agent_one.path[0], Vertex::new(0, 0));
        assert_eq!(report.agent_two.path[0], Vertex::new(2, 2));

        for path in [&report.agent_one.path, &report.agent_two.path] {
            for pair in path.windows(2) {
                let dx = (pair[0].x - pair[1].x).abs();
                let dy = (pair[0].y - pair[1].y).abs();
                assert!(dx + dy <= 1, "step {} -> {} is not a grid move", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn the_original_world_is_left_untouched() {
        let world = example_world();
        run_simulation(&world, SearchConfig::new(Mode::Adversarial));
        assert_eq!(world.time(), 0);
        assert_eq!(world.agent(AgentId::One).score, 0);
    }

    #[test]
    fn cooperation_decides_the_contested_delivery() {
        let world = example_world();

        // courier two can reach the delivery vertex first and an adversary
        // parks on it, so the delivery never lands
        let adversarial = run_simulation(&world, SearchConfig::new(Mode::Adversarial));
        assert_eq!(adversarial.agent_one.score, 0);

        // both cooperative policies let courier one through by the deadline
        for mode in [Mode::SemiCooperative, Mode::FullyCooperative] {
            let report = run_simulation(&world, SearchConfig::new(mode));
            assert_eq!(report.agent_one.score, 1, "mode {:?}", mode);
            assert!(report.ticks <= 3, "mode {:?}", mode);
        }
    }
}
