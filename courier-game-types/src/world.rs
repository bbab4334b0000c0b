use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::types::{AgentId, Move, Vertex};

/// A courier: where it stands and how many packages it has delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub location: Vertex,
    pub score: u32,
}

impl Agent {
    pub fn at(location: Vertex) -> Self {
        Self { location, score: 0 }
    }
}

/// Lifecycle of a package. The owner is part of the variant so a picked-up or
/// delivered package can never lose track of who carried it, and the only
/// possible transitions are Pending -> PickedUp -> Delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PackageStatus {
    Pending,
    PickedUp(AgentId),
    Delivered(AgentId),
}

impl PackageStatus {
    pub fn owner(self) -> Option<AgentId> {
        match self {
            PackageStatus::Pending => None,
            PackageStatus::PickedUp(agent) | PackageStatus::Delivered(agent) => Some(agent),
        }
    }
}

/// A time-windowed delivery job: pick up at `pickup_location` no earlier than
/// `pickup_time`, drop off at `delivery_location` no later than
/// `delivery_time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub pickup_location: Vertex,
    pub pickup_time: u32,
    pub delivery_location: Vertex,
    pub delivery_time: u32,
    pub status: PackageStatus,
}

impl Package {
    pub fn new(
        pickup_location: Vertex,
        pickup_time: u32,
        delivery_location: Vertex,
        delivery_time: u32,
    ) -> Self {
        Self {
            pickup_location,
            pickup_time,
            delivery_location,
            delivery_time,
            status: PackageStatus::Pending,
        }
    }

    pub fn is_delivered(&self) -> bool {
        matches!(self.status, PackageStatus::Delivered(_))
    }
}

/// One snapshot of the simulation.
///
/// `time` is the global tick and advances only when courier One acts;
/// courier Two acts within the same tick. `ply` counts single-courier
/// actions and determines whose turn it is (even: One, odd: Two).
///
/// Cloning a `World` deep-copies the couriers and packages but shares the
/// grid, so the search can explore hypothetical futures without perturbing
/// the authoritative state and without duplicating the adjacency structure.
#[derive(Debug, Clone)]
pub struct World {
    time: u32,
    ply: u32,
    agent_one: Agent,
    agent_two: Agent,
    packages: Vec<Package>,
    grid: Arc<Grid>,
}

impl World {
    /// Initial state at time 0, ply 0. Runs one package-resolution pass so a
    /// courier starting on an already-open pickup vertex collects the package
    /// before anyone moves.
    pub fn new(grid: Arc<Grid>, agent_one: Agent, agent_two: Agent, packages: Vec<Package>) -> Self {
        let mut world = Self {
            time: 0,
            ply: 0,
            agent_one,
            agent_two,
            packages,
            grid,
        };
        world.resolve_packages();
        world
    }

    pub fn time(&self) -> u32 {
        self.time
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    /// The courier whose turn it is.
    pub fn acting_agent(&self) -> AgentId {
        AgentId::from_ply(self.ply)
    }

    pub fn agent(&self, id: AgentId) -> &Agent {
        match id {
            AgentId::One => &self.agent_one,
            AgentId::Two => &self.agent_two,
        }
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Applies one courier's move and advances the clocks.
    ///
    /// A move is legal when its target is an adjacency neighbor of the
    /// courier's location and is not occupied by the other courier. An
    /// illegal move is silently discarded and the courier stays put; `Stay`
    /// itself rides this path, since no vertex neighbors itself. Either way
    /// the package-resolution pass runs and `ply` advances; `time` advances
    /// only for courier One, before its move is resolved.
    pub fn apply_move(&mut self, agent: AgentId, mv: Move) {
        if agent == AgentId::One {
            self.time += 1;
        }

        let from = self.agent(agent).location;
        let target = mv.apply(from);
        let legal = self.grid.neighbors(from).contains(&target)
            && target != self.agent(agent.other()).location;
        if legal {
            self.agent_mut(agent).location = target;
        }

        self.resolve_packages();
        self.ply += 1;
    }

    /// True when every package is delivered or its deadline has already
    /// passed, which ends the planning problem.
    pub fn all_packages_resolved(&self) -> bool {
        self.packages
            .iter()
            .all(|package| package.is_delivered() || package.delivery_time < self.time)
    }

    fn agent_mut(&mut self, id: AgentId) -> &mut Agent {
        match id {
            AgentId::One => &mut self.agent_one,
            AgentId::Two => &mut self.agent_two,
        }
    }

    /// Pickup and delivery checks for every package, in package order.
    ///
    /// Pickup requires a pending package whose window has opened and a
    /// courier standing on the pickup vertex; if both couriers stand there,
    /// Two wins (it is checked second). Delivery requires the owning courier
    /// on the delivery vertex while `time <= delivery_time`. A package whose
    /// pickup and delivery vertices coincide can do both in one pass.
    fn resolve_packages(&mut self) {
        let time = self.time;
        for package in &mut self.packages {
            if package.status == PackageStatus::Pending && package.pickup_time <= time {
                if self.agent_one.location == package.pickup_location {
                    package.status = PackageStatus::PickedUp(AgentId::One);
                }
                if self.agent_two.location == package.pickup_location {
                    package.status = PackageStatus::PickedUp(AgentId::Two);
                }
            }

            if let PackageStatus::PickedUp(owner) = package.status {
                if package.delivery_time >= time {
                    let carrier = match owner {
                        AgentId::One => &mut self.agent_one,
                        AgentId::Two => &mut self.agent_two,
                    };
                    if carrier.location == package.delivery_location {
                        package.status = PackageStatus::Delivered(owner);
                        carrier.score += 1;
                    }
                }
            }
        }
    }
}
