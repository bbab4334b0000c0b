use decorum::N64;

use courier_game_types::{AgentId, PackageStatus, World};

/// The pair of heuristic values a leaf produces, one per courier.
///
/// Values are total-ordered non-NaN floats so the search can compare and
/// prune without a partial-order escape hatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentValues {
    /// Courier One's projected value.
    pub one: N64,
    /// Courier Two's projected value.
    pub two: N64,
}

impl AgentValues {
    /// The value belonging to `agent`.
    pub fn get(&self, agent: AgentId) -> N64 {
        match agent {
            AgentId::One => self.one,
            AgentId::Two => self.two,
        }
    }
}

/// This trait is used to control something that can score a world as a pair
/// of per-courier values.
///
/// We use this trait to be able to layer in different scoring approaches
/// without changing the engine.
pub trait Scorable {
    /// Score the given world for both couriers.
    fn score(&self, world: &World) -> AgentValues;
}

impl<FnLike: Fn(&World) -> AgentValues> Scorable for FnLike {
    fn score(&self, world: &World) -> AgentValues {
        (self)(world)
    }
}

/// The package-lifecycle heuristic.
///
/// Each package contributes to the pair independently of history or path
/// cost: a pending package is a shared unresolved opportunity worth 0.25 to
/// both couriers; a picked-up package is worth 0.5 to its carrier; a
/// delivered one is worth 1.0 to its deliverer. For N packages each value
/// lies in [0, N].
pub fn package_heuristic(world: &World) -> AgentValues {
    let mut one = 0.0;
    let mut two = 0.0;

    for package in world.packages() {
        match package.status {
            PackageStatus::Pending => {
                one += 0.25;
                two += 0.25;
            }
            PackageStatus::PickedUp(AgentId::One) => one += 0.5,
            PackageStatus::PickedUp(AgentId::Two) => two += 0.5,
            PackageStatus::Delivered(AgentId::One) => one += 1.0,
            PackageStatus::Delivered(AgentId::Two) => two += 1.0,
        }
    }

    AgentValues {
        one: N64::from(one),
        two: N64::from(two),
    }
}
