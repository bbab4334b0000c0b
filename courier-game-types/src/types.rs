use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid position. Valid positions lie in `[0, x_max] x [0, y_max]` for the
/// grid they belong to; `Move::apply` can step outside that range, which the
/// adjacency check in `World::apply_move` rejects.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

impl Vertex {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// One of the five candidate actions a courier can take on its ply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Stay,
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Every candidate move, in the order the search enumerates them. The
    /// order is load-bearing: the first maximum wins ties.
    pub const ALL: [Move; 5] = [Move::Stay, Move::Up, Move::Down, Move::Left, Move::Right];

    /// The vertex this move targets from `from`. `Stay` targets `from`
    /// itself.
    pub fn apply(self, from: Vertex) -> Vertex {
        match self {
            Move::Stay => from,
            Move::Up => Vertex::new(from.x, from.y + 1),
            Move::Down => Vertex::new(from.x, from.y - 1),
            Move::Left => Vertex::new(from.x - 1, from.y),
            Move::Right => Vertex::new(from.x + 1, from.y),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Move::Stay => "stay",
            Move::Up => "up",
            Move::Down => "down",
            Move::Left => "left",
            Move::Right => "right",
        };
        write!(f, "{}", name)
    }
}

/// Identifies one of the two couriers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentId {
    One,
    Two,
}

impl AgentId {
    /// The courier whose turn it is at the given ply. Even plies belong to
    /// One, odd plies to Two.
    pub fn from_ply(ply: u32) -> Self {
        if ply % 2 == 0 {
            AgentId::One
        } else {
            AgentId::Two
        }
    }

    pub fn other(self) -> Self {
        match self {
            AgentId::One => AgentId::Two,
            AgentId::Two => AgentId::One,
        }
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentId::One => write!(f, "agent 1"),
            AgentId::Two => write!(f, "agent 2"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moves_target_cardinal_neighbors() {
        let from = Vertex::new(3, 3);
        assert_eq!(Move::Stay.apply(from), from);
        assert_eq!(Move::Up.apply(from), Vertex::new(3, 4));
        assert_eq!(Move::Down.apply(from), Vertex::new(3, 2));
        assert_eq!(Move::Left.apply(from), Vertex::new(2, 3));
        assert_eq!(Move::Right.apply(from), Vertex::new(4, 3));
    }

    #[test]
    fn candidate_order_starts_with_stay() {
        assert_eq!(Move::ALL[0], Move::Stay);
        assert_eq!(Move::ALL.len(), 5);
    }

    #[test]
    fn ply_parity_alternates_agents() {
        assert_eq!(AgentId::from_ply(0), AgentId::One);
        assert_eq!(AgentId::from_ply(1), AgentId::Two);
        assert_eq!(AgentId::from_ply(2), AgentId::One);
        assert_eq!(AgentId::One.other(), AgentId::Two);
        assert_eq!(AgentId::Two.other(), AgentId::One);
    }
}
