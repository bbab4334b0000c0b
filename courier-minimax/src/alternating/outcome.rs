use text_trees::StringTreeNode;

use courier_game_types::{AgentId, Move};

use super::AgentValues;

/// This is returned from the search. It contains everything we learned about
/// the explored game tree.
#[derive(Debug, Clone)]
pub enum SearchReturn {
    /// A non-leaf node: one candidate subtree per enumerated move, in the
    /// fixed candidate order, possibly cut short by an alpha-beta cutoff.
    Node {
        /// Which courier was moving at this node.
        moving_agent: AgentId,
        /// The explored candidates, in enumeration order.
        options: Vec<(Move, SearchReturn)>,
        /// The selected candidate's move.
        chosen: Move,
        /// The selected candidate's projected value pair.
        values: AgentValues,
        /// Whether the remaining siblings were pruned away.
        alpha_beta_cutoff: bool,
        /// Depth of this node in the search tree, in plies.
        depth: usize,
    },
    /// A leaf: the horizon, the depth bound, or a fully resolved package set
    /// stopped the recursion and the world was scored as-is.
    Leaf {
        /// The scored value pair.
        values: AgentValues,
    },
}

impl SearchReturn {
    /// The projected value pair for this subtree.
    pub fn values(&self) -> AgentValues {
        match self {
            SearchReturn::Node { values, .. } => *values,
            SearchReturn::Leaf { values } => *values,
        }
    }

    /// The move the acting courier should make, or `None` for a leaf (the
    /// caller is already past the horizon and may as well stay).
    pub fn best_move(&self) -> Option<Move> {
        match self {
            SearchReturn::Node { chosen, .. } => Some(*chosen),
            SearchReturn::Leaf { .. } => None,
        }
    }

    /// The principal variation: each courier's chosen move down the selected
    /// line of play. Useful when debugging why a move was picked.
    pub fn chosen_route(&self) -> Vec<(AgentId, Move)> {
        match self {
            SearchReturn::Leaf { .. } => vec![],
            SearchReturn::Node {
                moving_agent,
                options,
                chosen,
                ..
            } => {
                let mut route = vec![(*moving_agent, *chosen)];
                if let Some((_, subtree)) = options.iter().find(|(mv, _)| mv == chosen) {
                    route.extend(subtree.chosen_route());
                }
                route
            }
        }
    }

    /// A visual rendering of the explored tree, showing the moving courier,
    /// the candidate move, and the projected values at every node. Intended
    /// for small depths; the tree grows five-fold per ply.
    pub fn to_text_tree(&self) -> Option<String> {
        let node = self.to_text_tree_node("root".to_owned())?;
        Some(format!("{}", node))
    }

    fn to_text_tree_node(&self, label: String) -> Option<StringTreeNode> {
        match self {
            SearchReturn::Leaf { .. } => None,
            SearchReturn::Node {
                moving_agent,
                options,
                chosen,
                values,
                ..
            } => {
                let mut node = StringTreeNode::new(format!(
                    "{} -> {} {} (p1={}, p2={})",
                    label, moving_agent, chosen, values.one, values.two
                ));
                for (mv, subtree) in options {
                    if let Some(child) =
                        subtree.to_text_tree_node(format!("{} {}", moving_agent, mv))
                    {
                        node.push_node(child);
                    }
                }
                Some(node)
            }
        }
    }
}
