use decorum::{Infinite, N64};
use derivative::Derivative;
use tracing::info_span;

use courier_game_types::{AgentId, Move, World};

use super::{package_heuristic, AgentValues, Scorable, SearchReturn};

/// Reference search-depth bound, in plies.
pub const DEFAULT_MAX_DEPTH: usize = 7;

/// Reference simulation horizon, in ticks.
pub const DEFAULT_TIME_HORIZON: u32 = 4;

/// The cooperation policy governing how a candidate's value pair is combined
/// into the acting courier's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Each courier maximizes its own advantage over the other
    /// (`own - other`). The only mode where alpha-beta pruning applies.
    Adversarial,
    /// Each courier maximizes only its own value; exact ties are broken
    /// toward a strictly higher value for the other courier.
    SemiCooperative,
    /// Both couriers maximize the joint value (`p1 + p2`).
    FullyCooperative,
}

impl Mode {
    /// Combines a candidate's value pair into the acting courier's score.
    pub fn combine(self, acting: AgentId, values: AgentValues) -> N64 {
        match self {
            Mode::Adversarial => match acting {
                AgentId::One => values.one - values.two,
                AgentId::Two => values.two - values.one,
            },
            Mode::SemiCooperative => values.get(acting),
            Mode::FullyCooperative => values.one + values.two,
        }
    }

    /// A short human-readable policy name for reports and spans.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Adversarial => "adversarial",
            Mode::SemiCooperative => "semi-cooperative",
            Mode::FullyCooperative => "fully cooperative",
        }
    }
}

/// The bounds and policy for one search. Always passed explicitly so the
/// engine is reentrant and several configurations can coexist in one
/// process.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// The cooperation policy.
    pub mode: Mode,
    /// Leaf cutoff in plies from the search root.
    pub max_depth: usize,
    /// Leaf cutoff on the world's tick counter.
    pub time_horizon: u32,
}

impl SearchConfig {
    /// A configuration for `mode` with the reference depth and horizon.
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            max_depth: DEFAULT_MAX_DEPTH,
            time_horizon: DEFAULT_TIME_HORIZON,
        }
    }
}

#[derive(Derivative, Clone)]
#[derivative(Debug)]
/// This is the struct that wraps a search configuration and a scoring
/// function and can be used to run the alternating minimax.
///
/// It also outputs traces using the [tracing] crate.
pub struct MinimaxPlanner<ScorableType>
where
    ScorableType: Scorable,
{
    config: SearchConfig,
    #[derivative(Debug = "ignore")]
    score_function: ScorableType,
    name: &'static str,
}

impl MinimaxPlanner<fn(&World) -> AgentValues> {
    /// A planner over the standard package-lifecycle heuristic.
    pub fn with_package_heuristic(config: SearchConfig, name: &'static str) -> Self {
        Self::new(config, package_heuristic, name)
    }
}

impl<ScorableType> MinimaxPlanner<ScorableType>
where
    ScorableType: Scorable,
{
    /// Construct a new `MinimaxPlanner` over an arbitrary scoring function.
    pub fn new(config: SearchConfig, score_function: ScorableType, name: &'static str) -> Self {
        Self {
            config,
            score_function,
            name,
        }
    }

    /// The configuration this planner searches under.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Pick the next move for the courier whose turn it is in `world`.
    ///
    /// Returns the explored tree; the root's [`SearchReturn::best_move`] is
    /// the move to play and [`SearchReturn::values`] are both couriers'
    /// projected heuristic values down the chosen line. A root that is
    /// already terminal comes back as a leaf with no move.
    pub fn search(&self, world: &World) -> SearchReturn {
        let span = info_span!(
            "alternating_minimax",
            planner = self.name,
            mode = self.config.mode.label(),
            acting = %world.acting_agent(),
            time = world.time(),
            ply = world.ply(),
            chosen_move = tracing::field::Empty,
            chosen_values = tracing::field::Empty,
        );

        span.in_scope(|| {
            let result = self.expand(world, 0, N64::NEG_INFINITY, N64::INFINITY);

            let current_span = tracing::Span::current();
            if let Some(chosen) = result.best_move() {
                current_span.record("chosen_move", format!("{}", chosen).as_str());
            }
            current_span.record("chosen_values", format!("{:?}", result.values()).as_str());

            result
        })
    }

    /// One level of the recursion.
    ///
    /// The window is only consulted in adversarial mode: on courier One's
    /// turns scores are compared against `beta` directly, on courier Two's
    /// turns with the sign inverted, so a single pair of bounds survives the
    /// turn flips. Cutoffs use strict inequalities and fire only after the
    /// candidate has been folded into the running best, so pruning can skip
    /// siblings but never change the selection.
    fn expand(&self, world: &World, depth: usize, alpha: N64, beta: N64) -> SearchReturn {
        if world.time() >= self.config.time_horizon
            || depth >= self.config.max_depth
            || world.all_packages_resolved()
        {
            return SearchReturn::Leaf {
                values: self.score_function.score(world),
            };
        }

        let mut alpha = alpha;
        let mut beta = beta;
        let acting = world.acting_agent();

        let mut options: Vec<(Move, SearchReturn)> = Vec::with_capacity(Move::ALL.len());
        let mut best: Option<(Move, N64, AgentValues)> = None;
        let mut alpha_beta_cutoff = false;

        for candidate in Move::ALL {
            let mut next = world.clone();
            next.apply_move(acting, candidate);
            let subtree = self.expand(&next, depth + 1, alpha, beta);
            let values = subtree.values();
            let score = self.config.mode.combine(acting, values);
            options.push((candidate, subtree));

            let replace = match best {
                None => true,
                Some((_, best_score, best_values)) => {
                    score > best_score
                        || (self.config.mode == Mode::SemiCooperative
                            && score == best_score
                            && values.get(acting.other()) > best_values.get(acting.other()))
                }
            };
            if replace {
                best = Some((candidate, score, values));
            }

            if self.config.mode == Mode::Adversarial {
                match acting {
                    AgentId::One => {
                        if beta < score {
                            alpha_beta_cutoff = true;
                            break;
                        }
                        if alpha < score {
                            alpha = score;
                        }
                    }
                    AgentId::Two => {
                        if alpha > -score {
                            alpha_beta_cutoff = true;
                            break;
                        }
                        if beta > -score {
                            beta = -score;
                        }
                    }
                }
            }
        }

        let (chosen, _, values) = best.expect("the stay candidate is always evaluated");
        SearchReturn::Node {
            moving_agent: acting,
            options,
            chosen,
            values,
            alpha_beta_cutoff,
            depth,
        }
    }
}
