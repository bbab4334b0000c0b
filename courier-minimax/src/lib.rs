#![deny(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Bounded alternating minimax for the two-courier delivery game.
//!
//! You provide a scoring function that turns a [`courier_game_types::World`]
//! into a pair of per-courier values; the engine explores the turn-alternating
//! game tree up to a depth and time-horizon bound and returns the best move
//! for the courier whose turn it is, under one of three cooperation policies.
//!
//! We lean on the `courier-game-types` crate for the game logic, and in
//! particular for `World::apply_move`, which is used to generate the next
//! states.

pub mod alternating;
