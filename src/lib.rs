//! Crate root module declarations for the Parlor Chess state engine.
//!
//! This file exposes all top-level subsystems (board projection, piece
//! roster, move provision, the selection/turn state engine, automated-player
//! policies, and utility helpers) so tests, benches, and embedding UIs can
//! import stable module paths.

pub mod board {
    pub mod board_grid;
    pub mod cell;
    pub mod cell_codec;
    pub mod grid_location;
}

pub mod roster {
    pub mod piece;
    pub mod player;
    pub mod starting_layout;
}

pub mod movegen {
    pub mod move_provider;
    pub mod piece_moves;
}

pub mod engine {
    pub mod engine_errors;
    pub mod game;
    pub mod game_options;
    pub mod move_resolver;
    pub mod observers;
    pub mod selection;
    pub mod turn_controller;
}

pub mod policies {
    pub mod policy_greedy;
    pub mod policy_random;
    pub mod policy_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod game_log;
    pub mod render_board;
}
