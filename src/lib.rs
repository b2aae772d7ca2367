//! A minimal turn-based Pac-Man on a fixed 10×10 grid.
//!
//! The engine ([`game`] and [`maze`]) is plain state plus an injected RNG, so
//! it can be driven and tested without a terminal; [`ui`] is the crossterm
//! collaborator that renders the board and turns keystrokes into commands.

pub mod game;
pub mod maze;
pub mod ui;
