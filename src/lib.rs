// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate num_derive;
#[macro_use]
extern crate bitflags;
#[macro_use]
extern crate lazy_static;

pub mod attacks;
mod board;
mod move_generator;
mod moves;
mod perft;
mod position;
mod types;

pub use crate::board::Board;
pub use crate::move_generator::{MoveGenerator, MoveVec};
pub use crate::moves::Move;
pub use crate::perft::perft;
pub use crate::position::{FenParseError, IllegalMoveError, MoveParseError, Position};
pub use crate::types::{CastleStatus, Color, Direction, File, Piece, PieceKind, Rank, Square};
pub use crate::types::{FILES, RANKS};
