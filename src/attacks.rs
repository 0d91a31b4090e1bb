// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use arrayvec::ArrayVec;

use crate::board::Board;
use crate::types::TableIndex;
use crate::types::{Color, Direction, Piece, PieceKind, Square, COLORS, SQUARES};

/// A short, fixed-capacity list of target squares. No piece attacks more
/// than eight squares at a fixed offset.
pub type SquareVec = ArrayVec<[Square; 8]>;

pub static ROOK_DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::East,
    Direction::South,
    Direction::West,
];

pub static BISHOP_DIRECTIONS: [Direction; 4] = [
    Direction::NorthEast,
    Direction::SouthEast,
    Direction::SouthWest,
    Direction::NorthWest,
];

struct KingTable {
    table: Vec<SquareVec>,
}

impl KingTable {
    pub fn new() -> KingTable {
        let mut kt = KingTable { table: Vec::new() };
        for &sq in SQUARES.iter() {
            let mut targets = SquareVec::new();
            for &(file_delta, rank_delta) in &[
                (-1, -1),
                (-1, 0),
                (-1, 1),
                (0, -1),
                (0, 1),
                (1, -1),
                (1, 0),
                (1, 1),
            ] {
                if let Some(target) = sq.offset(file_delta, rank_delta) {
                    targets.push(target);
                }
            }

            kt.table.push(targets);
        }

        kt
    }

    pub fn targets(&self, sq: Square) -> &[Square] {
        &self.table[sq.as_index()]
    }
}

struct KnightTable {
    table: Vec<SquareVec>,
}

impl KnightTable {
    pub fn new() -> KnightTable {
        let mut kt = KnightTable { table: Vec::new() };
        for &sq in SQUARES.iter() {
            let mut targets = SquareVec::new();
            for &(file_delta, rank_delta) in &[
                (-2, -1),
                (-2, 1),
                (-1, -2),
                (-1, 2),
                (1, -2),
                (1, 2),
                (2, -1),
                (2, 1),
            ] {
                if let Some(target) = sq.offset(file_delta, rank_delta) {
                    targets.push(target);
                }
            }

            kt.table.push(targets);
        }

        kt
    }

    pub fn targets(&self, sq: Square) -> &[Square] {
        &self.table[sq.as_index()]
    }
}

struct PawnTable {
    table: Vec<[SquareVec; 2]>,
}

impl PawnTable {
    pub fn new() -> PawnTable {
        let mut pt = PawnTable { table: Vec::new() };
        for &sq in SQUARES.iter() {
            let mut entry = [SquareVec::new(), SquareVec::new()];
            for &color in COLORS.iter() {
                let rank_delta = match color {
                    Color::White => 1,
                    Color::Black => -1,
                };

                for &file_delta in &[-1, 1] {
                    if let Some(target) = sq.offset(file_delta, rank_delta) {
                        entry[color.as_index()].push(target);
                    }
                }
            }

            pt.table.push(entry);
        }

        pt
    }

    pub fn targets(&self, sq: Square, color: Color) -> &[Square] {
        &self.table[sq.as_index()][color.as_index()]
    }
}

lazy_static! {
    static ref KING_TABLE: KingTable = KingTable::new();
    static ref KNIGHT_TABLE: KnightTable = KnightTable::new();
    static ref PAWN_TABLE: PawnTable = PawnTable::new();
}

/// The squares a king on `sq` attacks.
pub fn king_attacks(sq: Square) -> &'static [Square] {
    KING_TABLE.targets(sq)
}

/// The squares a knight on `sq` attacks.
pub fn knight_attacks(sq: Square) -> &'static [Square] {
    KNIGHT_TABLE.targets(sq)
}

/// The squares a pawn of the given color on `sq` attacks. This is the
/// capture pattern only; pawn pushes are not attacks.
pub fn pawn_attacks(sq: Square, color: Color) -> &'static [Square] {
    PAWN_TABLE.targets(sq, color)
}

/// Walks from `from` in the given direction and returns the first occupied
/// square together with its piece, if the ray hits one before the board
/// edge.
pub fn first_piece_along(board: &Board, from: Square, dir: Direction) -> Option<(Square, Piece)> {
    let mut cursor = from;
    while let Some(next) = cursor.towards(dir) {
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece));
        }

        cursor = next;
    }

    None
}

/// Returns whether any piece of color `by` attacks `target`. Probes outward
/// from the target square: leaper attacks are symmetric, a pawn attacker
/// stands on the defender's capture pattern, and the first piece along each
/// ray decides slider attacks.
pub fn square_attacked(board: &Board, target: Square, by: Color) -> bool {
    for &sq in knight_attacks(target) {
        if board.piece_at(sq) == Some(Piece::new(PieceKind::Knight, by)) {
            return true;
        }
    }

    for &sq in king_attacks(target) {
        if board.piece_at(sq) == Some(Piece::new(PieceKind::King, by)) {
            return true;
        }
    }

    // A pawn of color `by` attacks `target` exactly when it stands on a
    // square that a pawn of the opposite color would attack from `target`.
    for &sq in pawn_attacks(target, by.toggle()) {
        if board.piece_at(sq) == Some(Piece::new(PieceKind::Pawn, by)) {
            return true;
        }
    }

    for &dir in &ROOK_DIRECTIONS {
        if let Some((_, piece)) = first_piece_along(board, target, dir) {
            if piece.color == by
                && (piece.kind == PieceKind::Rook || piece.kind == PieceKind::Queen)
            {
                return true;
            }
        }
    }

    for &dir in &BISHOP_DIRECTIONS {
        if let Some((_, piece)) = first_piece_along(board, target, dir) {
            if piece.color == by
                && (piece.kind == PieceKind::Bishop || piece.kind == PieceKind::Queen)
            {
                return true;
            }
        }
    }

    false
}
