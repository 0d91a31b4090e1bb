// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use arrayvec::ArrayVec;

use crate::attacks;
use crate::moves::Move;
use crate::position::{kingside_rook, queenside_rook, Position};
use crate::types::{Color, Direction, Piece, PieceKind, Rank, Square};

/// A list of moves generated from a single position. 256 comfortably exceeds
/// the most moves any reachable position produces.
pub type MoveVec = ArrayVec<[Move; 256]>;

/// Generates pseudo-legal moves: moves that obey each piece's movement rules
/// but may leave the mover's own king in check. Legality filtering is the
/// caller's job (see `Position::legal_moves`).
pub struct MoveGenerator;

impl MoveGenerator {
    pub fn new() -> MoveGenerator {
        MoveGenerator
    }

    /// Appends every pseudo-legal move for the side to move. The output is
    /// sorted by source square and then destination square, so repeated
    /// calls over equal positions yield identical sequences.
    pub fn generate_moves(&self, pos: &Position, moves: &mut MoveVec) {
        let color = pos.side_to_move();
        for (sq, piece) in pos.board().iter() {
            if piece.color != color {
                continue;
            }

            match piece.kind {
                PieceKind::Pawn => self.pawn_moves(pos, sq, color, moves),
                PieceKind::Knight => {
                    self.leaper_moves(pos, sq, color, attacks::knight_attacks(sq), moves)
                }
                PieceKind::Bishop => {
                    self.slider_moves(pos, sq, color, &attacks::BISHOP_DIRECTIONS, moves)
                }
                PieceKind::Rook => {
                    self.slider_moves(pos, sq, color, &attacks::ROOK_DIRECTIONS, moves)
                }
                PieceKind::Queen => {
                    self.slider_moves(pos, sq, color, &attacks::BISHOP_DIRECTIONS, moves);
                    self.slider_moves(pos, sq, color, &attacks::ROOK_DIRECTIONS, moves);
                }
                PieceKind::King => self.king_moves(pos, sq, color, moves),
            }
        }

        moves.sort_unstable();
    }

    fn pawn_moves(&self, pos: &Position, sq: Square, color: Color, moves: &mut MoveVec) {
        let (start_rank, promo_rank, dir) = match color {
            Color::White => (Rank::Two, Rank::Eight, Direction::North),
            Color::Black => (Rank::Seven, Rank::One, Direction::South),
        };

        // A pawn on the last rank would already have promoted; a permissive
        // FEN can still put one there, in which case it has no moves.
        let ahead = match sq.towards(dir) {
            Some(ahead) => ahead,
            None => return,
        };

        if !pos.board().is_occupied(ahead) {
            if ahead.rank() == promo_rank {
                for &kind in &PROMOTION_KINDS {
                    moves.push(Move::promotion(sq, ahead, kind));
                }
            } else {
                moves.push(Move::quiet(sq, ahead));
            }

            if sq.rank() == start_rank {
                let two_ahead = ahead
                    .towards(dir)
                    .expect("double push from the start rank stays on board");
                if !pos.board().is_occupied(two_ahead) {
                    moves.push(Move::double_pawn_push(sq, two_ahead));
                }
            }
        }

        for &target in attacks::pawn_attacks(sq, color) {
            match pos.board().piece_at(target) {
                Some(victim) if victim.color != color => {
                    if target.rank() == promo_rank {
                        for &kind in &PROMOTION_KINDS {
                            moves.push(Move::promotion_capture(sq, target, kind));
                        }
                    } else {
                        moves.push(Move::capture(sq, target));
                    }
                }
                Some(_) => {}
                None => {
                    // The en-passant target square is always empty; the
                    // captured pawn sits beside the destination. Only emit
                    // the capture when that pawn is really there, so a
                    // hand-written FEN with a stray en-passant field cannot
                    // produce an unapplicable move.
                    if Some(target) == pos.en_passant_square() {
                        let victim_dir = match color {
                            Color::White => Direction::South,
                            Color::Black => Direction::North,
                        };
                        let victim = target
                            .towards(victim_dir)
                            .and_then(|sq| pos.board().piece_at(sq));
                        if victim == Some(Piece::new(PieceKind::Pawn, color.toggle())) {
                            moves.push(Move::en_passant(sq, target));
                        }
                    }
                }
            }
        }
    }

    fn leaper_moves(
        &self,
        pos: &Position,
        sq: Square,
        color: Color,
        targets: &[Square],
        moves: &mut MoveVec,
    ) {
        for &target in targets {
            match pos.board().piece_at(target) {
                Some(victim) if victim.color != color => moves.push(Move::capture(sq, target)),
                Some(_) => {}
                None => moves.push(Move::quiet(sq, target)),
            }
        }
    }

    fn slider_moves(
        &self,
        pos: &Position,
        sq: Square,
        color: Color,
        dirs: &[Direction],
        moves: &mut MoveVec,
    ) {
        for &dir in dirs {
            let mut cursor = sq;
            while let Some(target) = cursor.towards(dir) {
                match pos.board().piece_at(target) {
                    Some(victim) => {
                        if victim.color != color {
                            moves.push(Move::capture(sq, target));
                        }
                        break;
                    }
                    None => {
                        moves.push(Move::quiet(sq, target));
                        cursor = target;
                    }
                }
            }
        }
    }

    fn king_moves(&self, pos: &Position, sq: Square, color: Color, moves: &mut MoveVec) {
        self.leaper_moves(pos, sq, color, attacks::king_attacks(sq), moves);

        if pos.is_check(color) {
            // Can't castle out of check.
            return;
        }

        let them = color.toggle();
        if pos.can_castle_kingside(color) {
            let rook_home = kingside_rook(color);
            if pos.board().piece_at(rook_home) == Some(Piece::new(PieceKind::Rook, color)) {
                if let (Some(one), Some(two)) = (
                    sq.towards(Direction::East),
                    sq.offset(2, 0),
                ) {
                    if !pos.board().is_occupied(one)
                        && !pos.board().is_occupied(two)
                        && !pos.is_square_attacked(one, them)
                        && !pos.is_square_attacked(two, them)
                    {
                        moves.push(Move::kingside_castle(sq, two));
                    }
                }
            }
        }

        if pos.can_castle_queenside(color) {
            let rook_home = queenside_rook(color);
            if pos.board().piece_at(rook_home) == Some(Piece::new(PieceKind::Rook, color)) {
                if let (Some(one), Some(two), Some(three)) = (
                    sq.towards(Direction::West),
                    sq.offset(-2, 0),
                    sq.offset(-3, 0),
                ) {
                    // The rook passes over the third square, so it must be
                    // empty, but the king does not, so it may be attacked.
                    if !pos.board().is_occupied(one)
                        && !pos.board().is_occupied(two)
                        && !pos.board().is_occupied(three)
                        && !pos.is_square_attacked(one, them)
                        && !pos.is_square_attacked(two, them)
                    {
                        moves.push(Move::queenside_castle(sq, two));
                    }
                }
            }
        }
    }
}

impl Default for MoveGenerator {
    fn default() -> MoveGenerator {
        MoveGenerator::new()
    }
}

static PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Rook,
    PieceKind::Queen,
];
