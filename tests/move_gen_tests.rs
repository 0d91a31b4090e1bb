// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use std::collections::HashSet;

use caissa::{Move, PieceKind, Position, Square};

fn assert_moves_generated(fen: &'static str, moves: &[Move]) {
    let pos = Position::from_fen(fen).unwrap();
    let generated: HashSet<_> = pos.pseudo_legal_moves().iter().cloned().collect();
    for mov in &generated {
        if !moves.contains(mov) {
            println!("move {} was not found in expected collection:", mov);
            for m in moves {
                println!("   > {}", m);
            }

            panic!()
        }
    }

    for mov in moves {
        if !generated.contains(mov) {
            println!("move {} was not generated; generated moves:", mov);
            for m in &generated {
                println!("   > {}", m);
            }

            panic!()
        }
    }
}

fn assert_moves_contains(fen: &'static str, moves: &[Move]) {
    let pos = Position::from_fen(fen).unwrap();
    let generated: HashSet<_> = pos.pseudo_legal_moves().iter().cloned().collect();
    for mov in moves {
        if !generated.contains(mov) {
            println!("move {} was not generated", mov);
            panic!()
        }
    }
}

fn assert_moves_does_not_contain(fen: &'static str, moves: &[Move]) {
    let pos = Position::from_fen(fen).unwrap();
    let generated: HashSet<_> = pos.pseudo_legal_moves().iter().cloned().collect();
    for mov in moves {
        if generated.contains(mov) {
            println!("move list contained banned move: {}", mov);
            panic!()
        }
    }
}

mod pawns {
    use super::*;

    #[test]
    fn white_pawn_smoke_test() {
        assert_moves_generated(
            "8/8/8/8/5P2/8/8/8 w - - 0 1",
            &[Move::quiet(Square::F4, Square::F5)],
        );
    }

    #[test]
    fn white_pawn_starting_rank() {
        assert_moves_generated(
            "8/8/8/8/8/8/4P3/8 w - - 0 1",
            &[
                Move::quiet(Square::E2, Square::E3),
                Move::double_pawn_push(Square::E2, Square::E4),
            ],
        );
    }

    #[test]
    fn black_pawn_starting_rank() {
        assert_moves_generated(
            "8/4p3/8/8/8/8/8/8 b - - 0 1",
            &[
                Move::quiet(Square::E7, Square::E6),
                Move::double_pawn_push(Square::E7, Square::E5),
            ],
        );
    }

    #[test]
    fn white_pawn_blocked() {
        assert_moves_generated("8/8/8/8/4p3/4P3/8/8 w - - 0 1", &[]);
    }

    #[test]
    fn white_pawn_double_push_blocked() {
        // a piece on the intermediate square blocks both pushes.
        assert_moves_generated("8/8/8/8/8/4n3/4P3/8 w - - 0 1", &[]);
    }

    #[test]
    fn white_pawn_captures() {
        assert_moves_generated(
            "8/8/8/8/3p1p2/4P3/8/8 w - - 0 1",
            &[
                Move::quiet(Square::E3, Square::E4),
                Move::capture(Square::E3, Square::D4),
                Move::capture(Square::E3, Square::F4),
            ],
        );
    }

    #[test]
    fn white_pawn_en_passant() {
        assert_moves_generated(
            "8/8/4PpP1/8/8/8/8/8 w - f7 0 1",
            &[
                Move::quiet(Square::E6, Square::E7),
                Move::quiet(Square::G6, Square::G7),
                Move::en_passant(Square::E6, Square::F7),
                Move::en_passant(Square::G6, Square::F7),
            ],
        );
    }

    #[test]
    fn en_passant_not_generated_without_victim() {
        // the en-passant field names d6, but there is no pawn on d5 to
        // capture, so no en-passant move comes out.
        assert_moves_generated(
            "8/8/8/4P3/8/8/8/8 w - d6 0 1",
            &[Move::quiet(Square::E5, Square::E6)],
        );
    }

    #[test]
    fn white_pawn_promotion() {
        assert_moves_generated(
            "8/4P3/8/8/8/8/8/8 w - - 0 1",
            &[
                Move::promotion(Square::E7, Square::E8, PieceKind::Knight),
                Move::promotion(Square::E7, Square::E8, PieceKind::Bishop),
                Move::promotion(Square::E7, Square::E8, PieceKind::Rook),
                Move::promotion(Square::E7, Square::E8, PieceKind::Queen),
            ],
        );
    }

    #[test]
    fn white_pawn_promo_capture() {
        assert_moves_generated(
            "5b2/4P3/8/8/8/8/8/8 w - - 0 1",
            &[
                Move::promotion(Square::E7, Square::E8, PieceKind::Knight),
                Move::promotion(Square::E7, Square::E8, PieceKind::Bishop),
                Move::promotion(Square::E7, Square::E8, PieceKind::Rook),
                Move::promotion(Square::E7, Square::E8, PieceKind::Queen),
                Move::promotion_capture(Square::E7, Square::F8, PieceKind::Knight),
                Move::promotion_capture(Square::E7, Square::F8, PieceKind::Bishop),
                Move::promotion_capture(Square::E7, Square::F8, PieceKind::Rook),
                Move::promotion_capture(Square::E7, Square::F8, PieceKind::Queen),
            ],
        );
    }
}

mod knights {
    use super::*;

    #[test]
    fn knight_in_the_center() {
        assert_moves_generated(
            "8/8/8/8/4N3/8/8/8 w - - 0 1",
            &[
                Move::quiet(Square::E4, Square::D2),
                Move::quiet(Square::E4, Square::F2),
                Move::quiet(Square::E4, Square::C3),
                Move::quiet(Square::E4, Square::G3),
                Move::quiet(Square::E4, Square::C5),
                Move::quiet(Square::E4, Square::G5),
                Move::quiet(Square::E4, Square::D6),
                Move::quiet(Square::E4, Square::F6),
            ],
        );
    }

    #[test]
    fn knight_on_the_rim() {
        assert_moves_generated(
            "8/8/8/8/8/8/8/N7 w - - 0 1",
            &[
                Move::quiet(Square::A1, Square::B3),
                Move::quiet(Square::A1, Square::C2),
            ],
        );
    }

    #[test]
    fn knight_jumps_over_pieces() {
        // the knight is boxed in by pawns and still reaches its targets.
        assert_moves_contains(
            "8/8/8/8/3ppp2/3pNp2/3ppp2/8 w - - 0 1",
            &[
                Move::quiet(Square::E3, Square::C2),
                Move::quiet(Square::E3, Square::G2),
                Move::quiet(Square::E3, Square::C4),
                Move::quiet(Square::E3, Square::G4),
                Move::quiet(Square::E3, Square::D1),
                Move::quiet(Square::E3, Square::F1),
                Move::quiet(Square::E3, Square::D5),
                Move::quiet(Square::E3, Square::F5),
            ],
        );
    }
}

mod sliders {
    use super::*;

    #[test]
    fn rook_rays_and_blockers() {
        assert_moves_generated(
            "8/8/8/3p4/8/3R3P/8/8 w - - 0 1",
            &[
                Move::quiet(Square::D3, Square::D4),
                Move::capture(Square::D3, Square::D5),
                Move::quiet(Square::D3, Square::D2),
                Move::quiet(Square::D3, Square::D1),
                Move::quiet(Square::D3, Square::E3),
                Move::quiet(Square::D3, Square::F3),
                Move::quiet(Square::D3, Square::G3),
                Move::quiet(Square::D3, Square::A3),
                Move::quiet(Square::D3, Square::B3),
                Move::quiet(Square::D3, Square::C3),
                Move::quiet(Square::H3, Square::H4),
            ],
        );
    }

    #[test]
    fn bishop_on_open_diagonals() {
        assert_moves_generated(
            "8/8/8/8/8/2B5/8/8 w - - 0 1",
            &[
                Move::quiet(Square::C3, Square::D4),
                Move::quiet(Square::C3, Square::E5),
                Move::quiet(Square::C3, Square::F6),
                Move::quiet(Square::C3, Square::G7),
                Move::quiet(Square::C3, Square::H8),
                Move::quiet(Square::C3, Square::D2),
                Move::quiet(Square::C3, Square::E1),
                Move::quiet(Square::C3, Square::B2),
                Move::quiet(Square::C3, Square::A1),
                Move::quiet(Square::C3, Square::B4),
                Move::quiet(Square::C3, Square::A5),
            ],
        );
    }

    #[test]
    fn queen_in_the_center() {
        let pos = Position::from_fen("8/8/8/3Q4/8/8/8/8 w - - 0 1").unwrap();
        assert_eq!(27, pos.pseudo_legal_moves().len());
    }

    #[test]
    fn slider_stops_before_own_piece() {
        assert_moves_does_not_contain(
            "8/8/8/3p4/8/3R3P/8/8 w - - 0 1",
            &[
                Move::quiet(Square::D3, Square::H3),
                Move::capture(Square::D3, Square::H3),
                Move::quiet(Square::D3, Square::D6),
            ],
        );
    }
}

mod kings {
    use super::*;

    #[test]
    fn king_in_the_center() {
        assert_moves_generated(
            "8/8/8/8/4K3/8/8/8 w - - 0 1",
            &[
                Move::quiet(Square::E4, Square::D3),
                Move::quiet(Square::E4, Square::E3),
                Move::quiet(Square::E4, Square::F3),
                Move::quiet(Square::E4, Square::D4),
                Move::quiet(Square::E4, Square::F4),
                Move::quiet(Square::E4, Square::D5),
                Move::quiet(Square::E4, Square::E5),
                Move::quiet(Square::E4, Square::F5),
            ],
        );
    }

    #[test]
    fn kingside_castle_available() {
        assert_moves_contains(
            "8/8/8/8/8/8/8/4K2R w K - 0 1",
            &[Move::kingside_castle(Square::E1, Square::G1)],
        );
    }

    #[test]
    fn queenside_castle_available() {
        assert_moves_contains(
            "8/8/8/8/8/8/8/R3K3 w Q - 0 1",
            &[Move::queenside_castle(Square::E1, Square::C1)],
        );
    }

    #[test]
    fn black_castles_available() {
        assert_moves_contains(
            "r3k2r/8/8/8/8/8/8/8 b kq - 0 1",
            &[
                Move::kingside_castle(Square::E8, Square::G8),
                Move::queenside_castle(Square::E8, Square::C8),
            ],
        );
    }

    #[test]
    fn no_castle_without_right() {
        assert_moves_does_not_contain(
            "8/8/8/8/8/8/8/4K2R w - - 0 1",
            &[Move::kingside_castle(Square::E1, Square::G1)],
        );
    }

    #[test]
    fn no_castle_through_occupied_square() {
        assert_moves_does_not_contain(
            "8/8/8/8/8/8/8/4KB1R w K - 0 1",
            &[Move::kingside_castle(Square::E1, Square::G1)],
        );
    }

    #[test]
    fn no_queenside_castle_with_b1_occupied() {
        // the rook crosses b1, so it must be empty even though the king
        // never touches it.
        assert_moves_does_not_contain(
            "8/8/8/8/8/8/8/RN2K3 w Q - 0 1",
            &[Move::queenside_castle(Square::E1, Square::C1)],
        );
    }

    #[test]
    fn queenside_castle_with_b1_attacked() {
        // b1 may be attacked; only the king's path must be safe.
        assert_moves_contains(
            "1r6/8/8/8/8/8/8/R3K3 w Q - 0 1",
            &[Move::queenside_castle(Square::E1, Square::C1)],
        );
    }

    #[test]
    fn no_castle_through_attacked_square() {
        assert_moves_does_not_contain(
            "3r4/8/8/8/8/8/8/R3K3 w Q - 0 1",
            &[Move::queenside_castle(Square::E1, Square::C1)],
        );
    }

    #[test]
    fn no_castle_out_of_check() {
        assert_moves_does_not_contain(
            "4r3/8/8/8/8/8/8/4K2R w K - 0 1",
            &[Move::kingside_castle(Square::E1, Square::G1)],
        );
    }

    #[test]
    fn no_castle_without_home_rook() {
        // the castling field claims the right, but the rook is gone.
        assert_moves_does_not_contain(
            "8/8/8/8/8/8/8/4K3 w K - 0 1",
            &[Move::kingside_castle(Square::E1, Square::G1)],
        );
    }
}

mod legality {
    use super::*;

    #[test]
    fn twenty_legal_moves_from_the_start() {
        let pos = Position::from_start_position();
        assert_eq!(20, pos.pseudo_legal_moves().len());
        assert_eq!(20, pos.legal_moves().len());
    }

    #[test]
    fn legal_moves_never_leave_own_king_in_check() {
        let fens = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
            "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
            "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
        ];

        for fen in &fens {
            let pos = Position::from_fen(fen).unwrap();
            let us = pos.side_to_move();
            for &mov in pos.legal_moves().iter() {
                let next = pos.make_move(mov).unwrap();
                assert!(
                    !next.is_check(us),
                    "move {} from {} leaves the mover in check",
                    mov,
                    fen
                );
            }
        }
    }

    #[test]
    fn pinned_rook_moves_along_the_pin_only() {
        let pos = Position::from_fen("8/8/8/4r3/8/8/4R3/4K3 w - - 0 1").unwrap();
        let legal = pos.legal_moves();

        assert!(legal.contains(&Move::quiet(Square::E2, Square::E3)));
        assert!(legal.contains(&Move::quiet(Square::E2, Square::E4)));
        assert!(legal.contains(&Move::capture(Square::E2, Square::E5)));
        assert!(!legal.contains(&Move::quiet(Square::E2, Square::D2)));
        assert!(!legal.contains(&Move::quiet(Square::E2, Square::A2)));
    }

    #[test]
    fn moves_are_ordered_by_source_then_destination() {
        let pos = Position::from_start_position();
        let moves = pos.legal_moves();
        let mut sorted = moves.clone();
        sorted.sort_unstable();
        assert_eq!(&sorted[..], &moves[..]);

        // order is stable across calls.
        assert_eq!(&moves[..], &pos.legal_moves()[..]);
    }

    #[test]
    fn checkmate_has_no_legal_moves() {
        // fool's mate.
        let pos =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(pos.legal_moves().is_empty());
        assert!(pos.is_checkmate());
        assert!(!pos.is_stalemate());
    }

    #[test]
    fn stalemate_has_no_legal_moves_either() {
        let pos = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        assert!(pos.legal_moves().is_empty());
        assert!(pos.is_stalemate());
        assert!(!pos.is_checkmate());
    }
}
