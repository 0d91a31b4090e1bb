// Copyright 2017-2019 Sean Gillespie.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[macro_use]
extern crate clap;

use std::io::{self, BufRead, Write};
use std::process;
use std::time::Instant;

use caissa::{perft, Color, Position, Square, FILES, RANKS};
use clap::{App, Arg, ArgMatches, SubCommand};
use log::{debug, info};

// The same palette the classic terminal chess boards use: white pieces
// render black-on-white, black pieces white-on-black.
const WHITE_PIECE: &str = "\x1b[30;47m";
const BLACK_PIECE: &str = "\x1b[97;40m";
const RESET_COLOR: &str = "\x1b[0m";

fn main() {
    env_logger::init();
    let matches = App::new(crate_name!())
        .version(crate_version!())
        .author(crate_authors!())
        .about("A chess position and move engine with a terminal front-end")
        .arg(
            Arg::with_name("FEN")
                .help("FEN string for the starting board position")
                .long("--fen")
                .value_name("FEN")
                .takes_value(true),
        )
        .subcommand(
            SubCommand::with_name("perft")
                .about("PERFT analysis of board positions")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::with_name("depth")
                        .help("Depth of move tree to search")
                        .value_name("DEPTH")
                        .short("-d")
                        .long("--depth")
                        .takes_value(true)
                        .default_value("4"),
                ),
        )
        .subcommand(
            SubCommand::with_name("show")
                .about("Render a board position")
                .arg(
                    Arg::with_name("FEN")
                        .help("FEN string for a board position")
                        .required(true)
                        .index(1),
                ),
        )
        .get_matches();

    if let Some(matches) = matches.subcommand_matches("perft") {
        run_perft(matches);
    }

    if let Some(matches) = matches.subcommand_matches("show") {
        run_show(matches);
    }

    run_play(&matches);
}

fn position_from_args(matches: &ArgMatches) -> Position {
    match matches.value_of("FEN") {
        Some(fen) => match Position::from_fen(fen) {
            Ok(pos) => pos,
            Err(e) => {
                eprintln!("invalid fen: {}", e);
                process::exit(1);
            }
        },
        None => Position::from_start_position(),
    }
}

fn run_perft(matches: &ArgMatches) -> ! {
    let fen = matches.value_of("FEN").unwrap();
    let depth = value_t_or_exit!(matches, "depth", u32);
    let pos = match Position::from_fen(fen) {
        Ok(pos) => pos,
        Err(e) => {
            eprintln!("invalid fen: {}", e);
            process::exit(1);
        }
    };

    println!("fen:   {}", fen);
    println!("depth: {}", depth);
    println!();
    print_board(&pos);
    println!();
    for i in 1..depth + 1 {
        let start = Instant::now();
        let results = perft(&pos, i);
        let duration = start.elapsed();
        let ms = duration.as_secs() * 1000 + u64::from(duration.subsec_millis());
        println!("perft({}) = {} ({} ms)", i, results, ms);
    }

    process::exit(0);
}

fn run_show(matches: &ArgMatches) -> ! {
    let pos = position_from_args(matches);
    print_board(&pos);
    println!("fen:          {}", pos.as_fen());
    println!("side to move: {}", color_name(pos.side_to_move()));
    if pos.is_checkmate() {
        println!("{} is checkmated", color_name(pos.side_to_move()));
    } else if pos.is_stalemate() {
        println!("stalemate");
    } else if pos.is_check(pos.side_to_move()) {
        println!("{} is in check", color_name(pos.side_to_move()));
    }

    process::exit(0);
}

fn run_play(matches: &ArgMatches) -> ! {
    let mut pos = position_from_args(matches);
    info!("starting game from {}", pos.as_fen());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        println!();
        print_board(&pos);

        if pos.is_checkmate() {
            println!(
                "checkmate - {} wins",
                color_name(pos.side_to_move().toggle())
            );
            break;
        }
        if pos.is_stalemate() {
            println!("stalemate - draw");
            break;
        }
        if pos.halfmove_clock() >= 100 {
            println!("draw by the fifty-move rule");
            break;
        }
        if pos.is_check(pos.side_to_move()) {
            println!("{} is in check", color_name(pos.side_to_move()));
        }

        print!("{}> ", color_name(pos.side_to_move()));
        io::stdout().flush().expect("stdout flush failed");

        let line = match lines.next() {
            Some(line) => line.expect("reading stdin failed"),
            None => break,
        };

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "fen" => println!("{}", pos.as_fen()),
            "moves" => {
                let legal = pos.legal_moves();
                let rendered: Vec<_> = legal.iter().map(|mov| mov.to_string()).collect();
                println!("{}", rendered.join(" "));
            }
            input => match pos.move_from_coord(input) {
                Ok(mov) => match pos.make_move(mov) {
                    Ok(next) => {
                        debug!("applied {}, now {}", mov, next.as_fen());
                        pos = next;
                    }
                    Err(e) => println!("{}", e),
                },
                Err(e) => println!("{}", e),
            },
        }
    }

    process::exit(0);
}

/// Renders the position as a bordered grid with rank digits down the left
/// side, file letters underneath, and ANSI-colored cells for the pieces.
fn print_board(pos: &Position) {
    let border = "-".repeat(8 * 4 + 5);
    println!("{}", border);
    for &rank in RANKS.iter().rev() {
        print!("| {} |", rank);
        for &file in &FILES {
            match pos.piece_at(Square::of(rank, file)) {
                Some(piece) if piece.color == Color::White => {
                    print!("{} {} {}|", WHITE_PIECE, piece, RESET_COLOR)
                }
                Some(piece) => print!("{} {} {}|", BLACK_PIECE, piece, RESET_COLOR),
                None => print!("   |"),
            }
        }
        println!();
        println!("{}", border);
    }

    print!("    ");
    for &file in &FILES {
        print!("| {} ", file);
    }
    println!("|");
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "white",
        Color::Black => "black",
    }
}
