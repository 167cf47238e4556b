//! Simulates a cribbage game between two players who always keep the best
//! scoring four cards, printing every show.
//!
//! Run with `cargo run --example simulate -- [seed]`. Set `RUST_LOG=debug` to
//! see the engine's own log output.

#![allow(clippy::missing_docs_in_private_items)]

use std::time::{SystemTime, UNIX_EPOCH};

use cribbage::{Game, GameOptions, PlayerShow, RoundResult};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    println!("Cribbage simulation (seed {seed})");

    let options = GameOptions::default();
    let mut game = Game::new(options, seed);

    loop {
        match game.play_round() {
            Ok(result) => {
                print_round(&result);
                if let Some(winner) = result.winner {
                    println!(
                        "\n{winner:?} wins {} to {}.",
                        game.score(winner),
                        game.score(winner.other())
                    );
                    break;
                }
            }
            Err(err) => {
                println!("Round error: {err}");
                break;
            }
        }
    }
}

fn print_round(result: &RoundResult) {
    println!(
        "\nRound {} ({:?} deals), starter {}",
        result.round, result.dealer, result.starter
    );
    print_show("hand", &result.pone, result);
    print_show("hand", &result.dealer_hand, result);
    print_show("crib", &result.crib, result);
    println!("Score: One {} / Two {}", result.scores[0], result.scores[1]);
}

fn print_show(label: &str, show: &PlayerShow, result: &RoundResult) {
    let cards: Vec<String> = show.cards.iter().map(ToString::to_string).collect();
    let note = if show.credited { "" } else { " (not counted)" };
    println!(
        "  {:?} {label}: {} {} -> {}{note}",
        show.player,
        cards.join(" "),
        result.starter,
        show.score
    );
}
