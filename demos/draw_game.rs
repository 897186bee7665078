//! Plays a batch of five card draw rounds between a weighted-table
//! strategy and random baselines, then prints the win tally.
//!
//! Run with `cargo run --example draw_game`.
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

use draw_poker::draw::{RandomDiscard, WeightedDiscard};
use draw_poker::game::{DrawGame, Player};

const ROUNDS: usize = 1000;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = SmallRng::seed_from_u64(2024);
    let table = WeightedDiscard::new_random(&mut rng);

    let mut wins: BTreeMap<String, usize> = BTreeMap::new();
    let mut last = None;

    for _ in 0..ROUNDS {
        let players = vec![
            Player::new("weighted", Box::new(table.clone())),
            Player::new("random-1", Box::new(RandomDiscard)),
            Player::new("random-2", Box::new(RandomDiscard)),
        ];
        let mut game = DrawGame::new(players)?;
        let showdown = game.run(&mut rng)?;
        for winner in &showdown.winners {
            *wins.entry(winner.clone()).or_default() += 1;
        }
        last = Some(showdown);
    }

    println!("wins over {ROUNDS} rounds (splits count for every winner):");
    for (name, count) in &wins {
        println!("  {name:<10} {count}");
    }

    if let Some(showdown) = last {
        println!("\nlast showdown ({}):", showdown.rank);
        for (name, hand) in &showdown.reveals {
            println!("  {name:<10} {hand}");
        }
    }

    Ok(())
}
