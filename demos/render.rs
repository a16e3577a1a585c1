//! Terminal consumer of the engine's step observer: watches a maze being
//! generated and draws every snapshot with box-drawing characters.
//!
//! Usage: `cargo run --example render -- [algorithm] [width] [height] [seed]`

use std::{env, time::Duration};

use mazegen::{CellWall, Dims, Grid, MazeFactory, Random};
use rand::{thread_rng, Rng, SeedableRng};

fn main() {
    let factory = MazeFactory::new();
    let args: Vec<String> = env::args().skip(1).collect();

    let mut rng = Random::seed_from_u64(thread_rng().gen());
    let algorithm = args
        .first()
        .map(String::as_str)
        .unwrap_or_else(|| factory.random_id(&mut rng))
        .to_string();

    if factory.describe(&algorithm).is_none() {
        eprintln!("unknown algorithm `{algorithm}`, pick one of:");
        for id in factory.algorithm_ids() {
            let info = factory.describe(id).unwrap();
            eprintln!("  {id:<22} {} [{}]", info.display_name, info.complexity);
        }
        std::process::exit(1);
    }

    let width: i32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(16);
    let height: i32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(10);
    let seed: u64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| thread_rng().gen());

    let info = factory.describe(&algorithm).unwrap();
    println!("{} ({}), {width}x{height}, seed {seed}", info.display_name, info.complexity);

    let job = factory
        .create(&algorithm, Dims(width, height), 2)
        .expect("algorithm was checked above")
        .with_seed(seed)
        .with_delay(Duration::from_millis(8));

    print!("\x1b[2J");
    let maze = job
        .generate_observed(|snapshot| {
            print!("\x1b[H");
            print!("{}", draw(snapshot));
        })
        .expect("only cancellation can fail here");

    print!("\x1b[H");
    println!("{}", draw(&maze));
}

fn draw(grid: &Grid) -> String {
    let Dims(width, height) = grid.size();
    let mut out = String::new();

    for y in 0..height {
        for x in 0..width {
            let cell = grid.cell(Dims(x, y)).unwrap();
            out.push('+');
            out.push_str(if cell.has_wall(CellWall::Top) { "--" } else { "  " });
        }
        out.push_str("+\n");

        for x in 0..width {
            let cell = grid.cell(Dims(x, y)).unwrap();
            out.push(if cell.has_wall(CellWall::Left) { '|' } else { ' ' });
            out.push_str(match (cell.is_highlighted(), cell.is_visited()) {
                (true, _) => "\x1b[43m  \x1b[0m",
                (false, true) => "\x1b[46m  \x1b[0m",
                (false, false) => "  ",
            });
        }
        out.push_str("|\n");
    }

    for _ in 0..width {
        out.push_str("+--");
    }
    out.push_str("+\n");

    out
}
