#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use seabattle::{init_logging, Board, FireOutcome, Game, GameStatus};

/// Interactive single-player sink-the-fleet session.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Ship endpoints as `r1,c1,r2,c2`. Give one per ship, or none to play
    /// against the built-in demo fleet.
    #[arg(long = "ship", value_name = "R1,C1,R2,C2")]
    ships: Vec<String>,
}

/// A legal classic layout used when no ships are given on the command line.
#[cfg(feature = "std")]
const DEMO_FLEET: [((usize, usize), (usize, usize)); 10] = [
    ((0, 0), (0, 3)),
    ((2, 0), (2, 2)),
    ((2, 4), (2, 6)),
    ((4, 0), (4, 1)),
    ((4, 3), (4, 4)),
    ((4, 6), (4, 7)),
    ((6, 0), (6, 0)),
    ((6, 2), (6, 2)),
    ((6, 4), (6, 4)),
    ((6, 6), (6, 6)),
];

#[cfg(feature = "std")]
fn parse_ship(arg: &str) -> anyhow::Result<((usize, usize), (usize, usize))> {
    let parts: Vec<usize> = arg
        .split(',')
        .map(|p| {
            p.trim()
                .parse::<usize>()
                .with_context(|| format!("bad coordinate `{}` in `{}`", p, arg))
        })
        .collect::<anyhow::Result<_>>()?;
    anyhow::ensure!(parts.len() == 4, "expected r1,c1,r2,c2, got `{}`", arg);
    Ok(((parts[0], parts[1]), (parts[2], parts[3])))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let fleet: Vec<((usize, usize), (usize, usize))> = if cli.ships.is_empty() {
        DEMO_FLEET.to_vec()
    } else {
        cli.ships
            .iter()
            .map(|s| parse_ship(s))
            .collect::<anyhow::Result<_>>()?
    };
    let board = Board::new(&fleet).map_err(|e| anyhow::anyhow!(e))?;
    let mut game = Game::new(board);

    println!("{}", game.board());
    println!("Enter shots as `row col` (0-10). Ctrl-D quits.");

    let stdin = std::io::stdin();
    let mut line = String::new();
    loop {
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 2 {
            eprintln!("expected: row col");
            continue;
        }
        let (row, col) = match (fields[0].parse::<usize>(), fields[1].parse::<usize>()) {
            (Ok(r), Ok(c)) => (r, c),
            _ => {
                eprintln!("expected two integers");
                continue;
            }
        };

        match game.fire(row, col) {
            FireOutcome::Miss => println!("Miss!"),
            FireOutcome::Hit => println!("Hit!"),
            FireOutcome::Sunk => println!("Sunk!"),
        }
        println!("{}", game.board());

        if game.status() == GameStatus::FleetSunk {
            println!("All ships sunk in {} shots.", game.shots());
            break;
        }
    }
    Ok(())
}
