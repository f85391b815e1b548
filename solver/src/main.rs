use anyhow::{Context, Result};
use clap::Parser;
use knights_tour::shape::Side;
use knights_tour::{BoardSize, Location, Solver, Strategy};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search for a knight's tour on a rectangular board")]
struct Cli {
    /// Board size as ROWSxCOLS, e.g. 5x5
    #[arg(long)]
    size: BoardSize,

    /// dumb (exhaustive backtracking), stubborn (tour must end near the border) or smart (Warnsdorff's rule)
    #[arg(long, default_value_t = Strategy::Exhaustive)]
    strategy: Strategy,

    /// Starting square as ROW,COL
    #[arg(long, default_value = "0,0")]
    origin: Location,

    /// Edge a stubborn tour must end next to
    #[arg(long, default_value_t = Side::Down)]
    border: Side,

    /// Print the board and the number of moves and undos once the search ends
    #[arg(short, long)]
    verbose: bool,

    /// Log every tour the stubborn strategy rejects
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    let mut solver = Solver::from(cli.size);
    solver
        .origin(cli.origin)
        .context("invalid starting square")?
        .border(cli.border)
        .debug(cli.debug);

    info!("searching {} from {} with the {} strategy", cli.size, cli.origin, cli.strategy);
    let board = solver
        .solve(cli.strategy)
        .with_context(|| format!("no knight's tour on a {} board from {}", cli.size, cli.origin))?;

    println!("game over you visited {}", board.visits());
    if cli.verbose {
        print!("{board}");
        println!("operations: {}", board.operations());
    }

    Ok(())
}
