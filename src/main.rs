use clap::Parser;
use std::path::PathBuf;

mod error;
mod grid;
mod gridfile;
mod reduce;
#[cfg(test)]
mod reference;
mod synth;
mod validate;

use error::GridError;
use grid::Precision;

type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Parser)]
#[command(
    name = "gridsub",
    version,
    about = "Subsample dense 3D Cartesian grids by non-overlapping box averaging"
)]
struct Cli {
    #[arg(
        short = 'f',
        long,
        value_name = "PATH",
        required_unless_present = "generate",
        conflicts_with = "generate",
        help = "Path to the input grid file"
    )]
    input: Option<PathBuf>,
    #[arg(short = 'o', long, value_name = "PATH", help = "Path to the output grid file")]
    output: PathBuf,
    #[arg(
        short = 'p',
        long,
        value_name = "TAG",
        help = "Element precision of the input grid: int32, float32, or float64"
    )]
    precision: String,
    #[arg(short = 's', long, value_name = "N", help = "Cells per edge of the input grid")]
    gridsize_in: usize,
    #[arg(short = 'd', long, value_name = "M", help = "Cells per edge of the output grid")]
    gridsize_out: usize,
    #[arg(
        long,
        help = "Fill the input grid with uniform random values instead of reading a file"
    )]
    generate: bool,
    #[arg(
        long,
        value_name = "SEED",
        requires = "generate",
        help = "Seed for --generate (random if omitted)"
    )]
    seed: Option<u64>,
}

fn print_banner(cli: &Cli, precision: Precision) {
    println!();
    println!("======================================");
    match &cli.input {
        Some(path) => println!("Input grid: {}", path.display()),
        None => match cli.seed {
            Some(seed) => println!("Input grid: generated (seed {seed})"),
            None => println!("Input grid: generated (random seed)"),
        },
    }
    println!("Output grid: {}", cli.output.display());
    println!("Input gridsize: {}", cli.gridsize_in);
    println!("Output gridsize: {}", cli.gridsize_out);
    println!("Precision: {}", precision.name());
    println!("======================================");
    println!();
}

fn run(cli: &Cli) -> AppResult<()> {
    let precision = Precision::parse(&cli.precision).ok_or(GridError::InvalidPrecision {
        tag: cli.precision.clone(),
    })?;

    // Reject a bad gridsize pair before touching the (possibly huge) input.
    validate::check_ratio(cli.gridsize_in, cli.gridsize_out)?;

    print_banner(cli, precision);

    let input_grid = match &cli.input {
        Some(path) => gridfile::read_grid(path, cli.gridsize_in, precision)?,
        None => synth::random_grid(cli.gridsize_in, precision, cli.seed)?,
    };

    println!("Input grid ready, convolving with the block footprint.");
    let output_grid = reduce::subsample_grid(&input_grid, cli.gridsize_out)?;

    println!("Convolution done, cells sampled and normalized.");
    gridfile::write_grid(&cli.output, &output_grid)?;
    println!("Subsampled grid saved to {}", cli.output.display());

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        eprintln!("Error: {err}");
        eprintln!("Run with --help for usage.");
        std::process::exit(1);
    }
}
