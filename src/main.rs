#![deny(warnings)]

use clap::{Parser, Subcommand};
use mpc_helper::consts::LF;
use mpc_helper::trig::degrees_to_radians;

#[derive(Parser, Debug)]
#[command(name = "mpc_helper", version, about = "MPC vehicle model helpers")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the center of gravity to front axle length (meters)
    Lf,
    /// Convert angles from degrees to radians, one result per line
    DegToRad {
        #[arg(required = true, allow_negative_numbers = true)]
        degrees: Vec<f64>,
    },
}

fn run(command: &Command) -> Vec<f64> {
    match command {
        Command::Lf => vec![LF],
        Command::DegToRad { degrees } => {
            degrees.iter().map(|&x| degrees_to_radians(x)).collect()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    for value in run(&cli.command) {
        println!("{}", value);
    }
}
