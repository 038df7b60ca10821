// crates/tstamp-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "tstamp")]
#[command(about = "Timestamp toolbox (now/diff/conv/pb)", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Input format: rfc3339, db, pb or ms
    #[arg(short = 'i', long = "input", global = true, default_value = "rfc3339")]
    pub input: String,

    /// Output format: rfc3339, db, pb or ms
    #[arg(short = 'o', long = "output", global = true, default_value = "rfc3339")]
    pub output: String,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the current time in the output format
    Now,

    /// Print the millisecond difference t2 - t1 between two timestamps
    Diff(cmd::diff::DiffArgs),

    /// Convert a timestamp from the input format to the output format
    Conv(cmd::conv::ConvArgs),

    /// Break a timestamp into protobuf Timestamp components
    Pb(cmd::pb::PbArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Now => cmd::now::run(&cli.output),
        Commands::Diff(args) => cmd::diff::run(&cli.input, args),
        Commands::Conv(args) => cmd::conv::run(&cli.input, &cli.output, args),
        Commands::Pb(args) => cmd::pb::run(&cli.input, args),
    }
}
