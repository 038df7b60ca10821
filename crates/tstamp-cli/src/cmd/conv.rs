use clap::Args;
use tstamp_core::format;

#[derive(Args)]
pub struct ConvArgs {
    /// Timestamp to convert, in the input format
    #[arg(allow_hyphen_values = true)]
    pub timestamp: String,
}

pub fn run(input: &str, output: &str, args: ConvArgs) -> anyhow::Result<()> {
    // Resolve both formats before touching the argument.
    let from = format::lookup(input)?;
    let to = format::lookup(output)?;

    let t = (from.parse)(&args.timestamp)?;
    println!("{}", (to.render)(&t));
    Ok(())
}
