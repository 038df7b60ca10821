use clap::Args;
use tstamp_core::format;

#[derive(Args)]
pub struct PbArgs {
    /// Timestamp to decompose, in the input format
    #[arg(allow_hyphen_values = true)]
    pub timestamp: String,
}

/// Always writes the component report, whatever -o says.
pub fn run(input: &str, args: PbArgs) -> anyhow::Result<()> {
    let fmt = format::lookup(input)?;
    let t = (fmt.parse)(&args.timestamp)?;
    println!("{}", format::pb::render(&t));
    Ok(())
}
