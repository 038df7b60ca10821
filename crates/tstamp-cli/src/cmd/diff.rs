use clap::Args;
use tstamp_core::{diff::diff_millis, format};

#[derive(Args)]
pub struct DiffArgs {
    /// First timestamp (t1), in the input format
    #[arg(allow_hyphen_values = true)]
    pub first: String,

    /// Second timestamp (t2), in the input format
    #[arg(allow_hyphen_values = true)]
    pub second: String,
}

pub fn run(input: &str, args: DiffArgs) -> anyhow::Result<()> {
    let fmt = format::lookup(input)?;
    let t1 = (fmt.parse)(&args.first)?;
    let t2 = (fmt.parse)(&args.second)?;
    println!("{}", diff_millis(&t1, &t2));
    Ok(())
}
