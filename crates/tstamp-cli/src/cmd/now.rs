use tstamp_core::{clock, format};

pub fn run(output: &str) -> anyhow::Result<()> {
    let out = format::lookup(output)?;
    println!("{}", (out.render)(&clock::now()));
    Ok(())
}
