use std::error::Error;

use clap::Args;
use hamgen_code::{hamming_distance, Representation};

#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// First value.
    pub left: String,
    /// Second value.
    pub right: String,
    /// Width both values are interpreted at.
    #[arg(long)]
    pub width: u32,
    /// Representation of both values.
    #[arg(long, default_value = "hexadecimal")]
    pub repr: Representation,
}

pub fn run(args: &DistanceArgs) -> Result<(), Box<dyn Error>> {
    let left = args.repr.parse_value(&args.left, args.width)?;
    let right = args.repr.parse_value(&args.right, args.width)?;
    println!("{}", hamming_distance(&left, &right)?);
    Ok(())
}
