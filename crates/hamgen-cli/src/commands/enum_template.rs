use std::error::Error;

use clap::Args;
use hamgen_code::{generate_codebook, EnumTemplate};
use hamgen_core::RngHandle;

use super::params::ParamArgs;

#[derive(Args, Debug)]
pub struct EnumArgs {
    #[command(flatten)]
    pub params: ParamArgs,
    /// Enum type name.
    #[arg(long)]
    pub name: Option<String>,
    /// Comma separated member names; their number sets the codeword count.
    #[arg(long, value_delimiter = ',')]
    pub members: Vec<String>,
}

pub fn run(args: &EnumArgs) -> Result<(), Box<dyn Error>> {
    let mut params = args.params.resolve()?;
    if !args.members.is_empty() {
        params.size = args.members.len();
    }

    let template = if args.members.is_empty() && args.name.is_none() {
        EnumTemplate::with_placeholders(params.size)
    } else {
        let members = if args.members.is_empty() {
            EnumTemplate::with_placeholders(params.size).member_names().to_vec()
        } else {
            args.members.iter().map(|m| m.trim().to_string()).collect()
        };
        let name = args.name.clone().unwrap_or_else(|| "ENUM_NAME".to_string());
        EnumTemplate::new(name, members)?
    };

    let mut rng = RngHandle::from_optional_seed(params.seed);
    let result = generate_codebook(&params, &mut rng);
    if result.is_empty() {
        return Err(format!(
            "no codebook for {}-bit values with distance {}",
            params.bit_width, params.hamming_distance
        )
        .into());
    }
    println!("{}", template.render(&result));
    Ok(())
}
