use crate::cli::ChainArgs;
use crate::config::PartialBuildConfig;
use crate::error::{CliError, Result};
use mbuild::core::io::template::load_template;
use mbuild::core::models::compound::Compound;
use mbuild::workflows::chain::{ChainSpec, build_chain};
use std::path::Path;
use tracing::{debug, info};

fn load_block(path: &Path) -> Result<Compound> {
    debug!("Loading building block from {:?}", path);
    let template = load_template(path)?;
    Ok(template.build()?)
}

pub fn run(args: ChainArgs) -> Result<()> {
    if args.entry_port == args.exit_port {
        return Err(CliError::Argument(format!(
            "Entry and exit ports must differ, both are '{}'.",
            args.entry_port
        )));
    }

    let partial_config = PartialBuildConfig::load(&args.build)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args.build)?;

    let body = load_block(&args.body)?;
    let tail = match &args.tail {
        Some(path) => load_block(path)?,
        None => body.clone(),
    };

    let mut spec = ChainSpec::new(body, tail, config.length)
        .ports(&args.entry_port, &args.exit_port);
    if let Some(path) = &args.head {
        spec = spec.head(load_block(path)?);
    }

    info!("Assembling chain of {} units...", config.length);
    let chain = build_chain(&spec)?;

    super::write_structure(&chain, &config)
}
