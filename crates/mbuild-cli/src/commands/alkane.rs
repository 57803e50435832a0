use crate::cli::AlkaneArgs;
use crate::config::PartialBuildConfig;
use crate::error::Result;
use mbuild::workflows::chain::build_alkane;
use tracing::info;

pub fn run(args: AlkaneArgs) -> Result<()> {
    let partial_config = PartialBuildConfig::load(&args.build)?;
    info!("Merging configuration from file and CLI arguments...");
    let config = partial_config.merge_with_cli(&args.build)?;

    info!("Assembling alkane with {} carbons...", config.length);
    let alkane = build_alkane(config.length)?;

    super::write_structure(&alkane, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::BuildArgs;
    use crate::error::CliError;
    use mbuild::workflows::chain::ChainError;

    fn args(length: usize, output: std::path::PathBuf, include_ports: bool) -> AlkaneArgs {
        AlkaneArgs {
            build: BuildArgs {
                length: Some(length),
                output: Some(output),
                config: None,
                include_ports,
            },
        }
    }

    #[test]
    fn writes_alkane_as_xyz() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("butane.xyz");

        run(args(4, output.clone(), false)).unwrap();

        let content = std::fs::read_to_string(output).unwrap();
        let mut lines = content.lines();
        assert_eq!(lines.next(), Some("13"));
        assert_eq!(lines.next(), Some("Alkane_4"));
        assert_eq!(content.lines().filter(|l| l.starts_with("C\t")).count(), 4);
    }

    #[test]
    fn include_ports_adds_ghost_atoms() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("propane.xyz");

        run(args(3, output.clone(), true)).unwrap();

        let content = std::fs::read_to_string(output).unwrap();
        // Three CH2/CH3 units: five ports with four ghosts each.
        assert_eq!(content.lines().filter(|l| l.starts_with("G\t")).count(), 20);
    }

    #[test]
    fn too_short_chain_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let result = run(args(1, dir.path().join("x.xyz"), false));
        assert!(matches!(result, Err(CliError::Chain(ChainError::TooShort(1)))));
    }
}
