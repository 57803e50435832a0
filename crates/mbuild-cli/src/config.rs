use crate::cli::BuildArgs;
use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialChainConfig {
    length: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialOutputConfig {
    path: Option<PathBuf>,
    #[serde(rename = "include-ports")]
    include_ports: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialBuildConfig {
    chain: Option<PartialChainConfig>,
    output: Option<PartialOutputConfig>,
}

/// Fully resolved settings for a build command.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildConfig {
    pub length: usize,
    pub output: PathBuf,
    pub include_ports: bool,
}

impl PartialBuildConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Loads the file named by `--config`, or starts empty when none is given.
    pub fn load(args: &BuildArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    pub fn merge_with_cli(self, args: &BuildArgs) -> Result<BuildConfig> {
        let chain_config = self.chain.unwrap_or_default();
        let output_config = self.output.unwrap_or_default();

        let length = args.length.or(chain_config.length).ok_or_else(|| {
            CliError::Config(
                "A value for 'chain.length' is required either in the config file or via --length."
                    .to_string(),
            )
        })?;
        let output = args
            .output
            .clone()
            .or(output_config.path)
            .ok_or_else(|| {
                CliError::Config(
                    "A value for 'output.path' is required either in the config file or via --output."
                        .to_string(),
                )
            })?;
        let include_ports = args.include_ports || output_config.include_ports.unwrap_or(false);

        Ok(BuildConfig {
            length,
            output,
            include_ports,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;
    use tempfile::{TempDir, tempdir};

    fn write_config_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let file_path = dir.path().join(name);
        fs::write(&file_path, content).unwrap();
        file_path
    }

    fn parse_alkane_args(extra: &[&str]) -> BuildArgs {
        let mut args = vec!["mbuild", "alkane"];
        args.extend_from_slice(extra);
        match Cli::parse_from(args).command {
            Commands::Alkane(alkane) => alkane.build,
            _ => panic!("Expected 'alkane' subcommand"),
        }
    }

    #[test]
    fn test_load_from_file_and_merge_with_defaults() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "config.toml",
            r#"
        [chain]
        length = 10

        [output]
        path = "decane.xyz"
        "#,
        );
        let config_arg = config_path.to_str().unwrap();
        let args = parse_alkane_args(&["-c", config_arg]);

        let config = PartialBuildConfig::load(&args)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(
            config,
            BuildConfig {
                length: 10,
                output: PathBuf::from("decane.xyz"),
                include_ports: false,
            }
        );
    }

    #[test]
    fn test_cli_args_override_file_values() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "config.toml",
            r#"
        [chain]
        length = 10

        [output]
        path = "decane.xyz"
        include-ports = false
        "#,
        );
        let config_arg = config_path.to_str().unwrap();
        let args = parse_alkane_args(&[
            "-c",
            config_arg,
            "-n",
            "4",
            "-o",
            "butane.xyz",
            "--include-ports",
        ]);

        let config = PartialBuildConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert_eq!(config.length, 4);
        assert_eq!(config.output, PathBuf::from("butane.xyz"));
        assert!(config.include_ports);
    }

    #[test]
    fn test_file_can_enable_ports() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(
            &dir,
            "config.toml",
            "[output]\ninclude-ports = true\n",
        );
        let args = parse_alkane_args(&["-n", "3", "-o", "propane.xyz"]);

        let config = PartialBuildConfig::from_file(&config_path)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();

        assert!(config.include_ports);
    }

    #[test]
    fn test_cli_only_without_config_file() {
        let args = parse_alkane_args(&["-n", "3", "-o", "propane.xyz"]);
        let config = PartialBuildConfig::load(&args)
            .unwrap()
            .merge_with_cli(&args)
            .unwrap();
        assert_eq!(config.length, 3);
        assert!(!config.include_ports);
    }

    #[test]
    fn test_missing_required_values_are_config_errors() {
        let args = parse_alkane_args(&["-o", "out.xyz"]);
        let result = PartialBuildConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("chain.length")));

        let args = parse_alkane_args(&["-n", "3"]);
        let result = PartialBuildConfig::default().merge_with_cli(&args);
        assert!(matches!(result, Err(CliError::Config(msg)) if msg.contains("output.path")));
    }

    #[test]
    fn test_unknown_keys_are_parse_errors() {
        let dir = tempdir().unwrap();
        let config_path = write_config_file(&dir, "bad.toml", "[chain]\nlenght = 3\n");
        let result = PartialBuildConfig::from_file(&config_path);
        assert!(matches!(result, Err(CliError::FileParsing { .. })));
    }

    #[test]
    fn test_missing_config_file_is_io_error() {
        let result = PartialBuildConfig::from_file(Path::new("no_such_config.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
