use crate::cli::Cli;
use crate::error::Result;
use latlay::engine::config::LayoutConfig;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Resolves the effective configuration: the TOML file if one was given,
/// with single-field command-line overrides applied on top.
pub fn load(cli: &Cli) -> Result<LayoutConfig> {
    let mut config = match &cli.config {
        Some(path) => read_file(path)?,
        None => LayoutConfig::default(),
    };

    if let Some(max_iterations) = cli.max_iterations {
        debug!(max_iterations, "Overriding minimizer iteration budget");
        config.minimizer.max_iterations = max_iterations;
    }
    if let Some(tolerance) = cli.tolerance {
        debug!(tolerance, "Overriding minimizer tolerance");
        config.minimizer.tolerance = tolerance;
    }

    Ok(config)
}

fn read_file(path: &Path) -> Result<LayoutConfig> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn cli_with(args: &[&str]) -> Cli {
        let mut full = vec!["latlay", "diagram.json"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults_apply_without_a_config_file() {
        let config = load(&cli_with(&[])).unwrap();
        assert_eq!(config, LayoutConfig::default());
    }

    #[test]
    fn toml_file_settings_are_honored() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[weights]\nrepulsive = 10.0\n\n[minimizer]\nmax_iterations = 42"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let config = load(&cli_with(&["--config", &path])).unwrap();
        assert_eq!(config.weights.repulsive, 10.0);
        assert_eq!(config.weights.attractive, 0.005);
        assert_eq!(config.minimizer.max_iterations, 42);
    }

    #[test]
    fn command_line_overrides_win_over_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[minimizer]\nmax_iterations = 42").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        let config = load(&cli_with(&[
            "--config",
            &path,
            "--max-iterations",
            "7",
            "--tolerance",
            "0.5",
        ]))
        .unwrap();
        assert_eq!(config.minimizer.max_iterations, 7);
        assert_eq!(config.minimizer.tolerance, 0.5);
    }

    #[test]
    fn unknown_config_keys_are_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[weights]\ngravitationnal = 1.0").unwrap();
        let path = file.path().to_str().unwrap().to_owned();

        assert!(load(&cli_with(&["--config", &path])).is_err());
    }

    #[test]
    fn missing_config_file_is_an_io_error() {
        let result = load(&cli_with(&["--config", "/nonexistent/latlay.toml"]));
        assert!(matches!(result, Err(crate::error::CliError::Io(_))));
    }
}
