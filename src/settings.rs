use std::path::Path;

use a11ylens_lib::{A11yError, Config};

/// Load the optional config file, reporting the path on failure.
pub fn load_config(path: Option<&Path>, verbose: bool) -> Result<Config, A11yError> {
    if verbose {
        if let Some(p) = path {
            eprintln!("Loading config from {}", p.display());
        }
    }
    Config::load(path)
}

/// Merge the CLI noise threshold with the config value; CLI wins when given.
pub fn resolve_noise_threshold(
    cli_value: Option<f64>,
    config: &Config,
) -> Result<f64, A11yError> {
    let resolved = cli_value.unwrap_or(config.noise_threshold);
    if !(0.0..1.0).contains(&resolved) {
        return Err(A11yError::config(format!(
            "noise threshold must be in [0, 1), got {resolved}"
        )));
    }
    Ok(resolved)
}
