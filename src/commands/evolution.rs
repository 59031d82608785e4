use std::path::PathBuf;
use std::process::ExitCode;

use a11ylens_lib::{
    calculate_evolution_trends, evolution_points, generate_evolution_insights, load_series,
    A11yError, AuditOutput, AuditRecord,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::{load_config, resolve_noise_threshold};

/// Run the evolution command.
pub fn run_evolution(
    config_path: Option<PathBuf>,
    verbose: bool,
    audits_path: PathBuf,
    noise_threshold: Option<f64>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref(), verbose) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let noise = match resolve_noise_threshold(noise_threshold, &config) {
        Ok(n) => n,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let records = match load_series(&audits_path) {
        Ok(r) => r,
        Err(err) => return render_error(err, format, output.clone()),
    };
    if let Err(err) = check_chronological(&records) {
        return render_error(err, format, output.clone());
    }
    if verbose {
        eprintln!("Loaded series of {} audit(s)", records.len());
    }

    let pairs: Vec<_> = records
        .into_iter()
        .map(|r| (r.audit, r.violations))
        .collect();
    let points = evolution_points(&pairs, &config.weights);
    let trends = calculate_evolution_trends(&points, noise);
    let insights = generate_evolution_insights(&points, &trends);
    let body = AuditOutput::evolution(points, trends, insights);

    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(A11yError::Unknown(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}

/// The series contract is oldest first; reject out-of-order input instead of
/// silently reordering it.
fn check_chronological(records: &[AuditRecord]) -> Result<(), A11yError> {
    for pair in records.windows(2) {
        let earlier = pair[0].audit.completed_at.unwrap_or(pair[0].audit.created_at);
        let later = pair[1].audit.completed_at.unwrap_or(pair[1].audit.created_at);
        if later < earlier {
            return Err(A11yError::input(format!(
                "audit series is not chronological: {} precedes {}",
                pair[1].audit.id, pair[0].audit.id
            )));
        }
    }
    Ok(())
}
