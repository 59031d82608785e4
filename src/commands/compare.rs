use std::path::PathBuf;
use std::process::ExitCode;

use a11ylens_lib::{
    calculate_comparison, generate_comparison_insights, generate_first_audit_insight, load_audit,
    load_violations, severity_pattern_summary, A11yError, AuditOutput,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

/// Run the compare command.
#[allow(clippy::too_many_arguments)]
pub fn run_compare(
    config_path: Option<PathBuf>,
    verbose: bool,
    current_audit: PathBuf,
    current_violations: PathBuf,
    previous_audit: Option<PathBuf>,
    previous_violations: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    // The previous audit flags come as a pair or not at all.
    if previous_audit.is_some() != previous_violations.is_some() {
        return render_error(
            A11yError::input(
                "--previous-audit and --previous-violations must be given together",
            ),
            format,
            output,
        );
    }

    let config = match load_config(config_path.as_deref(), verbose) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let current = match load_audit(&current_audit) {
        Ok(a) => a,
        Err(err) => return render_error(err, format, output.clone()),
    };
    let current_v = match load_violations(&current_violations) {
        Ok(v) => v,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let previous = match (previous_audit, previous_violations) {
        (Some(audit_path), Some(violations_path)) => {
            let audit = match load_audit(&audit_path) {
                Ok(a) => a,
                Err(err) => return render_error(err, format, output.clone()),
            };
            let violations = match load_violations(&violations_path) {
                Ok(v) => v,
                Err(err) => return render_error(err, format, output.clone()),
            };
            Some((audit, violations))
        }
        _ => None,
    };

    if verbose {
        eprintln!(
            "Comparing audit {} against {}",
            current.id,
            previous
                .as_ref()
                .map(|(a, _)| a.id.as_str())
                .unwrap_or("no previous audit")
        );
    }

    let comparison = calculate_comparison(
        &current,
        &current_v,
        previous.as_ref().map(|(a, v)| (a, v.as_slice())),
        &config.weights,
    );
    // A first audit gets the onboarding insight, not a delta reading.
    let insights = if previous.is_none() {
        let summary = current
            .severity_summary
            .unwrap_or_else(|| severity_pattern_summary(&current_v));
        generate_first_audit_insight(&summary)
    } else {
        generate_comparison_insights(&comparison)
    };
    let body = AuditOutput::compare(comparison, insights);

    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(A11yError::Unknown(err.to_string()), format, output);
    }
    ExitCode::SUCCESS
}
