use std::path::PathBuf;
use std::process::ExitCode;

use a11ylens_lib::{
    generate_first_audit_insight, health_score, load_audit, load_violations, pattern_groups,
    pattern_stats, resolve_health_score, severity_pattern_summary, AuditOutput, ElementLocator,
    Violation,
};

use crate::cli::OutputFormat;
use crate::formatting::{render_error, write_output};
use crate::settings::load_config;

/// Run the summary command.
pub fn run_summary(
    config_path: Option<PathBuf>,
    verbose: bool,
    violations_path: PathBuf,
    audit_path: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path.as_deref(), verbose) {
        Ok(cfg) => cfg,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let violations = match load_violations(&violations_path) {
        Ok(v) => v,
        Err(err) => return render_error(err, format, output.clone()),
    };
    if verbose {
        eprintln!("Loaded {} violation record(s)", violations.len());
    }

    let audit = match audit_path.as_deref().map(load_audit).transpose() {
        Ok(a) => a,
        Err(err) => return render_error(err, format, output.clone()),
    };

    let summary = severity_pattern_summary(&violations);
    let elements = all_elements(&violations);
    let groups = pattern_groups(&elements);
    let stats = pattern_stats(&elements);

    let score = match &audit {
        Some(snapshot) => resolve_health_score(snapshot, &violations, &config.weights),
        None => health_score(&summary, 0, 0, &config.weights),
    };

    let insights = generate_first_audit_insight(&summary);
    let body = AuditOutput::summary(audit, summary, groups, stats, score, insights);

    if let Err(err) = write_output(&body, format, output.clone()) {
        return render_error(
            a11ylens_lib::A11yError::Unknown(err.to_string()),
            format,
            output,
        );
    }
    ExitCode::SUCCESS
}

fn all_elements(violations: &[Violation]) -> Vec<ElementLocator> {
    violations
        .iter()
        .flat_map(|v| v.unique_elements.iter().cloned())
        .collect()
}
