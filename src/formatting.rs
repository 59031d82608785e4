use std::fmt::Write as FmtWrite;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use a11ylens_lib::{
    A11yError, AuditOutput, Insight, InsightSeverity, SeveritySummary, TierTrend, TrendDirection,
};

use crate::cli::OutputFormat;

/// Write output in the requested format.
pub fn write_output(
    body: &AuditOutput,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => write_json_output(body, output.as_deref())?,
        OutputFormat::Pretty => write_pretty_output(body, output.as_deref())?,
    };
    Ok(())
}

/// Render an error and return the appropriate exit code.
pub fn render_error(err: A11yError, format: OutputFormat, output: Option<PathBuf>) -> ExitCode {
    let payload = AuditOutput::error(err.to_payload());

    match format {
        OutputFormat::Json => {
            let content =
                serde_json::to_string(&payload).unwrap_or_else(|_| "{\"mode\":\"error\"}".into());
            if let Some(path) = output {
                if let Err(write_err) = std::fs::write(&path, &content) {
                    eprintln!("Failed to write error output: {}", write_err);
                    println!("{content}");
                }
            } else {
                println!("{content}");
            }
        }
        OutputFormat::Pretty => {
            if let Err(write_err) = write_pretty_output(&payload, output.as_deref()) {
                eprintln!("Failed to write error output: {}", write_err);
            }
        }
    };

    // Exit code 2 is reserved for errors; analyses themselves never fail.
    ExitCode::from(2)
}

/// Write JSON output to file or stdout.
fn write_json_output(
    body: &AuditOutput,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = serde_json::to_string(body)?;
    if let Some(path) = output {
        std::fs::write(path, content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Write pretty output to file or stdout.
fn write_pretty_output(body: &AuditOutput, output: Option<&Path>) -> io::Result<()> {
    let stdout_is_tty = std::io::stdout().is_terminal();
    let use_human = output.is_none() && stdout_is_tty;

    if use_human {
        let content = format_pretty(body, true);
        println!("{content}");
        return Ok(());
    }

    // Non-tty or file output: keep JSON shape for pipelines/files.
    let content =
        serde_json::to_string_pretty(body).unwrap_or_else(|_| "{\"mode\":\"error\"}".to_string());
    if let Some(path) = output {
        std::fs::write(path, &content)?;
    } else {
        println!("{content}");
    }
    Ok(())
}

/// Format output for human consumption in a terminal.
pub fn format_pretty(body: &AuditOutput, colorize: bool) -> String {
    match body {
        AuditOutput::Summary(out) => {
            let mut buf = String::new();
            let score = color(
                &format!("{:.1}", out.health_score),
                score_color_code(out.health_score),
                colorize,
            );
            writeln!(buf, "Health score: {score}").ok();
            write_summary_table(&mut buf, &out.severity_summary);
            if !out.pattern_groups.is_empty() {
                writeln!(buf, "Top patterns:").ok();
                for group in out.pattern_groups.iter().take(5) {
                    writeln!(buf, "- {:4}x {}", group.occurrences, group.pattern).ok();
                }
            }
            writeln!(
                buf,
                "Template ratio: {:.0}% ({} occurrences, {} patterns)",
                out.pattern_stats.template_ratio * 100.0,
                out.pattern_stats.total_occurrences,
                out.pattern_stats.unique_patterns
            )
            .ok();
            write_insights(&mut buf, &out.insights, colorize);
            buf
        }
        AuditOutput::Compare(out) => {
            let mut buf = String::new();
            let delta = &out.comparison.delta;
            let health = format!("{:+.1}", delta.health_score);
            let code = if delta.health_score > 0.0 {
                "32"
            } else if delta.health_score < 0.0 {
                "31"
            } else {
                "0"
            };
            writeln!(buf, "Health score delta: {}", color(&health, code, colorize)).ok();
            writeln!(
                buf,
                "Violations: {:+} total ({:+} critical, {:+} serious, {:+} moderate, {:+} minor)",
                delta.total, delta.critical, delta.serious, delta.moderate, delta.minor
            )
            .ok();
            let buckets = &out.comparison.violations;
            writeln!(
                buf,
                "Rules: {} new, {} fixed, {} persistent, {} worsened, {} improved",
                buckets.new.len(),
                buckets.fixed.len(),
                buckets.persistent.len(),
                buckets.worsened.len(),
                buckets.improved.len()
            )
            .ok();
            write_insights(&mut buf, &out.insights, colorize);
            buf
        }
        AuditOutput::Evolution(out) => {
            let mut buf = String::new();
            writeln!(buf, "Audits analyzed: {}", out.points.len()).ok();
            writeln!(buf, "Trends:").ok();
            let rows: [(&str, &TierTrend); 6] = [
                ("critical", &out.trends.critical),
                ("serious", &out.trends.serious),
                ("moderate", &out.trends.moderate),
                ("minor", &out.trends.minor),
                ("total", &out.trends.total),
                ("health", &out.trends.health),
            ];
            for (name, trend) in rows {
                let arrow = match trend.direction {
                    TrendDirection::Up => "up",
                    TrendDirection::Down => "down",
                    TrendDirection::Stable => "stable",
                };
                let magnitude = trend
                    .magnitude
                    .map(|m| format!(" ({m:+.1}%)"))
                    .unwrap_or_default();
                writeln!(buf, "- {:9} {}{}", name, arrow, magnitude).ok();
            }
            write_insights(&mut buf, &out.insights, colorize);
            buf
        }
        AuditOutput::Error(out) => {
            let header = color("[ERROR]", "31", colorize);
            let mut buf = String::new();
            writeln!(buf, "{} {}", header, out.error.message).ok();
            if let Some(remediation) = &out.error.remediation {
                writeln!(buf, "Hint: {remediation}").ok();
            }
            buf
        }
    }
}

fn write_summary_table(buf: &mut String, summary: &SeveritySummary) {
    writeln!(buf, "Violations by severity (occurrences / patterns):").ok();
    let rows = [
        ("critical", summary.critical),
        ("serious", summary.serious),
        ("moderate", summary.moderate),
        ("minor", summary.minor),
        ("total", summary.total),
    ];
    for (name, counts) in rows {
        writeln!(buf, "- {:9} {:4} / {}", name, counts.occurrences, counts.patterns).ok();
    }
}

fn write_insights(buf: &mut String, insights: &[Insight], colorize: bool) {
    if insights.is_empty() {
        return;
    }
    writeln!(buf, "Insights:").ok();
    for insight in insights {
        let code = match insight.severity {
            InsightSeverity::Positive => "32",
            InsightSeverity::Warning => "33",
            InsightSeverity::Info => "36",
        };
        let tag = color(
            &format!("[{}]", insight.insight_type),
            code,
            colorize,
        );
        writeln!(buf, "- {tag} {}", insight.message).ok();
    }
}

/// ANSI color code for a 0-100 health score.
fn score_color_code(score: f64) -> &'static str {
    if score >= 90.0 {
        "32"
    } else if score >= 70.0 {
        "33"
    } else {
        "31"
    }
}

fn color(text: &str, code: &str, colorize: bool) -> String {
    if colorize {
        format!("\x1b[{code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a11ylens_lib::{PatternStats, A11Y_OUTPUT_VERSION};

    #[test]
    fn pretty_summary_without_color_has_no_escape_codes() {
        let output = AuditOutput::summary(
            None,
            SeveritySummary::default(),
            vec![],
            PatternStats {
                total_occurrences: 0,
                unique_patterns: 0,
                template_ratio: 0.0,
            },
            100.0,
            vec![Insight::positive("clean_audit", "No violations.")],
        );
        let text = format_pretty(&output, false);
        assert!(text.contains("Health score: 100.0"));
        assert!(text.contains("[clean_audit] No violations."));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn pretty_error_includes_remediation_hint() {
        let output = AuditOutput::error(A11yError::input("bad json").to_payload());
        let text = format_pretty(&output, false);
        assert!(text.contains("[ERROR] bad json"));
        assert!(text.contains("Hint:"));
    }

    #[test]
    fn score_colors_follow_thresholds() {
        assert_eq!(score_color_code(95.0), "32");
        assert_eq!(score_color_code(75.0), "33");
        assert_eq!(score_color_code(40.0), "31");
    }

    #[test]
    fn json_error_body_carries_version() {
        let body = AuditOutput::error(A11yError::input("x").to_payload());
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["version"], A11Y_OUTPUT_VERSION);
    }
}
