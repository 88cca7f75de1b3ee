use serde::Serialize;
use siza_agent::shopping::{GET_CATALOG, SEARCH_PRODUCTS};
use siza_core::config::{AppConfig, LoadOptions};
use siza_core::store;

use super::{load_tools, CommandResult, EXIT_CATALOG, EXIT_CONFIG, EXIT_TOOL};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

impl DoctorCheck {
    fn exit_code(&self) -> u8 {
        match self.name {
            "config_validation" => EXIT_CONFIG,
            "catalog_validation" => EXIT_CATALOG,
            _ => EXIT_TOOL,
        }
    }
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = report
        .checks
        .iter()
        .find(|check| check.status == CheckStatus::Fail)
        .map_or(0, DoctorCheck::exit_code);

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> DoctorReport {
    let mut checks = vec![check_config()];

    match store::grocery() {
        Ok(catalog) => {
            checks.push(DoctorCheck {
                name: "catalog_validation",
                status: CheckStatus::Pass,
                details: format!(
                    "{} categories, {} items, ids unique",
                    catalog.category_count(),
                    catalog.item_count()
                ),
            });
            checks.push(check_tool_registry());
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "catalog_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            checks.push(DoctorCheck {
                name: "tool_registry",
                status: CheckStatus::Skipped,
                details: "skipped because the catalog did not load".to_string(),
            });
        }
    }

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_config() -> DoctorCheck {
    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: format!(
                "agent `{}` with voice `{}` at {}",
                config.agent.name, config.model.voice, config.platform.url
            ),
        },
        Err(error) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_tool_registry() -> DoctorCheck {
    let registry = match load_tools() {
        Ok(registry) => registry,
        Err(error) => {
            return DoctorCheck {
                name: "tool_registry",
                status: CheckStatus::Fail,
                details: error.to_string(),
            }
        }
    };

    let missing: Vec<&str> = [GET_CATALOG, SEARCH_PRODUCTS]
        .into_iter()
        .filter(|name| !registry.contains(name))
        .collect();
    if missing.is_empty() {
        DoctorCheck {
            name: "tool_registry",
            status: CheckStatus::Pass,
            details: format!("registered: {}", registry.names().join(", ")),
        }
    } else {
        DoctorCheck {
            name: "tool_registry",
            status: CheckStatus::Fail,
            details: format!("missing tools: {}", missing.join(", ")),
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
