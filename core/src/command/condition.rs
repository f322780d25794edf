//! Predicates deciding whether a conditional chain goes on to summarize.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::options::Options;


/// Condition evaluated after the simulation step of a conditional chain.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(tag = "condition", rename_all = "snake_case")]
pub enum SummarizeCondition {
    Always,
    Never,
    /// A summary file was given in the options.
    #[default]
    SummaryRequested,
    /// The simulation output contains `text`.
    OutputContains { text: String },
    /// The simulation output is a YAML mapping whose numeric `metric` is
    /// strictly greater than `threshold`.
    MetricAbove { metric: String, threshold: f64 },
}

impl SummarizeCondition {
    /// Evaluate against the options and the captured simulation output.
    pub fn evaluate(&self, options: &Options, output: &str) -> bool {
        match self {
            SummarizeCondition::Always => true,
            SummarizeCondition::Never => false,
            SummarizeCondition::SummaryRequested => options.summary_file.is_some(),
            SummarizeCondition::OutputContains { text } => output.contains(text.as_str()),
            SummarizeCondition::MetricAbove { metric, threshold } => {
                matches!(read_metric(output, metric), Some(v) if v > *threshold)
            }
        }
    }

    /// Parse the compact form used on the command line.
    ///
    /// `always`, `never`, `summary`, `contains:TEXT`, `metric:KEY>NUMBER`.
    pub fn parse(spec: &str) -> Result<Self, String> {
        match spec {
            "always" => return Ok(SummarizeCondition::Always),
            "never" => return Ok(SummarizeCondition::Never),
            "summary" => return Ok(SummarizeCondition::SummaryRequested),
            _ => {}
        }
        if let Some(text) = spec.strip_prefix("contains:") {
            if text.is_empty() {
                return Err("contains: needs some text to look for".into());
            }
            return Ok(SummarizeCondition::OutputContains { text: text.to_string() });
        }
        if let Some(rest) = spec.strip_prefix("metric:") {
            let (metric, threshold) = rest
                .split_once('>')
                .ok_or_else(|| format!("expected metric:KEY>NUMBER, got '{}'", spec))?;
            let metric = metric.trim();
            if metric.is_empty() {
                return Err(format!("missing metric name in '{}'", spec));
            }
            let threshold: f64 = threshold
                .trim()
                .parse()
                .map_err(|_| format!("invalid threshold in '{}'", spec))?;
            return Ok(SummarizeCondition::MetricAbove {
                metric: metric.to_string(),
                threshold,
            });
        }
        Err(format!("Unknown condition: '{}'", spec))
    }
}

impl fmt::Display for SummarizeCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SummarizeCondition::Always => write!(f, "always"),
            SummarizeCondition::Never => write!(f, "never"),
            SummarizeCondition::SummaryRequested => write!(f, "summary"),
            SummarizeCondition::OutputContains { text } => write!(f, "contains:{}", text),
            SummarizeCondition::MetricAbove { metric, threshold } => {
                write!(f, "metric:{}>{}", metric, threshold)
            }
        }
    }
}

/// Numeric value at top-level key `metric` of a YAML mapping.
fn read_metric(output: &str, metric: &str) -> Option<f64> {
    let doc: serde_yaml::Value = serde_yaml::from_str(output).ok()?;
    doc.get(metric)?.as_f64()
}
