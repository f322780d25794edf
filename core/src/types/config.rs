use serde::{Deserialize, Serialize};

use crate::command::condition::SummarizeCondition;


/// Interpreter and script locations the process commands are built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScriptPaths {
    pub interpreter: String,
    pub simulate_script: String,
    pub summarize_script: String,
}

impl Default for ScriptPaths {
    fn default() -> Self {
        ScriptPaths {
            interpreter: "python".into(),
            simulate_script: "scripts/simulate.py".into(),
            summarize_script: "scripts/summarize.py".into(),
        }
    }
}

/// Contents of `settings.yaml`. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[serde(flatten)]
    pub scripts: ScriptPaths,
    pub condition: SummarizeCondition,
}
