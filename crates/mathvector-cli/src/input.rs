use anyhow::{Context, Result};
use clap::ArgMatches;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

use mathvector::{Operation, Orientation, TaggedVector};

use crate::util::{parse_values, validate_json_file};

/// A single vector operation and its operands.
///
/// Operands carry their orientation next to their values
/// (`{"orientation": "column", "elements": [3, 1, 2]}`) and are validated
/// when the job runs.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JobConfig {
    pub version: String,
    pub operation: Operation,
    pub lhs: TaggedVector,
    pub rhs: Option<TaggedVector>,
    pub factor: f64,
}

impl Default for JobConfig {
    fn default() -> Self {
        JobConfig {
            version: clap::crate_version!().to_string(),
            operation: Operation::Render,
            lhs: operand(Orientation::Row, vec![3.0, 1.0, 2.0]),
            rhs: Some(operand(Orientation::Row, vec![1.0, 1.0, 1.0])),
            factor: 1.0,
        }
    }
}

impl JobConfig {
    /// Load a job from a JSON file, falling back to defaults for missing or
    /// invalid optional fields. `lhs` is required.
    pub fn from_file(config_path: &Path) -> Result<Self> {
        validate_json_file(config_path)?;
        let config_json = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        let partial: serde_json::Value = serde_json::from_str(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
        let mut config = JobConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config Invalid value for '{}', using default: {:?}",
                            stringify!($field), config.$field
                        );
                    }
                } else {
                    log::warn!(
                        "Config Missing field '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            };
        }

        load_or_default!(version);
        load_or_default!(operation);
        load_or_default!(factor);

        let lhs = partial
            .get("lhs")
            .with_context(|| format!("Config {:?} is missing required field 'lhs'", config_path))?;
        config.lhs = serde_json::from_value(lhs.clone())
            .context("Config field 'lhs' must hold an orientation and a list of elements")?;

        config.rhs = match partial.get("rhs") {
            Some(serde_json::Value::Null) | None => None,
            Some(rhs) => Some(
                serde_json::from_value(rhs.clone())
                    .context("Config field 'rhs' must hold an orientation and a list of elements")?,
            ),
        };

        Ok(config)
    }

    /// Load a job file and apply `--operation` / `--factor` overrides.
    pub fn from_arguments(config_path: &Path, matches: &ArgMatches) -> Result<Self> {
        let mut config = JobConfig::from_file(config_path)?;
        config.apply_overrides(matches)?;
        Ok(config)
    }

    /// Build a job entirely from `eval` arguments.
    pub fn from_eval_arguments(matches: &ArgMatches) -> Result<Self> {
        let operation = matches
            .get_one::<String>("operation")
            .context("Missing operation")?;
        let operation = Operation::from_str(operation).map_err(anyhow::Error::msg)?;

        let lhs_text = matches.get_one::<String>("lhs").context("Missing --lhs")?;
        let lhs_orientation = orientation_arg(matches, "lhs_orientation")?;
        let lhs = operand(lhs_orientation, parse_values(lhs_text)?);

        let rhs = match matches.get_one::<String>("rhs") {
            Some(rhs_text) => {
                let rhs_orientation = orientation_arg(matches, "rhs_orientation")?;
                Some(operand(rhs_orientation, parse_values(rhs_text)?))
            }
            None => None,
        };

        let factor = matches.get_one::<f64>("factor").copied().unwrap_or(1.0);

        Ok(JobConfig {
            operation,
            lhs,
            rhs,
            factor,
            ..JobConfig::default()
        })
    }

    fn apply_overrides(&mut self, matches: &ArgMatches) -> Result<()> {
        if let Some(operation) = matches.get_one::<String>("operation") {
            self.operation = Operation::from_str(operation).map_err(anyhow::Error::msg)?;
        }
        if let Some(factor) = matches.get_one::<f64>("factor") {
            self.factor = *factor;
        }
        Ok(())
    }
}

fn orientation_arg(matches: &ArgMatches, id: &str) -> Result<Orientation> {
    match matches.get_one::<String>(id) {
        Some(value) => Orientation::from_str(value).map_err(anyhow::Error::msg),
        None => Ok(Orientation::Row),
    }
}

pub fn operand(orientation: Orientation, elements: Vec<f64>) -> TaggedVector {
    TaggedVector {
        orientation,
        elements,
    }
}
