//! Scenario files: model inputs plus run options, in YAML or JSON.

use std::path::{Path, PathBuf};

use ef_model::ModelInputs;
use ef_model::validate::{validate_initial_susceptible, validate_inputs};
use ef_sim::{InitialConditionPolicy, SimOptions};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: String,
    pub inputs: ModelInputs,
    #[serde(default)]
    pub options: ScenarioOptions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScenarioOptions {
    #[serde(default)]
    pub initial_condition: InitialConditionDef,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InitialConditionDef {
    #[default]
    Clamp,
    Reject,
}

impl From<InitialConditionDef> for InitialConditionPolicy {
    fn from(def: InitialConditionDef) -> Self {
        match def {
            InitialConditionDef::Clamp => InitialConditionPolicy::Clamp,
            InitialConditionDef::Reject => InitialConditionPolicy::Reject,
        }
    }
}

impl Scenario {
    pub fn new(name: impl Into<String>, inputs: ModelInputs) -> Self {
        Self {
            name: name.into(),
            inputs,
            options: ScenarioOptions::default(),
        }
    }

    pub fn sim_options(&self) -> SimOptions {
        SimOptions {
            initial_condition: self.options.initial_condition.into(),
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        validate_inputs(&self.inputs)?;
        if self.options.initial_condition == InitialConditionDef::Reject {
            validate_initial_susceptible(&self.inputs)?;
        }
        Ok(())
    }
}

enum FileFormat {
    Yaml,
    Json,
}

fn file_format(path: &Path) -> AppResult<FileFormat> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("yaml") | Some("yml") => Ok(FileFormat::Yaml),
        Some("json") => Ok(FileFormat::Json),
        _ => Err(AppError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Load and validate a scenario; the format follows the file extension.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let format = file_format(path)?;
    let content = std::fs::read_to_string(path).map_err(|source| AppError::ScenarioFileRead {
        path: PathBuf::from(path),
        source,
    })?;
    let scenario: Scenario = match format {
        FileFormat::Yaml => serde_yaml::from_str(&content)?,
        FileFormat::Json => serde_json::from_str(&content)?,
    };
    scenario.validate()?;
    Ok(scenario)
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    scenario.validate()?;
    let content = match file_format(path)? {
        FileFormat::Yaml => serde_yaml::to_string(scenario)?,
        FileFormat::Json => serde_json::to_string_pretty(scenario)?,
    };
    std::fs::write(path, content).map_err(|source| AppError::ScenarioFileWrite {
        path: PathBuf::from(path),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_with_defaults() {
        let yaml = r#"
name: measles-like
inputs:
  initial_susceptible: 0.99
  r0: 3.0
  latent_period_days: 7
  infectious_period_days: 14
  days: 3000
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.name, "measles-like");
        assert_eq!(scenario.inputs, ModelInputs::new(0.99, 3.0, 7.0, 14.0, 3000));
        assert_eq!(
            scenario.options.initial_condition,
            InitialConditionDef::Clamp
        );
        scenario.validate().unwrap();
    }

    #[test]
    fn reject_policy_is_checked_on_validate() {
        let mut scenario = Scenario::new(
            "over-vaccinated",
            ModelInputs::new(0.3, 3.0, 7.0, 14.0, 10).with_vaccination_rate(0.5),
        );
        scenario.validate().unwrap();
        scenario.options.initial_condition = InitialConditionDef::Reject;
        assert!(matches!(scenario.validate(), Err(AppError::Validation(_))));
        assert_eq!(
            scenario.sim_options().initial_condition,
            InitialConditionPolicy::Reject
        );
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let err = file_format(Path::new("scenario.toml")).err().unwrap();
        assert!(matches!(err, AppError::UnsupportedFormat { .. }));
    }
}
