use crate::error::AssessError;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

pub const DEFAULT_MULTIPLE_CHOICE_WEIGHT: f64 = 0.5;
pub const DEFAULT_OPINION_WEIGHT: f64 = 0.5;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub trait_groups: Vec<TraitGroupConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub multiple_choice_weight: Option<f64>,
    pub opinion_weight: Option<f64>,
    pub passing_score: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitGroupConfig {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub traits: Vec<TraitConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraitConfig {
    pub name: String,
    pub weight: Option<f64>,
}

/// Configured placement of a single trait.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitPlacement<'a> {
    pub group_id: &'a str,
    pub weight: Option<f64>,
}

impl ProcessConfig {
    /// Raw `(multiple_choice, opinion)` weights before normalization.
    pub fn combiner_weights(&self) -> (f64, f64) {
        (
            self.scoring
                .multiple_choice_weight
                .unwrap_or(DEFAULT_MULTIPLE_CHOICE_WEIGHT),
            self.scoring.opinion_weight.unwrap_or(DEFAULT_OPINION_WEIGHT),
        )
    }

    pub fn passing_score(&self) -> Option<f64> {
        self.scoring.passing_score
    }

    pub fn group_name(&self, group_id: &str) -> Option<&str> {
        self.trait_groups
            .iter()
            .find(|group| group.id == group_id)
            .map(|group| group.name.as_str())
            .filter(|name| !name.is_empty())
    }

    /// Trait name to group/weight lookup. The first group listing a trait wins.
    pub fn trait_index(&self) -> HashMap<&str, TraitPlacement<'_>> {
        let mut index = HashMap::new();
        for group in &self.trait_groups {
            for entry in &group.traits {
                index
                    .entry(entry.name.trim())
                    .or_insert(TraitPlacement {
                        group_id: group.id.as_str(),
                        weight: entry.weight,
                    });
            }
        }
        index
    }

    pub fn validate(&self) -> Result<(), AssessError> {
        for (key, value) in [
            ("scoring.multiple_choice_weight", self.scoring.multiple_choice_weight),
            ("scoring.opinion_weight", self.scoring.opinion_weight),
        ] {
            if let Some(weight) = value {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(AssessError::ConfigParse(format!(
                        "{key} must be a non-negative number (found {weight})"
                    )));
                }
            }
        }

        if let Some(passing_score) = self.scoring.passing_score {
            if !(0.0..=100.0).contains(&passing_score) {
                return Err(AssessError::ConfigParse(
                    "scoring.passing_score must be between 0.0 and 100.0".to_string(),
                ));
            }
        }

        validate_trait_groups(&self.trait_groups)
    }
}

fn validate_trait_groups(groups: &[TraitGroupConfig]) -> Result<(), AssessError> {
    let mut group_ids = HashSet::<&str>::new();
    let mut owners = HashMap::<&str, &str>::new();
    for group in groups {
        let group_id = group.id.trim();
        if group_id.is_empty() {
            return Err(AssessError::ConfigParse(
                "trait_groups entries must have a non-empty id".to_string(),
            ));
        }
        if !group_ids.insert(group_id) {
            return Err(AssessError::ConfigParse(format!(
                "trait_groups contains duplicate id: {group_id}"
            )));
        }

        for entry in &group.traits {
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(AssessError::ConfigParse(format!(
                    "trait_groups.{group_id}.traits entries must have a non-empty name"
                )));
            }
            if let Some(weight) = entry.weight {
                if !weight.is_finite() || weight < 0.0 {
                    return Err(AssessError::ConfigParse(format!(
                        "trait '{name}' in group '{group_id}' has a negative weight ({weight})"
                    )));
                }
            }
            if let Some(existing) = owners.get(name) {
                return Err(AssessError::ConfigParse(format!(
                    "trait '{name}' cannot appear in both trait_groups.{existing} and trait_groups.{group_id}"
                )));
            }
            owners.insert(name, group_id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let cfg: ProcessConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.trait_groups.is_empty());
        assert_eq!(cfg.combiner_weights(), (0.5, 0.5));
        assert!(cfg.passing_score().is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[scoring]
multiple_choice_weight = 0.7
opinion_weight = 0.3
passing_score = 65.0

[[trait_groups]]
id = "behavioral"
name = "Behavioral"
traits = [
  { name = "Leader", weight = 5.0 },
  { name = "Team Player", weight = 3.0 },
]

[[trait_groups]]
id = "technical"
traits = [{ name = "Analyst" }]
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("full config should parse");
        assert_eq!(cfg.combiner_weights(), (0.7, 0.3));
        assert_eq!(cfg.passing_score(), Some(65.0));
        assert_eq!(cfg.group_name("behavioral"), Some("Behavioral"));
        assert_eq!(cfg.group_name("technical"), None);

        let index = cfg.trait_index();
        assert_eq!(
            index.get("Team Player"),
            Some(&TraitPlacement {
                group_id: "behavioral",
                weight: Some(3.0)
            })
        );
        assert_eq!(index.get("Analyst").map(|p| p.weight), Some(None));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_negative_scoring_weight() {
        let toml_str = r#"
[scoring]
multiple_choice_weight = -0.2
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err
            .to_string()
            .contains("scoring.multiple_choice_weight must be a non-negative number"));
    }

    #[test]
    fn validate_accepts_zero_sum_weights() {
        let toml_str = r#"
[scoring]
multiple_choice_weight = 0.0
opinion_weight = 0.0
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_passing_score_out_of_range() {
        let toml_str = r#"
[scoring]
passing_score = 120.0
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_rejects_trait_in_multiple_groups() {
        let toml_str = r#"
[[trait_groups]]
id = "a"
traits = [{ name = "Leader", weight = 5.0 }]

[[trait_groups]]
id = "b"
traits = [{ name = "Leader", weight = 2.0 }]
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("cannot appear in both"));
        assert!(err.to_string().contains("trait_groups.a"));
        assert!(err.to_string().contains("trait_groups.b"));
    }

    #[test]
    fn validate_rejects_duplicate_group_ids() {
        let toml_str = r#"
[[trait_groups]]
id = "a"

[[trait_groups]]
id = "a"
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("duplicate id"));
    }

    #[test]
    fn validate_rejects_negative_trait_weight() {
        let toml_str = r#"
[[trait_groups]]
id = "a"
traits = [{ name = "Leader", weight = -1.0 }]
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("negative weight"));
    }

    #[test]
    fn validate_rejects_blank_trait_name() {
        let toml_str = r#"
[[trait_groups]]
id = "a"
traits = [{ name = "  " }]
"#;
        let cfg: ProcessConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("non-empty name"));
    }
}
