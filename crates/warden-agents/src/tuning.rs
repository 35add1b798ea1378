//! Behavior tuning, loaded from `.yaml`/`.yml` or `.json`.
//!
//! Every field has a default, so a tuning file only needs the values it
//! overrides:
//!
//! ```yaml
//! chase:
//!   speed: 150.0
//! attack:
//!   cooldown_seconds: 0.75
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TuningError};

/// Parameters for every stock leaf, grouped by behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BehaviorTuning {
    pub perception: PerceptionTuning,
    pub patrol: PatrolTuning,
    pub chase: ChaseTuning,
    pub attack: AttackTuning,
    pub flee: FleeTuning,
    pub alert: AlertTuning,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerceptionTuning {
    /// Distance within which `TargetVisible` reports the target.
    pub detection_radius: f32,
}

impl Default for PerceptionTuning {
    fn default() -> Self {
        Self {
            detection_radius: 300.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatrolTuning {
    pub speed: f32,
    pub arrival_tolerance: f32,
}

impl Default for PatrolTuning {
    fn default() -> Self {
        Self {
            speed: 60.0,
            arrival_tolerance: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChaseTuning {
    pub speed: f32,
    /// Distance at which the chase stops and hands over to the attack.
    pub attack_range: f32,
    /// Beyond this distance the target counts as lost.
    pub give_up_distance: f32,
}

impl Default for ChaseTuning {
    fn default() -> Self {
        Self {
            speed: 120.0,
            attack_range: 40.0,
            give_up_distance: 600.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AttackTuning {
    pub range: f32,
    pub damage: f32,
    pub cooldown_seconds: f64,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self {
            range: 48.0,
            damage: 10.0,
            cooldown_seconds: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FleeTuning {
    pub speed: f32,
    pub safe_distance: f32,
    /// Health ratio at or below which the flee branch takes over.
    pub health_threshold: f32,
}

impl Default for FleeTuning {
    fn default() -> Self {
        Self {
            speed: 140.0,
            safe_distance: 400.0,
            health_threshold: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertTuning {
    pub radius: f32,
    pub cooldown_seconds: f64,
}

impl Default for AlertTuning {
    fn default() -> Self {
        Self {
            radius: 250.0,
            cooldown_seconds: 5.0,
        }
    }
}

impl BehaviorTuning {
    /// Load and validate a tuning file. `.json` files are parsed as JSON,
    /// anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| TuningError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let tuning = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };

        tracing::info!(path = %path.display(), "loaded behavior tuning");
        Ok(tuning)
    }

    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let tuning: Self = serde_yaml::from_str(content)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let tuning: Self = serde_json::from_str(content)?;
        tuning.validate()?;
        Ok(tuning)
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Reject values no leaf can work with.
    pub fn validate(&self) -> Result<()> {
        non_negative("perception.detection_radius", self.perception.detection_radius)?;
        non_negative("patrol.speed", self.patrol.speed)?;
        non_negative("patrol.arrival_tolerance", self.patrol.arrival_tolerance)?;
        non_negative("chase.speed", self.chase.speed)?;
        non_negative("chase.attack_range", self.chase.attack_range)?;
        non_negative("chase.give_up_distance", self.chase.give_up_distance)?;
        non_negative("attack.range", self.attack.range)?;
        non_negative("attack.damage", self.attack.damage)?;
        non_negative("attack.cooldown_seconds", self.attack.cooldown_seconds as f32)?;
        non_negative("flee.speed", self.flee.speed)?;
        non_negative("flee.safe_distance", self.flee.safe_distance)?;
        non_negative("alert.radius", self.alert.radius)?;
        non_negative("alert.cooldown_seconds", self.alert.cooldown_seconds as f32)?;

        let threshold = self.flee.health_threshold;
        if !(0.0..=1.0).contains(&threshold) {
            return Err(TuningError::Invalid {
                field: "flee.health_threshold",
                reason: format!("{threshold} is outside [0, 1]"),
            });
        }

        if self.chase.attack_range > self.attack.range {
            return Err(TuningError::Invalid {
                field: "chase.attack_range",
                reason: format!(
                    "chase stops at {} but attacks only land within {}",
                    self.chase.attack_range, self.attack.range
                ),
            });
        }

        if self.attack.range > self.chase.give_up_distance {
            return Err(TuningError::Invalid {
                field: "attack.range",
                reason: format!(
                    "{} exceeds chase.give_up_distance {}",
                    self.attack.range, self.chase.give_up_distance
                ),
            });
        }

        Ok(())
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(TuningError::Invalid {
            field,
            reason: format!("{value} must be a finite, non-negative number"),
        })
    }
}
