//! Policy tables and tunables for the trip planner.
//!
//! Every field has a default matching the production behaviour, and the
//! whole tree deserializes with `#[serde(default)]` so a JSON file only
//! needs to name what it overrides.

use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::domain::{EngineType, StopColor};

/// Errors loading or validating a planner configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

/// Top-level configuration for the planning engine.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub cost: CostConfig,
    pub placement: PlacementConfig,
}

impl PlannerConfig {
    /// Load a configuration from a JSON file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config: PlannerConfig = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings that would make the search loop forever or divide
    /// the route into nothing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.placement;
        if p.segment_km <= 0 {
            return Err(ConfigError::Invalid("segment_km must be positive"));
        }
        if p.max_route_km <= 0 {
            return Err(ConfigError::Invalid("max_route_km must be positive"));
        }
        if p.tolerance_step_km == 0 {
            return Err(ConfigError::Invalid("tolerance_step_km must be positive"));
        }
        if p.initial_tolerance_km == 0 {
            return Err(ConfigError::Invalid("initial_tolerance_km must be positive"));
        }
        if p.initial_tolerance_km > p.max_tolerance_km {
            return Err(ConfigError::Invalid(
                "initial_tolerance_km must not exceed max_tolerance_km",
            ));
        }
        if self.cost.speed_ladder.iter().any(|s| !s.is_finite() || *s <= 0.0) {
            return Err(ConfigError::Invalid("speeds must be positive and finite"));
        }
        Ok(())
    }
}

/// Settings for the fuel cost curve.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CostConfig {
    /// Speeds (km/h) to estimate, in output order.
    pub speed_ladder: Vec<f64>,

    pub speed_model: SpeedModel,

    /// Multiplier on baseline consumption per drivetrain.
    #[serde(deserialize_with = "default_efficiency_with")]
    pub efficiency: EngineRates,

    /// Fuel price per litre per drivetrain.
    #[serde(deserialize_with = "default_prices_with")]
    pub price_per_litre: EngineRates,
}

fn default_efficiency_with<'de, D: Deserializer<'de>>(d: D) -> Result<EngineRates, D::Error> {
    Ok(RateOverrides::deserialize(d)?.apply(CostConfig::default().efficiency))
}

fn default_prices_with<'de, D: Deserializer<'de>>(d: D) -> Result<EngineRates, D::Error> {
    Ok(RateOverrides::deserialize(d)?.apply(CostConfig::default().price_per_litre))
}

impl Default for CostConfig {
    fn default() -> Self {
        Self {
            speed_ladder: vec![60.0, 80.0, 90.0, 100.0, 110.0, 120.0, 150.0, 200.0],
            speed_model: SpeedModel::Flat,
            efficiency: EngineRates {
                petrol: 1.0,
                diesel: Some(0.85),
                hybrid: Some(0.75),
                electric: None,
            },
            price_per_litre: EngineRates {
                petrol: 33.02,
                diesel: Some(35.47),
                hybrid: None,
                electric: None,
            },
        }
    }
}

/// How consumption responds to speed and engine size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum SpeedModel {
    /// Consumption ignores speed and engine size.
    Flat,

    /// Consumption scales by `(speed / reference_speed)^exponent` and by
    /// `engine_size / reference_engine_size`.
    Scaled {
        reference_speed: f64,
        exponent: f64,
        reference_engine_size: f64,
    },
}

impl SpeedModel {
    /// The model used before consumption was flattened.
    pub fn historical() -> Self {
        SpeedModel::Scaled {
            reference_speed: 80.0,
            exponent: 1.2,
            reference_engine_size: 2.0,
        }
    }

    /// Multiplier applied to baseline consumption.
    pub fn factor(&self, speed: f64, engine_size: f64) -> f64 {
        match *self {
            SpeedModel::Flat => 1.0,
            SpeedModel::Scaled {
                reference_speed,
                exponent,
                reference_engine_size,
            } => (speed / reference_speed).powf(exponent) * (engine_size / reference_engine_size),
        }
    }
}

/// A per-drivetrain value where anything without its own entry uses the
/// petrol value.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EngineRates {
    pub petrol: f64,
    #[serde(default)]
    pub diesel: Option<f64>,
    #[serde(default)]
    pub hybrid: Option<f64>,
    #[serde(default)]
    pub electric: Option<f64>,
}

impl EngineRates {
    /// Look up the value for `engine`.
    pub fn get(&self, engine: EngineType) -> f64 {
        let specific = match engine {
            EngineType::Petrol | EngineType::Unknown => None,
            EngineType::Diesel => self.diesel,
            EngineType::Hybrid => self.hybrid,
            EngineType::Electric => self.electric,
        };
        specific.unwrap_or(self.petrol)
    }
}

/// Entries named in a config file; the rest keep their defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RateOverrides {
    petrol: Option<f64>,
    diesel: Option<f64>,
    hybrid: Option<f64>,
    electric: Option<f64>,
}

impl RateOverrides {
    fn apply(self, base: EngineRates) -> EngineRates {
        EngineRates {
            petrol: self.petrol.unwrap_or(base.petrol),
            diesel: self.diesel.or(base.diesel),
            hybrid: self.hybrid.or(base.hybrid),
            electric: self.electric.or(base.electric),
        }
    }
}

/// Settings for checkpoint placement and stop search.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Routes up to this length (km) get a single midpoint checkpoint.
    pub single_checkpoint_max_km: i64,

    /// Spacing between checkpoints on longer routes (km).
    pub segment_km: i64,

    /// Longest route accepted for placement (km).
    pub max_route_km: i64,

    pub initial_tolerance_km: u32,
    pub tolerance_step_km: u32,

    /// Search gives up once the tolerance exceeds this.
    pub max_tolerance_km: u32,

    /// Advice variants produced per checkpoint.
    pub advice_count: usize,

    pub colors: ColorPolicy,

    /// Skip stops already chosen by an earlier variant of the same
    /// checkpoint. Off by default, so all variants can repeat one stop.
    pub distinct_variants: bool,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            single_checkpoint_max_km: 650,
            segment_km: 300,
            max_route_km: 50_000,
            initial_tolerance_km: 10,
            tolerance_step_km: 10,
            max_tolerance_km: 50,
            advice_count: 3,
            colors: ColorPolicy::default(),
            distinct_variants: false,
        }
    }
}

impl PlacementConfig {
    /// Tolerances tried in order, narrowest first.
    ///
    /// Stops at `max_tolerance_km` or when the next step would overflow.
    pub fn tolerances(&self) -> impl Iterator<Item = u32> + '_ {
        let step = self.tolerance_step_km.max(1);
        (0u32..)
            .map_while(move |i| {
                step.checked_mul(i)
                    .and_then(|offset| self.initial_tolerance_km.checked_add(offset))
            })
            .take_while(move |tol| *tol <= self.max_tolerance_km)
    }
}

/// Maps the tolerance a stop matched at to its marker colour.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorPolicy {
    /// Checked in order; the first tier whose `up_to_km` covers the
    /// tolerance wins.
    pub tiers: Vec<ColorTier>,

    /// Colour when no tier matches.
    pub fallback: StopColor,
}

/// One row of a [`ColorPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ColorTier {
    pub up_to_km: u32,
    pub color: StopColor,
}

impl Default for ColorPolicy {
    /// Every match is red.
    fn default() -> Self {
        Self {
            tiers: Vec::new(),
            fallback: StopColor::Red,
        }
    }
}

impl ColorPolicy {
    /// Green for the tightest window, blue for the next, red beyond.
    pub fn tiered() -> Self {
        Self {
            tiers: vec![
                ColorTier {
                    up_to_km: 10,
                    color: StopColor::Green,
                },
                ColorTier {
                    up_to_km: 20,
                    color: StopColor::Blue,
                },
            ],
            fallback: StopColor::Red,
        }
    }

    /// Colour for a stop found at `tolerance_km`.
    pub fn color_for(&self, tolerance_km: u32) -> StopColor {
        self.tiers
            .iter()
            .find(|tier| tolerance_km <= tier.up_to_km)
            .map(|tier| tier.color)
            .unwrap_or(self.fallback)
    }
}
