//! Engine settings loaded from JSON
//!
//! ```json
//! { "display": "round", "seed": 7, "delayMs": 50 }
//! ```
//! Every field is optional.

use serde::{Deserialize, Serialize};

use crate::core::constants::{BACKGROUND_COLOR, DELAY_MS, SNOW_COLOR};
use crate::core::error::SnowResult;
use crate::domain::geometry::DisplayShape;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SnowSettings {
    pub display: DisplayShape,
    /// Fixed seed for reproducible snowfall; clock-seeded when absent
    pub seed: Option<u64>,
    pub delay_ms: u32,
    pub snow_color: u32,
    pub background_color: u32,
}

impl Default for SnowSettings {
    fn default() -> Self {
        Self {
            display: DisplayShape::default(),
            seed: None,
            delay_ms: DELAY_MS,
            snow_color: SNOW_COLOR,
            background_color: BACKGROUND_COLOR,
        }
    }
}

impl SnowSettings {
    pub fn from_json(json: &str) -> SnowResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_defaults() {
        let settings = SnowSettings::from_json("{}").unwrap();
        assert_eq!(settings, SnowSettings::default());
    }

    #[test]
    fn parses_camel_case_fields() {
        let settings =
            SnowSettings::from_json(r#"{"display":"round","seed":7,"delayMs":40}"#).unwrap();
        assert_eq!(settings.display, DisplayShape::Round);
        assert_eq!(settings.seed, Some(7));
        assert_eq!(settings.delay_ms, 40);
        assert_eq!(settings.snow_color, SNOW_COLOR);
    }

    #[test]
    fn rejects_unknown_fields_and_shapes() {
        assert!(SnowSettings::from_json(r#"{"flakes":900}"#).is_err());
        assert!(SnowSettings::from_json(r#"{"display":"hexagon"}"#).is_err());
    }
}
