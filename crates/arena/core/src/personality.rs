/// Character biases applied to the goal evaluators.
///
/// A bias multiplies the evaluator's raw desirability before clamping, so
/// values above 1 make a behavior more attractive and values below 1 less.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Personality {
    pub name: String,
    pub explore: f32,
    pub get_health: f32,
    pub get_weapon: f32,
    pub engage: f32,
}

impl Personality {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

impl Default for Personality {
    fn default() -> Self {
        Self {
            name: "default".to_owned(),
            explore: 1.0,
            get_health: 1.0,
            get_weapon: 1.0,
            engage: 1.0,
        }
    }
}
