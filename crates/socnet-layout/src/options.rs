use serde::{Deserialize, Serialize};

/// Tunables for [`ForceDirectedLayout`](crate::ForceDirectedLayout).
///
/// Deserializes from partial JSON: missing fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForceDirectedOptions {
    /// Coulomb constant for pairwise `k / d²` repulsion.
    pub repulsion: f64,
    /// Spring constant for linear attraction along edges.
    pub attraction: f64,
    /// Fraction of velocity applied to position each step.
    pub damping: f64,
    /// Repulsion distance floor.
    pub min_distance: f64,
    pub max_velocity: f64,
    /// Strength of the pull toward the centroid, scaled by temperature.
    pub gravity: f64,
    pub initial_temperature: f64,
    /// Geometric cooling factor applied after every step.
    pub cooling_rate: f64,
    pub min_temperature: f64,
    pub reheat_amount: f64,
}

impl Default for ForceDirectedOptions {
    fn default() -> Self {
        Self {
            repulsion: 15_000.0,
            attraction: 0.04,
            damping: 0.85,
            min_distance: 80.0,
            max_velocity: 50.0,
            gravity: 0.1,
            initial_temperature: 1.0,
            cooling_rate: 0.999,
            min_temperature: 0.01,
            reheat_amount: 0.3,
        }
    }
}

/// Runtime adjustment of the interactive knobs. `None` leaves a value unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParameterUpdate {
    pub repulsion: Option<f64>,
    pub attraction: Option<f64>,
    pub damping: Option<f64>,
}

impl ForceDirectedOptions {
    pub fn apply(&mut self, update: ParameterUpdate) {
        if let Some(v) = update.repulsion {
            self.repulsion = v;
        }
        if let Some(v) = update.attraction {
            self.attraction = v;
        }
        if let Some(v) = update.damping {
            self.damping = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let opts: ForceDirectedOptions =
            serde_json::from_str(r#"{"repulsion": 500.0, "damping": 0.5}"#).unwrap();
        assert_eq!(opts.repulsion, 500.0);
        assert_eq!(opts.damping, 0.5);
        assert_eq!(opts.attraction, 0.04);
        assert_eq!(opts.min_distance, 80.0);
    }

    #[test]
    fn update_touches_only_given_fields() {
        let mut opts = ForceDirectedOptions::default();
        opts.apply(ParameterUpdate {
            attraction: Some(0.2),
            ..Default::default()
        });
        assert_eq!(opts.attraction, 0.2);
        assert_eq!(opts.repulsion, 15_000.0);
        assert_eq!(opts.damping, 0.85);
    }
}
