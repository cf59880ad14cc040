// deepzoom-core/src/escape_result.rs

use serde::{Deserialize, Serialize};

/// How an escape-time evaluation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// |z| exceeded the escape radius.
    Escaped,
    /// The displacement sum fell below the convergence tolerance.
    Periodic,
    /// Neither condition held within the iteration budget.
    Exhausted,
}

/// Result of evaluating one sample point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscapeResult {
    /// Whether the orbit left the escape radius.
    pub escaped: bool,
    /// Escape step, periodic-exit offset into the period-finding phase,
    /// or the period budget when neither happened.
    pub iterations: u32,
    /// Stabilization budget plus period budget (for colorizer normalization).
    pub max_iterations: u32,
    /// Set when the period-finding phase judged the orbit periodic.
    #[serde(default)]
    pub converged: bool,
}

impl EscapeResult {
    pub fn escaped(iterations: u32, max_iterations: u32) -> Self {
        Self {
            escaped: true,
            iterations,
            max_iterations,
            converged: false,
        }
    }

    pub fn periodic(iterations: u32, max_iterations: u32) -> Self {
        Self {
            escaped: false,
            iterations,
            max_iterations,
            converged: true,
        }
    }

    pub fn exhausted(iterations: u32, max_iterations: u32) -> Self {
        Self {
            escaped: false,
            iterations,
            max_iterations,
            converged: false,
        }
    }

    pub fn outcome(&self) -> Outcome {
        if self.escaped {
            Outcome::Escaped
        } else if self.converged {
            Outcome::Periodic
        } else {
            Outcome::Exhausted
        }
    }

    /// Bounded orbit, whether detected periodic or out of budget.
    pub fn is_interior(&self) -> bool {
        !self.escaped
    }

    /// Iteration count as a fraction of the total budget, in [0, 1].
    pub fn normalized_iterations(&self) -> f32 {
        if self.max_iterations == 0 {
            return 0.0;
        }
        (self.iterations as f32 / self.max_iterations as f32).min(1.0)
    }
}

impl Default for EscapeResult {
    fn default() -> Self {
        Self {
            escaped: false,
            iterations: 0,
            max_iterations: 0,
            converged: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_classification() {
        assert_eq!(EscapeResult::escaped(3, 250).outcome(), Outcome::Escaped);
        assert_eq!(EscapeResult::periodic(0, 250).outcome(), Outcome::Periodic);
        assert_eq!(EscapeResult::exhausted(50, 250).outcome(), Outcome::Exhausted);
    }

    #[test]
    fn interior_means_not_escaped() {
        assert!(EscapeResult::periodic(4, 250).is_interior());
        assert!(EscapeResult::exhausted(50, 250).is_interior());
        assert!(!EscapeResult::escaped(4, 250).is_interior());
    }

    #[test]
    fn normalized_iterations_in_unit_range() {
        assert_eq!(EscapeResult::escaped(125, 250).normalized_iterations(), 0.5);
        assert_eq!(EscapeResult::default().normalized_iterations(), 0.0);
    }

    #[test]
    fn serialization_roundtrip() {
        let original = EscapeResult::periodic(7, 250);
        let json = serde_json::to_string(&original).unwrap();
        let restored: EscapeResult = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn missing_converged_field_defaults_to_false() {
        let json = r#"{"escaped":false,"iterations":50,"max_iterations":250}"#;
        let restored: EscapeResult = serde_json::from_str(json).unwrap();
        assert_eq!(restored.outcome(), Outcome::Exhausted);
    }
}
