//! Error type for simulation setup and force evaluation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    /// Two particles at the exact same position make the pair force and
    /// potential undefined (division by zero). Reported instead of letting
    /// NaN propagate through the run
    #[error("particles {i} and {j} occupy the same position")]
    DegenerateSeparation { i: usize, j: usize },

    /// Configuration value that must be strictly positive was not
    #[error("{name} must be positive, got {value}")]
    NonPositiveParameter { name: &'static str, value: f64 },

    /// Random initialization was asked to draw velocities from an empty set
    #[error("random init requires at least one velocity choice")]
    EmptyVelocityChoices,
}
