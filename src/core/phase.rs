//! core/phase.rs — The three λ phase regions separated by the resonances.

use super::potential::{LAMBDA_1, LAMBDA_2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseRegion {
    /// [0, λ1)
    Lqg,
    /// [λ1, λ2]
    Transition,
    /// (λ2, 1]
    Holographic,
}

impl PhaseRegion {
    pub const ALL: [PhaseRegion; 3] = [
        PhaseRegion::Lqg,
        PhaseRegion::Transition,
        PhaseRegion::Holographic,
    ];

    /// Region containing `lambda`. Resonance points belong to the transition.
    pub fn classify(lambda: f64) -> Self {
        if lambda < LAMBDA_1 {
            PhaseRegion::Lqg
        } else if lambda <= LAMBDA_2 {
            PhaseRegion::Transition
        } else {
            PhaseRegion::Holographic
        }
    }

    /// Interval endpoints on [0, 1].
    pub fn bounds(self) -> (f64, f64) {
        match self {
            PhaseRegion::Lqg => (0.0, LAMBDA_1),
            PhaseRegion::Transition => (LAMBDA_1, LAMBDA_2),
            PhaseRegion::Holographic => (LAMBDA_2, 1.0),
        }
    }

    /// Label used on the resonance plot.
    pub fn stability_label(self) -> &'static str {
        match self {
            PhaseRegion::Lqg => "LQG stable",
            PhaseRegion::Transition => "Transition",
            PhaseRegion::Holographic => "Holographic stable",
        }
    }

    /// Label used on the phase-structure diagram.
    pub fn phase_label(self) -> &'static str {
        match self {
            PhaseRegion::Lqg => "LQG Phase (λ → 0)",
            PhaseRegion::Transition => "Critical/Transition",
            PhaseRegion::Holographic => "Holographic Phase (λ → 1)",
        }
    }
}
