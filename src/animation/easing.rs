use d3rs::ease::{ease_cubic_in_out, ease_linear};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant speed. Used by the path reveal.
    Linear,
    /// Slow start and end; the default for element transitions.
    #[default]
    CubicInOut,
    /// Damped spring with unit mass, evaluated over the transition duration.
    /// May overshoot before settling on 1.
    Spring { stiffness: f32, damping: f32 },
}

impl Easing {
    pub fn spring() -> Self {
        Easing::Spring {
            stiffness: 100.0,
            damping: 10.0,
        }
    }

    /// Maps linear progress `t` in `[0, 1]` to eased progress.
    /// `duration_secs` only matters for springs, which run in real time.
    pub fn apply(self, t: f32, duration_secs: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => ease_linear(t as f64) as f32,
            Easing::CubicInOut => ease_cubic_in_out(t as f64) as f32,
            Easing::Spring { stiffness, damping } => {
                if t >= 1.0 {
                    return 1.0;
                }
                spring_response(stiffness, damping, t * duration_secs)
            }
        }
    }
}

/// Step response of a unit-mass spring released from 0 towards 1.
fn spring_response(stiffness: f32, damping: f32, time: f32) -> f32 {
    let omega = stiffness.max(f32::EPSILON).sqrt();
    let zeta = damping / (2.0 * omega);
    if zeta < 1.0 {
        let omega_d = omega * (1.0 - zeta * zeta).sqrt();
        let envelope = (-zeta * omega * time).exp();
        1.0 - envelope
            * ((omega_d * time).cos() + (zeta * omega / omega_d) * (omega_d * time).sin())
    } else {
        // critically damped or slower
        1.0 - (1.0 + omega * time) * (-omega * time).exp()
    }
}
