//! Orbit-quality measurement from sampled distances.
//!
//! The satellite's distance to the planet is sampled every tick. Once per
//! sampling interval the window is reduced to an eccentricity estimate from
//! its extremes (apoapsis and periapsis) and then cleared:
//!
//! ```text
//! e = (apoapsis - periapsis) / (apoapsis + periapsis)
//! ```
//!
//! Between reductions the previously computed value is held unchanged.

use bevy::log::{info, warn};

/// Eccentricity reported before the first window has been reduced.
pub const UNMEASURED_ECCENTRICITY: f64 = 1.0;

/// Eccentricity from a window of distances.
///
/// Returns `None` for an empty window, or when every sample is zero so the
/// ratio is undefined.
pub fn calc_eccentricity(distances: &[f64]) -> Option<f64> {
    let (&first, rest) = distances.split_first()?;
    let (periapsis, apoapsis) = rest
        .iter()
        .fold((first, first), |(lo, hi), &d| (lo.min(d), hi.max(d)));

    let sum = apoapsis + periapsis;
    if sum <= 0.0 || !sum.is_finite() {
        return None;
    }
    Some((apoapsis - periapsis) / sum)
}

/// Windowed eccentricity tracker.
///
/// Owns the distance window exclusively; [`EccentricityTracker::sample`] is
/// the only way it changes.
#[derive(Clone, Debug)]
pub struct EccentricityTracker {
    window: Vec<f64>,
    interval_ticks: u64,
    ticks: u64,
    eccentricity: f64,
}

impl EccentricityTracker {
    /// Create a tracker that reduces every `interval_ticks` samples.
    ///
    /// An interval of zero is treated as one.
    pub fn new(interval_ticks: u64) -> Self {
        let interval_ticks = interval_ticks.max(1);
        Self {
            window: Vec::with_capacity(usize::try_from(interval_ticks).unwrap_or(0)),
            interval_ticks,
            ticks: 0,
            eccentricity: UNMEASURED_ECCENTRICITY,
        }
    }

    /// Latest reduced eccentricity.
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// Samples collected since the last reduction.
    pub fn window(&self) -> &[f64] {
        &self.window
    }

    pub fn interval_ticks(&self) -> u64 {
        self.interval_ticks
    }

    /// Whether at least one window has been reduced.
    pub fn is_measured(&self) -> bool {
        self.ticks >= self.interval_ticks
    }

    /// Record this tick's distance and reduce the window when the interval
    /// has elapsed.
    ///
    /// Returns the new eccentricity on ticks where a reduction succeeded.
    pub fn sample(&mut self, distance: f64) -> Option<f64> {
        self.ticks += 1;
        if distance.is_finite() {
            self.window.push(distance);
        }

        if self.ticks % self.interval_ticks != 0 {
            return None;
        }

        let reduced = calc_eccentricity(&self.window);
        match reduced {
            Some(e) => {
                info!(
                    "Eccentricity {:.8} from {} samples",
                    e,
                    self.window.len()
                );
                self.eccentricity = e;
            }
            None => warn!(
                "Eccentricity window unusable ({} samples), keeping {:.8}",
                self.window.len(),
                self.eccentricity
            ),
        }
        self.window.clear();
        reduced
    }
}
