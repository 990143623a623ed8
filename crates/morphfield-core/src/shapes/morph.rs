use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{MorphError, Result};
use crate::math::lerp;
use crate::shapes::dispatcher::ShapeId;

/// An in-flight blend from one shape profile to another.
///
/// `progress` stays within `[0, 1]`; the owning [`MorphState`] drops the
/// transition as soon as it reaches 1. Deserialization applies the same
/// checks as [`MorphTransition::new`].
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTransition")]
pub struct MorphTransition {
    pub from: ShapeId,
    pub to: ShapeId,
    progress: f64,
    duration: f64,
}

impl MorphTransition {
    /// Start a transition at `progress = 0`.
    ///
    /// Rejects durations that are not finite and strictly positive.
    pub fn new(from: ShapeId, to: ShapeId, duration: f64) -> Result<Self> {
        if !(duration.is_finite() && duration > 0.0) {
            return Err(MorphError::InvalidDuration(duration));
        }
        Ok(Self {
            from,
            to,
            progress: 0.0,
            duration,
        })
    }

    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Advance by `dt` seconds. Returns `true` once the blend is complete.
    ///
    /// A non-finite `dt` is ignored.
    pub fn advance(&mut self, dt: f64) -> bool {
        if !dt.is_finite() {
            return self.is_complete();
        }
        self.progress = (self.progress + dt / self.duration).clamp(0.0, 1.0);
        self.is_complete()
    }

    /// Blend the two profiles' radii at the same angle.
    ///
    /// This interpolates radii, not vertex positions.
    #[inline]
    pub fn radius(&self, theta: f64, phi: f64, r: f64) -> f64 {
        lerp(
            self.from.radius(theta, phi, r),
            self.to.radius(theta, phi, r),
            self.progress,
        )
    }
}

#[derive(Deserialize)]
struct RawTransition {
    from: ShapeId,
    to: ShapeId,
    progress: f64,
    duration: f64,
}

impl TryFrom<RawTransition> for MorphTransition {
    type Error = MorphError;

    fn try_from(raw: RawTransition) -> Result<Self> {
        let mut transition = MorphTransition::new(raw.from, raw.to, raw.duration)?;
        // A finished transition is never stored, so 1.0 is out of range here.
        if !(raw.progress >= 0.0 && raw.progress < 1.0) {
            return Err(MorphError::InvalidConfig(format!(
                "transition progress must be in [0, 1), got {}",
                raw.progress
            )));
        }
        transition.progress = raw.progress;
        Ok(transition)
    }
}

/// Current shape plus the optional transition towards it.
///
/// Idle when `transition` is `None`, in which case `current` alone defines
/// the profile. While transitioning, `current` already names the target.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawMorphState")]
pub struct MorphState {
    current: ShapeId,
    transition: Option<MorphTransition>,
}

impl MorphState {
    pub fn new(initial: ShapeId) -> Self {
        Self {
            current: initial,
            transition: None,
        }
    }

    pub fn current_shape(&self) -> ShapeId {
        self.current
    }

    pub fn transition(&self) -> Option<&MorphTransition> {
        self.transition.as_ref()
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// Begin morphing towards `target` over `duration` seconds.
    ///
    /// A request issued mid-transition replaces the in-flight one and starts
    /// from the current shape identifier, not from the partially blended
    /// radius. On error nothing changes.
    pub fn request_morph(&mut self, target: ShapeId, duration: f64) -> Result<()> {
        let transition = MorphTransition::new(self.current, target, duration).map_err(|err| {
            warn!(requested = %target, duration, "morph request rejected: {err}");
            err
        })?;
        if let Some(previous) = self.transition.as_ref() {
            debug!(
                from = %previous.from,
                to = %previous.to,
                progress = previous.progress,
                "discarding in-flight morph"
            );
        }
        debug!(from = %self.current, to = %target, duration, "morph started");
        self.current = target;
        self.transition = Some(transition);
        Ok(())
    }

    /// Same as [`request_morph`](Self::request_morph) with the target given by name.
    pub fn request_morph_named(&mut self, target: &str, duration: f64) -> Result<()> {
        let shape = target.parse::<ShapeId>().map_err(|err| {
            warn!(requested = target, "morph request rejected: {err}");
            err
        })?;
        self.request_morph(shape, duration)
    }

    /// Advance the active transition by `dt` seconds. No-op when idle.
    pub fn tick(&mut self, dt: f64) {
        let Some(transition) = self.transition.as_mut() else {
            return;
        };
        if transition.advance(dt) {
            debug!(shape = %transition.to, "morph complete");
            self.transition = None;
        }
    }

    /// Base radius for the current shape or blend.
    #[inline]
    pub fn radius(&self, theta: f64, phi: f64, r: f64) -> f64 {
        match &self.transition {
            Some(transition) => transition.radius(theta, phi, r),
            None => self.current.radius(theta, phi, r),
        }
    }
}

#[derive(Deserialize)]
struct RawMorphState {
    current: ShapeId,
    transition: Option<MorphTransition>,
}

impl TryFrom<RawMorphState> for MorphState {
    type Error = MorphError;

    fn try_from(raw: RawMorphState) -> Result<Self> {
        if let Some(transition) = &raw.transition {
            if transition.to != raw.current {
                return Err(MorphError::InvalidConfig(format!(
                    "transition targets {} but current shape is {}",
                    transition.to, raw.current
                )));
            }
        }
        Ok(Self {
            current: raw.current,
            transition: raw.transition,
        })
    }
}

impl Default for MorphState {
    fn default() -> Self {
        Self::new(ShapeId::default())
    }
}
