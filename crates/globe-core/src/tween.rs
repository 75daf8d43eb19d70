//! Timed interpolation of scene properties.
//!
//! Tweens are sampled once per frame with the frame delta; completion is
//! reported back as [`TweenEvent`]s instead of callbacks so the owner decides
//! what happens next.

use crate::placement::TileId;
use glam::Vec3;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuarticOut,
    QuarticInOut,
    BackIn,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let k = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => k,
            Easing::QuarticOut => {
                let j = k - 1.0;
                1.0 - j * j * j * j
            }
            Easing::QuarticInOut => {
                let j = k * 2.0;
                if j < 1.0 {
                    0.5 * j * j * j * j
                } else {
                    let j = j - 2.0;
                    -0.5 * (j * j * j * j - 2.0)
                }
            }
            Easing::BackIn => {
                const S: f32 = 1.701_58;
                k * k * ((S + 1.0) * k - S)
            }
        }
    }
}

/// What a tween writes to. Each property has at most one running tween.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenProperty {
    /// `x` = pitch, `y` = yaw.
    Orientation,
    /// `x` = camera distance.
    Distance,
    /// `x` = uniform scale of one tile.
    TileScale(TileId),
    /// RGB of the graticule lines.
    GraticuleColor,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenCategory {
    Hover,
    Flight,
    Theme,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TweenEvent {
    FlightArrived(TileId),
}

#[derive(Clone, Debug)]
pub struct Tween {
    pub property: TweenProperty,
    pub from: Vec3,
    pub to: Vec3,
    pub duration: Duration,
    pub elapsed: Duration,
    pub easing: Easing,
    pub category: TweenCategory,
    pub on_complete: Option<TweenEvent>,
}

impl Tween {
    pub fn new(property: TweenProperty, from: Vec3, to: Vec3, duration: Duration) -> Self {
        Self {
            property,
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing: Easing::Linear,
            category: TweenCategory::Hover,
            on_complete: None,
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn category(mut self, category: TweenCategory) -> Self {
        self.category = category;
        self
    }

    pub fn on_complete(mut self, event: TweenEvent) -> Self {
        self.on_complete = Some(event);
        self
    }

    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    pub fn value(&self) -> Vec3 {
        self.from.lerp(self.to, self.easing.apply(self.progress()))
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Clone, Debug, Default)]
pub struct TweenRegistry {
    active: SmallVec<[Tween; 8]>,
}

impl TweenRegistry {
    /// Start a tween, dropping any running tween on the same property.
    pub fn start(&mut self, tween: Tween) {
        self.active.retain(|t| t.property != tween.property);
        self.active.push(tween);
    }

    /// Stop every tween of `category` without applying its end value.
    pub fn cancel_category(&mut self, category: TweenCategory) -> usize {
        let before = self.active.len();
        self.active.retain(|t| t.category != category);
        before - self.active.len()
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    pub fn has_category(&self, category: TweenCategory) -> bool {
        self.active.iter().any(|t| t.category == category)
    }

    pub fn get(&self, property: TweenProperty) -> Option<&Tween> {
        self.active.iter().find(|t| t.property == property)
    }

    /// Advance all tweens by `dt`, handing each sampled value to `apply`.
    /// Finished tweens apply their end value, leave the registry and report
    /// their completion event.
    pub fn update(
        &mut self,
        dt: Duration,
        mut apply: impl FnMut(TweenProperty, Vec3),
    ) -> SmallVec<[TweenEvent; 2]> {
        let mut events = SmallVec::new();
        for t in self.active.iter_mut() {
            t.elapsed = (t.elapsed + dt).min(t.duration);
            apply(t.property, t.value());
            if t.is_finished() {
                if let Some(ev) = t.on_complete {
                    events.push(ev);
                }
            }
        }
        self.active.retain(|t| !t.is_finished());
        events
    }
}
