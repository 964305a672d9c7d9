use crate::{Axis, Coord};

/// A time-based interpolation between two offsets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tween {
    pub from: Coord,
    pub to: Coord,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: Coord, to: Coord, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    pub fn sample(&self, now_ms: u64) -> Coord {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        let eased = self.easing.sample(t);

        let from = self.from as f64;
        let to = self.to as f64;
        (from + (to - from) * eased) as Coord
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[default]
    EaseOut,
}

impl Easing {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseOut => {
                let u = 1.0 - t;
                1.0 - u * u * u
            }
        }
    }
}

/// The in-flight animations of one object: at most one tween per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AxisAnim {
    x: Option<Tween>,
    y: Option<Tween>,
}

impl AxisAnim {
    fn slot(&mut self, axis: Axis) -> &mut Option<Tween> {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    pub fn get(&self, axis: Axis) -> Option<&Tween> {
        match axis {
            Axis::X => self.x.as_ref(),
            Axis::Y => self.y.as_ref(),
        }
    }

    /// Installs `tween` on `axis`, replacing (cancelling) whatever ran there.
    pub fn start(&mut self, axis: Axis, tween: Tween) -> Option<Tween> {
        self.slot(axis).replace(tween)
    }

    pub fn cancel(&mut self, axis: Axis) -> Option<Tween> {
        self.slot(axis).take()
    }

    pub fn cancel_all(&mut self) {
        self.x = None;
        self.y = None;
    }

    pub fn target(&self, axis: Axis) -> Option<Coord> {
        self.get(axis).map(|t| t.to)
    }

    pub fn is_running(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// Samples the running tweens at `now_ms`, dropping those that finished.
    ///
    /// Returns the sampled value per axis (`None` where no tween runs).
    pub fn advance(&mut self, now_ms: u64) -> (Option<Coord>, Option<Coord>) {
        let step = |slot: &mut Option<Tween>| {
            let tween = (*slot)?;
            let value = tween.sample(now_ms);
            if tween.is_done(now_ms) {
                *slot = None;
            }
            Some(value)
        };
        let x = step(&mut self.x);
        let y = step(&mut self.y);
        (x, y)
    }
}
