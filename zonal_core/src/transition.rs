// Copyright 2026 the Zonal Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The transition scheduler.
//!
//! A tween moves a mark's retained state toward a target over a bounded
//! duration. There is at most one tween per mark: scheduling while one is in
//! flight *retargets* it — the new tween starts from the currently
//! interpolated value and heads for the new end state. Rapid reschedules
//! (e.g. dragging a slider) therefore never build a backlog of stale
//! animations; the last writer wins on the target.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::mark::{MarkId, MarkPayload};
use crate::scene::Scene;

/// Easing applied to the normalized tween clock.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant velocity.
    Linear,
    /// Slow-in, slow-out cubic.
    #[default]
    CubicInOut,
}

impl Easing {
    fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = 2.0 * t - 2.0;
                    0.5 * u * u * u + 1.0
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Tween {
    from: MarkPayload,
    to: MarkPayload,
    elapsed_ms: f64,
    duration_ms: f64,
    easing: Easing,
}

impl Tween {
    fn value(&self) -> MarkPayload {
        if self.duration_ms <= 0.0 {
            return self.to.clone();
        }
        let t = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        MarkPayload::interp(&self.from, &self.to, self.easing.apply(t))
    }

    fn finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// All in-flight tweens, at most one per mark.
#[derive(Debug, Default)]
pub struct Transitions {
    tweens: HashMap<MarkId, Tween>,
}

impl Transitions {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any tween is in flight.
    pub fn is_empty(&self) -> bool {
        self.tweens.is_empty()
    }

    /// Number of in-flight tweens.
    pub fn len(&self) -> usize {
        self.tweens.len()
    }

    /// Whether `id` has a tween in flight.
    pub fn is_active(&self, id: MarkId) -> bool {
        self.tweens.contains_key(&id)
    }

    /// The end state `id` is heading for, if animating.
    pub fn target(&self, id: MarkId) -> Option<&MarkPayload> {
        self.tweens.get(&id).map(|t| &t.to)
    }

    /// Schedules a tween for `id` from `from` to `to` over `duration_ms`.
    ///
    /// If a tween is already in flight for `id`, the new one starts from the
    /// in-flight interpolated value instead of `from`, and the clock restarts.
    /// A non-positive duration snaps on the next [`Transitions::advance`].
    pub fn schedule(
        &mut self,
        id: MarkId,
        from: MarkPayload,
        to: MarkPayload,
        duration_ms: f64,
        easing: Easing,
    ) {
        let from = match self.tweens.get(&id) {
            Some(current) => current.value(),
            None => from,
        };
        self.tweens.insert(
            id,
            Tween {
                from,
                to,
                elapsed_ms: 0.0,
                duration_ms,
                easing,
            },
        );
    }

    /// Drops the tween for `id`, if any, leaving the scene untouched.
    pub fn cancel(&mut self, id: MarkId) {
        self.tweens.remove(&id);
    }

    /// Advances all tweens by `dt_ms` and writes the interpolated states into
    /// `scene`. Completed tweens land exactly on their target and are dropped,
    /// as are tweens whose mark has left the scene.
    ///
    /// Returns `true` while any tween remains in flight.
    pub fn advance(&mut self, dt_ms: f64, scene: &mut Scene) -> bool {
        let dt_ms = dt_ms.max(0.0);
        let mut done: Vec<MarkId> = Vec::new();

        for (&id, tween) in &mut self.tweens {
            tween.elapsed_ms += dt_ms;
            let alive = scene.set_payload(id, tween.value());
            if !alive || tween.finished() {
                done.push(id);
            }
        }
        for id in done {
            self.tweens.remove(&id);
        }

        !self.tweens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use kurbo::Point;
    use peniko::Brush;

    use crate::mark::{CircleMark, Mark};

    use super::*;

    fn circle(x: f64, y: f64) -> MarkPayload {
        MarkPayload::Circle(CircleMark {
            center: Point::new(x, y),
            radius: 4.0,
            fill: Brush::default(),
        })
    }

    fn center(p: &MarkPayload) -> Point {
        match p {
            MarkPayload::Circle(c) => c.center,
            _ => panic!("expected circle"),
        }
    }

    fn scene_with(id: MarkId, payload: MarkPayload) -> Scene {
        let mut scene = Scene::new();
        scene.reconcile(vec![Mark::new(id, payload)]);
        scene
    }

    #[test]
    fn advance_lands_exactly_on_target() {
        let id = MarkId::from_raw(1);
        let mut scene = scene_with(id, circle(0.0, 0.0));
        let mut tx = Transitions::new();
        tx.schedule(id, circle(0.0, 0.0), circle(10.0, 0.0), 500.0, Easing::Linear);

        assert!(tx.advance(250.0, &mut scene));
        assert_eq!(center(scene.payload(id).unwrap()), Point::new(5.0, 0.0));

        assert!(!tx.advance(250.0, &mut scene));
        assert_eq!(center(scene.payload(id).unwrap()), Point::new(10.0, 0.0));
        assert!(tx.is_empty());
    }

    #[test]
    fn reschedule_retargets_from_interpolated_value() {
        let id = MarkId::from_raw(1);
        let mut scene = scene_with(id, circle(0.0, 0.0));
        let mut tx = Transitions::new();
        tx.schedule(id, circle(0.0, 0.0), circle(10.0, 0.0), 500.0, Easing::Linear);
        tx.advance(250.0, &mut scene);

        // Retarget mid-flight: continue from x=5 toward x=0, no queueing.
        tx.schedule(id, circle(0.0, 0.0), circle(0.0, 0.0), 500.0, Easing::Linear);
        assert_eq!(tx.len(), 1);
        tx.advance(250.0, &mut scene);
        assert_eq!(center(scene.payload(id).unwrap()), Point::new(2.5, 0.0));

        tx.advance(250.0, &mut scene);
        assert_eq!(center(scene.payload(id).unwrap()), Point::new(0.0, 0.0));
    }

    #[test]
    fn tween_for_removed_mark_is_dropped() {
        let id = MarkId::from_raw(1);
        let mut scene = scene_with(id, circle(0.0, 0.0));
        let mut tx = Transitions::new();
        tx.schedule(id, circle(0.0, 0.0), circle(10.0, 0.0), 500.0, Easing::Linear);

        scene.reconcile(Vec::new());
        assert!(!tx.advance(100.0, &mut scene));
        assert!(tx.is_empty());
    }

    #[test]
    fn zero_duration_snaps() {
        let id = MarkId::from_raw(1);
        let mut scene = scene_with(id, circle(0.0, 0.0));
        let mut tx = Transitions::new();
        tx.schedule(id, circle(0.0, 0.0), circle(3.0, 4.0), 0.0, Easing::CubicInOut);
        tx.advance(0.0, &mut scene);
        assert_eq!(center(scene.payload(id).unwrap()), Point::new(3.0, 4.0));
        assert!(tx.is_empty());
    }

    #[test]
    fn cubic_in_out_is_monotonic_and_hits_endpoints() {
        let e = Easing::CubicInOut;
        assert_eq!(e.apply(0.0), 0.0);
        assert_eq!(e.apply(1.0), 1.0);
        let mut prev = 0.0;
        for i in 1..=100 {
            let v = e.apply(f64::from(i) / 100.0);
            assert!(v >= prev, "easing must be monotonic");
            prev = v;
        }
    }
}
