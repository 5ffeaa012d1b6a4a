// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rounded-corner mask tracking for the presented panel.
//!
//! The mask is expressed in the panel's local coordinate space: its rectangle
//! starts at the origin and has the panel's size, with only the corners on the
//! panel's free edge rounded (see [`PresentationDirection::mask_corners`]).
//!
//! [`MaskSynchronizer`] keeps the mask matched to the panel frame. Plain layout
//! passes call [`MaskSynchronizer::apply`]; animated size changes call
//! [`MaskSynchronizer::animate`], which records a [`MaskMorph`] that the host
//! drives (or samples) until [`MaskSynchronizer::finish_animation`] is called.
//! While a morph is in flight, `apply` leaves the mask alone so an unrelated
//! layout pass cannot snap it mid-animation.

use core::time::Duration;

use kurbo::{BezPath, CubicBez, ParamCurve, Point, Rect, RoundedRect, RoundedRectRadii, Shape};
use tracing::trace;

use crate::types::{Corners, PresentationDirection};

/// Timing curve for animated layout and mask changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TimingCurve {
    /// Constant rate.
    Linear,
    /// Slow start and end; `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInEaseOut,
}

impl TimingCurve {
    /// Maps linear time `t` in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn progress(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInEaseOut => {
                let curve = CubicBez::new(
                    Point::new(0.0, 0.0),
                    Point::new(0.42, 0.0),
                    Point::new(0.58, 1.0),
                    Point::new(1.0, 1.0),
                );
                // x(s) is monotonic on [0, 1]; bisect for the parameter where x == t.
                let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
                for _ in 0..48 {
                    let mid = (lo + hi) * 0.5;
                    if curve.eval(mid).x < t {
                        lo = mid;
                    } else {
                        hi = mid;
                    }
                }
                curve.eval((lo + hi) * 0.5).y
            }
        }
    }
}

/// Computes the mask for a panel with the given frame.
///
/// Only the size of `frame` matters; the mask lives in panel-local space.
#[must_use]
pub fn mask_for_frame(frame: Rect, direction: PresentationDirection, radius: f64) -> RoundedRect {
    let corners = direction.mask_corners();
    let pick = |corner: Corners| if corners.contains(corner) { radius } else { 0.0 };
    let radii = RoundedRectRadii::new(
        pick(Corners::TOP_LEFT),
        pick(Corners::TOP_RIGHT),
        pick(Corners::BOTTOM_RIGHT),
        pick(Corners::BOTTOM_LEFT),
    );
    RoundedRect::from_rect(Rect::from_origin_size(Point::ZERO, frame.abs().size()), radii)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// An in-flight interpolation between two masks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskMorph {
    /// Mask at the start of the animation.
    pub from: RoundedRect,
    /// Mask at the end of the animation.
    pub to: RoundedRect,
    /// Total animation time.
    pub duration: Duration,
    /// Timing curve.
    pub curve: TimingCurve,
}

impl MaskMorph {
    /// Returns the interpolated mask `elapsed` into the animation.
    ///
    /// Rectangle edges and corner radii are interpolated independently.
    #[must_use]
    pub fn sample(&self, elapsed: Duration) -> RoundedRect {
        if self.duration.is_zero() || elapsed >= self.duration {
            return self.to;
        }
        let t = self
            .curve
            .progress(elapsed.as_secs_f64() / self.duration.as_secs_f64());
        let (a, b) = (self.from.rect(), self.to.rect());
        let rect = Rect::new(
            lerp(a.x0, b.x0, t),
            lerp(a.y0, b.y0, t),
            lerp(a.x1, b.x1, t),
            lerp(a.y1, b.y1, t),
        );
        let (ra, rb) = (self.from.radii(), self.to.radii());
        let radii = RoundedRectRadii::new(
            lerp(ra.top_left, rb.top_left, t),
            lerp(ra.top_right, rb.top_right, t),
            lerp(ra.bottom_right, rb.bottom_right, t),
            lerp(ra.bottom_left, rb.bottom_left, t),
        );
        RoundedRect::from_rect(rect, radii)
    }
}

/// Keeps the presented panel's mask in step with its frame.
#[derive(Clone, Debug)]
pub struct MaskSynchronizer {
    corner_radius: f64,
    curve: TimingCurve,
    current: Option<RoundedRect>,
    morph: Option<MaskMorph>,
}

impl MaskSynchronizer {
    /// Creates a synchronizer with no mask applied.
    #[must_use]
    pub fn new(corner_radius: f64, curve: TimingCurve) -> Self {
        Self {
            corner_radius,
            curve,
            current: None,
            morph: None,
        }
    }

    /// The mask currently applied, or the target of an in-flight morph.
    #[must_use]
    pub fn current(&self) -> Option<RoundedRect> {
        self.current
    }

    /// The in-flight morph, if any.
    #[must_use]
    pub fn morph(&self) -> Option<&MaskMorph> {
        self.morph.as_ref()
    }

    /// Returns `true` while a morph is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.morph.is_some()
    }

    /// The mask as it should be displayed `elapsed` into an in-flight morph,
    /// or the applied mask when nothing is animating.
    #[must_use]
    pub fn presentation_mask(&self, elapsed: Duration) -> Option<RoundedRect> {
        match &self.morph {
            Some(morph) => Some(morph.sample(elapsed)),
            None => self.current,
        }
    }

    /// The applied mask as a path.
    #[must_use]
    pub fn mask_path(&self, tolerance: f64) -> Option<BezPath> {
        self.current.map(|mask| mask.to_path(tolerance))
    }

    /// Recomputes the mask for `frame` and replaces the current one.
    ///
    /// Returns `false` and leaves the mask untouched while a morph is in flight.
    pub fn apply(&mut self, frame: Rect, direction: PresentationDirection) -> bool {
        if self.morph.is_some() {
            trace!("mask apply skipped during morph");
            return false;
        }
        self.current = Some(mask_for_frame(frame, direction, self.corner_radius));
        true
    }

    /// Starts a morph from the current mask to the mask for `frame`.
    ///
    /// When there is no current mask, or `duration` is zero, the target mask
    /// is applied directly and `None` is returned.
    pub fn animate(
        &mut self,
        frame: Rect,
        direction: PresentationDirection,
        duration: Duration,
    ) -> Option<MaskMorph> {
        let target = mask_for_frame(frame, direction, self.corner_radius);
        let Some(from) = self.current else {
            self.current = Some(target);
            return None;
        };
        self.current = Some(target);
        if duration.is_zero() {
            self.morph = None;
            return None;
        }
        let morph = MaskMorph {
            from,
            to: target,
            duration,
            curve: self.curve,
        };
        trace!(?duration, "mask morph started");
        self.morph = Some(morph);
        Some(morph)
    }

    /// Marks the in-flight morph as finished.
    pub fn finish_animation(&mut self) {
        self.morph = None;
    }

    /// Clears the mask and any in-flight morph.
    pub fn remove(&mut self) {
        self.current = None;
        self.morph = None;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use kurbo::{Rect, Size};

    use super::*;

    const RADIUS: f64 = 14.0;

    #[test]
    fn ease_in_ease_out_endpoints_and_symmetry() {
        let curve = TimingCurve::EaseInEaseOut;
        assert!(curve.progress(0.0).abs() < 1e-6);
        assert!((curve.progress(1.0) - 1.0).abs() < 1e-6);
        assert!((curve.progress(0.5) - 0.5).abs() < 1e-6);
        // Slow start.
        assert!(curve.progress(0.1) < 0.1);
        let a = curve.progress(0.25);
        let b = curve.progress(0.75);
        assert!((a + b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn mask_is_local_and_rounds_free_edge() {
        let frame = Rect::new(10.0, 200.0, 410.0, 500.0);
        let down = mask_for_frame(frame, PresentationDirection::Down, RADIUS);
        assert_eq!(down.rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
        let radii = down.radii();
        assert_eq!(radii.top_left, 0.0);
        assert_eq!(radii.top_right, 0.0);
        assert_eq!(radii.bottom_left, RADIUS);
        assert_eq!(radii.bottom_right, RADIUS);

        let radii = mask_for_frame(frame, PresentationDirection::Up, RADIUS).radii();
        assert_eq!(radii.top_left, RADIUS);
        assert_eq!(radii.bottom_right, 0.0);
    }

    #[test]
    fn apply_is_idempotent() {
        let mut sync = MaskSynchronizer::new(RADIUS, TimingCurve::EaseInEaseOut);
        let frame = Rect::new(0.0, 0.0, 400.0, 300.0);
        assert!(sync.apply(frame, PresentationDirection::Down));
        let first = sync.mask_path(0.1);
        assert!(sync.apply(frame, PresentationDirection::Down));
        let second = sync.mask_path(0.1);
        assert!(first.is_some());
        assert_eq!(first, second);
    }

    #[test]
    fn first_animate_sets_mask_directly() {
        let mut sync = MaskSynchronizer::new(RADIUS, TimingCurve::EaseInEaseOut);
        let frame = Rect::new(0.0, 0.0, 400.0, 300.0);
        let morph = sync.animate(frame, PresentationDirection::Up, Duration::from_millis(250));
        assert!(morph.is_none());
        assert!(!sync.is_animating());
        assert_eq!(sync.current().map(|m| m.rect().size()), Some(Size::new(400.0, 300.0)));
    }

    #[test]
    fn animate_morphs_and_guards_apply() {
        let mut sync = MaskSynchronizer::new(RADIUS, TimingCurve::Linear);
        let small = Rect::new(0.0, 0.0, 400.0, 200.0);
        let large = Rect::new(0.0, 0.0, 400.0, 400.0);
        sync.apply(small, PresentationDirection::Up);

        let morph = sync
            .animate(large, PresentationDirection::Up, Duration::from_millis(200))
            .expect("morph from an existing mask");
        assert_eq!(morph.from.rect().height(), 200.0);
        assert_eq!(morph.to.rect().height(), 400.0);
        assert!(sync.is_animating());

        let mid = morph.sample(Duration::from_millis(100));
        assert!((mid.rect().height() - 300.0).abs() < 1e-9);
        assert_eq!(morph.sample(Duration::from_secs(1)), morph.to);

        // Layout passes during the morph do not snap the mask.
        assert!(!sync.apply(small, PresentationDirection::Up));
        assert_eq!(sync.current(), Some(morph.to));

        sync.finish_animation();
        assert!(sync.apply(small, PresentationDirection::Up));
        assert_eq!(sync.current().map(|m| m.rect().height()), Some(200.0));
    }

    #[test]
    fn remove_clears_everything() {
        let mut sync = MaskSynchronizer::new(RADIUS, TimingCurve::EaseInEaseOut);
        sync.apply(Rect::new(0.0, 0.0, 10.0, 10.0), PresentationDirection::Down);
        sync.animate(
            Rect::new(0.0, 0.0, 10.0, 50.0),
            PresentationDirection::Down,
            Duration::from_millis(100),
        );
        sync.remove();
        assert!(sync.current().is_none());
        assert!(!sync.is_animating());
        assert!(sync.mask_path(0.1).is_none());
    }
}
