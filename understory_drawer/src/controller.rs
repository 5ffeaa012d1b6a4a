// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer presentation controller: transition lifecycle and layer layout.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle ─presentation_will_begin─▶ PresentationStarting ─presentation_did_end(true)─▶ Presented
//!                                         │                                            │
//!                               presentation_did_end(false)               dismissal_will_begin
//!                                         ▼                                            ▼
//!                                     Dismissed ◀──────dismissal_did_end(_)────── DismissalStarting
//! ```
//!
//! The host toolkit owns the transitions; it reports each phase to the
//! controller and supplies a [`LayoutEnvironment`] describing the container.
//! The controller computes frames for its [`LayerStack`], keeps the panel mask
//! in step through a [`MaskSynchronizer`], and calls back into a
//! [`PresentationHost`] for anything with side effects: alongside-transition
//! fades, layout animations, dismissal requests and accessibility
//! announcements.
//!
//! Within a layout pass frames are always computed before the mask is
//! reconciled against them.
//!
//! Container bounds, safe-area insets, screen bounds and the origin are all
//! expected in one coordinate space.

use core::time::Duration;

use kurbo::{Insets, Point, Rect, Size};
use tracing::{debug, trace, warn};

use crate::config::{DrawerOptions, SourceAnchor};
use crate::geometry::{ContentFrameParams, DrawerFrames, compute_frames};
use crate::mask::{MaskMorph, MaskSynchronizer, TimingCurve};
use crate::origin::resolve_origin;

/// Extent of the strip on the panel's far edge where a resize handle sits.
const RESIZE_HANDLE_EXTENT: f64 = 20.0;

/// Lifecycle state of a drawer presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DrawerState {
    /// Constructed; no transition has started.
    #[default]
    Idle,
    /// The presentation transition is running.
    PresentationStarting,
    /// The panel is on screen.
    Presented,
    /// The dismissal transition is running.
    DismissalStarting,
    /// Torn down. Terminal.
    Dismissed,
}

/// Description of the container supplied on each lifecycle and layout call.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct LayoutEnvironment {
    /// Bounds of the container view.
    pub container_bounds: Rect,
    /// Safe-area insets of the container.
    pub safe_area: Insets,
    /// Bounds of the screen, used to infer a missing origin.
    pub screen_bounds: Rect,
    /// Bottom edge of the nearest navigation bar above the presenting element,
    /// see [`navigation_bar_max_y`](crate::origin::navigation_bar_max_y).
    pub navigation_bar_max_y: Option<f64>,
    /// Size the presented content would like to have.
    pub preferred_content_size: Size,
}

/// Element an accessibility "screen changed" announcement is anchored on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessibilityAnchor {
    /// The presented content.
    PresentedContent,
    /// The element that triggered the presentation.
    Source(SourceAnchor),
}

/// An opacity change the host runs alongside its own transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityFade {
    /// Opacity at the start of the transition.
    pub from: f64,
    /// Opacity at the end of the transition.
    pub to: f64,
}

/// A timed change of the content frame, with the matching mask morph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutAnimation {
    /// Animation length.
    pub duration: Duration,
    /// Timing curve shared by the frame and the mask.
    pub curve: TimingCurve,
    /// Content frame before the change.
    pub from: Rect,
    /// Content frame after the change.
    pub to: Rect,
    /// Mask morph to run in sync, when the panel already had a mask.
    pub mask: Option<MaskMorph>,
}

/// Side effects the controller asks of its host.
///
/// The host is borrowed per call and never retained.
pub trait PresentationHost {
    /// Runs `fade` on the background layers alongside the current transition.
    fn animate_alongside_transition(&mut self, fade: OpacityFade);

    /// Runs a timed content layout change.
    ///
    /// The host calls
    /// [`DrawerPresentationController::layout_animation_did_finish`] when it
    /// completes.
    fn animate_layout(&mut self, animation: LayoutAnimation);

    /// Asks the presenting context to dismiss the drawer.
    fn request_dismiss(&mut self);

    /// Posts an accessibility "screen changed" notification.
    fn announce_screen_changed(&mut self, anchor: Option<AccessibilityAnchor>);
}

/// Frames and flags for the auxiliary layers, back to front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerStack {
    /// Outer container, marked modal for assistive technologies.
    pub accessibility_container: Rect,
    /// Whether the outer container hides the content underneath from
    /// assistive technologies.
    pub accessibility_modal: bool,
    /// Full-container layer that catches taps outside the panel.
    pub background: Rect,
    /// Opacity of the background and dimming layers.
    pub background_opacity: f64,
    /// Dimmed overlay.
    pub dimming: Rect,
    /// Container the panel is placed in.
    pub content: Rect,
    /// Drop shadow; tracks the panel frame.
    pub shadow: Rect,
    /// Separator line on the panel's near edge.
    pub separator: Rect,
    /// Whether the panel is parented in the content container (as opposed to
    /// placed by the host directly).
    pub panel_in_content_container: bool,
}

impl LayerStack {
    fn new(container: Rect, frames: &DrawerFrames, panel_in_content_container: bool) -> Self {
        let mut stack = Self {
            accessibility_container: container,
            accessibility_modal: true,
            background: container,
            background_opacity: 0.0,
            dimming: Rect::ZERO,
            content: Rect::ZERO,
            shadow: Rect::ZERO,
            separator: Rect::ZERO,
            panel_in_content_container,
        };
        stack.update(container, frames);
        stack
    }

    fn update(&mut self, container: Rect, frames: &DrawerFrames) {
        self.accessibility_container = container;
        self.background = container;
        self.dimming = frames.dimming;
        self.content = frames.content;
        self.shadow = frames.content;
        self.separator = frames.separator;
    }
}

/// Drives one drawer presentation from start to teardown.
#[derive(Clone, Debug)]
pub struct DrawerPresentationController {
    options: DrawerOptions,
    state: DrawerState,
    origin: Option<f64>,
    extra_height: f64,
    env: Option<LayoutEnvironment>,
    frames: DrawerFrames,
    layers: Option<LayerStack>,
    mask: MaskSynchronizer,
}

impl DrawerPresentationController {
    /// Creates an idle controller.
    #[must_use]
    pub fn new(options: DrawerOptions) -> Self {
        Self {
            options,
            state: DrawerState::Idle,
            origin: None,
            extra_height: 0.0,
            env: None,
            frames: DrawerFrames::default(),
            layers: None,
            mask: MaskSynchronizer::new(options.config.corner_radius, options.config.curve),
        }
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// Options this controller was created with.
    #[must_use]
    pub fn options(&self) -> &DrawerOptions {
        &self.options
    }

    /// The auxiliary layers, while they exist.
    #[must_use]
    pub fn layers(&self) -> Option<&LayerStack> {
        self.layers.as_ref()
    }

    /// The mask synchronizer for the presented panel.
    #[must_use]
    pub fn mask(&self) -> &MaskSynchronizer {
        &self.mask
    }

    /// The origin resolved at presentation start.
    #[must_use]
    pub fn origin(&self) -> Option<f64> {
        self.origin
    }

    /// Current extra content height.
    #[must_use]
    pub fn extra_content_height(&self) -> f64 {
        self.extra_height
    }

    /// The authoritative frame of the presented panel.
    #[must_use]
    pub fn frame_of_presented_view(&self) -> Rect {
        self.frames.content
    }

    /// All frames from the last layout pass.
    #[must_use]
    pub fn frames(&self) -> &DrawerFrames {
        &self.frames
    }

    /// Starts the presentation transition.
    ///
    /// Resolves and caches the origin, builds the layer stack, lays it out and
    /// fades the background in alongside the host's transition. When
    /// `animated` is `false` the host places the panel itself.
    pub fn presentation_will_begin(
        &mut self,
        env: &LayoutEnvironment,
        animated: bool,
        host: &mut impl PresentationHost,
    ) {
        if self.state != DrawerState::Idle {
            warn!(state = ?self.state, "presentation_will_begin ignored");
            return;
        }
        let direction = self.options.direction;
        let origin = resolve_origin(
            self.options.origin,
            direction,
            env.screen_bounds,
            env.navigation_bar_max_y,
        );
        self.origin = Some(origin);
        self.state = DrawerState::PresentationStarting;
        debug!(?direction, origin, animated, "drawer presentation starting");

        self.relayout(env);
        let mut layers = LayerStack::new(env.container_bounds, &self.frames, animated);
        layers.background_opacity = 1.0;
        self.layers = Some(layers);
        self.mask.apply(self.frames.content, direction);
        host.animate_alongside_transition(OpacityFade { from: 0.0, to: 1.0 });
    }

    /// Ends the presentation transition.
    ///
    /// A cancelled transition tears everything down.
    pub fn presentation_did_end(&mut self, completed: bool, host: &mut impl PresentationHost) {
        if self.state != DrawerState::PresentationStarting {
            warn!(state = ?self.state, "presentation_did_end ignored");
            return;
        }
        if completed {
            self.state = DrawerState::Presented;
            debug!("drawer presented");
            host.announce_screen_changed(Some(AccessibilityAnchor::PresentedContent));
        } else {
            debug!("drawer presentation cancelled");
            self.teardown();
            host.announce_screen_changed(None);
        }
    }

    /// Starts the dismissal transition and fades the background out.
    ///
    /// When `animated`, the panel is moved back into the content container so
    /// it does not slide over chrome outside the dimmed area.
    pub fn dismissal_will_begin(&mut self, animated: bool, host: &mut impl PresentationHost) {
        if !matches!(
            self.state,
            DrawerState::Presented | DrawerState::PresentationStarting
        ) {
            warn!(state = ?self.state, "dismissal_will_begin ignored");
            return;
        }
        self.state = DrawerState::DismissalStarting;
        debug!(animated, "drawer dismissal starting");
        if let Some(layers) = &mut self.layers {
            if animated {
                layers.panel_in_content_container = true;
            }
            layers.background_opacity = 0.0;
        }
        host.animate_alongside_transition(OpacityFade { from: 1.0, to: 0.0 });
    }

    /// Ends the dismissal transition.
    ///
    /// Teardown runs whether or not the transition completed; only a completed
    /// dismissal announces the screen change on the source element.
    pub fn dismissal_did_end(&mut self, completed: bool, host: &mut impl PresentationHost) {
        if self.state != DrawerState::DismissalStarting {
            warn!(state = ?self.state, "dismissal_did_end ignored");
            return;
        }
        self.teardown();
        let anchor = if completed {
            self.options.source.map(AccessibilityAnchor::Source)
        } else {
            debug!("drawer dismissal cancelled");
            None
        };
        host.announce_screen_changed(anchor);
    }

    /// Handles a layout pass of the container (rotation, keyboard, resize).
    pub fn container_did_layout(&mut self, env: &LayoutEnvironment) {
        if !self.is_active() {
            trace!(state = ?self.state, "layout pass ignored");
            return;
        }
        self.relayout(env);
        self.mask.apply(self.frames.content, self.options.direction);
    }

    /// Handles a change of the presented content's preferred size.
    pub fn preferred_content_size_did_change(&mut self, size: Size) {
        let Some(mut env) = self.env else {
            return;
        };
        if env.preferred_content_size == size {
            return;
        }
        env.preferred_content_size = size;
        if self.is_active() {
            self.relayout(&env);
            self.mask.apply(self.frames.content, self.options.direction);
        } else {
            self.env = Some(env);
        }
    }

    /// Sets the extra content height.
    ///
    /// Positive values grow the panel; negative values collapse it according to
    /// the presentation's [`CollapsePolicy`](crate::CollapsePolicy). When
    /// `animated`, the host receives a [`LayoutAnimation`] whose duration is
    /// proportional to the change, with a matching mask morph. Once dismissal
    /// has started the change is applied without animation.
    pub fn set_extra_content_height(
        &mut self,
        value: f64,
        animated: bool,
        host: &mut impl PresentationHost,
    ) {
        let delta = value - self.extra_height;
        if delta == 0.0 {
            return;
        }
        self.extra_height = value;
        if !self.is_active() {
            return;
        }
        let Some(env) = self.env else {
            return;
        };
        let direction = self.options.direction;
        let from = self.frames.content;
        self.relayout(&env);
        let to = self.frames.content;

        let duration = self.options.config.extra_height_duration(delta);
        // The host's dismissal transition owns the panel's motion.
        let animated = animated && self.state != DrawerState::DismissalStarting;
        if !animated || duration.is_zero() {
            self.mask.finish_animation();
            self.mask.apply(to, direction);
            return;
        }
        let morph = self.mask.animate(to, direction, duration);
        debug!(value, ?duration, "animating extra content height");
        host.animate_layout(LayoutAnimation {
            duration,
            curve: self.options.config.curve,
            from,
            to,
            mask: morph,
        });
    }

    /// Completes a layout animation started by
    /// [`set_extra_content_height`](Self::set_extra_content_height).
    ///
    /// Releases the mask guard and reconciles the mask with the current frame.
    pub fn layout_animation_did_finish(&mut self) {
        self.mask.finish_animation();
        if self.is_active() {
            self.mask.apply(self.frames.content, self.options.direction);
        }
    }

    /// Handles a tap on the background tap-catcher.
    ///
    /// This requests dismissal from the host; the state only changes once the
    /// host starts the dismissal transition.
    pub fn handle_background_tap(&mut self, host: &mut impl PresentationHost) {
        if !matches!(
            self.state,
            DrawerState::PresentationStarting | DrawerState::Presented
        ) {
            return;
        }
        debug!("background tapped, requesting dismissal");
        host.request_dismiss();
    }

    /// Point at which assistive technologies activate the dismiss action.
    ///
    /// This is the center of the dimmed area not covered by the panel. When
    /// the panel fills the dimmed area, it is the center of the panel's
    /// far-edge strip, where a resize handle usually sits.
    #[must_use]
    pub fn accessibility_activation_point(&self) -> Option<Point> {
        self.layers.as_ref()?;
        let DrawerFrames {
            dimming, content, ..
        } = self.frames;
        let uncovered = if self.options.direction.is_down() {
            Rect::new(dimming.x0, content.y1.max(dimming.y0), dimming.x1, dimming.y1)
        } else {
            Rect::new(dimming.x0, dimming.y0, dimming.x1, content.y0.min(dimming.y1))
        };
        if uncovered.height() > 0.0 && uncovered.width() > 0.0 {
            return Some(uncovered.center());
        }
        let strip = RESIZE_HANDLE_EXTENT.min(content.height());
        let handle = if self.options.direction.is_down() {
            Rect::new(content.x0, content.y1 - strip, content.x1, content.y1)
        } else {
            Rect::new(content.x0, content.y0, content.x1, content.y0 + strip)
        };
        Some(handle.center())
    }

    /// Handles an assistive-technology activation of the modal container.
    ///
    /// The activation is redirected to the dismiss action rather than routed to
    /// whatever sits under the activation point. Returns `true` if handled.
    pub fn accessibility_activate(&mut self, host: &mut impl PresentationHost) -> bool {
        if self.layers.is_none() {
            return false;
        }
        debug!("accessibility activation, requesting dismissal");
        host.request_dismiss();
        true
    }

    fn is_active(&self) -> bool {
        matches!(
            self.state,
            DrawerState::PresentationStarting
                | DrawerState::Presented
                | DrawerState::DismissalStarting
        )
    }

    fn relayout(&mut self, env: &LayoutEnvironment) {
        self.env = Some(*env);
        let Some(origin) = self.origin else {
            return;
        };
        let params = ContentFrameParams {
            dimming: Rect::ZERO,
            container: env.container_bounds,
            safe_area: env.safe_area,
            preferred_size: env.preferred_content_size,
            extra_height: self.extra_height,
            collapse_policy: self.options.collapse_policy,
            direction: self.options.direction,
            origin,
            min_far_edge_margin: self.options.config.min_far_edge_margin,
        };
        self.frames = compute_frames(&params, self.options.config.separator_thickness);
        trace!(frames = ?self.frames, "drawer layout");
        if let Some(layers) = &mut self.layers {
            layers.update(env.container_bounds, &self.frames);
        }
    }

    fn teardown(&mut self) {
        if self.layers.take().is_some() {
            debug!("drawer layers torn down");
        }
        self.mask.remove();
        self.state = DrawerState::Dismissed;
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Insets, Rect, Size};

    use super::*;
    use crate::types::PresentationDirection;

    #[derive(Default)]
    struct Host {
        announcements: Vec<Option<AccessibilityAnchor>>,
    }

    impl PresentationHost for Host {
        fn animate_alongside_transition(&mut self, _fade: OpacityFade) {}

        fn animate_layout(&mut self, _animation: LayoutAnimation) {}

        fn request_dismiss(&mut self) {}

        fn announce_screen_changed(&mut self, anchor: Option<AccessibilityAnchor>) {
            self.announcements.push(anchor);
        }
    }

    fn env() -> LayoutEnvironment {
        LayoutEnvironment {
            container_bounds: Rect::new(0.0, 0.0, 400.0, 800.0),
            safe_area: Insets::ZERO,
            screen_bounds: Rect::new(0.0, 0.0, 400.0, 800.0),
            navigation_bar_max_y: Some(88.0),
            preferred_content_size: Size::new(400.0, 300.0),
        }
    }

    #[test]
    fn origin_is_inferred_and_cached() {
        let mut host = Host::default();
        let mut drawer = DrawerPresentationController::new(DrawerOptions::new(
            PresentationDirection::Down,
        ));
        drawer.presentation_will_begin(&env(), true, &mut host);
        assert_eq!(drawer.origin(), Some(88.0));

        // A later layout with a different navigation bar keeps the cached origin.
        let mut moved = env();
        moved.navigation_bar_max_y = Some(120.0);
        drawer.container_did_layout(&moved);
        assert_eq!(drawer.origin(), Some(88.0));
        assert_eq!(drawer.frame_of_presented_view().y0, 88.0);
    }

    #[test]
    fn panel_parenting_follows_animated_flag() {
        let mut host = Host::default();
        let mut drawer =
            DrawerPresentationController::new(DrawerOptions::new(PresentationDirection::Up));
        drawer.presentation_will_begin(&env(), false, &mut host);
        assert_eq!(
            drawer.layers().map(|l| l.panel_in_content_container),
            Some(false)
        );
        drawer.presentation_did_end(true, &mut host);
        drawer.dismissal_will_begin(true, &mut host);
        assert_eq!(
            drawer.layers().map(|l| l.panel_in_content_container),
            Some(true)
        );
    }

    #[test]
    fn lifecycle_calls_out_of_order_are_ignored() {
        let mut host = Host::default();
        let mut drawer =
            DrawerPresentationController::new(DrawerOptions::new(PresentationDirection::Up));
        drawer.presentation_did_end(true, &mut host);
        drawer.dismissal_did_end(true, &mut host);
        assert_eq!(drawer.state(), DrawerState::Idle);
        assert!(host.announcements.is_empty());
    }

    #[test]
    fn activation_point_lies_in_uncovered_dimming() {
        let mut host = Host::default();
        let mut drawer =
            DrawerPresentationController::new(DrawerOptions::new(PresentationDirection::Up));
        assert!(drawer.accessibility_activation_point().is_none());
        drawer.presentation_will_begin(&env(), true, &mut host);
        let point = drawer
            .accessibility_activation_point()
            .expect("layers exist");
        assert!(point.y < drawer.frame_of_presented_view().y0);

        // A tall panel still leaves the far-edge margin uncovered.
        let mut full = env();
        full.preferred_content_size = Size::new(400.0, 10_000.0);
        drawer.container_did_layout(&full);
        let point = drawer
            .accessibility_activation_point()
            .expect("layers exist");
        assert_eq!(point.y, 10.0);
    }

    #[test]
    fn activation_point_falls_back_to_resize_handle() {
        let mut host = Host::default();
        let config = crate::DrawerConfig::default().with_min_far_edge_margin(0.0);
        let mut drawer = DrawerPresentationController::new(
            DrawerOptions::new(PresentationDirection::Up).with_config(config),
        );
        let mut full = env();
        full.preferred_content_size = Size::new(400.0, 10_000.0);
        drawer.presentation_will_begin(&full, true, &mut host);
        let content = drawer.frame_of_presented_view();
        assert_eq!(content.y0, 0.0);
        let point = drawer
            .accessibility_activation_point()
            .expect("layers exist");
        assert_eq!(point.y, RESIZE_HANDLE_EXTENT / 2.0);
    }
}
