// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: headless presentation primitives for edge-anchored sheets.
//!
//! A drawer is a modal panel that slides in from the top or bottom edge of a
//! container and dims everything else. This crate owns the parts of that
//! behavior that are pure state and geometry:
//!
//! - [`geometry`]: dimming, content and separator frames from container bounds,
//!   safe-area insets, the presentation origin and an extra content height.
//! - [`origin`]: resolving the origin from an explicit value, a navigation bar
//!   found in the presenting element's ancestry, or the screen edge.
//! - [`mask`]: the rounded-corner mask on the panel's free edge, applied
//!   instantly or morphed over time.
//! - [`controller`]: the presentation/dismissal lifecycle tying the above
//!   together, plus tap-to-dismiss and accessibility activation.
//!
//! It does **not** render anything. Hosts read frames, opacities and masks
//! from the controller and apply them to their own views, and implement
//! [`PresentationHost`] to receive animation and dismissal requests.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Rect, Size};
//! use understory_drawer::{
//!     AccessibilityAnchor, DrawerOptions, DrawerPresentationController, DrawerState,
//!     LayoutAnimation, LayoutEnvironment, OpacityFade, PresentationDirection, PresentationHost,
//! };
//!
//! struct Host;
//! impl PresentationHost for Host {
//!     fn animate_alongside_transition(&mut self, _fade: OpacityFade) {}
//!     fn animate_layout(&mut self, _animation: LayoutAnimation) {}
//!     fn request_dismiss(&mut self) {}
//!     fn announce_screen_changed(&mut self, _anchor: Option<AccessibilityAnchor>) {}
//! }
//!
//! let env = LayoutEnvironment {
//!     container_bounds: Rect::new(0.0, 0.0, 390.0, 844.0),
//!     safe_area: Insets::new(0.0, 47.0, 0.0, 34.0),
//!     screen_bounds: Rect::new(0.0, 0.0, 390.0, 844.0),
//!     navigation_bar_max_y: None,
//!     preferred_content_size: Size::new(390.0, 300.0),
//! };
//!
//! let mut drawer = DrawerPresentationController::new(DrawerOptions::new(PresentationDirection::Up));
//! drawer.presentation_will_begin(&env, true, &mut Host);
//! drawer.presentation_did_end(true, &mut Host);
//! assert_eq!(drawer.state(), DrawerState::Presented);
//!
//! // Panel hugs the bottom edge and grows by the bottom safe-area inset.
//! let frame = drawer.frame_of_presented_view();
//! assert_eq!(frame.y1, 844.0);
//! assert_eq!(frame.height(), 334.0);
//! ```
//!
//! ## Extra content height
//!
//! [`DrawerPresentationController::set_extra_content_height`] lets callers grow
//! or collapse the panel (for example to make room for a keyboard). Negative
//! values are absorbed according to [`CollapsePolicy`]: `Move` shifts the panel
//! toward its anchor edge, `Resize` shrinks it in place.
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod controller;
pub mod geometry;
pub mod mask;
pub mod origin;
mod types;

pub use config::{DrawerConfig, DrawerOptions, SourceAnchor};
pub use controller::{
    AccessibilityAnchor, DrawerPresentationController, DrawerState, LayerStack, LayoutAnimation,
    LayoutEnvironment, OpacityFade, PresentationHost,
};
pub use geometry::DrawerFrames;
pub use mask::{MaskMorph, MaskSynchronizer, TimingCurve};
pub use origin::ViewHierarchy;
pub use types::{CollapsePolicy, Corners, PresentationDirection};
