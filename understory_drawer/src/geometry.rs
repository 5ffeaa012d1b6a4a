// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame computations for a drawer presentation.
//!
//! Every function here is pure: container bounds, safe-area insets and the
//! caller's sizing state go in, a rectangle comes out. Degenerate inputs (for
//! example a zero-sized container) produce zero-sized rectangles rather than
//! inverted ones.
//!
//! The three frames are related as follows:
//!
//! - The **dimming frame** spans the container minus the strip between the
//!   container edge and the presentation origin (so a drawer hanging below a
//!   navigation bar never dims the bar).
//! - The **content frame** sits inside the dimming frame, flush with the
//!   origin edge, and leaves a margin on the far edge so some dimmed area
//!   always stays tappable.
//! - The **separator frame** is a thin strip on the content frame's near edge.
//!
//! ```rust
//! use kurbo::{Insets, Rect, Size};
//! use understory_drawer::geometry::{ContentFrameParams, content_frame, dimming_frame};
//! use understory_drawer::{CollapsePolicy, PresentationDirection};
//!
//! let container = Rect::new(0.0, 0.0, 400.0, 800.0);
//! let dimming = dimming_frame(container, PresentationDirection::Up, 800.0);
//! let content = content_frame(&ContentFrameParams {
//!     dimming,
//!     container,
//!     safe_area: Insets::ZERO,
//!     preferred_size: Size::new(0.0, 300.0),
//!     extra_height: 0.0,
//!     collapse_policy: CollapsePolicy::Move,
//!     direction: PresentationDirection::Up,
//!     origin: 800.0,
//!     min_far_edge_margin: 20.0,
//! });
//! assert_eq!(content, Rect::new(0.0, 500.0, 400.0, 800.0));
//! ```

use kurbo::{Insets, Rect, Size};

use crate::types::{CollapsePolicy, PresentationDirection};

/// Default minimum margin kept between the content and the far edge.
pub const MIN_FAR_EDGE_MARGIN: f64 = 20.0;

/// Builds a rectangle from an origin and a size, flooring the size at zero.
fn rect_with_size(x: f64, y: f64, width: f64, height: f64) -> Rect {
    Rect::new(x, y, x + width.max(0.0), y + height.max(0.0))
}

/// Computes the frame of the dimmed overlay.
///
/// The near edge (top for [`Down`](PresentationDirection::Down), bottom for
/// [`Up`](PresentationDirection::Up)) is moved to `origin`; the remote edge
/// stays on the container. `origin` is clamped into the container's vertical
/// span.
#[must_use]
pub fn dimming_frame(container: Rect, direction: PresentationDirection, origin: f64) -> Rect {
    let container = container.abs();
    let origin = origin.clamp(container.y0, container.y1);
    match direction {
        PresentationDirection::Down => Rect::new(container.x0, origin, container.x1, container.y1),
        PresentationDirection::Up => Rect::new(container.x0, container.y0, container.x1, origin),
    }
}

/// Inputs for [`content_frame`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentFrameParams {
    /// Frame of the dimmed overlay, usually from [`dimming_frame`].
    pub dimming: Rect,
    /// Bounds of the container the drawer is presented in.
    pub container: Rect,
    /// Safe-area insets of the container.
    pub safe_area: Insets,
    /// Size the presented content would like to have. Only the height is used.
    pub preferred_size: Size,
    /// Caller-driven adjustment to the content height.
    pub extra_height: f64,
    /// How a negative `extra_height` is absorbed.
    pub collapse_policy: CollapsePolicy,
    /// Presentation direction.
    pub direction: PresentationDirection,
    /// Resolved presentation origin, in container coordinates.
    pub origin: f64,
    /// Minimum margin between the content and the far edge of the dimming frame.
    pub min_far_edge_margin: f64,
}

/// Computes the frame of the presented content.
///
/// The content is full-bleed horizontally, anchored on the origin edge of the
/// dimming frame and never taller than the dimming frame minus the far-edge
/// margin (the larger of `min_far_edge_margin` and the safe-area inset on that
/// edge). When the origin coincides with the container's own edge the content
/// grows by the safe-area inset on that edge so it clears notches and bars.
///
/// A non-negative `extra_height`, or any `extra_height` under
/// [`CollapsePolicy::Resize`], is added to the height (still clamped, floored
/// at zero). A negative `extra_height` under [`CollapsePolicy::Move`] keeps the
/// height and shifts the frame toward the anchor edge instead.
#[must_use]
pub fn content_frame(params: &ContentFrameParams) -> Rect {
    let dimming = params.dimming.abs();
    let container = params.container.abs();
    let direction = params.direction;

    // Far-edge margin, opposite the edge the panel slides from.
    let (top_margin, bottom_margin) = match direction {
        PresentationDirection::Down => (
            0.0,
            params.min_far_edge_margin.max(params.safe_area.y1),
        ),
        PresentationDirection::Up => (
            params.min_far_edge_margin.max(params.safe_area.y0),
            0.0,
        ),
    };
    let available = rect_with_size(
        dimming.x0,
        dimming.y0 + top_margin,
        dimming.width(),
        dimming.height() - top_margin - bottom_margin,
    );

    let width = available.width();
    let mut height = params.preferred_size.height.max(0.0);
    // Clamped like the dimming frame's near edge.
    let origin = params.origin.clamp(container.y0, container.y1);
    let touches_container_edge = match direction {
        PresentationDirection::Down => origin == container.y0,
        PresentationDirection::Up => origin == container.y1,
    };
    if touches_container_edge {
        height += match direction {
            PresentationDirection::Down => params.safe_area.y0,
            PresentationDirection::Up => params.safe_area.y1,
        };
    }
    height = height.min(available.height());

    let extra = params.extra_height;
    if extra >= 0.0 || params.collapse_policy == CollapsePolicy::Resize {
        height = (height + extra).clamp(0.0, available.height());
    }

    let x = available.x0 + (available.width() - width) / 2.0;
    let mut y = match direction {
        PresentationDirection::Down => available.y0,
        PresentationDirection::Up => available.y1 - height,
    };

    if extra < 0.0 && params.collapse_policy == CollapsePolicy::Move {
        y += match direction {
            PresentationDirection::Down => extra,
            PresentationDirection::Up => -extra,
        };
    }

    rect_with_size(x, y, width, height)
}

/// Computes the frame of the separator line on the content's near edge.
#[must_use]
pub fn separator_frame(content: Rect, thickness: f64, direction: PresentationDirection) -> Rect {
    let content = content.abs();
    let thickness = thickness.max(0.0);
    let y = match direction {
        PresentationDirection::Down => content.y0,
        PresentationDirection::Up => content.y1 - thickness,
    };
    rect_with_size(content.x0, y, content.width(), thickness)
}

/// The frames computed in one layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DrawerFrames {
    /// Frame of the dimmed overlay.
    pub dimming: Rect,
    /// Frame of the presented content.
    pub content: Rect,
    /// Frame of the separator line.
    pub separator: Rect,
}

/// Computes dimming, content and separator frames in dependency order.
///
/// `params.dimming` is ignored and recomputed from `params.container`,
/// `params.direction` and `params.origin`.
#[must_use]
pub fn compute_frames(params: &ContentFrameParams, separator_thickness: f64) -> DrawerFrames {
    let dimming = dimming_frame(params.container, params.direction, params.origin);
    let content = content_frame(&ContentFrameParams { dimming, ..*params });
    let separator = separator_frame(content, separator_thickness, params.direction);
    DrawerFrames {
        dimming,
        content,
        separator,
    }
}
