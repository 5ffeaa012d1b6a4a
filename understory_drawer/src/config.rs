// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer tunables and per-presentation options.

use core::time::Duration;

use crate::geometry::MIN_FAR_EDGE_MARGIN;
use crate::mask::TimingCurve;
use crate::types::{CollapsePolicy, PresentationDirection};

/// Tunables shared by every presentation of a drawer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Radius of the rounded corners on the panel's free edge.
    pub corner_radius: f64,
    /// Minimum margin between the panel and the far edge of the dimmed area.
    pub min_far_edge_margin: f64,
    /// Thickness of the separator line on the panel's near edge.
    pub separator_thickness: f64,
    /// Seconds of animation per point of extra-height change.
    pub extra_height_seconds_per_point: f64,
    /// Curve used for animated layout and mask changes.
    pub curve: TimingCurve,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            corner_radius: 14.0,
            min_far_edge_margin: MIN_FAR_EDGE_MARGIN,
            separator_thickness: 1.0,
            extra_height_seconds_per_point: 0.001,
            curve: TimingCurve::EaseInEaseOut,
        }
    }
}

impl DrawerConfig {
    /// Sets the corner radius.
    #[must_use]
    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius.max(0.0);
        self
    }

    /// Sets the minimum far-edge margin.
    #[must_use]
    pub fn with_min_far_edge_margin(mut self, margin: f64) -> Self {
        self.min_far_edge_margin = margin.max(0.0);
        self
    }

    /// Sets the separator thickness.
    #[must_use]
    pub fn with_separator_thickness(mut self, thickness: f64) -> Self {
        self.separator_thickness = thickness.max(0.0);
        self
    }

    /// Sets the extra-height animation rate.
    #[must_use]
    pub fn with_extra_height_seconds_per_point(mut self, seconds: f64) -> Self {
        self.extra_height_seconds_per_point = seconds.max(0.0);
        self
    }

    /// Duration of an animated extra-height change of `delta` points.
    #[must_use]
    pub fn extra_height_duration(&self, delta: f64) -> Duration {
        let secs = (delta.abs() * self.extra_height_seconds_per_point).max(0.0);
        if secs.is_finite() {
            Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
        } else {
            Duration::ZERO
        }
    }
}

/// Identifies the element that triggered a presentation, for accessibility
/// announcements.
///
/// The value is opaque to this crate; hosts map it back to their own element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SourceAnchor(pub u64);

/// Per-presentation options.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct DrawerOptions {
    /// Edge the panel slides in from.
    pub direction: PresentationDirection,
    /// Explicit origin; inferred at presentation start when `None`.
    pub origin: Option<f64>,
    /// How a negative extra content height is absorbed.
    pub collapse_policy: CollapsePolicy,
    /// Element that triggered the presentation.
    pub source: Option<SourceAnchor>,
    /// Shared tunables.
    pub config: DrawerConfig,
}

impl DrawerOptions {
    /// Options for a drawer sliding from `direction` with default tunables.
    #[must_use]
    pub fn new(direction: PresentationDirection) -> Self {
        Self {
            direction,
            ..Self::default()
        }
    }

    /// Sets an explicit origin.
    #[must_use]
    pub fn with_origin(mut self, origin: f64) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Sets the collapse policy.
    #[must_use]
    pub fn with_collapse_policy(mut self, policy: CollapsePolicy) -> Self {
        self.collapse_policy = policy;
        self
    }

    /// Sets the source element.
    #[must_use]
    pub fn with_source(mut self, source: SourceAnchor) -> Self {
        self.source = Some(source);
        self
    }

    /// Sets the tunables.
    #[must_use]
    pub fn with_config(mut self, config: DrawerConfig) -> Self {
        self.config = config;
        self
    }
}
