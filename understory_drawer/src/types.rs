// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation direction, collapse policy and mask corners.

use bitflags::bitflags;

/// Which screen edge a drawer slides in from.
///
/// The direction is fixed for the lifetime of a presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PresentationDirection {
    /// The panel slides down from the top edge (or from below a navigation bar).
    #[default]
    Down,
    /// The panel slides up from the bottom edge.
    Up,
}

impl PresentationDirection {
    /// Returns `true` for [`PresentationDirection::Down`].
    #[must_use]
    pub fn is_down(self) -> bool {
        matches!(self, Self::Down)
    }

    /// Corners of the panel that are rounded by the mask.
    ///
    /// These are the corners on the panel's free edge, away from the edge it
    /// slides in from.
    #[must_use]
    pub fn mask_corners(self) -> Corners {
        match self {
            Self::Down => Corners::BOTTOM_LEFT | Corners::BOTTOM_RIGHT,
            Self::Up => Corners::TOP_LEFT | Corners::TOP_RIGHT,
        }
    }
}

/// How a negative extra content height is absorbed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CollapsePolicy {
    /// Keep the panel's size and shift it toward its anchor edge.
    #[default]
    Move,
    /// Keep the panel's anchor and shrink its height.
    Resize,
}

bitflags! {
    /// A set of rectangle corners.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Corners: u8 {
        /// Top-left corner.
        const TOP_LEFT = 1 << 0;
        /// Top-right corner.
        const TOP_RIGHT = 1 << 1;
        /// Bottom-right corner.
        const BOTTOM_RIGHT = 1 << 2;
        /// Bottom-left corner.
        const BOTTOM_LEFT = 1 << 3;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_corners_sit_on_the_free_edge() {
        let down = PresentationDirection::Down.mask_corners();
        assert!(down.contains(Corners::BOTTOM_LEFT | Corners::BOTTOM_RIGHT));
        assert!(!down.intersects(Corners::TOP_LEFT | Corners::TOP_RIGHT));

        let up = PresentationDirection::Up.mask_corners();
        assert_eq!(up, Corners::TOP_LEFT | Corners::TOP_RIGHT);
    }

    #[test]
    fn defaults() {
        assert_eq!(CollapsePolicy::default(), CollapsePolicy::Move);
        assert!(PresentationDirection::default().is_down());
    }
}
