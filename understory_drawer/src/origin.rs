// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Presentation origin resolution.
//!
//! A drawer's origin is the coordinate along the vertical axis where its near
//! edge sits. Callers may pass one explicitly; otherwise it is inferred once per
//! presentation:
//!
//! - [`Down`](PresentationDirection::Down): the bottom edge of the nearest
//!   navigation bar found by walking the presenting element's ancestors, or the
//!   top of the screen when there is none.
//! - [`Up`](PresentationDirection::Up): the bottom of the screen.
//!
//! Screen bounds are passed in explicitly; nothing here queries global state.

use kurbo::Rect;

use crate::types::PresentationDirection;

/// Access to the host's view tree for origin inference.
///
/// Implement this on an adapter over whatever tree the host keeps. Frames are
/// expected in the same (screen) space as the bounds passed to
/// [`resolve_origin`].
pub trait ViewHierarchy<K: Copy> {
    /// Returns the parent of `key`, or `None` at the root.
    fn parent(&self, key: K) -> Option<K>;

    /// Returns the frame of the navigation bar owned by `key`, if it has one.
    fn navigation_bar_frame(&self, key: K) -> Option<Rect>;
}

/// Walks from `start` up through its ancestors and returns the bottom edge of
/// the first navigation bar found.
///
/// `start` itself is checked first.
pub fn navigation_bar_max_y<K, H>(hierarchy: &H, start: K) -> Option<f64>
where
    K: Copy,
    H: ViewHierarchy<K> + ?Sized,
{
    let mut current = Some(start);
    while let Some(key) = current {
        if let Some(frame) = hierarchy.navigation_bar_frame(key) {
            return Some(frame.max_y());
        }
        current = hierarchy.parent(key);
    }
    None
}

/// Resolves the presentation origin.
///
/// An `explicit` origin always wins. Otherwise the origin is inferred from the
/// direction, the screen bounds and, for `Down`, the navigation bar bottom
/// returned by [`navigation_bar_max_y`].
#[must_use]
pub fn resolve_origin(
    explicit: Option<f64>,
    direction: PresentationDirection,
    screen_bounds: Rect,
    navigation_bar_max_y: Option<f64>,
) -> f64 {
    if let Some(origin) = explicit {
        return origin;
    }
    match direction {
        PresentationDirection::Down => navigation_bar_max_y.unwrap_or(screen_bounds.min_y()),
        PresentationDirection::Up => screen_bounds.max_y(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::Rect;

    use super::*;

    /// Nodes are indices; `parents[i]` is the parent of `i`.
    struct Tree {
        parents: Vec<Option<usize>>,
        nav_bars: Vec<Option<Rect>>,
    }

    impl ViewHierarchy<usize> for Tree {
        fn parent(&self, key: usize) -> Option<usize> {
            self.parents[key]
        }

        fn navigation_bar_frame(&self, key: usize) -> Option<Rect> {
            self.nav_bars[key]
        }
    }

    const SCREEN: Rect = Rect::new(0.0, 0.0, 390.0, 844.0);

    #[test]
    fn walks_to_nearest_navigation_bar() {
        // 0 (root, bar at 0..100) <- 1 (bar at 0..88) <- 2
        let tree = Tree {
            parents: alloc::vec![None, Some(0), Some(1)],
            nav_bars: alloc::vec![
                Some(Rect::new(0.0, 0.0, 390.0, 100.0)),
                Some(Rect::new(0.0, 0.0, 390.0, 88.0)),
                None,
            ],
        };
        assert_eq!(navigation_bar_max_y(&tree, 2), Some(88.0));
        assert_eq!(navigation_bar_max_y(&tree, 0), Some(100.0));
    }

    #[test]
    fn no_navigation_bar() {
        let tree = Tree {
            parents: alloc::vec![None, Some(0)],
            nav_bars: alloc::vec![None, None],
        };
        assert_eq!(navigation_bar_max_y(&tree, 1), None);
    }

    #[test]
    fn inferred_origins() {
        let down = PresentationDirection::Down;
        let up = PresentationDirection::Up;
        assert_eq!(resolve_origin(None, down, SCREEN, Some(88.0)), 88.0);
        assert_eq!(resolve_origin(None, down, SCREEN, None), 0.0);
        assert_eq!(resolve_origin(None, up, SCREEN, Some(88.0)), 844.0);
        assert_eq!(resolve_origin(Some(12.0), up, SCREEN, None), 12.0);
    }
}
