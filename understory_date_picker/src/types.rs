// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picker modes, selection ranges and sub-picker descriptions.

use chrono::NaiveDateTime;

/// What the user is asked to pick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DateTimePickerMode {
    /// A single day.
    Date,
    /// A single day and time of day.
    DateTime,
    /// A start and end day.
    DateRange,
    /// A start and end day, each with a time of day.
    DateTimeRange,
}

impl DateTimePickerMode {
    /// Returns `true` for the range modes.
    #[must_use]
    pub fn is_range(self) -> bool {
        matches!(self, Self::DateRange | Self::DateTimeRange)
    }
}

/// Whether a screen reader (or equivalent non-visual navigation) is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AccessibilityMode {
    /// Regular visual interaction.
    #[default]
    Standard,
    /// A screen reader is running; pickers collapse to a single combined page.
    ScreenReader,
}

/// A selected start and end, with `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start of the selection.
    pub start: NaiveDateTime,
    /// End of the selection. Equal to `start` for single-value modes.
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Creates a range.
    ///
    /// # Panics
    ///
    /// Panics if `end` precedes `start`. Use [`DateRange::new_normalized`] to
    /// clamp instead.
    #[must_use]
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        assert!(
            start <= end,
            "DateRange end ({end}) must not precede start ({start})"
        );
        Self { start, end }
    }

    /// Creates a range, clamping `end` up to `start` if it precedes it.
    #[must_use]
    pub fn new_normalized(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A range where start and end coincide.
    #[must_use]
    pub fn single(at: NaiveDateTime) -> Self {
        Self { start: at, end: at }
    }

    /// Returns `true` if start and end fall on the same calendar day.
    #[must_use]
    pub fn is_single_day(&self) -> bool {
        self.start.date() == self.end.date()
    }
}

/// Which end of a range a calendar page edits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeEnd {
    /// The start of the range.
    Start,
    /// The end of the range.
    End,
}

/// The kinds of sub-picker a session can be made of.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SubPickerKind {
    /// A calendar grid at day granularity.
    Calendar {
        /// The end of a range this calendar edits, or `None` for a single day.
        range_end: Option<RangeEnd>,
    },
    /// A time-of-day wheel.
    Time,
    /// A combined date and time wheel.
    CombinedDateTime {
        /// Whether the picker edits a start/end pair.
        range: bool,
    },
}

/// Everything needed to build one sub-picker page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubPickerSpec {
    /// Which sub-picker to build.
    pub kind: SubPickerKind,
    /// Initial selection.
    pub selection: DateRange,
}

/// Identifies a page within a picker session.
///
/// Ids from a previous session never match pages of a later one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PageId {
    pub(crate) session: u64,
    pub(crate) index: usize,
}

impl PageId {
    /// Position of the page within its session.
    #[must_use]
    pub fn index(self) -> usize {
        self.index
    }
}
