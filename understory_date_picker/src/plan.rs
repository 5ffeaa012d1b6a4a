// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mode dispatch: which sub-pickers a session is made of.

use chrono::{Days, NaiveDateTime};
use smallvec::{SmallVec, smallvec};

use crate::types::{
    AccessibilityMode, DateRange, DateTimePickerMode, RangeEnd, SubPickerKind, SubPickerSpec,
};

/// Pages planned for one session. Sessions have at most two pages.
pub type PagePlan = SmallVec<[SubPickerSpec; 2]>;

/// Resolves the selection a session starts with.
///
/// A missing `end` defaults to one day after `start` for
/// [`DateTimePickerMode::DateRange`] and to `start` otherwise. An `end` before
/// `start` is clamped to `start`.
#[must_use]
pub fn initial_selection(
    mode: DateTimePickerMode,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
) -> DateRange {
    let end = end.unwrap_or_else(|| match mode {
        DateTimePickerMode::DateRange => start.checked_add_days(Days::new(1)).unwrap_or(start),
        _ => start,
    });
    DateRange::new_normalized(start, end)
}

/// Plans the sub-picker pages for `mode`.
///
/// With a screen reader active, every mode collapses to a single combined
/// date-time page seeded with `start` and `end` (or `start` when `end` is
/// missing). Otherwise:
///
/// - `Date`: one calendar.
/// - `DateTime`: a calendar and a time wheel.
/// - `DateRange`: a start calendar and an end calendar.
/// - `DateTimeRange`: a combined date-time page plus a calendar when the range
///   falls on one day; only the combined page when it spans several days.
#[must_use]
pub fn plan_pages(
    mode: DateTimePickerMode,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
    accessibility: AccessibilityMode,
) -> PagePlan {
    if accessibility == AccessibilityMode::ScreenReader {
        return smallvec![SubPickerSpec {
            kind: SubPickerKind::CombinedDateTime {
                range: mode.is_range(),
            },
            selection: DateRange::new_normalized(start, end.unwrap_or(start)),
        }];
    }

    let selection = initial_selection(mode, start, end);
    let page = |kind| SubPickerSpec { kind, selection };

    match mode {
        DateTimePickerMode::Date => smallvec![page(SubPickerKind::Calendar { range_end: None })],
        DateTimePickerMode::DateTime => smallvec![
            page(SubPickerKind::Calendar { range_end: None }),
            page(SubPickerKind::Time),
        ],
        DateTimePickerMode::DateRange => smallvec![
            page(SubPickerKind::Calendar {
                range_end: Some(RangeEnd::Start),
            }),
            page(SubPickerKind::Calendar {
                range_end: Some(RangeEnd::End),
            }),
        ],
        DateTimePickerMode::DateTimeRange => {
            let combined = page(SubPickerKind::CombinedDateTime { range: true });
            if selection.is_single_day() {
                smallvec![combined, page(SubPickerKind::Calendar { range_end: None })]
            } else {
                smallvec![combined]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::*;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid test date")
    }

    fn kinds(plan: &PagePlan) -> alloc::vec::Vec<SubPickerKind> {
        plan.iter().map(|spec| spec.kind).collect()
    }

    #[test]
    fn date_range_defaults_to_one_day() {
        let plan = plan_pages(
            DateTimePickerMode::DateRange,
            at(10, 0),
            None,
            AccessibilityMode::Standard,
        );
        assert_eq!(plan.len(), 2);
        for spec in &plan {
            assert_eq!(spec.selection, DateRange::new(at(10, 0), at(11, 0)));
        }
        assert_eq!(
            kinds(&plan),
            [
                SubPickerKind::Calendar {
                    range_end: Some(RangeEnd::Start)
                },
                SubPickerKind::Calendar {
                    range_end: Some(RangeEnd::End)
                },
            ]
        );
    }

    #[test]
    fn single_value_modes_default_end_to_start() {
        let plan = plan_pages(
            DateTimePickerMode::Date,
            at(10, 8),
            None,
            AccessibilityMode::Standard,
        );
        assert_eq!(
            kinds(&plan),
            [SubPickerKind::Calendar { range_end: None }]
        );
        assert_eq!(plan[0].selection, DateRange::single(at(10, 8)));

        let plan = plan_pages(
            DateTimePickerMode::DateTime,
            at(10, 8),
            None,
            AccessibilityMode::Standard,
        );
        assert_eq!(
            kinds(&plan),
            [
                SubPickerKind::Calendar { range_end: None },
                SubPickerKind::Time
            ]
        );
    }

    #[test]
    fn date_time_range_same_day_has_two_pages() {
        let plan = plan_pages(
            DateTimePickerMode::DateTimeRange,
            at(10, 9),
            Some(at(10, 17)),
            AccessibilityMode::Standard,
        );
        assert_eq!(
            kinds(&plan),
            [
                SubPickerKind::CombinedDateTime { range: true },
                SubPickerKind::Calendar { range_end: None },
            ]
        );
    }

    #[test]
    fn date_time_range_across_days_has_one_page() {
        let plan = plan_pages(
            DateTimePickerMode::DateTimeRange,
            at(10, 9),
            Some(at(12, 17)),
            AccessibilityMode::Standard,
        );
        assert_eq!(
            kinds(&plan),
            [SubPickerKind::CombinedDateTime { range: true }]
        );
        assert_eq!(plan[0].selection, DateRange::new(at(10, 9), at(12, 17)));
    }

    #[test]
    fn screen_reader_always_gets_one_combined_page() {
        for mode in [
            DateTimePickerMode::Date,
            DateTimePickerMode::DateTime,
            DateTimePickerMode::DateRange,
            DateTimePickerMode::DateTimeRange,
        ] {
            let plan = plan_pages(mode, at(10, 9), None, AccessibilityMode::ScreenReader);
            assert_eq!(plan.len(), 1);
            assert_eq!(
                plan[0].kind,
                SubPickerKind::CombinedDateTime {
                    range: mode.is_range()
                }
            );
        }

        // Seeded with (start, end-or-start).
        let plan = plan_pages(
            DateTimePickerMode::DateTimeRange,
            at(10, 9),
            Some(at(11, 9)),
            AccessibilityMode::ScreenReader,
        );
        assert_eq!(plan[0].selection, DateRange::new(at(10, 9), at(11, 9)));

        let plan = plan_pages(
            DateTimePickerMode::DateRange,
            at(10, 9),
            None,
            AccessibilityMode::ScreenReader,
        );
        assert_eq!(plan[0].selection, DateRange::single(at(10, 9)));
    }

    #[test]
    fn inverted_end_is_clamped() {
        let selection = initial_selection(DateTimePickerMode::DateRange, at(10, 9), Some(at(9, 9)));
        assert_eq!(selection, DateRange::single(at(10, 9)));
    }
}
