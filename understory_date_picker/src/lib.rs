// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_date_picker --heading-base-level=0

//! Understory Date Picker: coordination for paged date and time pickers.
//!
//! This crate decides which sub-pickers make up a date/time selection and keeps
//! them in agreement while the user pages between them. It does not draw
//! calendars or time wheels; hosts implement [`SubPicker`] for their own
//! widgets and hand the coordinator a [`SubPickerFactory`].
//!
//! - [`plan`]: mode dispatch. A [`DateTimePickerMode`] plus start/end dates and
//!   the [`AccessibilityMode`] become one or two [`SubPickerSpec`]s.
//! - [`coordinator`]: [`DateTimePicker`] opens a [`PickerSession`], relays live
//!   selection changes to sibling pages, and routes confirmation through a
//!   [`DateTimePickerDelegate`] that can veto it.
//!
//! ## Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use understory_date_picker::{
//!     AccessibilityMode, ConfirmOutcome, DateRange, DateTimePicker, DateTimePickerDelegate,
//!     DateTimePickerMode, SubPicker, SubPickerKind, SubPickerSpec,
//! };
//!
//! struct Page(SubPickerSpec);
//! impl SubPicker for Page {
//!     fn kind(&self) -> SubPickerKind { self.0.kind }
//!     fn selection(&self) -> DateRange { self.0.selection }
//!     fn set_selection(&mut self, selection: DateRange) { self.0.selection = selection; }
//! }
//!
//! #[derive(Default)]
//! struct Host(Option<DateRange>);
//! impl DateTimePickerDelegate for Host {
//!     fn did_confirm(&mut self, selection: DateRange) { self.0 = Some(selection); }
//! }
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let mut make = |spec: &SubPickerSpec| -> Box<dyn SubPicker> { Box::new(Page(*spec)) };
//!
//! let mut picker = DateTimePicker::new();
//! let session = picker.present(
//!     DateTimePickerMode::DateRange,
//!     start,
//!     None,
//!     AccessibilityMode::Standard,
//!     &mut make,
//! );
//! // Two calendars, defaulting to a one-day range.
//! assert_eq!(session.len(), 2);
//! let pages: Vec<_> = session.page_ids().collect();
//!
//! // Editing the end calendar updates the start calendar too.
//! let end = start + chrono::TimeDelta::days(3);
//! picker.live_selection_changed(pages[1], DateRange::new(start, end)).unwrap();
//! assert_eq!(picker.session().unwrap().page(pages[0]).unwrap().selection().end, end);
//!
//! let mut host = Host::default();
//! let outcome = picker.confirm(pages[1], DateRange::new(start, end), &mut host).unwrap();
//! assert_eq!(outcome, ConfirmOutcome::Accepted(DateRange::new(start, end)));
//! assert_eq!(host.0, Some(DateRange::new(start, end)));
//! assert!(!picker.is_presenting());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod coordinator;
mod error;
pub mod plan;
mod sub_picker;
mod types;

pub use coordinator::{ConfirmOutcome, DateTimePicker, DateTimePickerDelegate, PickerSession};
pub use error::PickerError;
pub use sub_picker::{SubPicker, SubPickerFactory};
pub use types::{
    AccessibilityMode, DateRange, DateTimePickerMode, PageId, RangeEnd, SubPickerKind,
    SubPickerSpec,
};
