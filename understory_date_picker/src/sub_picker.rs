// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The contract between the coordinator and its sub-pickers.
//!
//! Sub-pickers (calendar grids, time wheels, combined date-time wheels) are
//! implemented by the host. The coordinator only needs to read and write their
//! selection; user events flow the other way, from the host into
//! [`DateTimePicker`](crate::DateTimePicker) methods tagged with the
//! [`PageId`](crate::PageId) of the page that produced them.

use alloc::boxed::Box;

use crate::types::{DateRange, SubPickerKind, SubPickerSpec};

/// A page of a picker session.
pub trait SubPicker {
    /// Which kind of sub-picker this is.
    fn kind(&self) -> SubPickerKind;

    /// The selection currently shown.
    fn selection(&self) -> DateRange;

    /// Replaces the selection shown, without reporting it back as a user change.
    fn set_selection(&mut self, selection: DateRange);
}

/// Builds sub-pickers for a session.
pub trait SubPickerFactory {
    /// Creates the sub-picker described by `spec`, seeded with its selection.
    fn make(&mut self, spec: &SubPickerSpec) -> Box<dyn SubPicker>;
}

impl<F> SubPickerFactory for F
where
    F: FnMut(&SubPickerSpec) -> Box<dyn SubPicker>,
{
    #[inline]
    fn make(&mut self, spec: &SubPickerSpec) -> Box<dyn SubPicker> {
        self(spec)
    }
}
