// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The date/time picker coordinator and its sessions.
//!
//! A [`DateTimePicker`] presents one [`PickerSession`] at a time. A session is
//! a paged card of one or two sub-pickers planned by
//! [`plan_pages`](crate::plan::plan_pages). The coordinator keeps every page
//! showing the same selection: a live change on one page is pushed into all
//! the others. Confirmation goes through the host's
//! [`DateTimePickerDelegate`], which may veto it.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use chrono::NaiveDateTime;
use tracing::{debug, trace, warn};

use crate::error::PickerError;
use crate::plan::plan_pages;
use crate::sub_picker::{SubPicker, SubPickerFactory};
use crate::types::{AccessibilityMode, DateRange, DateTimePickerMode, PageId, SubPickerKind};

/// Receives the outcome of a picker session.
pub trait DateTimePickerDelegate {
    /// Called once with the final selection when confirmation is accepted.
    fn did_confirm(&mut self, selection: DateRange);

    /// Decides whether a confirmation should be accepted.
    ///
    /// Returning `false` keeps the session open. Defaults to `true`.
    fn should_confirm(&mut self, selection: &DateRange) -> bool {
        let _ = selection;
        true
    }
}

/// Result of [`DateTimePicker::confirm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmOutcome {
    /// The delegate accepted the selection; the session is closed.
    Accepted(DateRange),
    /// The delegate vetoed the selection; the session stays open.
    Rejected,
}

struct Page {
    id: PageId,
    picker: Box<dyn SubPicker>,
}

/// The sub-pickers presented together for one selection.
pub struct PickerSession {
    mode: DateTimePickerMode,
    selection: DateRange,
    pages: Vec<Page>,
    current_page: usize,
}

impl fmt::Debug for PickerSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<SubPickerKind> = self.pages.iter().map(|p| p.picker.kind()).collect();
        f.debug_struct("PickerSession")
            .field("mode", &self.mode)
            .field("selection", &self.selection)
            .field("pages", &kinds)
            .field("current_page", &self.current_page)
            .finish()
    }
}

impl PickerSession {
    /// The mode the session was presented with.
    #[must_use]
    pub fn mode(&self) -> DateTimePickerMode {
        self.mode
    }

    /// The selection shared by every page.
    #[must_use]
    pub fn selection(&self) -> DateRange {
        self.selection
    }

    /// Number of pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the session has no pages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Ids of the pages, in paging order.
    pub fn page_ids(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages.iter().map(|p| p.id)
    }

    /// The sub-picker on page `id`.
    #[must_use]
    pub fn page(&self, id: PageId) -> Option<&dyn SubPicker> {
        self.find(id).map(|p| p.picker.as_ref())
    }

    /// The sub-picker at paging position `index`.
    #[must_use]
    pub fn page_at(&self, index: usize) -> Option<&dyn SubPicker> {
        self.pages.get(index).map(|p| p.picker.as_ref())
    }

    /// Index of the page currently shown.
    #[must_use]
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Pages to `index`. Returns `false` if there is no such page.
    pub fn show_page(&mut self, index: usize) -> bool {
        if index >= self.pages.len() {
            return false;
        }
        self.current_page = index;
        true
    }

    fn find(&self, id: PageId) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    fn sync_from(&mut self, source: PageId, selection: DateRange) {
        self.selection = selection;
        for page in self.pages.iter_mut().filter(|p| p.id != source) {
            trace!(index = page.id.index, "syncing sibling page");
            page.picker.set_selection(selection);
        }
    }
}

/// Coordinates the sub-pickers of a date/time selection.
#[derive(Debug, Default)]
pub struct DateTimePicker {
    session: Option<PickerSession>,
    generation: u64,
}

impl DateTimePicker {
    /// Creates a coordinator with no open session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The open session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&PickerSession> {
        self.session.as_ref()
    }

    /// The open session, for paging.
    pub fn session_mut(&mut self) -> Option<&mut PickerSession> {
        self.session.as_mut()
    }

    /// Returns `true` while a session is open.
    #[must_use]
    pub fn is_presenting(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session for `mode`, replacing any open one.
    ///
    /// See [`plan_pages`] for how the mode, the dates and the accessibility
    /// mode decide the pages.
    pub fn present(
        &mut self,
        mode: DateTimePickerMode,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        accessibility: AccessibilityMode,
        factory: &mut impl SubPickerFactory,
    ) -> &PickerSession {
        if self.session.is_some() {
            debug!("replacing open picker session");
        }
        self.generation += 1;
        let plan = plan_pages(mode, start, end, accessibility);
        let selection = plan
            .first()
            .map(|spec| spec.selection)
            .unwrap_or_else(|| DateRange::single(start));
        let pages = plan
            .iter()
            .enumerate()
            .map(|(index, spec)| Page {
                id: PageId {
                    session: self.generation,
                    index,
                },
                picker: factory.make(spec),
            })
            .collect::<Vec<_>>();
        debug!(?mode, ?accessibility, pages = pages.len(), "picker session presented");
        self.session.insert(PickerSession {
            mode,
            selection,
            pages,
            current_page: 0,
        })
    }

    /// Handles a selection change the user made on `page` but has not
    /// confirmed. Every other page is updated to match.
    pub fn live_selection_changed(
        &mut self,
        page: PageId,
        selection: DateRange,
    ) -> Result<(), PickerError> {
        let session = self.checked_session(page)?;
        session.sync_from(page, selection);
        Ok(())
    }

    /// Asks the delegate whether `selection` from `page` may be confirmed,
    /// without confirming it.
    pub fn should_confirm(
        &mut self,
        page: PageId,
        selection: DateRange,
        delegate: &mut impl DateTimePickerDelegate,
    ) -> Result<bool, PickerError> {
        self.checked_session(page)?;
        Ok(delegate.should_confirm(&selection))
    }

    /// Handles the user confirming `selection` on `page`.
    ///
    /// If the delegate accepts, the session is closed and
    /// [`DateTimePickerDelegate::did_confirm`] receives the selection.
    /// Otherwise the session stays open, with every page showing `selection`.
    pub fn confirm(
        &mut self,
        page: PageId,
        selection: DateRange,
        delegate: &mut impl DateTimePickerDelegate,
    ) -> Result<ConfirmOutcome, PickerError> {
        let session = self.checked_session(page)?;
        session.sync_from(page, selection);
        if !delegate.should_confirm(&selection) {
            debug!("picker confirmation rejected by delegate");
            return Ok(ConfirmOutcome::Rejected);
        }
        self.session = None;
        debug!(?selection, "picker confirmation accepted");
        delegate.did_confirm(selection);
        Ok(ConfirmOutcome::Accepted(selection))
    }

    /// Closes the open session without confirming.
    ///
    /// The delegate is not consulted. Returns `false` if nothing was open.
    pub fn dismiss(&mut self) -> bool {
        let dismissed = self.session.take().is_some();
        if dismissed {
            debug!("picker session dismissed");
        }
        dismissed
    }

    fn checked_session(&mut self, page: PageId) -> Result<&mut PickerSession, PickerError> {
        let session = self.session.as_mut().ok_or(PickerError::NoActiveSession)?;
        if session.find(page).is_none() {
            warn!(?page, "event from a page outside the open session");
            return Err(PickerError::UnknownPage(page));
        }
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use alloc::boxed::Box;

    use chrono::NaiveDate;

    use super::*;
    use crate::types::SubPickerSpec;

    struct Fixed(SubPickerSpec);

    impl SubPicker for Fixed {
        fn kind(&self) -> SubPickerKind {
            self.0.kind
        }

        fn selection(&self) -> DateRange {
            self.0.selection
        }

        fn set_selection(&mut self, selection: DateRange) {
            self.0.selection = selection;
        }
    }

    fn factory(spec: &SubPickerSpec) -> Box<dyn SubPicker> {
        Box::new(Fixed(*spec))
    }

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid test date")
    }

    #[test]
    fn stale_page_ids_are_rejected() {
        let mut picker = DateTimePicker::new();
        let first = picker
            .present(
                DateTimePickerMode::Date,
                at(10, 0),
                None,
                AccessibilityMode::Standard,
                &mut factory,
            )
            .page_ids()
            .next()
            .expect("one page");
        picker.present(
            DateTimePickerMode::Date,
            at(11, 0),
            None,
            AccessibilityMode::Standard,
            &mut factory,
        );
        assert_eq!(
            picker.live_selection_changed(first, DateRange::single(at(12, 0))),
            Err(PickerError::UnknownPage(first))
        );
    }

    #[test]
    fn events_without_session_fail() {
        let mut picker = DateTimePicker::new();
        let id = PageId {
            session: 0,
            index: 0,
        };
        assert_eq!(
            picker.live_selection_changed(id, DateRange::single(at(1, 0))),
            Err(PickerError::NoActiveSession)
        );
        assert!(!picker.dismiss());
    }

    #[test]
    fn paging_is_bounded() {
        let mut picker = DateTimePicker::new();
        picker.present(
            DateTimePickerMode::DateRange,
            at(10, 0),
            None,
            AccessibilityMode::Standard,
            &mut factory,
        );
        let session = picker.session_mut().expect("open session");
        assert!(session.show_page(1));
        assert_eq!(session.current_page(), 1);
        assert!(!session.show_page(2));
        assert_eq!(session.current_page(), 1);
    }
}
