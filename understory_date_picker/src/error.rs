// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors reported by the picker coordinator.

use thiserror::Error;

use crate::types::PageId;

/// Errors reported by [`DateTimePicker`](crate::DateTimePicker).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum PickerError {
    /// An event arrived while no session was open.
    #[error("no picker session is open")]
    NoActiveSession,
    /// An event arrived from a page that is not part of the open session.
    #[error("page {0:?} is not part of the open picker session")]
    UnknownPage(PageId),
}
