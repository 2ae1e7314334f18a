//! Generic fetch lifecycle state.

use serde::{Deserialize, Serialize};

use super::FetchStatus;

/// Status, data and error of one remote resource.
///
/// Fields are private: consumers read through accessors and only the
/// lifecycle store mutates a state, through the crate-private transitions
/// below. Every transition keeps the following combinations intact:
///
/// - `Success` holds data and no error
/// - `Error` holds an error message
/// - `Loading` holds no error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "T: Serialize",
    deserialize = "T: Deserialize<'de>"
))]
pub struct FetchState<T> {
    status: FetchStatus,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    error: Option<String>,
}

impl<T> FetchState<T> {
    /// Creates an idle state with no data and no error.
    pub fn new() -> Self {
        Self {
            status: FetchStatus::Idle,
            data: None,
            error: None,
        }
    }

    /// Current lifecycle status.
    pub fn status(&self) -> FetchStatus {
        self.status
    }

    /// Data of the last successful request, if still held.
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Message of the last failed request.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_idle(&self) -> bool {
        self.status == FetchStatus::Idle
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }

    pub fn is_error(&self) -> bool {
        self.status == FetchStatus::Error
    }

    /// Checks the status/data/error combination.
    ///
    /// States built through the transitions are always consistent; this is
    /// for states that came from elsewhere, such as a snapshot file. An
    /// `Error` state must not hold data.
    pub fn is_consistent(&self) -> bool {
        self.is_consistent_with(|_| false)
    }

    /// Like [`FetchState::is_consistent`], but an `Error` state may hold
    /// data for which `is_cleared` returns `true`, such as an empty list.
    pub fn is_consistent_with(&self, is_cleared: impl FnOnce(&T) -> bool) -> bool {
        match self.status {
            FetchStatus::Idle | FetchStatus::Loading => self.error.is_none(),
            FetchStatus::Success => self.data.is_some() && self.error.is_none(),
            FetchStatus::Error => {
                self.error.is_some()
                    && match &self.data {
                        Some(data) => is_cleared(data),
                        None => true,
                    }
            }
        }
    }

    /// Enters `Loading`, clearing the error and optionally the data.
    pub(crate) fn begin(&mut self, retain_data: bool) {
        self.status = FetchStatus::Loading;
        self.error = None;
        if !retain_data {
            self.data = None;
        }
    }

    /// Enters `Success` holding `data`.
    pub(crate) fn succeed(&mut self, data: T) {
        self.status = FetchStatus::Success;
        self.data = Some(data);
        self.error = None;
    }

    /// Enters `Error` holding `message`; the data is replaced by `cleared`.
    pub(crate) fn fail(&mut self, message: String, cleared: Option<T>) {
        self.status = FetchStatus::Error;
        self.data = cleared;
        self.error = Some(message);
    }
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}
