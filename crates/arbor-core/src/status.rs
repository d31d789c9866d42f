use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one node evaluation.
///
/// Only equality matters to the node algorithms; there is no ordering between variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    Success,
    Failure,
    Running,
}

impl Status {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }

    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, Status::Running)
    }

    /// `true` once the episode has ended, i.e. anything but `Running`.
    #[inline]
    pub fn is_done(self) -> bool {
        !self.is_running()
    }

    /// Swaps `Success` and `Failure`; `Running` is left untouched.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            Status::Success => Status::Failure,
            Status::Failure => Status::Success,
            Status::Running => Status::Running,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Status::Success => "Success",
            Status::Failure => "Failure",
            Status::Running => "Running",
        };
        f.write_str(name)
    }
}
