use crate::{RequestFailed, ResultOnError};
use clicker_types::HelloResponse;
use dioxus::prelude::*;
use std::{cell::RefCell, rc::Rc};

/// The label every failure string starts with.
pub const ERROR_LABEL: &str = "Failed to connect to server: ";

/// Everything the clicker remembers between renders.
///
/// Empty strings mean "nothing to show". `click_count` is only ever copied from a server response,
/// never bumped locally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickState {
    pub message: String,
    pub loading: bool,
    pub error: String,
    pub click_count: u64,
}

impl ClickState {
    /// Start a new attempt. Returns `false` without touching anything if one is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }

        self.loading = true;
        self.error.clear();
        true
    }

    /// Apply the outcome of the attempt started by [`ClickState::begin`].
    pub fn settle(&mut self, outcome: &Result<HelloResponse, RequestFailed>, policy: ResultOnError) {
        match outcome {
            Ok(res) => {
                self.message = res.message.clone();
                self.click_count = res.click_count;
            }
            Err(err) => {
                self.error = format!("{ERROR_LABEL}{err}");
                if policy == ResultOnError::ClearResult {
                    self.message.clear();
                    self.click_count = 0;
                }
            }
        }

        self.loading = false;
    }
}

/// A place the controller can read and write a [`ClickState`] through.
///
/// Inside a component this is a `Signal`, so every write triggers a rerender. Outside of Dioxus a
/// plain value or an `Rc<RefCell<_>>` works just as well.
pub trait StateCell {
    fn update<R>(&mut self, f: impl FnOnce(&mut ClickState) -> R) -> R;
}

impl StateCell for ClickState {
    fn update<R>(&mut self, f: impl FnOnce(&mut ClickState) -> R) -> R {
        f(self)
    }
}

impl StateCell for Rc<RefCell<ClickState>> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ClickState) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl StateCell for Signal<ClickState> {
    fn update<R>(&mut self, f: impl FnOnce(&mut ClickState) -> R) -> R {
        f(&mut self.write())
    }
}
