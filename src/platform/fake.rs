use std::cell::{Cell, RefCell};

use crate::error::{Error, Result};

use super::InputSourceService;

/// In-memory stand-in for the OS input source registry.
#[derive(Debug, Default)]
pub struct FakeInputSources {
    installed: Vec<String>,
    active: RefCell<Option<String>>,
    /// Accept selection requests without changing the active source.
    ignore_selection: bool,
    /// Report no active source on every read.
    fail_reads: bool,
    reads: Cell<usize>,
    selections: Cell<usize>,
}

impl FakeInputSources {
    /// Registry with `installed` sources; the first one is active.
    pub fn new<I, S>(installed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let installed: Vec<String> = installed.into_iter().map(Into::into).collect();
        let active = installed.first().cloned();
        Self {
            installed,
            active: RefCell::new(active),
            ..Default::default()
        }
    }

    /// Make selection requests succeed without ever taking effect.
    pub fn ignoring_selection(mut self) -> Self {
        self.ignore_selection = true;
        self
    }

    /// Make every `current_source_id` call fail with `NoCurrentSource`.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn active(&self) -> Option<String> {
        self.active.borrow().clone()
    }

    /// Number of `current_source_id` calls so far.
    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    /// Number of selection requests that found a match.
    pub fn selections(&self) -> usize {
        self.selections.get()
    }
}

impl InputSourceService for FakeInputSources {
    fn current_source_id(&self) -> Result<String> {
        self.reads.set(self.reads.get() + 1);
        if self.fail_reads {
            return Err(Error::NoCurrentSource);
        }
        self.active.borrow().clone().ok_or(Error::NoCurrentSource)
    }

    fn select_source(&self, id: &str) -> Result<bool> {
        let Some(found) = self.installed.iter().find(|s| *s == id) else {
            return Ok(false);
        };
        self.selections.set(self.selections.get() + 1);
        if !self.ignore_selection {
            *self.active.borrow_mut() = Some(found.clone());
        }
        Ok(true)
    }
}
