use crate::error::Result;

// macOS: Carbon Text Input Sources
#[cfg(target_os = "macos")]
mod macos_impl;

// Everything else only builds; every call fails.
#[cfg(not(target_os = "macos"))]
mod unsupported_impl;

#[cfg(any(test, feature = "test-support"))]
mod fake;

#[cfg(target_os = "macos")]
pub use macos_impl::TisInputSources;

#[cfg(not(target_os = "macos"))]
pub use unsupported_impl::Unsupported;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeInputSources;

/// Access to the operating system's registry of keyboard input sources.
///
/// The active input source is process-external state owned by the OS. The
/// bridge only ever reaches it through this trait so tests can swap in an
/// in-memory registry.
pub trait InputSourceService {
    /// Identifier of the currently active input source.
    fn current_source_id(&self) -> Result<String>;

    /// Request that the first installed source matching `id` become active.
    ///
    /// Returns `Ok(false)` when no installed source matches.
    fn select_source(&self, id: &str) -> Result<bool>;
}

/// The service backed by the real platform.
#[cfg(target_os = "macos")]
pub type SystemInputSources = TisInputSources;

#[cfg(not(target_os = "macos"))]
pub type SystemInputSources = Unsupported;

pub fn system() -> SystemInputSources {
    SystemInputSources::default()
}
