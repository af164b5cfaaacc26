//! Query and switch the active macOS keyboard input source.
//!
//! Built as a dynamic module, the library registers `macim-get` and
//! `macim-set` with Emacs. The same bridge also backs the `macim` binary.

pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod platform;

#[cfg(target_os = "macos")]
mod module;

pub use bridge::InputSourceBridge;
pub use config::{Config, VerifyPolicy};
pub use error::{Error, Result};
pub use platform::InputSourceService;

/// Bridge over the platform's own input source registry.
pub fn system_bridge(verify: VerifyPolicy) -> InputSourceBridge<platform::SystemInputSources> {
    InputSourceBridge::new(platform::system()).with_verify(verify)
}
