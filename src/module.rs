use std::sync::OnceLock;

use emacs::{defun, Env, IntoLisp, Result, Value};

use crate::config::Config;

emacs::plugin_is_GPL_compatible!();

static CONFIG: OnceLock<Config> = OnceLock::new();

#[emacs::module(name = "macim", separator = "-", mod_in_name = false)]
fn init(env: &Env) -> Result<Value<'_>> {
    let config = Config::from_env()?;
    crate::logging::init(config.log_filter.as_deref(), false);
    log::debug!("macim loaded with {:?}", config.verify);
    // Reloads keep the configuration from the first load.
    let _ = CONFIG.set(config);
    ().into_lisp(env)
}

fn bridge() -> crate::InputSourceBridge<crate::platform::SystemInputSources> {
    let verify = CONFIG.get().map(|c| c.verify).unwrap_or_default();
    crate::system_bridge(verify)
}

/// Get name of current input source.
#[defun]
fn get() -> Result<String> {
    Ok(bridge().get_current_input_source()?)
}

/// Set current input source to ID.
///
/// Return t if a matching input source was selected, nil if none matches.
#[defun]
fn set(id: String) -> Result<bool> {
    Ok(bridge().set_current_input_source(&id)?)
}
