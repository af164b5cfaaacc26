use std::thread;

use crate::config::VerifyPolicy;
use crate::error::{Error, Result};
use crate::platform::InputSourceService;

/// The two operations exposed to the host, on top of an input source service.
#[derive(Debug, Default)]
pub struct InputSourceBridge<S> {
    service: S,
    verify: VerifyPolicy,
}

impl<S: InputSourceService> InputSourceBridge<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            verify: VerifyPolicy::none(),
        }
    }

    pub fn with_verify(mut self, verify: VerifyPolicy) -> Self {
        self.verify = verify;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Identifier of the active input source. Never empty on success.
    pub fn get_current_input_source(&self) -> Result<String> {
        let id = self.service.current_source_id()?;
        if id.is_empty() {
            return Err(Error::MissingSourceId);
        }
        Ok(id)
    }

    /// Switch to the first installed input source matching `id`.
    ///
    /// Returns `false` if nothing matches. With verification disabled `true`
    /// only means the request was issued; otherwise the switch has been
    /// observed or [`Error::NotConfirmed`] is returned.
    pub fn set_current_input_source(&self, id: &str) -> Result<bool> {
        if id.is_empty() {
            return Ok(false);
        }
        if !self.service.select_source(id)? {
            log::debug!("input source '{}' not found", id);
            return Ok(false);
        }
        log::debug!("requested input source '{}'", id);
        if self.verify.is_enabled() {
            self.confirm(id)?;
        }
        Ok(true)
    }

    fn confirm(&self, id: &str) -> Result<()> {
        let mut last = None;
        for attempt in 1..=self.verify.attempts {
            thread::sleep(self.verify.interval);
            match self.service.current_source_id() {
                Ok(current) if current == id => {
                    log::debug!("input source '{}' confirmed after {} read(s)", id, attempt);
                    return Ok(());
                }
                Ok(current) => last = Some(current),
                Err(err) => log::debug!("confirmation read {} failed: {}", attempt, err),
            }
        }
        log::warn!(
            "input source '{}' not active after {} read(s), last seen {:?}",
            id,
            self.verify.attempts,
            last
        );
        Err(Error::NotConfirmed {
            id: id.to_string(),
            last,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::platform::FakeInputSources;

    const US: &str = "com.apple.keylayout.US";
    const KOTOERI: &str = "com.apple.inputmethod.Kotoeri.Japanese";
    const BOGUS: &str = "com.nonexistent.bogus";

    fn bridge() -> InputSourceBridge<FakeInputSources> {
        InputSourceBridge::new(FakeInputSources::new([US, KOTOERI]))
    }

    fn verified(attempts: u32) -> VerifyPolicy {
        VerifyPolicy::new(attempts, Duration::ZERO)
    }

    #[test]
    fn switches_between_layout_and_input_method() {
        let bridge = bridge();
        assert_eq!(bridge.get_current_input_source().unwrap(), US);
        assert!(bridge.set_current_input_source(KOTOERI).unwrap());
        assert_eq!(bridge.get_current_input_source().unwrap(), KOTOERI);
        assert!(!bridge.set_current_input_source(BOGUS).unwrap());
        assert_eq!(bridge.get_current_input_source().unwrap(), KOTOERI);
    }

    #[test]
    fn unknown_source_leaves_active_source_alone() {
        let bridge = bridge();
        assert!(!bridge.set_current_input_source(BOGUS).unwrap());
        assert_eq!(bridge.service().active().as_deref(), Some(US));
        assert_eq!(bridge.service().selections(), 0);
    }

    #[test]
    fn reselecting_current_source_is_a_no_op() {
        let bridge = bridge();
        let current = bridge.get_current_input_source().unwrap();
        assert!(bridge.set_current_input_source(&current).unwrap());
        assert_eq!(bridge.get_current_input_source().unwrap(), current);
    }

    #[test]
    fn empty_identifier_never_reaches_the_platform() {
        let bridge = bridge();
        assert!(!bridge.set_current_input_source("").unwrap());
        assert_eq!(bridge.service().selections(), 0);
    }

    #[test]
    fn missing_current_source_is_an_error() {
        let bridge = InputSourceBridge::new(FakeInputSources::new(Vec::<String>::new()));
        assert_eq!(bridge.get_current_input_source(), Err(Error::NoCurrentSource));
    }

    #[test]
    fn empty_identifier_from_platform_is_an_error() {
        let bridge = InputSourceBridge::new(FakeInputSources::new([""]));
        assert_eq!(bridge.get_current_input_source(), Err(Error::MissingSourceId));
    }

    #[test]
    fn verification_confirms_observed_switch() {
        let bridge = bridge().with_verify(verified(3));
        assert!(bridge.set_current_input_source(KOTOERI).unwrap());
        assert_eq!(bridge.service().reads(), 1);
    }

    #[test]
    fn verification_reports_switch_that_never_happened() {
        let service = FakeInputSources::new([US, KOTOERI]).ignoring_selection();
        let bridge = InputSourceBridge::new(service).with_verify(verified(4));
        assert_eq!(
            bridge.set_current_input_source(KOTOERI),
            Err(Error::NotConfirmed {
                id: KOTOERI.to_string(),
                last: Some(US.to_string()),
            })
        );
        assert_eq!(bridge.service().reads(), 4);
        assert_eq!(bridge.service().selections(), 1);
    }

    #[test]
    fn verification_with_unreadable_source_reports_nothing_seen() {
        let service = FakeInputSources::new([US, KOTOERI]).failing_reads();
        let bridge = InputSourceBridge::new(service).with_verify(verified(3));
        assert_eq!(
            bridge.set_current_input_source(KOTOERI),
            Err(Error::NotConfirmed {
                id: KOTOERI.to_string(),
                last: None,
            })
        );
        assert_eq!(bridge.service().reads(), 3);
    }

    #[test]
    fn without_verification_request_alone_counts_as_success() {
        let service = FakeInputSources::new([US, KOTOERI]).ignoring_selection();
        let bridge = InputSourceBridge::new(service);
        assert!(bridge.set_current_input_source(KOTOERI).unwrap());
        assert_eq!(bridge.service().reads(), 0);
        assert_eq!(bridge.get_current_input_source().unwrap(), US);
    }

    #[test]
    fn verification_skipped_for_unknown_source() {
        let bridge = bridge().with_verify(verified(5));
        assert!(!bridge.set_current_input_source(BOGUS).unwrap());
        assert_eq!(bridge.service().reads(), 0);
    }
}
