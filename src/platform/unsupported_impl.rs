use crate::error::{Error, Result};

use super::InputSourceService;

/// 非 macOS 平台：仅保证可以编译，所有调用均返回 `Error::Unsupported`
#[derive(Debug, Default, Clone, Copy)]
pub struct Unsupported;

impl InputSourceService for Unsupported {
    fn current_source_id(&self) -> Result<String> {
        log::debug!("input source query requested on an unsupported platform");
        Err(Error::Unsupported)
    }

    fn select_source(&self, id: &str) -> Result<bool> {
        log::debug!("input source '{}' requested on an unsupported platform", id);
        Err(Error::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_call_fails() {
        let service = Unsupported;
        assert_eq!(service.current_source_id(), Err(Error::Unsupported));
        assert_eq!(
            service.select_source("com.apple.keylayout.US"),
            Err(Error::Unsupported)
        );
    }
}
