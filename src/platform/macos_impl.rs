use core_foundation::array::{CFArray, CFArrayRef};
use core_foundation::base::{CFTypeID, TCFType};
use core_foundation::dictionary::{CFDictionary, CFDictionaryRef};
use core_foundation::string::{CFString, CFStringRef};
use core_foundation::{declare_TCFType, impl_TCFType};
use core_foundation_sys::base::{Boolean, OSStatus};

use crate::error::{Error, Result};

use super::InputSourceService;

/// 基于 Carbon/HIToolbox 文本输入源 (TIS) API 的实现
#[derive(Debug, Default, Clone, Copy)]
pub struct TisInputSources;

impl InputSourceService for TisInputSources {
    fn current_source_id(&self) -> Result<String> {
        let raw = unsafe { TISCopyCurrentKeyboardInputSource() };
        if raw.is_null() {
            return Err(Error::NoCurrentSource);
        }
        // Copy 规则：由 wrapper 负责释放
        let source = unsafe { TISInputSource::wrap_under_create_rule(raw) };
        let id = source_id(&source).ok_or(Error::MissingSourceId)?;
        log::debug!("current input source: {}", id);
        Ok(id)
    }

    fn select_source(&self, id: &str) -> Result<bool> {
        // 过滤字典 { kTISPropertyInputSourceID: id }
        let key = unsafe { CFString::wrap_under_get_rule(kTISPropertyInputSourceID) };
        let filter = CFDictionary::from_CFType_pairs(&[(key, CFString::new(id))]);

        let list = unsafe { TISCreateInputSourceList(filter.as_concrete_TypeRef(), 0) };
        if list.is_null() {
            log::debug!("no input source list returned for '{}'", id);
            return Ok(false);
        }
        let sources: CFArray<TISInputSource> = unsafe { CFArray::wrap_under_create_rule(list) };
        log::debug!("{} input source(s) match '{}'", sources.len(), id);

        // 选择第一个匹配的输入源
        let Some(first) = sources.get(0) else {
            return Ok(false);
        };
        let status = unsafe { TISSelectInputSource(first.as_concrete_TypeRef()) };
        if status != 0 {
            return Err(Error::SelectFailed {
                id: id.to_string(),
                status,
            });
        }
        Ok(true)
    }
}

fn source_id(source: &TISInputSource) -> Option<String> {
    let id = unsafe {
        TISGetInputSourceProperty(source.as_concrete_TypeRef(), kTISPropertyInputSourceID)
    };
    if id.is_null() {
        return None;
    }
    // Get 规则：属性归 source 所有
    let id = unsafe { CFString::wrap_under_get_rule(id) }.to_string();
    (!id.is_empty()).then_some(id)
}

#[repr(C)]
pub struct __TISInputSource {
    _private: i32,
}

pub type TISInputSourceRef = *const __TISInputSource;

declare_TCFType!(TISInputSource, TISInputSourceRef);
impl_TCFType!(TISInputSource, TISInputSourceRef, TISInputSourceGetTypeID);

#[link(name = "Carbon", kind = "framework")]
extern "C" {
    static kTISPropertyInputSourceID: CFStringRef;

    fn TISInputSourceGetTypeID() -> CFTypeID;
    fn TISCopyCurrentKeyboardInputSource() -> TISInputSourceRef;
    fn TISCreateInputSourceList(
        properties: CFDictionaryRef,
        include_all_installed: Boolean,
    ) -> CFArrayRef;
    fn TISGetInputSourceProperty(source: TISInputSourceRef, key: CFStringRef) -> CFStringRef;
    fn TISSelectInputSource(source: TISInputSourceRef) -> OSStatus;
}
