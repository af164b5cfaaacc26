use std::io::{self, Write};
use std::time::Duration;

use crate::bridge::InputSourceBridge;
use crate::config::VerifyPolicy;
use crate::platform::InputSourceService;

/// `--verify-attempts 0` turns confirmation off.
pub fn verify_policy(attempts: u32, interval_ms: u64) -> VerifyPolicy {
    VerifyPolicy::new(attempts, Duration::from_millis(interval_ms))
}

/// Print or switch the input source; returns the process exit code.
pub fn run<S: InputSourceService>(
    bridge: &InputSourceBridge<S>,
    input_source: Option<&str>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<i32> {
    match input_source {
        // 没有参数：获取当前输入源
        None => match bridge.get_current_input_source() {
            Ok(id) => {
                writeln!(out, "{}", id)?;
                Ok(0)
            }
            Err(e) => {
                writeln!(err, "Error getting input source: {}", e)?;
                Ok(1)
            }
        },
        // 有参数：切换到指定输入源
        Some(id) => match bridge.set_current_input_source(id) {
            // 切换成功，静默退出
            Ok(true) => Ok(0),
            Ok(false) => {
                writeln!(err, "Input source '{}' not found", id)?;
                Ok(1)
            }
            Err(e) => {
                writeln!(err, "Error switching input source: {}", e)?;
                Ok(1)
            }
        },
    }
}
