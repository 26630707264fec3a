#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse → display → parse must not panic at any step.
        if let Ok(key) = fisco::core::AccessKey::parse(s) {
            let _ = fisco::core::AccessKey::parse(key.to_string());
        }
    }
});
