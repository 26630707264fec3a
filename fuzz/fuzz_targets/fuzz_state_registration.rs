#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let uf = fisco::core::Uf::ALL[selector as usize % fisco::core::Uf::ALL.len()];
    if let Ok(s) = std::str::from_utf8(rest) {
        // Must not panic for any UF and any input.
        let _ = fisco::core::validate_state_registration(s, uf);
    }
});
