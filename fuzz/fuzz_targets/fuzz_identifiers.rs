#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic — errors are fine, panics are bugs.
        let _ = fisco::core::validate_cpf(s);
        let _ = fisco::core::validate_cnpj(s);
        if let Ok(id) = fisco::core::TaxpayerId::parse(s) {
            let _ = id.is_valid();
            let _ = id.formatted();
        }
    }
});
