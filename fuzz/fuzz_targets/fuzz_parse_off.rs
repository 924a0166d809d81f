#![no_main]

use libfuzzer_sys::fuzz_target;
use offmodel::{ParserConfig, PolyhedronModel};

fuzz_target!(|data: &[u8]| {
    // Reader path: encoding check, normalization, parsing, validation
    let _ = PolyhedronModel::from_reader(data);

    // Same text without reference validation must not panic either
    if let Ok(text) = std::str::from_utf8(data) {
        let config = ParserConfig::new().without_reference_validation();
        let _ = offmodel::parse_off_with_config(text, &config);
    }
});
