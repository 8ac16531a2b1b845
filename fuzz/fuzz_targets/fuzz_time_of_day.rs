// Fuzz target feeding arbitrary input to the hh:mm:ss parser.
#![no_main]

use libfuzzer_sys::fuzz_target;
use logline_walltime::TimeOfDay;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(value) = TimeOfDay::parse(text) {
        assert_eq!(value.to_string(), text);
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(text) {
        let _ = TimeOfDay::parse_value(&json);
        if let Some(map) = json.as_object() {
            let _ = TimeOfDay::from_fields(map);
        }
    }
});
