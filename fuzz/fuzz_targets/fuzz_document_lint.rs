#![no_main]

use designlint::{lint, Catalogs};
use designlint_model::Document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(doc) = Document::from_json(text) else {
        return;
    };

    // Malformed effects are reported as errors; anything else must lint.
    if let Ok(outcome) = lint(&doc.nodes, &Catalogs::from_document(&doc)) {
        let _ = serde_json::to_string(&outcome);
    }
});
