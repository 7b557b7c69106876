#![no_main]

use libfuzzer_sys::fuzz_target;
use perfdiff::report::{ReportParser, StackObservations};
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Parsing may fail on malformed rows but must never panic
    let parser = ReportParser::new();
    let mut stacks = StackObservations::new();
    let _ = parser.parse(Cursor::new(data), &mut stacks);
});
