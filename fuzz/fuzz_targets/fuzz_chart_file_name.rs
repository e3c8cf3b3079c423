#![no_main]

use cta_ridership_analyzer::visualization::chart_file_name;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|title: &str| {
    let name = chart_file_name(title);
    assert!(name.ends_with(".svg"));
    assert!(!name.contains('/'));
});
