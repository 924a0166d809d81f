#![no_main]

use libfuzzer_sys::fuzz_target;
use std::collections::HashSet;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(model) = offmodel::parse_off(text) else {
        return;
    };
    // Non-finite channels have no decimal spelling, so they cannot round-trip
    let colors = model
        .vertices_color
        .iter()
        .chain(&model.faces_color)
        .chain(&model.edges_color)
        .flatten();
    if colors.flat_map(|c| c.channels()).any(|v| !v.is_finite()) {
        return;
    }

    // Anything that parsed and validated must survive a write and re-read
    let written = model.to_off_string().expect("writing a valid model");
    let reparsed = offmodel::parse_off(&written).expect("re-reading written OFF");

    assert_eq!(model.vertices.len(), reparsed.vertices.len());
    assert_eq!(model.faces, reparsed.faces);
    let a: HashSet<_> = model.edges.iter().collect();
    let b: HashSet<_> = reparsed.edges.iter().collect();
    assert_eq!(a, b);
});
