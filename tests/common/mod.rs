//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::BTreeMap;

use pathswap::mapping::MappingTable;

/// Table with no custom overrides
pub fn empty_table() -> MappingTable {
    MappingTable::empty()
}

/// Build a mapping table from `(drive, mount)` pairs
pub fn table_with(entries: &[(&str, &str)]) -> MappingTable {
    let map: BTreeMap<String, String> = entries
        .iter()
        .map(|(drive, mount)| (drive.to_string(), mount.to_string()))
        .collect();
    MappingTable::new(&map).expect("test mapping should be a bijection")
}

/// Rewrite `line` for a single cursor the way the CLI host does:
/// auto-detect the raw marker, convert, splice the replacement back in.
/// Returns the line unchanged when the cursor is outside any string.
pub fn rewrite_at(line: &str, cursor: usize, table: &MappingTable) -> String {
    let outcomes = pathswap::swap::swap_at_cursors(line, &[cursor], table, |span| {
        pathswap::host::detect_raw_marker(line, span)
    })
    .expect("conversion should succeed");
    pathswap::host::apply_all(line, &outcomes)
}
