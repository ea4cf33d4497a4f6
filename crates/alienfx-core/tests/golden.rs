use std::fs;
use std::path::{Path, PathBuf};

use alienfx_core::{NameTable, decode};

fn golden_dir(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("tests")
        .join("golden")
        .join(name)
}

fn parse_hex_line(line: &str) -> Vec<u8> {
    line.split_whitespace()
        .map(|token| u8::from_str_radix(token, 16).expect("hex byte"))
        .collect()
}

fn run_golden(name: &str) {
    let dir = golden_dir(name);
    let names = NameTable::load(&dir.join("names.json")).expect("load names.json");
    let input = fs::read_to_string(dir.join("input.txt")).expect("read input.txt");
    let expected = fs::read_to_string(dir.join("expected.txt")).expect("read expected.txt");

    let actual: Vec<String> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| decode(&parse_hex_line(line), &names))
        .collect();
    let expected: Vec<&str> = expected.lines().collect();

    assert_eq!(actual, expected, "golden mismatch in {name}");
}

#[test]
fn golden_decode() {
    run_golden("decode");
}
