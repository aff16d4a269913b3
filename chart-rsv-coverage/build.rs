//! Stages the coverage CSV in OUT_DIR for `include_str!`.
//!
//! A missing fixture becomes an empty file, which the app reports as an
//! empty source at startup. The number of data lines is exported as
//! `RSV_FIXTURE_LINES` so the app can log what it was built with.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const FIXTURE: &str = "../fixtures/rsv_coverage.csv";
const STAGED_NAME: &str = "rsv_coverage.csv";

/// Copy the fixture (or an empty placeholder) and return its data line count.
fn stage(src: &Path, dest: &Path) -> usize {
    let contents = match fs::read_to_string(src) {
        Ok(contents) => contents,
        Err(e) => {
            println!(
                "cargo:warning=Coverage fixture {} unavailable ({}), embedding an empty source",
                src.display(),
                e
            );
            String::new()
        }
    };

    let mut lines = contents.lines().filter(|l| !l.trim().is_empty());
    if let Some(header) = lines.next() {
        if !header.split(',').any(|h| h.trim() == "Week Ending") {
            println!("cargo:warning=Coverage fixture header has no Week Ending column");
        }
    }
    let data_lines = lines.count();

    if let Err(e) = fs::write(dest, &contents) {
        panic!("Failed to stage {} at {}: {}", src.display(), dest.display(), e);
    }
    data_lines
}

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let data_lines = stage(Path::new(FIXTURE), &out_dir.join(STAGED_NAME));

    println!("cargo:rustc-env=RSV_FIXTURE_LINES={}", data_lines);
    println!("cargo:rerun-if-changed={}", FIXTURE);
    println!("cargo:rerun-if-changed=build.rs");
}
