#![allow(dead_code)]

use assert_cmd::Command;
use regex::bytes::Regex;

pub fn letters_cmd() -> Command {
    let mut cmd = Command::cargo_bin("letters").unwrap();
    cmd.env_remove("LETTERS_ROOT");
    cmd.env_remove("LETTERS_OUTPUT_DIR");
    cmd.env_remove("LETTERS_LOG");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Literal text of every `Tj` operator, in content-stream order, decoded from Latin-1
pub fn text_runs(pdf: &[u8]) -> Vec<String> {
    let re = Regex::new(r"(?-u)\(((?:\\.|[^\\)])*)\) Tj").unwrap();
    re.captures_iter(pdf)
        .map(|caps| unescape(&caps[1]))
        .collect()
}

/// Number of page objects in the file
pub fn page_count(pdf: &[u8]) -> usize {
    let re = Regex::new(r"/Type /Page /").unwrap();
    re.find_iter(pdf).count()
}

fn unescape(raw: &[u8]) -> String {
    let mut out = String::new();
    let mut iter = raw.iter();
    while let Some(&b) = iter.next() {
        let b = if b == b'\\' {
            match iter.next() {
                Some(b'r') => b'\r',
                Some(&escaped) => escaped,
                None => break,
            }
        } else {
            b
        };
        out.push(char::from(b));
    }
    out
}
