//! Hygiene: scans `src/` for patterns that crash the page or silently drop
//! errors. Each pattern has a budget of zero; test files are exempt.

use std::fs;
use std::path::Path;

struct SourceFile {
    path: String,
    content: String,
}

/// Production `.rs` files under `src/`, skipping sibling `_test.rs` files.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
            continue;
        }
        let path_str = path.to_string_lossy().to_string();
        if path.extension().is_none_or(|e| e != "rs") || path_str.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path: path_str, content });
        }
    }
}

/// Lines containing `pattern`, as `path:line` locations.
fn find(files: &[SourceFile], pattern: &str) -> Vec<String> {
    files
        .iter()
        .flat_map(|file| {
            file.content
                .lines()
                .enumerate()
                .filter(|(_, line)| line.contains(pattern))
                .map(|(i, _)| format!("  {}:{}", file.path, i + 1))
        })
        .collect()
}

fn assert_absent(pattern: &str, why: &str) {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");
    let hits = find(&files, pattern);
    assert!(hits.is_empty(), "`{pattern}` found ({why}):\n{}", hits.join("\n"));
}

// Panics: a panic inside a frame callback kills the animation.

#[test]
fn no_unwrap() {
    assert_absent(".unwrap()", "panics");
}

#[test]
fn no_expect() {
    assert_absent(".expect(", "panics");
}

#[test]
fn no_panic() {
    assert_absent("panic!(", "panics");
}

#[test]
fn no_unreachable() {
    assert_absent("unreachable!(", "panics");
}

#[test]
fn no_todo_or_unimplemented() {
    assert_absent("todo!(", "stub");
    assert_absent("unimplemented!(", "stub");
}

// Silent loss: errors must be logged or propagated.

#[test]
fn no_silent_discard() {
    assert_absent("let _ =", "discards a value without inspecting it");
}

#[test]
fn no_dot_ok() {
    assert_absent(".ok()", "drops the error");
}

// Style.

#[test]
fn no_allow_dead_code() {
    assert_absent("#[allow(dead_code)]", "delete unused code instead");
}

#[test]
fn no_print_macros() {
    assert_absent("println!(", "use the log facade");
    assert_absent("eprintln!(", "use the log facade");
}

#[test]
fn shared_constants_are_documented() {
    let content = fs::read_to_string("src/consts.rs").unwrap_or_default();
    assert!(!content.is_empty(), "src/consts.rs not found; run from the crate root");
    let lines: Vec<&str> = content.lines().collect();
    let undocumented: Vec<String> = lines
        .iter()
        .enumerate()
        .filter(|(i, line)| {
            line.starts_with("pub const ") && (*i == 0 || !lines[i - 1].trim_start().starts_with("///"))
        })
        .map(|(i, line)| format!("  src/consts.rs:{}: {line}", i + 1))
        .collect();
    assert!(undocumented.is_empty(), "undocumented constants:\n{}", undocumented.join("\n"));
}
