//! Source hygiene for the visual engine.
//!
//! Scans `canvas/src` (test files excluded) and fails when a banned pattern
//! shows up. Visuals run inside a `requestAnimationFrame` loop on every page,
//! so a panic or a silently dropped error takes a whole section blank with
//! nothing in the console.
//!
//! Browser bindings are confined to the renderer and the engine shell; the
//! visuals, scene, camera and geometry stay plain Rust so they test natively.

use std::fs;
use std::path::{Path, PathBuf};

/// Files allowed to name `web_sys`, `js_sys` or `wasm_bindgen`.
const BROWSER_MODULES: [&str; 2] = ["render.rs", "engine.rs"];

struct SourceFile {
    path: PathBuf,
    content: String,
}

impl SourceFile {
    fn name(&self) -> &str {
        self.path.file_name().and_then(|n| n.to_str()).unwrap_or_default()
    }

    /// Code lines only; `//` comments and doc comments are skipped.
    fn code_lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.content
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim_start().starts_with("//"))
            .map(|(i, line)| (i + 1, line))
    }
}

fn collect(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|e| e == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if is_rs && !is_test {
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile { path, content });
            }
        }
    }
}

fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect(&Path::new(env!("CARGO_MANIFEST_DIR")).join("src"), &mut files);
    assert!(!files.is_empty(), "no sources found under canvas/src");
    files
}

/// `path:line` for every code line in `files` containing any of `patterns`.
fn offenders<'a>(files: impl IntoIterator<Item = &'a SourceFile>, patterns: &[&str]) -> Vec<String> {
    files
        .into_iter()
        .flat_map(|file| {
            file.code_lines()
                .filter(|(_, line)| patterns.iter().any(|p| line.contains(p)))
                .map(|(n, _)| format!("{}:{n}", file.path.display()))
                .collect::<Vec<_>>()
        })
        .collect()
}

fn assert_none(what: &str, hits: &[String]) {
    assert!(hits.is_empty(), "{what} found in canvas/src:\n  {}", hits.join("\n  "));
}

#[test]
fn no_panicking_calls() {
    let files = production_sources();
    let hits = offenders(&files, &[".unwrap()", ".expect(", "panic!(", "unreachable!("]);
    assert_none("panicking call", &hits);
}

#[test]
fn no_unfinished_stubs() {
    let files = production_sources();
    assert_none("stub macro", &offenders(&files, &["todo!(", "unimplemented!("]));
}

#[test]
fn no_silently_discarded_results() {
    let files = production_sources();
    assert_none("discarded result", &offenders(&files, &["let _ =", ".ok()"]));
}

#[test]
fn no_dead_code_allowances() {
    let files = production_sources();
    assert_none("#[allow(dead_code)]", &offenders(&files, &["allow(dead_code)"]));
}

#[test]
fn browser_bindings_stay_in_renderer_and_engine() {
    let files = production_sources();
    let outside = files.iter().filter(|f| !BROWSER_MODULES.contains(&f.name()));
    let hits = offenders(outside, &["web_sys", "js_sys", "wasm_bindgen"]);
    assert_none("browser binding outside render.rs/engine.rs", &hits);
}

#[test]
fn pointer_input_is_guarded_against_non_finite_values() {
    let files = production_sources();
    let engine = files.iter().find(|f| f.name() == "engine.rs");
    let Some(engine) = engine else {
        panic!("engine.rs not found");
    };
    assert!(
        engine.content.contains("is_finite()"),
        "engine.rs must reject non-finite pointer and time inputs before clamping"
    );
}
