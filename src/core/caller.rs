//! Call site resolution
//!
//! Walks the captured call stack to find the function that actually produced
//! a log call, past this crate's own frames, past the standard library, and
//! past the first external module (typically the host logging crate or a
//! thin wrapper), whose frames are classified and skipped as a block.
//!
//! Module identity is the root path segment of the demangled symbol (the
//! crate name). Symbols with no path separator at all yield an empty
//! identity, so such frames are classified against nothing and the result
//! can shift by one frame. That failure mode is silent; resolution degrades
//! to the `unknown` sentinel rather than erroring.

use std::path::{Path, PathBuf};

/// Frames to drop before capturing: the unwinder's entry points and this
/// module's own capture machinery.
const SKIPPED_FRAMES: usize = 3;

/// Frames to capture for the walk.
const MAX_FRAMES: usize = 10;

/// Source paths under this root belong to the standard runtime. Release
/// toolchains remap their sources here; locally built ones are caught by the
/// crate-name check instead.
const RUNTIME_ROOT: &str = "/rustc/";

/// A resolved call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Caller {
    pub function: String,
    pub line: u32,
}

#[derive(Debug, Clone, Default)]
struct FrameInfo {
    name: Option<String>,
    file: Option<PathBuf>,
    line: Option<u32>,
}

/// Resolve the external call site of the current log call, or `None` when
/// the walk exhausts its captured frames. Never panics.
pub(crate) fn resolve() -> Option<Caller> {
    let frames = capture();
    find_external_frame(&frames)
}

fn capture() -> Vec<FrameInfo> {
    let mut frames = Vec::with_capacity(MAX_FRAMES);
    let mut skipped = 0usize;

    backtrace::trace(|frame| {
        if skipped < SKIPPED_FRAMES {
            skipped += 1;
            return true;
        }

        let mut info = FrameInfo::default();
        backtrace::resolve_frame(frame, |symbol| {
            // resolve callbacks repeat for inlined frames; keep the first
            if info.name.is_none() {
                info.name = symbol.name().map(|n| n.to_string());
            }
            if info.file.is_none() {
                info.file = symbol.filename().map(Path::to_path_buf);
            }
            if info.line.is_none() {
                info.line = symbol.lineno();
            }
        });
        frames.push(info);
        frames.len() < MAX_FRAMES
    });

    frames
}

/// Walk the captured frames innermost-first and return the first frame that
/// belongs neither to our own module, nor to the runtime, nor to the first
/// external module seen (the calling module, which keeps getting skipped
/// once classified).
fn find_external_frame(frames: &[FrameInfo]) -> Option<Caller> {
    let own_module = frames
        .first()
        .and_then(|f| f.name.as_deref())
        .map(|name| split_symbol(name).0.to_string())
        .unwrap_or_default();

    let mut calling_module = String::new();
    for frame in frames {
        let Some(name) = frame.name.as_deref() else {
            continue;
        };
        let (module, function) = split_symbol(name);

        if module == own_module {
            continue;
        }
        if !calling_module.is_empty() && module == calling_module {
            continue;
        }
        if is_runtime_frame(module, frame.file.as_deref()) {
            continue;
        }
        if calling_module.is_empty() {
            calling_module = module.to_string();
            continue;
        }
        return Some(Caller {
            function: function.to_string(),
            line: frame.line.unwrap_or(0),
        });
    }
    None
}

fn is_runtime_frame(module: &str, file: Option<&Path>) -> bool {
    if matches!(module, "std" | "core" | "alloc" | "test") {
        return true;
    }
    file.is_some_and(|path| path.starts_with(RUNTIME_ROOT))
}

/// Split a demangled symbol into (module identity, function name).
///
/// The module identity is the root path segment; for receiver-qualified
/// symbols (`<Type as Trait>::method`) it comes from the receiver type's
/// path and the function name keeps the qualified form. A trailing legacy
/// hash segment (`::h` + 16 hex digits) is dropped first. Symbols without
/// any `::` separator return two empty strings.
fn split_symbol(name: &str) -> (&str, &str) {
    let name = strip_hash_suffix(name);

    if let Some(inner) = name.strip_prefix('<') {
        let module = inner.split("::").next().unwrap_or("");
        return (module, name);
    }

    match name.find("::") {
        Some(idx) => (&name[..idx], &name[idx + 2..]),
        None => ("", ""),
    }
}

fn strip_hash_suffix(name: &str) -> &str {
    if let Some(idx) = name.rfind("::h") {
        let tail = &name[idx + 3..];
        if tail.len() == 16 && tail.bytes().all(|b| b.is_ascii_hexdigit()) {
            return &name[..idx];
        }
    }
    name
}
