//! Greedy packing of chunks into width-budgeted lines.
//!
//! Each physical line of the input runs through the same pipeline: tokenize
//! into chunks, optionally force-break chunks wider than the budget, pack the
//! chunks greedily into accumulator lines, then post-process each line
//! (indent, escape transform, trim, blank-line filtering and restoration).
//! The results are flattened in input order; [`wrap`] joins them with the
//! configured terminator.
//!
//! Widths are always compared on visible length ([`visible_width`]), so
//! styled text packs the same way its plain rendering would.

use crate::chunk::{self, Chunk};
use crate::options::WrapOptions;
use crate::width::visible_width;

/// Inputs past this size get a debug event before wrapping starts.
const LARGE_INPUT: usize = 64 * 1024;

/// One packed line, before post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Packed {
    /// Restores a deliberately blank input line.
    Empty,
    /// Accumulated chunk text.
    Text(String),
}

/// Wrap `text` and join the lines with the configured terminator.
///
/// The terminator is `newline` when set, else `eol` (default `"\n"`).
///
/// # Example
/// ```
/// use chunkwrap::{WrapOptions, wrap};
///
/// let opts = WrapOptions::new(8);
/// assert_eq!(wrap("one two three four", &opts), "one two\nthree\nfour");
/// ```
#[must_use]
pub fn wrap(text: &str, options: &WrapOptions) -> String {
    lines(text, options).join(options.line_ending())
}

/// Wrap `text` into an ordered sequence of output lines.
///
/// Physical lines are wrapped independently and their results flattened in
/// order. Originally-empty lines come back as empty strings; lines that trim
/// to nothing (and were not empty to begin with) are dropped.
///
/// # Example
/// ```
/// use chunkwrap::{WrapOptions, lines};
///
/// assert_eq!(lines("a\n\nb", &WrapOptions::default()), ["a", "", "b"]);
/// ```
#[must_use]
pub fn lines(text: &str, options: &WrapOptions) -> Vec<String> {
    if text.len() > LARGE_INPUT {
        tracing::debug!(len = text.len(), width = options.width, "wrapping large input");
    }
    physical_lines(text)
        .into_iter()
        .flat_map(|line| wrap_line(line, options))
        .filter_map(|packed| finish(packed, options))
        .collect()
}

/// Split on any newline variant (`\r\n`, `\r`, `\n`).
///
/// A trailing terminator yields a trailing empty physical line, which the
/// pipeline restores as a blank output line.
fn physical_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut out = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                out.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                out.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    out.push(&text[start..]);
    out
}

/// Tokenize, optionally break, and pack one physical line.
///
/// The packer keeps a running accumulator: a chunk whose visible width would
/// push the accumulated width past the budget starts a new accumulator
/// instead. Chunks supply their own spacing, so accumulation is plain
/// concatenation. A chunk wider than the budget is never split here; it lands
/// alone on its line and every later chunk starts fresh.
fn wrap_line(line: &str, options: &WrapOptions) -> Vec<Packed> {
    let mut packed = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for token in chunk::tokenize(line) {
        let Chunk::Content(run) = token else {
            return vec![Packed::Empty];
        };
        for piece in break_chunk(run, options) {
            let piece_width = visible_width(piece);
            if current_width + piece_width > options.width {
                packed.push(Packed::Text(std::mem::take(&mut current)));
                current_width = 0;
            }
            current.push_str(piece);
            current_width += piece_width;
        }
    }
    packed.push(Packed::Text(current));
    packed
}

/// Subdivide a chunk into pieces of `width` raw chars (the last may be
/// shorter) when force-breaking is on and the chunk's visible width exceeds
/// the budget. Otherwise the chunk comes back whole.
///
/// Pieces are cut at raw char positions, so a boundary may land inside an
/// escape sequence; packing still measures every piece on visible width.
fn break_chunk<'a>(run: &'a str, options: &WrapOptions) -> Vec<&'a str> {
    if !options.break_words || options.width == 0 || visible_width(run) <= options.width {
        return vec![run];
    }
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut count = 0;
    for (i, _) in run.char_indices() {
        if count == options.width {
            pieces.push(&run[start..i]);
            start = i;
            count = 0;
        }
        count += 1;
    }
    pieces.push(&run[start..]);
    pieces
}

/// Post-process one packed line: indent, escape transform, trim, then decide
/// whether it survives. A line that trims to nothing is dropped unless it
/// restores an originally-empty input line, which comes out as `""` exactly.
fn finish(packed: Packed, options: &WrapOptions) -> Option<String> {
    let Packed::Text(line) = packed else {
        return Some(String::new());
    };
    let mut line = if options.indent.is_empty() {
        line
    } else {
        format!("{}{}", options.indent, line)
    };
    if let Some(escape) = &options.escape {
        line = escape(&line);
    }
    if options.trim {
        let trimmed = line.trim();
        if trimmed.len() != line.len() {
            line = trimmed.to_string();
        }
    }
    if line.trim().is_empty() {
        None
    } else {
        Some(line)
    }
}
