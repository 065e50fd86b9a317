//! Tokenization of text into indivisible chunks.
//!
//! A chunk is a maximal run of non-whitespace characters or a maximal run of
//! whitespace. Runs are never reordered, and concatenating them in order
//! reproduces the input exactly, so tokenization is lossless and total.
//!
//! Hyphens get one extra rule: a hyphen that closes a fragment (the next
//! character is whitespace, or the input ends) stays attached to that
//! fragment. A hyphen inside a word never splits it, so `"well-known"` is a
//! single chunk while the `"co-"` in `"co-\noperate"` keeps its hyphen and
//! stays distinct from the newline run that follows.

/// One indivisible unit of a physical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Chunk<'a> {
    /// The physical line had no content at all. Carried through packing and
    /// post-processing so a deliberate blank line can be restored verbatim.
    EmptyLine,
    /// A whitespace or non-whitespace run.
    Content(&'a str),
}

/// Tokenize one physical line for the wrapping pipeline.
///
/// An empty line yields exactly one [`Chunk::EmptyLine`]; anything else
/// yields the runs produced by [`chunks`], in order.
pub(crate) fn tokenize(line: &str) -> Vec<Chunk<'_>> {
    let runs = chunks(line);
    if runs.is_empty() {
        vec![Chunk::EmptyLine]
    } else {
        runs.into_iter().map(Chunk::Content).collect()
    }
}

/// Split text into chunks: alternating runs of whitespace and non-whitespace.
///
/// Newline characters are whitespace, so this can be handed multi-line text
/// directly; embedded newlines surface as (part of) whitespace-run chunks.
/// Concatenating the returned slices in order reproduces `text` exactly. An
/// empty input yields no chunks.
///
/// # Example
/// ```
/// use chunkwrap::chunks;
///
/// assert_eq!(chunks("one two"), vec!["one", " ", "two"]);
/// assert_eq!(chunks("well-known"), vec!["well-known"]);
/// assert_eq!(chunks("co-\noperate"), vec!["co-", "\n", "operate"]);
/// ```
#[must_use]
pub fn chunks(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = text;
    while let Some(first) = rest.chars().next() {
        let end = if first.is_whitespace() {
            whitespace_run_end(rest)
        } else {
            word_run_end(rest)
        };
        let (run, tail) = rest.split_at(end);
        out.push(run);
        rest = tail;
    }
    out
}

/// True when the text holds more than one chunk, i.e. wrapping could move
/// anything. Performs no wrapping.
///
/// # Example
/// ```
/// use chunkwrap::is_wrappable;
///
/// assert!(is_wrappable("one two"));
/// assert!(!is_wrappable("one"));
/// assert!(!is_wrappable(""));
/// ```
#[must_use]
pub fn is_wrappable(text: &str) -> bool {
    chunks(text).len() > 1
}

/// Byte length of the leading whitespace run.
fn whitespace_run_end(s: &str) -> usize {
    s.char_indices()
        .find(|(_, c)| !c.is_whitespace())
        .map_or(s.len(), |(i, _)| i)
}

/// Byte length of the leading non-whitespace run.
///
/// A run ends at whitespace or end of input. A hyphen at that point belongs
/// to the fragment it closes, so the run boundary falls after it.
fn word_run_end(s: &str) -> usize {
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c.is_whitespace() {
            return i;
        }
        if c == '-' {
            match chars.peek() {
                None => return s.len(),
                Some(&(next_at, next)) if next.is_whitespace() => return next_at,
                _ => {}
            }
        }
    }
    s.len()
}
