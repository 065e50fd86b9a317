#![forbid(unsafe_code)]

//! Width-budgeted line wrapping for terminal text.
//!
//! This crate reflows text into lines that fit a maximum display width. Input
//! is split into indivisible chunks (words, whitespace runs, hyphen-trailing
//! fragments) which are packed greedily into lines, with the budget measured
//! on *visible* length: ANSI escape sequences contribute nothing, so colored
//! text wraps at the same columns as plain text.
//!
//! Every operation is a pure function of its inputs. There is no I/O, no
//! shared state, and no failure mode; degenerate configuration (for example
//! `width == 0`) produces defined, degenerate output.
//!
//! # Example
//! ```
//! use chunkwrap::{WrapOptions, wrap};
//!
//! let wrapped = wrap("the quick brown fox", &WrapOptions::new(10));
//! assert_eq!(wrapped, "the quick\nbrown fox");
//! ```
//!
//! Oversized chunks stay whole unless force-breaking is on:
//! ```
//! use chunkwrap::{WrapOptions, lines};
//!
//! let opts = WrapOptions::new(3).break_words(true);
//! assert_eq!(lines("abcdefghij", &opts), ["abc", "def", "ghi", "j"]);
//! ```

/// Tokenization into chunks and the chunk-level queries.
pub mod chunk;
/// Wrapping configuration with builder-style construction.
pub mod options;
/// Visible width: length with ANSI escape sequences removed.
pub mod width;
/// Chunk packing, post-processing, and the wrapping entry points.
pub mod wrap;

pub use chunk::{chunks, is_wrappable};
pub use options::{EscapeFn, WrapOptions};
pub use width::visible_width;
pub use wrap::{lines, wrap};
