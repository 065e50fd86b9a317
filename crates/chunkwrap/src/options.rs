//! Wrapping configuration.
//!
//! [`WrapOptions`] resolves every recognized option once at construction and
//! is read-only afterwards; a single options value can be shared freely
//! between callers and threads. Option aliases are normalized here into one
//! canonical field per concept, so the pipeline never branches on both names.

use std::fmt;
use std::sync::Arc;

/// A caller-supplied per-line transform.
///
/// Applied to each output line after indentation and before trimming. The
/// transform must return the replacement line; a panic inside it propagates
/// to the `wrap`/`lines` caller rather than being caught or skipped.
pub type EscapeFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Options for wrapping text to a width budget.
///
/// All fields have defaults; construct with [`WrapOptions::new`] or
/// [`WrapOptions::default`] and chain the builder methods.
///
/// Two alias pairs are accepted: [`cut`](Self::cut) writes the same flag as
/// [`break_words`](Self::break_words), and [`no_trim`](Self::no_trim) stores
/// the inverse of [`trim`](Self::trim).
///
/// # Example
/// ```
/// use chunkwrap::WrapOptions;
///
/// let opts = WrapOptions::new(20).break_words(true).indent("> ");
/// assert_eq!(opts.width, 20);
/// assert!(opts.break_words);
/// ```
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WrapOptions {
    /// Maximum visible width of an output line.
    pub width: usize,
    /// Force-split chunks whose visible width exceeds `width`.
    pub break_words: bool,
    /// Trim surrounding whitespace from each output line.
    pub trim: bool,
    /// Line terminator used when joining wrapped lines.
    pub eol: String,
    /// Overrides `eol` for joining when present.
    pub newline: Option<String>,
    /// Prefix prepended to every output line.
    pub indent: String,
    /// Per-line transform applied between indentation and trimming.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub escape: Option<EscapeFn>,
}

impl WrapOptions {
    /// Create options with the given width and defaults for everything else.
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            break_words: false,
            trim: true,
            eol: "\n".to_string(),
            newline: None,
            indent: String::new(),
            escape: None,
        }
    }

    /// Set the width budget.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Force-split any chunk wider than the budget into width-sized pieces.
    #[must_use]
    pub fn break_words(mut self, break_words: bool) -> Self {
        self.break_words = break_words;
        self
    }

    /// Alias for [`break_words`](Self::break_words).
    #[must_use]
    pub fn cut(self, cut: bool) -> Self {
        self.break_words(cut)
    }

    /// Trim surrounding whitespace from each output line. On by default.
    #[must_use]
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Alias for the inverse of [`trim`](Self::trim).
    #[must_use]
    pub fn no_trim(self, no_trim: bool) -> Self {
        self.trim(!no_trim)
    }

    /// Set the line terminator used when joining wrapped lines.
    #[must_use]
    pub fn eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }

    /// Override the join terminator without touching `eol`.
    #[must_use]
    pub fn newline(mut self, newline: impl Into<String>) -> Self {
        self.newline = Some(newline.into());
        self
    }

    /// Prefix every output line with `indent`.
    ///
    /// Indentation is applied before trimming, so a whitespace-only indent
    /// is removed again unless trimming is disabled.
    #[must_use]
    pub fn indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Install a per-line transform, applied after indentation.
    #[must_use]
    pub fn escape(mut self, escape: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        self.escape = Some(Arc::new(escape));
        self
    }

    /// Terminator used to join wrapped lines: `newline` when set, else `eol`.
    #[must_use]
    pub fn line_ending(&self) -> &str {
        self.newline.as_deref().unwrap_or(&self.eol)
    }
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self::new(30)
    }
}

impl fmt::Debug for WrapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrapOptions")
            .field("width", &self.width)
            .field("break_words", &self.break_words)
            .field("trim", &self.trim)
            .field("eol", &self.eol)
            .field("newline", &self.newline)
            .field("indent", &self.indent)
            .field("escape", &self.escape.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let opts = WrapOptions::default();
        assert_eq!(opts.width, 30);
        assert!(!opts.break_words);
        assert!(opts.trim);
        assert_eq!(opts.eol, "\n");
        assert_eq!(opts.newline, None);
        assert_eq!(opts.indent, "");
        assert!(opts.escape.is_none());
    }

    #[test]
    fn cut_is_an_alias_for_break_words() {
        assert!(WrapOptions::new(10).cut(true).break_words);
        assert!(!WrapOptions::new(10).cut(false).break_words);
    }

    #[test]
    fn no_trim_inverts_trim() {
        assert!(!WrapOptions::new(10).no_trim(true).trim);
        assert!(WrapOptions::new(10).no_trim(false).trim);
        assert!(!WrapOptions::new(10).trim(false).trim);
    }

    #[test]
    fn newline_overrides_eol_for_joining() {
        let opts = WrapOptions::new(10).eol("\r\n");
        assert_eq!(opts.line_ending(), "\r\n");
        let opts = opts.newline("|");
        assert_eq!(opts.line_ending(), "|");
    }

    #[test]
    fn builder_chain() {
        let opts = WrapOptions::new(12)
            .break_words(true)
            .trim(false)
            .indent("  ")
            .eol("\r\n");
        assert_eq!(opts.width, 12);
        assert!(opts.break_words);
        assert!(!opts.trim);
        assert_eq!(opts.indent, "  ");
        assert_eq!(opts.eol, "\r\n");
    }

    #[test]
    fn debug_elides_the_escape_hook() {
        let opts = WrapOptions::default().escape(|line| line.to_string());
        let repr = format!("{opts:?}");
        assert!(repr.contains("WrapOptions"));
        assert!(repr.contains("<fn>"));
    }
}
