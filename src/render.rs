//! Fixed-width text rendering of a range over a display window.
//!
//! ```rust
//! use posranges::{render, AtomicRange, RangeSet, RenderOptions};
//!
//! let set = RangeSet::from(vec![
//!     AtomicRange::new(1, 3).unwrap(),
//!     AtomicRange::new(7, 9).unwrap(),
//! ]);
//! let bar = render(&set, &RenderOptions::default().with_end(9)).unwrap();
//! assert_eq!(bar, "███---███");
//! ```

use crate::error::RangeError;
use crate::range::RangeLike;

/// Display window and characters used by [`render`].
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// First position of the window.
    pub start: i64,
    /// Last position of the window; defaults to the range's last value.
    /// Required for empty ranges.
    pub end: Option<i64>,
    /// Character for positions outside the range.
    pub empty_char: char,
    /// Character for positions inside the range.
    pub filled_char: char,
    /// Appends `" : <notation>"` after the bar.
    pub append_description: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
            empty_char: '-',
            filled_char: '█',
            append_description: false,
        }
    }
}

impl RenderOptions {
    pub fn with_start(mut self, start: i64) -> Self {
        self.start = start;
        self
    }

    pub fn with_end(mut self, end: i64) -> Self {
        self.end = Some(end);
        self
    }

    pub fn with_chars(mut self, empty_char: char, filled_char: char) -> Self {
        self.empty_char = empty_char;
        self.filled_char = filled_char;
        self
    }

    pub fn with_description(mut self, append_description: bool) -> Self {
        self.append_description = append_description;
        self
    }
}

/// Renders `range` as one character per position of the window
/// `options.start..=end`.
///
/// The bar begins at `options.start`, not at 1, so its width is always
/// `end - start + 1`.
///
/// # Errors
///
/// Returns [`RangeError::InvalidBound`] if the window cannot show the whole
/// range: an empty range without an explicit end, a window starting after
/// the range's first value or ending before its last value, or a window that
/// is itself malformed.
pub fn render<R>(range: &R, options: &RenderOptions) -> Result<String, RangeError>
where
    R: RangeLike + std::fmt::Display,
{
    let span = range.span();
    let end = match (options.end, span.end()) {
        (Some(end), _) => end,
        (None, Some(last)) => last,
        (None, None) => return Err(reject("end must be specified for empty ranges")),
    };
    if options.start < 1 {
        return Err(reject(format!("window start {} is not positive", options.start)));
    }
    if end < options.start {
        return Err(reject(format!(
            "window end {end} is before window start {}",
            options.start
        )));
    }
    if let Some((first, last)) = span.bounds() {
        if options.start > first {
            return Err(reject(format!(
                "window start {} is after range start {first}",
                options.start
            )));
        }
        if end < last {
            return Err(reject(format!("window end {end} is before range end {last}")));
        }
    }

    let mut bar = String::new();
    let mut values = range.values().peekable();
    for position in options.start..=end {
        if values.next_if_eq(&position).is_some() {
            bar.push(options.filled_char);
        } else {
            bar.push(options.empty_char);
        }
    }
    if options.append_description {
        bar.push_str(&format!(" : {range}"));
    }
    Ok(bar)
}

fn reject(reason: impl Into<String>) -> RangeError {
    let error = RangeError::bound(reason);
    tracing::debug!(%error, "rejected render request");
    error
}
