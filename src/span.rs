use std::fmt;

/// A reference to a line and column in a query document.
///
/// Positions are produced by the host engine's parser and attached to
/// literals, so that literal errors can point back into the query.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Copy)]
pub struct SourcePosition {
    index: usize,
    line: usize,
    col: usize,
}

/// Range of characters in the query document, starting at the character
/// pointed by the `start` field and ending just before the `end` marker.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Span {
    /// Start position of this [`Span`].
    pub start: SourcePosition,

    /// End position of this [`Span`].
    ///
    /// > __NOTE__: This points to the first source position __after__ this [`Span`].
    pub end: SourcePosition,
}

impl Span {
    /// Builds a [`Span`] not pointing anywhere, for values constructed in
    /// code rather than parsed from a document.
    #[inline]
    pub fn unlocated() -> Self {
        Self {
            start: SourcePosition::new_origin(),
            end: SourcePosition::new_origin(),
        }
    }
}

/// Data structure used to wrap items into a [`Span`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Spanning<T> {
    /// Wrapped item.
    pub item: T,

    /// [`Span`] of the wrapped item.
    pub span: Span,
}

impl<T> Spanning<T> {
    /// Wraps the `item` into the given [`Span`].
    pub fn new(span: Span, item: T) -> Self {
        Self { item, span }
    }

    /// Wraps the `item` into a [`Span`] between `start` and `end`.
    pub fn start_end(&start: &SourcePosition, &end: &SourcePosition, item: T) -> Self {
        Self::new(Span { start, end }, item)
    }

    /// Wraps the `item` without any location information.
    pub fn unlocated(item: T) -> Self {
        Self::new(Span::unlocated(), item)
    }

    /// Returns start position of the item.
    #[inline]
    pub fn start(&self) -> SourcePosition {
        self.span.start
    }

    /// Returns end position of the item.
    ///
    /// > __NOTE__: This points to the first source position __after__ the item.
    #[inline]
    pub fn end(&self) -> SourcePosition {
        self.span.end
    }
}

impl<T: fmt::Display> fmt::Display for Spanning<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. At {}", self.item, self.span.start)
    }
}

impl SourcePosition {
    /// Creates a new [`SourcePosition`].
    ///
    /// # Panics
    ///
    /// If the `index` is smaller than the `line` and `col` combined, which
    /// cannot happen for a position inside a real document.
    pub fn new(index: usize, line: usize, col: usize) -> Self {
        assert!(index >= line + col);

        Self { index, line, col }
    }

    /// The very first character of a document.
    pub fn new_origin() -> Self {
        Self {
            index: 0,
            line: 0,
            col: 0,
        }
    }

    /// The index of the character in the query document.
    ///
    /// Zero-based index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The line of the character in the query document.
    ///
    /// Zero-based index: the first line is line zero.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The column of the character in the query document.
    ///
    /// Zero-based index: the first column is column zero.
    pub fn column(&self) -> usize {
        self.col
    }
}

impl fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
