//! Offset/limit pagination over ordered sequences.

/// Limit used when a request carries a negative limit.
pub const DEFAULT_LIMIT: i64 = 10;

/// Offset/limit pair as received from a request.
///
/// Either value may be negative; [`page`] clamps them when slicing but the
/// original values are echoed back in the resulting [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Index of the first item requested.
    pub offset: i64,
    /// Maximum number of items requested.
    pub limit: i64,
}

impl PageRequest {
    /// Create a new page request.
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Slice `source` according to this request.
    pub fn apply<'a, T>(&self, source: &'a [T]) -> Page<'a, T> {
        page(source, self.offset, self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// A contiguous sub-range of an ordered sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// The selected items, in source order.
    pub items: &'a [T],
    /// Offset as received (pre-clamp).
    pub offset: i64,
    /// Limit as received (pre-clamp).
    pub limit: i64,
    /// Length of the whole source sequence.
    pub total: usize,
}

/// Select `source[offset..offset + limit]`, clamped to the bounds of `source`.
///
/// A negative `offset` is treated as `0` and a negative `limit` as
/// [`DEFAULT_LIMIT`]. A `limit` of exactly `0` yields an empty page. The
/// returned page echoes `offset` and `limit` unchanged.
pub fn page<T>(source: &[T], offset: i64, limit: i64) -> Page<'_, T> {
    let len = source.len();
    let effective_limit = if limit < 0 { DEFAULT_LIMIT } else { limit };

    let start = usize::try_from(offset.max(0)).unwrap_or(usize::MAX).min(len);
    let end = start
        .saturating_add(usize::try_from(effective_limit).unwrap_or(usize::MAX))
        .min(len);

    Page {
        items: &source[start..end],
        offset,
        limit,
        total: len,
    }
}
