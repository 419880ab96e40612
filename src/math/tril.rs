//! Lower-triangular index enumeration.
//!
//! Angle vectors are linearized over the lower triangle of a square matrix,
//! diagonal included, in row-major order:
//! ```text
//! (0,0), (1,0), (1,1), (2,0), (2,1), (2,2), ...
//! ```
//! Every producer and consumer of angle vectors goes through [`tril_indices`],
//! so the order is fixed in one place.

use std::iter::FusedIterator;

/// Number of entries on and below the diagonal of an `n × n` matrix: `n(n+1)/2`.
///
/// `None` when the count does not fit in `usize`.
#[inline]
pub const fn triangular(n: usize) -> Option<usize> {
    // Halve the even factor first; only the final product can overflow
    if n % 2 == 0 {
        (n / 2).checked_mul(n + 1)
    } else {
        n.checked_mul(n / 2 + 1)
    }
}

/// Number of free correlations of an `n × n` correlation matrix: `n(n-1)/2`.
///
/// `None` when the count does not fit in `usize`.
#[inline]
pub const fn correlation_len(n: usize) -> Option<usize> {
    match n {
        0 => Some(0),
        _ => triangular(n - 1),
    }
}

/// Iterate `(row, col)` pairs with `col <= row < n` in row-major order.
///
/// The reported length saturates at `usize::MAX`.
#[inline]
pub fn tril_indices(n: usize) -> TrilIndices {
    TrilIndices {
        n,
        row: 0,
        col: 0,
        remaining: triangular(n).unwrap_or(usize::MAX),
    }
}

/// Iterator returned by [`tril_indices`].
#[derive(Debug, Clone)]
pub struct TrilIndices {
    n: usize,
    row: usize,
    col: usize,
    remaining: usize,
}

impl Iterator for TrilIndices {
    type Item = (usize, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.row >= self.n {
            return None;
        }

        let item = (self.row, self.col);
        if self.col == self.row {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }
        self.remaining = self.remaining.saturating_sub(1);

        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for TrilIndices {}
impl FusedIterator for TrilIndices {}
