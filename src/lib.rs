//! Fixed-size row-major two-dimensional buffer with flat, row, and column
//! iteration.
//!
//! The crate provides a generic dense buffer for matrix-like storage (image
//! planes, small numeric tables) whose contents can be walked through three
//! interchangeable views over one contiguous allocation:
//!
//! - **flat**: the whole storage in row-major order, as plain slice iterators
//! - **row**: one row as a contiguous slice
//! - **column**: one column as a strided view with stride equal to the
//!   column count
//!
//! All three views alias the same storage, so a write through any one of
//! them is visible through the others. Every view comes in shared and
//! mutable form, and every iterator is double-ended and exact-size, so
//! standard algorithms (fill, sort, reverse, search, `rev`) work uniformly
//! across views.
//!
//! # Core Types
//!
//! - [`Buffer2D`]: owned `rows x cols` storage with view factories and
//!   checked element access
//! - [`Col`] / [`ColMut`]: strided views of a single column
//! - [`StridedCursor`]: fixed-stride cursor over a [`Position`] handle, the
//!   engine behind the column iterators
//!
//! # Example
//!
//! ```rust
//! use buffer2d::Buffer2D;
//!
//! let mut buffer = Buffer2D::<i32>::new(2, 3);
//! for (slot, value) in buffer.iter_mut().zip(1..) {
//!     *slot = value;
//! }
//! assert_eq!(buffer.row(0)?, &[1, 2, 3]);
//! let col: Vec<i32> = buffer.col(1)?.iter().copied().collect();
//! assert_eq!(col, vec![2, 5]);
//! # Ok::<(), buffer2d::BufferError>(())
//! ```
//!
//! # Bounds checking
//!
//! Index validation happens when a view is requested, never lazily at first
//! use: `at`, `row`, `col` and their mutable forms each return
//! [`BufferError::OutOfRange`] for an index at or beyond its dimension's
//! bound. There is no one-past-the-end row or column to ask for; the only
//! way to obtain a range, forward or reverse, is a validating factory.

mod buffer_2d;
mod strided_cursor;

// ============================================================================
// Container and views
// ============================================================================
pub use buffer_2d::{Buffer2D, Col, ColIter, ColIterMut, ColMut, Rows, RowsMut};

// ============================================================================
// Strided cursor
// ============================================================================
pub use strided_cursor::{Position, StridedCursor};

// ============================================================================
// Error types
// ============================================================================

/// Axis whose bound an index was validated against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Row => f.write_str("row"),
            Axis::Col => f.write_str("column"),
        }
    }
}

/// Errors that can occur during buffer operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    /// An index was at or beyond its dimension's bound.
    #[error("{axis} index {index} out of range (bound {bound})")]
    OutOfRange {
        axis: Axis,
        index: usize,
        bound: usize,
    },

    /// Storage length does not match the requested dimensions.
    #[error("size mismatch: a {rows}x{cols} buffer needs {expected} elements, got {actual}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}

/// Result type for buffer operations.
pub type Result<T> = std::result::Result<T, BufferError>;
