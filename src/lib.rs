//! A binary indexed (Fenwick) tree: point updates and inclusive range sums over a fixed-length sequence of
//! numbers, both in O(log n).
//!
//! ```
//! use fenwick::FenwickTree;
//!
//! # fn main() -> Result<(), fenwick::FenwickError> {
//! let mut fenwick = FenwickTree::new(vec![3, 2, -1, 6, 5]);
//! assert_eq!(fenwick.range_sum(2, 4)?, 10);
//!
//! fenwick.point_update(3, 10)?;
//! assert_eq!(fenwick.range_sum(2, 4)?, 14);
//! assert_eq!(fenwick.prefix_sum(4)?, 19);
//! # Ok(())
//! # }
//! ```

/// Data structures
pub mod ds;

mod error;
mod util;

pub use ds::FenwickTree;
pub use error::FenwickError;
