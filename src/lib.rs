//! __csmat__ is a compressed sparse matrix storage library.
//!
//! Matrices are stored as a sequence of compressed *lines*.  Each line holds
//! the nonzero entries of one row (compressed sparse row, [`CsrMatrix`]) or
//! one column (compressed sparse column, [`CscMatrix`]), sorted by their
//! position along the other axis.
//!
//! ```text
//! A = [1.  0.  2.]
//!     [0.  0.  3.]
//! ```
//!
//! ```
//! use csmat::algebra::*;
//!
//! let A: CsrMatrix<f64> = CsrMatrix::new(
//!     2,
//!     3,
//!     &[
//!         CooEntry::new(1, 2, 3.),
//!         CooEntry::new(0, 2, 2.),
//!         CooEntry::new(0, 0, 1.),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(A.nnz(), 3);
//! assert_eq!(A.get(0, 2), Some(2.));
//!
//! // a zero-copy column oriented view of A^T
//! let At = A.reinterpret_as_csc();
//! assert_eq!(At.size(), (3, 2));
//! ```
//!
//! Lines are reference counted.  Row and column vectors extracted from a
//! matrix, matrices obtained by reinterpretation and shallow clones all
//! share their lines with the source, so that mutation through any of them
//! is visible through the others.  Use `deep_copy` to obtain independent
//! storage.
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

pub mod algebra;

/// Compressed sparse row matrix.  Re-exported at the top level for convenience.
pub use algebra::CsrMatrix;
/// Compressed sparse column matrix.  Re-exported at the top level for convenience.
pub use algebra::CscMatrix;
