//! Compressed sparse matrix and vector types.
//!
//! All types are generic over a floating point value type implementing
//! [`FloatT`], with `f64` as the default.

mod compressed;
mod entry;
mod error_types;
mod floats;
mod settings;
mod sparsevector;

pub use compressed::*;
pub use entry::*;
pub use error_types::*;
pub use floats::*;
pub use settings::*;
pub use sparsevector::*;

/// Axis along which a compressed matrix is grouped into lines.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum MatrixOrientation {
    /// lines are rows (CSR)
    Row,
    /// lines are columns (CSC)
    Column,
}

/// Common queries on two dimensional matrix types.
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn orientation(&self) -> MatrixOrientation;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
    fn is_square(&self) -> bool {
        self.nrows() == self.ncols()
    }
}

#[cfg(test)]
mod tests;
