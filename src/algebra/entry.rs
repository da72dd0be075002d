#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single nonzero within a compressed line.
///
/// `index` is the position along the minor axis, i.e. the column of an
/// entry in a CSR row or the row of an entry in a CSC column.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry<T = f64> {
    pub index: usize,
    pub value: T,
}

impl<T> Entry<T> {
    pub fn new(index: usize, value: T) -> Self {
        Entry { index, value }
    }
}

/// A single nonzero in absolute (row, column) coordinates.
///
/// This is the input format for bulk matrix assembly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CooEntry<T = f64> {
    pub row: usize,
    pub column: usize,
    pub value: T,
}

impl<T> CooEntry<T> {
    pub fn new(row: usize, column: usize, value: T) -> Self {
        CooEntry { row, column, value }
    }
}

impl<T> From<(usize, usize, T)> for CooEntry<T> {
    fn from(t: (usize, usize, T)) -> Self {
        let (row, column, value) = t;
        CooEntry { row, column, value }
    }
}
