use crate::algebra::sparsevector::new_line;
use crate::algebra::{CooEntry, Entry, FloatT, Line, SparseFormatError, SparseMatrixError};
use std::cell::Ref;

/// Compressed sparse matrix with major/minor axes.
///
/// This is the shared storage for [`CsrMatrix`](crate::algebra::CsrMatrix)
/// (rows are major) and [`CscMatrix`](crate::algebra::CscMatrix) (columns
/// are major).   It holds one [`Line`] per major index, and each line holds
/// its entries sorted by strictly increasing minor index.
///
/// Cloning a `CsMatrix` is lightweight: the clone shares every line with
/// the source.   Use [`deep_copy`](CsMatrix::deep_copy) for independent
/// storage.

#[derive(Debug, Clone, PartialEq)]
pub struct CsMatrix<T = f64> {
    major_dim: usize,
    minor_dim: usize,
    lines: Vec<Line<T>>,
}

impl<T> CsMatrix<T>
where
    T: FloatT,
{
    /// `CsMatrix` constructor taking ownership of one entry vector per line.
    ///
    /// This constructor does __not__ ensure that indices are in bounds or
    /// that entries within each line appear in order of increasing index.
    /// Use [`check_format`](CsMatrix::check_format) to verify this.
    ///
    /// # Panics
    /// Panics if the number of lines differs from `major_dim`.
    pub fn new(major_dim: usize, minor_dim: usize, lines: Vec<Vec<Entry<T>>>) -> Self {
        assert_eq!(lines.len(), major_dim);
        CsMatrix {
            major_dim,
            minor_dim,
            lines: lines.into_iter().map(new_line).collect(),
        }
    }

    /// A matrix with no stored entries
    pub fn zeros(major_dim: usize, minor_dim: usize) -> Self {
        CsMatrix {
            major_dim,
            minor_dim,
            lines: (0..major_dim).map(|_| new_line(Vec::new())).collect(),
        }
    }

    pub(crate) fn from_lines(major_dim: usize, minor_dim: usize, lines: Vec<Line<T>>) -> Self {
        debug_assert_eq!(lines.len(), major_dim);
        CsMatrix {
            major_dim,
            minor_dim,
            lines,
        }
    }

    pub fn major_dim(&self) -> usize {
        self.major_dim
    }

    pub fn minor_dim(&self) -> usize {
        self.minor_dim
    }

    /// Returns the common dimension of a square matrix.
    pub fn dim(&self) -> Result<usize, SparseMatrixError> {
        if self.major_dim != self.minor_dim {
            return Err(SparseMatrixError::DimensionMismatch {
                major: self.major_dim,
                minor: self.minor_dim,
            });
        }
        Ok(self.major_dim)
    }

    pub fn is_square(&self) -> bool {
        self.major_dim == self.minor_dim
    }

    /// Grows or shrinks the matrix in place so that it has `dim` lines.
    ///
    /// New lines are empty.   Removed lines are released; any other holder
    /// of a removed line keeps it alive.   Growth is amortized over repeated
    /// calls, since the line container only reallocates when its capacity
    /// is exhausted.
    pub fn set_major_dim(&mut self, dim: usize) {
        if dim > self.lines.len() {
            self.lines.reserve(dim - self.lines.len());
        }
        self.lines.resize_with(dim, || new_line(Vec::new()));
        self.major_dim = dim;
    }

    /// Grows or shrinks the matrix in place so that it has minor dimension `dim`.
    ///
    /// Shrinking removes every entry with index `>= dim` from every line.
    /// The truncation happens in the shared line storage, so it is visible
    /// through any vector or matrix sharing those lines.
    pub fn set_minor_dim(&mut self, dim: usize) {
        if dim < self.minor_dim {
            for line in self.lines.iter() {
                let mut entries = line.borrow_mut();
                let end = entries.partition_point(|e| e.index < dim);
                entries.truncate(end);
            }
        }
        self.minor_dim = dim;
    }

    /// number of stored entries
    pub fn nnz(&self) -> usize {
        self.lines.iter().map(|line| line.borrow().len()).sum()
    }

    /// Borrow the entries of line `i`.
    pub fn line(&self, i: usize) -> Result<Ref<'_, Vec<Entry<T>>>, SparseMatrixError> {
        Ok(self.shared_line(i)?.borrow())
    }

    /// All lines of the matrix, in major index order
    pub fn lines(&self) -> &[Line<T>] {
        &self.lines
    }

    pub(crate) fn shared_line(&self, i: usize) -> Result<&Line<T>, SparseMatrixError> {
        self.lines.get(i).ok_or(SparseMatrixError::IndexOutOfRange {
            index: i,
            dim: self.major_dim,
        })
    }

    pub(crate) fn replace_line(&mut self, i: usize, line: Line<T>) -> Result<(), SparseMatrixError> {
        let dim = self.major_dim;
        let slot = self
            .lines
            .get_mut(i)
            .ok_or(SparseMatrixError::IndexOutOfRange { index: i, dim })?;
        *slot = line;
        Ok(())
    }

    /// Returns the value at the given (major,minor) index as an Option.
    /// Returns None if the given index is not stored or is out of bounds.
    pub fn get_entry(&self, major: usize, minor: usize) -> Option<T> {
        let entries = self.lines.get(major)?.borrow();
        match entries.binary_search_by_key(&minor, |e| e.index) {
            Ok(k) => Some(entries[k].value),
            Err(_) => None,
        }
    }

    /// A copy of the matrix in which no line is shared with `self`.
    pub fn deep_copy(&self) -> Self {
        let lines = self
            .lines
            .iter()
            .map(|line| new_line(line.borrow().clone()))
            .collect();
        CsMatrix::from_lines(self.major_dim, self.minor_dim, lines)
    }

    /// Removes explicitly stored zeros from every line in place.
    pub fn drop_zeros(&mut self) {
        for line in self.lines.iter() {
            line.borrow_mut().retain(|e| e.value != T::zero());
        }
    }

    /// All stored entries in (major, minor) order, with `row` holding the
    /// major index and `column` the minor index.
    pub fn iter_coo(&self) -> impl Iterator<Item = CooEntry<T>> + '_ {
        self.lines.iter().enumerate().flat_map(|(major, line)| {
            // collected per line so that no borrow outlives a single step
            let entries: Vec<Entry<T>> = line.borrow().clone();
            entries
                .into_iter()
                .map(move |e| CooEntry::new(major, e.index, e.value))
        })
    }

    /// Check that matrix data is correctly formatted.
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.lines.len() != self.major_dim {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        for line in self.lines.iter() {
            let entries = line.borrow();

            //check for index monotonicity within each line
            if entries.windows(2).any(|c| c[0].index >= c[1].index) {
                return Err(SparseFormatError::BadOrdering);
            }
            //check for indices out of bounds
            if entries.last().is_some_and(|e| e.index >= self.minor_dim) {
                return Err(SparseFormatError::BadIndex);
            }
        }

        Ok(())
    }
}

#[test]
fn test_cs_set_minor_dim_truncates_by_search() {
    let mut A = CsMatrix::new(
        2,
        5,
        vec![
            vec![Entry::new(0, 1.), Entry::new(2, 2.), Entry::new(4, 3.)],
            vec![Entry::new(3, 4.)],
        ],
    );
    let alias = A.clone();

    A.set_minor_dim(3);

    assert_eq!(A.minor_dim(), 3);
    assert_eq!(*A.line(0).unwrap(), vec![Entry::new(0, 1.), Entry::new(2, 2.)]);
    assert!(A.line(1).unwrap().is_empty());
    assert_eq!(A.nnz(), 2);

    // the shared lines were truncated too
    assert_eq!(alias.nnz(), 2);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_cs_set_major_dim() {
    let mut A: CsMatrix<f64> = CsMatrix::zeros(2, 2);
    A.set_major_dim(10);
    assert_eq!(A.major_dim(), 10);
    assert_eq!(A.lines().len(), 10);
    let cap = A.lines.capacity();

    A.set_major_dim(3);
    assert_eq!(A.lines().len(), 3);

    // regrowing within capacity must not reallocate
    A.set_major_dim(10);
    assert_eq!(A.lines.capacity(), cap);
    assert!(A.check_format().is_ok());
}

#[test]
fn test_cs_check_format() {
    let A = CsMatrix::new(1, 3, vec![vec![Entry::new(2, 1.), Entry::new(1, 2.)]]);
    assert_eq!(A.check_format(), Err(SparseFormatError::BadOrdering));

    let A = CsMatrix::new(1, 3, vec![vec![Entry::new(1, 1.), Entry::new(1, 2.)]]);
    assert_eq!(A.check_format(), Err(SparseFormatError::BadOrdering));

    let A = CsMatrix::new(1, 3, vec![vec![Entry::new(1, 1.), Entry::new(3, 2.)]]);
    assert_eq!(A.check_format(), Err(SparseFormatError::BadIndex));
}

#[test]
fn test_cs_get_entry() {
    let A = CsMatrix::new(
        2,
        4,
        vec![vec![Entry::new(1, 1.), Entry::new(3, 2.)], vec![]],
    );
    assert_eq!(A.get_entry(0, 3), Some(2.));
    assert_eq!(A.get_entry(0, 2), None);
    assert_eq!(A.get_entry(1, 1), None);
    assert_eq!(A.get_entry(7, 1), None);
}
