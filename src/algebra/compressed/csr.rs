use crate::algebra::{
    AssemblySettings, CooEntry, CsMatrix, CscMatrix, Entry, FloatT, MatrixOrientation,
    ShapedMatrix, SparseMatrixError, SparseVector,
};

/// Sparse matrix in Compressed Sparse Row (CSR) format
///
/// __Example usage__ : To construct the 2 x 3 matrix
/// ```text
/// A = [1.  0.  2.]
///     [0.  0.  3.]
/// ```
///
/// ```
/// use csmat::algebra::*;
///
/// let A: CsrMatrix<f64> = CsrMatrix::new(
///     2, // rows
///     3, // columns
///     &[
///         CooEntry::new(0, 0, 1.),
///         CooEntry::new(0, 2, 2.),
///         CooEntry::new(1, 2, 3.),
///     ],
/// )
/// .unwrap();
///
/// let row = A.row_vector(0).unwrap();
/// assert_eq!(row.nnz(), 2);
/// ```
///

#[derive(Debug, Clone, PartialEq)]
pub struct CsrMatrix<T = f64> {
    inner: CsMatrix<T>,
}

/// Default sparse matrix format
pub type Matrix<T = f64> = CsrMatrix<T>;

impl<T> CsrMatrix<T>
where
    T: FloatT,
{
    /// `CsrMatrix` constructor from unordered coordinate entries, using
    /// default [`AssemblySettings`].
    ///
    /// Zero values are dropped.   Entries are grouped by row and sorted by
    /// column within each row.   Repeated positions are all kept.
    pub fn new(rows: usize, cols: usize, entries: &[CooEntry<T>]) -> Result<Self, SparseMatrixError> {
        Self::new_with_settings(rows, cols, entries, &AssemblySettings::default())
    }

    /// `CsrMatrix` constructor from unordered coordinate entries.
    pub fn new_with_settings(
        rows: usize,
        cols: usize,
        entries: &[CooEntry<T>],
        settings: &AssemblySettings<T>,
    ) -> Result<Self, SparseMatrixError> {
        let inner = CsMatrix::from_coo(rows, cols, entries, settings, MatrixOrientation::Row)?;
        Ok(CsrMatrix { inner })
    }

    /// A `rows` x `cols` matrix with no stored entries
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_inner(CsMatrix::zeros(rows, cols))
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let lines = (0..n).map(|i| vec![Entry::new(i, T::one())]).collect();
        Self::from_inner(CsMatrix::new(n, n, lines))
    }

    /// Wraps compressed storage whose lines are rows.
    pub fn from_inner(inner: CsMatrix<T>) -> Self {
        CsrMatrix { inner }
    }

    pub fn as_inner(&self) -> &CsMatrix<T> {
        &self.inner
    }

    pub fn into_inner(self) -> CsMatrix<T> {
        self.inner
    }

    pub fn rows(&self) -> usize {
        self.inner.major_dim()
    }

    pub fn columns(&self) -> usize {
        self.inner.minor_dim()
    }

    /// Returns the dimension of a square matrix.
    pub fn dim(&self) -> Result<usize, SparseMatrixError> {
        self.inner.dim()
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.inner.nnz()
    }

    /// Grows or shrinks the matrix in place to `rows` x `cols`.
    ///
    /// Entries outside the new bounds are discarded.
    pub fn set_dim(&mut self, rows: usize, cols: usize) {
        self.inner.set_major_dim(rows);
        self.inner.set_minor_dim(cols);
    }

    /// Returns the value at (row, col), or `None` if it is not stored.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.inner.get_entry(row, col)
    }

    /// Returns row `i` as a sparse vector sharing the matrix storage.
    pub fn row_vector(&self, i: usize) -> Result<SparseVector<T>, SparseMatrixError> {
        let line = self.inner.shared_line(i)?;
        Ok(SparseVector::from_line(self.columns(), line.clone()))
    }

    /// Replaces row `i` with the entries of `v`.   The matrix then shares
    /// storage with `v`.
    ///
    /// No check is made that the entries of `v` are sorted or within the
    /// column dimension.
    pub fn set_row_vector(&mut self, i: usize, v: &SparseVector<T>) -> Result<(), SparseMatrixError> {
        self.inner.replace_line(i, v.line().clone())
    }

    /// Logical transpose, with freshly allocated storage.
    pub fn transpose(&self) -> CsrMatrix<T> {
        CsrMatrix::from_inner(self.inner.transpose())
    }

    /// Zero-copy transpose: the same lines read as the columns of a
    /// `CscMatrix`.   The result is the transpose of `self` and shares all
    /// of its storage with `self`.
    pub fn reinterpret_as_csc(&self) -> CscMatrix<T> {
        CscMatrix::from_inner(self.inner.clone())
    }

    /// The same matrix in CSC format, with freshly allocated storage.
    pub fn to_csc(&self) -> CscMatrix<T> {
        self.transpose().reinterpret_as_csc()
    }

    /// A copy of the matrix in which no row is shared with `self`.
    pub fn deep_copy(&self) -> Self {
        CsrMatrix::from_inner(self.inner.deep_copy())
    }

    /// Removes explicitly stored zeros in place.
    pub fn drop_zeros(&mut self) {
        self.inner.drop_zeros();
    }

    /// All stored entries, in row then column order
    pub fn iter_coo(&self) -> impl Iterator<Item = CooEntry<T>> + '_ {
        self.inner.iter_coo()
    }
}

impl<T> ShapedMatrix for CsrMatrix<T>
where
    T: FloatT,
{
    fn nrows(&self) -> usize {
        self.rows()
    }
    fn ncols(&self) -> usize {
        self.columns()
    }
    fn orientation(&self) -> MatrixOrientation {
        MatrixOrientation::Row
    }
}
