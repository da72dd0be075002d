use crate::algebra::{
    AssemblySettings, CooEntry, CsMatrix, CsrMatrix, Entry, FloatT, MatrixOrientation,
    ShapedMatrix, SparseMatrixError, SparseVector,
};

/// Sparse matrix in Compressed Sparse Column (CSC) format
///
/// __Example usage__ : To construct the 3 x 2 matrix
/// ```text
/// A = [1.  0.]
///     [0.  0.]
///     [2.  3.]
/// ```
///
/// ```
/// use csmat::algebra::*;
///
/// let A: CscMatrix<f64> = CscMatrix::new(
///     3, // rows
///     2, // columns
///     &[
///         CooEntry::new(2, 1, 3.),
///         CooEntry::new(0, 0, 1.),
///         CooEntry::new(2, 0, 2.),
///     ],
/// )
/// .unwrap();
///
/// let col = A.column_vector(0).unwrap();
/// assert_eq!(col.get(2), Some(2.));
/// ```
///

#[derive(Debug, Clone, PartialEq)]
pub struct CscMatrix<T = f64> {
    inner: CsMatrix<T>,
}

impl<T> CscMatrix<T>
where
    T: FloatT,
{
    /// `CscMatrix` constructor from unordered coordinate entries, using
    /// default [`AssemblySettings`].
    ///
    /// Zero values are dropped.   Entries are grouped by column and sorted
    /// by row within each column.   Repeated positions are all kept.
    pub fn new(rows: usize, cols: usize, entries: &[CooEntry<T>]) -> Result<Self, SparseMatrixError> {
        Self::new_with_settings(rows, cols, entries, &AssemblySettings::default())
    }

    /// `CscMatrix` constructor from unordered coordinate entries.
    pub fn new_with_settings(
        rows: usize,
        cols: usize,
        entries: &[CooEntry<T>],
        settings: &AssemblySettings<T>,
    ) -> Result<Self, SparseMatrixError> {
        let inner = CsMatrix::from_coo(rows, cols, entries, settings, MatrixOrientation::Column)?;
        Ok(CscMatrix { inner })
    }

    /// A `rows` x `cols` matrix with no stored entries
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::from_inner(CsMatrix::zeros(cols, rows))
    }

    /// Identity matrix of size `n`
    pub fn identity(n: usize) -> Self {
        let lines = (0..n).map(|i| vec![Entry::new(i, T::one())]).collect();
        Self::from_inner(CsMatrix::new(n, n, lines))
    }

    /// Wraps compressed storage whose lines are columns.
    pub fn from_inner(inner: CsMatrix<T>) -> Self {
        CscMatrix { inner }
    }

    pub fn as_inner(&self) -> &CsMatrix<T> {
        &self.inner
    }

    pub fn into_inner(self) -> CsMatrix<T> {
        self.inner
    }

    pub fn rows(&self) -> usize {
        self.inner.minor_dim()
    }

    pub fn columns(&self) -> usize {
        self.inner.major_dim()
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
        self.inner.set_major_dim(cols);
        self.inner.set_minor_dim(rows);
    }

    /// Returns the value at (row, col), or `None` if it is not stored.
    pub fn get(&self, row: usize, col: usize) -> Option<T> {
        self.inner.get_entry(col, row)
    }

    /// Returns column `j` as a sparse vector sharing the matrix storage.
    pub fn column_vector(&self, j: usize) -> Result<SparseVector<T>, SparseMatrixError> {
        let line = self.inner.shared_line(j)?;
        Ok(SparseVector::from_line(self.rows(), line.clone()))
    }

    /// Replaces column `j` with the entries of `v`.   The matrix then
    /// shares storage with `v`.
    ///
    /// No check is made that the entries of `v` are sorted or within the
    /// row dimension.
    pub fn set_column_vector(&mut self, j: usize, v: &SparseVector<T>) -> Result<(), SparseMatrixError> {
        self.inner.replace_line(j, v.line().clone())
    }

    /// Logical transpose, with freshly allocated storage.
    pub fn transpose(&self) -> CscMatrix<T> {
        CscMatrix::from_inner(self.inner.transpose())
    }

    /// Zero-copy transpose: the same lines read as the rows of a
    /// `CsrMatrix`.   The result is the transpose of `self` and shares all
    /// of its storage with `self`.
    pub fn reinterpret_as_csr(&self) -> CsrMatrix<T> {
        CsrMatrix::from_inner(self.inner.clone())
    }

    /// The same matrix in CSR format, with freshly allocated storage.
    pub fn to_csr(&self) -> CsrMatrix<T> {
        self.transpose().reinterpret_as_csr()
    }

    /// A copy of the matrix in which no column is shared with `self`.
    pub fn deep_copy(&self) -> Self {
        CscMatrix::from_inner(self.inner.deep_copy())
    }

    /// Removes explicitly stored zeros in place.
    pub fn drop_zeros(&mut self) {
        self.inner.drop_zeros();
    }

    /// All stored entries, in column then row order
    pub fn iter_coo(&self) -> impl Iterator<Item = CooEntry<T>> + '_ {
        self.inner
            .iter_coo()
            .map(|e| CooEntry::new(e.column, e.row, e.value))
    }
}

impl<T> ShapedMatrix for CscMatrix<T>
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
        MatrixOrientation::Column
    }
}
