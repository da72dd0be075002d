//---------------------------------------------------------
// assembly of compressed matrices from coordinate entries
//---------------------------------------------------------

use crate::algebra::{
    AssemblySettings, CooEntry, CsMatrix, DuplicatePolicy, Entry, FloatT, MatrixOrientation,
    SparseMatrixError,
};
use itertools::Itertools;

impl<T> CsMatrix<T>
where
    T: FloatT,
{
    // Builds the compressed storage for a rows x cols matrix.  Lines are
    // rows or columns according to `orientation`.
    pub(crate) fn from_coo(
        rows: usize,
        cols: usize,
        entries: &[CooEntry<T>],
        settings: &AssemblySettings<T>,
        orientation: MatrixOrientation,
    ) -> Result<Self, SparseMatrixError> {
        settings.validate()?;

        let (major_dim, minor_dim) = match orientation {
            MatrixOrientation::Row => (rows, cols),
            MatrixOrientation::Column => (cols, rows),
        };
        let split = |e: &CooEntry<T>| match orientation {
            MatrixOrientation::Row => (e.row, e.column),
            MatrixOrientation::Column => (e.column, e.row),
        };

        // bounds check and count entries per line
        let mut counts = vec![0usize; major_dim];
        for e in entries.iter() {
            if e.row >= rows {
                return Err(SparseMatrixError::IndexOutOfRange { index: e.row, dim: rows });
            }
            if e.column >= cols {
                return Err(SparseMatrixError::IndexOutOfRange {
                    index: e.column,
                    dim: cols,
                });
            }
            if !settings.is_dropped(e.value) {
                counts[split(e).0] += 1;
            }
        }

        let mut lines: Vec<Vec<Entry<T>>> = counts.into_iter().map(Vec::with_capacity).collect();
        for e in entries.iter().filter(|e| !settings.is_dropped(e.value)) {
            let (major, minor) = split(e);
            lines[major].push(Entry::new(minor, e.value));
        }

        // stable, so repeated positions stay in input order
        for line in lines.iter_mut() {
            line.sort_by_key(|e| e.index);
        }

        match settings.duplicates {
            DuplicatePolicy::KeepAll => {}
            DuplicatePolicy::Sum => {
                for line in lines.iter_mut() {
                    *line = sum_duplicates(std::mem::take(line), settings);
                }
            }
            DuplicatePolicy::Reject => {
                for (major, line) in lines.iter().enumerate() {
                    if let Some(pair) = line.windows(2).find(|p| p[0].index == p[1].index) {
                        let minor = pair[0].index;
                        let (row, column) = match orientation {
                            MatrixOrientation::Row => (major, minor),
                            MatrixOrientation::Column => (minor, major),
                        };
                        return Err(SparseMatrixError::DuplicateEntry { row, column });
                    }
                }
            }
        }

        Ok(CsMatrix::new(major_dim, minor_dim, lines))
    }
}

// merge adjacent entries with equal index.  Merged values that cancel
// are dropped under the same rule as input values.
fn sum_duplicates<T: FloatT>(line: Vec<Entry<T>>, settings: &AssemblySettings<T>) -> Vec<Entry<T>> {
    line.into_iter()
        .coalesce(|a, b| {
            if a.index == b.index {
                Ok(Entry::new(a.index, a.value + b.value))
            } else {
                Err((a, b))
            }
        })
        .filter(|e| !settings.is_dropped(e.value))
        .collect()
}

#[test]
fn test_from_coo_orientation() {
    // A =
    //[ 1.0   ⋅  ]
    //[  ⋅    ⋅  ]
    //[ 2.0  3.0 ]
    let entries = [
        CooEntry::new(2, 1, 3.),
        CooEntry::new(0, 0, 1.),
        CooEntry::new(2, 0, 2.),
    ];
    let settings = AssemblySettings::default();

    let R = CsMatrix::from_coo(3, 2, &entries, &settings, MatrixOrientation::Row).unwrap();
    assert_eq!((R.major_dim(), R.minor_dim()), (3, 2));
    assert_eq!(*R.line(2).unwrap(), vec![Entry::new(0, 2.), Entry::new(1, 3.)]);

    let C = CsMatrix::from_coo(3, 2, &entries, &settings, MatrixOrientation::Column).unwrap();
    assert_eq!((C.major_dim(), C.minor_dim()), (2, 3));
    assert_eq!(*C.line(0).unwrap(), vec![Entry::new(0, 1.), Entry::new(2, 2.)]);
    assert_eq!(*C.line(1).unwrap(), vec![Entry::new(2, 3.)]);

    assert_eq!(R.transpose(), C);
}

#[test]
fn test_from_coo_duplicates() {
    let entries = [
        CooEntry::new(0, 1, 1.),
        CooEntry::new(0, 0, 4.),
        CooEntry::new(0, 1, 2.),
        CooEntry::new(1, 0, 5.),
        CooEntry::new(1, 0, -5.),
    ];
    let mut settings = AssemblySettings::default();

    let A = CsMatrix::from_coo(2, 2, &entries, &settings, MatrixOrientation::Row).unwrap();
    assert_eq!(A.nnz(), 5);
    assert_eq!(
        *A.line(0).unwrap(),
        vec![Entry::new(0, 4.), Entry::new(1, 1.), Entry::new(1, 2.)]
    );

    settings.duplicates = DuplicatePolicy::Sum;
    let A = CsMatrix::from_coo(2, 2, &entries, &settings, MatrixOrientation::Row).unwrap();
    assert_eq!(*A.line(0).unwrap(), vec![Entry::new(0, 4.), Entry::new(1, 3.)]);
    assert!(A.line(1).unwrap().is_empty());

    settings.duplicates = DuplicatePolicy::Reject;
    let err = CsMatrix::from_coo(2, 2, &entries, &settings, MatrixOrientation::Column);
    assert_eq!(err, Err(SparseMatrixError::DuplicateEntry { row: 1, column: 0 }));
}

#[test]
fn test_from_coo_bounds() {
    let settings = AssemblySettings::default();
    let bad_row = [CooEntry::new(2, 0, 1.)];
    let bad_col = [CooEntry::new(0, 3, 1.)];

    assert_eq!(
        CsMatrix::from_coo(2, 3, &bad_row, &settings, MatrixOrientation::Row),
        Err(SparseMatrixError::IndexOutOfRange { index: 2, dim: 2 })
    );
    assert_eq!(
        CsMatrix::from_coo(2, 3, &bad_col, &settings, MatrixOrientation::Column),
        Err(SparseMatrixError::IndexOutOfRange { index: 3, dim: 3 })
    );
}
