#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_3x4() -> CsrMatrix<f64> {
    // A =
    //[-1.0  -17.0  6.0  10.0]
    //[ 3.0     ⋅   7.0    ⋅ ]
    //[  ⋅    -4.0   ⋅   -5.0]
    let entries = [
        CooEntry::new(2, 3, -5.),
        CooEntry::new(0, 0, -1.),
        CooEntry::new(1, 2, 7.),
        CooEntry::new(0, 3, 10.),
        CooEntry::new(2, 1, -4.),
        CooEntry::new(0, 1, -17.),
        CooEntry::new(1, 0, 3.),
        CooEntry::new(0, 2, 6.),
    ];
    CsrMatrix::new(3, 4, &entries).unwrap()
}

fn test_matrix_4x4() -> CscMatrix<f64> {
    // A =
    //[ 4.0  -3.0   7.0    ⋅ ]
    //[  ⋅    8.0  -1.0    ⋅ ]
    //[ 1.0    ⋅    2.0  -3.0]
    //[  ⋅   -1.0    ⋅    1.0]
    let entries = [
        (0, 0, 4.),
        (2, 0, 1.),
        (0, 1, -3.),
        (1, 1, 8.),
        (3, 1, -1.),
        (0, 2, 7.),
        (1, 2, -1.),
        (2, 2, 2.),
        (2, 3, -3.),
        (3, 3, 1.),
    ]
    .map(|(row, col, val)| CooEntry::new(row, col, val));
    CscMatrix::new(4, 4, &entries).unwrap()
}

#[test]
fn test_nrows_ncols_nnz_is_square() {
    let A = test_matrix_3x4();
    let B = test_matrix_4x4();
    assert_eq!(A.nrows(), 3);
    assert_eq!(A.ncols(), 4);
    assert_eq!(B.nrows(), 4);
    assert_eq!(B.ncols(), 4);
    assert!(!A.is_square());
    assert!(B.is_square());
    assert_eq!(A.nnz(), 8);
    assert_eq!(B.nnz(), 10);
    assert_eq!(A.orientation(), MatrixOrientation::Row);
    assert_eq!(B.orientation(), MatrixOrientation::Column);
}

#[test]
fn test_dim() {
    let A = test_matrix_3x4();
    assert_eq!(
        A.dim(),
        Err(SparseMatrixError::DimensionMismatch { major: 3, minor: 4 })
    );
    assert_eq!(test_matrix_4x4().dim(), Ok(4));
    assert_eq!(CsrMatrix::<f64>::zeros(3, 3).dim(), Ok(3));
}

#[test]
fn test_csr_rows_sorted() {
    let A = test_matrix_3x4();
    assert!(A.as_inner().check_format().is_ok());

    let row = A.row_vector(0).unwrap();
    let indices: Vec<usize> = row.entries().iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2, 3]);
    assert_eq!(A.get(0, 1), Some(-17.));
    assert_eq!(A.get(1, 1), None);
}

#[test]
fn test_csc_columns_sorted() {
    let B = test_matrix_4x4();
    assert!(B.as_inner().check_format().is_ok());

    let col = B.column_vector(1).unwrap();
    assert_eq!(col.n, 4);
    assert_eq!(
        *col.entries(),
        vec![Entry::new(0, -3.), Entry::new(1, 8.), Entry::new(3, -1.)]
    );
    assert_eq!(B.get(3, 1), Some(-1.));
    assert_eq!(B.get(1, 3), None);
}

#[test]
fn test_zero_filtering() {
    let entries = [CooEntry::new(0, 0, 0.0), CooEntry::new(1, 1, 5.0)];

    let A = CsrMatrix::new(2, 2, &entries).unwrap();
    assert_eq!(A.nnz(), 1);
    assert_eq!(A.get(1, 1), Some(5.));
    assert!(A.row_vector(0).unwrap().entries().is_empty());

    let B = CscMatrix::new(2, 2, &entries).unwrap();
    assert_eq!(B.nnz(), 1);
    assert_eq!(B.get(1, 1), Some(5.));
}

#[test]
fn test_csr_set_dim() {
    let mut A = CsrMatrix::new(3, 3, &[CooEntry::new(2, 2, 1.)]).unwrap();
    A.set_dim(2, 2);
    assert_eq!(A.nnz(), 0);
    assert_eq!((A.rows(), A.columns()), (2, 2));

    let mut A = CsrMatrix::new(2, 2, &[CooEntry::new(1, 1, 7.)]).unwrap();
    A.set_dim(4, 4);
    assert_eq!(A.rows(), 4);
    assert_eq!(A.columns(), 4);
    assert_eq!(*A.row_vector(1).unwrap().entries(), vec![Entry::new(1, 7.)]);
    assert!(A.row_vector(3).unwrap().entries().is_empty());
}

#[test]
fn test_csc_set_dim() {
    // drop the last column and the last row
    let mut B = test_matrix_4x4();
    B.set_dim(3, 3);
    assert_eq!((B.rows(), B.columns()), (3, 3));
    assert_eq!(B.nnz(), 7);
    assert_eq!(B.get(2, 2), Some(2.));
    assert_eq!(B.get(3, 1), None);
    assert!(B.as_inner().check_format().is_ok());

    // rows and columns grow independently
    B.set_dim(5, 3);
    assert_eq!((B.rows(), B.columns()), (5, 3));
    assert_eq!(B.column_vector(0).unwrap().n, 5);
}

#[test]
fn test_csr_transpose() {
    let A = test_matrix_3x4();
    let At = A.transpose();

    assert_eq!((At.rows(), At.columns()), (4, 3));
    assert_eq!(At.nnz(), A.nnz());
    assert!(At.as_inner().check_format().is_ok());
    for e in A.iter_coo() {
        assert_eq!(At.get(e.column, e.row), Some(e.value));
    }
    assert_eq!(At.transpose(), A);
}

#[test]
fn test_csc_transpose() {
    let B = test_matrix_4x4();
    let Bt = B.transpose();

    assert_eq!(Bt.nnz(), B.nnz());
    assert_eq!(Bt.get(0, 2), Some(1.));
    assert_eq!(Bt.get(2, 0), Some(7.));
    assert_eq!(Bt.transpose(), B);
}

#[test]
fn test_reinterpret() {
    let A = test_matrix_3x4();
    let C = A.reinterpret_as_csc();

    // C is the transpose of A, stored in the same lines
    assert_eq!((C.rows(), C.columns()), (4, 3));
    for j in 0..C.columns() {
        let row = A.row_vector(j).unwrap();
        let col = C.column_vector(j).unwrap();
        assert!(row.shares_storage(&col));
        assert_eq!(*row.entries(), *col.entries());
    }
    assert_eq!(C, A.transpose().to_csc());

    let R = C.reinterpret_as_csr();
    assert_eq!(R, A);
    assert!(R.row_vector(2).unwrap().shares_storage(&A.row_vector(2).unwrap()));
}

#[test]
fn test_format_conversion() {
    let A = test_matrix_3x4();
    let B = A.to_csc();

    assert_eq!(B.size(), A.size());
    assert_eq!(B.nnz(), A.nnz());
    for e in A.iter_coo() {
        assert_eq!(B.get(e.row, e.column), Some(e.value));
    }
    assert!(!B.column_vector(0).unwrap().shares_storage(&A.row_vector(0).unwrap()));
    assert_eq!(B.to_csr(), A);
}

#[test]
fn test_identity() {
    let I: CsrMatrix<f64> = CsrMatrix::identity(3);
    assert_eq!(I.nnz(), 3);
    assert_eq!(I.transpose(), I);
    assert_eq!(I.to_csc(), CscMatrix::identity(3));
    assert_eq!(I.get(2, 2), Some(1.));
}

#[test]
fn test_iter_coo_order() {
    let B = test_matrix_4x4();
    let coords: Vec<(usize, usize)> = B.iter_coo().map(|e| (e.row, e.column)).collect();
    assert_eq!(coords[..3], [(0, 0), (2, 0), (0, 1)]);

    let A = B.to_csr();
    let coords: Vec<(usize, usize)> = A.iter_coo().map(|e| (e.row, e.column)).collect();
    assert_eq!(coords[..3], [(0, 0), (0, 1), (0, 2)]);
}

#[test]
fn test_deep_copy_and_drop_zeros() {
    let A = test_matrix_3x4();
    let mut D = A.deep_copy();
    assert_eq!(D, A);

    D.row_vector(0).unwrap().entries_mut()[1].value = 0.;
    assert_eq!(A.get(0, 1), Some(-17.));
    assert_eq!(D.nnz(), 8);

    D.drop_zeros();
    assert_eq!(D.nnz(), 7);
    assert_eq!(D.get(0, 1), None);
}

#[test]
fn test_f32_values() {
    let A: CsrMatrix<f32> = CsrMatrix::new(2, 2, &[CooEntry::new(0, 1, 2.5f32)]).unwrap();
    assert_eq!(A.transpose().get(1, 0), Some(2.5f32));
}
