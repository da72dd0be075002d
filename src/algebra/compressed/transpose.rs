use crate::algebra::sparsevector::new_line;
use crate::algebra::{CsMatrix, Entry, FloatT};

impl<T> CsMatrix<T>
where
    T: FloatT,
{
    /// Logical transpose, returning a freshly allocated matrix with the
    /// major and minor dimensions swapped.
    ///
    /// Runs in O(nnz + major_dim + minor_dim) time.   The source is visited
    /// line by line in increasing major index, so each destination line is
    /// filled in increasing index order and needs no sorting.
    ///
    /// # Panics
    /// Panics if an entry index is not less than the minor dimension.
    pub fn transpose(&self) -> CsMatrix<T> {
        // count the entries landing in each destination line
        let mut counts = vec![0usize; self.minor_dim()];
        for line in self.lines() {
            for e in line.borrow().iter() {
                counts[e.index] += 1;
            }
        }

        // allocate each destination line at its final size
        let mut lines: Vec<Vec<Entry<T>>> = counts
            .into_iter()
            .map(Vec::with_capacity)
            .collect();

        for (major, line) in self.lines().iter().enumerate() {
            for e in line.borrow().iter() {
                lines[e.index].push(Entry::new(major, e.value));
            }
        }

        CsMatrix::from_lines(
            self.minor_dim(),
            self.major_dim(),
            lines.into_iter().map(new_line).collect(),
        )
    }
}

#[test]
fn test_cs_transpose() {
    // A =
    //[ 1.0   ⋅   2.0]
    //[  ⋅    ⋅   3.0]
    let A = CsMatrix::new(
        2,
        3,
        vec![
            vec![Entry::new(0, 1.), Entry::new(2, 2.)],
            vec![Entry::new(2, 3.)],
        ],
    );
    let At = A.transpose();

    assert_eq!(At.major_dim(), 3);
    assert_eq!(At.minor_dim(), 2);
    assert_eq!(*At.line(0).unwrap(), vec![Entry::new(0, 1.)]);
    assert!(At.line(1).unwrap().is_empty());
    assert_eq!(*At.line(2).unwrap(), vec![Entry::new(0, 2.), Entry::new(1, 3.)]);

    assert_eq!(At.transpose(), A);

    // no shared storage
    At.lines()[2].borrow_mut()[0].value = 9.;
    assert_eq!(A.get_entry(0, 2), Some(2.));
}

#[test]
fn test_cs_transpose_empty() {
    let A: CsMatrix<f64> = CsMatrix::zeros(0, 4);
    let At = A.transpose();
    assert_eq!(At.major_dim(), 4);
    assert_eq!(At.minor_dim(), 0);
    assert_eq!(At.nnz(), 0);
    assert!(At.check_format().is_ok());
}
