use crate::algebra::{CooEntry, CscMatrix, CsrMatrix, FloatT, ShapedMatrix};
use std::fmt;

fn write_entries<T: FloatT>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    size: (usize, usize),
    entries: impl Iterator<Item = CooEntry<T>>,
) -> fmt::Result {
    let entries: Vec<CooEntry<T>> = entries.collect();
    writeln!(
        f,
        "{} x {} {} with {} stored entries:",
        size.0,
        size.1,
        name,
        entries.len()
    )?;
    for e in entries {
        writeln!(f, "  [{}, {}]  =  {}", e.row, e.column, e.value)?;
    }
    Ok(())
}

impl<T> fmt::Display for CsrMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, "CsrMatrix", self.size(), self.iter_coo())
    }
}

impl<T> fmt::Display for CscMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_entries(f, "CscMatrix", self.size(), self.iter_coo())
    }
}

#[test]
fn test_display() {
    let A = CsrMatrix::new(2, 3, &[CooEntry::new(1, 2, 3.), CooEntry::new(0, 0, 1.)]).unwrap();
    let expected = "2 x 3 CsrMatrix with 2 stored entries:\n  [0, 0]  =  1\n  [1, 2]  =  3\n";
    assert_eq!(A.to_string(), expected);

    let expected = "3 x 2 CscMatrix with 2 stored entries:\n  [0, 0]  =  1\n  [2, 1]  =  3\n";
    assert_eq!(A.reinterpret_as_csc().to_string(), expected);
}
