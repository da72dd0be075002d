use crate::algebra::{Entry, FloatT};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// Shared storage for one compressed line.
///
/// Lines are reference counted so that row / column vectors and
/// reinterpreted matrices can share entries with the matrix they came from.
pub type Line<T> = Rc<RefCell<Vec<Entry<T>>>>;

pub(crate) fn new_line<T>(entries: Vec<Entry<T>>) -> Line<T> {
    Rc::new(RefCell::new(entries))
}

/// Sparse vector type, i.e. a single compressed row or column.
///
/// A vector obtained from [`CsrMatrix::row_vector`](crate::algebra::CsrMatrix::row_vector)
/// or [`CscMatrix::column_vector`](crate::algebra::CscMatrix::column_vector)
/// is a live window onto the matrix storage, not a snapshot.  Entries
/// modified through [`entries_mut`](SparseVector::entries_mut) are modified
/// in the matrix too.  Callers are responsible for keeping the entries
/// sorted by strictly increasing index, with every index less than `n`.

#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector<T = f64> {
    /// vector dimension
    pub n: usize,
    entries: Line<T>,
}

impl<T> SparseVector<T>
where
    T: FloatT,
{
    /// Creates a `SparseVector` from a dense slice, dropping zeros.
    pub fn new(values: &[T]) -> Self {
        let entries = values
            .iter()
            .enumerate()
            .filter(|(_, v)| **v != T::zero())
            .map(|(i, &v)| Entry::new(i, v))
            .collect();

        SparseVector {
            n: values.len(),
            entries: new_line(entries),
        }
    }

    /// Creates a `SparseVector` of dimension `n` owning the given entries.
    ///
    /// The entries are taken as-is.   No sorting or bounds checking is performed.
    pub fn from_entries(n: usize, entries: Vec<Entry<T>>) -> Self {
        SparseVector {
            n,
            entries: new_line(entries),
        }
    }

    pub(crate) fn from_line(n: usize, entries: Line<T>) -> Self {
        SparseVector { n, entries }
    }

    pub(crate) fn line(&self) -> &Line<T> {
        &self.entries
    }

    /// number of stored entries
    pub fn nnz(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Borrow the stored entries.
    ///
    /// # Panics
    /// Panics if the entries are currently mutably borrowed through an alias.
    pub fn entries(&self) -> Ref<'_, Vec<Entry<T>>> {
        self.entries.borrow()
    }

    /// Mutably borrow the stored entries.  Changes are visible through
    /// every matrix or vector sharing this line.
    ///
    /// # Panics
    /// Panics if the entries are currently borrowed through an alias.
    pub fn entries_mut(&self) -> RefMut<'_, Vec<Entry<T>>> {
        self.entries.borrow_mut()
    }

    /// Returns the value at index `i`, or `None` if it is not stored.
    pub fn get(&self, i: usize) -> Option<T> {
        let entries = self.entries.borrow();
        entries
            .binary_search_by_key(&i, |e| e.index)
            .ok()
            .map(|k| entries[k].value)
    }

    /// True if `self` and `other` share the same entry storage
    pub fn shares_storage(&self, other: &SparseVector<T>) -> bool {
        Rc::ptr_eq(&self.entries, &other.entries)
    }

    /// A copy of this vector with its own entry storage
    pub fn deep_copy(&self) -> Self {
        SparseVector::from_entries(self.n, self.entries.borrow().clone())
    }

    /// Removes explicitly stored zeros in place.
    pub fn dropzeros(&mut self) {
        self.entries.borrow_mut().retain(|e| e.value != T::zero());
    }
}

impl<T> From<SparseVector<T>> for Vec<T>
where
    T: FloatT,
{
    fn from(sv: SparseVector<T>) -> Vec<T> {
        let mut v = vec![T::zero(); sv.n];
        for e in sv.entries.borrow().iter() {
            v[e.index] = e.value;
        }
        v
    }
}

impl<T> fmt::Display for SparseVector<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}-element SparseVector with {} stored entries:", self.n, self.nnz())?;
        for e in self.entries.borrow().iter() {
            writeln!(f, "  [{}]  =  {}", e.index, e.value)?;
        }
        Ok(())
    }
}

#[test]
fn test_sparsevector_new() {
    let v = vec![0.1, 0.3, 0.0, 0.0, 0.4, 0.0];

    let vs = SparseVector::new(&v);

    assert_eq!(vs.n, v.len());
    assert_eq!(
        *vs.entries(),
        vec![Entry::new(0, 0.1), Entry::new(1, 0.3), Entry::new(4, 0.4)]
    );
    assert_eq!(vs.get(4), Some(0.4));
    assert_eq!(vs.get(2), None);

    let vback: Vec<f64> = vs.into();
    assert_eq!(v, vback);
}

#[test]
fn test_sparsevector_dropzeros() {
    let x = vec![0.1, 0.3, 0.2, 0.0, 0.4, 0.0];
    let y = vec![0.1, 0.3, 0.0, 0.0, 0.4, 0.0];

    let mut xs = SparseVector::new(&x);
    xs.entries_mut()[2].value = 0.0;
    xs.dropzeros();

    let ys = SparseVector::new(&y);

    assert_eq!(xs, ys);
}

#[test]
fn test_sparsevector_sharing() {
    let xs = SparseVector::new(&[1., 0., 2.]);
    let alias = xs.clone();
    let copy = xs.deep_copy();

    assert!(xs.shares_storage(&alias));
    assert!(!xs.shares_storage(&copy));

    alias.entries_mut()[0].value = 5.;
    assert_eq!(xs.get(0), Some(5.));
    assert_eq!(copy.get(0), Some(1.));
}
