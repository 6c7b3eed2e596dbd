use ndarray::ArrayView1;

/// A borrowed sparse matrix in Compressed Sparse Column format.
///
/// Column `j` holds the values `data[indptr[j]..indptr[j + 1]]` located at rows
/// `indices[indptr[j]..indptr[j + 1]]`. The number of rows is stored explicitly
/// since trailing empty rows leave no trace in the indices.
#[derive(Debug, Clone, PartialEq)]
pub struct CSCArray<'a, T> {
    pub data: ArrayView1<'a, T>,
    pub indices: ArrayView1<'a, i32>,
    pub indptr: ArrayView1<'a, i32>,
    pub n_rows: usize,
}

impl<'a, T> CSCArray<'a, T> {
    pub fn new(
        data: ArrayView1<'a, T>,
        indices: ArrayView1<'a, i32>,
        indptr: ArrayView1<'a, i32>,
        n_rows: usize,
    ) -> CSCArray<'a, T> {
        CSCArray {
            data,
            indices,
            indptr,
            n_rows,
        }
    }

    /// Returns the range of positions in `data` and `indices` that belong to
    /// column `j`.
    pub(crate) fn column_range(&self, j: usize) -> std::ops::Range<usize> {
        self.indptr[j] as usize..self.indptr[j + 1] as usize
    }
}
