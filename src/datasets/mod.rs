use ndarray::{Array1, ArrayView1, ArrayView2};

use crate::Float;

pub mod csc_array;
mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;

#[cfg(test)]
mod tests;

pub use csc_array::CSCArray;

/// A dataset combines a design matrix with the targets to regress. Sample
/// weights and feature names are optional and shared by every target.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
{
    pub design_matrix: DM,
    pub targets: T,
    pub sample_weight: Option<Array1<DM::Elem>>,
    pub feature_names: Option<Vec<String>>,
}

/// A single target column of a [`DatasetBase`], borrowed for the duration of
/// one fit. This is what a per-column estimator sees.
#[derive(Debug, Clone)]
pub struct ColumnDataset<'a, DM>
where
    DM: DesignMatrix,
{
    pub column: usize,
    pub design_matrix: &'a DM,
    pub target: ArrayView1<'a, DM::Elem>,
    pub sample_weight: Option<ArrayView1<'a, DM::Elem>>,
    pub feature_names: Option<&'a [String]>,
}

/// The operations a coordinate descent solver needs from a design matrix.
/// Implemented for dense `ndarray` matrices and for [`CSCArray`].
pub trait DesignMatrix: Sized {
    type Elem: Float;

    fn n_samples(&self) -> usize;
    fn n_features(&self) -> usize;

    /// Computes `sum_i s_i * X[i, j] * v[i]`.
    fn weighted_column_dot(
        &self,
        j: usize,
        v: ArrayView1<Self::Elem>,
        sample_weight: ArrayView1<Self::Elem>,
    ) -> Self::Elem;

    /// Computes `sum_i s_i * X[i, j]^2`.
    fn weighted_column_sq_norm(&self, j: usize, sample_weight: ArrayView1<Self::Elem>)
        -> Self::Elem;

    /// Performs `r -= diff * X[:, j]` in place.
    fn update_residuals(&self, r: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize);

    /// Computes the matrix-vector product `Xw`.
    fn linear_predict(&self, w: ArrayView1<Self::Elem>) -> Array1<Self::Elem>;
}

/// Targets that can be viewed as an `n_samples x n_outputs` table.
pub trait AsMultiTargets {
    type Elem;

    fn n_samples(&self) -> usize;
    fn n_outputs(&self) -> usize;
    fn as_multi_targets(&self) -> ArrayView2<Self::Elem>;
}

/// Marker for targets holding exactly one output.
pub trait AsSingleTargets: AsMultiTargets {
    fn as_single_target(&self) -> ArrayView1<Self::Elem>;
}
