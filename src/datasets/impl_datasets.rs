use super::{AsMultiTargets, CSCArray, ColumnDataset, DatasetBase, DesignMatrix};
use crate::Float;
use ndarray::{Array1, ArrayBase, ArrayView1, Axis, Data, Ix2};

/// This implementation block provides a method for the creation of datasets
/// from dense matrices.
impl<F: Float, D: Data<Elem = F>, T: AsMultiTargets> From<(ArrayBase<D, Ix2>, T)>
    for DatasetBase<ArrayBase<D, Ix2>, T>
{
    fn from(data: (ArrayBase<D, Ix2>, T)) -> Self {
        DatasetBase::new(data.0, data.1)
    }
}

/// This implementation block provides a method for the creation of datasets
/// from sparse matrices.
impl<'a, F: Float, T: AsMultiTargets> From<(CSCArray<'a, F>, T)> for DatasetBase<CSCArray<'a, F>, T> {
    fn from(data: (CSCArray<'a, F>, T)) -> Self {
        DatasetBase::new(data.0, data.1)
    }
}

/// This implementation block provides methods to get record and target objects
/// from the dataset.
impl<DM: DesignMatrix, T: AsMultiTargets> DatasetBase<DM, T> {
    /// This method instantiates a new dataset from a design matrix and targets.
    pub fn new(design_matrix: DM, targets: T) -> DatasetBase<DM, T> {
        DatasetBase {
            design_matrix,
            targets,
            sample_weight: None,
            feature_names: None,
        }
    }

    /// Attaches per-sample weights, shared by every target column.
    pub fn with_sample_weight(mut self, sample_weight: Array1<DM::Elem>) -> Self {
        self.sample_weight = Some(sample_weight);
        self
    }

    /// Attaches one name per feature of the design matrix.
    pub fn with_feature_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.feature_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// This method is a getter for the targets.
    pub fn targets(&self) -> &T {
        &self.targets
    }

    /// This method is a getter for the design matrix.
    pub fn design_matrix(&self) -> &DM {
        &self.design_matrix
    }

    pub fn sample_weight(&self) -> Option<ArrayView1<DM::Elem>> {
        self.sample_weight.as_ref().map(|w| w.view())
    }

    pub fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    pub fn n_samples(&self) -> usize {
        self.targets.n_samples()
    }

    pub fn n_outputs(&self) -> usize {
        self.targets.n_outputs()
    }
}

impl<DM, T> DatasetBase<DM, T>
where
    DM: DesignMatrix,
    T: AsMultiTargets<Elem = DM::Elem>,
{
    /// Borrows target column `column` together with the shared design matrix,
    /// weights and feature names.
    ///
    /// Panics if `column >= self.n_outputs()`.
    pub fn column(&self, column: usize) -> ColumnDataset<'_, DM> {
        ColumnDataset {
            column,
            design_matrix: &self.design_matrix,
            target: self
                .targets
                .as_multi_targets()
                .index_axis_move(Axis(1), column),
            sample_weight: self.sample_weight(),
            feature_names: self.feature_names(),
        }
    }
}

impl<'a, DM: DesignMatrix> ColumnDataset<'a, DM> {
    pub fn n_samples(&self) -> usize {
        self.target.len()
    }

    pub fn n_features(&self) -> usize {
        self.design_matrix.n_features()
    }
}
