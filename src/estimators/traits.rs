use super::fit_params::FitParams;
use crate::datasets::{AsMultiTargets, ColumnDataset, DatasetBase, DesignMatrix};
use crate::Float;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset (a combination
/// of design matrix and targets). More formally, the model estimates coefficients
/// that minimizes an empirical risk (loss function).
pub trait Fit<DM: DesignMatrix, T: AsMultiTargets, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> Result<Self::Object, E>;
}

/// What an estimator template declares about its fit method.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FitSupport {
    /// The template cannot be fitted.
    Unsupported,
    /// The template can be fitted, without sample weights.
    Unweighted,
    /// The template can be fitted, with or without sample weights.
    Weighted,
}

impl FitSupport {
    pub fn can_fit(self) -> bool {
        !matches!(self, FitSupport::Unsupported)
    }

    pub fn supports_sample_weight(self) -> bool {
        matches!(self, FitSupport::Weighted)
    }
}

/// A single-target regressor used as a template by
/// [`MultiOutputRegressor`](super::MultiOutputRegressor).
///
/// The template is cloned once per target column and never mutated. Each clone
/// is fitted on its own [`ColumnDataset`] and produces an independent
/// [`Self::Object`].
pub trait Regressor: Clone + Send + Sync {
    type Elem: Float;
    type Object: Send;
    type Error: std::error::Error + Send + 'static;

    /// Declares whether this template can be fitted, and with sample weights.
    fn fit_support(&self) -> FitSupport;

    /// Fits the regressor on a single target column. `params` holds the
    /// parameters specific to this column and may be empty.
    fn fit_target<DM>(
        &self,
        dataset: &ColumnDataset<DM>,
        params: &FitParams<Self::Elem>,
    ) -> Result<Self::Object, Self::Error>
    where
        DM: DesignMatrix<Elem = Self::Elem>;
}

/// Metadata a fitted estimator may report about the data it was fitted on.
/// Both attributes are optional.
pub trait FittedMetadata {
    fn n_features_in(&self) -> Option<usize> {
        None
    }

    fn feature_names_in(&self) -> Option<&[String]> {
        None
    }
}
