use ndarray::Axis;
use tracing::{debug, trace};

use super::error::MultiOutputError;
use super::fit_params::FitParams;
use super::hyperparams::{MultiOutputRegressorParams, MultiOutputRegressorValidParams};
use super::param_guard::ParamGuard;
use super::traits::{Fit, FittedMetadata, Regressor};
use crate::datasets::{AsMultiTargets, DatasetBase, DesignMatrix};
use crate::parallelism::Parallelism;
use crate::Float;

/// The MultiOutputRegressor estimator
///
/// Fits one independent copy of a single-target regressor per target column.
/// The fitted estimators are stored in column order. The number of input
/// features and their names are taken from the first fitted estimator, when it
/// reports them.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiOutputRegressor<M> {
    estimators: Vec<M>,
    n_features_in: Option<usize>,
    feature_names_in: Option<Vec<String>>,
}

impl<M> MultiOutputRegressor<M> {
    /// This method wraps an estimator template into multi-output
    /// hyperparameters.
    pub fn params<R>(estimator: R) -> MultiOutputRegressorParams<R>
    where
        R: Regressor<Object = M>,
    {
        MultiOutputRegressorParams::new(estimator)
    }

    /// The fitted estimators, `estimators()[i]` being fitted on column `i`.
    pub fn estimators(&self) -> &[M] {
        &self.estimators
    }

    pub fn estimator(&self, column: usize) -> Option<&M> {
        self.estimators.get(column)
    }

    pub fn into_estimators(self) -> Vec<M> {
        self.estimators
    }

    pub fn n_outputs(&self) -> usize {
        self.estimators.len()
    }

    pub fn n_features_in(&self) -> Option<usize> {
        self.n_features_in
    }

    pub fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }
}

impl<M> FittedMetadata for MultiOutputRegressor<M> {
    fn n_features_in(&self) -> Option<usize> {
        self.n_features_in
    }

    fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }
}

/// Checks that the targets form a non-empty table of finite values with at
/// least two columns.
fn validate_targets<F, T, E>(targets: &T) -> Result<(), MultiOutputError<E>>
where
    F: Float,
    T: AsMultiTargets<Elem = F>,
{
    let n_outputs = targets.n_outputs();
    if n_outputs < 2 {
        return Err(MultiOutputError::SingleOutput { n_outputs });
    }
    if targets.n_samples() == 0 {
        return Err(MultiOutputError::EmptyTargets);
    }
    let Y = targets.as_multi_targets();
    for (row, values) in Y.axis_iter(Axis(0)).enumerate() {
        if let Some(column) = values.iter().position(|v| !v.is_finite()) {
            return Err(MultiOutputError::NonFiniteTarget { row, column });
        }
    }
    Ok(())
}

impl<R: Regressor> MultiOutputRegressorValidParams<R> {
    /// Fits one clone of the template per target column. `fit_params`, when
    /// given and not empty, holds one parameter set per column; otherwise every
    /// column is fitted with an empty parameter set.
    ///
    /// Either every column is fitted or an error is returned: the first column
    /// fit to fail is reported with its index, and no estimator is kept.
    pub fn fit_with_params<DM, T>(
        &self,
        dataset: &DatasetBase<DM, T>,
        fit_params: Option<&[FitParams<R::Elem>]>,
    ) -> Result<MultiOutputRegressor<R::Object>, MultiOutputError<R::Error>>
    where
        R::Object: FittedMetadata,
        DM: DesignMatrix<Elem = R::Elem> + Sync,
        T: AsMultiTargets<Elem = R::Elem> + Sync,
    {
        let targets = dataset.targets();
        validate_targets::<_, _, R::Error>(targets)?;

        let n_samples = targets.n_samples();
        if let Some(sample_weight) = dataset.sample_weight() {
            if !self.estimator().fit_support().supports_sample_weight() {
                return Err(MultiOutputError::UnsupportedSampleWeight);
            }
            if sample_weight.len() != n_samples {
                return Err(MultiOutputError::SampleWeightLength {
                    expected: n_samples,
                    found: sample_weight.len(),
                });
            }
        }

        let n_outputs = targets.n_outputs();
        let default_params;
        let fit_params = match fit_params {
            Some(fit_params) if !fit_params.is_empty() => {
                if fit_params.len() != n_outputs {
                    return Err(MultiOutputError::FitParamsLength {
                        expected: n_outputs,
                        found: fit_params.len(),
                    });
                }
                fit_params
            }
            _ => {
                default_params = vec![FitParams::new(); n_outputs];
                &default_params[..]
            }
        };

        let parallelism = Parallelism::from_threads(self.n_jobs());
        debug!(
            n_outputs,
            n_samples,
            n_threads = parallelism.correct_for_workload(n_outputs).n_threads(),
            "fitting multi-output regressor"
        );

        let estimators = parallelism.ordered_map(n_outputs, |column| {
            trace!(column, "fitting target column");
            let estimator = self.estimator().clone();
            estimator
                .fit_target(&dataset.column(column), &fit_params[column])
                .map_err(|source| MultiOutputError::ColumnFit { column, source })
        })?;

        let first = &estimators[0];
        let n_features_in = first.n_features_in();
        let feature_names_in = first.feature_names_in().map(<[String]>::to_vec);

        debug!(n_outputs, ?n_features_in, "fitted multi-output regressor");

        Ok(MultiOutputRegressor {
            estimators,
            n_features_in,
            feature_names_in,
        })
    }
}

impl<R: Regressor> MultiOutputRegressorParams<R> {
    /// Checks the hyperparameters, then calls
    /// [`MultiOutputRegressorValidParams::fit_with_params`].
    pub fn fit_with_params<DM, T>(
        &self,
        dataset: &DatasetBase<DM, T>,
        fit_params: Option<&[FitParams<R::Elem>]>,
    ) -> Result<MultiOutputRegressor<R::Object>, MultiOutputError<R::Error>>
    where
        R::Object: FittedMetadata,
        DM: DesignMatrix<Elem = R::Elem> + Sync,
        T: AsMultiTargets<Elem = R::Elem> + Sync,
    {
        self.check_ref()?.fit_with_params(dataset, fit_params)
    }
}

/// Fitting without per-column parameters. Sample weights, if any, are read
/// from the dataset.
impl<R, DM, T> Fit<DM, T, MultiOutputError<R::Error>> for MultiOutputRegressorValidParams<R>
where
    R: Regressor,
    R::Object: FittedMetadata,
    DM: DesignMatrix<Elem = R::Elem> + Sync,
    T: AsMultiTargets<Elem = R::Elem> + Sync,
{
    type Object = MultiOutputRegressor<R::Object>;

    fn fit(
        &self,
        dataset: &DatasetBase<DM, T>,
    ) -> Result<Self::Object, MultiOutputError<R::Error>> {
        self.fit_with_params(dataset, None)
    }
}
