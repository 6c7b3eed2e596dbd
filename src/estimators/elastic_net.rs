use ndarray::{Array1, ArrayBase, ArrayView1, ArrayView2, Ix1, ViewRepr};
use tracing::{debug, trace, warn};

use super::error::{EstimatorError, Result};
use super::fit_params::FitParams;
use super::hyperparams::{ElasticNetParams, ElasticNetValidParams};
use super::param_guard::ParamGuard;
use super::traits::{Fit, FitSupport, FittedMetadata, Regressor};
use crate::datasets::{AsSingleTargets, ColumnDataset, DatasetBase, DesignMatrix};
use crate::helpers::prox::soft_thresholding;
use crate::Float;

/// Fit parameters understood by [`ElasticNet`]:
///
/// - `alpha` (scalar): overrides the regularization of the template
/// - `init_coef` (vector): warm-start coefficients
/// - `init_intercept` (scalar): warm-start intercept
/// - `eval_X` (matrix) and `eval_y` (vector): a held-out evaluation set
/// - `early_stopping_rounds` (integer): stop after that many epochs without
///   improvement of the evaluation loss and keep the best epoch
pub const ELASTIC_NET_FIT_PARAMS: &[&str] = &[
    "alpha",
    "init_coef",
    "init_intercept",
    "eval_X",
    "eval_y",
    "early_stopping_rounds",
];

/// The ElasticNet estimator
///
/// The ElasticNet estimator solves a weighted least-squares regression problem
/// regularized by a mix of L1 and L2 penalties. With `l1_ratio = 1` it is the
/// Lasso, whose solutions are sparse.
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNet<F> {
    coefficients: Array1<F>,
    intercept: F,
    n_epochs: usize,
    eval_score: Option<F>,
    n_features_in: usize,
    feature_names_in: Option<Vec<String>>,
}

impl<F: Float> ElasticNet<F> {
    /// This method instantiates an ElasticNet estimator with default parameters
    /// for the coordinate descent solver.
    pub fn params() -> ElasticNetParams<F> {
        ElasticNetParams::new()
    }

    /// This method instantiates a Lasso, an ElasticNet with `l1_ratio = 1`.
    pub fn lasso() -> ElasticNetParams<F> {
        ElasticNetParams::new().l1_ratio(F::one())
    }

    /// This method is a getter for the coefficients vector.
    pub fn coefficients(&self) -> ArrayBase<ViewRepr<&F>, Ix1> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Number of coordinate descent epochs run. With early stopping, this is
    /// the epoch whose coefficients were kept.
    pub fn n_epochs(&self) -> usize {
        self.n_epochs
    }

    /// Mean squared error on the evaluation set, if one was given.
    pub fn eval_score(&self) -> Option<F> {
        self.eval_score
    }
}

impl<F> FittedMetadata for ElasticNet<F> {
    fn n_features_in(&self) -> Option<usize> {
        Some(self.n_features_in)
    }

    fn feature_names_in(&self) -> Option<&[String]> {
        self.feature_names_in.as_deref()
    }
}

struct EvalSet<'a, F> {
    X: ArrayView2<'a, F>,
    y: ArrayView1<'a, F>,
    early_stopping_rounds: Option<usize>,
}

impl<F: Float> EvalSet<'_, F> {
    fn mean_squared_error(&self, w: ArrayView1<F>, intercept: F) -> F {
        let residuals = self.X.dot(&w) + intercept - self.y;
        residuals.mapv(|r| r * r).mean().unwrap_or_else(F::zero)
    }
}

fn read_eval_set<'a, F: Float>(
    params: &'a FitParams<F>,
    n_features: usize,
) -> Result<Option<EvalSet<'a, F>>> {
    let early_stopping_rounds = params.get_integer("early_stopping_rounds")?;
    if early_stopping_rounds == Some(0) {
        return Err(EstimatorError::InvalidEarlyStoppingRounds(0));
    }
    match (params.get_matrix("eval_X")?, params.get_vector("eval_y")?) {
        (Some(X), Some(y)) => {
            if X.ncols() != n_features || X.nrows() != y.len() || y.is_empty() {
                return Err(EstimatorError::EvalSetShape {
                    rows: X.nrows(),
                    cols: X.ncols(),
                    n_targets: y.len(),
                    n_features,
                });
            }
            Ok(Some(EvalSet {
                X,
                y,
                early_stopping_rounds,
            }))
        }
        (None, None) if early_stopping_rounds.is_some() => {
            Err(EstimatorError::EarlyStoppingWithoutEvalSet)
        }
        (None, None) => Ok(None),
        _ => Err(EstimatorError::IncompleteEvalSet),
    }
}

/// Returns the sample weights normalized to sum to one.
fn normalized_sample_weight<F: Float>(
    sample_weight: Option<ArrayView1<F>>,
    n_samples: usize,
) -> Result<Array1<F>> {
    let Some(sample_weight) = sample_weight else {
        return Ok(Array1::from_elem(n_samples, F::one() / F::cast(n_samples)));
    };
    if sample_weight.len() != n_samples {
        return Err(EstimatorError::SampleWeightLength {
            expected: n_samples,
            found: sample_weight.len(),
        });
    }
    if sample_weight.iter().any(|&s| !s.is_finite() || s < F::zero()) {
        return Err(EstimatorError::InvalidSampleWeight);
    }
    let total = sample_weight.sum();
    if total <= F::zero() {
        return Err(EstimatorError::NullSampleWeights);
    }
    Ok(&sample_weight / total)
}

impl<F: Float> ElasticNetValidParams<F> {
    /// Runs cyclic coordinate descent on a single target column.
    fn coordinate_descent<DM: DesignMatrix<Elem = F>>(
        &self,
        dataset: &ColumnDataset<DM>,
        params: &FitParams<F>,
    ) -> Result<ElasticNet<F>> {
        params.check_known(ELASTIC_NET_FIT_PARAMS)?;

        let X = dataset.design_matrix;
        let y = dataset.target;
        let n_samples = X.n_samples();
        let n_features = X.n_features();

        if y.len() != n_samples {
            return Err(EstimatorError::MismatchedSamples {
                n_samples,
                n_targets: y.len(),
            });
        }
        if y.iter().any(|v| !v.is_finite()) {
            return Err(EstimatorError::NonFiniteTarget);
        }
        if let Some(names) = dataset.feature_names {
            if names.len() != n_features {
                return Err(EstimatorError::FeatureNamesLength {
                    expected: n_features,
                    found: names.len(),
                });
            }
        }

        let s = normalized_sample_weight(dataset.sample_weight, n_samples)?;

        let alpha = params.get_scalar("alpha")?.unwrap_or(self.alpha());
        if !alpha.is_finite() || alpha < F::zero() {
            return Err(EstimatorError::InvalidRegularization(
                alpha.to_f32().unwrap_or(f32::NAN),
            ));
        }
        let l1_reg = alpha * self.l1_ratio();
        let l2_reg = alpha * (F::one() - self.l1_ratio());

        let mut w = match params.get_vector("init_coef")? {
            Some(init) if init.len() != n_features => {
                return Err(EstimatorError::InitCoefLength {
                    expected: n_features,
                    found: init.len(),
                })
            }
            Some(init) => init.to_owned(),
            None => Array1::zeros(n_features),
        };
        let mut intercept = params.get_scalar("init_intercept")?.unwrap_or_else(F::zero);
        let eval_set = read_eval_set(params, n_features)?;

        let column_norms: Vec<F> = (0..n_features)
            .map(|j| X.weighted_column_sq_norm(j, s.view()))
            .collect();
        let mut r = &y - &X.linear_predict(w.view()) - intercept;

        let mut n_epochs = 0;
        let mut converged = false;
        let mut best: Option<(F, Array1<F>, F, usize)> = None;
        let mut rounds_without_improvement = 0;

        for epoch in 1..=self.max_epochs() {
            n_epochs = epoch;
            let mut max_update = F::zero();

            if self.fit_intercept() {
                let shift = s.dot(&r);
                intercept += shift;
                r -= shift;
                max_update = max_update.max(shift.abs());
            }

            for j in 0..n_features {
                let old = w[j];
                let rho = X.weighted_column_dot(j, r.view(), s.view()) + column_norms[j] * old;
                let denominator = column_norms[j] + l2_reg;
                let new = if denominator > F::zero() {
                    soft_thresholding(rho, l1_reg) / denominator
                } else {
                    F::zero()
                };
                if new != old {
                    X.update_residuals(&mut r, new - old, j);
                    w[j] = new;
                    max_update = max_update.max((new - old).abs());
                }
            }

            if self.verbose() {
                debug!(column = dataset.column, epoch, max_update = %max_update, "coordinate descent epoch");
            } else {
                trace!(column = dataset.column, epoch, max_update = %max_update, "coordinate descent epoch");
            }

            if let Some(eval_set) = &eval_set {
                let score = eval_set.mean_squared_error(w.view(), intercept);
                let improved = best
                    .as_ref()
                    .map_or(true, |(best_score, ..)| score < *best_score);
                if improved {
                    best = Some((score, w.clone(), intercept, epoch));
                    rounds_without_improvement = 0;
                } else {
                    rounds_without_improvement += 1;
                }
                if let Some(rounds) = eval_set.early_stopping_rounds {
                    if rounds_without_improvement >= rounds {
                        debug!(column = dataset.column, epoch, "early stopping");
                        converged = true;
                        break;
                    }
                }
            }

            if max_update <= self.tolerance() {
                converged = true;
                break;
            }
        }

        if !converged {
            warn!(
                column = dataset.column,
                max_epochs = self.max_epochs(),
                "coordinate descent did not converge"
            );
        }

        let mut eval_score = eval_set
            .as_ref()
            .map(|eval_set| eval_set.mean_squared_error(w.view(), intercept));
        let early_stopping = eval_set
            .as_ref()
            .map_or(false, |eval_set| eval_set.early_stopping_rounds.is_some());
        if early_stopping {
            if let Some((best_score, best_w, best_intercept, best_epoch)) = best {
                w = best_w;
                intercept = best_intercept;
                n_epochs = best_epoch;
                eval_score = Some(best_score);
            }
        }

        debug!(column = dataset.column, n_epochs, "fitted elastic net");

        Ok(ElasticNet {
            coefficients: w,
            intercept,
            n_epochs,
            eval_score,
            n_features_in: n_features,
            feature_names_in: dataset.feature_names.map(<[String]>::to_vec),
        })
    }
}

/// This implements the coordinate descent optimization procedure for
/// single-target problems, on dense or sparse design matrices.
impl<F, DM, T> Fit<DM, T, EstimatorError> for ElasticNetValidParams<F>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
{
    /// If successful, the output of the coordinate descent solver is an
    /// instance of [`ElasticNet`] containing the fitted coefficients.
    type Object = ElasticNet<F>;

    fn fit(&self, dataset: &DatasetBase<DM, T>) -> Result<Self::Object> {
        let column = ColumnDataset {
            column: 0,
            design_matrix: dataset.design_matrix(),
            target: dataset.targets().as_single_target(),
            sample_weight: dataset.sample_weight(),
            feature_names: dataset.feature_names(),
        };
        self.coordinate_descent(&column, &FitParams::new())
    }
}

impl<F: Float> Regressor for ElasticNetValidParams<F> {
    type Elem = F;
    type Object = ElasticNet<F>;
    type Error = EstimatorError;

    fn fit_support(&self) -> FitSupport {
        FitSupport::Weighted
    }

    fn fit_target<DM>(&self, dataset: &ColumnDataset<DM>, params: &FitParams<F>) -> Result<ElasticNet<F>>
    where
        DM: DesignMatrix<Elem = F>,
    {
        self.coordinate_descent(dataset, params)
    }
}

/// The unchecked hyperparameters can be used as a template directly: they are
/// checked at the start of every column fit.
impl<F: Float> Regressor for ElasticNetParams<F> {
    type Elem = F;
    type Object = ElasticNet<F>;
    type Error = EstimatorError;

    fn fit_support(&self) -> FitSupport {
        FitSupport::Weighted
    }

    fn fit_target<DM>(&self, dataset: &ColumnDataset<DM>, params: &FitParams<F>) -> Result<ElasticNet<F>>
    where
        DM: DesignMatrix<Elem = F>,
    {
        self.check_ref()?.coordinate_descent(dataset, params)
    }
}
