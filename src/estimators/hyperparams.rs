use super::error::{EstimatorError, MultiOutputError, Result};
use super::param_guard::ParamGuard;
use super::traits::Regressor;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of an ElasticNet
/// regression model
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetValidParams<F> {
    alpha: F,
    l1_ratio: F,
    fit_intercept: bool,
    max_epochs: usize,
    tolerance: F,
    verbose: bool,
}

impl<F: Float> ElasticNetValidParams<F> {
    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn l1_ratio(&self) -> F {
        self.l1_ratio
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Configures and minimizes the following objective function:
/// ```ignore
/// 1 / (2 * sum(s)) * sum_i s_i (y_i - x_i^T w - b)^2
///     + alpha * l1_ratio * ||w||_1
///     + 0.5 * alpha * (1 - l1_ratio) * ||w||^2_2
/// ```
/// where `s` are the sample weights (all ones when none are given).
#[derive(Debug, Clone, PartialEq)]
pub struct ElasticNetParams<F>(ElasticNetValidParams<F>);

impl<F: Float> Default for ElasticNetParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit an ElasticNet model
impl<F: Float> ElasticNetParams<F> {
    /// Create default ElasticNet hyper parameters. With the default `l1_ratio`
    /// of `1` the model is a Lasso.
    pub fn new() -> ElasticNetParams<F> {
        Self(ElasticNetValidParams {
            alpha: F::one(),
            l1_ratio: F::one(),
            fit_intercept: true,
            max_epochs: 1000,
            tolerance: F::cast(1e-6),
            verbose: false,
        })
    }

    /// Set the regularization hyperparameter. A higher value yields sparser
    /// solutions.
    /// Defaults to `1` if not set.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the share of the L1 penalty in the regularization. `1` is the
    /// Lasso, `0` is Ridge.
    /// Defaults to `1` if not set.
    pub fn l1_ratio(mut self, l1_ratio: F) -> Self {
        self.0.l1_ratio = l1_ratio;
        self
    }

    /// Whether an unpenalized intercept is fitted.
    ///
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }

    /// Set the maximum number of passes over the features.
    ///
    /// Defaults to `1000` if not set.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.0.max_epochs = max_epochs;
        self
    }

    /// Set the stopping criterion: the largest coefficient update of an epoch.
    ///
    /// Defaults to `1e-6` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Logs every epoch at `debug` level instead of `trace`.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for ElasticNetParams<F> {
    type Checked = ElasticNetValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.alpha.is_finite() || self.0.alpha < F::zero() {
            Err(EstimatorError::InvalidRegularization(
                self.0.alpha.to_f32().unwrap_or(f32::NAN),
            ))
        } else if !(self.0.l1_ratio >= F::zero() && self.0.l1_ratio <= F::one()) {
            Err(EstimatorError::InvalidL1Ratio(
                self.0.l1_ratio.to_f32().unwrap_or(f32::NAN),
            ))
        } else if !(self.0.tolerance >= F::zero()) {
            Err(EstimatorError::InvalidTolerance(
                self.0.tolerance.to_f32().unwrap_or(f32::NAN),
            ))
        } else if self.0.max_epochs == 0 {
            Err(EstimatorError::InvalidMaxEpochs(self.0.max_epochs))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// A verified hyperparameter set ready for fitting one estimator per target
#[derive(Debug, Clone, PartialEq)]
pub struct MultiOutputRegressorValidParams<R> {
    estimator: R,
    n_jobs: usize,
}

impl<R> MultiOutputRegressorValidParams<R> {
    /// The template cloned for every target column.
    pub fn estimator(&self) -> &R {
        &self.estimator
    }

    pub fn n_jobs(&self) -> usize {
        self.n_jobs
    }
}

/// A hyper-parameter set during construction
#[derive(Debug, Clone, PartialEq)]
pub struct MultiOutputRegressorParams<R>(MultiOutputRegressorValidParams<R>);

/// Configure and fit a MultiOutputRegressor model
impl<R> MultiOutputRegressorParams<R> {
    /// Wraps an estimator template. Targets are fitted sequentially unless
    /// [`n_jobs`](Self::n_jobs) is set.
    pub fn new(estimator: R) -> MultiOutputRegressorParams<R> {
        Self(MultiOutputRegressorValidParams {
            estimator,
            n_jobs: 1,
        })
    }

    /// Set the number of worker threads fitting target columns concurrently.
    /// `0` uses every available core and `1` fits on the calling thread.
    ///
    /// Defaults to `1` if not set.
    pub fn n_jobs(mut self, n_jobs: usize) -> Self {
        self.0.n_jobs = n_jobs;
        self
    }

    /// Replace the estimator template.
    pub fn estimator(mut self, estimator: R) -> Self {
        self.0.estimator = estimator;
        self
    }
}

impl<R: Regressor> ParamGuard for MultiOutputRegressorParams<R> {
    type Checked = MultiOutputRegressorValidParams<R>;
    type Error = MultiOutputError<R::Error>;

    /// The template must be fittable before any data is looked at.
    fn check_ref(&self) -> std::result::Result<&Self::Checked, Self::Error> {
        if !self.0.estimator.fit_support().can_fit() {
            Err(MultiOutputError::MissingFitCapability)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> std::result::Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
