use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation of the
/// single-target estimators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    #[error("invalid alpha {0}")]
    InvalidRegularization(f32),
    #[error("invalid l1 ratio {0}, must be in [0, 1]")]
    InvalidL1Ratio(f32),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f32),
    #[error("invalid number of epochs {0}")]
    InvalidMaxEpochs(usize),
    #[error("design matrix has {n_samples} samples but target has {n_targets}")]
    MismatchedSamples { n_samples: usize, n_targets: usize },
    #[error("target contains non-finite values")]
    NonFiniteTarget,
    #[error("sample weight has length {found}, expected {expected}")]
    SampleWeightLength { expected: usize, found: usize },
    #[error("sample weights must be finite and non-negative")]
    InvalidSampleWeight,
    #[error("sample weights sum to zero")]
    NullSampleWeights,
    #[error("{found} feature names given for {expected} features")]
    FeatureNamesLength { expected: usize, found: usize },
    #[error("initial coefficients have length {found}, expected {expected}")]
    InitCoefLength { expected: usize, found: usize },
    #[error("evaluation set needs both `eval_X` and `eval_y`")]
    IncompleteEvalSet,
    #[error("evaluation set has shape {rows}x{cols} with {n_targets} targets, expected {n_features} columns")]
    EvalSetShape {
        rows: usize,
        cols: usize,
        n_targets: usize,
        n_features: usize,
    },
    #[error("early stopping requires an evaluation set")]
    EarlyStoppingWithoutEvalSet,
    #[error("invalid number of early stopping rounds {0}")]
    InvalidEarlyStoppingRounds(usize),
    #[error(transparent)]
    FitParam(#[from] FitParamError),
}

/// Errors raised while reading named fit parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitParamError {
    #[error("unknown fit parameter `{name}`")]
    Unknown { name: String },
    #[error("fit parameter `{name}` should be a {expected}, got a {found}")]
    WrongType {
        name: String,
        expected: &'static str,
        found: &'static str,
    },
}

/// Error variants of the multi-output regressor.
///
/// `E` is the error type of the per-target estimator. When the fit of a target
/// column fails, the original error is kept as the [`source`] of
/// [`MultiOutputError::ColumnFit`] along with the column index.
///
/// [`source`]: std::error::Error::source
#[derive(Debug, Error)]
pub enum MultiOutputError<E> {
    #[error("the base estimator should implement a fit method")]
    MissingFitCapability,
    #[error("underlying estimator does not support sample weights")]
    UnsupportedSampleWeight,
    #[error("{found} fit parameter sets given for {expected} target columns")]
    FitParamsLength { expected: usize, found: usize },
    #[error("targets must have at least two columns for multi-output regression, got {n_outputs}")]
    SingleOutput { n_outputs: usize },
    #[error("targets have no samples")]
    EmptyTargets,
    #[error("targets contain a non-finite value at row {row}, column {column}")]
    NonFiniteTarget { row: usize, column: usize },
    #[error("sample weight has length {found}, expected {expected}")]
    SampleWeightLength { expected: usize, found: usize },
    #[error("fitting target column {column} failed: {source}")]
    ColumnFit {
        column: usize,
        #[source]
        source: E,
    },
    #[error("could not build the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl<E> MultiOutputError<E> {
    /// The estimator template or the fit parameters are not usable.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::MissingFitCapability
                | Self::UnsupportedSampleWeight
                | Self::FitParamsLength { .. }
        )
    }

    /// The targets or the sample weights have an invalid shape or content.
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            Self::SingleOutput { .. }
                | Self::EmptyTargets
                | Self::NonFiniteTarget { .. }
                | Self::SampleWeightLength { .. }
        )
    }

    /// Index of the target column whose fit failed, if any.
    pub fn failed_column(&self) -> Option<usize> {
        match self {
            Self::ColumnFit { column, .. } => Some(*column),
            _ => None,
        }
    }

    /// The error raised by the estimator of the failed column, if any.
    pub fn column_error(&self) -> Option<&E> {
        match self {
            Self::ColumnFit { source, .. } => Some(source),
            _ => None,
        }
    }
}
