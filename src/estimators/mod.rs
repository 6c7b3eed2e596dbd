
pub mod elastic_net;
pub mod error;
pub mod fit_params;
pub mod hyperparams;
pub mod multioutput;
pub mod param_guard;
pub mod traits;

pub use elastic_net::ElasticNet;
pub use error::{EstimatorError, FitParamError, MultiOutputError};
pub use fit_params::{FitParam, FitParams};
pub use multioutput::MultiOutputRegressor;
pub use param_guard::ParamGuard;
pub use traits::{Fit, FitSupport, FittedMetadata, Regressor};
