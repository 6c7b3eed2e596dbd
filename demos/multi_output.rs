extern crate multiglm;

use multiglm::{
    datasets::DatasetBase,
    estimators::{ElasticNet, Fit, FitParams, MultiOutputRegressor},
    helpers::{
        helpers::compute_alpha_max_multioutput,
        test_helpers::{assert_array_all_close, generate_random_data_multioutput},
    },
};

fn main() {
    let (x, y) = generate_random_data_multioutput(100, 20, 3);
    let alpha = compute_alpha_max_multioutput(x.view(), y.view()) * 0.1;
    let dataset = DatasetBase::from((x, y));

    let params = MultiOutputRegressor::params(ElasticNet::params().alpha(alpha).l1_ratio(0.7))
        .n_jobs(0);

    println!("#### Fitting one ElasticNet per target...");
    let model = params.fit(&dataset).unwrap();
    for (i, estimator) in model.estimators().iter().enumerate() {
        let n_nonzero = estimator.coefficients().iter().filter(|w| **w != 0.).count();
        println!(
            "target {}: {} epochs, {} non-zero coefficients",
            i,
            estimator.n_epochs(),
            n_nonzero
        );
    }

    // A stronger penalty on the last target only.
    println!("#### Fitting with column-specific parameters...");
    let fit_params = vec![
        FitParams::new(),
        FitParams::new(),
        FitParams::new().scalar("alpha", alpha * 5.),
    ];
    let tuned = params
        .fit_with_params(&dataset, Some(fit_params.as_slice()))
        .unwrap();

    assert_array_all_close(
        model.estimators()[0].coefficients(),
        tuned.estimators()[0].coefficients(),
        1e-12,
    );
}
