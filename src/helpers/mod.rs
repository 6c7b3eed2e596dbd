
/// This module implements the proximal operators used by the coordinate
/// descent solver.
pub mod prox {
    use crate::Float;

    /// The soft-thresholding operator is the proximal operator of the L1 norm.
    pub fn soft_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            F::zero()
        }
    }
}

/// This module contains helper functions to compute the maximum regularization
/// hyperparameter for sparse models. A regularization hyperparameter value
/// larger than this maximum value yields a null solution.
pub mod helpers {
    use crate::Float;
    use ndarray::{ArrayView1, ArrayView2, Axis};

    /// This function computes the maximum regularization hyperparameter value
    /// for a single target, without intercept.
    pub fn compute_alpha_max<F: Float>(X: ArrayView2<F>, y: ArrayView1<F>) -> F {
        let n_samples = F::cast(X.shape()[0]);
        let Xty = X.t().dot(&y);
        let alpha_max = Xty.fold(F::zero(), |max_val, &x| x.abs().max(max_val));
        alpha_max / n_samples
    }

    /// Computes [`compute_alpha_max`] for each column of a multi-output target
    /// and returns the smallest one, so that a shared `alpha` scaled from it
    /// leaves every column with a non-null solution.
    pub fn compute_alpha_max_multioutput<F: Float>(X: ArrayView2<F>, Y: ArrayView2<F>) -> F {
        Y.axis_iter(Axis(1))
            .map(|y| compute_alpha_max(X, y))
            .fold(F::infinity(), F::min)
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use approx::AbsDiffEq;
    use ndarray::prelude::*;
    use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F) {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn assert_array2d_all_close<F: Float>(x: ArrayView2<F>, y: ArrayView2<F>, delta: F) {
        assert_eq!(x.shape(), y.shape());
        for ((idx, a), b) in x.indexed_iter().zip(y.iter()) {
            if a.abs_diff_ne(b, delta) {
                panic!(
                    "x{:?}: {}, y: {} ; with precision level {}",
                    idx, a, b, delta
                );
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    pub fn generate_random_data(n_samples: usize, n_features: usize) -> (Array2<f64>, Array1<f64>) {
        let (X, Y) = generate_random_data_multioutput(n_samples, n_features, 1);
        (X, Y.column(0).to_owned())
    }

    /// Draws `X` and `Y = X W + E` with standard normal entries. The seeds are
    /// fixed so that every call with the same shape returns the same data.
    pub fn generate_random_data_multioutput(
        n_samples: usize,
        n_features: usize,
        n_outputs: usize,
    ) -> (Array2<f64>, Array2<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features * n_outputs, 43);
        let data_e = fill_random_vector(n_samples * n_outputs, 44);
        let X = Array2::from_shape_vec((n_samples, n_features).f(), data_x).unwrap();
        let true_W = Array2::from_shape_vec((n_features, n_outputs), data_w).unwrap();
        let noise = Array2::from_shape_vec((n_samples, n_outputs), data_e).unwrap();
        let Y = X.dot(&true_W) + noise;
        (X, Y)
    }
}
