use ndarray::{array, Array1, Array2};

use super::*;
use crate::helpers::test_helpers::assert_array_all_close;

fn sparse_fixture() -> (Array1<f64>, Array1<i32>, Array1<i32>, Array2<f64>) {
    // [[1, 0, 4],
    //  [0, 0, 5],
    //  [2, 3, 6],
    //  [0, 0, 0]]
    let data = array![1., 2., 3., 4., 5., 6.];
    let indices = array![0, 2, 2, 0, 1, 2];
    let indptr = array![0, 2, 3, 6];
    let dense = array![[1., 0., 4.], [0., 0., 5.], [2., 3., 6.], [0., 0., 0.]];
    (data, indices, indptr, dense)
}

#[test]
fn test_dense_and_sparse_agree() {
    let (data, indices, indptr, X) = sparse_fixture();
    let X_sparse = CSCArray::new(data.view(), indices.view(), indptr.view(), 4);
    let v = array![0.5, -1., 2., 3.];
    let s = array![1., 2., 0.5, 1.];

    assert_eq!(X_sparse.n_samples(), DesignMatrix::n_samples(&X));
    assert_eq!(X_sparse.n_features(), X.n_features());

    for j in 0..3 {
        let dense_dot = X.weighted_column_dot(j, v.view(), s.view());
        let sparse_dot = X_sparse.weighted_column_dot(j, v.view(), s.view());
        assert!((dense_dot - sparse_dot).abs() < 1e-12);

        let dense_norm = X.weighted_column_sq_norm(j, s.view());
        let sparse_norm = X_sparse.weighted_column_sq_norm(j, s.view());
        assert!((dense_norm - sparse_norm).abs() < 1e-12);
    }

    let w = array![1., -2., 0.5];
    assert_array_all_close(
        X.linear_predict(w.view()).view(),
        X_sparse.linear_predict(w.view()).view(),
        1e-12,
    );
}

#[test]
fn test_update_residuals() {
    let (data, indices, indptr, X) = sparse_fixture();
    let X_sparse = CSCArray::new(data.view(), indices.view(), indptr.view(), 4);

    let mut r_dense = array![1., 1., 1., 1.];
    let mut r_sparse = r_dense.clone();
    X.update_residuals(&mut r_dense, 0.5, 2);
    X_sparse.update_residuals(&mut r_sparse, 0.5, 2);

    let expected = array![-1., -1.5, -2., 1.];
    assert_array_all_close(r_dense.view(), expected.view(), 1e-12);
    assert_array_all_close(r_sparse.view(), expected.view(), 1e-12);
}

#[test]
fn test_targets_shape() {
    let Y = Array2::<f64>::zeros((5, 3));
    assert_eq!(AsMultiTargets::n_samples(&Y), 5);
    assert_eq!(Y.n_outputs(), 3);

    let y = Array1::<f64>::zeros(5);
    assert_eq!(y.n_outputs(), 1);
    assert_eq!(y.as_multi_targets().shape(), &[5, 1]);
}

#[test]
fn test_column_view() {
    let X = Array2::<f64>::zeros((3, 2));
    let Y = array![[1., 10.], [2., 20.], [3., 30.]];
    let dataset = DatasetBase::from((X, Y))
        .with_sample_weight(array![1., 2., 3.])
        .with_feature_names(["a", "b"]);

    let column = dataset.column(1);
    assert_eq!(column.column, 1);
    assert_eq!(column.n_samples(), 3);
    assert_eq!(column.n_features(), 2);
    assert_array_all_close(column.target, array![10., 20., 30.].view(), 1e-12);
    assert_array_all_close(
        column.sample_weight.unwrap(),
        array![1., 2., 3.].view(),
        1e-12,
    );
    assert_eq!(column.feature_names.unwrap(), &["a".to_string(), "b".to_string()]);
}
