use super::{CSCArray, DesignMatrix};
use crate::Float;
use ndarray::{Array1, ArrayBase, ArrayView1, Axis, Data, Ix2, Zip};

/// This implements the [`DesignMatrix`] trait for dense matrices.
impl<F: Float, S: Data<Elem = F>> DesignMatrix for ArrayBase<S, Ix2> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_features(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn weighted_column_dot(&self, j: usize, v: ArrayView1<F>, sample_weight: ArrayView1<F>) -> F {
        let mut acc = F::zero();
        Zip::from(self.column(j))
            .and(&v)
            .and(&sample_weight)
            .for_each(|&x, &vi, &si| acc += si * x * vi);
        acc
    }

    fn weighted_column_sq_norm(&self, j: usize, sample_weight: ArrayView1<F>) -> F {
        let mut acc = F::zero();
        Zip::from(self.column(j))
            .and(&sample_weight)
            .for_each(|&x, &si| acc += si * x * x);
        acc
    }

    fn update_residuals(&self, r: &mut Array1<F>, diff: F, j: usize) {
        r.scaled_add(-diff, &self.column(j));
    }

    fn linear_predict(&self, w: ArrayView1<F>) -> Array1<F> {
        self.dot(&w)
    }
}

/// This implements the [`DesignMatrix`] trait for sparse matrices.
impl<F: Float> DesignMatrix for CSCArray<'_, F> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.n_rows
    }

    fn n_features(&self) -> usize {
        self.indptr.len().saturating_sub(1)
    }

    fn weighted_column_dot(&self, j: usize, v: ArrayView1<F>, sample_weight: ArrayView1<F>) -> F {
        let mut acc = F::zero();
        for idx in self.column_range(j) {
            let i = self.indices[idx] as usize;
            acc += sample_weight[i] * self.data[idx] * v[i];
        }
        acc
    }

    fn weighted_column_sq_norm(&self, j: usize, sample_weight: ArrayView1<F>) -> F {
        let mut acc = F::zero();
        for idx in self.column_range(j) {
            let i = self.indices[idx] as usize;
            acc += sample_weight[i] * self.data[idx] * self.data[idx];
        }
        acc
    }

    fn update_residuals(&self, r: &mut Array1<F>, diff: F, j: usize) {
        for idx in self.column_range(j) {
            r[self.indices[idx] as usize] -= diff * self.data[idx];
        }
    }

    fn linear_predict(&self, w: ArrayView1<F>) -> Array1<F> {
        let mut Xw = Array1::<F>::zeros(self.n_rows);
        for j in 0..self.n_features() {
            if w[j] == F::zero() {
                continue;
            }
            for idx in self.column_range(j) {
                Xw[self.indices[idx] as usize] += self.data[idx] * w[j];
            }
        }
        Xw
    }
}

/// This implements the [`DesignMatrix`] trait for references.
impl<DM: DesignMatrix> DesignMatrix for &DM {
    type Elem = DM::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn n_features(&self) -> usize {
        (*self).n_features()
    }

    fn weighted_column_dot(
        &self,
        j: usize,
        v: ArrayView1<Self::Elem>,
        sample_weight: ArrayView1<Self::Elem>,
    ) -> Self::Elem {
        (*self).weighted_column_dot(j, v, sample_weight)
    }

    fn weighted_column_sq_norm(
        &self,
        j: usize,
        sample_weight: ArrayView1<Self::Elem>,
    ) -> Self::Elem {
        (*self).weighted_column_sq_norm(j, sample_weight)
    }

    fn update_residuals(&self, r: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize) {
        (*self).update_residuals(r, diff, j);
    }

    fn linear_predict(&self, w: ArrayView1<Self::Elem>) -> Array1<Self::Elem> {
        (*self).linear_predict(w)
    }
}
