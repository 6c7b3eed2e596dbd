use super::{AsMultiTargets, AsSingleTargets};
use ndarray::{ArrayBase, ArrayView1, ArrayView2, Axis, Data, Ix1, Ix2};

impl<F, S: Data<Elem = F>> AsMultiTargets for ArrayBase<S, Ix2> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_outputs(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn as_multi_targets(&self) -> ArrayView2<F> {
        self.view()
    }
}

/// A one-dimensional target is seen as a table with a single output column.
impl<F, S: Data<Elem = F>> AsMultiTargets for ArrayBase<S, Ix1> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_outputs(&self) -> usize {
        1
    }

    fn as_multi_targets(&self) -> ArrayView2<F> {
        self.view().insert_axis(Axis(1))
    }
}

impl<F, S: Data<Elem = F>> AsSingleTargets for ArrayBase<S, Ix1> {
    fn as_single_target(&self) -> ArrayView1<F> {
        self.view()
    }
}

impl<T: AsMultiTargets> AsMultiTargets for &T {
    type Elem = T::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn n_outputs(&self) -> usize {
        (*self).n_outputs()
    }

    fn as_multi_targets(&self) -> ArrayView2<Self::Elem> {
        (*self).as_multi_targets()
    }
}
