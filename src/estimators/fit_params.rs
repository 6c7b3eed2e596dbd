use std::collections::BTreeMap;

use ndarray::{Array1, Array2, ArrayView1, ArrayView2};

use super::error::FitParamError;

/// A value forwarded to the fit of one target column.
#[derive(Debug, Clone, PartialEq)]
pub enum FitParam<F> {
    Scalar(F),
    Integer(usize),
    Flag(bool),
    Vector(Array1<F>),
    Matrix(Array2<F>),
}

impl<F> FitParam<F> {
    fn kind(&self) -> &'static str {
        match self {
            FitParam::Scalar(_) => "scalar",
            FitParam::Integer(_) => "integer",
            FitParam::Flag(_) => "flag",
            FitParam::Vector(_) => "vector",
            FitParam::Matrix(_) => "matrix",
        }
    }
}

/// Named parameters passed to the fit of a single target column, such as a
/// column-specific evaluation set or warm-start coefficients.
///
/// An empty set means the estimator is fitted with its own configuration only.
#[derive(Debug, Clone, PartialEq)]
pub struct FitParams<F> {
    params: BTreeMap<String, FitParam<F>>,
}

impl<F> Default for FitParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FitParams<F> {
    pub fn new() -> Self {
        FitParams {
            params: BTreeMap::new(),
        }
    }

    /// Sets parameter `name`, replacing any previous value.
    pub fn with(mut self, name: impl Into<String>, value: FitParam<F>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn scalar(self, name: impl Into<String>, value: F) -> Self {
        self.with(name, FitParam::Scalar(value))
    }

    pub fn integer(self, name: impl Into<String>, value: usize) -> Self {
        self.with(name, FitParam::Integer(value))
    }

    pub fn flag(self, name: impl Into<String>, value: bool) -> Self {
        self.with(name, FitParam::Flag(value))
    }

    pub fn vector(self, name: impl Into<String>, value: Array1<F>) -> Self {
        self.with(name, FitParam::Vector(value))
    }

    pub fn matrix(self, name: impl Into<String>, value: Array2<F>) -> Self {
        self.with(name, FitParam::Matrix(value))
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FitParam<F>) -> Option<FitParam<F>> {
        self.params.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&FitParam<F>> {
        self.params.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.params.keys().map(String::as_str)
    }

    /// Fails on the first parameter whose name is not in `known`.
    pub fn check_known(&self, known: &[&str]) -> Result<(), FitParamError> {
        match self.names().find(|name| !known.contains(name)) {
            Some(name) => Err(FitParamError::Unknown {
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }

    fn wrong_type(&self, name: &str, expected: &'static str) -> FitParamError {
        FitParamError::WrongType {
            name: name.to_string(),
            expected,
            found: self.params[name].kind(),
        }
    }

    pub fn get_integer(&self, name: &str) -> Result<Option<usize>, FitParamError> {
        match self.get(name) {
            None => Ok(None),
            Some(FitParam::Integer(value)) => Ok(Some(*value)),
            Some(_) => Err(self.wrong_type(name, "integer")),
        }
    }

    pub fn get_flag(&self, name: &str) -> Result<Option<bool>, FitParamError> {
        match self.get(name) {
            None => Ok(None),
            Some(FitParam::Flag(value)) => Ok(Some(*value)),
            Some(_) => Err(self.wrong_type(name, "flag")),
        }
    }

    pub fn get_vector(&self, name: &str) -> Result<Option<ArrayView1<F>>, FitParamError> {
        match self.get(name) {
            None => Ok(None),
            Some(FitParam::Vector(value)) => Ok(Some(value.view())),
            Some(_) => Err(self.wrong_type(name, "vector")),
        }
    }

    pub fn get_matrix(&self, name: &str) -> Result<Option<ArrayView2<F>>, FitParamError> {
        match self.get(name) {
            None => Ok(None),
            Some(FitParam::Matrix(value)) => Ok(Some(value.view())),
            Some(_) => Err(self.wrong_type(name, "matrix")),
        }
    }
}

impl<F: Copy> FitParams<F> {
    pub fn get_scalar(&self, name: &str) -> Result<Option<F>, FitParamError> {
        match self.get(name) {
            None => Ok(None),
            Some(FitParam::Scalar(value)) => Ok(Some(*value)),
            Some(_) => Err(self.wrong_type(name, "scalar")),
        }
    }
}

impl<F, S: Into<String>> FromIterator<(S, FitParam<F>)> for FitParams<F> {
    fn from_iter<I: IntoIterator<Item = (S, FitParam<F>)>>(iter: I) -> Self {
        FitParams {
            params: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        }
    }
}
