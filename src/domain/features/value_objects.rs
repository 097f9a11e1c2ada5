//! Features Context - Value Objects

use serde::Serialize;

use super::FeatureError;

/// 单条样本的输入特征
///
/// 不变量:
/// - 至少包含一个特征
/// - 所有特征均为有限值（无 NaN / Inf）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector(Vec<f64>);

impl FeatureVector {
    pub fn new(values: Vec<f64>) -> Result<Self, FeatureError> {
        if values.is_empty() {
            return Err(FeatureError::Empty);
        }
        if let Some(index) = values.iter().position(|v| !v.is_finite()) {
            return Err(FeatureError::NonFinite { index });
        }
        Ok(Self(values))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }
}

impl TryFrom<Vec<f64>> for FeatureVector {
    type Error = FeatureError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}
