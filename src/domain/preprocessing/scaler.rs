//! Min-Max Scaler
//!
//! 对已拟合的 min-max 缩放器状态进行建模:
//! `x_scaled = x * scale + min`
//! 其中 `scale = (hi - lo) / (data_max - data_min)`，`min = lo - data_min * scale`

use serde::{Deserialize, Serialize};

use super::ScalerError;
use crate::domain::features::FeatureVector;

/// 数据范围小于该阈值时视为常量特征
const ZERO_RANGE_EPSILON: f64 = 10.0 * f64::EPSILON;

fn default_feature_range() -> [f64; 2] {
    [0.0, 1.0]
}

/// 缩放器文件中保存的拟合参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalerParams {
    /// 每个特征在训练集上的最小值
    pub data_min: Vec<f64>,
    /// 每个特征在训练集上的最大值
    pub data_max: Vec<f64>,
    /// 目标区间 [lo, hi]
    #[serde(default = "default_feature_range")]
    pub feature_range: [f64; 2],
    /// 是否将结果截断到目标区间
    #[serde(default)]
    pub clip: bool,
}

/// 已拟合的 Min-Max 缩放器
///
/// 不变量:
/// - `scale`、`min` 与特征数等长，且全部为有限值
/// - `feature_range.0 < feature_range.1`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScalerParams", into = "ScalerParams")]
pub struct MinMaxScaler {
    params: ScalerParams,
    scale: Vec<f64>,
    min: Vec<f64>,
}

impl MinMaxScaler {
    pub fn new(params: ScalerParams) -> Result<Self, ScalerError> {
        let ScalerParams {
            data_min,
            data_max,
            feature_range: [lo, hi],
            ..
        } = &params;

        if data_min.is_empty() {
            return Err(ScalerError::NoFeatures);
        }
        if data_min.len() != data_max.len() {
            return Err(ScalerError::LengthMismatch {
                min_len: data_min.len(),
                max_len: data_max.len(),
            });
        }
        if !lo.is_finite() || !hi.is_finite() || lo >= hi {
            return Err(ScalerError::InvalidRange { lo: *lo, hi: *hi });
        }

        let mut scale = Vec::with_capacity(data_min.len());
        let mut min = Vec::with_capacity(data_min.len());
        for (index, (dmin, dmax)) in data_min.iter().zip(data_max).enumerate() {
            if !dmin.is_finite() || !dmax.is_finite() {
                return Err(ScalerError::NonFiniteParameter { index });
            }
            let mut range = dmax - dmin;
            // 常量特征不做除零，映射到 lo
            if range.abs() < ZERO_RANGE_EPSILON {
                range = 1.0;
            }
            let s = (hi - lo) / range;
            let m = lo - dmin * s;
            if !s.is_finite() || !m.is_finite() {
                return Err(ScalerError::NonFiniteParameter { index });
            }
            scale.push(s);
            min.push(m);
        }

        Ok(Self { params, scale, min })
    }

    /// 拟合时的特征数
    pub fn n_features(&self) -> usize {
        self.scale.len()
    }

    pub fn feature_range(&self) -> (f64, f64) {
        let [lo, hi] = self.params.feature_range;
        (lo, hi)
    }

    pub fn scale(&self) -> &[f64] {
        &self.scale
    }

    /// 对单条样本做缩放
    pub fn transform(&self, features: &FeatureVector) -> Result<Vec<f64>, ScalerError> {
        if features.len() != self.n_features() {
            return Err(ScalerError::DimensionMismatch {
                expected: self.n_features(),
                actual: features.len(),
            });
        }

        let (lo, hi) = self.feature_range();
        let scaled = features
            .as_slice()
            .iter()
            .zip(self.scale.iter().zip(&self.min))
            .map(|(x, (s, m))| {
                let v = x * s + m;
                if self.params.clip {
                    v.clamp(lo, hi)
                } else {
                    v
                }
            })
            .collect();

        Ok(scaled)
    }
}

impl TryFrom<ScalerParams> for MinMaxScaler {
    type Error = ScalerError;

    fn try_from(params: ScalerParams) -> Result<Self, Self::Error> {
        Self::new(params)
    }
}

impl From<MinMaxScaler> for ScalerParams {
    fn from(scaler: MinMaxScaler) -> Self {
        scaler.params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(data_min: Vec<f64>, data_max: Vec<f64>) -> ScalerParams {
        ScalerParams {
            data_min,
            data_max,
            feature_range: default_feature_range(),
            clip: false,
        }
    }

    fn features(values: &[f64]) -> FeatureVector {
        FeatureVector::new(values.to_vec()).unwrap()
    }

    #[test]
    fn test_transform_maps_to_unit_range() {
        let scaler = MinMaxScaler::new(params(vec![0.0, 10.0], vec![10.0, 30.0])).unwrap();
        let scaled = scaler.transform(&features(&[5.0, 30.0])).unwrap();
        assert!((scaled[0] - 0.5).abs() < 1e-12);
        assert!((scaled[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_custom_feature_range() {
        let mut p = params(vec![0.0], vec![4.0]);
        p.feature_range = [-1.0, 1.0];
        let scaler = MinMaxScaler::new(p).unwrap();

        let scaled = scaler.transform(&features(&[1.0])).unwrap();
        assert!((scaled[0] + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_values_extrapolate_without_clip() {
        let scaler = MinMaxScaler::new(params(vec![0.0], vec![10.0])).unwrap();
        let scaled = scaler.transform(&features(&[20.0])).unwrap();
        assert!((scaled[0] - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_clip_limits_to_feature_range() {
        let mut p = params(vec![0.0], vec![10.0]);
        p.clip = true;
        let scaler = MinMaxScaler::new(p).unwrap();

        assert_eq!(scaler.transform(&features(&[20.0])).unwrap(), vec![1.0]);
        assert_eq!(scaler.transform(&features(&[-5.0])).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_constant_feature_maps_to_lower_bound() {
        let scaler = MinMaxScaler::new(params(vec![3.0], vec![3.0])).unwrap();
        assert_eq!(scaler.scale(), &[1.0]);
        assert_eq!(scaler.transform(&features(&[3.0])).unwrap(), vec![0.0]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let scaler = MinMaxScaler::new(params(vec![0.0, 0.0], vec![1.0, 1.0])).unwrap();
        let err = scaler.transform(&features(&[1.0])).unwrap_err();
        assert_eq!(
            err,
            ScalerError::DimensionMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_invalid_params_rejected() {
        assert_eq!(
            MinMaxScaler::new(params(vec![], vec![])).unwrap_err(),
            ScalerError::NoFeatures
        );
        assert!(matches!(
            MinMaxScaler::new(params(vec![0.0], vec![1.0, 2.0])),
            Err(ScalerError::LengthMismatch { .. })
        ));

        let mut p = params(vec![0.0], vec![1.0]);
        p.feature_range = [1.0, 1.0];
        assert!(matches!(
            MinMaxScaler::new(p),
            Err(ScalerError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_deserialize_validates_params() {
        let json = r#"{"data_min": [0.0, 2.0], "data_max": [4.0, 4.0]}"#;
        let scaler: MinMaxScaler = serde_json::from_str(json).unwrap();
        assert_eq!(scaler.n_features(), 2);
        assert_eq!(scaler.feature_range(), (0.0, 1.0));

        let bad = r#"{"data_min": [0.0], "data_max": [1.0], "feature_range": [2.0, 1.0]}"#;
        assert!(serde_json::from_str::<MinMaxScaler>(bad).is_err());
    }

    #[test]
    fn test_non_finite_fitted_bounds_rejected() {
        let err = MinMaxScaler::new(params(vec![0.0, 1.0], vec![1.0, f64::INFINITY])).unwrap_err();
        assert_eq!(err, ScalerError::NonFiniteParameter { index: 1 });

        let err = MinMaxScaler::new(params(vec![f64::NAN], vec![1.0])).unwrap_err();
        assert_eq!(err, ScalerError::NonFiniteParameter { index: 0 });

        let err =
            MinMaxScaler::new(params(vec![f64::NEG_INFINITY, 0.0], vec![0.0, 1.0])).unwrap_err();
        assert_eq!(err, ScalerError::NonFiniteParameter { index: 0 });
    }
}
