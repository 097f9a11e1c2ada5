//! Dense Regression Network
//!
//! 顺序堆叠的全连接层，单样本前向推理:
//! `h_{k+1} = activation_k(h_k · W_k + b_k)`
//!
//! 权重布局为输入优先（`weights[i][j]` 连接输入 i 与单元 j），
//! 与常见深度学习框架导出的 kernel 一致。

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::{Activation, RegressionError};

/// 模型文件中单个 Dense 层的参数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerParams {
    /// 形状 [input][units]
    pub weights: Vec<Vec<f32>>,
    /// 形状 [units]
    pub bias: Vec<f32>,
    #[serde(default)]
    pub activation: Activation,
}

/// 模型文件的顶层结构
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkParams {
    pub input_dim: usize,
    pub layers: Vec<LayerParams>,
}

/// 全连接层
#[derive(Debug, Clone, PartialEq)]
pub struct DenseLayer {
    weights: Array2<f32>,
    bias: Array1<f32>,
    activation: Activation,
}

impl DenseLayer {
    fn from_params(index: usize, params: LayerParams) -> Result<Self, RegressionError> {
        let rows = params.weights.len();
        if rows == 0 {
            return Err(RegressionError::InvalidLayerShape {
                layer: index,
                reason: "weights is empty".to_string(),
            });
        }

        let units = params.weights[0].len();
        if units == 0 {
            return Err(RegressionError::InvalidLayerShape {
                layer: index,
                reason: "layer has no units".to_string(),
            });
        }
        if let Some(row) = params.weights.iter().position(|r| r.len() != units) {
            return Err(RegressionError::InvalidLayerShape {
                layer: index,
                reason: format!(
                    "weights row {} has {} columns, expected {}",
                    row,
                    params.weights[row].len(),
                    units
                ),
            });
        }
        if params.bias.len() != units {
            return Err(RegressionError::InvalidLayerShape {
                layer: index,
                reason: format!("bias has {} entries, expected {}", params.bias.len(), units),
            });
        }

        let flat: Vec<f32> = params.weights.into_iter().flatten().collect();
        if flat.iter().chain(&params.bias).any(|v| !v.is_finite()) {
            return Err(RegressionError::NonFiniteParameter { layer: index });
        }

        let weights = Array2::from_shape_vec((rows, units), flat).map_err(|e| {
            RegressionError::InvalidLayerShape {
                layer: index,
                reason: e.to_string(),
            }
        })?;

        Ok(Self {
            weights,
            bias: Array1::from(params.bias),
            activation: params.activation,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.weights.nrows()
    }

    pub fn units(&self) -> usize {
        self.weights.ncols()
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn parameter_count(&self) -> usize {
        self.weights.len() + self.bias.len()
    }

    fn forward(&self, input: &Array1<f32>) -> Array1<f32> {
        let activation = self.activation;
        let mut z = input.dot(&self.weights) + &self.bias;
        z.mapv_inplace(|v| activation.apply(v));
        z
    }

    fn to_params(&self) -> LayerParams {
        LayerParams {
            weights: self.weights.outer_iter().map(|row| row.to_vec()).collect(),
            bias: self.bias.to_vec(),
            activation: self.activation,
        }
    }
}

/// 预训练的回归网络
///
/// 不变量:
/// - 至少一层
/// - 第一层输入维度等于 `input_dim`，后续每层输入维度等于上一层单元数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NetworkParams", into = "NetworkParams")]
pub struct DenseNetwork {
    input_dim: usize,
    layers: Vec<DenseLayer>,
}

impl DenseNetwork {
    pub fn new(input_dim: usize, layers: Vec<LayerParams>) -> Result<Self, RegressionError> {
        if input_dim == 0 {
            return Err(RegressionError::ZeroInputDim);
        }
        if layers.is_empty() {
            return Err(RegressionError::NoLayers);
        }

        let mut expected = input_dim;
        let mut built = Vec::with_capacity(layers.len());
        for (index, params) in layers.into_iter().enumerate() {
            let layer = DenseLayer::from_params(index, params)?;
            if layer.input_dim() != expected {
                return Err(RegressionError::LayerMismatch {
                    layer: index,
                    expected,
                    actual: layer.input_dim(),
                });
            }
            expected = layer.units();
            built.push(layer);
        }

        Ok(Self {
            input_dim,
            layers: built,
        })
    }

    pub fn input_dim(&self) -> usize {
        self.input_dim
    }

    pub fn output_dim(&self) -> usize {
        self.layers.last().map(DenseLayer::units).unwrap_or(0)
    }

    pub fn layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(DenseLayer::parameter_count).sum()
    }

    /// 逐层前向计算，返回最后一层的全部输出
    pub fn forward(&self, input: &[f32]) -> Result<Vec<f32>, RegressionError> {
        if input.len() != self.input_dim {
            return Err(RegressionError::InputMismatch {
                expected: self.input_dim,
                actual: input.len(),
            });
        }

        let mut h = Array1::from(input.to_vec());
        for layer in &self.layers {
            h = layer.forward(&h);
        }
        Ok(h.to_vec())
    }

    /// 单样本预测，取第一个输出单元
    ///
    /// 输入按 f32 计算，结果以 f64 返回；超出 f32 范围的输入直接拒绝
    pub fn predict(&self, scaled: &[f64]) -> Result<f64, RegressionError> {
        let input = scaled
            .iter()
            .enumerate()
            .map(|(index, &v)| {
                if v.is_finite() && v.abs() <= f64::from(f32::MAX) {
                    Ok(v as f32)
                } else {
                    Err(RegressionError::InputOutOfRange { index })
                }
            })
            .collect::<Result<Vec<f32>, _>>()?;
        let output = self.forward(&input)?;

        let value = output
            .first()
            .copied()
            .ok_or(RegressionError::NonFiniteOutput)?;
        if !value.is_finite() {
            return Err(RegressionError::NonFiniteOutput);
        }
        Ok(f64::from(value))
    }
}

impl TryFrom<NetworkParams> for DenseNetwork {
    type Error = RegressionError;

    fn try_from(params: NetworkParams) -> Result<Self, Self::Error> {
        Self::new(params.input_dim, params.layers)
    }
}

impl From<DenseNetwork> for NetworkParams {
    fn from(network: DenseNetwork) -> Self {
        Self {
            input_dim: network.input_dim,
            layers: network.layers.iter().map(DenseLayer::to_params).collect(),
        }
    }
}
