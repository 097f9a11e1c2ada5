//! Activation Functions

use serde::{Deserialize, Serialize};

/// Dense 层激活函数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    #[default]
    Linear,
    Relu,
    Sigmoid,
    Tanh,
    Softplus,
    Elu,
}

impl Activation {
    pub fn apply(self, x: f32) -> f32 {
        match self {
            Self::Linear => x,
            Self::Relu => x.max(0.0),
            Self::Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Self::Tanh => x.tanh(),
            // 大输入时 ln(1 + e^x) ≈ x，避免 exp 溢出
            Self::Softplus => {
                if x > 20.0 {
                    x
                } else {
                    x.exp().ln_1p()
                }
            }
            Self::Elu => {
                if x > 0.0 {
                    x
                } else {
                    x.exp_m1()
                }
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Relu => "relu",
            Self::Sigmoid => "sigmoid",
            Self::Tanh => "tanh",
            Self::Softplus => "softplus",
            Self::Elu => "elu",
        }
    }
}

impl std::fmt::Display for Activation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relu() {
        assert_eq!(Activation::Relu.apply(-2.0), 0.0);
        assert_eq!(Activation::Relu.apply(3.5), 3.5);
    }

    #[test]
    fn test_sigmoid_midpoint() {
        assert!((Activation::Sigmoid.apply(0.0) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_softplus_large_input_does_not_overflow() {
        assert_eq!(Activation::Softplus.apply(100.0), 100.0);
        assert!((Activation::Softplus.apply(0.0) - std::f32::consts::LN_2).abs() < 1e-6);
    }

    #[test]
    fn test_elu_negative() {
        assert!((Activation::Elu.apply(-1.0) - (-0.632_120_6)).abs() < 1e-5);
        assert_eq!(Activation::Elu.apply(2.0), 2.0);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let act: Activation = serde_json::from_str("\"tanh\"").unwrap();
        assert_eq!(act, Activation::Tanh);
        assert!(serde_json::from_str::<Activation>("\"swish\"").is_err());
    }
}
