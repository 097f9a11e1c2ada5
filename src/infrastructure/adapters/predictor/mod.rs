//! Predictor Adapter - 测试用推理器

mod fake_predictor;

pub use fake_predictor::{FakePredictor, FakePredictorConfig};
