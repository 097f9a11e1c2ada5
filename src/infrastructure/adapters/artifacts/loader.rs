//! Artifact Loader
//!
//! 启动时一次性读取模型和缩放器文件，按扩展名选择解码方式:
//! - `.json` → serde_json
//! - `.bin`  → bincode

use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::{DenseNetwork, MinMaxScaler};

/// 文件加载错误
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("Unsupported artifact format: {0}")]
    UnsupportedFormat(PathBuf),

    #[error("Incompatible artifacts: {0}")]
    Incompatible(String),
}

/// 文件编码格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactFormat {
    Json,
    Bincode,
}

impl ArtifactFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .as_deref()
        {
            Some("json") => Some(Self::Json),
            Some("bin") => Some(Self::Bincode),
            _ => None,
        }
    }
}

/// 已加载的文件及其校验信息
#[derive(Debug, Clone)]
pub struct LoadedArtifact<T> {
    pub value: T,
    /// 原始字节的 MD5（十六进制）
    pub checksum: String,
}

/// 文件加载器
#[derive(Debug, Clone, Copy, Default)]
pub struct ArtifactLoader;

impl ArtifactLoader {
    pub fn new() -> Self {
        Self
    }

    /// 加载回归模型
    pub fn load_model(&self, path: &Path) -> Result<LoadedArtifact<DenseNetwork>, ArtifactError> {
        let artifact: LoadedArtifact<DenseNetwork> = self.load(path)?;
        tracing::info!(
            path = %path.display(),
            input_dim = artifact.value.input_dim(),
            layers = artifact.value.layers().len(),
            parameters = artifact.value.parameter_count(),
            checksum = %artifact.checksum,
            "Model loaded"
        );
        Ok(artifact)
    }

    /// 加载缩放器
    pub fn load_scaler(&self, path: &Path) -> Result<LoadedArtifact<MinMaxScaler>, ArtifactError> {
        let artifact: LoadedArtifact<MinMaxScaler> = self.load(path)?;
        tracing::info!(
            path = %path.display(),
            features = artifact.value.n_features(),
            checksum = %artifact.checksum,
            "Scaler loaded"
        );
        Ok(artifact)
    }

    /// 读取并解码任意文件
    pub fn load<T: DeserializeOwned>(&self, path: &Path) -> Result<LoadedArtifact<T>, ArtifactError> {
        let format = ArtifactFormat::from_path(path)
            .ok_or_else(|| ArtifactError::UnsupportedFormat(path.to_path_buf()))?;

        let bytes = std::fs::read(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ArtifactError::NotFound(path.to_path_buf())
            } else {
                ArtifactError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;

        let value = decode(format, &bytes).map_err(|reason| ArtifactError::Decode {
            path: path.to_path_buf(),
            reason,
        })?;

        Ok(LoadedArtifact {
            value,
            checksum: format!("{:x}", md5::compute(&bytes)),
        })
    }
}

fn decode<T: DeserializeOwned>(format: ArtifactFormat, bytes: &[u8]) -> Result<T, String> {
    match format {
        ArtifactFormat::Json => serde_json::from_slice(bytes).map_err(|e| e.to_string()),
        ArtifactFormat::Bincode => bincode::deserialize(bytes).map_err(|e| e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ScalerParams;
    use std::io::Write;
    use tempfile::TempDir;

    const MODEL_JSON: &str = r#"{
        "input_dim": 2,
        "layers": [
            {"weights": [[1.0, 0.0], [0.0, 1.0]], "bias": [0.0, 0.0], "activation": "relu"},
            {"weights": [[1.0], [1.0]], "bias": [0.5]}
        ]
    }"#;

    fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn test_load_json_model() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "model.json", MODEL_JSON.as_bytes());

        let artifact = ArtifactLoader::new().load_model(&path).unwrap();
        assert_eq!(artifact.value.input_dim(), 2);
        assert_eq!(artifact.value.layers().len(), 2);
        assert_eq!(artifact.checksum, format!("{:x}", md5::compute(MODEL_JSON)));
    }

    #[test]
    fn test_load_bincode_scaler() {
        let dir = TempDir::new().unwrap();
        let scaler = MinMaxScaler::new(ScalerParams {
            data_min: vec![0.0, 1.0],
            data_max: vec![10.0, 5.0],
            feature_range: [0.0, 1.0],
            clip: true,
        })
        .unwrap();
        let bytes = bincode::serialize(&scaler).unwrap();
        let path = write_file(&dir, "scaler.bin", &bytes);

        let artifact = ArtifactLoader::new().load_scaler(&path).unwrap();
        assert_eq!(artifact.value, scaler);
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.json");
        let err = ArtifactLoader::new().load_model(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::NotFound(p) if p == path));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = TempDir::new().unwrap();
        let path = write_file(&dir, "model.h5", b"HDF");
        let err = ArtifactLoader::new().load_model(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_invalid_scaler_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = write_file(
            &dir,
            "scaler.json",
            br#"{"data_min": [0.0, 1.0], "data_max": [1.0]}"#,
        );
        let err = ArtifactLoader::new().load_scaler(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Decode { .. }));
    }

    #[test]
    fn test_infinite_scaler_bound_is_decode_error() {
        let dir = TempDir::new().unwrap();
        let params = ScalerParams {
            data_min: vec![0.0, 0.0],
            data_max: vec![1.0, f64::INFINITY],
            feature_range: [0.0, 1.0],
            clip: false,
        };
        let bytes = bincode::serialize(&params).unwrap();
        let path = write_file(&dir, "scaler.bin", &bytes);

        let err = ArtifactLoader::new().load_scaler(&path).unwrap_err();
        assert!(matches!(err, ArtifactError::Decode { .. }));
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            ArtifactFormat::from_path(Path::new("a/model.JSON")),
            Some(ArtifactFormat::Json)
        );
        assert_eq!(
            ArtifactFormat::from_path(Path::new("scaler.bin")),
            Some(ArtifactFormat::Bincode)
        );
        assert_eq!(ArtifactFormat::from_path(Path::new("scaler.pkl")), None);
        assert_eq!(ArtifactFormat::from_path(Path::new("model")), None);
    }
}
