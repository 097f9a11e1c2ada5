//! Artifact Adapter - 模型与缩放器文件加载

mod loader;

pub use loader::{ArtifactError, ArtifactFormat, ArtifactLoader, LoadedArtifact};
