//! HTTP Handlers

mod home;
mod model;
mod ping;
mod predict;

pub use home::*;
pub use model::*;
pub use ping::*;
pub use predict::*;
