pub mod app;
pub mod camera;
pub mod cli;
pub mod content;
pub mod core;
pub mod render;
pub mod scene;
pub mod shell;
pub mod theme;

pub use scene::lifecycle::{Phase, SceneLifecycle};
pub use shell::{LoadingGate, Shell};
pub use theme::Theme;
