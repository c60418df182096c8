use std::path::PathBuf;

use meshloader_model::ImportSettings;
use meshloader_scene::PostProcess;

pub const CONTENT_DIR_ENV: &str = "MESHLOADER_CONTENT_DIR";

#[derive(Debug, Clone)]
pub struct MeshLoaderConfig {
    /// Root that [`crate::PathType::Relative`] paths are resolved against.
    pub content_dir: PathBuf,
    pub post_process: PostProcess,
    /// Default log filter, `RUST_LOG` still takes precedence.
    pub log_level: log::LevelFilter,
}

impl Default for MeshLoaderConfig {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("Content"),
            post_process: PostProcess::IMPORT_DEFAULT,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl MeshLoaderConfig {
    /// Default configuration with the content directory taken from `MESHLOADER_CONTENT_DIR` if set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(content_dir) = std::env::var_os(CONTENT_DIR_ENV) {
            config.content_dir = PathBuf::from(content_dir);
        }
        config
    }

    pub fn import_settings(&self) -> ImportSettings {
        ImportSettings {
            content_dir: self.content_dir.clone(),
            post_process: self.post_process,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_settings_follow_config() {
        let config = MeshLoaderConfig {
            content_dir: PathBuf::from("/game/Content"),
            post_process: PostProcess::TRIANGULATE,
            ..Default::default()
        };

        let settings = config.import_settings();
        assert_eq!(settings.content_dir, PathBuf::from("/game/Content"));
        assert_eq!(settings.post_process, PostProcess::TRIANGULATE);
    }
}
