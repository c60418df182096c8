use std::path::{Path, PathBuf};

use meshloader_assets::{file_system, PathType};
use meshloader_model::{ImportResult, ImportSettings};
use meshloader_texture::Texture;

use crate::MeshLoaderConfig;

static LOGGER: std::sync::OnceLock<()> = std::sync::OnceLock::new();

fn init_logger(level: log::LevelFilter) {
    LOGGER.get_or_init(|| {
        if let Err(err) = env_logger::builder()
            .filter_level(level)
            .parse_default_env()
            .try_init()
        {
            log::debug!("Keeping the host's logger: {}", err);
        }
    });
}

/// Entry point for scripting hosts: mesh import plus the file and texture helpers that go with it.
pub struct MeshLoader {
    config: MeshLoaderConfig,
    import_settings: ImportSettings,
}

impl MeshLoader {
    pub fn new(config: MeshLoaderConfig) -> Self {
        init_logger(config.log_level);

        Self {
            import_settings: config.import_settings(),
            config,
        }
    }

    pub fn config(&self) -> &MeshLoaderConfig {
        &self.config
    }

    pub fn load_mesh_from_file(&self, file_path: &str, path_type: PathType) -> ImportResult {
        meshloader_model::load_mesh_from_file(file_path, path_type, &self.import_settings)
    }

    pub fn directory_exists(&self, directory_path: impl AsRef<Path>) -> bool {
        file_system::directory_exists(directory_path)
    }

    pub fn create_directory(&self, directory_path: impl AsRef<Path>) -> bool {
        file_system::create_directory(directory_path)
    }

    pub fn list_folders(&self, directory_path: impl AsRef<Path>) -> Vec<PathBuf> {
        file_system::list_folders(directory_path)
    }

    /// Loads an image file as a BGRA texture, `None` if it cannot be read or decoded.
    pub fn load_texture_2d(&self, full_file_path: impl AsRef<Path>) -> Option<Texture> {
        let full_file_path = full_file_path.as_ref();
        match meshloader_texture::load_texture_2d_from_file(full_file_path) {
            Ok(texture) => Some(texture),
            Err(err) => {
                log::warn!(
                    "Failed to load texture {}: {:#}",
                    full_file_path.display(),
                    err
                );
                None
            }
        }
    }
}

impl Default for MeshLoader {
    fn default() -> Self {
        Self::new(MeshLoaderConfig::from_env())
    }
}
