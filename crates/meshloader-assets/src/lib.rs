use std::{fs, path::Path};

use anyhow::{Context, Result};

pub mod asset_paths;
pub mod file_system;

pub use asset_paths::{resolve_asset_path, PathType};

pub trait Asset
where
    Self: Sized,
{
    fn load(file_path: &str, data: &[u8]) -> Result<Self>;

    fn load_from_file(path: &Path) -> Result<Self> {
        meshloader_profiling::profile_function!();

        let data =
            fs::read(path).with_context(|| format!("Failed to read asset {}", path.display()))?;
        Self::load(&path.to_string_lossy(), &data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ByteCount(usize);

    impl Asset for ByteCount {
        fn load(_file_path: &str, data: &[u8]) -> Result<Self> {
            Ok(Self(data.len()))
        }
    }

    #[test]
    fn load_from_file_reads_all_bytes() {
        let path = std::env::temp_dir().join(format!("meshloader-{}.bin", uuid::Uuid::new_v4()));
        fs::write(&path, [1u8, 2, 3, 4, 5]).unwrap();

        let asset = ByteCount::load_from_file(&path).unwrap();
        assert_eq!(asset.0, 5);

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn load_from_missing_file_fails() {
        let path = std::env::temp_dir().join(format!("meshloader-{}.bin", uuid::Uuid::new_v4()));
        assert!(ByteCount::load_from_file(&path).is_err());
    }
}
