use std::path::Path;

use anyhow::Result;
use meshloader_assets::Asset;

pub mod asset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    Bgra8Unorm,
}

impl TextureFormat {
    pub fn num_channels(&self) -> usize {
        match self {
            Self::Bgra8Unorm => 4,
        }
    }
}

pub struct TextureCreateDesc {
    pub name: Option<String>,
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub data: Box<[u8]>,
}

/// Decoded 2D texture with a single mip level.
#[derive(Debug, Clone)]
pub struct Texture {
    name: Option<String>,
    width: u32,
    height: u32,
    format: TextureFormat,
    data: Box<[u8]>,
}

impl Texture {
    pub fn new(create_desc: TextureCreateDesc) -> Self {
        debug_assert_eq!(
            create_desc.data.len(),
            create_desc.width as usize * create_desc.height as usize * create_desc.format.num_channels()
        );

        Self {
            name: create_desc.name,
            width: create_desc.width,
            height: create_desc.height,
            format: create_desc.format,
            data: create_desc.data,
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> TextureFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn stride(&self) -> usize {
        self.format.num_channels()
    }

    /// Raw channels of the pixel at `(x, y)`, in the order of [`Texture::format`].
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let start = (y as usize * self.width as usize + x as usize) * self.stride();
        self.data.get(start..start + self.stride())
    }
}

/// Reads and decodes an image file into a [`TextureFormat::Bgra8Unorm`] texture.
pub fn load_texture_2d_from_file(path: &Path) -> Result<Texture> {
    meshloader_profiling::profile_function!();

    let texture = Texture::load_from_file(path)?;
    log::debug!(
        "Loaded texture {} ({}x{})",
        path.display(),
        texture.width(),
        texture.height()
    );
    Ok(texture)
}
