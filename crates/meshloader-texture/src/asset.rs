use anyhow::Result;
use meshloader_assets::Asset;

use crate::Texture;
use crate::TextureCreateDesc;
use crate::TextureFormat;

impl Asset for Texture {
    fn load(file_path: &str, data: &[u8]) -> Result<Self> {
        meshloader_profiling::profile_function!();

        let image = image::load_from_memory(data)?.to_rgba8();
        let (width, height) = image.dimensions();

        let mut data = image.into_raw();
        for pixel in data.chunks_exact_mut(4) {
            pixel.swap(0, 2);
        }

        Ok(Texture::new(TextureCreateDesc {
            name: Some(file_path.to_owned()),
            width,
            height,
            format: TextureFormat::Bgra8Unorm,
            data: data.into_boxed_slice(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use image::{ImageFormat, Rgba, RgbaImage};

    use super::*;
    use crate::load_texture_2d_from_file;

    fn encode_png(image: &RgbaImage) -> Vec<u8> {
        let mut bytes = Cursor::new(Vec::new());
        image.write_to(&mut bytes, ImageFormat::Png).unwrap();
        bytes.into_inner()
    }

    fn test_image() -> RgbaImage {
        let mut image = RgbaImage::new(2, 3);
        image.put_pixel(0, 0, Rgba([10, 20, 30, 255]));
        image.put_pixel(1, 2, Rgba([200, 100, 50, 128]));
        image
    }

    #[test]
    fn decodes_png_to_bgra() {
        let texture = Texture::load("memory.png", &encode_png(&test_image())).unwrap();

        assert_eq!(texture.width(), 2);
        assert_eq!(texture.height(), 3);
        assert_eq!(texture.format(), TextureFormat::Bgra8Unorm);
        assert_eq!(texture.data().len(), 2 * 3 * 4);
        assert_eq!(texture.pixel(0, 0), Some(&[30, 20, 10, 255][..]));
        assert_eq!(texture.pixel(1, 2), Some(&[50, 100, 200, 128][..]));
        assert_eq!(texture.pixel(2, 0), None);
        assert_eq!(texture.name(), Some("memory.png"));
    }

    #[test]
    fn garbage_fails_to_decode() {
        assert!(Texture::load("garbage.png", b"definitely not an image").is_err());
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("meshloader-{}.png", uuid::Uuid::new_v4()));
        fs::write(&path, encode_png(&test_image())).unwrap();

        let texture = load_texture_2d_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!((texture.width(), texture.height()), (2, 3));
    }

    #[test]
    fn missing_file_fails() {
        let path = std::env::temp_dir().join(format!("meshloader-{}.png", uuid::Uuid::new_v4()));
        assert!(load_texture_2d_from_file(&path).is_err());
    }
}
