use crate::error::TextureError;

/// Decoded RGBA8 image ready for GPU upload.
#[derive(Clone, Debug)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Decode a fetched image payload (PNG or JPEG).
pub fn decode_texture(bytes: &[u8]) -> Result<TextureImage, TextureError> {
    if bytes.is_empty() {
        return Err(TextureError::Empty);
    }
    let img = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = img.dimensions();
    Ok(TextureImage {
        width,
        height,
        rgba: img.into_raw(),
    })
}

/// 1x1 opaque white, bound wherever a material has no texture.
pub fn white_pixel() -> TextureImage {
    TextureImage {
        width: 1,
        height: 1,
        rgba: vec![255; 4],
    }
}
