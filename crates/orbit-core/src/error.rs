use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage write failed for key `{key}`: {reason}")]
    Write { key: String, reason: String },
}

#[derive(Debug, Error)]
pub enum ContactError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to encode contact list: {0}")]
    Encode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("texture payload is empty")]
    Empty,
    #[error("failed to decode texture: {0}")]
    Decode(#[from] image::ImageError),
}
