use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse grid file: {0}")]
    ParseError(String),

    #[error("Failed to parse label table: {0}")]
    LabelTableError(String),

    #[error("ROI index {0} not found in append label table")]
    RoiNotFound(i64),

    #[error("Statistic not found in store: {0}")]
    StatNotFound(String),

    #[error("Failed to serialize store: {0}")]
    SerializationError(String),

    #[error("Failed to deserialize store: {0}")]
    DeserializationError(String),

    #[error("Invalid store file magic: expected 'TGRID', found {0:?}")]
    InvalidMagic([u8; 5]),

    #[error("Store format version mismatch: file has v{found}, this build reads v{expected}")]
    VersionMismatch { found: u32, expected: u32 },

    #[error("Store checksum mismatch: file is corrupted or was modified")]
    ChecksumMismatch,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

pub type Result<T> = std::result::Result<T, GridError>;
