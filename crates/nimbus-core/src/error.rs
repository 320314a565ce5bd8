use thiserror::Error;

#[derive(Error, Debug)]
pub enum NimbusError {
    #[error("invalid satellite code '{0}'")]
    InvalidSatellite(String),

    #[error("invalid area code '{0}'")]
    InvalidArea(String),

    #[error("invalid parameter code '{0}'")]
    InvalidParam(String),

    #[error("area '{area}' is not available for satellite '{satellite}'")]
    UnsupportedArea { satellite: String, area: String },

    #[error("parameter '{param}' is not available for satellite '{satellite}' in area '{area}'")]
    UnsupportedParam {
        satellite: String,
        area: String,
        param: String,
    },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("catalog query failed: {0}")]
    Status(String),

    #[error("malformed catalog response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("image entry is not a base64 data URI")]
    MalformedDataUri,

    #[error("invalid base64 image payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("unexpected image format '{0}'")]
    UnexpectedMime(String),

    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    #[error("GIF encoding error: {0}")]
    Gif(#[from] gif::EncodingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NimbusError>;
