use thiserror::Error;

/// Failures surfaced to API callers. The `Display` text is the message
/// returned in the `{"error": ...}` payload.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Dosya işlenirken hata oluştu: {0}")]
    Extraction(String),

    #[error("Belirtilen PDF bulunamadı. Lütfen önce yükleyin.")]
    NotFound(String),

    #[error("API anahtarı bulunamadı.")]
    MissingApiKey,

    #[error("Gemini API ile iletişimde hata: {0}")]
    Upstream(String),

    #[error("Geçersiz istek: {0}")]
    InvalidRequest(String),
}

pub type Result<T> = std::result::Result<T, ServiceError>;
