pub mod models;
pub mod error;
pub mod document_store;
pub mod document_processor;
pub mod gemini_service;
pub mod prompts;
pub mod analysis_service;
pub mod chat_service;

#[cfg(test)]
mod test_support;

pub use models::*;
pub use error::ServiceError;
pub use document_store::DocumentStore;
pub use document_processor::{PdfExtractor, TextExtractor};
pub use gemini_service::{GeminiService, LlmClient};
pub use analysis_service::{parse_analysis, AnalysisService};
pub use chat_service::ChatService;
