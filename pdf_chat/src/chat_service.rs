use crate::document_store::DocumentStore;
use crate::error::{Result, ServiceError};
use crate::gemini_service::LlmClient;
use crate::models::*;
use crate::prompts;
use std::sync::Arc;

/// Answers questions about one stored document. Nothing is remembered
/// between calls; every prompt carries the full document text again.
pub struct ChatService {
    llm: Arc<dyn LlmClient>,
    store: Arc<DocumentStore>,
}

impl ChatService {
    pub fn new(llm: Arc<dyn LlmClient>, store: Arc<DocumentStore>) -> Self {
        Self { llm, store }
    }

    pub async fn chat(&self, request: &ChatRequest, api_key: &str) -> Result<ChatResponse> {
        let record = match self.store.get(&request.pdf_filename).await {
            Some(record) => record,
            None => {
                log::info!("Chat requested for unknown document: {}", request.pdf_filename);
                return Err(ServiceError::NotFound(request.pdf_filename.clone()));
            }
        };

        if api_key.is_empty() {
            return Err(ServiceError::MissingApiKey);
        }

        let prompt = prompts::build_chat_prompt(
            &record.topic,
            &record.suggestions,
            &request.query,
            &record.text,
        );

        let response = self.llm.generate(api_key, &prompt).await.map_err(|e| {
            log::error!("Gemini chat call failed for {}: {}", request.pdf_filename, e);
            ServiceError::Upstream(e.to_string())
        })?;

        Ok(ChatResponse { response })
    }
}
