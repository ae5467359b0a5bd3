use pdf_chat::{AnalysisService, ChatService, DocumentStore, LlmClient, TextExtractor};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub analysis_service: Arc<AnalysisService>,
    pub chat_service: Arc<ChatService>,
}

impl AppState {
    /// Both services share one store, so what an upload writes is what chat reads.
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        llm: Arc<dyn LlmClient>,
        store: Arc<DocumentStore>,
    ) -> Self {
        Self {
            analysis_service: Arc::new(AnalysisService::new(
                extractor,
                Arc::clone(&llm),
                Arc::clone(&store),
            )),
            chat_service: Arc::new(ChatService::new(llm, store)),
        }
    }
}
