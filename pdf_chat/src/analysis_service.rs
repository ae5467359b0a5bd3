use crate::document_processor::TextExtractor;
use crate::document_store::DocumentStore;
use crate::error::{Result, ServiceError};
use crate::gemini_service::LlmClient;
use crate::models::*;
use crate::prompts;
use std::sync::Arc;

/// Handles uploads: extract, analyse, store.
pub struct AnalysisService {
    extractor: Arc<dyn TextExtractor>,
    llm: Arc<dyn LlmClient>,
    store: Arc<DocumentStore>,
}

impl AnalysisService {
    pub fn new(extractor: Arc<dyn TextExtractor>, llm: Arc<dyn LlmClient>, store: Arc<DocumentStore>) -> Self {
        Self {
            extractor,
            llm,
            store,
        }
    }

    /// Only extraction failures abort an upload. Analysis problems degrade
    /// the topic and suggestions but the text is stored regardless.
    pub async fn upload(
        &self,
        filename: &str,
        content_type: Option<String>,
        bytes: Vec<u8>,
        api_key: Option<&str>,
    ) -> Result<UploadResponse> {
        log::info!("Processing PDF: {} ({} bytes)", filename, bytes.len());

        let text = self
            .extractor
            .extract(bytes)
            .await
            .map_err(|e| ServiceError::Extraction(e.to_string()))?;

        let analysis = self.analyze(filename, &text, api_key).await;
        let message = format!("{}{}", prompts::UPLOAD_SUCCESS_PREFIX, analysis.topic);

        self.store
            .put(
                filename,
                DocumentRecord {
                    text,
                    topic: analysis.topic,
                    suggestions: analysis.suggestions,
                },
            )
            .await;
        log::info!("Document store now holds {} document(s)", self.store.len().await);

        Ok(UploadResponse {
            filename: filename.to_string(),
            content_type,
            message,
        })
    }

    async fn analyze(&self, filename: &str, text: &str, api_key: Option<&str>) -> Analysis {
        let api_key = match api_key.filter(|k| !k.is_empty()) {
            Some(key) => key,
            None => {
                log::warn!("No API key supplied for {}; using default topic and suggestions", filename);
                return Analysis {
                    topic: prompts::untitled_topic(filename),
                    suggestions: prompts::untitled_suggestions(),
                };
            }
        };

        let prompt = prompts::build_analysis_prompt(text);
        match self.llm.generate(api_key, &prompt).await {
            Ok(response) => parse_analysis(&response, filename),
            Err(e) => {
                log::warn!("LLM analysis failed for {}: {}", filename, e);
                Analysis {
                    topic: prompts::failed_topic(filename),
                    suggestions: prompts::failed_suggestions(),
                }
            }
        }
    }
}

/// Reads the analysis reply line by line.
///
/// The first line starting with `Konu: ` gives the topic; every line starting
/// with `- ` gives a suggestion, wherever it appears. Missing pieces fall
/// back to filename- or topic-based defaults.
pub fn parse_analysis(response: &str, filename: &str) -> Analysis {
    let lines: Vec<&str> = response
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .collect();

    let topic = lines
        .iter()
        .find_map(|line| line.strip_prefix(prompts::TOPIC_MARKER))
        .map(str::to_string)
        .unwrap_or_else(|| prompts::unparsed_topic(filename));

    let mut suggestions: Vec<String> = lines
        .iter()
        .filter_map(|line| line.strip_prefix(prompts::SUGGESTION_BULLET))
        .map(str::to_string)
        .collect();

    if suggestions.is_empty() {
        suggestions = prompts::topic_suggestions(&topic);
    }

    Analysis { topic, suggestions }
}
