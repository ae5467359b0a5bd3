use crate::document_processor::TextExtractor;
use crate::gemini_service::LlmClient;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Returns a fixed reply and records what it was asked.
pub struct ScriptedLlm {
    reply: String,
    calls: AtomicUsize,
    last: Mutex<Option<(String, String)>>,
}

impl ScriptedLlm {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_api_key(&self) -> Option<String> {
        self.last.lock().unwrap().as_ref().map(|(key, _)| key.clone())
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last.lock().unwrap().as_ref().map(|(_, prompt)| prompt.clone())
    }
}

#[async_trait]
impl LlmClient for ScriptedLlm {
    async fn generate(&self, api_key: &str, prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((api_key.to_string(), prompt.to_string()));
        Ok(self.reply.clone())
    }
}

pub struct FailingLlm {
    message: String,
    calls: AtomicUsize,
}

impl FailingLlm {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LlmClient for FailingLlm {
    async fn generate(&self, _api_key: &str, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(anyhow::anyhow!("{}", self.message))
    }
}

/// Pretends every input is a PDF with the given pages, or fails outright.
pub struct PagedExtractor {
    pages: Result<Vec<String>, String>,
}

impl PagedExtractor {
    pub fn new(pages: &[&str]) -> Self {
        Self {
            pages: Ok(pages.iter().map(|p| p.to_string()).collect()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            pages: Err(message.to_string()),
        }
    }
}

#[async_trait]
impl TextExtractor for PagedExtractor {
    async fn extract(&self, _bytes: Vec<u8>) -> Result<String> {
        match &self.pages {
            Ok(pages) => Ok(pages.concat()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}
