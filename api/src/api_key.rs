use headers::{Error, Header, HeaderName, HeaderValue};

static X_API_KEY: HeaderName = HeaderName::from_static("x-api-key");

/// The caller's Gemini key, forwarded as-is on every LLM call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XApiKey(pub String);

impl XApiKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Header for XApiKey {
    fn name() -> &'static HeaderName {
        &X_API_KEY
    }

    fn decode<'i, I>(values: &mut I) -> Result<Self, Error>
    where
        I: Iterator<Item = &'i HeaderValue>,
    {
        let value = values.next().ok_or_else(Error::invalid)?;
        let key = value.to_str().map_err(|_| Error::invalid())?;
        Ok(XApiKey(key.to_string()))
    }

    fn encode<E: Extend<HeaderValue>>(&self, values: &mut E) {
        if let Ok(value) = HeaderValue::from_str(&self.0) {
            values.extend(std::iter::once(value));
        }
    }
}
