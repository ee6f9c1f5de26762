use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::prompt::build_prompt;
use super::request::TranslationRequest;
use crate::error::TranslateError;

pub const DEFAULT_ENDPOINT: &str = "https://api.anthropic.com";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
pub const DEFAULT_MAX_TOKENS: u32 = 4000;
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Returned when the model answers without any text.
pub const EMPTY_TRANSLATION_FALLBACK: &str = "Translation was not possible.";

#[derive(Debug, Serialize)]
pub(crate) struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Message<'a>>,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: MessageContent<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent<'a> {
    Text(Cow<'a, str>),
    Parts(Vec<ContentPart<'a>>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart<'a> {
    Document { source: DocumentSource },
    Text { text: Cow<'a, str> },
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum DocumentSource {
    Base64 {
        media_type: &'static str,
        data: String,
    },
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponseBlock {
    Text {
        text: String,
    },
    #[serde(other)]
    Other,
}

/// Builds the Messages API body for a request and its prompt.
///
/// With an attachment the user message carries a document part followed by
/// the prompt as a text part; otherwise its content is the prompt string.
pub(crate) fn build_messages_request<'a>(
    request: &TranslationRequest,
    prompt: &'a str,
    model: &'a str,
    max_tokens: u32,
) -> MessagesRequest<'a> {
    let content = match &request.attachment {
        Some(attachment) => MessageContent::Parts(vec![
            ContentPart::Document {
                source: DocumentSource::Base64 {
                    media_type: attachment.media_type(),
                    data: attachment.base64_data(),
                },
            },
            ContentPart::Text {
                text: Cow::Borrowed(prompt),
            },
        ]),
        None => MessageContent::Text(Cow::Borrowed(prompt)),
    };

    MessagesRequest {
        model,
        max_tokens,
        messages: vec![Message {
            role: "user",
            content,
        }],
    }
}

/// Concatenates every text block in order, falling back to
/// [`EMPTY_TRANSLATION_FALLBACK`] when there is no text.
fn extract_text(response: MessagesResponse) -> String {
    let text: String = response
        .content
        .into_iter()
        .filter_map(|block| match block {
            ResponseBlock::Text { text } => Some(text),
            ResponseBlock::Other => None,
        })
        .collect();

    if text.is_empty() {
        EMPTY_TRANSLATION_FALLBACK.to_string()
    } else {
        text
    }
}

/// Client for the Anthropic Messages API.
///
/// Each call to [`translate`](Self::translate) performs exactly one POST.
/// There are no retries and no timeout beyond the transport defaults.
pub struct TranslationClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
    max_tokens: u32,
}

impl TranslationClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.endpoint.trim_end_matches('/'))
    }

    /// Translates a request and returns the model's text.
    ///
    /// # Errors
    ///
    /// - [`TranslateError::Api`] when the API answers with a non-success status.
    /// - [`TranslateError::Failed`] on transport errors or an unreadable response.
    pub async fn translate(&self, request: &TranslationRequest) -> Result<String, TranslateError> {
        let url = self.messages_url();
        let prompt = build_prompt(request);
        let body = build_messages_request(request, &prompt, &self.model, self.max_tokens);

        tracing::debug!(
            url = %url,
            model = %self.model,
            attachment = request.attachment.is_some(),
            prompt_len = prompt.len(),
            "sending translation request"
        );

        let mut http_request = self
            .client
            .post(&url)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("x-api-key", api_key);
        }

        let response = http_request.send().await.map_err(|e| {
            tracing::debug!(error = %e, url = %url, "translation request failed");
            TranslateError::Failed
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), body = %body, "API returned an error status");
            return Err(TranslateError::Api {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .map_or_else(|| status.as_str().to_string(), str::to_string),
            });
        }

        let parsed: MessagesResponse = response.json().await.map_err(|e| {
            tracing::debug!(error = %e, "failed to parse translation response");
            TranslateError::Failed
        })?;

        Ok(extract_text(parsed))
    }
}
