use serde::{Deserialize, Serialize};
use serde_json::Value;

/// ========================================
/// Copy items
/// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CopyCategory {
    SocialMediaPost,
    AdHeadline,
    #[serde(rename = "EMAIL_SUBJECT")]
    EmailSubjectLine,
}

impl CopyCategory {
    pub const ALL: [CopyCategory; 3] = [
        CopyCategory::SocialMediaPost,
        CopyCategory::AdHeadline,
        CopyCategory::EmailSubjectLine,
    ];

    pub fn as_wire(&self) -> &'static str {
        match self {
            CopyCategory::SocialMediaPost => "SOCIAL_MEDIA_POST",
            CopyCategory::AdHeadline => "AD_HEADLINE",
            CopyCategory::EmailSubjectLine => "EMAIL_SUBJECT",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_wire() == s)
    }

    pub fn title(&self) -> &'static str {
        match self {
            CopyCategory::SocialMediaPost => "Social Media Post",
            CopyCategory::AdHeadline => "Ad Headline",
            CopyCategory::EmailSubjectLine => "Email Subject Line",
        }
    }
}

/// One generated piece of copy as returned by the model.
///
/// `kind` keeps the raw wire tag so that tags outside [`CopyCategory`] are
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedCopy {
    #[serde(rename = "type")]
    pub kind: String,
    pub content: String,
}

impl GeneratedCopy {
    pub fn category(&self) -> Option<CopyCategory> {
        CopyCategory::from_wire(&self.kind)
    }

    /// Card title; unknown tags fall back to a generic one.
    pub fn title(&self) -> &'static str {
        self.category().map(|c| c.title()).unwrap_or("Generated Copy")
    }
}

/// ========================================
/// Gemini generateContent wire protocol
/// ========================================

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

impl GenerateContentRequest {
    pub fn new(prompt: &str, schema: Value) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".into()),
                parts: vec![Part { text: Some(prompt.to_string()) }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".into(),
                response_schema: schema,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Candidate {
    pub content: Option<Content>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(CopyCategory::from_wire("AD_HEADLINE"), Some(CopyCategory::AdHeadline));
        assert_eq!(CopyCategory::from_wire("EMAIL_SUBJECT"), Some(CopyCategory::EmailSubjectLine));
        assert_eq!(CopyCategory::from_wire("ad_headline"), None);
        assert_eq!(
            serde_json::to_value(CopyCategory::EmailSubjectLine).unwrap(),
            json!("EMAIL_SUBJECT")
        );
        assert_eq!(
            serde_json::to_value(CopyCategory::SocialMediaPost).unwrap(),
            json!("SOCIAL_MEDIA_POST")
        );
    }

    #[test]
    fn test_titles_with_fallback() {
        let known = GeneratedCopy { kind: "AD_HEADLINE".into(), content: "x".into() };
        let unknown = GeneratedCopy { kind: "BILLBOARD".into(), content: "x".into() };
        assert_eq!(known.title(), "Ad Headline");
        assert_eq!(unknown.title(), "Generated Copy");
        assert_eq!(unknown.category(), None);
    }

    #[test]
    fn test_request_body_shape() {
        let req = GenerateContentRequest::new("hello", json!({"type": "ARRAY"}));
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["contents"][0]["parts"][0]["text"], "hello");
        assert_eq!(v["generationConfig"]["responseMimeType"], "application/json");
        assert_eq!(v["generationConfig"]["responseSchema"]["type"], "ARRAY");
    }

    #[test]
    fn test_response_text_joins_parts() {
        let resp: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "role": "model", "parts": [{"text": "[1,"}, {"text": "2]"}] } }]
        }))
        .unwrap();
        assert_eq!(resp.text().as_deref(), Some("[1,2]"));

        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), None);
    }
}
