use serde_json::Value;

use crate::errors::GenerateError;
use crate::prompt;
use crate::provider::DynProvider;
use crate::wire::GeneratedCopy;

/// Turns a product name and description into categorized marketing copy.
pub struct CopyClient {
    provider: DynProvider,
    api_key_env: String,
    strict: bool,
}

impl CopyClient {
    pub fn new(provider: DynProvider, api_key_env: impl Into<String>) -> Self {
        Self {
            provider,
            api_key_env: api_key_env.into(),
            strict: false,
        }
    }

    /// Also reject unknown categories, blank content and arrays whose length is not 3.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub async fn generate(
        &self,
        product_name: &str,
        product_description: &str,
    ) -> Result<Vec<GeneratedCopy>, GenerateError> {
        let result = self.generate_inner(product_name, product_description).await;
        if let Err(e) = &result {
            tracing::error!(error = %e, format = e.is_format(), "error calling Gemini API");
        }
        result
    }

    async fn generate_inner(
        &self,
        product_name: &str,
        product_description: &str,
    ) -> Result<Vec<GeneratedCopy>, GenerateError> {
        // Read per call so a missing key fails this request, not the process.
        let api_key = match std::env::var(&self.api_key_env) {
            Ok(k) if !k.trim().is_empty() => k,
            _ => return Err(GenerateError::MissingCredential(self.api_key_env.clone())),
        };

        let prompt = prompt::user_prompt_copy(product_name, product_description);
        let schema = prompt::response_schema();
        let text = self.provider.generate_content(&api_key, &prompt, &schema).await?;

        parse_copy(&text, self.strict)
    }
}

/// Parses and shape-checks the model's JSON text.
///
/// Every element needs a string `type` (or `category`) and a string
/// `content`. Outside strict mode nothing else is checked.
pub fn parse_copy(text: &str, strict: bool) -> Result<Vec<GeneratedCopy>, GenerateError> {
    let value: Value = serde_json::from_str(text.trim())
        .map_err(|e| GenerateError::Format(format!("response is not valid JSON ({e})")))?;

    let items = value
        .as_array()
        .ok_or_else(|| GenerateError::Format("expected a JSON array".into()))?;

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        let kind = item
            .get("type")
            .or_else(|| item.get("category"))
            .and_then(Value::as_str);
        let content = item.get("content").and_then(Value::as_str);
        match (kind, content) {
            (Some(kind), Some(content)) => out.push(GeneratedCopy {
                kind: kind.to_string(),
                content: content.to_string(),
            }),
            _ => {
                return Err(GenerateError::Format(format!(
                    "item {i} lacks a string `type` and `content`"
                )))
            }
        }
    }

    if strict {
        check_strict(&out)?;
    }
    Ok(out)
}

fn check_strict(items: &[GeneratedCopy]) -> Result<(), GenerateError> {
    if items.len() != 3 {
        return Err(GenerateError::Format(format!("expected 3 items, got {}", items.len())));
    }
    for item in items {
        if item.category().is_none() {
            return Err(GenerateError::Format(format!("unknown copy type `{}`", item.kind)));
        }
        if item.content.trim().is_empty() {
            return Err(GenerateError::Format(format!("empty content for `{}`", item.kind)));
        }
    }
    Ok(())
}
