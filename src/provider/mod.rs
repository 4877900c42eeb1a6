use async_trait::async_trait;
use serde_json::Value;

use crate::errors::GenerateError;

pub mod gemini;

/// One structured-output call to a hosted model.
///
/// Returns the raw response text; shape checks happen in `generate`.
#[async_trait]
pub trait Provider: Send + Sync {
    async fn generate_content(
        &self,
        api_key: &str,
        prompt: &str,
        schema: &Value,
    ) -> Result<String, GenerateError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

pub fn make_provider(model: String, api_base: String) -> DynProvider {
    Box::new(gemini::GeminiProvider::new(model, api_base))
}
