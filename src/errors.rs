use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Please fill in both product name and description.")] Validation,
    #[error("missing API credential: environment variable `{0}` is not set")] MissingCredential(String),
    #[error("Gemini API error: {0}")] Transport(String),
    #[error("Gemini API error ({status}): {body}")] Api { status: u16, body: String },
    #[error("API returned data in an unexpected format: {0}")] Format(String),
}

impl From<reqwest::Error> for GenerateError {
    fn from(e: reqwest::Error) -> Self {
        GenerateError::Transport(e.to_string())
    }
}

impl GenerateError {
    pub fn is_format(&self) -> bool {
        matches!(self, GenerateError::Format(_))
    }
}
