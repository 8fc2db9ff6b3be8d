use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Gemini API error: {0}")]
    Api(String),

    #[error("Unexpected response format: {0}")]
    Format(String),

    #[error("Invalid moderation pattern: {0}")]
    Pattern(#[from] regex::Error),
}
