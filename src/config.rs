// runtime configuration - assembled once at startup and handed to
// the moderator and the gemini client

use std::env;

const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY_HERE";

const SYSTEM_PROMPT: &str = "You are a helpful, respectful, and honest assistant. \
Always answer as helpfully as possible while being safe. \
Your answers should not include any harmful, unethical, racist, sexist, \
toxic, dangerous, or illegal content. Please ensure that your responses \
are socially unbiased and positive in nature.";

// moderation vocabulary, checked in this order
const BANNED_TERMS: [&str; 12] = [
    "kill",
    "murder",
    "hack",
    "bomb",
    "terrorist",
    "suicide",
    "weapon",
    "drugs",
    "violence",
    "attack",
    "destroy",
    "harm",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub endpoint: String,
    pub system_prompt: String,
    pub banned_terms: Vec<String>,
    pub temperature: f32,
    pub max_output_tokens: u32,
    pub timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        let api_key =
            env::var("GOOGLE_API_KEY").unwrap_or_else(|_| PLACEHOLDER_API_KEY.to_string());
        Self::with_api_key(api_key)
    }

    pub fn with_api_key(api_key: String) -> Self {
        let endpoint = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent?key={api_key}"
        );

        Self {
            api_key,
            endpoint,
            system_prompt: SYSTEM_PROMPT.to_string(),
            banned_terms: BANNED_TERMS.iter().map(|t| t.to_string()).collect(),
            temperature: 0.7,
            max_output_tokens: 1024,
            timeout_secs: 30,
        }
    }

    // a missing key leaves the placeholder in place so the app still
    // starts; real calls will be rejected by the endpoint
    pub fn has_api_key(&self) -> bool {
        self.api_key != PLACEHOLDER_API_KEY
    }
}
