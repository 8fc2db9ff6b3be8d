// gemini integration - sends one prompt, returns one completion

use crate::{Config, Error};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub struct Gemini {
    client: reqwest::Client,
    endpoint: String,
    system_prompt: String,
    temperature: f32,
    max_output_tokens: u32,
}

// what we send to gemini
#[derive(Serialize)]
struct Request {
    contents: Vec<RequestContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

// what gemini sends back
#[derive(Deserialize)]
struct Response {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<Part>,
}

impl Gemini {
    pub fn new(config: &Config) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            system_prompt: config.system_prompt.clone(),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
        })
    }

    // single attempt, no retries; the caller decides what to tell the user
    pub async fn generate(&self, prompt: &str) -> Result<String, Error> {
        let request = Request {
            contents: vec![RequestContent {
                parts: vec![Part {
                    text: compose_prompt(&self.system_prompt, prompt),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await?;
            return Err(Error::Api(format!("{status}: {body}")));
        }

        let body = response.text().await?;
        Self::extract_reply(&body)
    }

    // the generated text sits three levels deep in the envelope;
    // anything that doesn't match that shape is a format error
    pub fn extract_reply(body: &str) -> Result<String, Error> {
        let response: Response =
            serde_json::from_str(body).map_err(|e| Error::Format(e.to_string()))?;

        response
            .candidates
            .first()
            .and_then(|c| c.content.parts.first())
            .map(|p| p.text.clone())
            .ok_or_else(|| Error::Format("no candidates in response".to_string()))
    }
}

// the system instruction rides along with every request
fn compose_prompt(system_prompt: &str, user_prompt: &str) -> String {
    format!("{system_prompt}\n\nUser: {user_prompt}")
}
