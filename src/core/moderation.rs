// keyword moderation - flags or redacts banned terms
// whole-word and case-insensitive, so "skilled" never trips on "kill"

use crate::Error;
use regex::{Regex, RegexBuilder};

const REDACTED: &str = "[REDACTED]";

pub struct Moderator {
    terms: Vec<(String, Regex)>,
}

pub struct Moderation {
    pub is_safe: bool,
    pub matched: Vec<String>,
}

impl Moderator {
    pub fn new(banned_terms: &[String]) -> Result<Self, Error> {
        let mut terms = Vec::with_capacity(banned_terms.len());

        for term in banned_terms {
            let pattern = format!(r"\b{}\b", regex::escape(term));
            let re = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
            terms.push((term.clone(), re));
        }

        Ok(Self { terms })
    }

    // matched terms come back in list order, not order of appearance
    pub fn check(&self, text: &str) -> Moderation {
        let matched: Vec<String> = self
            .terms
            .iter()
            .filter(|(_, re)| re.is_match(text))
            .map(|(term, _)| term.clone())
            .collect();

        Moderation {
            is_safe: matched.is_empty(),
            matched,
        }
    }

    // the placeholder contains no banned vocabulary, so one term's
    // redaction can't trigger another's
    pub fn redact(&self, text: &str) -> String {
        let mut redacted = text.to_string();

        for (_, re) in &self.terms {
            redacted = re.replace_all(&redacted, REDACTED).into_owned();
        }

        redacted
    }
}
