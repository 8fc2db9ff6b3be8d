// core logic - the gemini client and keyword moderation

mod gemini;
mod moderation;

pub use gemini::Gemini;
pub use moderation::{Moderation, Moderator};
