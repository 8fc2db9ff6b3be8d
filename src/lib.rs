// modchat library - moderated ai chat

pub mod cli;
mod config;
mod core;
mod error;
mod repl;

pub use config::Config;
pub use core::{Gemini, Moderation, Moderator};
pub use error::Error;
