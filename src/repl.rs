// interactive loop - read a line, moderate it, ask gemini,
// moderate the answer, print

use std::io::{self, BufRead, Write};

use crate::{Config, Gemini, Moderator};
use miette::{IntoDiagnostic, Result};

// what to do with one line of input, decided before any
// moderation or network work happens
enum Input {
    Quit,
    Blank,
    Prompt(String),
}

fn classify(line: &str) -> Input {
    let trimmed = line.trim();

    if trimmed.eq_ignore_ascii_case("quit") {
        Input::Quit
    } else if trimmed.is_empty() {
        Input::Blank
    } else {
        Input::Prompt(trimmed.to_string())
    }
}

pub async fn run(config: &Config, moderator: &Moderator, gemini: &Gemini) -> Result<()> {
    banner(config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("\nyou: ");
        stdout.flush().into_diagnostic()?;

        line.clear();
        // EOF ends the session the same way 'quit' does
        if stdin.lock().read_line(&mut line).into_diagnostic()? == 0 {
            break;
        }

        let prompt = match classify(&line) {
            Input::Quit => break,
            Input::Blank => {
                println!("please enter a prompt");
                continue;
            }
            Input::Prompt(prompt) => prompt,
        };

        let moderation = moderator.check(&prompt);
        if !moderation.is_safe {
            println!("your input violated the moderation policy");
            println!("banned terms: {}", moderation.matched.join(", "));
            continue;
        }

        println!("thinking...");
        let reply = match gemini.generate(&prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                // the detail goes to stderr; the user gets a generic notice
                eprintln!("{e}");
                println!("failed to get a response, please try again");
                continue;
            }
        };

        let moderation = moderator.check(&reply);
        let reply = if moderation.is_safe {
            reply
        } else {
            println!(
                "response contained banned terms ({}), redacting",
                moderation.matched.join(", ")
            );
            moderator.redact(&reply)
        };

        println!("\nai: {reply}");
    }

    println!("\ngoodbye!");
    Ok(())
}

fn banner(config: &Config) {
    println!("{}", "=".repeat(60));
    println!("modchat - AI chat with moderation");
    println!("{}", "=".repeat(60));
    println!("\ntype 'quit' to exit");

    if !config.has_api_key() {
        println!("\nwarning: GOOGLE_API_KEY is not set, requests will fail");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quit_sentinel_is_case_insensitive() {
        assert!(matches!(classify("quit\n"), Input::Quit));
        assert!(matches!(classify("QUIT\n"), Input::Quit));
        assert!(matches!(classify("  Quit  \n"), Input::Quit));
    }

    #[test]
    fn blank_input_never_becomes_a_prompt() {
        assert!(matches!(classify("\n"), Input::Blank));
        assert!(matches!(classify("   \n"), Input::Blank));
        assert!(matches!(classify(""), Input::Blank));
    }

    #[test]
    fn prompt_is_trimmed() {
        match classify("  hello there  \n") {
            Input::Prompt(p) => assert_eq!(p, "hello there"),
            _ => panic!("expected a prompt"),
        }
    }

    #[test]
    fn quit_inside_a_sentence_is_a_prompt() {
        assert!(matches!(classify("how do I quit vim?\n"), Input::Prompt(_)));
    }
}
