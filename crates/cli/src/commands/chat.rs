//! `mentor chat` — Interactive or single-message chat mode.

use mentor_config::AppConfig;
use mentor_core::{DetailLevel, ModelChoice};
use mentor_curriculum::{Provenance, load_curriculum};
use mentor_providers::OpenAiCompatProvider;
use mentor_session::{MentorSession, PresetQuery, SUGGESTED_TOPICS, topic_question};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

pub async fn run(
    message: Option<String>,
    model: Option<ModelChoice>,
    detail: Option<u8>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Check for API key early — give a clear error
    if !config.has_api_key() {
        eprintln!();
        eprintln!("  ERROR: No API key configured!");
        eprintln!();
        eprintln!("  Set one of these environment variables:");
        eprintln!("    MENTOR_API_KEY = 'sk-...'");
        eprintln!("    OPENAI_API_KEY = 'sk-...'");
        eprintln!();
        eprintln!("  Or add it to your config file:");
        eprintln!("    {}", AppConfig::config_dir().join("config.toml").display());
        eprintln!();
        return Err("No API key found. See above for setup instructions.".into());
    }

    // The one startup fetch — never re-run per turn
    let curriculum = load_curriculum(&config.curriculum).await;

    let session_model = model.unwrap_or(config.default_model);
    let session_detail = detail
        .and_then(DetailLevel::from_level)
        .or_else(|| DetailLevel::from_level(config.default_detail))
        .unwrap_or_default();

    let provider = Arc::new(OpenAiCompatProvider::from_config(&config)?);
    let mut session = MentorSession::new(
        provider,
        curriculum.text.clone(),
        session_detail,
        session_model,
    )
    .with_generation(
        config.default_temperature,
        Some(config.default_max_tokens),
    );

    if let Some(msg) = message {
        // Single message mode
        eprint!("  Thinking...");
        let result = session.submit(&msg).await;
        eprint!("\r              \r");
        match result {
            Ok(response) => println!("{response}"),
            Err(e) => return Err(format!("{e}").into()),
        }
        return Ok(());
    }

    // Interactive mode
    println!();
    println!("  ╔══════════════════════════════════════════════╗");
    println!("  ║        🧠 Mentor — Interactive Mode          ║");
    println!("  ╚══════════════════════════════════════════════╝");
    println!();
    match &curriculum.provenance {
        Provenance::Store { title, .. } => println!("  Curriculum: {title}"),
        Provenance::Fallback { reason } => {
            println!("  Curriculum: built-in sample content");
            println!("  Note:       {reason}");
        }
    }
    println!("  Model:      {}", session.model());
    println!("  Detail:     {} of 5", session.detail());
    println!();
    println!("  Type your question and press Enter. /help lists commands.");
    println!("  Type 'exit' or Ctrl+C to quit.");
    println!();

    let stdin = tokio::io::stdin();
    let reader = BufReader::new(stdin);
    let mut lines = reader.lines();

    prompt()?;
    while let Some(line) = lines.next_line().await? {
        let line = line.trim().to_string();
        if line.is_empty() {
            prompt()?;
            continue;
        }

        if matches!(line.as_str(), "exit" | "quit" | "/exit" | "/quit" | ":q") {
            break;
        }

        match parse_command(&line, &mut session) {
            Action::Handled => {}
            Action::Submit(question) => {
                if question != line {
                    println!("  Asking: {question}");
                }
                submit_and_print(&mut session, &question).await;
            }
        }

        prompt()?;
    }

    println!();
    println!("  Goodbye! 👋");
    println!();

    Ok(())
}

fn prompt() -> std::io::Result<()> {
    print!("  You > ");
    std::io::stdout().flush()
}

/// What a line of input turned into.
enum Action {
    /// A control command that was handled in place
    Handled,
    /// A question to run through the pipeline
    Submit(String),
}

fn parse_command(line: &str, session: &mut MentorSession) -> Action {
    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((c, r)) => (c, r.trim()),
        None => (line, ""),
    };

    match command {
        "/help" => {
            print_help();
            Action::Handled
        }
        "/clear" => {
            session.clear();
            println!("  Conversation cleared.");
            Action::Handled
        }
        "/detail" => {
            match rest.parse::<u8>().ok().and_then(DetailLevel::from_level) {
                Some(detail) => {
                    session.set_detail(detail);
                    println!("  Detail level set to {detail} of 5.");
                }
                None => println!("  Usage: /detail <1-5>"),
            }
            Action::Handled
        }
        "/model" => {
            match rest.parse::<ModelChoice>() {
                Ok(model) => {
                    session.set_model(model);
                    println!("  Model set to {model}.");
                }
                Err(e) => println!("  {e}"),
            }
            Action::Handled
        }
        "/outline" => {
            println!();
            println!("{}", session.curriculum_text());
            Action::Handled
        }
        "/topics" => {
            println!("  Suggested topics:");
            for topic in SUGGESTED_TOPICS {
                println!("    - {topic}");
            }
            println!("  Use /topic <name> to ask about one.");
            Action::Handled
        }
        "/topic" => {
            if rest.is_empty() {
                println!("  Usage: /topic <name>");
                Action::Handled
            } else {
                Action::Submit(topic_question(rest))
            }
        }
        "/explain" => Action::Submit(PresetQuery::ExplainConcept.question().into()),
        "/exercises" => Action::Submit(PresetQuery::PracticeExercises.question().into()),
        "/path" => Action::Submit(PresetQuery::LearningPath.question().into()),
        "/tips" => Action::Submit(PresetQuery::StudyTips.question().into()),
        _ if command.starts_with('/') => {
            println!("  Unknown command {command}. /help lists commands.");
            Action::Handled
        }
        _ => Action::Submit(line.to_string()),
    }
}

async fn submit_and_print(session: &mut MentorSession, question: &str) {
    eprint!("  ...");

    match session.submit(question).await {
        Ok(response) => {
            eprint!("\r     \r");
            println!();
            for line in response.lines() {
                println!("  Mentor > {line}");
            }
            println!();
        }
        Err(e) => {
            // The turn failed; the session keeps going
            eprint!("\r     \r");
            eprintln!("  [Error] {e}");
            println!();
        }
    }
}

fn print_help() {
    println!("  Commands:");
    println!("    /explain         Explain the most important concept");
    println!("    /exercises       Ask for practice exercises");
    println!("    /path            Ask for the recommended learning path");
    println!("    /tips            Ask for study strategies");
    println!("    /topic <name>    Ask about a topic (/topics lists suggestions)");
    println!("    /outline         Show the loaded curriculum");
    println!("    /detail <1-5>    Set response detail level");
    println!("    /model <name>    Switch backend model");
    println!("    /clear           Clear the conversation");
    println!("    exit             Quit");
}
