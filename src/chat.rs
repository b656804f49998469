use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use faq_agent::application::AnswerResolver;
use faq_agent::domain::{ChatSession, Resolution};
use faq_agent::infrastructure::{build_resolver, AppConfig};

#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Ask(&'a str),
    History,
    Reset,
    Quit,
}

fn parse(line: &str) -> Command<'_> {
    match line.trim() {
        "/quit" | "/exit" => Command::Quit,
        "/history" => Command::History,
        "/reset" => Command::Reset,
        _ => Command::Ask(line),
    }
}

fn render(session: &ChatSession) {
    if session.is_empty() {
        println!("(no messages yet)");
    }
    for turn in session.turns() {
        println!("{turn}");
    }
}

fn prompt(placeholder: &str) -> std::io::Result<()> {
    print!("{placeholder} > ");
    std::io::stdout().flush()
}

async fn ask(resolver: &AnswerResolver, session: &mut ChatSession, query: &str) {
    session.push_user(query);

    let resolution = resolver.resolve(query).await;
    if let Resolution::Failed { error, .. } = &resolution {
        tracing::error!(error = %error, session_id = %session.id, "chat turn failed");
    }

    session.push_assistant(resolution.into_message());
    if let Some(turn) = session.last_turn() {
        println!("{turn}\n");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "faq_agent=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = AppConfig::load()?;
    let resolver = build_resolver(&config).await?;

    println!("{}\n", config.ui.title);
    let mut session = ChatSession::new();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    prompt(&config.ui.placeholder)?;

    while let Some(line) = lines.next_line().await? {
        match parse(&line) {
            Command::Quit => break,
            Command::History => render(&session),
            Command::Reset => {
                session = ChatSession::new();
                println!("(new session {})", session.id);
            }
            Command::Ask(query) => ask(&resolver, &mut session, query).await,
        }
        prompt(&config.ui.placeholder)?;
    }

    Ok(())
}
