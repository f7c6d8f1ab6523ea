//! unidir-chat – terminal client for the chat relay.
//!
//! Reads messages from stdin, streams each reply to stdout as it arrives.
//! Lines starting with `/` are commands:
//!
//! - `/mode <general|twin|alternatives|career>` switches mode and clears the chat
//! - `/suggest` prints the suggested questions for the current mode
//! - `/reset` clears the chat
//! - `/quit` exits

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};
use unidir_chat::{
    ChatError, Conversation, ConversationAction, DEFAULT_RELAY_URL, RelayClient, modes,
};
use unidir_types::{CallerProfile, InteractionMode, Locale};

#[derive(Debug, Parser)]
#[command(name = "unidir-chat", version, about = "Chat with the university directory assistant")]
struct Cli {
    /// Relay endpoint.
    #[arg(long, env = "UNIDIR_RELAY_URL", default_value = DEFAULT_RELAY_URL)]
    relay_url: String,

    /// Reply language: ru, kk or en.
    #[arg(long, default_value = "ru")]
    language: String,

    /// Initial mode.
    #[arg(long, default_value = "general")]
    mode: String,

    /// Applicant profile: inline JSON or a path to a JSON file.
    #[arg(long)]
    profile: Option<String>,

    /// Send a single message, print the reply and exit.
    #[arg(long)]
    message: Option<String>,

    /// Log filter for diagnostics on stderr.
    #[arg(long, env = "UNIDIR_LOG", default_value = "warn")]
    log: String,
}

enum Command<'a> {
    Mode(Option<&'a str>),
    Suggest,
    Reset,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Option<Command<'_>> {
    let rest = line.strip_prefix('/')?;
    let mut parts = rest.split_whitespace();
    let name = parts.next().unwrap_or_default();
    Some(match name {
        "mode" => Command::Mode(parts.next()),
        "suggest" => Command::Suggest,
        "reset" => Command::Reset,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other),
    })
}

fn load_profile(arg: &str) -> Result<CallerProfile> {
    let raw = if arg.trim_start().starts_with('{') {
        arg.to_owned()
    } else {
        let path = Path::new(arg);
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read profile {}", path.display()))?
    };
    let profile = serde_json::from_str(&raw).map_err(ChatError::from)?;
    Ok(profile)
}

fn print_welcome(conv: &Conversation) {
    let guide = modes::guide(conv.locale(), conv.mode());
    println!("[{}] {}", guide.title, guide.welcome);
}

fn print_suggestions(conv: &Conversation) {
    let guide = modes::guide(conv.locale(), conv.mode());
    for (i, s) in guide.suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, s);
    }
}

async fn ask(client: &RelayClient, conv: &mut Conversation, text: &str) {
    let mut stdout = std::io::stdout();
    let result = client
        .send(conv, text, |delta| {
            print!("{delta}");
            let _ = stdout.flush();
        })
        .await;
    println!();

    if let Err(e) = result {
        warn!(error = %e, "chat request failed");
        eprintln!("{}", e.notice());
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let env_filter = cli
        .log
        .parse::<tracing_subscriber::EnvFilter>()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let locale = Locale::from_code_or_default(Some(&cli.language));
    let mode = InteractionMode::from_tag_or_default(Some(&cli.mode));
    let profile = cli.profile.as_deref().map(load_profile).transpose()?;

    let client = RelayClient::new(cli.relay_url, profile);
    let mut conv = Conversation::new(locale, mode);
    debug!(url = client.url(), %locale, %mode, "unidir-chat ready");

    if let Some(message) = cli.message {
        ask(&client, &mut conv, &message).await;
        return Ok(());
    }

    print_welcome(&conv);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_command(line) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                conv.apply(ConversationAction::Reset);
                print_welcome(&conv);
            }
            Some(Command::Suggest) => print_suggestions(&conv),
            Some(Command::Mode(Some(tag))) => match tag.parse::<InteractionMode>() {
                Ok(mode) => {
                    conv.apply(ConversationAction::ModeChanged(mode));
                    print_welcome(&conv);
                }
                Err(_) => eprintln!("unknown mode '{tag}'"),
            },
            Some(Command::Mode(None)) => println!("mode: {}", conv.mode()),
            Some(Command::Unknown(name)) => eprintln!("unknown command '/{name}'"),
            None => ask(&client, &mut conv, line).await,
        }
    }

    Ok(())
}
