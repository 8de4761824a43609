use anyhow::Context;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::Local;
use clap::Parser;
use log::{error, info, warn};
use prost::Message;
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use wacore::types::account::LocalIdentity;
use waproto::whatsapp as wa;
use whatsapp_inbound::store::InMemoryChatStore;
use whatsapp_inbound::{MessageProcessor, ProcessorConfig};

// Replays inbound envelopes through the processor and prints what each one produced.
//
// Usage:
//   cargo run -- --me 15551234567@s.whatsapp.net --input messages.ndjson
//   cat messages.ndjson | cargo run -- --me 15551234567:3@s.whatsapp.net --unarchive-chats

/// Replay newline-delimited JSON message envelopes and derive chat state.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Our own address, in any device form.
    #[arg(long)]
    me: String,

    /// Unarchive chats that receive new activity.
    #[arg(long)]
    unarchive_chats: bool,

    /// Number of history sync notifications already processed.
    #[arg(long, default_value_t = 0)]
    processed_history: usize,

    /// JSON file with processor settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// File with one envelope per line. Reads stdin when omitted.
    #[arg(long)]
    input: Option<PathBuf>,
}

/// An input line is either a JSON envelope or a base64-encoded protobuf `WebMessageInfo`.
fn parse_envelope(line: &str) -> anyhow::Result<wa::WebMessageInfo> {
    let line = line.trim();
    if line.starts_with('{') {
        return Ok(serde_json::from_str(line)?);
    }
    let bytes = STANDARD.decode(line)?;
    Ok(wa::WebMessageInfo::decode(bytes.as_slice())?)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(
                buf,
                "{} [{:<5}] [{}] - {}",
                Local::now().format("%H:%M:%S"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();

    let config = match &args.config {
        Some(path) => ProcessorConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ProcessorConfig::default(),
    };

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to build tokio runtime")?;

    rt.block_on(run(args, config))
}

async fn run(args: Args, config: ProcessorConfig) -> anyhow::Result<()> {
    let mut identity = LocalIdentity::new(args.me).with_unarchive_chats(args.unarchive_chats);
    identity.processed_history_count = args.processed_history;

    let store = InMemoryChatStore::new();
    let processor = MessageProcessor::new(Arc::new(store.clone()), identity, config);

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(std::io::BufReader::new(
            std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?,
        )),
        None => Box::new(std::io::stdin().lock()),
    };

    let (mut processed, mut rejected) = (0usize, 0usize);
    for (index, line) in reader.lines().enumerate() {
        let line = line.context("reading input")?;
        if line.trim().is_empty() {
            continue;
        }
        let info = match parse_envelope(&line) {
            Ok(info) => info,
            Err(e) => {
                warn!("Skipping line {}: not a message envelope: {e}", index + 1);
                rejected += 1;
                continue;
            }
        };
        match processor.process(info).await {
            Ok(outcome) => {
                println!("{}", serde_json::to_string(&outcome)?);
                processed += 1;
            }
            Err(e) => {
                error!("Dropping message on line {}: {e}", index + 1);
                rejected += 1;
            }
        }
    }

    info!("Processed {processed} message(s), rejected {rejected}");
    for chat in store.snapshot().await {
        info!(
            "{}: unread {}, archived {:?}, last activity {:?}",
            chat.id, chat.unread_count, chat.archived, chat.conversation_timestamp
        );
    }
    Ok(())
}
