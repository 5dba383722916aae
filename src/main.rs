use anyhow::{anyhow, Result};
use env_logger::Builder;
use log::{debug, LevelFilter};
use solana_message_summarizer::constants::MAX_DISPLAY_STEPS;
use solana_message_summarizer::summary::TransactionSummary;
use solana_message_summarizer::{summarize_message, VERSION};
use std::io::Write;

// Simple CLI without clap
fn main() -> Result<()> {
    // Initialize logger
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}",
                std::time::SystemTime::now()
                    .duration_since(std::time::UNIX_EPOCH)
                    .map(|d| d.as_secs())
                    .unwrap_or_default(),
                record.level(),
                record.args()
            )
        })
        .filter(None, LevelFilter::Info)
        .init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        println!("Solana Message Summarizer v{}", VERSION);
        return Ok(());
    }

    if args.len() < 2 {
        println!("Solana Message Summarizer v{}", VERSION);
        println!("\nUsage:");
        println!("  {} <MESSAGE> [--json]", args[0]);
        println!("  {} --version", args[0]);
        println!("\nArguments:");
        println!("  MESSAGE              Transaction message encoded as hex, base58, or base64");
        println!("\nOptions:");
        println!("  --json               Print the summary as JSON");
        println!("  --version, -v        Show version information");
        return Ok(());
    }

    let encoded = &args[1];
    let json = args.iter().skip(2).any(|arg| arg == "--json");

    let message = decode_input(encoded)?;
    let mut summary = TransactionSummary::new();
    summarize_message(&message, &mut summary)?;
    let items = summary.finalize(MAX_DISPLAY_STEPS)?;

    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            println!("{}: {}", item.title, item.text);
        }
    }

    Ok(())
}

/// Decode the command-line message argument, trying hex, then base58, then
/// base64.
fn decode_input(encoded: &str) -> Result<Vec<u8>> {
    hex::decode(encoded)
        .map_err(|e| anyhow!("not hex: {e}"))
        .or_else(|e| {
            debug!("hex decoding failed: {e}");
            bs58::decode(encoded)
                .into_vec()
                .map_err(|e| anyhow!("not base58: {e}"))
        })
        .or_else(|e| {
            debug!("base58 decoding failed: {e}");
            base64::decode(encoded).map_err(|e| anyhow!("not base64: {e}"))
        })
        .map_err(|_| anyhow!("message is not valid hex, base58, or base64"))
}
