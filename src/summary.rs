//! Bounded, ordered human-readable decode result.
//!
//! The summary is the only state that outlives a decode call: items own their
//! rendered text, so nothing borrowed from the message buffer is retained.
//! Appending past the fixed capacity is a hard failure, never a silent
//! truncation, and at most one primary and one fee-payer item may exist.

use serde::Serialize;

use crate::constants::{
    MAX_SUMMARY_ITEMS, SUMMARY_PREFIX_LENGTH, SUMMARY_SUFFIX_LENGTH, TOKEN_MAX_SIGNERS,
};
use crate::errors::{DecodeError, DecodeResult};
use crate::parser::{Hash, Pubkey};

/// Display role of a summary item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SummaryItemKind {
    /// The headline item, shown first. At most one per summary.
    Primary,
    /// Ordinary detail line.
    General,
    /// The fee-payer annotation. At most one per summary.
    FeePayer,
}

/// Value to render into a summary line. Borrowed values are formatted on
/// append; nothing here is stored.
pub enum SummaryValue<'a> {
    Pubkey(&'a Pubkey),
    U64(u64),
    I64(i64),
    /// Fixed-point asset amount scaled by `decimals`.
    Amount {
        value: u64,
        decimals: u8,
        symbol: &'static str,
    },
    String(&'static str),
    /// Rendered as full base58, no head/tail summarization.
    Hash(&'a Hash),
    /// "m of n" multisig threshold. Requires m <= n <= the signer cap.
    MofN(u8, u8),
}

impl SummaryValue<'_> {
    fn render(&self) -> DecodeResult<String> {
        match *self {
            SummaryValue::Pubkey(key) => Ok(summarize(&bs58::encode(key).into_string())),
            SummaryValue::U64(value) => Ok(value.to_string()),
            SummaryValue::I64(value) => Ok(value.to_string()),
            SummaryValue::Amount {
                value,
                decimals,
                symbol,
            } => Ok(format_amount(value, decimals, symbol)),
            SummaryValue::String(text) => Ok(text.to_string()),
            SummaryValue::Hash(hash) => Ok(bs58::encode(hash).into_string()),
            SummaryValue::MofN(m, n) => format_m_of_n(m, n),
        }
    }
}

/// One rendered line of the approval prompt.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryItem {
    pub kind: SummaryItemKind,
    pub title: &'static str,
    pub text: String,
}

/// Fixed-capacity ordered sequence of summary items. Reset before each
/// decode, read only after the decode completes.
#[derive(Default)]
pub struct TransactionSummary {
    items: Vec<SummaryItem>,
}

impl TransactionSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty the item sequence ahead of a fresh decode.
    pub fn reset(&mut self) {
        self.items.clear();
    }

    fn push(
        &mut self,
        kind: SummaryItemKind,
        title: &'static str,
        value: SummaryValue<'_>,
    ) -> DecodeResult<()> {
        if self.items.len() >= MAX_SUMMARY_ITEMS {
            return Err(DecodeError::SummaryCapacityExceeded);
        }
        let text = value.render()?;
        self.items.push(SummaryItem { kind, title, text });
        Ok(())
    }

    /// Append the headline item. Setting a second one is a logic error.
    pub fn primary(&mut self, title: &'static str, value: SummaryValue<'_>) -> DecodeResult<()> {
        if self.primary_item().is_some() {
            return Err(DecodeError::DuplicateSummarySlot("primary"));
        }
        self.push(SummaryItemKind::Primary, title, value)
    }

    /// Append an ordinary detail line.
    pub fn general(&mut self, title: &'static str, value: SummaryValue<'_>) -> DecodeResult<()> {
        self.push(SummaryItemKind::General, title, value)
    }

    /// Append the fee-payer annotation. Setting a second one is a logic error.
    pub fn fee_payer(&mut self, value: SummaryValue<'_>) -> DecodeResult<()> {
        if self.fee_payer_item().is_some() {
            return Err(DecodeError::DuplicateSummarySlot("fee payer"));
        }
        self.push(SummaryItemKind::FeePayer, "Fee payer", value)
    }

    pub fn primary_item(&self) -> Option<&SummaryItem> {
        self.items
            .iter()
            .find(|item| item.kind == SummaryItemKind::Primary)
    }

    pub fn fee_payer_item(&self) -> Option<&SummaryItem> {
        self.items
            .iter()
            .find(|item| item.kind == SummaryItemKind::FeePayer)
    }

    pub fn items(&self) -> &[SummaryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Hand the ordered items to the display, failing if the count exceeds
    /// the display's declared step capacity so the caller can degrade to the
    /// fixed-field path.
    pub fn finalize(&self, max_steps: usize) -> DecodeResult<&[SummaryItem]> {
        if self.items.len() > max_steps {
            return Err(DecodeError::SummaryCapacityExceeded);
        }
        Ok(&self.items)
    }
}

/// Head/tail summarization of a long string: fixed prefix and suffix joined
/// by "..". Strings that already fit are returned whole.
pub fn summarize(text: &str) -> String {
    let (before, after) = (SUMMARY_PREFIX_LENGTH, SUMMARY_SUFFIX_LENGTH);
    if text.len() <= before + after + 2 {
        return text.to_string();
    }
    format!("{}..{}", &text[..before], &text[text.len() - after..])
}

/// Render a raw amount as a fixed-point decimal scaled by `decimals`,
/// trailing zeros trimmed: 1_000_000 lamports at 9 decimals is "0.001 SOL".
pub fn format_amount(value: u64, decimals: u8, symbol: &str) -> String {
    if decimals == 0 {
        return format!("{value} {symbol}");
    }
    let scale = 10u64.pow(u32::from(decimals));
    let integer = value / scale;
    let fraction = value % scale;
    if fraction == 0 {
        return format!("{integer} {symbol}");
    }
    let mut fraction = format!("{:0width$}", fraction, width = usize::from(decimals));
    while fraction.ends_with('0') {
        fraction.pop();
    }
    format!("{integer}.{fraction} {symbol}")
}

fn format_m_of_n(m: u8, n: u8) -> DecodeResult<String> {
    if usize::from(n) > TOKEN_MAX_SIGNERS || m > n {
        return Err(DecodeError::InvalidSignerThreshold { m, n });
    }
    Ok(format!("{m} of {n}"))
}
