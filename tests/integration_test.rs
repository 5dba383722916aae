use sha2::{Digest, Sha256};
use solana_message_summarizer::constants::{MAX_DISPLAY_STEPS, PUBKEY_SIZE};
use solana_message_summarizer::summary::{SummaryItemKind, TransactionSummary};
use solana_message_summarizer::{message_hash, summarize_message};

/// Build a single-instruction message: header with the given account table,
/// a fixed blockhash, then one instruction record.
fn build_message(
    keys: &[[u8; PUBKEY_SIZE]],
    program_id_index: u8,
    account_indices: &[u8],
    data: &[u8],
) -> Vec<u8> {
    let mut message = vec![1, 0, 0, keys.len() as u8];
    for key in keys {
        message.extend_from_slice(key);
    }
    message.extend_from_slice(&[7u8; 32]); // blockhash
    message.push(1); // instruction count
    message.push(program_id_index);
    message.push(account_indices.len() as u8);
    message.extend_from_slice(account_indices);
    message.push(data.len() as u8);
    message.extend_from_slice(data);
    message
}

fn transfer_data(lamports: u64) -> Vec<u8> {
    let mut data = 2u32.to_le_bytes().to_vec();
    data.extend_from_slice(&lamports.to_le_bytes());
    data
}

#[test]
fn test_native_transfer_end_to_end() {
    let key_a = [1u8; PUBKEY_SIZE];
    let key_b = [2u8; PUBKEY_SIZE];
    let message = build_message(&[key_a, key_b], 0, &[0, 1], &transfer_data(1_000_000));

    let mut summary = TransactionSummary::new();
    summarize_message(&message, &mut summary).unwrap();

    let primary = summary.primary_item().unwrap();
    assert_eq!(primary.title, "Transfer");
    assert_eq!(primary.text, "0.001 SOL");

    // A is both fee payer (table entry 0) and transfer source.
    let fee_payer = summary.fee_payer_item().unwrap();
    assert_eq!(fee_payer.text, "sender");

    let titles: Vec<_> = summary.items().iter().map(|item| item.title).collect();
    assert_eq!(titles, vec!["Transfer", "Sender", "Recipient", "Fee payer"]);

    summary.finalize(MAX_DISPLAY_STEPS).unwrap();
}

#[test]
fn test_unrecognized_instruction_degrades_to_message_hash() {
    let key_a = [1u8; PUBKEY_SIZE];
    let key_b = [2u8; PUBKEY_SIZE];
    // A discriminant no program decoder accepts.
    let message = build_message(&[key_a, key_b], 0, &[0, 1], &99u32.to_le_bytes());

    let mut summary = TransactionSummary::new();
    summarize_message(&message, &mut summary).unwrap();

    let primaries: Vec<_> = summary
        .items()
        .iter()
        .filter(|item| item.kind == SummaryItemKind::Primary)
        .collect();
    assert_eq!(primaries.len(), 1);
    assert_eq!(primaries[0].title, "Unrecognized");

    let generals: Vec<_> = summary
        .items()
        .iter()
        .filter(|item| item.kind == SummaryItemKind::General)
        .collect();
    assert_eq!(generals.len(), 1);
    assert_eq!(generals[0].title, "Message Hash");

    let expected: [u8; 32] = {
        let mut hasher = Sha256::new();
        hasher.update(&message);
        hasher.finalize().into()
    };
    assert_eq!(message_hash(&message), expected);
    assert_eq!(generals[0].text, bs58::encode(&expected).into_string());
}

#[test]
fn test_multi_instruction_message_degrades_to_message_hash() {
    let key_a = [1u8; PUBKEY_SIZE];
    let mut message = build_message(&[key_a], 0, &[0], &transfer_data(1));
    // Bump the declared instruction count past what the summarizer renders.
    let count_offset = 3 + 1 + PUBKEY_SIZE + 32;
    let record: Vec<u8> = message[count_offset + 1..].to_vec();
    message[count_offset] = 2;
    message.extend_from_slice(&record);

    let mut summary = TransactionSummary::new();
    summarize_message(&message, &mut summary).unwrap();
    assert_eq!(summary.primary_item().unwrap().title, "Unrecognized");
}

#[test]
fn test_truncated_header_is_an_error() {
    let key_a = [1u8; PUBKEY_SIZE];
    let message = build_message(&[key_a], 0, &[0], &transfer_data(1));
    let mut summary = TransactionSummary::new();
    // Cut inside the blockhash.
    assert!(summarize_message(&message[..20], &mut summary).is_err());
    assert!(summary.is_empty());
}

#[test]
fn test_truncated_instruction_record_is_an_error() {
    let key_a = [1u8; PUBKEY_SIZE];
    let key_b = [2u8; PUBKEY_SIZE];
    let message = build_message(&[key_a, key_b], 0, &[0, 1], &transfer_data(1));
    let mut summary = TransactionSummary::new();
    // Cut inside the instruction payload.
    assert!(summarize_message(&message[..message.len() - 4], &mut summary).is_err());
}

#[test]
fn test_stake_delegate_end_to_end() {
    let keys: Vec<[u8; PUBKEY_SIZE]> = (1..=6).map(|i| [i; PUBKEY_SIZE]).collect();
    let message = build_message(&keys, 0, &[1, 2, 3, 4, 5, 0], &2u32.to_le_bytes());

    let mut summary = TransactionSummary::new();
    summarize_message(&message, &mut summary).unwrap();

    assert_eq!(summary.primary_item().unwrap().title, "Delegate from");
    // Entry 0 is both fee payer and the authorized account.
    assert_eq!(summary.fee_payer_item().unwrap().text, "authorizer");
    let titles: Vec<_> = summary.items().iter().map(|item| item.title).collect();
    assert!(titles.contains(&"Vote account"));
    assert!(titles.contains(&"Authorized by"));
}

#[test]
fn test_token_transfer_end_to_end() {
    let keys: Vec<[u8; PUBKEY_SIZE]> = (1..=3).map(|i| [i; PUBKEY_SIZE]).collect();
    let mut data = vec![3u8];
    data.extend_from_slice(&250u64.to_le_bytes());
    let message = build_message(&keys, 0, &[0, 1, 2], &data);

    let mut summary = TransactionSummary::new();
    summarize_message(&message, &mut summary).unwrap();

    let primary = summary.primary_item().unwrap();
    assert_eq!(primary.title, "Transfer tokens");
    assert_eq!(primary.text, "250");
    assert!(summary.items().iter().any(|item| item.title == "Owner"));
    // No decoder labeled the fee payer, so its key is shown.
    let fee_payer = summary.fee_payer_item().unwrap();
    assert!(fee_payer.text.contains(".."));
}

#[test]
fn test_summary_resets_between_messages() {
    let key_a = [1u8; PUBKEY_SIZE];
    let key_b = [2u8; PUBKEY_SIZE];
    let transfer = build_message(&[key_a, key_b], 0, &[0, 1], &transfer_data(5));
    let garbage = build_message(&[key_a, key_b], 0, &[0, 1], &99u32.to_le_bytes());

    let mut summary = TransactionSummary::new();
    summarize_message(&transfer, &mut summary).unwrap();
    assert_eq!(summary.primary_item().unwrap().title, "Transfer");

    summarize_message(&garbage, &mut summary).unwrap();
    assert_eq!(summary.primary_item().unwrap().title, "Unrecognized");
    assert!(!summary.items().iter().any(|item| item.title == "Sender"));
}
