//! Plain-text rendering of API responses.
//!
//! Both renderers are pure: they return the formatted text and leave the
//! actual output write to the caller, so output can be asserted directly
//! in tests.

use crate::models::{ClientInfo, Transaction};
use chrono::{DateTime, Local};
use std::fmt::Write;

const PLACEHOLDER: &str = "-";
const SEPARATOR_WIDTH: usize = 50;

/// Format an amount in minor units as decimal text, e.g. `123456` -> `"1234.56"`.
pub fn format_minor_units(minor: i64) -> String {
    let sign = if minor < 0 { "-" } else { "" };
    let abs = minor.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}

fn opt_minor_units(minor: Option<i64>) -> String {
    match minor {
        Some(v) => format_minor_units(v),
        None => PLACEHOLDER.to_string(),
    }
}

fn opt_str(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or(PLACEHOLDER)
}

fn opt_num(value: Option<i32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

/// Render client info as labeled text: header fields, then one block per
/// account and one per jar. Absent fields print as `-`; monetary fields are
/// shown in major units.
pub fn render_client_info(info: &ClientInfo) -> String {
    let mut out = String::new();

    writeln!(out, "Client ID: {}", opt_str(&info.client_id)).ok();
    writeln!(out, "Name: {}", opt_str(&info.name)).ok();
    writeln!(out, "WebHook URL: {}", opt_str(&info.web_hook_url)).ok();
    writeln!(out, "Permissions: {}", opt_str(&info.permissions)).ok();
    out.push('\n');

    if info.accounts.is_empty() {
        out.push_str("Accounts: None\n\n");
    } else {
        out.push_str("Accounts:\n");
        for acc in &info.accounts {
            writeln!(out, "  - ID: {}", opt_str(&acc.id)).ok();
            writeln!(out, "    Currency: {}", opt_num(acc.currency_code)).ok();
            writeln!(out, "    Balance: {}", opt_minor_units(acc.balance)).ok();
            writeln!(out, "    Credit Limit: {}", opt_minor_units(acc.credit_limit)).ok();
            writeln!(out, "    Type: {}", opt_str(&acc.account_type)).ok();
            writeln!(out, "    IBAN: {}", opt_str(&acc.iban)).ok();
            writeln!(out, "    Masked PAN: {}", acc.masked_pan.join(", ")).ok();
            writeln!(out, "    Cashback Type: {}", opt_str(&acc.cashback_type)).ok();
            out.push('\n');
        }
    }

    if info.jars.is_empty() {
        out.push_str("Jars: None\n");
    } else {
        out.push_str("Jars:\n");
        for jar in &info.jars {
            writeln!(out, "  - ID: {}", opt_str(&jar.id)).ok();
            writeln!(out, "    Title: {}", opt_str(&jar.title)).ok();
            writeln!(out, "    Description: {}", opt_str(&jar.description)).ok();
            writeln!(out, "    Currency: {}", opt_num(jar.currency_code)).ok();
            writeln!(out, "    Balance: {}", opt_minor_units(jar.balance)).ok();
            writeln!(out, "    Goal: {}", opt_minor_units(jar.goal)).ok();
            out.push('\n');
        }
    }

    out
}

/// Render a statement as one labeled block per transaction, separated by
/// horizontal rules, with a closing rule after the last block. Comment,
/// receipt id and counterparty lines appear only when present.
pub fn render_transactions(transactions: &[Transaction]) -> String {
    let mut out = String::new();
    let separator = "─".repeat(SEPARATOR_WIDTH);

    for tx in transactions {
        writeln!(out, "{separator}").ok();
        writeln!(out, "Date:         {}", format_local_time(tx.time)).ok();
        writeln!(out, "Description:  {}", opt_str(&tx.description)).ok();
        if let Some(comment) = &tx.comment {
            writeln!(out, "Comment:      {comment}").ok();
        }
        writeln!(out, "MCC:          {} (Original: {})", tx.mcc, tx.original_mcc).ok();
        writeln!(out, "Amount:       {} UAH", format_minor_units(tx.amount)).ok();
        writeln!(out, "Cashback:     {} UAH", format_minor_units(tx.cashback_amount)).ok();
        writeln!(out, "Balance:      {} UAH", format_minor_units(tx.balance)).ok();
        writeln!(out, "Hold:         {}", if tx.hold { "True" } else { "False" }).ok();
        if let Some(receipt_id) = &tx.receipt_id {
            writeln!(out, "Receipt ID:   {receipt_id}").ok();
        }
        if let Some(counter_name) = &tx.counter_name {
            writeln!(out, "Counterparty: {counter_name}").ok();
        }
    }
    writeln!(out, "{separator}").ok();

    out
}

fn format_local_time(unix_secs: i64) -> String {
    match DateTime::from_timestamp(unix_secs, 0) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Account, Jar};

    fn sample_transaction() -> Transaction {
        Transaction {
            time: 1_700_000_000,
            description: Some("Coffee".to_string()),
            comment: None,
            mcc: 5812,
            original_mcc: 5812,
            amount: -15000,
            cashback_amount: 150,
            balance: 985_000,
            hold: false,
            receipt_id: None,
            counter_name: None,
        }
    }

    #[test]
    fn formats_minor_units() {
        assert_eq!(format_minor_units(123456), "1234.56");
        assert_eq!(format_minor_units(-500), "-5.00");
        assert_eq!(format_minor_units(0), "0.00");
        assert_eq!(format_minor_units(-7), "-0.07");
    }

    #[test]
    fn renders_transaction_block() {
        let out = render_transactions(&[sample_transaction()]);
        assert!(out.contains("Description:  Coffee"));
        assert!(out.contains("MCC:          5812 (Original: 5812)"));
        assert!(out.contains("Amount:       -150.00 UAH"));
        assert!(out.contains("Cashback:     1.50 UAH"));
        assert!(out.contains("Balance:      9850.00 UAH"));
        assert!(out.contains("Hold:         False"));
        assert!(!out.contains("Comment:"));
        assert!(!out.contains("Receipt ID:"));
        assert!(!out.contains("Counterparty:"));
    }

    #[test]
    fn renders_optional_transaction_lines() {
        let tx = Transaction {
            comment: Some("tip included".to_string()),
            receipt_id: Some("XXXX-1234".to_string()),
            counter_name: Some("Coffeelat".to_string()),
            hold: true,
            ..sample_transaction()
        };
        let out = render_transactions(&[tx]);
        assert!(out.contains("Comment:      tip included"));
        assert!(out.contains("Receipt ID:   XXXX-1234"));
        assert!(out.contains("Counterparty: Coffeelat"));
        assert!(out.contains("Hold:         True"));
    }

    #[test]
    fn empty_statement_renders_single_separator() {
        let out = render_transactions(&[]);
        assert_eq!(out, format!("{}\n", "─".repeat(50)));
    }

    #[test]
    fn separators_bracket_each_transaction() {
        let out = render_transactions(&[sample_transaction(), sample_transaction()]);
        let rules = out
            .lines()
            .filter(|l| l.chars().all(|c| c == '─') && !l.is_empty())
            .count();
        assert_eq!(rules, 3);
    }

    #[test]
    fn renders_empty_client_info_with_none_lines() {
        let info = ClientInfo {
            client_id: None,
            name: None,
            web_hook_url: None,
            permissions: None,
            accounts: vec![],
            jars: vec![],
        };
        let out = render_client_info(&info);
        assert!(out.contains("Client ID: -\n"));
        assert!(out.contains("Accounts: None\n"));
        assert!(out.contains("Jars: None\n"));
    }

    #[test]
    fn renders_account_without_masked_pan() {
        let info = ClientInfo {
            client_id: Some("3MSaMMtczs".to_string()),
            name: Some("Mono User".to_string()),
            web_hook_url: None,
            permissions: Some("psfj".to_string()),
            accounts: vec![Account {
                id: Some("kKGVoZuHWzqVoZuH".to_string()),
                currency_code: Some(980),
                balance: Some(10_000_000),
                credit_limit: Some(1_000_000),
                account_type: Some("black".to_string()),
                iban: None,
                masked_pan: vec![],
                cashback_type: Some("UAH".to_string()),
            }],
            jars: vec![],
        };
        let out = render_client_info(&info);
        assert!(out.contains("    Masked PAN: \n"));
        assert!(out.contains("    Balance: 100000.00\n"));
        assert!(out.contains("    Credit Limit: 10000.00\n"));
        assert!(out.contains("    IBAN: -\n"));
        assert!(out.contains("Jars: None"));
    }

    #[test]
    fn renders_jar_block() {
        let info = ClientInfo {
            client_id: None,
            name: None,
            web_hook_url: None,
            permissions: None,
            accounts: vec![],
            jars: vec![Jar {
                id: Some("jar1".to_string()),
                title: Some("Vacation".to_string()),
                description: None,
                currency_code: Some(980),
                balance: Some(123_456),
                goal: None,
            }],
        };
        let out = render_client_info(&info);
        assert!(out.contains("  - ID: jar1\n"));
        assert!(out.contains("    Balance: 1234.56\n"));
        assert!(out.contains("    Goal: -\n"));
        assert!(out.contains("Accounts: None"));
    }
}
