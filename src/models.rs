use crate::error::MonoError;
use log::debug;
use serde::Deserialize;

/// Client profile as returned by `/personal/client-info`.
///
/// Every scalar field may be absent in the response; presentation layers
/// substitute a placeholder rather than failing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub web_hook_url: Option<String>,
    pub permissions: Option<String>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub jars: Vec<Jar>,
}

/// A bank account. Monetary fields are integers in minor units (kopiykas).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: Option<String>,
    pub currency_code: Option<i32>,
    pub balance: Option<i64>,
    pub credit_limit: Option<i64>,
    #[serde(rename = "type")]
    pub account_type: Option<String>,
    pub iban: Option<String>,
    #[serde(default)]
    pub masked_pan: Vec<String>,
    pub cashback_type: Option<String>,
}

/// A savings jar attached to the client, with an optional goal amount.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jar {
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub currency_code: Option<i32>,
    pub balance: Option<i64>,
    pub goal: Option<i64>,
}

/// A single statement item. `amount`, `cashback_amount` and `balance` are
/// signed minor units; `balance` is the account balance after the operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub time: i64,
    pub description: Option<String>,
    pub comment: Option<String>,
    pub mcc: i32,
    pub original_mcc: i32,
    pub amount: i64,
    pub cashback_amount: i64,
    pub balance: i64,
    pub hold: bool,
    pub receipt_id: Option<String>,
    pub counter_name: Option<String>,
}

pub fn parse_client_info(data: &str) -> Result<ClientInfo, MonoError> {
    let info: ClientInfo = serde_json::from_str(data).map_err(|_| MonoError::InvalidResponse)?;
    debug!("Parsed client info");
    Ok(info)
}

pub fn parse_transactions(data: &str) -> Result<Vec<Transaction>, MonoError> {
    let txns: Vec<Transaction> =
        serde_json::from_str(data).map_err(|_| MonoError::InvalidResponse)?;
    debug!("Parsed {} transactions", txns.len());
    Ok(txns)
}
