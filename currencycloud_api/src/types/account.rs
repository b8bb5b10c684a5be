//! Account types returned by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pagination;

/// Unique identifier for an account (a UUID).
pub type AccountID = String;

/// An account record as returned by the `/v2/accounts` endpoints.
#[derive(Serialize, Deserialize, Debug)]
pub struct Account {
    pub id: AccountID,

    pub account_name: String,

    /// White-label brand the account was created under.
    pub brand: String,

    /// Caller-supplied reference, if one was set.
    pub your_reference: Option<String>,

    /// Onboarding status (`enabled`, `disabled`).
    pub status: String,

    pub street: Option<String>,

    pub city: Option<String>,

    pub state_or_province: Option<String>,

    /// Two-letter ISO 3166-1 country code.
    pub country: Option<String>,

    pub postal_code: Option<String>,

    /// Pricing tier applied to this account's conversions.
    pub spread_table: String,

    /// `individual` or `company`.
    pub legal_entity_type: String,

    pub identification_type: Option<String>,

    pub identification_value: Option<String>,

    /// Human-readable reference printed on statements.
    pub short_reference: String,

    pub api_trading: bool,

    pub online_trading: bool,

    pub phone_trading: bool,

    pub process_third_party_funds: bool,

    pub settlement_type: String,

    pub agent_or_reliance: bool,

    pub terms_and_conditions_accepted: Option<bool>,

    pub bank_account_verified: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// One page of accounts from `GET /v2/accounts/find`.
#[derive(Serialize, Deserialize, Debug)]
pub struct AccountList {
    pub accounts: Vec<Account>,
    pub pagination: Pagination,
}
