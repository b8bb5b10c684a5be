use chrono::{DateTime, NaiveDate, Utc};

use crate::types::FixedSide;

use super::common::{Params, Search, SearchCommon};

/// Parameters for booking a new conversion.
///
/// Amounts are decimal strings, exactly as sent on the wire. The crate never
/// converts monetary values through binary floats.
pub struct ConversionCreateParams {
    pub buy_currency: String,
    pub sell_currency: String,
    pub fixed_side: FixedSide,
    pub amount: String,
    pub term_agreement: bool,
    pub reason: Option<String>,
    pub conversion_date: Option<NaiveDate>,
    pub client_buy_amount: Option<String>,
    pub client_sell_amount: Option<String>,
    pub unique_request_id: Option<String>,
}

impl ConversionCreateParams {
    /// Creates the required parameter set for `POST /v2/conversions/create`.
    ///
    /// `amount` is a decimal string denominated in the fixed-side currency.
    pub fn new(
        buy_currency: &str,
        sell_currency: &str,
        fixed_side: FixedSide,
        amount: &str,
        term_agreement: bool,
    ) -> Self {
        Self {
            buy_currency: buy_currency.to_string(),
            sell_currency: sell_currency.to_string(),
            fixed_side,
            amount: amount.to_string(),
            term_agreement,
            reason: None,
            conversion_date: None,
            client_buy_amount: None,
            client_sell_amount: None,
            unique_request_id: None,
        }
    }

    /// Free-text reason recorded against the conversion.
    pub fn with_reason(mut self, reason: &str) -> Self {
        self.reason = Some(reason.to_string());
        self
    }

    /// Requested conversion date. Omitting it books at the earliest
    /// available date for the currency pair.
    pub fn with_conversion_date(mut self, conversion_date: NaiveDate) -> Self {
        self.conversion_date = Some(conversion_date);
        self
    }

    /// Expected buy amount, checked by the API against the quoted amount.
    pub fn with_client_buy_amount(mut self, client_buy_amount: &str) -> Self {
        self.client_buy_amount = Some(client_buy_amount.to_string());
        self
    }

    /// Expected sell amount, checked by the API against the quoted amount.
    pub fn with_client_sell_amount(mut self, client_sell_amount: &str) -> Self {
        self.client_sell_amount = Some(client_sell_amount.to_string());
        self
    }

    /// Idempotency key; the API rejects a second create with the same id.
    pub fn with_unique_request_id(mut self, unique_request_id: &str) -> Self {
        self.unique_request_id = Some(unique_request_id.to_string());
        self
    }
}

impl Params for ConversionCreateParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("buy_currency", self.buy_currency.clone()),
            ("sell_currency", self.sell_currency.clone()),
            ("fixed_side", self.fixed_side.to_string()),
            ("amount", self.amount.clone()),
            ("term_agreement", self.term_agreement.to_string()),
        ];
        if let Some(reason) = &self.reason {
            pairs.push(("reason", reason.clone()));
        }
        if let Some(conversion_date) = self.conversion_date {
            pairs.push(("conversion_date", conversion_date.format("%Y-%m-%d").to_string()));
        }
        if let Some(client_buy_amount) = &self.client_buy_amount {
            pairs.push(("client_buy_amount", client_buy_amount.clone()));
        }
        if let Some(client_sell_amount) = &self.client_sell_amount {
            pairs.push(("client_sell_amount", client_sell_amount.clone()));
        }
        if let Some(unique_request_id) = &self.unique_request_id {
            pairs.push(("unique_request_id", unique_request_id.clone()));
        }
        pairs
    }
}

/// Filters for `GET /v2/conversions/find`.
#[derive(Default)]
pub struct ConversionSearchParams {
    pub common: SearchCommon,
    pub short_reference: Option<String>,
    pub status: Option<String>,
    pub buy_currency: Option<String>,
    pub sell_currency: Option<String>,
    pub currency_pair: Option<String>,
    pub conversion_ids: Vec<String>,
    pub created_at_from: Option<DateTime<Utc>>,
    pub created_at_to: Option<DateTime<Utc>>,
    pub updated_at_from: Option<DateTime<Utc>>,
    pub updated_at_to: Option<DateTime<Utc>>,
    pub conversion_date_from: Option<NaiveDate>,
    pub conversion_date_to: Option<NaiveDate>,
    pub settlement_date_from: Option<NaiveDate>,
    pub settlement_date_to: Option<NaiveDate>,
    pub buy_amount_from: Option<String>,
    pub buy_amount_to: Option<String>,
    pub sell_amount_from: Option<String>,
    pub sell_amount_to: Option<String>,
    pub unique_request_id: Option<String>,
}

impl Params for ConversionSearchParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.common.add_to_pairs(&mut pairs);
        if let Some(short_reference) = &self.short_reference {
            pairs.push(("short_reference", short_reference.clone()));
        }
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(buy_currency) = &self.buy_currency {
            pairs.push(("buy_currency", buy_currency.clone()));
        }
        if let Some(sell_currency) = &self.sell_currency {
            pairs.push(("sell_currency", sell_currency.clone()));
        }
        if let Some(currency_pair) = &self.currency_pair {
            pairs.push(("currency_pair", currency_pair.clone()));
        }
        for conversion_id in self.conversion_ids.iter() {
            pairs.push(("conversion_ids[]", conversion_id.clone()));
        }
        if let Some(created_at_from) = &self.created_at_from {
            pairs.push(("created_at_from", created_at_from.to_rfc3339()));
        }
        if let Some(created_at_to) = &self.created_at_to {
            pairs.push(("created_at_to", created_at_to.to_rfc3339()));
        }
        if let Some(updated_at_from) = &self.updated_at_from {
            pairs.push(("updated_at_from", updated_at_from.to_rfc3339()));
        }
        if let Some(updated_at_to) = &self.updated_at_to {
            pairs.push(("updated_at_to", updated_at_to.to_rfc3339()));
        }
        if let Some(conversion_date_from) = self.conversion_date_from {
            pairs.push(("conversion_date_from", conversion_date_from.format("%Y-%m-%d").to_string()));
        }
        if let Some(conversion_date_to) = self.conversion_date_to {
            pairs.push(("conversion_date_to", conversion_date_to.format("%Y-%m-%d").to_string()));
        }
        if let Some(settlement_date_from) = self.settlement_date_from {
            pairs.push(("settlement_date_from", settlement_date_from.format("%Y-%m-%d").to_string()));
        }
        if let Some(settlement_date_to) = self.settlement_date_to {
            pairs.push(("settlement_date_to", settlement_date_to.format("%Y-%m-%d").to_string()));
        }
        if let Some(buy_amount_from) = &self.buy_amount_from {
            pairs.push(("buy_amount_from", buy_amount_from.clone()));
        }
        if let Some(buy_amount_to) = &self.buy_amount_to {
            pairs.push(("buy_amount_to", buy_amount_to.clone()));
        }
        if let Some(sell_amount_from) = &self.sell_amount_from {
            pairs.push(("sell_amount_from", sell_amount_from.clone()));
        }
        if let Some(sell_amount_to) = &self.sell_amount_to {
            pairs.push(("sell_amount_to", sell_amount_to.clone()));
        }
        if let Some(unique_request_id) = &self.unique_request_id {
            pairs.push(("unique_request_id", unique_request_id.clone()));
        }
        pairs
    }
}

impl Search for ConversionSearchParams {
    fn get_common(&mut self) -> &mut SearchCommon {
        &mut self.common
    }
}

impl ConversionSearchParams {
    pub fn with_short_reference(mut self, short_reference: &str) -> Self {
        self.short_reference = Some(short_reference.to_string());
        self
    }
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }
    pub fn with_buy_currency(mut self, buy_currency: &str) -> Self {
        self.buy_currency = Some(buy_currency.to_string());
        self
    }
    pub fn with_sell_currency(mut self, sell_currency: &str) -> Self {
        self.sell_currency = Some(sell_currency.to_string());
        self
    }
    pub fn with_currency_pair(mut self, currency_pair: &str) -> Self {
        self.currency_pair = Some(currency_pair.to_string());
        self
    }
    pub fn with_conversion_id(mut self, conversion_id: &str) -> Self {
        self.conversion_ids.push(conversion_id.to_string());
        self
    }
    pub fn with_conversion_ids(mut self, conversion_ids: &[String]) -> Self {
        self.conversion_ids.extend_from_slice(conversion_ids);
        self
    }
    pub fn with_created_at_from(mut self, created_at_from: DateTime<Utc>) -> Self {
        self.created_at_from = Some(created_at_from);
        self
    }
    pub fn with_created_at_to(mut self, created_at_to: DateTime<Utc>) -> Self {
        self.created_at_to = Some(created_at_to);
        self
    }
    pub fn with_updated_at_from(mut self, updated_at_from: DateTime<Utc>) -> Self {
        self.updated_at_from = Some(updated_at_from);
        self
    }
    pub fn with_updated_at_to(mut self, updated_at_to: DateTime<Utc>) -> Self {
        self.updated_at_to = Some(updated_at_to);
        self
    }
    pub fn with_conversion_date_from(mut self, conversion_date_from: NaiveDate) -> Self {
        self.conversion_date_from = Some(conversion_date_from);
        self
    }
    pub fn with_conversion_date_to(mut self, conversion_date_to: NaiveDate) -> Self {
        self.conversion_date_to = Some(conversion_date_to);
        self
    }
    pub fn with_settlement_date_from(mut self, settlement_date_from: NaiveDate) -> Self {
        self.settlement_date_from = Some(settlement_date_from);
        self
    }
    pub fn with_settlement_date_to(mut self, settlement_date_to: NaiveDate) -> Self {
        self.settlement_date_to = Some(settlement_date_to);
        self
    }
    pub fn with_buy_amount_from(mut self, buy_amount_from: &str) -> Self {
        self.buy_amount_from = Some(buy_amount_from.to_string());
        self
    }
    pub fn with_buy_amount_to(mut self, buy_amount_to: &str) -> Self {
        self.buy_amount_to = Some(buy_amount_to.to_string());
        self
    }
    pub fn with_sell_amount_from(mut self, sell_amount_from: &str) -> Self {
        self.sell_amount_from = Some(sell_amount_from.to_string());
        self
    }
    pub fn with_sell_amount_to(mut self, sell_amount_to: &str) -> Self {
        self.sell_amount_to = Some(sell_amount_to.to_string());
        self
    }
    pub fn with_unique_request_id(mut self, unique_request_id: &str) -> Self {
        self.unique_request_id = Some(unique_request_id.to_string());
        self
    }
}

/// Parameters for cancelling a conversion.
#[derive(Default)]
pub struct ConversionCancelParams {
    pub notes: Option<String>,
}

impl ConversionCancelParams {
    /// Free-text note recorded against the cancellation. The API echoes an
    /// empty string back when no note is given.
    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }
}

impl Params for ConversionCancelParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        match &self.notes {
            Some(notes) => vec![("notes", notes.clone())],
            None => Vec::new(),
        }
    }
}

/// Parameters for changing (or quoting a change of) a conversion's
/// settlement date.
pub struct DateChangeParams {
    pub new_settlement_date: DateTime<Utc>,
}

impl DateChangeParams {
    pub fn new(new_settlement_date: DateTime<Utc>) -> Self {
        Self {
            new_settlement_date,
        }
    }
}

impl Params for DateChangeParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("new_settlement_date", self.new_settlement_date.to_rfc3339())]
    }
}

/// Parameters for splitting (or previewing a split of) a conversion.
pub struct SplitParams {
    /// Decimal-string amount, in the conversion's fixed-side currency, to
    /// carve out into the child conversion.
    pub amount: String,
}

impl SplitParams {
    pub fn new(amount: &str) -> Self {
        Self {
            amount: amount.to_string(),
        }
    }
}

impl Params for SplitParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        vec![("amount", self.amount.clone())]
    }
}

/// Filters for `GET /v2/conversions/profit_and_loss`.
#[derive(Default)]
pub struct ProfitAndLossSearchParams {
    pub common: SearchCommon,
    pub account_id: Option<String>,
    pub contact_id: Option<String>,
    pub conversion_id: Option<String>,
    pub event_type: Option<String>,
    pub currency: Option<String>,
    pub event_date_time_from: Option<DateTime<Utc>>,
    pub event_date_time_to: Option<DateTime<Utc>>,
    pub amount_from: Option<String>,
    pub amount_to: Option<String>,
    pub scope: Option<String>,
}

impl Params for ProfitAndLossSearchParams {
    fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        self.common.add_to_pairs(&mut pairs);
        if let Some(account_id) = &self.account_id {
            pairs.push(("account_id", account_id.clone()));
        }
        if let Some(contact_id) = &self.contact_id {
            pairs.push(("contact_id", contact_id.clone()));
        }
        if let Some(conversion_id) = &self.conversion_id {
            pairs.push(("conversion_id", conversion_id.clone()));
        }
        if let Some(event_type) = &self.event_type {
            pairs.push(("event_type", event_type.clone()));
        }
        if let Some(currency) = &self.currency {
            pairs.push(("currency", currency.clone()));
        }
        if let Some(event_date_time_from) = &self.event_date_time_from {
            pairs.push(("event_date_time_from", event_date_time_from.to_rfc3339()));
        }
        if let Some(event_date_time_to) = &self.event_date_time_to {
            pairs.push(("event_date_time_to", event_date_time_to.to_rfc3339()));
        }
        if let Some(amount_from) = &self.amount_from {
            pairs.push(("amount_from", amount_from.clone()));
        }
        if let Some(amount_to) = &self.amount_to {
            pairs.push(("amount_to", amount_to.clone()));
        }
        if let Some(scope) = &self.scope {
            pairs.push(("scope", scope.clone()));
        }
        pairs
    }
}

impl Search for ProfitAndLossSearchParams {
    fn get_common(&mut self) -> &mut SearchCommon {
        &mut self.common
    }
}

impl ProfitAndLossSearchParams {
    pub fn with_account_id(mut self, account_id: &str) -> Self {
        self.account_id = Some(account_id.to_string());
        self
    }
    pub fn with_contact_id(mut self, contact_id: &str) -> Self {
        self.contact_id = Some(contact_id.to_string());
        self
    }
    pub fn with_conversion_id(mut self, conversion_id: &str) -> Self {
        self.conversion_id = Some(conversion_id.to_string());
        self
    }
    pub fn with_event_type(mut self, event_type: &str) -> Self {
        self.event_type = Some(event_type.to_string());
        self
    }
    pub fn with_currency(mut self, currency: &str) -> Self {
        self.currency = Some(currency.to_string());
        self
    }
    pub fn with_event_date_time_from(mut self, event_date_time_from: DateTime<Utc>) -> Self {
        self.event_date_time_from = Some(event_date_time_from);
        self
    }
    pub fn with_event_date_time_to(mut self, event_date_time_to: DateTime<Utc>) -> Self {
        self.event_date_time_to = Some(event_date_time_to);
        self
    }
    pub fn with_amount_from(mut self, amount_from: &str) -> Self {
        self.amount_from = Some(amount_from.to_string());
        self
    }
    pub fn with_amount_to(mut self, amount_to: &str) -> Self {
        self.amount_to = Some(amount_to.to_string());
        self
    }
    /// Widens the report beyond the authenticated account; accepts the
    /// values the API documents (`own`, `clients`, `all`).
    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = Some(scope.to_string());
        self
    }
}
