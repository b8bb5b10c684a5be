//! Conversion types returned by the API.
//!
//! Monetary amounts and rates are decimal strings on the wire and stay
//! strings here; parsing them into binary floats would corrupt them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Pagination;

/// Unique identifier for a conversion (a UUID).
pub type ConversionID = String;

/// Which side of the trade the amount is fixed on.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum FixedSide {
    #[serde(rename = "buy")]
    Buy,
    #[serde(rename = "sell")]
    Sell,
}

impl std::fmt::Display for FixedSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FixedSide::Buy => "buy",
                FixedSide::Sell => "sell",
            }
        )
    }
}

/// Lifecycle state of a conversion.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ConversionStatus {
    AwaitingFunds,
    FundsSent,
    FundsArrived,
    TradeSettled,
    Closed,
}

impl std::fmt::Display for ConversionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ConversionStatus::AwaitingFunds => "awaiting_funds",
                ConversionStatus::FundsSent => "funds_sent",
                ConversionStatus::FundsArrived => "funds_arrived",
                ConversionStatus::TradeSettled => "trade_settled",
                ConversionStatus::Closed => "closed",
            }
        )
    }
}

/// A booked conversion as returned by create, retrieve, and find.
#[derive(Serialize, Deserialize, Debug)]
pub struct Conversion {
    pub id: ConversionID,

    pub account_id: String,

    pub creator_contact_id: String,

    /// Human-readable reference (e.g. `20180716-XMXMMS`).
    pub short_reference: String,

    /// When funds must reach the vendor for the trade to settle.
    pub settlement_date: DateTime<Utc>,

    /// Trade date; midnight UTC on the wire.
    pub conversion_date: DateTime<Utc>,

    pub status: ConversionStatus,

    /// Concatenated pair, e.g. `USDGBP`.
    pub currency_pair: String,

    pub buy_currency: String,

    pub sell_currency: String,

    pub fixed_side: FixedSide,

    pub client_buy_amount: String,

    pub client_sell_amount: String,

    /// Rate applied to the client, including spread.
    pub client_rate: String,

    /// Rate the vendor dealt at.
    pub core_rate: String,

    pub mid_market_rate: String,

    pub partner_rate: Option<String>,

    pub deposit_required: bool,

    pub deposit_amount: String,

    pub deposit_currency: Option<String>,

    pub deposit_status: Option<String>,

    pub deposit_required_at: Option<DateTime<Utc>>,

    /// Payments funded by this conversion.
    pub payment_ids: Vec<String>,

    pub unallocated_funds: String,

    pub unique_request_id: Option<String>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

/// One page of conversions from `GET /v2/conversions/find`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversionList {
    pub conversions: Vec<Conversion>,
    pub pagination: Pagination,
}

/// Result of `POST /v2/conversions/{id}/cancel`.
///
/// `amount` is the realized gain or loss of unwinding the trade, signed
/// from the client's perspective.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversionCancellation {
    pub account_id: String,

    pub contact_id: String,

    /// Account the cancellation was performed on behalf of, when an agent
    /// acted for a sub-account.
    pub event_account_id: Option<String>,

    pub event_contact_id: Option<String>,

    pub conversion_id: ConversionID,

    /// e.g. `self_service_cancellation`.
    pub event_type: String,

    pub amount: String,

    pub currency: String,

    /// Caller-supplied note; empty string when none was given.
    pub notes: String,

    pub event_date_time: DateTime<Utc>,
}

/// Result of `GET /v2/conversions/{id}/cancellation_quote`: the gain or
/// loss that cancelling now would realize.
#[derive(Serialize, Deserialize, Debug)]
pub struct CancellationQuote {
    pub amount: String,

    pub currency: String,

    pub event_date_time: DateTime<Utc>,
}

/// Result of a date change or a date-change quote.
///
/// `amount` is the fee charged (or quoted) for moving the settlement date.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversionDateChange {
    pub conversion_id: ConversionID,

    pub amount: String,

    pub currency: String,

    pub new_conversion_date: DateTime<Utc>,

    pub new_settlement_date: DateTime<Utc>,

    pub old_conversion_date: DateTime<Utc>,

    pub old_settlement_date: DateTime<Utc>,

    pub event_date_time: DateTime<Utc>,
}

/// One side of a split: the summary the split endpoints return for each
/// involved conversion.
#[derive(Serialize, Deserialize, Debug)]
pub struct SplitDetail {
    pub id: ConversionID,

    pub short_reference: String,

    pub sell_amount: String,

    pub sell_currency: String,

    pub buy_amount: String,

    pub buy_currency: String,

    pub settlement_date: DateTime<Utc>,

    pub conversion_date: DateTime<Utc>,

    pub status: ConversionStatus,
}

/// Result of `POST /v2/conversions/{id}/split` and
/// `GET /v2/conversions/{id}/split_preview`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversionSplit {
    pub parent_conversion: SplitDetail,
    pub child_conversion: SplitDetail,
}

/// Result of `GET /v2/conversions/{id}/split_history`.
///
/// `origin_conversion` is the root of the split tree; `parent_conversion`
/// is the direct parent of the conversion the history was requested for.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversionSplitHistory {
    pub parent_conversion: SplitDetail,
    pub origin_conversion: SplitDetail,
    pub child_conversions: Vec<SplitDetail>,
}

/// One gain/loss event from `GET /v2/conversions/profit_and_loss`.
#[derive(Serialize, Deserialize, Debug)]
pub struct ConversionProfitAndLoss {
    pub account_id: String,

    pub contact_id: String,

    pub event_account_id: Option<String>,

    pub event_contact_id: Option<String>,

    pub conversion_id: ConversionID,

    /// e.g. `self_service_cancellation`.
    pub event_type: String,

    /// Signed decimal string; negative is a loss to the client.
    pub amount: String,

    pub currency: String,

    pub notes: Option<String>,

    pub event_date_time: DateTime<Utc>,
}

/// One page of gain/loss events.
#[derive(Serialize, Deserialize, Debug)]
pub struct ProfitAndLossList {
    pub conversion_profit_and_losses: Vec<ConversionProfitAndLoss>,
    pub pagination: Pagination,
}
