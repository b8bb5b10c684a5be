mod client;
mod config;
mod errors;
mod params;
pub mod types;
pub use self::client::Client;
pub use self::config::{Credentials, Environment};
pub use self::errors::{ApiError, ApiErrorMessage, Error};
pub use self::params::{
    AccountCreateParams, AccountSearchParams, AccountUpdateParams, ConversionCancelParams,
    ConversionCreateParams, ConversionSearchParams, DateChangeParams, Params,
    ProfitAndLossSearchParams, Search, SearchCommon, SortDirection, SplitParams,
};
