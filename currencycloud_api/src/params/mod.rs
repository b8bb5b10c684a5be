mod common;
pub use self::common::{Params, Search, SearchCommon, SortDirection};
mod account;
pub use self::account::{AccountCreateParams, AccountSearchParams, AccountUpdateParams};

mod conversion;
pub use self::conversion::{
    ConversionCancelParams, ConversionCreateParams, ConversionSearchParams, DateChangeParams,
    ProfitAndLossSearchParams, SplitParams,
};
