mod pagination;
pub use self::pagination::Pagination;

mod account;
pub use self::account::{Account, AccountID, AccountList};

mod conversion;
pub use self::conversion::{
    CancellationQuote, Conversion, ConversionCancellation, ConversionDateChange, ConversionID,
    ConversionList, ConversionProfitAndLoss, ConversionSplit, ConversionSplitHistory,
    ConversionStatus, FixedSide, ProfitAndLossList, SplitDetail,
};
