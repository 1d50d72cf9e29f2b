/// Transaction kinds
///
/// Each constant is the canonical wire and storage form of one kind.

/// Money coming in. Excluded from every spending aggregate.
pub const TRANSACTION_KIND_INCOME: &str = "income";

/// Money going out. The input of all spending aggregates.
pub const TRANSACTION_KIND_EXPENSE: &str = "expense";

/// Date format accepted for transaction dates.
pub const TRANSACTION_DATE_FORMAT: &str = "%Y-%m-%d";
