/// Spending categories
///
/// Each constant is the canonical wire and storage form of one category.
/// The set is fixed; anything outside it is rejected at validation time.

/// Groceries, restaurants, coffee.
pub const CATEGORY_FOOD: &str = "Food";

/// Fuel, transit fares, ride shares, vehicle costs.
pub const CATEGORY_TRANSPORTATION: &str = "Transportation";

/// Streaming, going out, hobbies.
pub const CATEGORY_ENTERTAINMENT: &str = "Entertainment";

/// Rent, utilities, subscriptions with a due date.
pub const CATEGORY_BILLS: &str = "Bills";

/// Clothing, gadgets, household purchases.
pub const CATEGORY_SHOPPING: &str = "Shopping";

/// Everything that fits nowhere else.
pub const CATEGORY_OTHERS: &str = "Others";
