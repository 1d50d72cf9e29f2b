/// Decimal precision for display amounts
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Short month labels in calendar order, as used for budget periods
/// and monthly aggregate labels ("Jan 2025").
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
