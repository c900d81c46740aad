use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Target units assumed when no plan has been saved yet
pub const DEFAULT_TARGET_UNITS: Decimal = dec!(30);

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Number of trailing days covered by the weekly activity summary
pub const WEEKLY_SUMMARY_DAYS: i64 = 7;
