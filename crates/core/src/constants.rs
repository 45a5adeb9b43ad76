/// Maximum number of contributions kept in the snapshot history
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Storage slot the snapshot is persisted under
pub const SNAPSHOT_SLOT_KEY: &str = "financeGoalData";

/// Decimal precision for the displayed progress percentage
pub const PERCENT_DISPLAY_PRECISION: u32 = 1;

/// Default currency symbol appended to monetary values
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₽";

/// Default timezone used to turn an instant into "today"
pub const DEFAULT_TIMEZONE: &str = "Europe/Moscow";

/// Text shown in place of a figure that cannot be computed yet
pub const PLACEHOLDER_DASH: &str = "—";
