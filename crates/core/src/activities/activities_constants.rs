//! Activity constants.

/// Storage and wire format for activity dates.
/// The zero-padded form keeps lexicographic comparison aligned with
/// calendar order, which the date range queries rely on.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
