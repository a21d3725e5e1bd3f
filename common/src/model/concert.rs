use serde::Serialize;

/// A concert offered on the landing page.
///
/// The catalog is fixed at build time; see [`CONCERTS`]. Prices are kept in
/// cents so that order totals never accumulate floating point error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Concert {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    /// Ticket price in cents.
    pub price_cents: u64,
    pub venue: &'static str,
}

pub static CONCERTS: [Concert; 3] = [
    Concert {
        id: 1,
        title: "Forro Night",
        date: "May 15, 2025",
        price_cents: 8999,
        venue: "Downtown Arena",
    },
    Concert {
        id: 2,
        title: "Rock Concert",
        date: "June 20, 2025",
        price_cents: 6550,
        venue: "Symphony Hall",
    },
    Concert {
        id: 3,
        title: "Sertanejo Festival",
        date: "July 10, 2025",
        price_cents: 7500,
        venue: "Stadium Center",
    },
];

/// Concert id selected when the page loads. It matches no catalog entry, so
/// nothing is highlighted until the visitor picks a concert.
pub const INITIAL_CONCERT_ID: u32 = 10;

/// Looks up a concert in the catalog by id.
pub fn find_concert(id: u32) -> Option<&'static Concert> {
    CONCERTS.iter().find(|concert| concert.id == id)
}

/// Renders an amount in cents as `$X.YY`.
pub fn format_price(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
