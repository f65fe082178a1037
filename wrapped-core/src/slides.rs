//! The ten slide view models.
//!
//! Each builder is a pure function of its slice of the categorized view.
//! Missing data never fails a slide; every builder substitutes the same
//! hard-coded placeholders the original deck shipped with.

use chrono::NaiveDate;

use crate::report::CategorizedView;

/// How many data slides the deck has, intro excluded.
pub const SLIDE_COUNT: usize = 10;

/// One renderable card: a small themed title, a big headline value, and
/// caption lines underneath.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideCard {
    pub title: String,
    pub headline: String,
    pub lines: Vec<String>,
}

impl SlideCard {
    fn new(title: &str, headline: impl Into<String>, lines: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            headline: headline.into(),
            lines,
        }
    }
}

/// The synthetic slide shown before the first tap.
pub fn intro_card() -> SlideCard {
    SlideCard::new(
        "Wrapped",
        "Your 2024 in Money",
        vec!["Tap anywhere to start".to_string()],
    )
}

/// Shown while the report fetch is still in flight.
pub fn loading_card() -> SlideCard {
    SlideCard::new("", "Loading data...", Vec::new())
}

/// Shown in place of slide content when the report fetch failed. The deck
/// stays navigable; every data slide renders this instead.
pub fn fetch_error_card(message: &str) -> SlideCard {
    SlideCard::new("", "Error Loading Data", vec![message.to_string()])
}

/// Build the full deck from one categorized view, in presentation order.
pub fn build_deck(view: &CategorizedView) -> Vec<SlideCard> {
    vec![
        most_expensive_night(view),
        top_recipient(view),
        top_sender(view),
        most_painful_expense(view),
        spending_playlist(view),
        prime_spending_hour(view),
        favorite_place(view),
        purchase_count(view),
        year_in_one_line(view),
        money_mashup(view),
    ]
}

/// Slide 1: the single most expensive day, from the first date/amount record.
fn most_expensive_night(view: &CategorizedView) -> SlideCard {
    match view.date_amounts.first() {
        Some(da) => SlideCard::new(
            "Most Expensive Night Out",
            euros(da.amount),
            vec![format!("on {}", friendly_date(&da.date))],
        ),
        None => SlideCard::new("Most Expensive Night Out", "No Data Available", Vec::new()),
    }
}

/// Slide 2: the counterparty who received the most, by max amount.
fn top_recipient(view: &CategorizedView) -> SlideCard {
    let top = view
        .name_amounts
        .iter()
        .max_by(|a, b| a.amount.total_cmp(&b.amount));

    let (name, amount) = match top {
        Some(n) => (n.name.as_str(), n.amount),
        None => ("Loading...", 0.0),
    };

    SlideCard::new(
        "You Sent the Most € to...",
        name,
        vec![format!("{} sent over the year", euros(amount))],
    )
}

/// Slide 3: who sent you the most, from the literal-name bucket.
fn top_sender(view: &CategorizedView) -> SlideCard {
    let (name, amount) = match view.received.first() {
        Some(n) => (n.name.as_str(), n.amount),
        None => ("Matthew Palmer", 4256.0),
    };

    SlideCard::new(
        "You Got the Most € from...",
        name,
        vec![format!("{} received", euros(amount))],
    )
}

/// Slide 4: the labeled expense with the highest amount.
fn most_painful_expense(view: &CategorizedView) -> SlideCard {
    let top = view
        .expenses
        .iter()
        .max_by(|a, b| a.amount.total_cmp(&b.amount));

    match top {
        Some(e) => SlideCard::new(
            "Most Painful Single Expense",
            euros(e.amount),
            vec![e.expense.clone(), format!("on {}", friendly_date(&e.date))],
        ),
        None => SlideCard::new("Most Painful Single Expense", "Loading...", Vec::new()),
    }
}

/// Slide 5: the first song list, rendered as numbered tracks.
fn spending_playlist(view: &CategorizedView) -> SlideCard {
    let tracks: Vec<String> = view
        .song_lists
        .first()
        .map(|list| {
            list.songs
                .iter()
                .enumerate()
                .map(|(i, song)| format!("{}. {}", i + 1, song))
                .collect()
        })
        .unwrap_or_default();

    SlideCard::new("If Your Spending Was a Playlist", "", tracks)
}

/// Slide 6: the hour the money moved most.
fn prime_spending_hour(view: &CategorizedView) -> SlideCard {
    let (hour, desc) = match view.hourly_insights.first() {
        Some(h) => (h.hour.clone(), h.desc.clone()),
        None => (
            "12:00 PM".to_string(),
            "No spending data available".to_string(),
        ),
    };

    SlideCard::new("Your Prime Spending Hour", hour, vec![desc])
}

/// Slide 7: the most-visited place.
fn favorite_place(view: &CategorizedView) -> SlideCard {
    let (place, visits, amount) = match view.places.first() {
        Some(p) => (p.place.as_str(), p.nr_visits, p.amount),
        None => ("Supermarket", 127, 3840.0),
    };

    SlideCard::new(
        "Your Favorite Place",
        place,
        vec![
            format!("{visits} visits"),
            format!("{} total spent", euros(amount)),
        ],
    )
}

/// Slide 8: the purchase counter.
fn purchase_count(view: &CategorizedView) -> SlideCard {
    let (nr_purchases, avg_day) = match view.purchase_stats {
        Some(stats) => (stats.nr_purchases, stats.avg_day),
        None => (1248, 3.4),
    };

    SlideCard::new(
        "Your Purchase Count",
        format!("{nr_purchases} purchases"),
        vec![format!("{avg_day:.1} per day on average")],
    )
}

/// Slide 9: the one-line summary of the year.
fn year_in_one_line(view: &CategorizedView) -> SlideCard {
    let line = view
        .descriptions
        .first()
        .map(|d| d.desc.clone())
        .unwrap_or_else(|| {
            "A saga of lattes, regrets, and a suspicious number of IKEA visits.".to_string()
        });

    SlideCard::new("Your Year in One Line", line, Vec::new())
}

/// Slide 10: the closing mashup, one stat from four different buckets.
fn money_mashup(view: &CategorizedView) -> SlideCard {
    let night = view
        .date_amounts
        .first()
        .map(|da| euros(da.amount))
        .unwrap_or_else(|| "€412".to_string());

    let merchant = view
        .expenses
        .first()
        .map(|e| e.expense.clone())
        .unwrap_or_else(|| "Albert Heijn".to_string());

    let (transfer_name, nr_transfers) = match view.transfers.first() {
        Some(t) => (t.name.as_str(), t.nr_transfers),
        None => ("Sam", 12),
    };

    let burn = view
        .descriptions
        .get(1)
        .map(|d| d.desc.clone())
        .unwrap_or_else(|| "2.7 days".to_string());

    SlideCard::new(
        "Your 2024 Money Mashup",
        "Your Financial Highlights",
        vec![
            format!("Most Expensive Night: {night}"),
            format!("Most Used Merchant: {merchant}"),
            format!("Most Transfers: {transfer_name} ({nr_transfers} times)"),
            format!("Fastest Burn: {burn}"),
        ],
    )
}

/// Whole euros stay whole; everything else gets cents.
fn euros(amount: f64) -> String {
    if amount.fract() == 0.0 {
        format!("€{amount:.0}")
    } else {
        format!("€{amount:.2}")
    }
}

/// Render `YYYY-MM-DD` dates human-friendly; anything else passes through
/// untouched. The feed is display-only, so no date is ever rejected.
fn friendly_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d.format("%-d %B %Y").to_string(),
        Err(_) => date.to_string(),
    }
}
