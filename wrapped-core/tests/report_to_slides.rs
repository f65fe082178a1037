//! End-to-end: a realistic report feed through classification and the
//! whole deck.

use serde_json::{json, Value};
use wrapped_core::{build_deck, CategorizedView, SLIDE_COUNT};

/// The kind of array the report endpoint actually serves, shapes mixed
/// and in no particular order, with one stray record the client should
/// ignore.
fn sample_report() -> Vec<Value> {
    vec![
        json!({"date": "2024-06-21", "amount": 412.0}),
        json!({"name": "Anna de Vries", "amount": 320.0}),
        json!({"name": "Matthew Palmer", "amount": 4256.0}),
        json!({"date": "2024-11-02", "amount": 389.5, "expense": "Concert tickets"}),
        json!({"date": "2024-03-14", "amount": 95.0, "expense": "Albert Heijn"}),
        json!({"songs": ["Money", "Royals", "Price Tag"]}),
        json!({"hour": "23:00", "desc": "Spending therapy hits different after dark."}),
        json!({"desc": "A year of tap-to-pay bravado."}),
        json!({"desc": "3.1 days"}),
        json!({"place": "Supermarket", "nr_visits": 127, "amount": 3840.0}),
        json!({"name": "Sam", "nr_transfers": 12}),
        json!({"nr_purchases": 10, "avg_day": 1.0}),
        json!({"nr_purchases": 1248, "avg_day": 3.4}),
        json!({"version": "2024.1"}),
    ]
}

#[test]
fn full_report_feeds_every_slide() {
    let feed = sample_report();
    let view = CategorizedView::organize(Some(&feed));

    assert_eq!(view.dropped, 1);
    assert_eq!(view.expenses.len(), 2);
    assert_eq!(view.received.len(), 1);
    assert_eq!(view.purchase_stats.unwrap().nr_purchases, 1248);

    let deck = build_deck(&view);
    assert_eq!(deck.len(), SLIDE_COUNT);

    // Slide 1: first date/amount record.
    assert_eq!(deck[0].headline, "€412");
    assert_eq!(deck[0].lines, ["on 21 June 2024"]);

    // Slide 2: max across plain name/amount records (the literal-name
    // record must not leak in, despite its larger amount).
    assert_eq!(deck[1].headline, "Anna de Vries");

    // Slide 3: the literal-name bucket.
    assert_eq!(deck[2].headline, "Matthew Palmer");
    assert_eq!(deck[2].lines, ["€4256 received"]);

    // Slide 4: max expense, not first expense.
    assert_eq!(deck[3].headline, "€389.50");
    assert_eq!(deck[3].lines[0], "Concert tickets");

    // Slide 5: numbered playlist.
    assert_eq!(deck[4].lines, ["1. Money", "2. Royals", "3. Price Tag"]);

    // Slides 6-8: singletons and firsts.
    assert_eq!(deck[5].headline, "23:00");
    assert_eq!(deck[6].headline, "Supermarket");
    assert_eq!(deck[7].headline, "1248 purchases");

    // Slide 9: first description; slide 10 burns the second one.
    assert_eq!(deck[8].headline, "A year of tap-to-pay bravado.");
    assert_eq!(deck[9].lines[3], "Fastest Burn: 3.1 days");
    assert_eq!(deck[9].lines[1], "Most Used Merchant: Concert tickets");
}

#[test]
fn organizing_twice_gives_equal_views_and_decks() {
    let feed = sample_report();
    let first = CategorizedView::organize(Some(&feed));
    let second = CategorizedView::organize(Some(&feed));

    assert_eq!(first, second);
    assert_eq!(build_deck(&first), build_deck(&second));
}
