//! Report record shapes and the priority-ordered decode that tells them apart.
//!
//! The report feed is one flat JSON array of small objects with no type
//! tag; the only way to tell records apart is which fields they carry.
//! Several shapes overlap (an expense is a date/amount pair plus a label,
//! a transfer counterpart is a name like any other), so decoding runs a
//! fixed first-match-wins chain over field presence and only then commits
//! to a typed variant.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single day's spend total.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateAmount {
    pub date: String,
    pub amount: f64,
}

/// A date/amount pair with a merchant label attached.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub date: String,
    pub amount: f64,
    pub expense: String,
}

/// A counterparty and how much moved to or from them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NameAmount {
    pub name: String,
    pub amount: f64,
}

/// Year-wide purchase totals. The feed emits at most one of these.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PurchaseStats {
    pub nr_purchases: u32,
    pub avg_day: f64,
}

/// A free-text one-liner about the year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Description {
    pub desc: String,
}

/// The hour of day the money moved most, with a quip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HourlyInsight {
    pub hour: String,
    pub desc: String,
}

/// The "your spending as a playlist" track list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SongList {
    pub songs: Vec<String>,
}

/// The most-visited merchant and what it cost.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Place {
    pub place: String,
    pub nr_visits: u32,
    pub amount: f64,
}

/// Who received the most transfers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransferInfo {
    pub name: String,
    pub nr_transfers: u32,
}

/// The feed marks the "you got the most from" counterparty with this
/// literal name only; nothing structural separates it from an ordinary
/// name/amount record.
// TODO: key on a dedicated record kind once the report emits one.
pub const TOP_SENDER_NAME: &str = "Matthew Palmer";

/// One record from the report feed, tagged by the shape that claimed it.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportRecord {
    Expense(Expense),
    /// Structurally a [`NameAmount`]; singled out by [`TOP_SENDER_NAME`].
    Received(NameAmount),
    DateAmount(DateAmount),
    NameAmount(NameAmount),
    PurchaseStats(PurchaseStats),
    Description(Description),
    HourlyInsight(HourlyInsight),
    SongList(SongList),
    Place(Place),
    TransferInfo(TransferInfo),
}

impl ReportRecord {
    /// Decode one raw report object.
    ///
    /// Shapes are tried in a fixed order and the first whose fields are
    /// present wins, so the overlaps resolve the same way every time:
    /// an expense beats a plain date/amount, the top-sender literal beats
    /// a plain name/amount, and a name with `nr_transfers` is a transfer
    /// count rather than an amount record.
    ///
    /// Returns `None` for objects matching no shape, and for objects that
    /// pass the field test but carry the wrong value types. Both are
    /// dropped without error; this consumer only displays.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let has = |key: &str| obj.contains_key(key);

        if has("expense") && has("amount") && has("date") {
            return Expense::deserialize(value).ok().map(Self::Expense);
        }
        if has("name")
            && has("amount")
            && obj.get("name").and_then(Value::as_str) == Some(TOP_SENDER_NAME)
        {
            return NameAmount::deserialize(value).ok().map(Self::Received);
        }
        if has("date") && has("amount") {
            return DateAmount::deserialize(value).ok().map(Self::DateAmount);
        }
        if has("name") && has("amount") && !has("nr_transfers") {
            return NameAmount::deserialize(value).ok().map(Self::NameAmount);
        }
        if has("nr_purchases") && has("avg_day") {
            return PurchaseStats::deserialize(value).ok().map(Self::PurchaseStats);
        }
        if has("desc") && !has("hour") {
            return Description::deserialize(value).ok().map(Self::Description);
        }
        if has("hour") && has("desc") {
            return HourlyInsight::deserialize(value).ok().map(Self::HourlyInsight);
        }
        if obj.get("songs").is_some_and(Value::is_array) {
            return SongList::deserialize(value).ok().map(Self::SongList);
        }
        if has("place") && has("nr_visits") && has("amount") {
            return Place::deserialize(value).ok().map(Self::Place);
        }
        if has("name") && has("nr_transfers") {
            return TransferInfo::deserialize(value).ok().map(Self::TransferInfo);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_expense_beats_date_amount() {
        let v = json!({"date": "2024-06-21", "amount": 389.50, "expense": "Concert tickets"});
        let record = ReportRecord::from_value(&v).unwrap();
        assert!(matches!(record, ReportRecord::Expense(_)));
    }

    #[test]
    fn test_plain_date_amount() {
        let v = json!({"date": "2024-06-21", "amount": 412.0});
        let record = ReportRecord::from_value(&v).unwrap();
        assert_eq!(
            record,
            ReportRecord::DateAmount(DateAmount {
                date: "2024-06-21".to_string(),
                amount: 412.0,
            })
        );
    }

    #[test]
    fn test_top_sender_literal_beats_name_amount() {
        let v = json!({"name": TOP_SENDER_NAME, "amount": 4256.0});
        let record = ReportRecord::from_value(&v).unwrap();
        assert!(matches!(record, ReportRecord::Received(_)));

        let v = json!({"name": "Anna de Vries", "amount": 4256.0});
        let record = ReportRecord::from_value(&v).unwrap();
        assert!(matches!(record, ReportRecord::NameAmount(_)));
    }

    #[test]
    fn test_transfer_info_is_not_name_amount() {
        let v = json!({"name": "Sam", "nr_transfers": 12});
        let record = ReportRecord::from_value(&v).unwrap();
        assert!(matches!(record, ReportRecord::TransferInfo(_)));
    }

    #[test]
    fn test_hour_splits_descriptions() {
        let plain = json!({"desc": "A saga of lattes."});
        assert!(matches!(
            ReportRecord::from_value(&plain),
            Some(ReportRecord::Description(_))
        ));

        let hourly = json!({"hour": "23:00", "desc": "Spending therapy hits different after dark."});
        assert!(matches!(
            ReportRecord::from_value(&hourly),
            Some(ReportRecord::HourlyInsight(_))
        ));
    }

    #[test]
    fn test_songs_must_be_an_array() {
        let v = json!({"songs": ["Money", "Royals", "Price Tag"]});
        assert!(matches!(
            ReportRecord::from_value(&v),
            Some(ReportRecord::SongList(_))
        ));

        let v = json!({"songs": "Money"});
        assert_eq!(ReportRecord::from_value(&v), None);
    }

    #[test]
    fn test_unknown_shape_is_dropped() {
        assert_eq!(ReportRecord::from_value(&json!({"foo": 1})), None);
        assert_eq!(ReportRecord::from_value(&json!(42)), None);
        assert_eq!(ReportRecord::from_value(&json!(null)), None);
    }

    #[test]
    fn test_right_fields_wrong_types_is_dropped() {
        // Matches the place shape by field presence, but nr_visits is not a number.
        let v = json!({"place": "Supermarket", "nr_visits": "often", "amount": 3840.0});
        assert_eq!(ReportRecord::from_value(&v), None);
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let v = json!({"place": "Supermarket", "nr_visits": 127, "amount": 3840.0, "city": "Rotterdam"});
        assert!(matches!(
            ReportRecord::from_value(&v),
            Some(ReportRecord::Place(_))
        ));
    }
}
