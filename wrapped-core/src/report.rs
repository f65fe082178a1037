//! The bucketed view of one report feed.

use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::record::{
    DateAmount, Description, Expense, HourlyInsight, NameAmount, Place, PurchaseStats,
    ReportRecord, SongList, TransferInfo,
};

/// Everything the slides read, bucketed by record kind.
///
/// Buckets keep feed order. `purchase_stats` is a single slot; if the feed
/// ever carries more than one, the last one wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategorizedView {
    pub date_amounts: Vec<DateAmount>,
    pub expenses: Vec<Expense>,
    pub name_amounts: Vec<NameAmount>,
    pub received: Vec<NameAmount>,
    pub purchase_stats: Option<PurchaseStats>,
    pub descriptions: Vec<Description>,
    pub hourly_insights: Vec<HourlyInsight>,
    pub song_lists: Vec<SongList>,
    pub places: Vec<Place>,
    pub transfers: Vec<TransferInfo>,
    /// Records that matched no known shape.
    pub dropped: usize,
}

impl CategorizedView {
    /// Bucket a raw report. `None` or an empty feed yields the empty view.
    ///
    /// Pure and deterministic: the same feed always buckets the same way,
    /// and nothing here fails. Unclassifiable records bump `dropped` and
    /// log at debug so a malformed feed stays diagnosable.
    pub fn organize(records: Option<&[Value]>) -> Self {
        let mut view = Self::default();
        let Some(records) = records else {
            return view;
        };

        for raw in records {
            match ReportRecord::from_value(raw) {
                Some(ReportRecord::Expense(r)) => view.expenses.push(r),
                Some(ReportRecord::Received(r)) => view.received.push(r),
                Some(ReportRecord::DateAmount(r)) => view.date_amounts.push(r),
                Some(ReportRecord::NameAmount(r)) => view.name_amounts.push(r),
                Some(ReportRecord::PurchaseStats(r)) => view.purchase_stats = Some(r),
                Some(ReportRecord::Description(r)) => view.descriptions.push(r),
                Some(ReportRecord::HourlyInsight(r)) => view.hourly_insights.push(r),
                Some(ReportRecord::SongList(r)) => view.song_lists.push(r),
                Some(ReportRecord::Place(r)) => view.places.push(r),
                Some(ReportRecord::TransferInfo(r)) => view.transfers.push(r),
                None => {
                    view.dropped += 1;
                    debug!(record = %raw, "report record matched no known shape; dropped");
                }
            }
        }

        view
    }

    /// Number of records that landed in a bucket.
    pub fn classified(&self) -> usize {
        self.date_amounts.len()
            + self.expenses.len()
            + self.name_amounts.len()
            + self.received.len()
            + usize::from(self.purchase_stats.is_some())
            + self.descriptions.len()
            + self.hourly_insights.len()
            + self.song_lists.len()
            + self.places.len()
            + self.transfers.len()
    }

    /// Bucket sizes by name, in classification order. Used by `inspect`.
    pub fn bucket_counts(&self) -> Vec<(&'static str, usize)> {
        vec![
            ("expenses", self.expenses.len()),
            ("received", self.received.len()),
            ("date_amounts", self.date_amounts.len()),
            ("name_amounts", self.name_amounts.len()),
            ("purchase_stats", usize::from(self.purchase_stats.is_some())),
            ("descriptions", self.descriptions.len()),
            ("hourly_insights", self.hourly_insights.len()),
            ("song_lists", self.song_lists.len()),
            ("places", self.places.len()),
            ("transfers", self.transfers.len()),
        ]
    }
}
