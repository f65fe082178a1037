//! wrapped-core: record classification, slide view models, and navigation
//! for the year-in-review deck. No I/O lives here.

pub mod nav;
pub mod record;
pub mod report;
pub mod slides;

pub use nav::{Direction, Navigator, Slide};
pub use record::{
    DateAmount, Description, Expense, HourlyInsight, NameAmount, Place, PurchaseStats,
    ReportRecord, SongList, TransferInfo, TOP_SENDER_NAME,
};
pub use report::CategorizedView;
pub use slides::{
    build_deck, fetch_error_card, intro_card, loading_card, SlideCard, SLIDE_COUNT,
};
