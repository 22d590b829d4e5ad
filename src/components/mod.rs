//! UI Components
//!
//! Leptos components making up the ordering exercise.

mod offender_notice;
mod ordering_item;
mod ordering_list;
mod solution_list;

pub use offender_notice::OffenderNotice;
pub use ordering_item::OrderingItem;
pub use ordering_list::OrderingList;
pub use solution_list::SolutionList;
