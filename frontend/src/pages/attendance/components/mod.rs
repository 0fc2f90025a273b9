pub mod history;
pub mod marking;

pub use history::HistorySection;
pub use marking::MarkingSection;
