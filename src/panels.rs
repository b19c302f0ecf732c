//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod chart;
pub mod history;
pub mod paragraph;
pub mod readout;
pub mod title;

pub use chart::ChartPanel;
pub use history::HistoryPanel;
pub use paragraph::ParagraphPanel;
pub use readout::ReadoutPanel;
pub use title::TitlePanel;
