// region:    --- Modules

mod already_applied;
mod applier;
mod apply_report;
mod document;
mod error;
mod exact;
mod fix;
mod fuzzy;
mod locate;
mod normalize;
mod normalized;
mod range;


pub use applier::*;
pub use apply_report::*;
pub use document::*;
pub use error::*;
pub use fix::*;
pub use range::*;

// endregion: --- Modules
