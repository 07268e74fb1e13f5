//! Fetches long-dead, widely linked people from Wikidata and stores them as a
//! JSON timeline on disk.

pub mod config;
pub mod error;
pub mod figure;
pub mod output;
pub mod query;
pub mod timeline;

pub use config::Config;
pub use error::{Result, TimelineError};
pub use figure::Figure;
pub use timeline::{run, Outcome};
