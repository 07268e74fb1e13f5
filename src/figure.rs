use serde::{Deserialize, Serialize};

pub mod process;

/// One historical figure as written to the output file. Field order here is
/// the key order in the JSON.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Figure {
    pub name: String,
    pub description: String,
    pub birth: String,
    pub death: String,
    pub sitelinks: u64,
    pub wikipedia: Option<String>,
    pub image: Option<String>,
}
