use log::debug;
use serde_json::Value;

use crate::error::{Result, TimelineError};
use crate::figure::Figure;

pub const DEFAULT_DESCRIPTION: &str = "Historical Figure";

const SAMPLE_SIZE: usize = 5;

fn get_value<'a>(binding: &'a Value, var: &str) -> Option<&'a str> {
    binding.get(var)?.get("value")?.as_str()
}

fn require_value<'a>(binding: &'a Value, var: &str, index: usize) -> Result<&'a str> {
    get_value(binding, var).ok_or_else(|| TimelineError::DataShape {
        index,
        reason: format!("missing required `{}.value`", var),
    })
}

fn get_optional(binding: &Value, var: &str) -> Option<String> {
    get_value(binding, var).map(|value| value.to_string())
}

fn parse_sitelinks(raw: &str, index: usize) -> Result<u64> {
    raw.parse::<u64>().map_err(|_| TimelineError::DataShape {
        index,
        reason: format!("sitelinks {:?} is not a whole number", raw),
    })
}

/// Maps one SPARQL binding (`index` is its position in the response) to a
/// `Figure`.
pub fn process_binding(binding: &Value, index: usize) -> Result<Figure> {
    let name = require_value(binding, "personLabel", index)?.to_string();
    let description = get_value(binding, "description")
        .unwrap_or(DEFAULT_DESCRIPTION)
        .to_string();
    let birth = require_value(binding, "birth", index)?.to_string();
    let death = require_value(binding, "death", index)?.to_string();
    let sitelinks = parse_sitelinks(require_value(binding, "sitelinks", index)?, index)?;
    let wikipedia = get_optional(binding, "article");
    let image = get_optional(binding, "image");

    debug!("{}: {} sitelinks", &name, sitelinks);

    Ok(Figure {
        name,
        description,
        birth,
        death,
        sitelinks,
        wikipedia,
        image,
    })
}

/// Stops at the first binding that doesn't fit; nothing is skipped.
pub fn process_bindings(bindings: &[Value]) -> Result<Vec<Figure>> {
    bindings
        .iter()
        .enumerate()
        .map(|(index, binding)| process_binding(binding, index))
        .collect()
}

/// The first few names, for the progress notice.
pub fn sample_names(figures: &[Figure]) -> String {
    figures
        .iter()
        .take(SAMPLE_SIZE)
        .map(|figure| figure.name.as_str())
        .collect::<Vec<&str>>()
        .join(", ")
}
