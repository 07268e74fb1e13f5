use std::path::{Path, PathBuf};
use std::time::Duration;

pub const ENDPOINT: &str = "https://query.wikidata.org/sparql";
pub const USER_AGENT: &str = "HistoricalTimelineApp/1.1";
pub const TIMEOUT_SECS: u64 = 90;
pub const DATA_DIR: &str = "data";
pub const OUTPUT_FILE: &str = "historical_figures.json";

/// Humans with more than 80 sitelinks born between 2000 BC and 1800 AD,
/// most linked first.
pub const FIGURES_QUERY: &str = r#"
SELECT DISTINCT ?person ?personLabel ?description ?birth ?death ?sitelinks ?article ?image WHERE {
  ?person wikibase:sitelinks ?sitelinks .
  FILTER(?sitelinks > 80)

  ?person wdt:P31 wd:Q5 .
  ?person wdt:P569 ?birth .
  ?person wdt:P570 ?death .

  FILTER(?birth >= "-2000-01-01T00:00:00Z"^^xsd:dateTime &&
         ?birth <= "1800-01-01T00:00:00Z"^^xsd:dateTime)

  OPTIONAL {
    ?article schema:about ?person .
    ?article schema:isPartOf <https://en.wikipedia.org/> .
  }

  OPTIONAL {
    ?person wdt:P18 ?image .
  }

  SERVICE wikibase:label {
    bd:serviceParam wikibase:language "en".
    ?person rdfs:label ?personLabel .
    ?person schema:description ?description .
  }
}
ORDER BY DESC(?sitelinks)
LIMIT 350
"#;

#[derive(Debug, Clone)]
pub struct Config {
    pub endpoint: String,
    pub user_agent: String,
    pub query: String,
    pub timeout: Duration,
    pub output_path: PathBuf,
}

impl Config {
    /// Output lands in `<program_dir>/data/historical_figures.json`.
    pub fn for_program_dir<P: AsRef<Path>>(program_dir: P) -> Config {
        Config {
            endpoint: ENDPOINT.to_string(),
            user_agent: USER_AGENT.to_string(),
            query: FIGURES_QUERY.to_string(),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            output_path: program_dir.as_ref().join(DATA_DIR).join(OUTPUT_FILE),
        }
    }
}
