use std::env;
use std::path::PathBuf;

const DEFAULT_GREETING_NAME: &str = "World";

#[derive(Clone, Debug)]
pub struct Config {
    /// JSON file with the categories to serve; lookups are skipped without it
    pub seed_path: Option<PathBuf>,
    /// Name greeted when none is given on the command line
    pub greeting_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            seed_path: lookup("CATALOG_SEED_PATH")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
            greeting_name: lookup("CATALOG_GREETING_NAME")
                .unwrap_or_else(|| DEFAULT_GREETING_NAME.to_string()),
        }
    }
}
