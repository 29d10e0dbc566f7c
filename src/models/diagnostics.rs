use serde::Serialize;

pub const MAX_LISTED_COLLECTIONS: usize = 10;
const ERROR_EXCERPT_CHARS: usize = 50;

/// Outcome of probing the store handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreProbe {
    Absent,
    Working { collections: Vec<String> },
    ListFailed { error: String },
}

/// Whether a configuration variable was present at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvProbe {
    Set,
    NotSet,
}

impl EnvProbe {
    pub fn from_presence(present: bool) -> Self {
        if present { EnvProbe::Set } else { EnvProbe::NotSet }
    }

    fn label(self) -> &'static str {
        match self {
            EnvProbe::Set => "✅ Set",
            EnvProbe::NotSet => "❌ Not Set",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticsReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticsReport {
    pub fn compose(store: StoreProbe, database_url: EnvProbe, database_name: EnvProbe) -> Self {
        let connection_status = match store {
            StoreProbe::Absent => "Not Connected",
            _ => "Connected",
        };

        let (database, collections) = match store {
            StoreProbe::Absent => ("⚠️  Available but not initialized".to_string(), Vec::new()),
            StoreProbe::Working { mut collections } => {
                collections.truncate(MAX_LISTED_COLLECTIONS);
                ("✅ Connected & Working".to_string(), collections)
            }
            StoreProbe::ListFailed { error } => {
                let excerpt: String = error.chars().take(ERROR_EXCERPT_CHARS).collect();
                (format!("⚠️  Connected but Error: {}", excerpt), Vec::new())
            }
        };

        Self {
            backend: "✅ Running".to_string(),
            database,
            database_url: database_url.label().to_string(),
            database_name: database_name.label().to_string(),
            connection_status: connection_status.to_string(),
            collections,
        }
    }
}
