// Dashboard content validation errors
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("embed url {url:?} is not a valid absolute url: {source}")]
    InvalidEmbedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("embed url {url:?} uses scheme {scheme:?}, expected http or https")]
    UnsupportedEmbedScheme { url: String, scheme: String },

    #[error("embed url {0:?} has surrounding whitespace")]
    UntrimmedEmbedUrl(String),

    #[error("dashboard must define at least one tab")]
    NoTabs,

    #[error("tab key {0:?} must be non-empty and use only a-z, 0-9, '-' or '_'")]
    InvalidTabKey(String),

    #[error("tab key {0:?} is defined more than once")]
    DuplicateTabKey(String),

    #[error("default tab {0:?} does not match any tab key")]
    UnknownDefaultTab(String),

    #[error("tab {0:?} has no card grids")]
    EmptyTab(String),

    #[error("a card grid in tab {0:?} has no cards")]
    EmptyGrid(String),

    #[error("a card grid in tab {tab:?} has {columns} columns, expected 1 to 4")]
    UnsupportedColumns { tab: String, columns: u8 },
}
