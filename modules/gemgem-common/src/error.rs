use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
