use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error("Slide deck is empty: the slider needs at least one slide")]
    EmptySlideDeck,

    #[error("IO error: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },

    #[error("JSON parsing error: {source}")]
    JsonError {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    /// Returns a user-friendly message with a recovery suggestion
    pub fn user_message(&self) -> String {
        let base_message = self.to_string();
        let suggestion = match self {
            PortfolioError::EmptySlideDeck => {
                "Add at least one slide to the content module."
            }
            PortfolioError::JsonError { .. } => {
                "Delete the settings file to restore defaults."
            }
            PortfolioError::IoError { .. } => {
                "File system error occurred. Check disk space and permissions."
            }
        };
        format!("{}\n\n{}", base_message, suggestion)
    }
}
