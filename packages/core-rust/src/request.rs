use serde::{Deserialize, Serialize};

/// Caller-supplied description of a delimited text file to add to the catalog.
///
/// Immutable input to the descriptor builder. Only `full_path` feeds the
/// asset's qualified name; the remaining fields are copied or defaulted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingRequest {
    /// Location of the file. Becomes the endpoint address.
    pub full_path: String,
    /// Human-readable name shown in catalog listings.
    pub display_name: String,
    /// Free-text description of the file's content.
    pub description: String,
    /// Ordered column names. `None` means no schema is catalogued.
    #[serde(default)]
    pub column_headers: Option<Vec<String>>,
    /// Field separator. Defaults to `,` when absent.
    #[serde(default, rename = "delimiterCharacter")]
    pub delimiter: Option<char>,
    /// Quote character. Defaults to `"` when absent.
    #[serde(default, rename = "quoteCharacter")]
    pub quote: Option<char>,
}

impl OnboardingRequest {
    /// Creates a request for `full_path` with no headers and default separators.
    #[must_use]
    pub fn new(
        full_path: impl Into<String>,
        display_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            full_path: full_path.into(),
            display_name: display_name.into(),
            description: description.into(),
            column_headers: None,
            delimiter: None,
            quote: None,
        }
    }

    /// Sets the ordered column headers.
    #[must_use]
    pub fn with_column_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.column_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = Some(quote);
        self
    }
}
