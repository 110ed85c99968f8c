//! Formatting and page configuration.

/// Separators and precision limits used to render and read numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormatConfig {
    /// Decimal separator in rendered text.
    pub decimal_separator: char,
    /// Separator that may group thousands in typed text; dropped while parsing.
    pub grouping_separator: char,
    /// Places used when `decimal`/`currency` is present without a usable count.
    pub default_places: usize,
    /// Upper bound on places; larger requests are clamped.
    pub max_places: usize,
    /// Appended to the digits in the percentage mask label.
    pub percent_suffix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            decimal_separator: ',',
            grouping_separator: '.',
            default_places: 2,
            max_places: 20,
            percent_suffix: " %".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageConfig {
    pub format: FormatConfig,
}
