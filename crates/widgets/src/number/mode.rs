use crate::config::FormatConfig;

/// How a numeric field renders and reads its value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisplayMode {
    #[default]
    Plain,
    Decimal(usize),
    Currency(usize),
    Percentage,
}

impl DisplayMode {
    /// Fixed places for decimal and currency modes.
    pub fn places(self) -> Option<usize> {
        match self {
            DisplayMode::Decimal(p) | DisplayMode::Currency(p) => Some(p),
            DisplayMode::Plain | DisplayMode::Percentage => None,
        }
    }

    pub fn is_percentage(self) -> bool {
        matches!(self, DisplayMode::Percentage)
    }

    /// Resolve the mode from the `currency`, `decimal` and `percentage`
    /// attributes. When several are present currency wins over decimal, and
    /// decimal over percentage.
    pub fn from_attributes(
        currency: Option<&str>,
        decimal: Option<&str>,
        percentage: bool,
        config: &FormatConfig,
    ) -> Self {
        if let Some(raw) = currency {
            return DisplayMode::Currency(parse_places(raw, config));
        }
        if let Some(raw) = decimal {
            return DisplayMode::Decimal(parse_places(raw, config));
        }
        if percentage {
            return DisplayMode::Percentage;
        }
        DisplayMode::Plain
    }
}

/// Places from an attribute value; empty or unusable text means the default.
pub fn parse_places(raw: &str, config: &FormatConfig) -> usize {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return config.default_places;
    }
    match trimmed.parse::<usize>() {
        Ok(places) if places > config.max_places => {
            log::debug!(
                target: "widgets.number",
                "places {places} clamped to {}",
                config.max_places
            );
            config.max_places
        }
        Ok(places) => places,
        Err(_) => {
            log::debug!(
                target: "widgets.number",
                "unusable places '{trimmed}', using {}",
                config.default_places
            );
            config.default_places
        }
    }
}
