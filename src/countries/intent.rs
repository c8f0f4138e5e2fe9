use std::str::FromStr;

use thiserror::Error;

use crate::repository::FilterType;

/// Intents the country list view can express.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryListIntent {
    /// The view was shown for the first time.
    Initial,
    /// The user picked a different filter; reloads the list.
    ChangeFilter(FilterType),
    AddToFavorite { name: String },
    RemoveFromFavorite { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseIntentError {
    #[error("Unknown intent '{0}' (expected load, favorites, add:<name> or remove:<name>)")]
    Unknown(String),

    #[error("Intent '{0}' requires a country name")]
    MissingName(String),
}

/// Parses the command-line form of an intent:
/// `load`, `favorites`, `add:<name>`, `remove:<name>`.
impl FromStr for CountryListIntent {
    type Err = ParseIntentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, name) = match s.split_once(':') {
            Some((verb, name)) => (verb, Some(name.trim())),
            None => (s, None),
        };

        let require_name = || match name {
            Some(name) if !name.is_empty() => Ok(name.to_string()),
            _ => Err(ParseIntentError::MissingName(verb.to_string())),
        };

        match verb {
            "load" | "all" => Ok(Self::Initial),
            "favorites" => Ok(Self::ChangeFilter(FilterType::Favorites)),
            "add" => Ok(Self::AddToFavorite { name: require_name()? }),
            "remove" => Ok(Self::RemoveFromFavorite { name: require_name()? }),
            _ => Err(ParseIntentError::Unknown(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_verbs() {
        assert_eq!("load".parse::<CountryListIntent>(), Ok(CountryListIntent::Initial));
        assert_eq!(
            "favorites".parse::<CountryListIntent>(),
            Ok(CountryListIntent::ChangeFilter(FilterType::Favorites))
        );
    }

    #[test]
    fn parses_named_verbs() {
        assert_eq!(
            "add:Czechia".parse::<CountryListIntent>(),
            Ok(CountryListIntent::AddToFavorite {
                name: "Czechia".to_string()
            })
        );
        assert_eq!(
            "remove: Slovakia".parse::<CountryListIntent>(),
            Ok(CountryListIntent::RemoveFromFavorite {
                name: "Slovakia".to_string()
            })
        );
    }

    #[test]
    fn named_verb_without_name_is_rejected() {
        assert_eq!(
            "add".parse::<CountryListIntent>(),
            Err(ParseIntentError::MissingName("add".to_string()))
        );
        assert_eq!(
            "remove:".parse::<CountryListIntent>(),
            Err(ParseIntentError::MissingName("remove".to_string()))
        );
    }

    #[test]
    fn unknown_verb_is_rejected() {
        assert!(matches!(
            "share:Czechia".parse::<CountryListIntent>(),
            Err(ParseIntentError::Unknown(_))
        ));
    }
}
