use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

// ============================================================================
// Spinner Types
// ============================================================================

/// Marker class that drives the rotation animation.
pub const SPIN_CLASS: &str = "animate-spin";

const INDICATOR_BASE: &str = "rounded-full border-b-2 border-current";
const CONTAINER_BASE: &str = "flex justify-center items-center";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpinnerError {
    #[error("Unknown spinner size: {0:?}")]
    UnknownSize(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpinnerSize {
    #[serde(rename = "sm")]
    Small,
    #[default]
    #[serde(rename = "md")]
    Medium,
    #[serde(rename = "lg")]
    Large,
}

impl SpinnerSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "sm",
            SpinnerSize::Medium => "md",
            SpinnerSize::Large => "lg",
        }
    }

    /// Width/height pair for this tier.
    pub fn dimension_classes(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4",
            SpinnerSize::Medium => "w-8 h-8",
            SpinnerSize::Large => "w-12 h-12",
        }
    }

    /// Lenient parse for values coming from markup or query strings.
    /// Unknown names fall back to the default tier.
    pub fn from_attr(value: Option<&str>) -> Self {
        match value {
            None => SpinnerSize::default(),
            Some(raw) => raw.parse().unwrap_or_else(|e: SpinnerError| {
                log::warn!("{}, falling back to {}", e, SpinnerSize::default().as_str());
                SpinnerSize::default()
            }),
        }
    }
}

impl FromStr for SpinnerSize {
    type Err = SpinnerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sm" | "small" => Ok(SpinnerSize::Small),
            "md" | "medium" => Ok(SpinnerSize::Medium),
            "lg" | "large" => Ok(SpinnerSize::Large),
            _ => Err(SpinnerError::UnknownSize(s.to_string())),
        }
    }
}

/// Per-render spinner settings. Built by the caller and dropped after render.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpinnerConfig {
    pub size: SpinnerSize,
    pub class_name: Option<String>,
}

impl SpinnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Classes for the rotating element: base, spin marker and dimension pair.
    pub fn indicator_class(&self) -> String {
        format!(
            "{} {} {}",
            SPIN_CLASS,
            INDICATOR_BASE,
            self.size.dimension_classes()
        )
    }

    /// Classes for the outer container, with the caller's class appended.
    pub fn container_class(&self) -> String {
        let mut classes = vec![CONTAINER_BASE];
        if let Some(ref extra) = self.class_name {
            let extra = extra.trim();
            if !extra.is_empty() {
                classes.push(extra);
            }
        }
        classes.join(" ")
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn test_default_config_is_medium() {
        let config = SpinnerConfig::new();
        assert_eq!(config.size, SpinnerSize::Medium);

        let class = config.indicator_class();
        let tokens = tokens(&class);
        assert!(tokens.contains(&SPIN_CLASS));
        assert!(tokens.contains(&"w-8"));
        assert!(tokens.contains(&"h-8"));
    }

    #[test]
    fn test_small_and_large_dimensions() {
        let small = SpinnerConfig::new().with_size(SpinnerSize::Small).indicator_class();
        let small = tokens(&small);
        assert!(small.contains(&"w-4"));
        assert!(small.contains(&"h-4"));
        assert!(!small.contains(&"w-8"));

        let large = SpinnerConfig::new().with_size(SpinnerSize::Large).indicator_class();
        let large = tokens(&large);
        assert!(large.contains(&"w-12"));
        assert!(large.contains(&"h-12"));
        assert!(!large.contains(&"w-8"));
    }

    #[test]
    fn test_spin_class_on_every_size() {
        for size in [SpinnerSize::Small, SpinnerSize::Medium, SpinnerSize::Large] {
            let class = SpinnerConfig::new()
                .with_size(size)
                .with_class("custom-class")
                .indicator_class();
            assert_eq!(
                tokens(&class).iter().filter(|t| **t == SPIN_CLASS).count(),
                1,
                "size {}",
                size.as_str()
            );
        }
    }

    #[test]
    fn test_custom_class_is_additive() {
        let config = SpinnerConfig::new().with_class("custom-class");
        let class = config.container_class();
        let tokens = tokens(&class);
        assert!(tokens.contains(&"custom-class"));
        assert!(tokens.contains(&"flex"));
        assert!(tokens.contains(&"justify-center"));

        // The caller's class never leaks onto the rotating element.
        assert!(!config.indicator_class().contains("custom-class"));
    }

    #[test]
    fn test_blank_custom_class_ignored() {
        let config = SpinnerConfig::new().with_class("   ");
        assert_eq!(config.container_class(), CONTAINER_BASE);
    }

    #[test]
    fn test_spinner_size_from_str() {
        assert_eq!("sm".parse(), Ok(SpinnerSize::Small));
        assert_eq!("LG".parse(), Ok(SpinnerSize::Large));
        assert_eq!("Medium".parse(), Ok(SpinnerSize::Medium));
        assert_eq!(
            "xl".parse::<SpinnerSize>(),
            Err(SpinnerError::UnknownSize("xl".to_string()))
        );
    }

    #[test]
    fn test_spinner_size_from_attr() {
        assert_eq!(SpinnerSize::from_attr(None), SpinnerSize::Medium);
        assert_eq!(SpinnerSize::from_attr(Some("sm")), SpinnerSize::Small);
        assert_eq!(SpinnerSize::from_attr(Some("huge")), SpinnerSize::Medium);
    }

    #[test]
    fn test_spinner_size_serde() {
        assert_eq!(serde_json::to_string(&SpinnerSize::Small).unwrap(), "\"sm\"");
        assert_eq!(
            serde_json::from_str::<SpinnerSize>("\"lg\"").unwrap(),
            SpinnerSize::Large
        );
        assert!(serde_json::from_str::<SpinnerSize>("\"xl\"").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = SpinnerError::UnknownSize("xl".to_string());
        assert_eq!(err.to_string(), "Unknown spinner size: \"xl\"");
    }
}
