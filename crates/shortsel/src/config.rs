//! Synthesis configuration
//!
//! [`Options`] is an immutable value handed to every call. It can be built
//! in code or deserialized through [`OptionsConfig`].

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Largest combination of classes or attributes tried by default
pub const DEFAULT_MAX_COMBINATION: usize = 3;

/// Kinds of selector tokens, in the order callers rank them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SelectorType {
    #[serde(rename = "ID")]
    Id,
    Class,
    Attributes,
    Tag,
    NthChild,
}

impl SelectorType {
    /// Every kind, in default priority order
    pub const ALL: [SelectorType; 5] = [
        SelectorType::Id,
        SelectorType::Class,
        SelectorType::Attributes,
        SelectorType::Tag,
        SelectorType::NthChild,
    ];
}

/// Options controlling candidate generation
#[derive(Debug, Clone)]
pub struct Options {
    selector_types: Vec<SelectorType>,
    attributes: Vec<Regex>,
    exclude: Option<Regex>,
    max_combination: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            selector_types: SelectorType::ALL.to_vec(),
            attributes: Vec::new(),
            exclude: None,
            max_combination: DEFAULT_MAX_COMBINATION,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the priority order; repeated kinds keep their first position
    pub fn with_selector_types(mut self, types: impl IntoIterator<Item = SelectorType>) -> Self {
        let mut ordered = Vec::new();
        for kind in types {
            if !ordered.contains(&kind) {
                ordered.push(kind);
            }
        }
        self.selector_types = ordered;
        self
    }

    /// Compile attribute-name patterns, kept in the given order
    pub fn with_attribute_patterns<I, S>(mut self, patterns: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attributes = patterns
            .into_iter()
            .map(|p| compile(p.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(self)
    }

    /// Compile the pattern that discards id and class tokens
    pub fn with_exclude_pattern(mut self, pattern: &str) -> Result<Self, ConfigError> {
        self.exclude = Some(compile(pattern)?);
        Ok(self)
    }

    /// Use an already compiled exclude pattern
    pub fn with_exclude(mut self, exclude: Regex) -> Self {
        self.exclude = Some(exclude);
        self
    }

    /// Largest class/attribute combination to try; at least 1
    pub fn with_max_combination(mut self, max: usize) -> Self {
        self.max_combination = max.max(1);
        self
    }

    pub fn selector_types(&self) -> &[SelectorType] {
        &self.selector_types
    }

    pub fn attribute_patterns(&self) -> &[Regex] {
        &self.attributes
    }

    pub fn max_combination(&self) -> usize {
        self.max_combination
    }

    /// Check whether an id or class value is filtered out
    pub fn is_excluded(&self, value: &str) -> bool {
        self.exclude.as_ref().is_some_and(|re| re.is_match(value))
    }

    /// Non-empty prefixes of the priority order, shortest first
    pub fn priority_levels(&self) -> impl Iterator<Item = &[SelectorType]> + '_ {
        (1..=self.selector_types.len()).map(|len| &self.selector_types[..len])
    }
}

fn compile(pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Serializable form of [`Options`]
///
/// Every field is optional; missing fields take the [`Options`] defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OptionsConfig {
    pub selector_types: Option<Vec<SelectorType>>,
    pub attributes: Option<Vec<String>>,
    pub exclude_regex: Option<String>,
    pub max_combination: Option<usize>,
}

impl TryFrom<OptionsConfig> for Options {
    type Error = ConfigError;

    fn try_from(config: OptionsConfig) -> Result<Self, Self::Error> {
        let mut options = Options::default();
        if let Some(types) = config.selector_types {
            options = options.with_selector_types(types);
        }
        if let Some(patterns) = config.attributes {
            options = options.with_attribute_patterns(patterns)?;
        }
        if let Some(pattern) = config.exclude_regex {
            options = options.with_exclude_pattern(&pattern)?;
        }
        match config.max_combination {
            Some(0) => return Err(ConfigError::InvalidCombinationSize(0)),
            Some(max) => options = options.with_max_combination(max),
            None => {}
        }
        Ok(options)
    }
}
