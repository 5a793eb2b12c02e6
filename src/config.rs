//! Engine configuration.

/// Options controlling registration and argument conversion.
///
/// Lexical tokens are not configurable; see [`crate::base::constants`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "interchange", serde(default))]
pub struct EngineConfig {
    /// Synthesize a zero-argument constructor for types registered without any.
    pub implicit_default_constructor: bool,
    /// Convert a `String` argument written as `"x"` to `x`.
    pub strip_string_quotes: bool,
    /// Upper bound on repeated completion steps in `auto_complete`.
    pub max_autocomplete_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            implicit_default_constructor: true,
            strip_string_quotes: true,
            max_autocomplete_steps: 32,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether types without constructors get an implicit `new T()`.
    pub fn with_implicit_default_constructor(mut self, enabled: bool) -> Self {
        self.implicit_default_constructor = enabled;
        self
    }

    /// Set whether surrounding double quotes are stripped from string arguments.
    pub fn with_strip_string_quotes(mut self, enabled: bool) -> Self {
        self.strip_string_quotes = enabled;
        self
    }

    /// Set the bound on repeated completion steps.
    pub fn with_max_autocomplete_steps(mut self, steps: usize) -> Self {
        self.max_autocomplete_steps = steps;
        self
    }
}
