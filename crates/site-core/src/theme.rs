use std::fmt;
use std::str::FromStr;

/// Colour scheme stored on the document root as `data-theme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ThemeParseError(pub String);

impl Theme {
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Theme selected by the switch control: checked means dark.
    #[inline]
    pub fn from_switch(checked: bool) -> Self {
        if checked {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
