use serde::{Deserialize, Serialize};

use crate::utils::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub(crate) enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub const ATTR_NAME: &'static str = "data-theme";

    pub(crate) const fn scheme(self) -> &'static str {
        use Theme::*;
        match self {
            Light => "light",
            Dark => "dark",
        }
    }

    pub(crate) const fn flipped(self) -> Self {
        use Theme::*;
        match self {
            Light => Dark,
            Dark => Light,
        }
    }

    fn update_html(self) {
        use gloo::utils::document;
        let html = document()
            .query_selector("html")
            .expect("query must be correct")
            .expect("must have html element");
        log::debug!("theme-scheme: {}", self.scheme());
        if let Err(err) = html.set_attribute(Self::ATTR_NAME, self.scheme()) {
            log::error!("failed to set theme: {:?}", err);
        }
    }

    /// Applies the stored choice, or the default, to the document.
    pub(crate) fn init() {
        let theme: Self = LocalOrDefault::local_or_default();
        theme.update_html();
    }

    /// Persists the choice and restyles the document.
    pub(crate) fn apply(self) {
        self.local_save();
        self.update_html();
    }
}

impl Default for Theme {
    /// The game opens dark.
    fn default() -> Self {
        Self::Dark
    }
}

impl StorageKey for Theme {
    const KEY: &'static str = "tresito:theme";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flipping_twice_is_identity() {
        assert_eq!(Theme::Light.flipped(), Theme::Dark);
        assert_eq!(Theme::Dark.flipped().flipped(), Theme::Dark);
    }

    #[test]
    fn schemes_match_the_css_attribute_values() {
        assert_eq!(Theme::Light.scheme(), "light");
        assert_eq!(Theme::Dark.scheme(), "dark");
    }
}
