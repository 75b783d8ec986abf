//! HTML rendering of composed pages.
//!
//! Content strings are trusted markup from the content table and are emitted
//! pre-escaped. Everything else (dealer data, form echoes, URLs) goes through
//! maud's escaping.

pub mod layout;
pub mod sections;

use crate::adapters::ImageCdn;
use crate::core::composer::Page;
use crate::domain::model::{Currency, Language, UserPreferences};
use crate::domain::ports::ContentProvider;
use maud::{Markup, PreEscaped};

/// Rendering context for one request. Holds the dependencies every section
/// needs; sections receive it explicitly.
pub struct Renderer<'a> {
    content: &'a dyn ContentProvider,
    cdn: &'a ImageCdn,
    preferences: UserPreferences,
    year: i32,
}

impl<'a> Renderer<'a> {
    pub fn new(
        content: &'a dyn ContentProvider,
        cdn: &'a ImageCdn,
        preferences: UserPreferences,
        year: i32,
    ) -> Self {
        Self {
            content,
            cdn,
            preferences,
            year,
        }
    }

    pub fn language(&self) -> Language {
        self.preferences.language
    }

    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Localized text as markup.
    pub fn t(&self, key: &str) -> PreEscaped<String> {
        PreEscaped(self.content.get_content(key, self.language()))
    }

    /// Localized text for attribute values and other plain-text slots.
    pub fn text(&self, key: &str) -> String {
        self.content.get_content(key, self.language())
    }

    pub fn image_url(&self, path: &str, width: u32) -> String {
        self.cdn.url(path, Some(width))
    }

    pub fn price(&self, amount: u32) -> String {
        let currency = self.preferences.currency.unwrap_or(Currency::Inr);
        format!("{}{}", currency.symbol(), group_indian(amount))
    }

    pub fn render_page(&self, page: &Page) -> Markup {
        let body = maud::html! {
            @for section in &page.sections {
                (sections::render_section(self, section))
            }
        };
        layout::page_shell(self, page.route, body)
    }
}

/// Indian digit grouping: the last three digits, then pairs (`1,18,000`).
pub fn group_indian(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::composer::{compose, PageRequest, PageRoute};
    use crate::core::content::ContentStore;
    use crate::domain::model::Theme;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(6_490), "6,490");
        assert_eq!(group_indian(42_500), "42,500");
        assert_eq!(group_indian(118_000), "1,18,000");
        assert_eq!(group_indian(12_345_678), "1,23,45,678");
    }

    #[test]
    fn test_renders_in_selected_language() {
        let store = ContentStore::embedded().unwrap();
        let cdn = ImageCdn::new("https://cdn.example.com/media").unwrap();
        let prefs = UserPreferences {
            language: Language::Hindi,
            theme: Some(Theme::Dark),
            currency: None,
        };

        let page = compose(PageRoute::Home, &PageRequest::new(prefs));
        let html = Renderer::new(&store, &cdn, prefs, 2026)
            .render_page(&page)
            .into_string();

        assert!(html.contains(r#"lang="hi""#));
        assert!(html.contains("theme-dark"));
        assert!(html.contains(&store.get_content("home-hero-title", Language::Hindi)));
        assert!(!html.contains(&store.get_content("home-hero-title", Language::English)));
    }

    #[test]
    fn test_price_uses_rupee_symbol() {
        let store = ContentStore::embedded().unwrap();
        let cdn = ImageCdn::new("https://cdn.example.com/media").unwrap();
        let renderer = Renderer::new(&store, &cdn, UserPreferences::default(), 2026);
        assert_eq!(renderer.price(13_990), "₹13,990");
    }
}
