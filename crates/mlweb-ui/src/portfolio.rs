//! Portfolio gallery
//!
//! Category filter buttons, a free-text search box and arrow-key focus over
//! the portfolio grid. Filtering returns per-item transitions so a renderer
//! can play the staggered fade-in and the delayed hide.

use crate::error::UiError;
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Delay between consecutive fade-ins
pub const STAGGER: Duration = Duration::from_millis(100);

/// Fade-out length before an item is hidden
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// One portfolio entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioItem {
    /// Project name
    pub title: String,
    /// Filter categories (the `data-category` list)
    pub categories: Vec<String>,
    /// Category caption shown on the card
    pub category_label: String,
    /// Short description
    pub description: String,
    /// Result badges
    pub metrics: Vec<String>,
    /// Cover image
    pub image: String,
}

impl PortfolioItem {
    /// Create from a title and a space-separated category list
    #[must_use]
    pub fn new(title: impl Into<String>, categories: &str) -> Self {
        let categories: Vec<String> = categories.split_whitespace().map(str::to_string).collect();
        Self {
            title: title.into(),
            category_label: categories.join(", "),
            categories,
            description: String::new(),
            metrics: Vec::new(),
            image: String::new(),
        }
    }

    /// With description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With category caption
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.category_label = label.into();
        self
    }

    /// With result badges
    #[must_use]
    pub fn with_metrics<I, S>(mut self, metrics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.metrics = metrics.into_iter().map(Into::into).collect();
        self
    }

    /// With cover image
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Check if the item belongs to a filter
    #[must_use]
    pub fn matches_filter(&self, filter: &Filter) -> bool {
        match filter {
            Filter::All => true,
            Filter::Category(category) => self.categories.iter().any(|c| c == category),
        }
    }

    /// Case-insensitive match on title, category caption or description
    ///
    /// `term` must already be lowercase; an empty term matches everything.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        term.is_empty()
            || self.title.to_lowercase().contains(term)
            || self.category_label.to_lowercase().contains(term)
            || self.description.to_lowercase().contains(term)
    }
}

/// Portfolio filter
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    /// Every item
    All,
    /// Items tagged with a category
    Category(String),
}

impl From<String> for Filter {
    fn from(value: String) -> Self {
        if value == "all" {
            Filter::All
        } else {
            Filter::Category(value)
        }
    }
}

impl From<Filter> for String {
    fn from(value: Filter) -> Self {
        value.to_string()
    }
}

impl FromStr for Filter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.trim().to_string()))
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::All => f.write_str("all"),
            Filter::Category(c) => f.write_str(c),
        }
    }
}

/// Target visibility of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Displayed, fading in
    Shown,
    /// Fading out, then hidden
    Hidden,
}

/// What a renderer should do with one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemTransition {
    /// Position in the grid
    pub index: usize,
    /// Target visibility
    pub visibility: Visibility,
    /// When the change lands (fade-in start, or hide after fade-out)
    pub delay: Duration,
}

/// Transitions for applying `filter`
#[must_use]
pub fn filter_items(items: &[PortfolioItem], filter: &Filter) -> Vec<ItemTransition> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.matches_filter(filter) {
                ItemTransition {
                    index,
                    visibility: Visibility::Shown,
                    delay: STAGGER * u32::try_from(index).unwrap_or(u32::MAX),
                }
            } else {
                ItemTransition {
                    index,
                    visibility: Visibility::Hidden,
                    delay: FADE_OUT,
                }
            }
        })
        .collect()
}

/// Transitions for a search term (no stagger)
#[must_use]
pub fn search_items(items: &[PortfolioItem], term: &str) -> Vec<ItemTransition> {
    let term = term.trim().to_lowercase();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            if item.matches_search(&term) {
                ItemTransition {
                    index,
                    visibility: Visibility::Shown,
                    delay: Duration::ZERO,
                }
            } else {
                ItemTransition {
                    index,
                    visibility: Visibility::Hidden,
                    delay: FADE_OUT,
                }
            }
        })
        .collect()
}

/// Gallery state: items, active filter, visibility and keyboard focus
#[derive(Debug, Clone)]
pub struct Portfolio {
    items: Vec<PortfolioItem>,
    filters: Selection<Filter>,
    visible: Vec<bool>,
    focus: usize,
}

impl Portfolio {
    /// Create a gallery with filter buttons `all` followed by `categories`
    ///
    /// # Errors
    /// - `UiError::EmptySelection` never in practice, `all` is always present
    pub fn new(items: Vec<PortfolioItem>, categories: &[&str]) -> Result<Self, UiError> {
        let mut options = vec![Filter::All];
        options.extend(categories.iter().map(|c| Filter::Category((*c).to_string())));
        let visible = vec![true; items.len()];
        Ok(Self {
            items,
            filters: Selection::new(options)?,
            visible,
            focus: 0,
        })
    }

    /// All items
    #[inline]
    #[must_use]
    pub fn items(&self) -> &[PortfolioItem] {
        &self.items
    }

    /// Active filter
    #[inline]
    #[must_use]
    pub fn active_filter(&self) -> &Filter {
        self.filters.active()
    }

    /// Filter button pressed
    ///
    /// # Errors
    /// - `UiError::UnknownFilter` when no button carries this filter
    pub fn apply_filter(&mut self, filter: &Filter) -> Result<Vec<ItemTransition>, UiError> {
        if !self.filters.select(filter) {
            return Err(UiError::UnknownFilter(filter.to_string()));
        }
        let transitions = filter_items(&self.items, filter);
        self.record(&transitions);
        tracing::debug!(%filter, shown = self.visible_items().len(), "portfolio filtered");
        Ok(transitions)
    }

    /// Search box settled on `term`
    pub fn search(&mut self, term: &str) -> Vec<ItemTransition> {
        let transitions = search_items(&self.items, term);
        self.record(&transitions);
        transitions
    }

    fn record(&mut self, transitions: &[ItemTransition]) {
        for t in transitions {
            self.visible[t.index] = t.visibility == Visibility::Shown;
        }
    }

    /// Items currently displayed
    #[must_use]
    pub fn visible_items(&self) -> Vec<&PortfolioItem> {
        self.items
            .iter()
            .zip(&self.visible)
            .filter(|(_, shown)| **shown)
            .map(|(item, _)| item)
            .collect()
    }

    /// Focused item index
    #[inline]
    #[must_use]
    pub fn focused(&self) -> usize {
        self.focus
    }

    /// ArrowRight: move focus forward, wrapping
    pub fn focus_next(&mut self) -> usize {
        if !self.items.is_empty() {
            self.focus = (self.focus + 1) % self.items.len();
        }
        self.focus
    }

    /// ArrowLeft: move focus back, wrapping
    pub fn focus_prev(&mut self) -> usize {
        if !self.items.is_empty() {
            self.focus = if self.focus == 0 {
                self.items.len() - 1
            } else {
                self.focus - 1
            };
        }
        self.focus
    }

    /// Focused item, if any
    #[must_use]
    pub fn focused_item(&self) -> Option<&PortfolioItem> {
        self.items.get(self.focus)
    }
}
