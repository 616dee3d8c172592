//! Project details modal

use crate::portfolio::PortfolioItem;
use std::time::Duration;

/// Fade length of the modal
pub const MODAL_FADE: Duration = Duration::from_millis(300);

/// Content of the project modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDetails {
    /// Project name
    pub title: String,
    /// Description paragraph
    pub description: String,
    /// Result badges
    pub metrics: Vec<String>,
    /// Cover image
    pub image: String,
}

impl From<&PortfolioItem> for ProjectDetails {
    fn from(item: &PortfolioItem) -> Self {
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            metrics: item.metrics.clone(),
            image: item.image.clone(),
        }
    }
}

/// Modal lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalPhase {
    /// Fading in
    Opening,
    /// Fully visible
    Open,
    /// Fading out, removed after `MODAL_FADE`
    Closing,
}

/// Open project modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectModal {
    details: ProjectDetails,
    phase: ModalPhase,
}

impl ProjectModal {
    /// Modal for a clicked portfolio card
    #[must_use]
    pub fn open(item: &PortfolioItem) -> Self {
        Self {
            details: ProjectDetails::from(item),
            phase: ModalPhase::Opening,
        }
    }

    /// Content
    #[inline]
    #[must_use]
    pub fn details(&self) -> &ProjectDetails {
        &self.details
    }

    /// Current phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> ModalPhase {
        self.phase
    }

    /// Fade-in finished
    pub fn shown(&mut self) {
        if self.phase == ModalPhase::Opening {
            self.phase = ModalPhase::Open;
        }
    }

    /// Close button pressed
    pub fn close(&mut self) {
        self.phase = ModalPhase::Closing;
    }

    /// Click inside the modal; only the backdrop closes it
    pub fn on_click(&mut self, on_backdrop: bool) {
        if on_backdrop {
            self.close();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modal_lifecycle() {
        let item = PortfolioItem::new("Hotel Morski", "multilingual")
            .with_metrics(["+120% rezerwacji", "3 języki"]);
        let mut modal = ProjectModal::open(&item);
        assert_eq!(modal.phase(), ModalPhase::Opening);
        assert_eq!(modal.details().metrics.len(), 2);

        modal.shown();
        modal.on_click(false);
        assert_eq!(modal.phase(), ModalPhase::Open);

        modal.on_click(true);
        assert_eq!(modal.phase(), ModalPhase::Closing);
    }
}
