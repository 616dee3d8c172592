//! Page runtime
//!
//! `Site::init` is the single place where the environment is captured: the
//! tokio runtime, storage, clipboard, backend and toast sink. Everything the
//! page handlers touch afterwards hangs off the returned `Site`.

use crate::catalog::categories;
use crate::error::SiteError;
use indexmap::IndexMap;
use mlweb_core::{KeyValueStore, SiteConfig};
use mlweb_forms::catalog::{form_for, TABS};
use mlweb_forms::{DraftStore, FormPipeline, FormSession, FormType, SimulatedSubmitter, Submitter};
use mlweb_notify::{NotificationCenter, NotificationSink, ToastId, TracingSink};
use mlweb_ui::scroll::resolve_anchor;
use mlweb_ui::{
    copy_contact, shortcut, Accordion, AnchorAction, Clipboard, Debouncer, Filter,
    ItemTransition, KeyEvent, LanguagePreference, MemoryClipboard, NavMenu, Portfolio,
    PortfolioItem, ProjectModal, Selection, Shortcut, UiError,
};
use parking_lot::{Mutex, MutexGuard};
use std::fmt;
use std::sync::Arc;
use tokio::runtime::Handle;

/// Environment handed to `Site::init`
pub struct SiteDeps {
    /// Local storage
    pub storage: Arc<dyn KeyValueStore>,
    /// System clipboard
    pub clipboard: Arc<dyn Clipboard>,
    /// Backend; the simulated one when unset
    pub submitter: Option<Arc<dyn Submitter>>,
    /// Toast rendering surface
    pub sink: Arc<dyn NotificationSink>,
    /// Portfolio grid contents
    pub portfolio: Vec<PortfolioItem>,
    /// FAQ entries on the page
    pub faq_len: usize,
}

impl SiteDeps {
    /// Headless environment over `storage`
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            clipboard: Arc::new(MemoryClipboard::new()),
            submitter: None,
            sink: Arc::new(TracingSink),
            portfolio: Vec::new(),
            faq_len: 0,
        }
    }

    /// With clipboard
    #[must_use]
    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    /// With backend
    #[must_use]
    pub fn with_submitter(mut self, submitter: Arc<dyn Submitter>) -> Self {
        self.submitter = Some(submitter);
        self
    }

    /// With toast sink
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    /// With portfolio items
    #[must_use]
    pub fn with_portfolio(mut self, items: Vec<PortfolioItem>) -> Self {
        self.portfolio = items;
        self
    }

    /// With an FAQ of `len` questions
    #[must_use]
    pub fn with_faq(mut self, len: usize) -> Self {
        self.faq_len = len;
        self
    }
}

impl fmt::Debug for SiteDeps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SiteDeps")
            .field("storage", &self.storage)
            .field("sink", &self.sink)
            .field("portfolio", &self.portfolio.len())
            .finish_non_exhaustive()
    }
}

/// Initialized page
pub struct Site {
    config: Arc<SiteConfig>,
    runtime: Handle,
    notifier: NotificationCenter,
    clipboard: Arc<dyn Clipboard>,
    forms: IndexMap<FormType, FormSession>,
    tabs: Selection<FormType>,
    faq: Accordion,
    menu: NavMenu,
    language: LanguagePreference,
    portfolio: Arc<Mutex<Portfolio>>,
    search: Debouncer,
    modal: Option<ProjectModal>,
}

impl fmt::Debug for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Site")
            .field("namespace", &self.config.namespace)
            .field("tab", self.tabs.active())
            .field("language", &self.language.current())
            .field("menu", &self.menu)
            .finish_non_exhaustive()
    }
}

impl Site {
    /// Wire every collaborator and restore persisted state
    ///
    /// # Workflow
    /// 1. Validate the configuration and capture the current runtime
    /// 2. Build the notification center and the form pipeline
    /// 3. Attach the contact forms, restoring their drafts
    /// 4. Restore the language preference and build the portfolio
    ///
    /// # Errors
    /// - `SiteError::Config` for an unusable configuration
    /// - `SiteError::NoRuntime` outside a tokio runtime
    pub fn init(config: SiteConfig, deps: SiteDeps) -> Result<Self, SiteError> {
        config.validate()?;
        let runtime = Handle::try_current().map_err(|_| SiteError::NoRuntime)?;
        let config = Arc::new(config);

        let notifier =
            NotificationCenter::with_handle(config.notifications, deps.sink, runtime.clone());
        let submitter = deps
            .submitter
            .unwrap_or_else(|| Arc::new(SimulatedSubmitter::new(config.submit_delay())));
        let drafts = DraftStore::new(Arc::clone(&deps.storage), Arc::clone(&config));
        let pipeline = FormPipeline::new(
            Arc::clone(&config),
            notifier.clone(),
            submitter,
            runtime.clone(),
        )
        .with_drafts(drafts);

        let forms: IndexMap<FormType, FormSession> = TABS
            .iter()
            .filter_map(|tab| form_for(tab).map(|form| (tab.clone(), form)))
            .map(|(tab, form)| (tab, FormSession::attach(pipeline.clone(), form)))
            .collect();
        let tabs = Selection::new(forms.keys().cloned().collect())?;

        let mut language = LanguagePreference::new(deps.storage, &config)?;
        language.restore();

        let filters: Vec<String> = categories(&deps.portfolio)
            .into_iter()
            .map(str::to_string)
            .collect();
        let filters: Vec<&str> = filters.iter().map(String::as_str).collect();
        let portfolio = Portfolio::new(deps.portfolio, &filters)?;

        tracing::info!(
            namespace = %config.namespace,
            language = %language.current(),
            forms = forms.len(),
            "site initialized"
        );

        Ok(Self {
            search: Debouncer::new(config.search_debounce(), runtime.clone()),
            config,
            runtime,
            notifier,
            clipboard: deps.clipboard,
            forms,
            tabs,
            faq: Accordion::new(deps.faq_len),
            menu: NavMenu::new(),
            language,
            portfolio: Arc::new(Mutex::new(portfolio)),
            modal: None,
        })
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Runtime captured at init
    #[inline]
    #[must_use]
    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    /// Shared toast manager
    #[inline]
    #[must_use]
    pub fn notifier(&self) -> &NotificationCenter {
        &self.notifier
    }

    /// Form of a tab
    #[must_use]
    pub fn form(&self, form_type: &FormType) -> Option<&FormSession> {
        self.forms.get(form_type)
    }

    /// Active tab
    #[inline]
    #[must_use]
    pub fn active_tab(&self) -> &FormType {
        self.tabs.active()
    }

    /// Form of the active tab
    #[must_use]
    pub fn active_form(&self) -> Option<&FormSession> {
        self.forms.get(self.tabs.active())
    }

    /// Tab clicked
    pub fn switch_tab(&mut self, form_type: &FormType) -> bool {
        self.tabs.select(form_type)
    }

    /// Mobile menu
    #[inline]
    #[must_use]
    pub fn menu(&self) -> &NavMenu {
        &self.menu
    }

    /// Mobile menu, mutable
    #[inline]
    pub fn menu_mut(&mut self) -> &mut NavMenu {
        &mut self.menu
    }

    /// FAQ accordion
    #[inline]
    pub fn faq_mut(&mut self) -> &mut Accordion {
        &mut self.faq
    }

    /// Language switcher
    #[inline]
    #[must_use]
    pub fn language(&self) -> &LanguagePreference {
        &self.language
    }

    /// Language button clicked
    ///
    /// # Errors
    /// - `UiError::UnsupportedLanguage` for languages not on the switcher
    pub fn select_language(&mut self, language: &str) -> Result<(), UiError> {
        match self.language.select(language) {
            Err(UiError::Storage(e)) => {
                tracing::warn!(error = %e, "language preference not saved");
                Ok(())
            }
            other => other,
        }
    }

    /// Portfolio gallery
    pub fn portfolio(&self) -> MutexGuard<'_, Portfolio> {
        self.portfolio.lock()
    }

    /// Filter button clicked
    ///
    /// # Errors
    /// - `UiError::UnknownFilter` when no button carries this filter
    pub fn apply_filter(&self, filter: &Filter) -> Result<Vec<ItemTransition>, UiError> {
        self.portfolio.lock().apply_filter(filter)
    }

    /// Search box edited; the search runs once typing settles
    pub fn on_search_input(&self, term: impl Into<String>) {
        let term = term.into();
        let portfolio = Arc::clone(&self.portfolio);
        self.search.call(move || {
            let transitions = portfolio.lock().search(&term);
            tracing::debug!(%term, items = transitions.len(), "portfolio searched");
        });
    }

    /// Portfolio card clicked
    pub fn open_project(&mut self, index: usize) -> Option<&ProjectModal> {
        let modal = self.portfolio.lock().items().get(index).map(ProjectModal::open);
        self.modal = modal;
        self.modal.as_ref()
    }

    /// Project modal, if open
    #[inline]
    #[must_use]
    pub fn modal(&self) -> Option<&ProjectModal> {
        self.modal.as_ref()
    }

    /// Modal close button or backdrop
    pub fn close_modal(&mut self) {
        if let Some(modal) = self.modal.as_mut() {
            modal.close();
        }
    }

    /// Link clicked; `offset_of` looks up element offsets by id
    pub fn on_link_click<F>(&mut self, href: &str, offset_of: F) -> AnchorAction
    where
        F: FnOnce(&str) -> Option<f64>,
    {
        let action = resolve_anchor(href, offset_of);
        if action.closes_menu() {
            self.menu.close();
        }
        action
    }

    /// Contact link right-clicked
    pub async fn copy_contact(&self, href: &str) -> Option<ToastId> {
        copy_contact(self.clipboard.as_ref(), &self.notifier, href).await
    }

    /// Document keydown
    ///
    /// Returns the shortcut that was applied.
    pub async fn on_key(&mut self, event: &KeyEvent) -> Option<Shortcut> {
        let action = shortcut(event)?;
        match action {
            Shortcut::SubmitActiveForm => {
                let session = self.active_form()?.clone();
                session.on_submit().await;
            }
            Shortcut::SwitchTab(idx) => {
                if !self.tabs.select_index(idx) {
                    return None;
                }
            }
            Shortcut::CloseOverlays => {
                self.menu.on_escape();
                self.close_modal();
            }
            Shortcut::PortfolioNext => {
                self.portfolio.lock().focus_next();
            }
            Shortcut::PortfolioPrev => {
                self.portfolio.lock().focus_prev();
            }
            Shortcut::PortfolioOpen => {
                let focused = self.portfolio.lock().focused();
                self.open_project(focused)?;
            }
        }
        Some(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlweb_core::MemoryStore;

    fn site() -> Site {
        let deps = SiteDeps::new(Arc::new(MemoryStore::new()))
            .with_portfolio(vec![PortfolioItem::new("Hotel Morski", "multilingual")]);
        Site::init(SiteConfig::default(), deps).unwrap()
    }

    #[test]
    fn init_requires_runtime() {
        let deps = SiteDeps::new(Arc::new(MemoryStore::new()));
        assert!(matches!(
            Site::init(SiteConfig::default(), deps),
            Err(SiteError::NoRuntime)
        ));
    }

    #[tokio::test]
    async fn init_rejects_bad_config() {
        let deps = SiteDeps::new(Arc::new(MemoryStore::new()));
        let config = SiteConfig::default().with_namespace("  ");
        assert!(matches!(
            Site::init(config, deps),
            Err(SiteError::Config(_))
        ));
    }

    #[tokio::test]
    async fn tabs_follow_shortcuts() {
        let mut site = site();
        assert_eq!(site.active_tab(), &FormType::General);

        let applied = site.on_key(&KeyEvent::new("3").ctrl()).await;
        assert_eq!(applied, Some(Shortcut::SwitchTab(2)));
        assert_eq!(site.active_tab(), &FormType::Audit);
        assert!(site.active_form().is_some());
    }

    #[tokio::test]
    async fn escape_closes_menu_and_modal() {
        let mut site = site();
        site.menu_mut().toggle();
        site.on_key(&KeyEvent::new("Enter")).await;
        assert!(site.modal().is_some());

        site.on_key(&KeyEvent::new("Escape")).await;
        assert!(!site.menu().is_open());
        assert_eq!(
            site.modal().map(ProjectModal::phase),
            Some(mlweb_ui::ModalPhase::Closing)
        );
    }

    #[tokio::test]
    async fn anchor_click_closes_menu() {
        let mut site = site();
        site.menu_mut().toggle();
        let action = site.on_link_click("#kontakt", |_| Some(500.0));
        assert!(matches!(action, AnchorAction::ScrollTo { .. }));
        assert!(!site.menu().is_open());

        site.menu_mut().toggle();
        site.on_link_click("#", |_| None);
        assert!(site.menu().is_open());
    }
}
