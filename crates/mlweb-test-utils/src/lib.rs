//! Testing utilities for MLWeb workspace
//!
//! Shared fakes and fixtures.

#![allow(missing_docs)]

use async_trait::async_trait;
use mlweb_core::{KeyValueStore, SiteConfig, StorageError};
use mlweb_forms::{catalog, FormPipeline, Receipt, SubmitError, Submission, Submitter};
use mlweb_notify::{NotificationCenter, NotificationSink, Toast, ToastId};
use mlweb_ui::{Clipboard, ClipboardError, PortfolioItem};
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::runtime::Handle;

pub use mlweb_forms::catalog::{audit_form, general_form, project_form};

#[derive(Debug, Clone, PartialEq)]
pub enum SinkEvent {
    Shown(Toast),
    Exiting(ToastId),
    Removed(ToastId),
}

/// Sink that records every call
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SinkEvent>>,
}

impl RecordingSink {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn events(&self) -> Vec<SinkEvent> {
        self.events.lock().clone()
    }

    pub fn shown(&self) -> Vec<Toast> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                SinkEvent::Shown(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.shown().into_iter().map(|t| t.message).collect()
    }

    pub fn last_shown(&self) -> Option<Toast> {
        self.shown().pop()
    }

    pub fn removals(&self, id: ToastId) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| **e == SinkEvent::Removed(id))
            .count()
    }

    pub fn exits(&self, id: ToastId) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|e| **e == SinkEvent::Exiting(id))
            .count()
    }
}

impl NotificationSink for RecordingSink {
    fn show(&self, toast: &Toast) {
        self.events.lock().push(SinkEvent::Shown(toast.clone()));
    }

    fn exit(&self, id: ToastId) {
        self.events.lock().push(SinkEvent::Exiting(id));
    }

    fn remove(&self, id: ToastId) {
        self.events.lock().push(SinkEvent::Removed(id));
    }
}

/// Store whose every operation fails, like storage disabled by the browser
#[derive(Debug, Default)]
pub struct FailingStore;

impl KeyValueStore for FailingStore {
    fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("storage disabled".to_string()))
    }
}

/// Clipboard that keeps what was written, or refuses everything
#[derive(Debug, Default)]
pub struct RecordingClipboard {
    written: Mutex<Vec<String>>,
    deny: bool,
}

impl RecordingClipboard {
    pub fn denying() -> Self {
        Self {
            written: Mutex::default(),
            deny: true,
        }
    }

    pub fn written(&self) -> Vec<String> {
        self.written.lock().clone()
    }
}

#[async_trait]
impl Clipboard for RecordingClipboard {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.deny {
            return Err(ClipboardError::Denied);
        }
        self.written.lock().push(text.to_string());
        Ok(())
    }
}

/// Backend that answers immediately
#[derive(Debug, Default)]
pub struct InstantSubmitter {
    received: Mutex<Vec<Submission>>,
    fail_with: Option<SubmitError>,
}

impl InstantSubmitter {
    pub fn failing(error: SubmitError) -> Self {
        Self {
            received: Mutex::default(),
            fail_with: Some(error),
        }
    }

    pub fn received(&self) -> Vec<Submission> {
        self.received.lock().clone()
    }
}

#[async_trait]
impl Submitter for InstantSubmitter {
    async fn submit(&self, submission: &Submission) -> Result<Receipt, SubmitError> {
        self.received.lock().push(submission.clone());
        match &self.fail_with {
            Some(e) => Err(e.clone()),
            None => Ok(Receipt::now()),
        }
    }
}

/// Center on the current runtime recording into a fresh sink
pub fn recording_center(config: &SiteConfig) -> (NotificationCenter, Arc<RecordingSink>) {
    let sink = RecordingSink::shared();
    let center = NotificationCenter::new(config.notifications, sink.clone()).unwrap();
    (center, sink)
}

/// Pipeline with drafts in `store`, on the current runtime
pub fn pipeline_with(
    config: Arc<SiteConfig>,
    submitter: Arc<dyn Submitter>,
    store: Arc<dyn KeyValueStore>,
) -> (FormPipeline, Arc<RecordingSink>) {
    let (center, sink) = recording_center(&config);
    let drafts = mlweb_forms::DraftStore::new(store, Arc::clone(&config));
    let pipeline =
        FormPipeline::new(config, center, submitter, Handle::current()).with_drafts(drafts);
    (pipeline, sink)
}

pub fn forms() -> Vec<mlweb_forms::Form> {
    catalog::TABS.iter().filter_map(catalog::form_for).collect()
}

pub fn portfolio_items() -> Vec<PortfolioItem> {
    vec![
        PortfolioItem::new("Kancelaria Nowak", "landing business")
            .with_label("Landing page")
            .with_description("Strona dla kancelarii prawnej")
            .with_metrics(["+80% zapytań"]),
        PortfolioItem::new("Sklep Ogrodowy", "ecommerce")
            .with_label("Sklep internetowy")
            .with_description("Sklep z roślinami i akcesoriami"),
        PortfolioItem::new("Hotel Morski", "multilingual business")
            .with_label("Strona wielojęzyczna")
            .with_description("Rezerwacje w trzech językach")
            .with_metrics(["+120% rezerwacji", "3 języki"]),
        PortfolioItem::new("Studio Jogi", "landing")
            .with_label("Landing page")
            .with_description("Zapisy na zajęcia online"),
    ]
}

pub const PORTFOLIO_CATEGORIES: [&str; 4] = ["landing", "ecommerce", "multilingual", "business"];
