use mlweb_core::{FileStore, KeyValueStore, MemoryStore, SiteConfig};
use mlweb_forms::FormType;
use mlweb_notify::Kind;
use mlweb_site::{Site, SiteDeps};
use mlweb_test_utils::{portfolio_items, InstantSubmitter, RecordingClipboard, RecordingSink};
use mlweb_ui::{Filter, KeyEvent, Shortcut};
use pretty_assertions::assert_eq;
use std::sync::Arc;
use std::time::Duration;

fn deps(store: Arc<dyn KeyValueStore>) -> (SiteDeps, Arc<RecordingSink>, Arc<InstantSubmitter>) {
    let sink = RecordingSink::shared();
    let backend = Arc::new(InstantSubmitter::default());
    let deps = SiteDeps::new(store)
        .with_sink(sink.clone())
        .with_submitter(backend.clone())
        .with_clipboard(Arc::new(RecordingClipboard::default()))
        .with_portfolio(portfolio_items())
        .with_faq(4);
    (deps, sink, backend)
}

#[tokio::test(start_paused = true)]
async fn test_draft_and_language_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    {
        let (deps, _, _) = deps(Arc::new(FileStore::open(&path)));
        let mut site = Site::init(SiteConfig::default(), deps).unwrap();
        let project = site.form(&FormType::Project).unwrap();
        project.on_input("name", "Anna").unwrap();
        project.on_input("budget", "5000-10000").unwrap();
        site.select_language("en").unwrap();
    }

    let (deps, _, _) = deps(Arc::new(FileStore::open(&path)));
    let site = Site::init(SiteConfig::default(), deps).unwrap();
    let project = site.form(&FormType::Project).unwrap();
    assert_eq!(project.value("name").as_deref(), Some("Anna"));
    assert_eq!(project.value("budget").as_deref(), Some("5000-10000"));
    assert_eq!(site.language().current(), "en");
}

#[tokio::test(start_paused = true)]
async fn test_project_fields_are_enhanced() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    {
        let (deps, _, _) = deps(Arc::clone(&store));
        let site = Site::init(SiteConfig::default(), deps).unwrap();
        let project = site.form(&FormType::Project).unwrap();

        project.on_input("phone", "600 100 200").unwrap();
        assert_eq!(project.value("phone").as_deref(), Some("+48600100200"));

        project.on_input("type", "landing").unwrap();
        assert!(project.form().lock().field("description").unwrap().placeholder.is_some());
        assert_eq!(project.value("additional_features"), None);

        project.on_input("budget", "5000-10000").unwrap();
        project.on_input("additional_features", "Panel klienta").unwrap();
        project.on_input("description", "Strona firmowa").unwrap();
        assert_eq!(project.counter("description").unwrap().text, "14/1000");

        let audit = site.form(&FormType::Audit).unwrap();
        audit.on_input("website", "mlweb.pl").unwrap();
        audit.on_blur("website").unwrap();
        assert_eq!(audit.value("website").as_deref(), Some("https://mlweb.pl"));
    }

    let (deps, _, _) = deps(store);
    let site = Site::init(SiteConfig::default(), deps).unwrap();
    let project = site.form(&FormType::Project).unwrap();
    assert_eq!(project.value("additional_features").as_deref(), Some("Panel klienta"));
    assert_eq!(project.value("phone").as_deref(), Some("+48600100200"));
    let audit = site.form(&FormType::Audit).unwrap();
    assert_eq!(audit.value("website").as_deref(), Some("https://mlweb.pl"));
}

#[tokio::test(start_paused = true)]
async fn test_ctrl_enter_submits_active_form() {
    let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    let (deps, sink, backend) = deps(Arc::clone(&store));
    let mut site = Site::init(SiteConfig::default(), deps).unwrap();

    site.on_key(&KeyEvent::new("3").meta()).await;
    let audit = site.active_form().unwrap().clone();
    audit.on_input("website", "https://mlweb.pl").unwrap();
    audit.on_input("email", "jan@mlweb.pl").unwrap();

    let applied = site.on_key(&KeyEvent::new("Enter").ctrl().in_input()).await;
    assert_eq!(applied, Some(Shortcut::SubmitActiveForm));
    assert_eq!(backend.received().len(), 1);
    assert_eq!(backend.received()[0].form_type, FormType::Audit);
    assert_eq!(sink.last_shown().unwrap().kind, Kind::Success);
    assert_eq!(audit.value("website").as_deref(), Some(""));

    tokio::time::sleep(Duration::from_millis(3100)).await;
    assert!(!store.contains("mlweb_form_audit").unwrap());
}

#[tokio::test(start_paused = true)]
async fn test_search_input_is_debounced() {
    let (deps, _, _) = deps(Arc::new(MemoryStore::new()));
    let site = Site::init(SiteConfig::default(), deps).unwrap();

    site.on_search_input("sklep");
    tokio::time::sleep(Duration::from_millis(100)).await;
    site.on_search_input("hotel");
    assert_eq!(site.portfolio().visible_items().len(), 4);

    tokio::time::sleep(Duration::from_millis(350)).await;
    let titles: Vec<String> = site
        .portfolio()
        .visible_items()
        .iter()
        .map(|i| i.title.clone())
        .collect();
    assert_eq!(titles, vec!["Hotel Morski"]);
}

#[tokio::test(start_paused = true)]
async fn test_portfolio_filters_and_modal() {
    let (deps, _, _) = deps(Arc::new(MemoryStore::new()));
    let mut site = Site::init(SiteConfig::default(), deps).unwrap();

    site.apply_filter(&Filter::Category("ecommerce".to_string())).unwrap();
    assert_eq!(site.portfolio().visible_items().len(), 1);
    site.apply_filter(&Filter::All).unwrap();
    assert_eq!(site.portfolio().visible_items().len(), 4);
    assert!(site.apply_filter(&Filter::Category("blog".to_string())).is_err());

    site.on_key(&KeyEvent::new("ArrowLeft")).await;
    site.on_key(&KeyEvent::new("Enter")).await;
    assert_eq!(site.modal().unwrap().details().title, "Studio Jogi");

    site.faq_mut().toggle(1);
    assert_eq!(site.faq_mut().open_item(), Some(1));
}

#[tokio::test(start_paused = true)]
async fn test_contact_copy_notifies() {
    let (deps, sink, _) = deps(Arc::new(MemoryStore::new()));
    let site = Site::init(SiteConfig::default(), deps).unwrap();

    site.copy_contact("tel:+48600100200").await;
    assert_eq!(sink.messages(), vec!["Telefon skopiowany do schowka!"]);
    assert!(site.copy_contact("https://mlweb.pl").await.is_none());
}
