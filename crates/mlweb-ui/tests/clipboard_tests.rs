use mlweb_core::NotificationTimings;
use mlweb_notify::{Kind, NotificationCenter};
use mlweb_ui::clipboard::COPY_FAILED;
use mlweb_ui::{copy_contact, copy_text};
use mlweb_test_utils::{RecordingClipboard, RecordingSink};
use pretty_assertions::assert_eq;

#[tokio::test(start_paused = true)]
async fn test_email_link_copies_address() {
    let sink = RecordingSink::shared();
    let center = NotificationCenter::new(NotificationTimings::default(), sink.clone()).unwrap();
    let clipboard = RecordingClipboard::default();

    copy_contact(&clipboard, &center, "mailto:kontakt@mlweb.pl").await;
    copy_text(&clipboard, &center, "PL 1234").await;

    assert_eq!(clipboard.written(), vec!["kontakt@mlweb.pl", "PL 1234"]);
    assert_eq!(
        sink.messages(),
        vec!["Email skopiowany do schowka!", "Skopiowano do schowka!"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_denied_clipboard_never_propagates() {
    let sink = RecordingSink::shared();
    let center = NotificationCenter::new(NotificationTimings::default(), sink.clone()).unwrap();
    let clipboard = RecordingClipboard::denying();

    let id = copy_contact(&clipboard, &center, "tel:+48600100200").await;
    assert!(id.is_some());
    let toast = sink.last_shown().unwrap();
    assert_eq!(toast.message, COPY_FAILED);
    assert_eq!(toast.kind, Kind::Error);
    assert!(clipboard.written().is_empty());
}
