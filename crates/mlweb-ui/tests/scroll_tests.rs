use mlweb_ui::counter::CounterTarget;
use mlweb_ui::parallax::Parallax;
use mlweb_ui::scroll::{current_section, header_scrolled, Section};
use mlweb_ui::{shortcut, KeyEvent, Shortcut};
use std::time::Duration;

#[test]
fn test_scroll_spy_follows_page() {
    let sections = vec![
        Section::new("start", 0.0, 700.0),
        Section::new("o-nas", 700.0, 600.0),
        Section::new("portfolio", 1300.0, 900.0),
    ];
    let mut seen = Vec::new();
    for y in (0..2000).step_by(100) {
        let id = current_section(&sections, f64::from(y)).unwrap();
        if seen.last() != Some(&id) {
            seen.push(id);
        }
    }
    assert_eq!(seen, vec!["start", "o-nas", "portfolio"]);
    assert!(header_scrolled(150.0));
}

#[test]
fn test_parallax_layers_move_at_increasing_speed() {
    let parallax = Parallax::new(&[(0.0, 1000.0), (0.0, 1000.0)], false);
    let offsets = parallax.on_scroll(100.0, 800.0);
    assert_eq!(offsets.len(), 2);
    assert!(offsets[1].1 < offsets[0].1);
}

#[test]
fn test_counter_keeps_suffix() {
    let frames = CounterTarget::parse("24h").unwrap().frames(Duration::from_millis(2000));
    assert!(frames.iter().all(|f| f.ends_with('h')));
    assert_eq!(frames.last().map(String::as_str), Some("24h"));
}

#[test]
fn test_shortcuts_cover_tabs() {
    let tabs: Vec<_> = ["1", "2", "3"]
        .iter()
        .filter_map(|k| shortcut(&KeyEvent::new(*k).ctrl()))
        .collect();
    assert_eq!(
        tabs,
        vec![Shortcut::SwitchTab(0), Shortcut::SwitchTab(1), Shortcut::SwitchTab(2)]
    );
}
