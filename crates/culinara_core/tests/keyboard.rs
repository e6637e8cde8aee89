use std::sync::Arc;
use std::time::{Duration, Instant};

use culinara_core::{
    ConstantThemeProbe, Key, KeyAction, KeyEvent, KeyboardControls, MemoryStorage, SettingsStore,
};
use pretty_assertions::assert_eq;

fn settings() -> SettingsStore {
    SettingsStore::new(
        Arc::new(MemoryStorage::new()),
        Arc::new(ConstantThemeProbe(true)),
    )
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent {
        key: Key::Char(c),
        ctrl: true,
        meta: false,
    }
}

#[test]
fn modified_save_and_search_report_intent_and_suppress_default() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let now = Instant::now();

    let dispatch = controls.handle_key(ctrl('s'), &mut settings, now);
    assert_eq!(dispatch.action, KeyAction::Save);
    assert!(dispatch.suppress_default);
    assert!(!settings.show_help());

    let dispatch = controls.handle_key(ctrl('f'), &mut settings, now);
    assert_eq!(dispatch.action, KeyAction::Search);
    assert!(dispatch.suppress_default);
}

#[test]
fn unmodified_save_is_recorded_without_side_effects() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let now = Instant::now();

    let dispatch = controls.handle_key(KeyEvent::plain(Key::Char('s')), &mut settings, now);
    assert_eq!(dispatch.action, KeyAction::Save);
    assert!(!dispatch.suppress_default);
    assert_eq!(controls.last_action(now), KeyAction::Save);
}

#[test]
fn escape_closes_an_open_help_panel() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let now = Instant::now();
    settings.toggle_help();
    assert!(settings.show_help());

    let dispatch = controls.handle_key(KeyEvent::plain(Key::Escape), &mut settings, now);
    assert_eq!(dispatch.action, KeyAction::Close);
    assert!(dispatch.suppress_default);
    assert!(!settings.show_help());
}

#[test]
fn escape_with_help_closed_still_records_close() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let now = Instant::now();

    let dispatch = controls.handle_key(KeyEvent::plain(Key::Escape), &mut settings, now);
    assert_eq!(dispatch.action, KeyAction::Close);
    assert!(!dispatch.suppress_default);
    assert!(!settings.show_help());
    assert_eq!(controls.last_action(now), KeyAction::Close);
}

#[test]
fn help_keys_toggle_the_panel() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let now = Instant::now();

    for key in ['h', '/', '?'] {
        let dispatch = controls.handle_key(KeyEvent::plain(Key::Char(key)), &mut settings, now);
        assert_eq!(dispatch.action, KeyAction::Help, "key {key:?}");
        assert!(dispatch.suppress_default, "key {key:?}");
    }
    // Three toggles: open, closed, open.
    assert!(settings.show_help());
}

#[test]
fn modified_help_does_not_toggle_the_panel() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let now = Instant::now();

    let dispatch = controls.handle_key(ctrl('h'), &mut settings, now);
    assert_eq!(dispatch.action, KeyAction::Help);
    assert!(!dispatch.suppress_default);
    assert!(!settings.show_help());
}

#[test]
fn unmapped_keys_dispatch_none() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let now = Instant::now();

    let dispatch = controls.handle_key(KeyEvent::plain(Key::Char('x')), &mut settings, now);
    assert_eq!(dispatch.action, KeyAction::None);
    assert!(!dispatch.suppress_default);
    assert_eq!(controls.last_action(now), KeyAction::None);
}

#[test]
fn recorded_action_resets_after_the_delay() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let start = Instant::now();

    controls.handle_key(ctrl('s'), &mut settings, start);
    assert_eq!(
        controls.last_action(start + Duration::from_millis(50)),
        KeyAction::Save
    );
    assert_eq!(
        controls.last_action(start + Duration::from_millis(150)),
        KeyAction::None
    );
}

#[test]
fn rapid_presses_converge_on_none_at_the_earliest_deadline() {
    let mut controls = KeyboardControls::new();
    let mut settings = settings();
    let start = Instant::now();

    controls.handle_key(ctrl('s'), &mut settings, start);
    controls.handle_key(ctrl('f'), &mut settings, start + Duration::from_millis(50));

    // The reset scheduled by the first press fires first and wins.
    assert_eq!(
        controls.last_action(start + Duration::from_millis(120)),
        KeyAction::None
    );
}

#[test]
fn shortcut_descriptions_are_exposed_for_display() {
    let shortcuts = KeyboardControls::shortcuts();
    assert_eq!(shortcuts.len(), 5);
    assert_eq!(shortcuts[0].keys, "Ctrl + S");
    assert_eq!(shortcuts[0].action, "Save Recipe");
    assert_eq!(shortcuts[2].keys, "Escape");
}
