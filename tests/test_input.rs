use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

use word_shutter::input::{map_event, map_key};
use word_shutter::Command;

fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent {
        code,
        modifiers,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    }
}

#[test]
fn named_keys() {
    assert_eq!(map_key(&press(KeyCode::Enter, KeyModifiers::NONE)), Some(Command::Confirm));
    assert_eq!(map_key(&press(KeyCode::Esc, KeyModifiers::NONE)), Some(Command::Cancel));
    assert_eq!(
        map_key(&press(KeyCode::Backspace, KeyModifiers::NONE)),
        Some(Command::Backspace)
    );
}

#[test]
fn letters_pass_through_with_case() {
    assert_eq!(
        map_key(&press(KeyCode::Char('Q'), KeyModifiers::SHIFT)),
        Some(Command::Char('Q'))
    );
    assert_eq!(map_key(&press(KeyCode::Char('m'), KeyModifiers::NONE)), Some(Command::Char('m')));
}

#[test]
fn ctrl_c_quits() {
    assert_eq!(map_key(&press(KeyCode::Char('c'), KeyModifiers::CONTROL)), Some(Command::Quit));
    assert_eq!(map_key(&press(KeyCode::Char('x'), KeyModifiers::CONTROL)), None);
}

#[test]
fn releases_and_other_events_are_ignored() {
    let mut release = press(KeyCode::Char('a'), KeyModifiers::NONE);
    release.kind = KeyEventKind::Release;
    assert_eq!(map_key(&release), None);
    assert_eq!(map_event(&Event::Resize(80, 24)), None);
    assert_eq!(map_event(&Event::FocusLost), None);
}
