#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Editor reducer tests
///
/// Each test drives the editor only through actions, the way a front end
/// would, and checks the record list and the generated URL.
use qsedit::{Action, DEFAULT_SUGGESTIONS, Editor, EditorError, Field};

fn parsed(url: &str) -> Editor {
    let mut editor = Editor::new();
    editor.dispatch(Action::Parse(url.to_string())).unwrap();
    editor
}

fn compose(editor: &mut Editor) -> (String, Vec<String>) {
    editor.dispatch(Action::Compose).unwrap();
    let composition = editor.composition().unwrap();
    (
        composition.url.clone(),
        composition.excluded_original_keys.clone(),
    )
}

#[test]
fn test_new_editor_is_empty() {
    let mut editor = Editor::new();
    assert_eq!(editor.base_path(), "");
    assert!(editor.records().is_empty());
    assert!(editor.composition().is_none());
    assert_eq!(compose(&mut editor).0, "?");
}

#[test]
fn test_parse_then_compose() {
    let mut editor = parsed("http://x.com/a?foo=1&bar=2 3");
    let (url, excluded) = compose(&mut editor);
    assert_eq!(url, "http://x.com/a?foo=1&bar=2%203");
    assert!(excluded.is_empty());
}

#[test]
fn test_toggle_original_reports_excluded() {
    let mut editor = parsed("/p?foo=1&bar=2");
    editor.dispatch(Action::ToggleSelected(0)).unwrap();
    let (url, excluded) = compose(&mut editor);
    assert_eq!(url, "/p?bar=2");
    assert_eq!(excluded, vec!["foo"]);
}

#[test]
fn test_excluded_key_uses_edited_name() {
    let mut editor = parsed("/p?foo=1");
    editor
        .dispatch(Action::EditField {
            index: 0,
            field: Field::Key,
            text: "renamed".to_string(),
        })
        .unwrap();
    editor.dispatch(Action::ToggleSelected(0)).unwrap();
    assert_eq!(compose(&mut editor).1, vec!["renamed"]);
}

#[test]
fn test_add_custom_empty_key_or_value_is_noop() {
    let mut editor = parsed("/p?a=1");
    let before = editor.records().clone();

    for (key, value) in [("", "v"), ("k", ""), ("", "")] {
        editor
            .dispatch(Action::AddCustom {
                key: key.to_string(),
                value: value.to_string(),
            })
            .unwrap();
    }
    assert_eq!(editor.records(), &before);
}

#[test]
fn test_add_custom_appends_selected_not_original() {
    let mut editor = parsed("/p?a=1");
    editor
        .dispatch(Action::AddCustom {
            key: "gdpr".to_string(),
            value: "1".to_string(),
        })
        .unwrap();

    let added = editor.records().get(1).unwrap();
    assert!(added.selected);
    assert!(!added.original);

    // Deselected added records are never reported
    editor.dispatch(Action::ToggleSelected(1)).unwrap();
    let (url, excluded) = compose(&mut editor);
    assert_eq!(url, "/p?a=1");
    assert!(excluded.is_empty());
}

#[test]
fn test_add_duplicate_key() {
    let mut editor = parsed("/p?a=1");
    editor
        .dispatch(Action::AddCustom {
            key: "a".to_string(),
            value: "2".to_string(),
        })
        .unwrap();
    assert_eq!(compose(&mut editor).0, "/p?a=1&a=2");
}

#[test]
fn test_add_suggestion() {
    let mut editor = parsed("/p?url=x");
    assert!(!editor.suggestions().contains(&"url"));
    assert_eq!(editor.suggestions().len(), DEFAULT_SUGGESTIONS.len() - 1);

    editor
        .dispatch(Action::AddSuggestion("vpmute".to_string()))
        .unwrap();
    assert!(!editor.suggestions().contains(&"vpmute"));
    assert_eq!(compose(&mut editor).0, "/p?url=x&vpmute=");
}

#[test]
fn test_remove_restores_suggestion() {
    let mut editor = parsed("/p?gdpr=1&a=2");
    assert!(!editor.suggestions().contains(&"gdpr"));
    editor.dispatch(Action::Remove(0)).unwrap();
    assert!(editor.suggestions().contains(&"gdpr"));

    // Removed originals are gone, not excluded
    let (url, excluded) = compose(&mut editor);
    assert_eq!(url, "/p?a=2");
    assert!(excluded.is_empty());
}

#[test]
fn test_edit_value_is_escaped_on_compose() {
    let mut editor = parsed("/p?redirect=home");
    editor
        .dispatch(Action::EditField {
            index: 0,
            field: Field::Value,
            text: "https://x.com/?a=1&b=2".to_string(),
        })
        .unwrap();
    assert_eq!(
        compose(&mut editor).0,
        "/p?redirect=https:%2F%2Fx.com%2F%3Fa%3D1%26b%3D2"
    );
}

#[test]
fn test_index_out_of_range() {
    let mut editor = parsed("/p?a=1");
    let err = editor
        .dispatch(Action::EditField {
            index: 1,
            field: Field::Value,
            text: "x".to_string(),
        })
        .unwrap_err();
    assert_eq!(err, EditorError::IndexOutOfRange { index: 1, len: 1 });
    assert_eq!(err.to_string(), "Record index 1 out of range (1 records)");
}

#[test]
fn test_compose_is_recomputed() {
    let mut editor = parsed("/p?a=1");
    assert_eq!(compose(&mut editor).0, "/p?a=1");
    editor.dispatch(Action::ToggleSelected(0)).unwrap();
    // The stored composition only changes on the next Compose
    assert_eq!(editor.composition().unwrap().url, "/p?a=1");
    assert_eq!(compose(&mut editor).0, "/p?");
}
