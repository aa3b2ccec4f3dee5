/// Editor usage example: adjusting a video ad tag
use qsedit::{Action, Editor, Field};

fn main() -> Result<(), qsedit::EditorError> {
    let mut editor = Editor::from_url(
        "https://pubads.example/gampad/ads?iu=/123/video&sz=640x480&gdpr=0&correlator=",
    );

    println!("Suggestions: {}", editor.suggestions().join(", "));
    println!();

    editor.dispatch_all([
        // Turn consent on
        Action::EditField {
            index: 2,
            field: Field::Value,
            text: "1".to_string(),
        },
        // Drop the empty correlator
        Action::ToggleSelected(3),
        Action::AddSuggestion("vpmute".to_string()),
        Action::AddCustom {
            key: "cust_params".to_string(),
            value: "section=sports&lang=en".to_string(),
        },
        Action::Compose,
    ])?;

    if let Some(composition) = editor.composition() {
        // https://pubads.example/gampad/ads?iu=%2F123%2Fvideo&sz=640x480&gdpr=1&vpmute=&cust_params=section%3Dsports%26lang%3Den
        println!("Generated: {composition}");
        for key in &composition.excluded_original_keys {
            println!("Excluded: {key}"); // correlator
        }
    }

    Ok(())
}
