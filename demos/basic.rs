use qsedit::{compose, escape, parse};

fn main() {
    // Parse a URL into its base path and parameters
    let mut parsed = parse("https://example.com/watch?v=abc123&t=42&list=PL x");

    println!("Base: {}", parsed.base_path); // https://example.com/watch
    for record in &parsed.records {
        println!("  {} = {}", record.key, record.value); // v = abc123, t = 42, list = PL x
    }

    // Leave out the timestamp
    if let Some(record) = parsed.records.get_mut(1) {
        record.selected = false;
    }

    let composition = compose(&parsed.base_path, &parsed.records);
    println!("URL: {composition}"); // https://example.com/watch?v=abc123&list=PL%20x
    println!("Excluded: {:?}", composition.excluded_original_keys); // ["t"]

    println!("Escaped: {}", escape("a/b c?")); // a%2Fb%20c%3F
}
