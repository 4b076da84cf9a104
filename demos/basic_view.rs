/// Basic Record Store Example
///
/// This example demonstrates:
/// - Decoding a JSON payload into records
/// - Loading the working set into a store
/// - Paging through the records
/// - Reading the view output

use rowscope::{Decoder, JsonDecoder, RecordStore, Value};

fn main() {
    println!("=== Rowscope Basic View Example ===\n");

    // 1. Decode a payload
    println!("1. Decoding payload...");
    let payload = br#"[
        {"id": 1, "name": "Alice", "age": 30},
        {"id": 2, "name": "Bob", "age": 25},
        {"id": 3, "name": "Carol", "age": 41},
        {"id": 4, "name": "Dave", "age": 35},
        {"id": 5, "name": "Erin", "age": 28}
    ]"#;
    let decoded = JsonDecoder::new().decode(payload).unwrap();
    println!(
        "   Decoded {} records ({} bytes)\n",
        decoded.records.len(),
        decoded.meta.byte_size
    );

    // 2. Show the inferred schema
    println!("2. Schema fields:");
    for field in &decoded.meta.schema {
        println!("   {} ({})", field.name, field.type_name);
    }
    println!();

    // 3. Load the store with a small page size
    println!("3. Loading store (page size 2)...");
    let mut store = RecordStore::with_page_size(2);
    store.load(decoded.records);
    println!(
        "   {} records across {} pages\n",
        store.len(),
        store.total_pages()
    );

    // 4. Walk the pages
    println!("4. Paging through records:");
    loop {
        let view = store.page_view();
        println!(
            "   Page {}/{} (records {}-{} of {}):",
            view.current_page,
            view.total_pages,
            view.start_index + 1,
            view.end_index,
            view.filtered_count
        );
        for record in &view.records {
            println!(
                "      {} - age {}",
                record.get("name").and_then(Value::as_str).unwrap_or("?"),
                record.get("age").and_then(Value::as_i64).unwrap_or(0)
            );
        }
        if view.current_page == view.total_pages {
            break;
        }
        store.next_page();
    }

    println!("\n=== Example Complete ===");
}
