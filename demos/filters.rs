/// Filter Expression Example
///
/// This example demonstrates:
/// - Structured comparison filters (field, operator, literal)
/// - The substring fallback for free-text filters
/// - How filtering interacts with pagination

use rowscope::{parse, Predicate, RecordStore, Value};

fn main() {
    println!("=== Rowscope Filter Example ===\n");

    // 1. Build a working set
    println!("1. Loading 100 records...");
    let records: Vec<Value> = (0..100)
        .map(|i| {
            Value::Object(vec![
                ("id".to_string(), Value::Int(i)),
                (
                    "name".to_string(),
                    Value::from(format!("user{:03}", i)),
                ),
                ("score".to_string(), Value::Float(i as f64 * 1.5)),
                ("active".to_string(), Value::Bool(i % 3 == 0)),
            ])
        })
        .collect();

    let mut store = RecordStore::with_page_size(10);
    store.load(records);
    println!("   {} records loaded\n", store.len());

    // 2. Show how expressions classify
    println!("2. Expression classification:");
    for expr in ["score >= 120", "name = user042", "user04", "active = true"] {
        match parse(expr) {
            Predicate::Comparison { field, op, literal } => {
                println!("   '{}' -> {} {} {}", expr, field, op.symbol(), literal)
            }
            Predicate::Unparsed => println!("   '{}' -> substring search", expr),
        }
    }
    println!();

    // 3. Structured comparisons
    println!("3. Applying 'score >= 120'...");
    store.set_filter("score >= 120");
    println!(
        "   {} of {} records match, {} pages\n",
        store.filtered_count(),
        store.len(),
        store.total_pages()
    );

    // 4. Substring fallback
    println!("4. Applying free text 'user04'...");
    store.set_filter("user04");
    for record in store.page() {
        println!(
            "   {}",
            record.get("name").and_then(Value::as_str).unwrap_or("?")
        );
    }
    println!();

    // 5. Filter changes reset pagination
    println!("5. Filter changes reset to page 1:");
    store.clear_filter();
    store.set_page(5);
    println!("   On page {} unfiltered", store.current_page());
    store.set_filter("active = true");
    println!("   After filtering: page {}\n", store.current_page());

    println!("=== Example Complete ===");
}
