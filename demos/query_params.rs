/// `QueryParams` usage example
use rawquery::QueryParams;

fn main() {
    // Parse a query string; pairs that fail to decode are kept as-is
    let (mut params, errors) = QueryParams::parse("q=100%25+truth&a=1&b=2&brightness=90%");
    if let Some(errors) = errors {
        println!("Decode errors: {errors}"); // invalid URL escape "%"
    }
    println!("Parsed: {params:?}");
    println!();

    // Get values
    println!("q: {:?}", params.get("q")); // Some("100% truth")
    println!("brightness: {:?}", params.get("brightness")); // Some("90%")
    println!();

    // Add, set, extract
    params.add("c", ["3", "4"]);
    params.set("b", "5");
    println!("After add/set: {params}"); // q=100%25+truth&a=1&b=5&brightness=90%25&c=3&c=4

    let values = params.extract_all("c");
    println!("Extracted c: {values:?}"); // ["3", "4"]
    println!();

    // Sort alphabetically, or put chosen keys first
    params.sort();
    println!("After sort: {params}"); // a=1&b=5&brightness=90%25&q=100%25+truth

    params.set_order(["q", "brightness"]);
    println!("After set_order: {params}"); // q=100%25+truth&brightness=90%25&a=1&b=5

    // Iterate over all parameters
    println!("All parameters:");
    for param in &params {
        println!("  {} = {}", param.key, param.value);
    }
}
