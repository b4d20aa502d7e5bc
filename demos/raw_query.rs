/// Raw query string usage example
use rawquery::raw_query;

fn main() {
    // The part after `?`, e.g. taken from a parsed URL
    let mut query = String::from("q=a+pretty+long+query&first=11;page=2&brightness=90%");

    // Read one value without parsing everything else
    println!("q: {:?}", raw_query::get(&query, "q")); // Ok(Some("a pretty long query"))
    println!("has page: {}", raw_query::has(&query, "page")); // true

    // A bad escape is reported, not silently dropped
    println!("brightness: {:?}", raw_query::get(&query, "brightness"));
    println!();

    // Edit in place; untouched pairs keep their text and separators
    raw_query::set(&mut query, "page", "3");
    println!("After set: {query}"); // q=a+pretty+long+query&first=11;page=3&brightness=90%

    raw_query::add(&mut query, "tag", ["news", "daily"]);
    println!("After add: {query}"); // ...&tag=news&tag=daily

    let first = raw_query::extract(&mut query, "first");
    println!("Extracted first: {first:?}"); // Ok(Some("11"))
    println!("After extract: {query}");

    raw_query::delete_all(&mut query, "tag");
    println!("After delete_all: {query}"); // q=a+pretty+long+query&page=3&brightness=90%
}
