use mescape::{
    cookie_matcher_for_metadata, escape_metadata, header_matcher_for_metadata,
    query_matcher_for_metadata,
};

fn main() {
    let value = "b=o\th";

    // Escape once for transport
    println!("Escaped: {}", escape_metadata(value)); // b=o%09h

    // Match it back, however it was escaped upstream
    let header = header_matcher_for_metadata(value);
    println!("Header: {header} (regex: {})", header.is_regex()); // b(%3D|=)o%09h (regex: true)
    println!("Cookie: {}", cookie_matcher_for_metadata(value)); // b(%3D|=)o%09h
    println!("Query: {}", query_matcher_for_metadata(value)); // b%3Do%09h
}
