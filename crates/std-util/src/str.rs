/// Converts a camel-case name to its lower underscore form.
///
/// `orderDate` becomes `order_date`. Names that are already lower snake case
/// are returned unchanged.
pub fn to_underscore_name(src: &str) -> String {
    let mut chars = src.chars();

    let Some(first) = chars.next() else {
        return String::new();
    };

    let mut ret = String::with_capacity(src.len() + 4);
    ret.extend(first.to_lowercase());

    for ch in chars {
        if ch.is_uppercase() {
            ret.push('_');
            ret.extend(ch.to_lowercase());
        } else {
            ret.push(ch);
        }
    }

    ret
}

/// Returns `true` if the string is empty or only contains whitespace.
pub fn is_blank(src: &str) -> bool {
    src.chars().all(char::is_whitespace)
}

/// Returns `None` for blank strings, otherwise the string itself.
pub fn non_blank(src: Option<&str>) -> Option<&str> {
    src.filter(|s| !is_blank(s))
}
