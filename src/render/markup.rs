/// Escape text for use in element content and quoted attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Concatenate one fragment per item, preserving order.
pub fn join_map<T>(items: &[T], f: impl Fn(&T) -> String) -> String {
    items.iter().map(f).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/render/markup.rs"]
mod tests;
