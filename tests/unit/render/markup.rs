use super::*;

#[test]
fn escapes_markup_and_quotes() {
    assert_eq!(
        html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
        "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
    );
    assert_eq!(html_escape("plain"), "plain");
}

#[test]
fn join_map_preserves_order() {
    let out = join_map(&["a", "b", "c"], |s| format!("[{s}]"));
    assert_eq!(out, "[a][b][c]");
    assert_eq!(join_map::<&str>(&[], |s| s.to_string()), "");
}
