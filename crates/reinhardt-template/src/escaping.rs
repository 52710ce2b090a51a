//! HTML escaping
//!
//! Escaped characters:
//! - `<` → `&lt;`
//! - `>` → `&gt;`
//! - `&` → `&amp;`
//! - `"` → `&quot;`
//! - `'` → `&#x27;`
//!
//! Attribute escaping additionally replaces the backtick, which some
//! legacy parsers treat as an attribute quote.

/// Escape HTML special characters
///
/// # Examples
///
/// ```
/// use reinhardt_template::escape_html;
///
/// assert_eq!(escape_html("<script>alert('XSS')</script>"),
///            "&lt;script&gt;alert(&#x27;XSS&#x27;)&lt;/script&gt;");
/// assert_eq!(escape_html("Hello & goodbye"), "Hello &amp; goodbye");
/// ```
pub fn escape_html(s: &str) -> String {
	escape_into(s, false)
}

/// Escape a value for use inside a double-quoted HTML attribute
///
/// # Examples
///
/// ```
/// use reinhardt_template::escape_html_attr;
///
/// assert_eq!(escape_html_attr(r#"value with "quotes""#),
///            "value with &quot;quotes&quot;");
/// assert_eq!(escape_html_attr("a`b"), "a&#x60;b");
/// ```
pub fn escape_html_attr(s: &str) -> String {
	escape_into(s, true)
}

fn escape_into(s: &str, attribute: bool) -> String {
	let mut out = String::with_capacity(s.len());
	for c in s.chars() {
		match c {
			'<' => out.push_str("&lt;"),
			'>' => out.push_str("&gt;"),
			'&' => out.push_str("&amp;"),
			'"' => out.push_str("&quot;"),
			'\'' => out.push_str("&#x27;"),
			'`' if attribute => out.push_str("&#x60;"),
			_ => out.push(c),
		}
	}
	out
}
