//! Tokenizer shared by static and DHCP resolver list parsing.

/// Separators accepted in resolver list values.
///
/// Static values are usually comma separated, DHCP values space separated,
/// and multi-string values arrive with line or NUL separators.
pub const RESOLVER_LIST_DELIMITERS: &[char] = &[',', ' ', '\n', '\0'];

/// Splits `text` on any of `delimiters`, discarding empty tokens.
///
/// Consecutive, leading and trailing delimiters never produce tokens.
///
/// # Examples
///
/// ```
/// use dns_toggle::resolver::split_on_any;
///
/// assert_eq!(split_on_any("a, b,,c ", &[',', ' ']), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_on_any<'a>(text: &'a str, delimiters: &[char]) -> Vec<&'a str> {
    text.split(|c: char| delimiters.contains(&c))
        .filter(|token| !token.is_empty())
        .collect()
}
