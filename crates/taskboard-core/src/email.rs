use std::sync::OnceLock;

use regex::Regex;

/// Whitespace as browsers define it for
/// `\s`. Unicode `White_Space` differs:
/// it lacks U+FEFF and adds U+0085.
const WHITESPACE_CLASS: &str = r"\t\n\x0B\x0C\r\x20\xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

fn email_regex() -> Option<&'static Regex>
{
  static EMAIL_RE: OnceLock<
    Option<Regex>
  > = OnceLock::new();
  EMAIL_RE
    .get_or_init(|| {
      let part =
        format!("[^{WHITESPACE_CLASS}@]+");
      Regex::new(&format!(
        r"^{part}@{part}\.{part}$"
      ))
      .ok()
    })
    .as_ref()
}

/// Syntactic sanity check only: a
/// local part, `@`, and a dotted
/// domain, none of them containing
/// whitespace or another `@`.
pub fn is_valid_email(
  candidate: &str
) -> bool {
  email_regex().is_some_and(|re| {
    re.is_match(candidate)
  })
}

/// Splits a comma separated input into
/// trimmed, non-empty parts in input
/// order.
pub fn split_email_input(
  raw: &str
) -> Vec<String> {
  raw
    .split(',')
    .map(str::trim)
    .filter(|part| !part.is_empty())
    .map(str::to_string)
    .collect()
}

pub fn invalid_emails(
  parts: &[String]
) -> Vec<String> {
  parts
    .iter()
    .filter(|part| {
      !is_valid_email(part)
    })
    .cloned()
    .collect()
}

/// First character of the email,
/// uppercased. Used for the compact
/// assignee badge.
pub fn badge_initial(
  email: &str
) -> String {
  email
    .chars()
    .next()
    .map(|first| {
      first.to_uppercase().collect()
    })
    .unwrap_or_default()
}
