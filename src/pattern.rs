use crate::route::Params;
use anyhow::{bail, Result};
use regex::Regex;

/// A compiled route pattern. Immutable once built; matching is anchored so the
/// whole path must satisfy the pattern, not a substring of it.
#[derive(Debug, Clone)]
pub struct Matcher {
	regex: Regex,
}

impl Matcher {
	/// Test `path` against the pattern. On a match, returns the captured
	/// placeholder values keyed by name, in pattern occurrence order.
	///
	/// Values are the raw path text; no percent-decoding is performed.
	pub fn match_path(&self, path: &str) -> Option<Params> {
		let caps = self.regex.captures(path)?;
		let mut params = Params::new();

		for name in self.regex.capture_names().flatten() {
			if let Some(value) = caps.name(name) {
				params.insert(name.to_owned(), value.as_str().to_owned());
			}
		}

		Some(params)
	}

	/// The underlying regular expression, mostly useful for logging.
	pub fn as_str(&self) -> &str {
		self.regex.as_str()
	}
}

/// Whether `name` is usable as a named capture group: non-empty and made of
/// word characters only. Anything else between braces is left as literal text.
fn is_placeholder_name(name: &str) -> bool {
	!name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
}

/// Compile a route pattern into a [`Matcher`].
///
/// `{name}` tokens become capture groups matching one or more non-`/`
/// characters; everything else is escaped and matched literally, so `.` or
/// `(` in a static segment mean themselves. Malformed tokens (an unmatched
/// `{`, empty braces, a separator inside braces) are not an error; they fall
/// back to literal text.
///
/// The only failure is a placeholder name repeated within one pattern, which
/// would produce ambiguous captures and is rejected up front.
pub fn compile(pattern: &str) -> Result<Matcher> {
	let mut regex = String::with_capacity(pattern.len() * 2);
	let mut names: Vec<&str> = Vec::new();
	let mut rest = pattern;

	regex.push('^');

	while let Some(open) = rest.find('{') {
		let (literal, tail) = rest.split_at(open);
		regex.push_str(&regex::escape(literal));

		// `tail` starts at the brace; the candidate name runs to the next `}`.
		match tail[1..].find('}') {
			Some(close) if is_placeholder_name(&tail[1..=close]) => {
				let name = &tail[1..=close];
				if names.contains(&name) {
					bail!(
						"duplicate placeholder `{{{}}}` in route pattern `{}`",
						name,
						pattern
					);
				}
				names.push(name);

				regex.push_str("(?P<");
				regex.push_str(name);
				regex.push_str(">[^/]+)");
				rest = &tail[close + 2..];
			}
			_ => {
				regex.push_str(&regex::escape("{"));
				rest = &tail[1..];
			}
		}
	}

	regex.push_str(&regex::escape(rest));
	regex.push('$');

	Ok(Matcher {
		regex: Regex::new(&regex)?,
	})
}

#[cfg(test)]
mod test {
	use super::compile;

	#[test]
	fn captures_single_placeholder() {
		let matcher = compile("{comment_id}/page.php").unwrap();
		let params = matcher.match_path("15/page.php").unwrap();

		assert_eq!(params.len(), 1);
		assert_eq!(params["comment_id"], "15");
	}

	#[test]
	fn captures_placeholders_in_occurrence_order() {
		let matcher = compile("/post/{post_id}/comment/{comment_id}").unwrap();
		let params = matcher.match_path("/post/123/comment/456").unwrap();

		let keys: Vec<&str> = params.keys().map(String::as_str).collect();
		assert_eq!(keys, ["post_id", "comment_id"]);
		assert_eq!(params["post_id"], "123");
		assert_eq!(params["comment_id"], "456");
	}

	#[test]
	fn placeholder_does_not_cross_separators() {
		let matcher = compile("/post/{post_id}").unwrap();
		assert!(matcher.match_path("/post/1/2").is_none());
	}

	#[test]
	fn match_is_anchored_to_the_full_path() {
		let matcher = compile("/a/{id}").unwrap();
		assert!(matcher.match_path("/a/1").is_some());
		assert!(matcher.match_path("/prefix/a/1").is_none());
		assert!(matcher.match_path("/a/1/suffix").is_none());
	}

	#[test]
	fn literal_metacharacters_match_literally() {
		let matcher = compile("/file.txt").unwrap();
		assert!(matcher.match_path("/file.txt").is_some());
		assert!(matcher.match_path("/fileXtxt").is_none());

		let matcher = compile("/a(b)/{id}").unwrap();
		assert_eq!(matcher.match_path("/a(b)/7").unwrap()["id"], "7");
	}

	#[test]
	fn malformed_tokens_degrade_to_literal_text() {
		// Unmatched brace.
		let matcher = compile("/a/{id").unwrap();
		assert!(matcher.match_path("/a/{id").is_some());
		assert!(matcher.match_path("/a/15").is_none());

		// Empty braces.
		let matcher = compile("/a/{}").unwrap();
		assert!(matcher.match_path("/a/{}").is_some());

		// Separator inside braces.
		let matcher = compile("/{a/b}").unwrap();
		assert!(matcher.match_path("/{a/b}").is_some());
	}

	#[test]
	fn literal_after_malformed_brace_still_compiles() {
		let matcher = compile("{x/{id}").unwrap();
		let params = matcher.match_path("{x/99").unwrap();
		assert_eq!(params["id"], "99");
	}

	#[test]
	fn duplicate_placeholder_names_are_rejected() {
		let err = compile("/{id}/{id}").unwrap_err();
		assert!(err.to_string().contains("duplicate placeholder"));
	}

	#[test]
	fn values_are_not_percent_decoded() {
		let matcher = compile("/tag/{name}").unwrap();
		assert_eq!(matcher.match_path("/tag/a%20b").unwrap()["name"], "a%20b");
	}
}
