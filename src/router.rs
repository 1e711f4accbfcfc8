use crate::pattern::{compile, Matcher};
use crate::route::{DispatchResult, Handler, Params};
use anyhow::Result;
use tracing::{debug, trace};

struct CompiledRule<T> {
	matcher: Matcher,
	method: String,
	handler: Handler<T>,
}

/// Matches incoming requests against registered route patterns and invokes at
/// most one handler per dispatch.
///
/// Routes are tried strictly in registration order; the first rule whose
/// method and path both match wins, and no later rule is tested. The table is
/// append-only and the router keeps no other state, so `dispatch` is a pure
/// function of its arguments plus the table. There is no internal locking:
/// build the table up front if the router will be shared across threads.
pub struct Router<T> {
	routes: Vec<CompiledRule<T>>,
}

impl<T> Default for Router<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Router<T> {
	pub fn new() -> Self {
		Self { routes: Vec::new() }
	}

	/// Register a route. `pattern` may contain `{name}` placeholders (see
	/// [`compile`]); `method` is stored uppercased and compared
	/// case-insensitively at dispatch time.
	///
	/// Duplicate (pattern, method) pairs are allowed; the earliest
	/// registration wins. The only error is a placeholder name repeated
	/// within `pattern`.
	pub fn register_route<F>(&mut self, pattern: &str, method: &str, handler: F) -> Result<()>
	where
		F: Fn(Params) -> T + Send + Sync + 'static,
	{
		let matcher = compile(pattern)?;
		let method = method.to_ascii_uppercase();
		debug!(pattern, %method, regex = matcher.as_str(), "registered route");

		self.routes.push(CompiledRule {
			matcher,
			method,
			handler: Box::new(handler),
		});
		Ok(())
	}

	/// Match `method` + `uri` against the table and invoke the first matching
	/// handler with `ambient` merged with the extracted path parameters. Path
	/// parameters overwrite ambient entries on key collision.
	///
	/// `uri` is matched exactly as given: no trailing-slash or case
	/// normalization and no percent-decoding. Pass a path-only URI; raw query
	/// text left in `uri` is matched like any other path text and will end up
	/// inside the last placeholder's capture unless a trailing literal stops
	/// it.
	///
	/// An unmatched request is a normal outcome, reported as
	/// `DispatchResult { handled: false, data: None }`. Anything a handler
	/// does wrong (panic, error value in `T`) passes through untouched.
	pub fn dispatch(&self, method: &str, uri: &str, ambient: Params) -> DispatchResult<T> {
		let method = method.to_ascii_uppercase();

		for rule in &self.routes {
			if rule.method != method {
				continue;
			}

			let extracted = match rule.matcher.match_path(uri) {
				Some(extracted) => extracted,
				None => {
					trace!(regex = rule.matcher.as_str(), uri, "no match");
					continue;
				}
			};

			debug!(regex = rule.matcher.as_str(), %method, uri, "matched route");

			// Ambient first, path captures second: captures win collisions.
			let mut params = ambient;
			params.extend(extracted);

			return DispatchResult::handled((rule.handler)(params));
		}

		debug!(%method, uri, "no route matched");
		DispatchResult::unhandled()
	}
}
