use indexmap::IndexMap;

/// Request parameters handed to a route handler: ambient (query/body) entries
/// merged with the values captured from the matched path. Iteration order is
/// insertion order, so path parameters appear in pattern occurrence order.
pub type Params = IndexMap<String, String>;

/// A route callback. Receives the merged parameter map and returns an opaque
/// value which the router passes back to the caller of `dispatch` untouched.
pub type Handler<T> = Box<dyn Fn(Params) -> T + Send + Sync>;

/// The outcome of a single dispatch call.
///
/// `handled` is `false` when no registered rule matched the method and path;
/// in that case `data` is always `None` and no handler was invoked.
#[derive(Debug)]
pub struct DispatchResult<T> {
	pub handled: bool,
	pub data: Option<T>,
}

impl<T> DispatchResult<T> {
	pub(crate) fn handled(data: T) -> Self {
		Self {
			handled: true,
			data: Some(data),
		}
	}

	pub(crate) fn unhandled() -> Self {
		Self {
			handled: false,
			data: None,
		}
	}
}
