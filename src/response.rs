use anyhow::Result;
use serde_json::{Map, Value};
use std::fmt::Write as _;
use std::io::{self, Write};

const DEFAULT_ERROR_MESSAGE: &str = "An error occurred";
const ERROR_MESSAGE_COLOR: &str = "red";
const SUCCESS_MESSAGE_COLOR: &str = "green";

/// Renders handler output into a transport-ready body and writes it out.
///
/// `respond` and `fail` are the success and error paths; both render and then
/// [`emit`](ResponseMaker::emit) in one step. `emit` performs the actual
/// transport write against the maker's sink and hands the body back so tests
/// can inspect exactly what went over the wire.
pub trait ResponseMaker {
	/// Render a body without writing it anywhere.
	fn render(&self, success: bool, data: Option<&Value>, message: Option<&str>) -> Result<String>;

	/// Write a rendered body to the sink and return it.
	fn emit(&mut self, rendered: String) -> Result<String>;

	fn respond(&mut self, data: Option<&Value>, message: Option<&str>) -> Result<String> {
		let rendered = self.render(true, data, message)?;
		self.emit(rendered)
	}

	fn fail(&mut self, data: Option<&Value>, message: Option<&str>) -> Result<String> {
		let rendered = self.render(false, data, message)?;
		self.emit(rendered)
	}
}

/// JSON body for API callers: `{ "response": ..., "success": 0|1 }` plus an
/// optional `message`, pretty-printed with forward slashes left alone.
pub struct JsonResponseMaker<W> {
	out: W,
}

impl JsonResponseMaker<io::Stdout> {
	pub fn stdout() -> Self {
		Self::new(io::stdout())
	}
}

impl<W: Write> JsonResponseMaker<W> {
	pub fn new(out: W) -> Self {
		Self { out }
	}
}

impl<W: Write> ResponseMaker for JsonResponseMaker<W> {
	fn render(&self, success: bool, data: Option<&Value>, message: Option<&str>) -> Result<String> {
		let mut body = Map::new();
		body.insert(
			"response".to_owned(),
			data.cloned().unwrap_or(Value::Null),
		);
		body.insert("success".to_owned(), Value::from(success as u8));
		if let Some(message) = message {
			body.insert("message".to_owned(), Value::from(message));
		}

		Ok(serde_json::to_string_pretty(&Value::Object(body))?)
	}

	fn emit(&mut self, rendered: String) -> Result<String> {
		self.out.write_all(rendered.as_bytes())?;
		Ok(rendered)
	}
}

/// Whether an HTML body carries the inline style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HtmlStyle {
	Plain,
	Styled,
}

/// HTML body: a classed message block followed by a content block. Mapping
/// data renders one `key: value` line per entry; anything else is inserted
/// verbatim. A failure with no explicit message gets a fixed default.
///
/// The styled variant is the plain rendering prefixed with a style block
/// coloring `.success` green and `.error` red.
pub struct HtmlResponseMaker<W> {
	style: HtmlStyle,
	out: W,
}

impl HtmlResponseMaker<io::Stdout> {
	pub fn plain_stdout() -> Self {
		Self::plain(io::stdout())
	}

	pub fn styled_stdout() -> Self {
		Self::styled(io::stdout())
	}
}

impl<W: Write> HtmlResponseMaker<W> {
	pub fn plain(out: W) -> Self {
		Self {
			style: HtmlStyle::Plain,
			out,
		}
	}

	pub fn styled(out: W) -> Self {
		Self {
			style: HtmlStyle::Styled,
			out,
		}
	}
}

/// Scalar values render bare, without JSON string quoting.
fn value_text(value: &Value) -> String {
	match value {
		Value::String(text) => text.clone(),
		other => other.to_string(),
	}
}

fn render_html(success: bool, data: Option<&Value>, message: Option<&str>) -> String {
	let mut html = String::new();

	let message = match message {
		None if !success => Some(DEFAULT_ERROR_MESSAGE),
		other => other,
	};

	if let Some(message) = message {
		let class = if success { "success" } else { "error" };
		let _ = write!(html, "<div class='message {}'>{}</div>", class, message);
	}

	html.push_str("<div class='content'>");
	match data {
		Some(Value::Object(entries)) => {
			for (key, value) in entries {
				let _ = write!(html, "<div>{}: {}</div>", key, value_text(value));
			}
		}
		Some(value) => html.push_str(&value_text(value)),
		None => {}
	}
	html.push_str("</div>");

	html
}

fn style_block() -> String {
	format!(
		"<style>.error {{ color: {} }}\n.success {{ color: {} }}\n</style>",
		ERROR_MESSAGE_COLOR, SUCCESS_MESSAGE_COLOR
	)
}

impl<W: Write> ResponseMaker for HtmlResponseMaker<W> {
	fn render(&self, success: bool, data: Option<&Value>, message: Option<&str>) -> Result<String> {
		let html = render_html(success, data, message);

		Ok(match self.style {
			HtmlStyle::Plain => html,
			HtmlStyle::Styled => format!("{}\n{}", style_block(), html),
		})
	}

	fn emit(&mut self, rendered: String) -> Result<String> {
		self.out.write_all(rendered.as_bytes())?;
		Ok(rendered)
	}
}
