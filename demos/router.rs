use lath::{HtmlResponseMaker, JsonResponseMaker, Params, ResponseMaker, Router};
use serde_json::Value;

fn to_value(params: Params) -> Value {
	params
		.into_iter()
		.map(|(key, value)| (key, Value::String(value)))
		.collect::<serde_json::Map<_, _>>()
		.into()
}

fn main() -> anyhow::Result<()> {
	tracing_subscriber::fmt().init();

	let mut router = Router::new();

	router.register_route("/post/{post_id}/comment/{comment_id}", "GET", to_value)?;
	router.register_route("/post/{post_id}", "POST", to_value)?;

	let mut json = JsonResponseMaker::stdout();
	let mut html = HtmlResponseMaker::styled_stdout();

	let result = router.dispatch("GET", "/post/123/comment/456", Params::new());
	println!("handled: {}", result.handled);
	json.respond(result.data.as_ref(), Some("comment found"))?;
	println!();

	let mut ambient = Params::new();
	ambient.insert("draft".to_owned(), "1".to_owned());
	let result = router.dispatch("post", "/post/123", ambient);
	html.respond(result.data.as_ref(), None)?;
	println!();

	let result = router.dispatch("GET", "/nowhere", Params::new());
	if !result.handled {
		html.fail(None, None)?;
		println!();
	}

	Ok(())
}
