use axum::{
	routing::{get, post, put},
	Router,
};

use crate::app::App;
use crate::handler;

pub fn init(app: App) -> Router {
	Router::new()
		.route("/api/sizes", get(handler::get_sizes))
		.route("/api/sizes/reset", post(handler::post_reset))
		.route("/api/sizes/{name}", put(handler::put_size))
		.route("/api/regenerate", get(handler::get_regenerate_targets))
		.route("/api/regenerate/{id}", post(handler::post_regenerate))
		.with_state(app)
}

// vim: ts=4
