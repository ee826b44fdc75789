mod todos;
mod upload;

use axum::Json;

pub use todos::{add_todo, get_todo, list_todos, toggle_todo};
pub use upload::upload;

pub async fn index() -> Json<&'static str> {
    Json("This is the index")
}
