//! Landing page handler.

use axum::response::Html;

/// Handler for the greeting page (GET /).
pub async fn index() -> Html<&'static str> {
    Html(
        "<!doctype html>\n\
         <html>\n\
         <head><title>Whiskyshelf</title></head>\n\
         <body>\n\
         <h1>Welcome to the whisky collection</h1>\n\
         <p>The collection lives at <a href=\"/api/whiskies\">/api/whiskies</a>.</p>\n\
         </body>\n\
         </html>\n",
    )
}
