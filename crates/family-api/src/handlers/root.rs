//! Root handler
//!
//! Serves a human-readable listing of the available endpoints.

use axum::response::Html;

const SITEMAP: &str = "\
<!DOCTYPE html>
<html>
  <head><title>Family API</title></head>
  <body>
    <h1>Family API</h1>
    <p>Available endpoints:</p>
    <ul>
      <li>GET <a href=\"/members\">/members</a></li>
      <li>GET /members/{id}</li>
      <li>POST /members</li>
      <li>DELETE /members/{id}</li>
      <li>GET <a href=\"/health\">/health</a></li>
    </ul>
  </body>
</html>
";

/// Endpoint listing
///
/// GET /
pub async fn sitemap() -> Html<&'static str> {
    Html(SITEMAP)
}
