//! Static HTML forms
//!
//! Minimal browser forms for registering and searching items without a
//! separate client.

use axum::response::Html;

const REGISTER_FORM: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Register inventory item</title></head>
<body>
  <h1>Register inventory item</h1>
  <form action="/register" method="post" enctype="multipart/form-data">
    <p><label>Name <input type="text" name="inventory_name" required></label></p>
    <p><label>Description <textarea name="description"></textarea></label></p>
    <p><label>Photo <input type="file" name="photo" accept="image/*"></label></p>
    <p><button type="submit">Register</button></p>
  </form>
</body>
</html>
"#;

const SEARCH_FORM: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>Search inventory</title></head>
<body>
  <h1>Search inventory</h1>
  <form action="/search" method="post">
    <p><label>Item id <input type="text" name="id" required></label></p>
    <p><label><input type="checkbox" name="has_photo"> Include photo link</label></p>
    <p><button type="submit">Search</button></p>
  </form>
</body>
</html>
"#;

/// GET /RegisterForm.html
pub async fn register_form() -> Html<&'static str> {
    Html(REGISTER_FORM)
}

/// GET /SearchForm.html
pub async fn search_form() -> Html<&'static str> {
    Html(SEARCH_FORM)
}
