use ambient_core::{Theme, ThemeSource, DARK_CLASS};
use web_sys as web;

/// Reads the `dark` class on `<html>` each time it is asked.
pub struct DocumentTheme {
    document: web::Document,
}

impl DocumentTheme {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ThemeSource for DocumentTheme {
    fn current(&self) -> Theme {
        let dark = self
            .document
            .document_element()
            .map(|el| el.class_list().contains(DARK_CLASS))
            .unwrap_or(false);
        Theme::from_dark_flag(dark)
    }
}
