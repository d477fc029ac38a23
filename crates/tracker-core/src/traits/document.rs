/// Narrow read surface over the page document.
pub trait IDocument: Send + Sync {
    /// Text content of the element with the given id, if it exists.
    fn element_text(&self, id: &str) -> Option<String>;

    /// Whether an element with the given id exists.
    fn has_element(&self, id: &str) -> bool;

    /// The document cookie string: `name=value;` pairs. Empty when no
    /// cookies are present.
    fn cookie_string(&self) -> String;
}
