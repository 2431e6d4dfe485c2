/// Stored note. `id` is `None` until the storage layer assigns one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Note {
    pub id: Option<i64>,
    pub title: String,
    pub content: String,
}

#[cfg(test)]
impl Note {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: None,
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
