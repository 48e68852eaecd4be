use contracts::domain::a002_document::DocumentViewModel;

/// Состояние окна просмотра: документ и признак открытия.
///
/// Документ не меняется между открытиями.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPreview {
    document: DocumentViewModel,
    open: bool,
}

impl DocumentPreview {
    pub fn new(document: DocumentViewModel) -> Self {
        Self {
            document,
            open: false,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_open(&mut self, open: bool) {
        if open {
            self.open();
        } else {
            self.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn document(&self) -> &DocumentViewModel {
        &self.document
    }

    /// Документ для показа, пока окно открыто
    pub fn visible(&self) -> Option<&DocumentViewModel> {
        self.open.then_some(&self.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::markdown::render_markdown;

    fn guide() -> DocumentViewModel {
        DocumentViewModel::new(
            "Serper API setup",
            "# Steps\n\n1. Sign up\n2. Copy the **key**\n\n> stored encrypted",
        )
    }

    #[test]
    fn test_starts_closed() {
        let preview = DocumentPreview::new(guide());
        assert!(!preview.is_open());
        assert!(preview.visible().is_none());
    }

    #[test]
    fn test_reopen_shows_same_content() {
        let document = guide();
        let mut preview = DocumentPreview::new(document.clone());

        preview.open();
        let first = preview.visible().map(|d| render_markdown(&d.content));
        assert!(first.is_some());

        preview.close();
        assert!(preview.visible().is_none());

        preview.open();
        let second = preview.visible().map(|d| render_markdown(&d.content));

        assert_eq!(first, second);
        assert_eq!(preview.document(), &document);
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut preview = DocumentPreview::new(guide());
        preview.set_open(true);
        preview.open();
        assert!(preview.is_open());
        preview.set_open(false);
        preview.close();
        assert!(!preview.is_open());
        assert_eq!(preview.document(), &guide());
    }
}
