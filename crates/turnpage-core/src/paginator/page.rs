use crate::store::Document;

///
/// Page
///
/// One bounded, ordered slice of a listing, plus the navigation metadata
/// the presentation layer renders: the 1-based page number and whether a
/// further page was detected.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Page {
    documents: Vec<Document>,
    page_number: u32,
    has_more: bool,
}

impl Page {
    pub(crate) const fn new(documents: Vec<Document>, page_number: u32, has_more: bool) -> Self {
        Self {
            documents,
            page_number,
            has_more,
        }
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    #[must_use]
    pub const fn page_number(&self) -> u32 {
        self.page_number
    }

    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    #[must_use]
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}
