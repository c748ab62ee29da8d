use crate::domain::types::PostStatus;

/// Post fields as supplied on the command line, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostDraft {
    /// Site domain or numeric site ID.
    pub site: String,
    pub title: String,
    pub content: String,
    pub status: PostStatus,
    pub excerpt: String,
    pub slug: String,
    /// Comma-separated, unnormalized.
    pub categories: String,
    /// Comma-separated, unnormalized.
    pub tags: String,
}
