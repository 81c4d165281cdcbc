pub mod algolia;

use crate::{constants::ARTICLE_PATH, errors::PipelineError, types::Article};
use async_trait::async_trait;
use dyn_clone::DynClone;
use std::fmt::Debug;

/// A trait for querying a hosted index of support articles.
#[async_trait]
pub trait SearchProvider: Send + Sync + Debug + DynClone {
    /// Searches the index with a free-text query.
    ///
    /// Implementations return at most `HITS_PER_PAGE` articles in the order the
    /// backend ranked them, each with its `link` already derived.
    async fn search(&self, query: &str) -> Result<Vec<Article>, PipelineError>;
}

dyn_clone::clone_trait_object!(SearchProvider);

/// Builds the public help-center URL of an article.
pub fn article_link(support_base_url: &str, id: &str) -> String {
    format!(
        "{}{ARTICLE_PATH}{id}",
        support_base_url.trim_end_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_link_uses_fixed_template() {
        assert_eq!(
            article_link("https://support.cognisantmd.com", "100"),
            "https://support.cognisantmd.com/hc/en-us/articles/100"
        );
    }

    #[test]
    fn test_article_link_ignores_trailing_slash_on_base() {
        assert_eq!(
            article_link("https://support.example.com/", "42"),
            "https://support.example.com/hc/en-us/articles/42"
        );
    }
}
