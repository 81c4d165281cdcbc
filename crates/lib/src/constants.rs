//! # Shared Constants
//!
//! Fixed values of the support-answer pipeline. The search constants are part
//! of the wire contract with the search index and are deliberately not exposed
//! through runtime configuration.

/// The maximum number of articles requested from (and accepted from) the search index.
pub const HITS_PER_PAGE: usize = 5;

/// The filter attached to every search request.
pub const EXCLUDE_ANNOUNCEMENTS_FILTER: &str = "NOT category.title:'Announcements'";

/// The public help-center origin that article links point at.
pub const DEFAULT_SUPPORT_BASE_URL: &str = "https://support.cognisantmd.com";

/// The path between the help-center origin and an article id.
pub const ARTICLE_PATH: &str = "/hc/en-us/articles/";

/// The search index queried when none is configured.
pub const DEFAULT_INDEX_NAME: &str = "dev_oceanmd";

/// The hit attribute holding the sanitized article body.
pub const DEFAULT_BODY_FIELD: &str = "body_safe";
