//! # Answer Synthesis
//!
//! The final pipeline stage. Renders the retrieved articles into the prompt,
//! asks the model for an HTML answer, removes code-fence wrappers from the
//! completion and, depending on the `SourcesPolicy`, appends the list of
//! source links.

use crate::{
    errors::PipelineError,
    prompts::tasks::{
        ANSWER_SYNTHESIS_SYSTEM_PROMPT, ANSWER_SYNTHESIS_USER_PROMPT, CALLER_SOURCES_INSTRUCTION,
        MODEL_SOURCES_INSTRUCTION, NO_DOCUMENTATION_PROVIDED,
    },
    providers::ai::AiProvider,
    types::{Article, ArticleRendering, PipelineOptions, SourcesPolicy},
};
use regex::Regex;
use tracing::{debug, info};

/// Renders the article set into the documentation block of the synthesis prompt.
pub fn render_documentation(articles: &[Article], rendering: ArticleRendering) -> String {
    if articles.is_empty() {
        return NO_DOCUMENTATION_PROVIDED.to_string();
    }
    match rendering {
        ArticleRendering::InlineBody => articles
            .iter()
            .map(|a| {
                format!(
                    "<h4>{}</h4><p>{}</p><p>Source: <a href='{}' target='_blank'>{}</a></p>",
                    a.title, a.body, a.link, a.link
                )
            })
            .collect(),
        ArticleRendering::LinkOnly => format!("<ul>{}</ul>", render_link_items(articles)),
    }
}

/// Builds the `<h3>Sources</h3>` section appended under `SourcesPolicy::CallerAppended`.
///
/// The heading is always present; an empty article set yields an empty list.
pub fn render_sources_section(articles: &[Article]) -> String {
    format!("<h3>Sources</h3><ul>{}</ul>", render_link_items(articles))
}

fn render_link_items(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|a| format!("<li><a href='{}' target='_blank'>{}</a></li>", a.link, a.title))
        .collect()
}

/// Builds the system and user prompts for answer synthesis.
pub fn build_synthesis_prompts(
    query: &str,
    articles: &[Article],
    options: &PipelineOptions,
) -> (String, String) {
    let documentation = render_documentation(articles, options.article_rendering);
    let sources_instruction = match options.sources_policy {
        SourcesPolicy::ModelAppended => MODEL_SOURCES_INSTRUCTION,
        SourcesPolicy::CallerAppended => CALLER_SOURCES_INSTRUCTION,
    };
    let user_prompt = fill_template(
        ANSWER_SYNTHESIS_USER_PROMPT,
        &[
            ("{query}", query),
            ("{documentation}", &documentation),
            ("{sources_instruction}", sources_instruction),
        ],
    );
    (ANSWER_SYNTHESIS_SYSTEM_PROMPT.to_string(), user_prompt)
}

/// Substitutes placeholders in one left-to-right pass over `template`.
/// Inserted values are never rescanned, so article text or a query that looks
/// like a placeholder is passed through verbatim.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        match values.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                out.push('{');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Removes a leading and/or trailing code fence (```` ```html ````, ```` ``` ````,
/// `'''html`, `'''`) that models sometimes wrap HTML answers in.
///
/// Only whitespace outside a fence, the fence itself, an `html` tag and the one
/// newline between fence and content are removed. Content is returned
/// byte-for-byte, as is input without any fence.
pub fn strip_code_fences(raw: &str) -> Result<String, PipelineError> {
    let leading = Regex::new(r"^\s*(?:```|''')(?i:html)?\r?\n?")?;
    let trailing = Regex::new(r"\r?\n?(?:```|''')\s*$")?;

    let mut cleaned = raw;
    if let Some(m) = leading.find(cleaned) {
        cleaned = &cleaned[m.end()..];
    }
    if let Some(m) = trailing.find(cleaned) {
        cleaned = &cleaned[..m.start()];
    }
    Ok(cleaned.to_string())
}

/// Synthesizes the final HTML answer for a query from the retrieved articles.
pub async fn synthesize_answer(
    ai_provider: &dyn AiProvider,
    query: &str,
    articles: &[Article],
    options: &PipelineOptions,
) -> Result<String, PipelineError> {
    info!(
        "[synthesize_answer] synthesizing from {} articles ({:?}, {:?})",
        articles.len(),
        options.article_rendering,
        options.sources_policy
    );
    let (system_prompt, user_prompt) = build_synthesis_prompts(query, articles, options);

    debug!(system_prompt = %system_prompt, user_prompt = %user_prompt, "--> Sending synthesis prompts to AI Provider");

    let raw_response = ai_provider.generate(&system_prompt, &user_prompt).await?;

    debug!("<-- Answer from AI: {}", raw_response);

    let answer = strip_code_fences(&raw_response)?;
    Ok(match options.sources_policy {
        SourcesPolicy::ModelAppended => answer,
        SourcesPolicy::CallerAppended => answer + &render_sources_section(articles),
    })
}
