//! Content heuristics
//!
//! Advisory checks on frontmatter values and body text. None of these are
//! blocking on their own; the validators decide severity.

use catalog_types::{CatalogError, Result, KNOWN_TOOLS};
use regex::Regex;

/// Descriptions longer than this draw a warning
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Placeholder a command body uses to receive its arguments
pub const ARGUMENTS_PLACEHOLDER: &str = "$ARGUMENTS";

const ACTION_VERBS: &[&str] = &[
    "create", "run", "execute", "check", "fix", "analyze", "generate", "update", "modify",
    "write", "read", "test", "validate", "build", "deploy",
];

/// Compiled patterns for the body checks
#[derive(Debug, Clone)]
pub struct ContentRules {
    indirect_opening: Regex,
    action_verb: Regex,
    tagged_fence: Regex,
}

impl ContentRules {
    /// Compile the patterns
    pub fn new() -> Result<Self> {
        Ok(Self {
            indirect_opening: compile(r"(?i)^You are (a|an)\s+")?,
            action_verb: compile(&format!(r"(?i)\b({})\b", ACTION_VERBS.join("|")))?,
            tagged_fence: compile(r"```[A-Za-z0-9_+#.-]+")?,
        })
    }

    /// Body opens with "You are a/an ..." rather than a direct instruction
    pub fn opens_with_persona(&self, body: &str) -> bool {
        self.indirect_opening.is_match(body.trim())
    }

    /// Body contains at least one action verb as a whole word
    pub fn has_action_verb(&self, body: &str) -> bool {
        self.action_verb.is_match(body)
    }

    /// Text has a code fence but no fence carries a language tag.
    ///
    /// File-level only: one tagged fence anywhere satisfies the check even
    /// if other blocks are untagged.
    pub fn lacks_fence_language(&self, raw: &str) -> bool {
        raw.contains("```") && !self.tagged_fence.is_match(raw)
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| CatalogError::Pattern {
        pattern: pattern.to_string(),
        reason: e.to_string(),
    })
}

/// Warning for a mismatch between `$ARGUMENTS` use and `argument-hint`
pub fn argument_hint_mismatch(body: &str, has_argument_hint: bool) -> Option<&'static str> {
    match (body.contains(ARGUMENTS_PLACEHOLDER), has_argument_hint) {
        (true, false) => Some("Uses $ARGUMENTS but no argument-hint provided in frontmatter"),
        (false, true) => Some("Has argument-hint but doesn't use $ARGUMENTS in content"),
        _ => None,
    }
}

/// Tools that are not on the known-tool list, in the order given
pub fn unknown_tools(tools: &[String]) -> Vec<&str> {
    tools
        .iter()
        .map(String::as_str)
        .filter(|tool| !KNOWN_TOOLS.contains(tool))
        .collect()
}

/// Character count of a description when it exceeds the limit
pub fn overlong_description(description: &str) -> Option<usize> {
    let chars = description.chars().count();
    (chars > MAX_DESCRIPTION_CHARS).then_some(chars)
}
