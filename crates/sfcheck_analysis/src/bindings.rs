//! Script-binding extraction.
//!
//! Collects the names a component's script section exposes to its
//! template: option-object keys (data/computed/methods entries), `props`
//! array strings, and top-level declarations. This is a textual heuristic,
//! not a semantic model; it only needs to be good enough to flag
//! interpolation roots the script plainly never mentions.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static OBJECT_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Za-z_$][\w$]*)\s*:").expect("static pattern"));
static METHOD_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*([A-Za-z_$][\w$]*)\s*\(").expect("static pattern"));
static DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:const|let|var|function|class)\s+([A-Za-z_$][\w$]*)").expect("static pattern")
});
static PROP_STRING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"["']([A-Za-z_$][\w$]*)["']"#).expect("static pattern"));

/// Names the template may legally reference without a script declaration.
const BUILTINS: &[&str] = &[
    "true", "false", "null", "undefined", "this", "$event", "$emit", "$refs", "$route", "$router",
    "$slots", "$attrs",
];

/// The set of names a script section declares.
#[derive(Debug, Clone, Default)]
pub struct ScriptBindings {
    names: HashSet<String>,
}

impl ScriptBindings {
    /// Extracts bindings from raw script text.
    pub fn extract(script_text: &str) -> Self {
        let mut names = HashSet::new();

        for captures in OBJECT_KEY.captures_iter(script_text) {
            names.insert(captures[1].to_string());
        }
        for captures in METHOD_KEY.captures_iter(script_text) {
            names.insert(captures[1].to_string());
        }
        for captures in DECLARATION.captures_iter(script_text) {
            names.insert(captures[1].to_string());
        }
        // props: ['visible', 'items'] style declarations
        if let Some(list_start) = script_text.find("props") {
            if let Some(open) = script_text[list_start..].find('[') {
                let tail = &script_text[list_start + open..];
                let list_end = tail.find(']').unwrap_or(tail.len());
                for captures in PROP_STRING.captures_iter(&tail[..list_end]) {
                    names.insert(captures[1].to_string());
                }
            }
        }

        Self { names }
    }

    /// Whether the template may reference `name`.
    pub fn declares(&self, name: &str) -> bool {
        BUILTINS.contains(&name) || self.names.contains(name)
    }

    /// Number of extracted names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no names were extracted.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
