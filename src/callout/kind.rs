//! The closed vocabulary of callout types

use std::fmt;
use std::str::FromStr;

/// Static description of one callout type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalloutEntry {
    pub title: &'static str,
    /// Glyph name in the icon catalog
    pub icon: &'static str,
    /// Border color and background tint, with a dark-mode variant
    pub border_style: &'static str,
    /// Title and text color, with a dark-mode variant
    pub text_color_style: &'static str,
}

const fn entry(
    title: &'static str,
    icon: &'static str,
    border_style: &'static str,
    text_color_style: &'static str,
) -> CalloutEntry {
    CalloutEntry {
        title,
        icon,
        border_style,
        text_color_style,
    }
}

/// A callout type recognized by this deployment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CalloutKind {
    Note,
    Tip,
    Warning,
    Danger,
    Important,
    Definition,
    Theorem,
    Lemma,
    Proof,
    Corollary,
    Proposition,
    Axiom,
    Conjecture,
    Notation,
    Remark,
    Intuition,
    Recall,
    Explanation,
    Example,
    Exercise,
    Problem,
    Answer,
    Solution,
    Summary,
}

// Indexed by `CalloutKind as usize`
const TABLE: [CalloutEntry; 24] = [
    entry("Note", "info", "border-blue-500 dark:bg-blue-950/5", "text-blue-700 dark:text-blue-300"),
    entry(
        "Tip",
        "lightbulb",
        "border-green-500 dark:bg-green-950/5",
        "text-green-700 dark:text-green-300",
    ),
    entry(
        "Warning",
        "alert-triangle",
        "border-amber-500 dark:bg-amber-950/5",
        "text-amber-700 dark:text-amber-300",
    ),
    entry(
        "Danger",
        "shield-alert",
        "border-red-500 dark:bg-red-950/5",
        "text-red-700 dark:text-red-300",
    ),
    entry(
        "Important",
        "message-square-warning",
        "border-purple-500 dark:bg-purple-950/5",
        "text-purple-700 dark:text-purple-300",
    ),
    entry(
        "Definition",
        "book-open",
        "border-purple-500 dark:bg-purple-950/5",
        "text-purple-700 dark:text-purple-300",
    ),
    entry(
        "Theorem",
        "check-circle",
        "border-teal-500 dark:bg-teal-950/5",
        "text-teal-700 dark:text-teal-300",
    ),
    entry("Lemma", "puzzle", "border-sky-400 dark:bg-sky-950/5", "text-sky-700 dark:text-sky-300"),
    entry(
        "Proof",
        "check-square",
        "border-gray-500 dark:bg-gray-950/5",
        "text-gray-700 dark:text-gray-300",
    ),
    entry(
        "Corollary",
        "git-branch",
        "border-cyan-500 dark:bg-cyan-950/5",
        "text-cyan-700 dark:text-cyan-300",
    ),
    entry(
        "Proposition",
        "file-text",
        "border-slate-500 dark:bg-slate-950/5",
        "text-slate-700 dark:text-slate-300",
    ),
    entry(
        "Axiom",
        "anchor",
        "border-violet-600 dark:bg-violet-950/5",
        "text-violet-700 dark:text-violet-300",
    ),
    entry(
        "Conjecture",
        "help-circle",
        "border-pink-500 dark:bg-pink-950/5",
        "text-pink-700 dark:text-pink-300",
    ),
    entry(
        "Notation",
        "pen-tool",
        "border-slate-400 dark:bg-slate-950/5",
        "text-slate-700 dark:text-slate-300",
    ),
    entry(
        "Remark",
        "message-circle",
        "border-gray-400 dark:bg-gray-950/5",
        "text-gray-700 dark:text-gray-300",
    ),
    entry(
        "Intuition",
        "lightbulb",
        "border-yellow-500 dark:bg-yellow-950/5",
        "text-yellow-700 dark:text-yellow-300",
    ),
    entry(
        "Recall",
        "rotate-ccw",
        "border-blue-300 dark:bg-blue-950/5",
        "text-blue-600 dark:text-blue-300",
    ),
    entry(
        "Explanation",
        "help-circle",
        "border-lime-500 dark:bg-lime-950/5",
        "text-lime-700 dark:text-lime-300",
    ),
    entry(
        "Example",
        "code",
        "border-emerald-500 dark:bg-emerald-950/5",
        "text-emerald-700 dark:text-emerald-300",
    ),
    entry(
        "Exercise",
        "dumbbell",
        "border-indigo-500 dark:bg-indigo-950/5",
        "text-indigo-700 dark:text-indigo-300",
    ),
    entry(
        "Problem",
        "alert-circle",
        "border-orange-600 dark:bg-orange-950/5",
        "text-orange-700 dark:text-orange-300",
    ),
    entry(
        "Answer",
        "check",
        "border-teal-500 dark:bg-teal-950/5",
        "text-teal-700 dark:text-teal-300",
    ),
    entry(
        "Solution",
        "check-circle-2",
        "border-emerald-600 dark:bg-emerald-950/5",
        "text-emerald-700 dark:text-emerald-300",
    ),
    entry("Summary", "list", "border-sky-500 dark:bg-sky-950/5", "text-sky-700 dark:text-sky-300"),
];

impl CalloutKind {
    /// Every callout type, in table order
    pub const ALL: [CalloutKind; 24] = [
        CalloutKind::Note,
        CalloutKind::Tip,
        CalloutKind::Warning,
        CalloutKind::Danger,
        CalloutKind::Important,
        CalloutKind::Definition,
        CalloutKind::Theorem,
        CalloutKind::Lemma,
        CalloutKind::Proof,
        CalloutKind::Corollary,
        CalloutKind::Proposition,
        CalloutKind::Axiom,
        CalloutKind::Conjecture,
        CalloutKind::Notation,
        CalloutKind::Remark,
        CalloutKind::Intuition,
        CalloutKind::Recall,
        CalloutKind::Explanation,
        CalloutKind::Example,
        CalloutKind::Exercise,
        CalloutKind::Problem,
        CalloutKind::Answer,
        CalloutKind::Solution,
        CalloutKind::Summary,
    ];

    /// Lowercase type key as written in documents
    pub fn key(self) -> &'static str {
        match self {
            CalloutKind::Note => "note",
            CalloutKind::Tip => "tip",
            CalloutKind::Warning => "warning",
            CalloutKind::Danger => "danger",
            CalloutKind::Important => "important",
            CalloutKind::Definition => "definition",
            CalloutKind::Theorem => "theorem",
            CalloutKind::Lemma => "lemma",
            CalloutKind::Proof => "proof",
            CalloutKind::Corollary => "corollary",
            CalloutKind::Proposition => "proposition",
            CalloutKind::Axiom => "axiom",
            CalloutKind::Conjecture => "conjecture",
            CalloutKind::Notation => "notation",
            CalloutKind::Remark => "remark",
            CalloutKind::Intuition => "intuition",
            CalloutKind::Recall => "recall",
            CalloutKind::Explanation => "explanation",
            CalloutKind::Example => "example",
            CalloutKind::Exercise => "exercise",
            CalloutKind::Problem => "problem",
            CalloutKind::Answer => "answer",
            CalloutKind::Solution => "solution",
            CalloutKind::Summary => "summary",
        }
    }

    /// Parse a type key; keys are matched exactly (lowercase)
    pub fn from_key(key: &str) -> Option<Self> {
        let kind = match key {
            "note" => CalloutKind::Note,
            "tip" => CalloutKind::Tip,
            "warning" => CalloutKind::Warning,
            "danger" => CalloutKind::Danger,
            "important" => CalloutKind::Important,
            "definition" => CalloutKind::Definition,
            "theorem" => CalloutKind::Theorem,
            "lemma" => CalloutKind::Lemma,
            "proof" => CalloutKind::Proof,
            "corollary" => CalloutKind::Corollary,
            "proposition" => CalloutKind::Proposition,
            "axiom" => CalloutKind::Axiom,
            "conjecture" => CalloutKind::Conjecture,
            "notation" => CalloutKind::Notation,
            "remark" => CalloutKind::Remark,
            "intuition" => CalloutKind::Intuition,
            "recall" => CalloutKind::Recall,
            "explanation" => CalloutKind::Explanation,
            "example" => CalloutKind::Example,
            "exercise" => CalloutKind::Exercise,
            "problem" => CalloutKind::Problem,
            "answer" => CalloutKind::Answer,
            "solution" => CalloutKind::Solution,
            "summary" => CalloutKind::Summary,
            _ => return None,
        };
        Some(kind)
    }

    /// Position in table order
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn entry(self) -> &'static CalloutEntry {
        &TABLE[self.index()]
    }
}

impl fmt::Display for CalloutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing a key outside the vocabulary
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown callout type: {0}")]
pub struct UnknownCalloutKind(pub String);

impl FromStr for CalloutKind {
    type Err = UnknownCalloutKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| UnknownCalloutKind(s.to_string()))
    }
}
