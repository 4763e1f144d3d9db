//! Substring predicates used to grade submissions.
//!
//! Grading is deliberately shallow: literal, case-sensitive containment
//! checks over the submitted text. No parsing, no execution.

/// True if `needle` is a literal substring of `text`.
pub fn contains(text: &str, needle: &str) -> bool {
    text.contains(needle)
}

/// True iff every needle is a substring of `text`. Vacuously true for an
/// empty needle list.
pub fn contains_all<S: AsRef<str>>(text: &str, needles: &[S]) -> bool {
    needles.iter().all(|n| contains(text, n.as_ref()))
}

/// True iff at least one needle is a substring of `text`. False for an
/// empty needle list.
pub fn contains_any<S: AsRef<str>>(text: &str, needles: &[S]) -> bool {
    needles.iter().any(|n| contains(text, n.as_ref()))
}

/// Catalog of C++ keywords and common library identifiers the curriculum
/// cares about. Kept as a static table so matcher logic stays untouched
/// when the catalog grows.
pub static CPP_KEYWORDS: &[&str] = &[
    "auto", "bool", "break", "case", "catch", "char", "class", "const",
    "constexpr", "const_cast", "continue", "decltype", "default", "delete",
    "do", "double", "dynamic_cast", "else", "enum", "explicit", "extern",
    "false", "float", "for", "friend", "goto", "if", "inline", "int", "long",
    "mutable", "namespace", "new", "noexcept", "nullptr", "operator",
    "private", "protected", "public", "reinterpret_cast", "return", "short",
    "signed", "sizeof", "static", "static_assert", "static_cast", "struct",
    "switch", "template", "this", "thread_local", "throw", "true", "try",
    "typedef", "typeid", "typename", "union", "unsigned", "using", "virtual",
    "void", "volatile", "while",
    // Library identifiers the lessons revolve around.
    "std", "string", "vector", "unique_ptr", "shared_ptr", "weak_ptr",
    "make_unique", "make_shared", "move", "forward", "pair", "tuple",
    "optional", "lambda",
];

/// True if `keyword` occurs in `text` as a whole word, not as a fragment of
/// a longer identifier.
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = text[start..].find(keyword) {
        let at = start + pos;
        let before_ok = at == 0
            || !text[..at]
                .chars()
                .next_back()
                .is_some_and(is_identifier_char);
        let after = at + keyword.len();
        let after_ok = after == text.len()
            || !text[after..].chars().next().is_some_and(is_identifier_char);
        if before_ok && after_ok {
            return true;
        }
        start = at + keyword.len();
    }
    false
}

/// Keywords from the catalog that appear (as whole words) in `code`, in
/// catalog order. Only used for debug telemetry on failed attempts.
pub fn extract_keywords(code: &str) -> Vec<&'static str> {
    CPP_KEYWORDS
        .iter()
        .copied()
        .filter(|kw| contains_keyword(code, kw))
        .collect()
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
