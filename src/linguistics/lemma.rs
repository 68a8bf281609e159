/// Irregular plural → singular forms
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("feet", "foot"),
    ("teeth", "tooth"),
    ("analyses", "analysis"),
    ("crises", "crisis"),
    ("theses", "thesis"),
    ("hypotheses", "hypothesis"),
    ("indices", "index"),
    ("matrices", "matrix"),
    ("vertices", "vertex"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("wives", "wife"),
    ("knives", "knife"),
    ("wolves", "wolf"),
    ("halves", "half"),
    ("shelves", "shelf"),
    ("selves", "self"),
];

/// Words ending in "s" that are already base forms
const INVARIANT: &[&str] = &[
    "news", "series", "species", "means", "physics", "mathematics", "economics", "politics",
    "analytics", "statistics", "always", "perhaps", "whereas", "across", "towards", "does",
    "was", "has", "this", "its", "his", "hers", "ours", "yours", "theirs", "yes", "thus",
    "plus", "lens", "chaos", "canvas", "atlas", "alias", "bias", "gas", "bus", "kudos",
];

/// Reduces a noun to its singular base form
///
/// # Examples
///
/// ```
/// use sitelore::linguistics::lemmatize_noun;
///
/// assert_eq!(lemmatize_noun("libraries"), "library");
/// assert_eq!(lemmatize_noun("boxes"), "box");
/// assert_eq!(lemmatize_noun("crawlers"), "crawler");
/// assert_eq!(lemmatize_noun("children"), "child");
/// assert_eq!(lemmatize_noun("class"), "class");
/// ```
pub fn lemmatize_noun(word: &str) -> String {
    let word = word.to_lowercase();

    if word.len() <= 3 {
        return word;
    }

    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_string();
    }

    if INVARIANT.contains(&word.as_str()) {
        return word;
    }

    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word;
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if word.len() > 4 {
            return format!("{}y", stem);
        }
    }

    for suffix in ["sses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }

    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word,
    }
}
