//! Lexicon and suffix based part-of-speech tagging

use super::PosTag;

const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both", "either", "neither", "another", "such", "what", "which", "whose",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "we", "us", "our", "ours", "you", "your", "yours", "he", "him",
    "his", "she", "her", "hers", "it", "its", "they", "them", "their", "theirs", "myself",
    "ourselves", "yourself", "yourselves", "himself", "herself", "itself", "themselves", "who",
    "whom", "someone", "anyone", "everyone", "nobody", "something", "anything", "everything",
    "nothing",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "out", "off", "over", "under", "around", "among", "across", "behind", "beyond", "near",
    "since", "toward", "towards", "upon", "within", "without", "via", "per", "than", "like",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "because", "although", "though", "while", "if",
    "unless", "until", "whether", "whereas",
];

const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "have", "has", "had", "having",
    "do", "does", "did", "doing", "can", "could", "will", "would", "shall", "should", "may",
    "might", "must", "get", "gets", "got", "make", "makes", "made", "use", "uses", "take",
    "takes", "took", "give", "gives", "gave", "go", "goes", "went", "see", "sees", "saw",
    "know", "knows", "knew", "find", "finds", "found", "help", "helps", "provide", "provides",
    "offer", "offers", "let", "lets", "need", "needs", "want", "wants", "run", "runs", "ran",
    "build", "builds", "built", "learn", "learns", "read", "write", "writes", "wrote", "keep",
    "keeps", "kept", "come", "comes", "came", "become", "becomes", "became", "include",
    "includes", "support", "supports", "allow", "allows", "create", "creates", "say", "says",
    "said", "show", "shows", "showed", "visit", "visits",
];

const ADVERBS: &[&str] = &[
    "not", "very", "also", "often", "always", "never", "sometimes", "usually", "already",
    "still", "just", "now", "then", "here", "there", "too", "quite", "rather", "almost",
    "soon", "again", "ever", "even", "only", "well", "however", "therefore", "instead",
    "perhaps", "when", "where", "why", "how", "once", "more", "most", "less", "least",
];

const ADJECTIVES: &[&str] = &[
    "new", "old", "good", "bad", "best", "better", "great", "large", "small", "big", "high",
    "low", "long", "short", "fast", "slow", "free", "full", "easy", "hard", "open", "real",
    "main", "key", "top", "early", "late", "simple", "complex", "modern", "latest", "first",
    "last", "next", "other", "same", "different", "many", "much", "few", "several", "own",
    "important", "popular", "available", "common", "local", "global", "public", "private",
    "social", "digital", "online", "secure", "powerful", "efficient", "reliable", "open-source",
];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "ic", "less", "ish", "ary", "al",
];

/// Assigns a coarse part-of-speech tag to each token
///
/// Closed-class words come from small lexicons. Open-class words are tagged
/// from their suffix and the preceding tag, defaulting to noun.
pub fn tag_tokens(tokens: &[String]) -> Vec<(String, PosTag)> {
    let mut tagged: Vec<(String, PosTag)> = Vec::with_capacity(tokens.len());

    for (index, token) in tokens.iter().enumerate() {
        let previous = tagged.last().map(|(_, tag)| *tag);
        let tag = tag_token(token, index, previous);
        tagged.push((token.clone(), tag));
    }

    tagged
}

fn tag_token(token: &str, index: usize, previous: Option<PosTag>) -> PosTag {
    if !token.chars().any(char::is_alphanumeric) {
        return PosTag::Punctuation;
    }

    if token
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        return PosTag::Number;
    }

    let lower = token.to_lowercase();
    let word = lower.as_str();

    if DETERMINERS.contains(&word) {
        return PosTag::Determiner;
    }
    if PRONOUNS.contains(&word) {
        return PosTag::Pronoun;
    }
    if PREPOSITIONS.contains(&word) {
        return PosTag::Preposition;
    }
    if CONJUNCTIONS.contains(&word) {
        return PosTag::Conjunction;
    }
    if VERBS.contains(&word) || word == "n't" {
        return PosTag::Verb;
    }
    if ADVERBS.contains(&word) {
        return PosTag::Adverb;
    }
    if ADJECTIVES.contains(&word) {
        return PosTag::Adjective;
    }

    if index > 0 && token.chars().next().is_some_and(char::is_uppercase) {
        return PosTag::ProperNoun;
    }

    let follows_modifier = matches!(
        previous,
        Some(PosTag::Determiner | PosTag::Adjective | PosTag::Noun | PosTag::ProperNoun)
    );

    if word.len() > 4 && word.ends_with("ly") {
        return PosTag::Adverb;
    }

    if word.len() > 5 && word.ends_with("ing") {
        return if follows_modifier {
            PosTag::Noun
        } else {
            PosTag::Verb
        };
    }

    if word.len() > 4 && word.ends_with("ed") {
        return if matches!(previous, Some(PosTag::Determiner)) {
            PosTag::Adjective
        } else {
            PosTag::Verb
        };
    }

    if word.len() > 4
        && ADJECTIVE_SUFFIXES
            .iter()
            .any(|suffix| word.ends_with(suffix))
    {
        return PosTag::Adjective;
    }

    PosTag::Noun
}
