/// Folds a lower-case character to its unaccented ASCII spelling.
fn fold_diacritic(c: char, out: &mut String) {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => out.push('a'),
        'ç' => out.push('c'),
        'è' | 'é' | 'ê' | 'ë' => out.push('e'),
        'ì' | 'í' | 'î' | 'ï' => out.push('i'),
        'ñ' => out.push('n'),
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => out.push('o'),
        'ù' | 'ú' | 'û' | 'ü' => out.push('u'),
        'ý' | 'ÿ' => out.push('y'),
        'œ' => out.push_str("oe"),
        'æ' => out.push_str("ae"),
        'ß' => out.push_str("ss"),
        other => out.push(other),
    }
}

/// Lower-cases, strips diacritics and punctuation, and collapses whitespace.
///
/// Both sides of a name comparison must go through this function.
/// Punctuation becomes a space so `Saint-Émilion` and `saint emilion`
/// compare equal.
pub fn normalize_text(input: &str) -> String {
    let mut folded = String::with_capacity(input.len());
    for c in input.chars().flat_map(char::to_lowercase) {
        fold_diacritic(c, &mut folded);
    }

    let spaced: String = folded
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// True when `term` appears in `haystack` as whole words.
/// Both inputs must already be normalized.
pub fn contains_words(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    format!(" {} ", haystack).contains(&format!(" {} ", term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_strip_diacritics_and_case() {
        assert_eq!(normalize_text("Château Côte Rôtie"), "chateau cote rotie");
    }

    #[test]
    fn should_replace_punctuation_and_collapse_whitespace() {
        assert_eq!(
            normalize_text("  Saint-Émilion   Grand Cru, 2018! "),
            "saint emilion grand cru 2018"
        );
    }

    #[test]
    fn should_fold_ligatures() {
        assert_eq!(normalize_text("Cœur de Bœuf"), "coeur de boeuf");
    }

    #[test]
    fn should_match_whole_words_only() {
        assert!(contains_words("pinot noir rose", "rose"));
        assert!(contains_words("cotes du rhone rouge", "cotes du rhone"));
        assert!(!contains_words("primrose blend", "rose"));
        assert!(!contains_words("anything", ""));
    }
}
