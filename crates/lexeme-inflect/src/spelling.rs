//! Spelling transformations shared by generation and inference.
//!
//! Every function here is total: any input string produces some output, and
//! non-alphabetic or empty stems fall through unchanged. The rules are
//! orthographic approximations, not phonology; `vowel_groups` in particular
//! is a deliberate stand-in for syllable counting.

/// True for the five vowel letters, case-insensitive.
pub fn is_vowel(ch: char) -> bool {
    matches!(ch.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// True for any ASCII letter that is not a vowel.
pub fn is_consonant(ch: char) -> bool {
    ch.is_ascii_alphabetic() && !is_vowel(ch)
}

/// Double the final consonant of a CVC stem, as done before -ing/-ed/-er/-est.
///
/// The final consonant must not be `w`, `x`, or `y`. A one-letter consonant
/// stem is doubled as well.
///
/// ```rust
/// use lexeme_inflect::spelling::double_final_consonant;
/// assert_eq!(double_final_consonant("run"), "runn");
/// assert_eq!(double_final_consonant("stop"), "stopp");
/// assert_eq!(double_final_consonant("show"), "show");
/// assert_eq!(double_final_consonant("need"), "need");
/// ```
pub fn double_final_consonant(stem: &str) -> String {
    let chars: Vec<char> = stem.chars().collect();
    match chars.as_slice() {
        [] => String::new(),
        [only] => {
            if is_consonant(*only) {
                format!("{stem}{only}")
            } else {
                stem.to_string()
            }
        }
        [.., before, last] => {
            let third_from_end_ok = chars.len() < 3 || is_consonant(chars[chars.len() - 3]);
            if is_consonant(*last)
                && is_vowel(*before)
                && third_from_end_ok
                && !matches!(last, 'w' | 'x' | 'y')
            {
                format!("{stem}{last}")
            } else {
                stem.to_string()
            }
        }
    }
}

/// Drop a trailing silent `e` before a vowel-initial suffix.
///
/// ```rust
/// use lexeme_inflect::spelling::e_drop;
/// assert_eq!(e_drop("make", "ing"), "making");
/// assert_eq!(e_drop("love", "able"), "lovable");
/// assert_eq!(e_drop("walk", "ed"), "walked");
/// ```
pub fn e_drop(stem: &str, suffix: &str) -> String {
    if stem.ends_with('e') && suffix.chars().next().is_some_and(is_vowel) {
        format!("{}{suffix}", &stem[..stem.len() - 1])
    } else {
        format!("{stem}{suffix}")
    }
}

/// Rewrite a consonant-preceded trailing `y` to `i` before a suffix, unless
/// the suffix itself begins with `i` (which covers the -ing exclusion).
///
/// ```rust
/// use lexeme_inflect::spelling::y_to_i;
/// assert_eq!(y_to_i("carry", "ed"), "carried");
/// assert_eq!(y_to_i("happy", "er"), "happier");
/// assert_eq!(y_to_i("carry", "ing"), "carrying");
/// assert_eq!(y_to_i("play", "ed"), "played");
/// ```
pub fn y_to_i(stem: &str, suffix: &str) -> String {
    if ends_with_consonant_y(stem) && !suffix.starts_with('i') {
        format!("{}i{suffix}", &stem[..stem.len() - 1])
    } else {
        format!("{stem}{suffix}")
    }
}

/// Attach the plural/3rd-person `-s`, choosing `-es` after sibilants and
/// `-ies` after a consonant-preceded `y`.
///
/// ```rust
/// use lexeme_inflect::spelling::pluralize_sibilant;
/// assert_eq!(pluralize_sibilant("box"), "boxes");
/// assert_eq!(pluralize_sibilant("watch"), "watches");
/// assert_eq!(pluralize_sibilant("carry"), "carries");
/// assert_eq!(pluralize_sibilant("cat"), "cats");
/// ```
pub fn pluralize_sibilant(stem: &str) -> String {
    if ends_with_sibilant(stem) {
        format!("{stem}es")
    } else if ends_with_consonant_y(stem) {
        format!("{}ies", &stem[..stem.len() - 1])
    } else {
        format!("{stem}s")
    }
}

/// Structural suffix difference between a lemma and one of its forms.
///
/// Returns `""` when they are equal; otherwise `-` plus the form with the
/// longest common prefix removed. Purely character-level, no phonology.
///
/// ```rust
/// use lexeme_inflect::spelling::ending_diff;
/// assert_eq!(ending_diff("run", "run"), "");
/// assert_eq!(ending_diff("run", "running"), "-ning");
/// assert_eq!(ending_diff("happy", "happier"), "-ier");
/// ```
pub fn ending_diff(lemma: &str, form: &str) -> String {
    if form == lemma {
        return String::new();
    }
    let common = lemma
        .chars()
        .zip(form.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a.len_utf8())
        .sum::<usize>();
    let suffix = &form[common..];
    if suffix.is_empty() {
        String::new()
    } else {
        format!("-{suffix}")
    }
}

/// Count maximal runs of vowel letters, a cheap syllable-count proxy.
///
/// ```rust
/// use lexeme_inflect::spelling::vowel_groups;
/// assert_eq!(vowel_groups("happy"), 2);
/// assert_eq!(vowel_groups("beautiful"), 4);
/// ```
pub fn vowel_groups(word: &str) -> usize {
    let mut groups = 0;
    let mut in_group = false;
    for ch in word.chars() {
        if is_vowel(ch) {
            if !in_group {
                groups += 1;
            }
            in_group = true;
        } else {
            in_group = false;
        }
    }
    groups
}

/// True when the stem ends in a sibilant spelling: s, x, z, ch, or sh.
pub(crate) fn ends_with_sibilant(stem: &str) -> bool {
    stem.ends_with('s')
        || stem.ends_with('x')
        || stem.ends_with('z')
        || stem.ends_with("ch")
        || stem.ends_with("sh")
}

/// True when the stem ends in `y` preceded by a consonant.
pub(crate) fn ends_with_consonant_y(stem: &str) -> bool {
    let mut rev = stem.chars().rev();
    rev.next() == Some('y') && rev.next().is_some_and(is_consonant)
}
