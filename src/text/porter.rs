//! Porter stemmer, NLTK flavour
//!
//! The 1980 Porter algorithm with the extensions NLTK's `PorterStemmer`
//! applies by default: a table of irregular forms, words of one or two
//! letters left untouched, the `ies`/`ied` short-word rules, and the revised
//! step 2 rules (`alli` first, `bli`, `fulli`, `logi`). Vocabularies fitted
//! on NLTK-stemmed text look up the same terms this produces.
//!
//! Rule lists are first-match: once a suffix matches, later rules in the same
//! list are not tried even if the condition fails.

/// Irregular forms mapped straight to their stem
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

/// Condition on the stem left after removing a suffix
#[derive(Debug, Clone, Copy)]
enum Cond {
    Always,
    /// m > 0
    MeasurePositive,
    /// m > 1
    MeasureAbove1,
    /// m > 1 and the stem ends in `s` or `t`
    IonStem,
}

impl Cond {
    fn holds(self, stem: &[u8]) -> bool {
        match self {
            Cond::Always => true,
            Cond::MeasurePositive => measure(stem) > 0,
            Cond::MeasureAbove1 => measure(stem) > 1,
            Cond::IonStem => measure(stem) > 1 && matches!(stem.last(), Some(b's') | Some(b't')),
        }
    }
}

type Rule = (&'static str, &'static str, Cond);

const STEP1A: &[Rule] = &[
    ("sses", "ss", Cond::Always),
    ("ies", "i", Cond::Always),
    ("ss", "ss", Cond::Always),
    ("s", "", Cond::Always),
];

const STEP2: &[Rule] = &[
    ("ational", "ate", Cond::MeasurePositive),
    ("tional", "tion", Cond::MeasurePositive),
    ("enci", "ence", Cond::MeasurePositive),
    ("anci", "ance", Cond::MeasurePositive),
    ("izer", "ize", Cond::MeasurePositive),
    ("bli", "ble", Cond::MeasurePositive),
    ("alli", "al", Cond::MeasurePositive),
    ("entli", "ent", Cond::MeasurePositive),
    ("eli", "e", Cond::MeasurePositive),
    ("ousli", "ous", Cond::MeasurePositive),
    ("ization", "ize", Cond::MeasurePositive),
    ("ation", "ate", Cond::MeasurePositive),
    ("ator", "ate", Cond::MeasurePositive),
    ("alism", "al", Cond::MeasurePositive),
    ("iveness", "ive", Cond::MeasurePositive),
    ("fulness", "ful", Cond::MeasurePositive),
    ("ousness", "ous", Cond::MeasurePositive),
    ("aliti", "al", Cond::MeasurePositive),
    ("iviti", "ive", Cond::MeasurePositive),
    ("biliti", "ble", Cond::MeasurePositive),
    ("fulli", "ful", Cond::MeasurePositive),
];

const STEP3: &[Rule] = &[
    ("icate", "ic", Cond::MeasurePositive),
    ("ative", "", Cond::MeasurePositive),
    ("alize", "al", Cond::MeasurePositive),
    ("iciti", "ic", Cond::MeasurePositive),
    ("ical", "ic", Cond::MeasurePositive),
    ("ful", "", Cond::MeasurePositive),
    ("ness", "", Cond::MeasurePositive),
];

const STEP4: &[Rule] = &[
    ("al", "", Cond::MeasureAbove1),
    ("ance", "", Cond::MeasureAbove1),
    ("ence", "", Cond::MeasureAbove1),
    ("er", "", Cond::MeasureAbove1),
    ("ic", "", Cond::MeasureAbove1),
    ("able", "", Cond::MeasureAbove1),
    ("ible", "", Cond::MeasureAbove1),
    ("ant", "", Cond::MeasureAbove1),
    ("ement", "", Cond::MeasureAbove1),
    ("ment", "", Cond::MeasureAbove1),
    ("ent", "", Cond::MeasureAbove1),
    ("ion", "", Cond::IonStem),
    ("ou", "", Cond::MeasureAbove1),
    ("ism", "", Cond::MeasureAbove1),
    ("ate", "", Cond::MeasureAbove1),
    ("iti", "", Cond::MeasureAbove1),
    ("ous", "", Cond::MeasureAbove1),
    ("ive", "", Cond::MeasureAbove1),
    ("ize", "", Cond::MeasureAbove1),
];

/// Stateless NLTK-compatible Porter stemmer
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl PorterStemmer {
    pub fn new() -> Self {
        PorterStemmer
    }

    /// Stem one word. Non-ASCII input is only lowercased.
    pub fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();

        if let Some((_, stem)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == word) {
            return stem.to_string();
        }
        if word.len() <= 2 || !word.is_ascii() {
            return word;
        }

        let mut w = word.into_bytes();
        w = step1a(w);
        w = step1b(w);
        w = step1c(w);
        w = step2(w);
        w = apply_rules(w, STEP3);
        w = apply_rules(w, STEP4);
        w = step5a(w);
        w = step5b(w);

        // only ASCII letters were ever written
        String::from_utf8(w).unwrap_or_default()
    }
}

fn is_consonant(w: &[u8], i: usize) -> bool {
    match w[i] {
        b'a' | b'e' | b'i' | b'o' | b'u' => false,
        b'y' => i == 0 || !is_consonant(w, i - 1),
        _ => true,
    }
}

/// Number of vowel-consonant sequences, the `m` of `[C](VC){m}[V]`
fn measure(stem: &[u8]) -> usize {
    (1..stem.len())
        .filter(|&i| !is_consonant(stem, i - 1) && is_consonant(stem, i))
        .count()
}

fn contains_vowel(stem: &[u8]) -> bool {
    (0..stem.len()).any(|i| !is_consonant(stem, i))
}

fn ends_double_consonant(w: &[u8]) -> bool {
    let n = w.len();
    n >= 2 && w[n - 1] == w[n - 2] && is_consonant(w, n - 1)
}

fn ends_cvc(w: &[u8]) -> bool {
    let n = w.len();
    (n >= 3
        && is_consonant(w, n - 3)
        && !is_consonant(w, n - 2)
        && is_consonant(w, n - 1)
        && !matches!(w[n - 1], b'w' | b'x' | b'y'))
        || (n == 2 && !is_consonant(w, 0) && is_consonant(w, 1))
}

fn replace_suffix(mut w: Vec<u8>, suffix_len: usize, replacement: &str) -> Vec<u8> {
    w.truncate(w.len() - suffix_len);
    w.extend_from_slice(replacement.as_bytes());
    w
}

fn apply_rules(w: Vec<u8>, rules: &[Rule]) -> Vec<u8> {
    for &(suffix, replacement, cond) in rules {
        if w.ends_with(suffix.as_bytes()) {
            let stem_len = w.len() - suffix.len();
            if cond.holds(&w[..stem_len]) {
                return replace_suffix(w, suffix.len(), replacement);
            }
            return w;
        }
    }
    w
}

fn step1a(w: Vec<u8>) -> Vec<u8> {
    if w.len() == 4 && w.ends_with(b"ies") {
        return replace_suffix(w, 3, "ie");
    }
    apply_rules(w, STEP1A)
}

fn step1b(w: Vec<u8>) -> Vec<u8> {
    if w.ends_with(b"ied") {
        let replacement = if w.len() == 4 { "ie" } else { "i" };
        return replace_suffix(w, 3, replacement);
    }

    if w.ends_with(b"eed") {
        if measure(&w[..w.len() - 3]) > 0 {
            return replace_suffix(w, 3, "ee");
        }
        return w;
    }

    let suffix = ["ed", "ing"]
        .into_iter()
        .find(|suffix| {
            w.ends_with(suffix.as_bytes()) && contains_vowel(&w[..w.len() - suffix.len()])
        });

    let stem = match suffix {
        Some(suffix) => replace_suffix(w, suffix.len(), ""),
        None => return w,
    };

    if stem.ends_with(b"at") || stem.ends_with(b"bl") || stem.ends_with(b"iz") {
        return replace_suffix(stem, 0, "e");
    }

    if ends_double_consonant(&stem) {
        if matches!(stem.last(), Some(b'l') | Some(b's') | Some(b'z')) {
            return stem;
        }
        return replace_suffix(stem, 1, "");
    }

    if measure(&stem) == 1 && ends_cvc(&stem) {
        return replace_suffix(stem, 0, "e");
    }
    stem
}

fn step1c(w: Vec<u8>) -> Vec<u8> {
    let n = w.len();
    if w.ends_with(b"y") && n - 1 > 1 && is_consonant(&w, n - 2) {
        return replace_suffix(w, 1, "i");
    }
    w
}

fn step2(w: Vec<u8>) -> Vec<u8> {
    if w.ends_with(b"alli") && measure(&w[..w.len() - 4]) > 0 {
        return step2(replace_suffix(w, 4, "al"));
    }

    if STEP2.iter().any(|(suffix, _, _)| w.ends_with(suffix.as_bytes())) {
        return apply_rules(w, STEP2);
    }

    // the `l` stays with the stem so short stems such as "geo" qualify
    if w.ends_with(b"logi") {
        if measure(&w[..w.len() - 3]) > 0 {
            return replace_suffix(w, 4, "log");
        }
        return w;
    }
    w
}

fn step5a(w: Vec<u8>) -> Vec<u8> {
    if w.ends_with(b"e") {
        let stem = &w[..w.len() - 1];
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            return replace_suffix(w, 1, "");
        }
    }
    w
}

fn step5b(w: Vec<u8>) -> Vec<u8> {
    if w.ends_with(b"ll") && measure(&w[..w.len() - 1]) > 1 {
        return replace_suffix(w, 1, "");
    }
    w
}
