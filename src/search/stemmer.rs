//! Dictionary-driven Indonesian stemmer.
//!
//! Follows the confix-stripping approach: inflectional suffixes, then
//! derivational suffixes, then up to three derivational prefixes, checking
//! every intermediate form against a dictionary of known roots. A word with
//! no known root is returned as-is.

use std::collections::HashSet;

/// Words shorter than this are never stripped.
const MIN_STRIP_LEN: usize = 4;

/// Maximum number of stacked derivational prefixes.
const MAX_PREFIXES: usize = 3;

const PARTICLES: &[&str] = &["lah", "kah", "tah", "pun"];
const POSSESSIVES: &[&str] = &["nya", "ku", "mu"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Suffix {
    Kan,
    An,
    I,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prefix {
    Di,
    Ke,
    Se,
    Te,
    Be,
    Me,
    Pe,
}

impl Prefix {
    /// Prefix/suffix pairs that never form a confix.
    fn forbids(self, suffix: Suffix) -> bool {
        matches!(
            (self, suffix),
            (Prefix::Be, Suffix::I)
                | (Prefix::Di, Suffix::An)
                | (Prefix::Ke, Suffix::I | Suffix::Kan)
                | (Prefix::Me, Suffix::An)
                | (Prefix::Se, Suffix::I | Suffix::Kan)
                | (Prefix::Te, Suffix::An)
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct Stemmer {
    roots: HashSet<String>,
}

impl Stemmer {
    /// Build a stemmer whose dictionary holds the given root words.
    pub fn new<I, S>(roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Add more root words to the dictionary.
    pub fn extend<I, S>(&mut self, roots: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roots.extend(roots.into_iter().map(Into::into));
    }

    pub fn dictionary_size(&self) -> usize {
        self.roots.len()
    }

    fn is_root(&self, word: &str) -> bool {
        self.roots.contains(word)
    }

    /// Reduce a lowercase word to its root.
    pub fn stem(&self, word: &str) -> String {
        if word.chars().count() < MIN_STRIP_LEN || self.is_root(word) {
            return word.to_string();
        }

        for (base, suffix) in suffix_candidates(word) {
            if self.is_root(&base) {
                return base;
            }
            if let Some(root) = self.strip_prefixes(&base, suffix, 0, None) {
                return root;
            }
        }

        word.to_string()
    }

    fn strip_prefixes(
        &self,
        word: &str,
        suffix: Option<Suffix>,
        depth: usize,
        previous: Option<Prefix>,
    ) -> Option<String> {
        if depth >= MAX_PREFIXES {
            return None;
        }

        for (prefix, remainder) in prefix_candidates(word) {
            if previous == Some(prefix) {
                continue;
            }
            if depth == 0 && suffix.is_some_and(|s| prefix.forbids(s)) {
                continue;
            }
            if remainder.chars().count() < 2 {
                continue;
            }
            if self.is_root(&remainder) {
                return Some(remainder);
            }
            if let Some(root) = self.strip_prefixes(&remainder, suffix, depth + 1, Some(prefix)) {
                return Some(root);
            }
        }

        None
    }
}

fn strip_suffix_keeping<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    word.strip_suffix(suffix)
        .filter(|rest| rest.chars().count() >= 2)
}

/// Forms to try, most stripped first, each with the derivational suffix it
/// lost (if any).
fn suffix_candidates(word: &str) -> Vec<(String, Option<Suffix>)> {
    let without_particle = PARTICLES
        .iter()
        .find_map(|p| strip_suffix_keeping(word, p))
        .unwrap_or(word);
    let without_possessive = POSSESSIVES
        .iter()
        .find_map(|p| strip_suffix_keeping(without_particle, p))
        .unwrap_or(without_particle);

    let mut candidates: Vec<(String, Option<Suffix>)> = Vec::new();
    if let Some(rest) = strip_suffix_keeping(without_possessive, "kan") {
        candidates.push((rest.to_string(), Some(Suffix::Kan)));
    }
    if let Some(rest) = strip_suffix_keeping(without_possessive, "an") {
        candidates.push((rest.to_string(), Some(Suffix::An)));
    } else if let Some(rest) = strip_suffix_keeping(without_possessive, "i") {
        candidates.push((rest.to_string(), Some(Suffix::I)));
    }

    for form in [without_possessive, without_particle, word] {
        if !candidates.iter().any(|(c, _)| c == form) {
            candidates.push((form.to_string(), None));
        }
    }

    candidates
}

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u')
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

fn starts_with_vowel(s: &str) -> bool {
    first_char(s).is_some_and(is_vowel)
}

/// `C` followed by `er`, as in `kerja` or `serta`.
fn is_consonant_er(s: &str) -> bool {
    let mut chars = s.chars();
    matches!(
        (chars.next(), chars.next(), chars.next()),
        (Some(c), Some('e'), Some('r')) if !is_vowel(c)
    )
}

/// All plausible (prefix, remainder) splits of `word`, including the
/// recoded initial letter that nasal prefixes absorb.
fn prefix_candidates(word: &str) -> Vec<(Prefix, String)> {
    let mut out = Vec::new();

    for simple in [("di", Prefix::Di), ("ke", Prefix::Ke), ("se", Prefix::Se)] {
        if let Some(rest) = word.strip_prefix(simple.0) {
            out.push((simple.1, rest.to_string()));
        }
    }

    if let Some(rest) = word.strip_prefix("ter") {
        out.push((Prefix::Te, rest.to_string()));
        if starts_with_vowel(rest) {
            out.push((Prefix::Te, format!("r{rest}")));
        }
    } else if let Some(rest) = word.strip_prefix("te") {
        if is_consonant_er(rest) {
            out.push((Prefix::Te, rest.to_string()));
        }
    }

    if word == "belajar" {
        out.push((Prefix::Be, "ajar".to_string()));
    } else if let Some(rest) = word.strip_prefix("ber") {
        out.push((Prefix::Be, rest.to_string()));
        if starts_with_vowel(rest) {
            out.push((Prefix::Be, format!("r{rest}")));
        }
    } else if let Some(rest) = word.strip_prefix("be") {
        if is_consonant_er(rest) {
            out.push((Prefix::Be, rest.to_string()));
        }
    }

    nasal_candidates(word, "me", Prefix::Me, &mut out);

    if let Some(rest) = word.strip_prefix("pel").filter(|r| *r == "ajar") {
        out.push((Prefix::Pe, rest.to_string()));
    }
    if let Some(rest) = word.strip_prefix("per") {
        out.push((Prefix::Pe, rest.to_string()));
        if starts_with_vowel(rest) {
            out.push((Prefix::Pe, format!("r{rest}")));
        }
    }
    nasal_candidates(word, "pe", Prefix::Pe, &mut out);
    if let Some(rest) = word.strip_prefix("pe") {
        if let Some(c) = first_char(rest) {
            if !is_vowel(c) && !matches!(c, 'r' | 'w' | 'y' | 'l' | 'm' | 'n') {
                out.push((Prefix::Pe, rest.to_string()));
            } else if is_consonant_er(rest) {
                out.push((Prefix::Pe, rest.to_string()));
            }
        }
    }

    out
}

/// Rules shared by `me-` and `pe-`: the nasal that joins the prefix to the
/// root may replace the root's first consonant.
fn nasal_candidates(word: &str, base: &str, prefix: Prefix, out: &mut Vec<(Prefix, String)>) {
    let Some(after_base) = word.strip_prefix(base) else {
        return;
    };

    if let Some(rest) = after_base.strip_prefix("ng") {
        out.push((prefix, rest.to_string()));
        if starts_with_vowel(rest) {
            out.push((prefix, format!("k{rest}")));
        }
    } else if let Some(rest) = after_base.strip_prefix("ny") {
        if starts_with_vowel(rest) {
            out.push((prefix, format!("s{rest}")));
        }
    } else if let Some(rest) = after_base.strip_prefix('m') {
        match first_char(rest) {
            Some('b' | 'f' | 'v') => out.push((prefix, rest.to_string())),
            Some('p') if prefix == Prefix::Me && rest.starts_with("pe") => {
                out.push((prefix, rest.to_string()))
            }
            Some(c) if is_vowel(c) => {
                out.push((prefix, format!("m{rest}")));
                out.push((prefix, format!("p{rest}")));
            }
            _ => {}
        }
    } else if let Some(rest) = after_base.strip_prefix('n') {
        match first_char(rest) {
            Some('c' | 'd' | 'j' | 's' | 'z') => out.push((prefix, rest.to_string())),
            Some(c) if is_vowel(c) => {
                out.push((prefix, format!("n{rest}")));
                out.push((prefix, format!("t{rest}")));
            }
            _ => {}
        }
    } else if let Some(c) = first_char(after_base) {
        let mut chars = after_base.chars();
        chars.next();
        let followed_by_vowel = chars.next().is_some_and(is_vowel);
        if matches!(c, 'l' | 'r' | 'w' | 'y') && followed_by_vowel {
            out.push((prefix, after_base.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stemmer() -> Stemmer {
        Stemmer::new([
            "makan", "ajar", "kirim", "tulis", "sapu", "baca", "lihat", "kerja", "main", "ekonomi",
            "pukul", "dagang", "ambil", "jual", "buku", "cari", "baik", "rasa",
        ])
    }

    #[test]
    fn test_root_is_unchanged() {
        assert_eq!(stemmer().stem("ekonomi"), "ekonomi");
        assert_eq!(stemmer().stem("makan"), "makan");
    }

    #[test]
    fn test_short_words_are_unchanged() {
        assert_eq!(stemmer().stem("dia"), "dia");
        assert_eq!(stemmer().stem("ku"), "ku");
    }

    #[test]
    fn test_unknown_word_is_unchanged() {
        assert_eq!(stemmer().stem("xyzabcan"), "xyzabcan");
    }

    #[test]
    fn test_inflectional_suffixes() {
        let s = stemmer();
        assert_eq!(s.stem("ekonominya"), "ekonomi");
        assert_eq!(s.stem("makanlah"), "makan");
        assert_eq!(s.stem("bukunyalah"), "buku");
    }

    #[test]
    fn test_derivational_suffixes() {
        let s = stemmer();
        assert_eq!(s.stem("makanan"), "makan");
        assert_eq!(s.stem("jualan"), "jual");
    }

    #[test]
    fn test_simple_prefixes() {
        let s = stemmer();
        assert_eq!(s.stem("dimainkan"), "main");
        assert_eq!(s.stem("bermain"), "main");
        assert_eq!(s.stem("bekerja"), "kerja");
        assert_eq!(s.stem("belajar"), "ajar");
        assert_eq!(s.stem("terlihat"), "lihat");
    }

    #[test]
    fn test_nasal_prefixes_recode_initial_letter() {
        let s = stemmer();
        assert_eq!(s.stem("menulis"), "tulis");
        assert_eq!(s.stem("menyapu"), "sapu");
        assert_eq!(s.stem("membaca"), "baca");
        assert_eq!(s.stem("memukul"), "pukul");
        assert_eq!(s.stem("mengirimkan"), "kirim");
        assert_eq!(s.stem("mengambil"), "ambil");
        assert_eq!(s.stem("mencari"), "cari");
        assert_eq!(s.stem("merasa"), "rasa");
    }

    #[test]
    fn test_pe_prefixes() {
        let s = stemmer();
        assert_eq!(s.stem("pedagang"), "dagang");
        assert_eq!(s.stem("penjualan"), "jual");
        assert_eq!(s.stem("pelajaran"), "ajar");
        assert_eq!(s.stem("pekerja"), "kerja");
    }

    #[test]
    fn test_stacked_prefixes() {
        let s = stemmer();
        assert_eq!(s.stem("memperbaiki"), "baik");
    }

    #[test]
    fn test_forbidden_confix_falls_back_to_unsuffixed_form() {
        // me-...-an is not a confix, so "memakan" must resolve through the
        // prefix alone.
        assert_eq!(stemmer().stem("memakan"), "makan");
    }

    #[test]
    fn test_extend_dictionary() {
        let mut s = Stemmer::new(["main"]);
        assert_eq!(s.stem("menulis"), "menulis");
        s.extend(["tulis"]);
        assert_eq!(s.stem("menulis"), "tulis");
        assert_eq!(s.dictionary_size(), 2);
    }
}
