use std::collections::HashSet;

/// Indonesian stop words removed from queries before stemming.
const INDONESIAN_STOP_WORDS: &[&str] = &[
    "yang", "untuk", "pada", "ke", "para", "namun", "menurut", "antara", "dia", "dua", "ia",
    "seperti", "jika", "sehingga", "kembali", "dan", "tidak", "ini", "karena", "kepada", "oleh",
    "saat", "harus", "sementara", "setelah", "belum", "kami", "sekitar", "bagi", "serta", "di",
    "dari", "telah", "sebagai", "masih", "hal", "ketika", "adalah", "itu", "dalam", "bisa",
    "bahwa", "atau", "hanya", "kita", "dengan", "akan", "juga", "ada", "mereka", "sudah", "saya",
    "terhadap", "secara", "agar", "lain", "anda", "begitu", "mengapa", "kenapa", "yaitu", "yakni",
    "daripada", "itulah", "lagi", "maka", "tentang", "demi", "dimana", "kemana", "pula", "sambil",
    "sebelum", "sesudah", "supaya", "guna", "kah", "pun", "sampai", "sedangkan", "selagi",
    "tetapi", "apakah", "kecuali", "sebab", "selain", "seolah", "seraya", "seterusnya", "tanpa",
    "agak", "boleh", "dapat", "dsb", "dst", "dll", "dahulu", "dulunya", "anu", "demikian", "tapi",
    "ingin", "nggak", "mari", "nanti", "melainkan", "oh", "ok", "seharusnya", "sebetulnya",
    "setiap", "setidaknya", "sesuatu", "pasti", "saja", "toh", "ya", "walau", "tolong", "tentu",
    "amat", "apalagi", "bagaimanapun",
];

/// Exact-match stop word filter over lowercase words.
#[derive(Debug, Clone)]
pub struct StopWords {
    words: HashSet<&'static str>,
}

impl StopWords {
    /// The built-in Indonesian list.
    pub fn indonesian() -> Self {
        Self {
            words: INDONESIAN_STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_words_are_stop_words() {
        let stop_words = StopWords::indonesian();
        for word in ["yang", "dan", "di", "dari", "untuk", "adalah"] {
            assert!(stop_words.contains(word), "{word} should be a stop word");
        }
    }

    #[test]
    fn test_content_words_are_kept() {
        let stop_words = StopWords::indonesian();
        for word in ["ekonomi", "olahraga", "presiden", "banjir"] {
            assert!(!stop_words.contains(word), "{word} should not be a stop word");
        }
    }

    #[test]
    fn test_matching_is_exact() {
        let stop_words = StopWords::indonesian();
        assert!(!stop_words.contains("Yang"));
        assert!(!stop_words.contains("yangg"));
    }
}
