//! Character substitution table used by the transliteration step.
//!
//! The built-in table maps precomposed letters and a handful of symbol
//! glyphs to ASCII approximations. It is compiled once per process into an
//! Aho-Corasick automaton so that substitution happens in a single pass over
//! the input, with replacement text never scanned again.

use aho_corasick::{AhoCorasick, MatchKind};
use once_cell::sync::Lazy;
use std::borrow::Cow;
use std::collections::HashMap;

use crate::error::TableError;

/// Immutable mapping from a single character to its replacement string.
#[derive(Debug, Clone)]
pub struct SubstitutionTable {
    /// Keys in insertion order (pattern index == position)
    keys: Vec<char>,
    /// Replacement for each key, aligned with `keys`
    values: Vec<Cow<'static, str>>,
    /// Maps key -> position in `keys`
    index: HashMap<char, usize>,
    /// `None` when the table is empty
    automaton: Option<AhoCorasick>,
}

static BUILTIN: Lazy<SubstitutionTable> = Lazy::new(|| {
    SubstitutionTable::from_pairs(BUILTIN_ENTRIES.iter().map(|&(k, v)| (k, Cow::Borrowed(v))))
        .expect("built-in substitution table has unique keys")
});

impl SubstitutionTable {
    /// The process-wide built-in table.
    pub fn builtin() -> &'static SubstitutionTable {
        &BUILTIN
    }

    /// Build a table from `(char, replacement)` pairs.
    ///
    /// Fails with [`TableError::DuplicateKey`] if a character appears twice.
    pub fn from_pairs<I, V>(pairs: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (char, V)>,
        V: Into<Cow<'static, str>>,
    {
        let mut keys = Vec::new();
        let mut values = Vec::new();
        let mut index = HashMap::new();

        for (key, value) in pairs {
            if index.insert(key, keys.len()).is_some() {
                return Err(TableError::DuplicateKey(key));
            }
            keys.push(key);
            values.push(value.into());
        }

        let automaton = if keys.is_empty() {
            None
        } else {
            let patterns: Vec<String> = keys.iter().map(char::to_string).collect();
            Some(
                AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostFirst)
                    .build(&patterns)?,
            )
        };

        tracing::trace!(entries = keys.len(), "built substitution table");

        Ok(Self {
            keys,
            values,
            index,
            automaton,
        })
    }

    /// Replacement for `key`, if it is in the table.
    pub fn get(&self, key: char) -> Option<&str> {
        self.index.get(&key).map(|&i| self.values[i].as_ref())
    }

    pub fn contains(&self, key: char) -> bool {
        self.index.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        self.keys
            .iter()
            .zip(self.values.iter())
            .map(|(&k, v)| (k, v.as_ref()))
    }

    /// Replace every table key in `text` with its value in one pass.
    ///
    /// Borrows the input unchanged when nothing matches.
    pub fn substitute<'a>(&self, text: &'a str) -> Cow<'a, str> {
        match &self.automaton {
            Some(ac) if ac.is_match(text) => Cow::Owned(ac.replace_all(text, &self.values)),
            _ => Cow::Borrowed(text),
        }
    }
}

#[rustfmt::skip]
const BUILTIN_ENTRIES: &[(char, &str)] = &[
    // Latin-1
    ('À', "A"),
    ('Á', "A"),
    ('Â', "A"),
    ('Ã', "A"),
    ('Ä', "A"),
    ('Å', "A"),
    ('Æ', "AE"),
    ('Ç', "C"),
    ('È', "E"),
    ('É', "E"),
    ('Ê', "E"),
    ('Ë', "E"),
    ('Ì', "I"),
    ('Í', "I"),
    ('Î', "I"),
    ('Ï', "I"),
    ('Ð', "D"),
    ('Ñ', "N"),
    ('Ò', "O"),
    ('Ó', "O"),
    ('Ô', "O"),
    ('Õ', "O"),
    ('Ö', "O"),
    ('Ő', "O"),
    ('Ø', "O"),
    ('Ù', "U"),
    ('Ú', "U"),
    ('Û', "U"),
    ('Ü', "U"),
    ('Ű', "U"),
    ('Ý', "Y"),
    ('Þ', "TH"),
    ('ß', "ss"),
    ('à', "a"),
    ('á', "a"),
    ('â', "a"),
    ('ã', "a"),
    ('ä', "a"),
    ('å', "a"),
    ('æ', "ae"),
    ('ç', "c"),
    ('è', "e"),
    ('é', "e"),
    ('ê', "e"),
    ('ë', "e"),
    ('ì', "i"),
    ('í', "i"),
    ('î', "i"),
    ('ï', "i"),
    ('ð', "d"),
    ('ñ', "n"),
    ('ò', "o"),
    ('ó', "o"),
    ('ô', "o"),
    ('õ', "o"),
    ('ö', "o"),
    ('ő', "o"),
    ('ø', "o"),
    ('ù', "u"),
    ('ú', "u"),
    ('û', "u"),
    ('ü', "u"),
    ('ű', "u"),
    ('ý', "y"),
    ('þ', "th"),
    ('ÿ', "y"),
    ('ẞ', "SS"),

    // Greek
    ('α', "a"),
    ('β', "b"),
    ('γ', "g"),
    ('δ', "d"),
    ('ε', "e"),
    ('ζ', "z"),
    ('η', "h"),
    ('θ', "8"),
    ('ι', "i"),
    ('κ', "k"),
    ('λ', "l"),
    ('μ', "m"),
    ('ν', "n"),
    ('ξ', "3"),
    ('ο', "o"),
    ('π', "p"),
    ('ρ', "r"),
    ('σ', "s"),
    ('τ', "t"),
    ('υ', "y"),
    ('φ', "f"),
    ('χ', "x"),
    ('ψ', "ps"),
    ('ω', "w"),
    ('ά', "a"),
    ('έ', "e"),
    ('ί', "i"),
    ('ό', "o"),
    ('ύ', "y"),
    ('ή', "h"),
    ('ώ', "w"),
    ('ς', "s"),
    ('ϊ', "i"),
    ('ΰ', "y"),
    ('ϋ', "y"),
    ('ΐ', "i"),
    ('Α', "A"),
    ('Β', "B"),
    ('Γ', "G"),
    ('Δ', "D"),
    ('Ε', "E"),
    ('Ζ', "Z"),
    ('Η', "H"),
    ('Θ', "8"),
    ('Ι', "I"),
    ('Κ', "K"),
    ('Λ', "L"),
    ('Μ', "M"),
    ('Ν', "N"),
    ('Ξ', "3"),
    ('Ο', "O"),
    ('Π', "P"),
    ('Ρ', "R"),
    ('Σ', "S"),
    ('Τ', "T"),
    ('Υ', "Y"),
    ('Φ', "F"),
    ('Χ', "X"),
    ('Ψ', "PS"),
    ('Ω', "W"),
    ('Ά', "A"),
    ('Έ', "E"),
    ('Ί', "I"),
    ('Ό', "O"),
    ('Ύ', "Y"),
    ('Ή', "H"),
    ('Ώ', "W"),
    ('Ϊ', "I"),
    ('Ϋ', "Y"),

    // Turkish
    ('ş', "s"),
    ('Ş', "S"),
    ('ı', "i"),
    ('İ', "I"),
    ('ğ', "g"),
    ('Ğ', "G"),

    // Russian
    ('а', "a"),
    ('б', "b"),
    ('в', "v"),
    ('г', "g"),
    ('д', "d"),
    ('е', "e"),
    ('ё', "yo"),
    ('ж', "zh"),
    ('з', "z"),
    ('и', "i"),
    ('й', "j"),
    ('к', "k"),
    ('л', "l"),
    ('м', "m"),
    ('н', "n"),
    ('о', "o"),
    ('п', "p"),
    ('р', "r"),
    ('с', "s"),
    ('т', "t"),
    ('у', "u"),
    ('ф', "f"),
    ('х', "h"),
    ('ц', "c"),
    ('ч', "ch"),
    ('ш', "sh"),
    ('щ', "sh"),
    ('ъ', "u"),
    ('ы', "y"),
    ('ь', ""),
    ('э', "e"),
    ('ю', "yu"),
    ('я', "ya"),
    ('А', "A"),
    ('Б', "B"),
    ('В', "V"),
    ('Г', "G"),
    ('Д', "D"),
    ('Е', "E"),
    ('Ё', "Yo"),
    ('Ж', "Zh"),
    ('З', "Z"),
    ('И', "I"),
    ('Й', "J"),
    ('К', "K"),
    ('Л', "L"),
    ('М', "M"),
    ('Н', "N"),
    ('О', "O"),
    ('П', "P"),
    ('Р', "R"),
    ('С', "S"),
    ('Т', "T"),
    ('У', "U"),
    ('Ф', "F"),
    ('Х', "H"),
    ('Ц', "C"),
    ('Ч', "Ch"),
    ('Ш', "Sh"),
    ('Щ', "Sh"),
    ('Ъ', "U"),
    ('Ы', "Y"),
    ('Ь', ""),
    ('Э', "E"),
    ('Ю', "Yu"),
    ('Я', "Ya"),

    // Ukrainian
    ('Є', "Ye"),
    ('І', "I"),
    ('Ї', "Yi"),
    ('Ґ', "G"),
    ('є', "ye"),
    ('і', "i"),
    ('ї', "yi"),
    ('ґ', "g"),

    // Czech
    ('č', "c"),
    ('ď', "d"),
    ('ě', "e"),
    ('ň', "n"),
    ('ř', "r"),
    ('š', "s"),
    ('ť', "t"),
    ('ů', "u"),
    ('ž', "z"),
    ('Č', "C"),
    ('Ď', "D"),
    ('Ě', "E"),
    ('Ň', "N"),
    ('Ř', "R"),
    ('Š', "S"),
    ('Ť', "T"),
    ('Ů', "U"),
    ('Ž', "Z"),

    // Polish
    ('ą', "a"),
    ('ć', "c"),
    ('ę', "e"),
    ('ł', "l"),
    ('ń', "n"),
    ('ś', "s"),
    ('ź', "z"),
    ('ż', "z"),
    ('Ą', "A"),
    ('Ć', "C"),
    ('Ę', "E"),
    ('Ł', "L"),
    ('Ń', "N"),
    ('Ś', "S"),
    ('Ź', "Z"),
    ('Ż', "Z"),

    // Latvian
    ('ā', "a"),
    ('ē', "e"),
    ('ģ', "g"),
    ('ī', "i"),
    ('ķ', "k"),
    ('ļ', "l"),
    ('ņ', "n"),
    ('ū', "u"),
    ('Ā', "A"),
    ('Ē', "E"),
    ('Ģ', "G"),
    ('Ī', "I"),
    ('Ķ', "K"),
    ('Ļ', "L"),
    ('Ņ', "N"),
    ('Ū', "U"),

    // Lithuanian
    ('ė', "e"),
    ('į', "i"),
    ('ų', "u"),
    ('Ė', "E"),
    ('Į', "I"),
    ('Ų', "U"),

    // Romanian
    ('ț', "t"),
    ('Ț', "T"),
    ('ţ', "t"),
    ('Ţ', "T"),
    ('ș', "s"),
    ('Ș', "S"),
    ('ă', "a"),
    ('Ă', "A"),

    // Vietnamese
    ('Ạ', "A"),
    ('Ả', "A"),
    ('Ầ', "A"),
    ('Ấ', "A"),
    ('Ậ', "A"),
    ('Ẩ', "A"),
    ('Ẫ', "A"),
    ('Ằ', "A"),
    ('Ắ', "A"),
    ('Ặ', "A"),
    ('Ẳ', "A"),
    ('Ẵ', "A"),
    ('Ẹ', "E"),
    ('Ẻ', "E"),
    ('Ẽ', "E"),
    ('Ề', "E"),
    ('Ế', "E"),
    ('Ệ', "E"),
    ('Ể', "E"),
    ('Ễ', "E"),
    ('Ị', "I"),
    ('Ỉ', "I"),
    ('Ĩ', "I"),
    ('Ọ', "O"),
    ('Ỏ', "O"),
    ('Ồ', "O"),
    ('Ố', "O"),
    ('Ộ', "O"),
    ('Ổ', "O"),
    ('Ỗ', "O"),
    ('Ơ', "O"),
    ('Ờ', "O"),
    ('Ớ', "O"),
    ('Ợ', "O"),
    ('Ở', "O"),
    ('Ỡ', "O"),
    ('Ụ', "U"),
    ('Ủ', "U"),
    ('Ũ', "U"),
    ('Ư', "U"),
    ('Ừ', "U"),
    ('Ứ', "U"),
    ('Ự', "U"),
    ('Ử', "U"),
    ('Ữ', "U"),
    ('Ỳ', "Y"),
    ('Ỵ', "Y"),
    ('Ỷ', "Y"),
    ('Ỹ', "Y"),
    ('Đ', "D"),
    ('ạ', "a"),
    ('ả', "a"),
    ('ầ', "a"),
    ('ấ', "a"),
    ('ậ', "a"),
    ('ẩ', "a"),
    ('ẫ', "a"),
    ('ằ', "a"),
    ('ắ', "a"),
    ('ặ', "a"),
    ('ẳ', "a"),
    ('ẵ', "a"),
    ('ẹ', "e"),
    ('ẻ', "e"),
    ('ẽ', "e"),
    ('ề', "e"),
    ('ế', "e"),
    ('ệ', "e"),
    ('ể', "e"),
    ('ễ', "e"),
    ('ị', "i"),
    ('ỉ', "i"),
    ('ĩ', "i"),
    ('ọ', "o"),
    ('ỏ', "o"),
    ('ồ', "o"),
    ('ố', "o"),
    ('ộ', "o"),
    ('ổ', "o"),
    ('ỗ', "o"),
    ('ơ', "o"),
    ('ờ', "o"),
    ('ớ', "o"),
    ('ợ', "o"),
    ('ở', "o"),
    ('ỡ', "o"),
    ('ụ', "u"),
    ('ủ', "u"),
    ('ũ', "u"),
    ('ư', "u"),
    ('ừ', "u"),
    ('ứ', "u"),
    ('ự', "u"),
    ('ử', "u"),
    ('ữ', "u"),
    ('ỳ', "y"),
    ('ỵ', "y"),
    ('ỷ', "y"),
    ('ỹ', "y"),
    ('đ', "d"),

    // Currency
    ('€', "euro"),
    ('₢', "cruzeiro"),
    ('₣', "french franc"),
    ('£', "pound"),
    ('₤', "lira"),
    ('₥', "mill"),
    ('₦', "naira"),
    ('₧', "peseta"),
    ('₨', "rupee"),
    ('₩', "won"),
    ('₪', "new shequel"),
    ('₫', "dong"),
    ('₭', "kip"),
    ('₮', "tugrik"),
    ('₯', "drachma"),
    ('₰', "penny"),
    ('₱', "peso"),
    ('₲', "guarani"),
    ('₳', "austral"),
    ('₴', "hryvnia"),
    ('₵', "cedi"),
    ('¢', "cent"),
    ('¥', "yen"),
    ('元', "yuan"),
    ('円', "yen"),
    ('﷼', "rial"),
    ('₠', "ecu"),
    ('¤', "currency"),
    ('฿', "baht"),
    ('$', "dollar"),
    ('₹', "indian rupee"),

    // Symbols
    ('©', "(c)"),
    ('œ', "oe"),
    ('Œ', "OE"),
    ('∑', "sum"),
    ('®', "(r)"),
    ('†', "+"),
    ('“', "\""),
    ('”', "\""),
    ('‘', "'"),
    ('’', "'"),
    ('∂', "d"),
    ('ƒ', "f"),
    ('™', "tm"),
    ('℠', "sm"),
    ('…', "..."),
    ('˚', "o"),
    ('º', "o"),
    ('ª', "a"),
    ('•', "*"),
    ('∆', "delta"),
    ('∞', "infinity"),
    ('♥', "love"),
    ('&', "and"),
    ('|', "or"),
    ('<', "less"),
    ('>', "greater"),
];
