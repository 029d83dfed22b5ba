use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::SubstitutionTable;

/// Common Han ideographs (U+4E00..=U+9FA5). Extension blocks are left alone.
static CJK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{4E00}-\x{9FA5}]").expect("valid CJK pattern"));

/// Punctuation dropped outright rather than turned into a separator.
static SYMBOLS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[#,:;@+!?\\/]").expect("valid symbol pattern"));

/// Runs of hyphens and whitespace. The whitespace class is the ECMAScript
/// one: U+FEFF is included, U+0085 is not.
static SEPARATORS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[-\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("valid separator pattern")
});

/// Derives slugs from free text using a substitution table.
#[derive(Debug, Clone, Copy)]
pub struct Slugifier<'t> {
    table: &'t SubstitutionTable,
}

impl<'t> Slugifier<'t> {
    pub fn new(table: &'t SubstitutionTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'t SubstitutionTable {
        self.table
    }

    /// Transliterate + strip + collapse separators + lowercase.
    ///
    /// The steps run in a fixed order: table substitution, CJK removal,
    /// symbol removal, separator collapsing, ASCII lowercasing. Replacement
    /// values are therefore subject to the later steps (`₣` becomes
    /// `french-franc`). Never fails; empty input yields an empty slug.
    pub fn slugify(&self, input: &str) -> String {
        let substituted = self.table.substitute(input);
        let stripped = CJK.replace_all(&substituted, "");
        let stripped = SYMBOLS.replace_all(&stripped, "");
        let mut slug = SEPARATORS.replace_all(&stripped, "-").into_owned();
        slug.make_ascii_lowercase();
        slug
    }
}

impl Default for Slugifier<'static> {
    fn default() -> Self {
        Slugifier::new(SubstitutionTable::builtin())
    }
}

/// Slugify `input` with the built-in table.
pub fn slugify(input: &str) -> String {
    Slugifier::default().slugify(input)
}
