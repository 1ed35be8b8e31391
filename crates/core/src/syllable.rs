use core::fmt;

/// Glottal stop marker. Also the implicit onset of vowel-initial syllables.
pub const GLOTTAL: char = '?';

/// Stress marker, absorbed into the syllable it follows.
pub const STRESS: char = '!';

/// Rolled R: the only letter whose case is significant.
pub const ROLLED_R: char = 'R';

/// Letters that start the vowel slice of a syllable.
pub const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];

/// Is `c` one of the five vowel letters?
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// One grid row: a consonant on the vertical stroke and a vowel on the
/// horizontal stroke below it.
///
/// Either slice may be empty. Codes are kept verbatim; whether they name a
/// known phoneme is decided when the syllable is drawn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Syllable {
    /// Letters before the first vowel.
    pub consonant: String,
    /// The first vowel and everything after it, without the stress marker.
    pub vowel: String,
    /// Was this syllable followed by [STRESS]?
    pub stressed: bool,
}

impl Syllable {
    pub fn new(consonant: impl Into<String>, vowel: impl Into<String>, stressed: bool) -> Self {
        Self {
            consonant: consonant.into(),
            vowel: vowel.into(),
            stressed,
        }
    }

    /// Split a matched unit at its first vowel letter.
    pub fn from_unit(unit: &str, stressed: bool) -> Self {
        let (consonant, vowel) = unit.split_at(unit.find(is_vowel).unwrap_or(unit.len()));
        Self::new(consonant, vowel, stressed)
    }

    /// Key for the vowel glyph lookup. Stress folds into the code, which is
    /// how the emphatic `e!` is reached.
    pub fn vowel_code(&self) -> String {
        if self.stressed {
            format!("{}{STRESS}", self.vowel)
        } else {
            self.vowel.clone()
        }
    }

    /// Does the syllable open on a bare vowel?
    pub fn is_vowel_initial(&self) -> bool {
        self.consonant.is_empty() && !self.vowel.is_empty()
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.consonant)?;
        f.write_str(&self.vowel)?;
        if self.stressed {
            write!(f, "{STRESS}")?;
        }
        Ok(())
    }
}

/// One column of the grid: syllables from top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Word {
    pub syllables: Vec<Syllable>,
}

impl Word {
    pub fn new(syllables: Vec<Syllable>) -> Self {
        Self { syllables }
    }

    /// Number of rows this column occupies.
    pub fn len(&self) -> usize {
        self.syllables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.syllables.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Syllable> {
        self.syllables.iter()
    }
}

impl FromIterator<Syllable> for Word {
    fn from_iter<I: IntoIterator<Item = Syllable>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Word {
    type Item = &'a Syllable;
    type IntoIter = core::slice::Iter<'a, Syllable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
