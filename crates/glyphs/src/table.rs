use jigsaw_core::{Facing, Orientation, Role, Syllable};

/// Whether a phoneme is written on the vertical or horizontal stroke.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Category {
    Consonant,
    Vowel,
}

impl From<Role> for Category {
    fn from(role: Role) -> Self {
        match role {
            Role::Consonant => Self::Consonant,
            Role::Vowel => Self::Vowel,
        }
    }
}

/// Every phoneme the script can draw.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phoneme {
    B,
    D,
    M,
    N,
    G,
    H,
    F,
    L,
    W,
    Y,
    P,
    T,
    K,
    /// Glottal stop, `?`.
    Glottal,
    J,
    C,
    R,
    /// Rolled R, written as a capital `R`.
    RolledR,
    S,
    Z,
    A,
    O,
    /// Stressed `e`, written `e!`.
    EmphaticE,
    U,
    E,
    I,
}

/// The procedural shape family a phoneme is drawn with.
///
/// Mirrored pairs of letters share a family and differ only in
/// orientation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// One lobe across the middle of the vertical.
    RoundedMiddle(Orientation),
    /// One lobe near the top of the vertical.
    RoundedTop(Orientation),
    /// One lobe near the bottom of the vertical.
    RoundedBottom(Orientation),
    /// Two stacked lobes.
    RoundedDouble(Orientation),
    /// Two ticks joined by a curve bowing back toward the base line.
    Bracket(Orientation),
    /// One chevron across the middle of the vertical.
    PointyMiddle(Orientation),
    PointyTop(Orientation),
    PointyBottom(Orientation),
    /// Two stacked chevrons.
    PointyDouble(Orientation),
    /// An S-shaped pair of lobes bulging to opposite sides.
    Zigzag,
    /// A Z-shaped slash across the vertical.
    Diagonal,
    /// One arch on the horizontal.
    Arch(Facing),
    /// One chevron on the horizontal.
    Chevron(Facing),
    /// A downward arch followed by an upward one.
    DoubleArch,
    /// A down-then-up zigzag.
    DoubleChevron,
}

impl Phoneme {
    /// Letter code as written in segmented text.
    pub fn code(self) -> &'static str {
        match self {
            Self::B => "b",
            Self::D => "d",
            Self::M => "m",
            Self::N => "n",
            Self::G => "g",
            Self::H => "h",
            Self::F => "f",
            Self::L => "l",
            Self::W => "w",
            Self::Y => "y",
            Self::P => "p",
            Self::T => "t",
            Self::K => "k",
            Self::Glottal => "?",
            Self::J => "j",
            Self::C => "c",
            Self::R => "r",
            Self::RolledR => "R",
            Self::S => "s",
            Self::Z => "z",
            Self::A => "a",
            Self::O => "o",
            Self::EmphaticE => "e!",
            Self::U => "u",
            Self::E => "e",
            Self::I => "i",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Self::A | Self::O | Self::EmphaticE | Self::U | Self::E | Self::I => Category::Vowel,
            _ => Category::Consonant,
        }
    }

    pub fn shape(self) -> Shape {
        use Orientation::{Left, Right};

        match self {
            Self::B => Shape::RoundedMiddle(Right),
            Self::D => Shape::RoundedMiddle(Left),
            Self::M => Shape::RoundedTop(Right),
            Self::N => Shape::RoundedTop(Left),
            Self::G => Shape::RoundedBottom(Right),
            Self::H => Shape::RoundedBottom(Left),
            Self::F => Shape::RoundedDouble(Right),
            Self::L => Shape::RoundedDouble(Left),
            Self::W => Shape::Bracket(Right),
            Self::Y => Shape::Bracket(Left),
            Self::P => Shape::PointyMiddle(Right),
            Self::T => Shape::PointyMiddle(Left),
            Self::K => Shape::PointyBottom(Right),
            Self::Glottal => Shape::PointyBottom(Left),
            Self::J => Shape::PointyTop(Right),
            Self::C => Shape::PointyTop(Left),
            Self::R => Shape::PointyDouble(Right),
            Self::RolledR => Shape::PointyDouble(Left),
            Self::S => Shape::Zigzag,
            Self::Z => Shape::Diagonal,
            Self::A => Shape::Arch(Facing::Up),
            Self::O => Shape::Arch(Facing::Down),
            Self::EmphaticE => Shape::Chevron(Facing::Up),
            Self::U => Shape::Chevron(Facing::Down),
            Self::E => Shape::DoubleArch,
            Self::I => Shape::DoubleChevron,
        }
    }
}

/// A row of the phoneme table.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PhonemeEntry {
    pub code: &'static str,
    pub category: Category,
    pub phoneme: Phoneme,
}

const fn entry(code: &'static str, category: Category, phoneme: Phoneme) -> PhonemeEntry {
    PhonemeEntry {
        code,
        category,
        phoneme,
    }
}

/// Every recognized code, consonants first, in reference-chart order.
pub static PHONEMES: [PhonemeEntry; 26] = {
    use Category::{Consonant, Vowel};

    [
        entry("b", Consonant, Phoneme::B),
        entry("g", Consonant, Phoneme::G),
        entry("m", Consonant, Phoneme::M),
        entry("f", Consonant, Phoneme::F),
        entry("s", Consonant, Phoneme::S),
        entry("p", Consonant, Phoneme::P),
        entry("k", Consonant, Phoneme::K),
        entry("j", Consonant, Phoneme::J),
        entry("r", Consonant, Phoneme::R),
        entry("z", Consonant, Phoneme::Z),
        entry("d", Consonant, Phoneme::D),
        entry("h", Consonant, Phoneme::H),
        entry("n", Consonant, Phoneme::N),
        entry("l", Consonant, Phoneme::L),
        entry("w", Consonant, Phoneme::W),
        entry("t", Consonant, Phoneme::T),
        entry("?", Consonant, Phoneme::Glottal),
        entry("c", Consonant, Phoneme::C),
        entry("R", Consonant, Phoneme::RolledR),
        entry("y", Consonant, Phoneme::Y),
        entry("a", Vowel, Phoneme::A),
        entry("o", Vowel, Phoneme::O),
        entry("e!", Vowel, Phoneme::EmphaticE),
        entry("u", Vowel, Phoneme::U),
        entry("e", Vowel, Phoneme::E),
        entry("i", Vowel, Phoneme::I),
    ]
};

/// Lookup over [PHONEMES].
///
/// A miss is not an error: it tells the drawer to use a fallback glyph.
pub struct PhonemeTable;

impl PhonemeTable {
    /// Find the phoneme written as `code`, in either category.
    pub fn lookup(code: &str) -> Option<Phoneme> {
        PHONEMES
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.phoneme)
    }

    /// Find the phoneme written as `code`, only if it may fill `role`.
    pub fn resolve(code: &str, role: Role) -> Option<Phoneme> {
        Self::lookup(code).filter(|phoneme| phoneme.category() == Category::from(role))
    }

    /// Codes in `category`, in table order.
    pub fn codes(category: Category) -> impl Iterator<Item = &'static str> {
        PHONEMES
            .iter()
            .filter(move |entry| entry.category == category)
            .map(|entry| entry.code)
    }

    /// Would any part of `syllable` be drawn with a fallback glyph?
    ///
    /// An empty vowel is silence, not a miss.
    pub fn has_fallback(syllable: &Syllable) -> bool {
        let vowel = syllable.vowel_code();
        Self::resolve(&syllable.consonant, Role::Consonant).is_none()
            || (!vowel.is_empty() && Self::resolve(&vowel, Role::Vowel).is_none())
    }
}
