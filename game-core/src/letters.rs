use game_types::Letter;

/// Set of guessed letters, one bit per letter of the alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LetterSet {
    bits: u32,
}

impl LetterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the letter was not already present
    pub fn insert(&mut self, letter: Letter) -> bool {
        let mask = Self::mask(letter);
        let fresh = self.bits & mask == 0;
        self.bits |= mask;
        fresh
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.bits & Self::mask(letter) != 0
    }

    /// Membership for a raw character; anything outside A-Z is never a member
    pub fn contains_char(&self, c: char) -> bool {
        Letter::new(c).is_some_and(|letter| self.contains(letter))
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Letters in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::alphabet().filter(|letter| self.contains(*letter))
    }

    fn mask(letter: Letter) -> u32 {
        1 << letter.index()
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
