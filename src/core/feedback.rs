//! Guess feedback calculation and representation
//!
//! Each position of a guess receives one of three marks:
//! - Absent (character contributes to no match)
//! - Partial (character is in the target, at another unclaimed position)
//! - Exact (character matches the target at this position)
//!
//! A classification can also be packed into a single base-3 `u16`
//! (0-6560), where position `i` contributes `mark × 3^i`.

use super::equation::{EQUATION_LENGTH, Equation, char_counts};
use std::fmt;
use std::hash::Hash;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent = 0,
    Partial = 1,
    Exact = 2,
}

impl Mark {
    /// Single-letter code: G (green), Y (yellow) or B (black/gray)
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Partial => 'Y',
            Self::Absent => 'B',
        }
    }

    /// Colored square used in shareable results
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Partial => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Parse a mark from a letter or square
    ///
    /// Accepts 'G'/'g'/🟩, 'Y'/'y'/🟨 and 'B'/'b'/'-'/'_'/⬜.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Partial),
            'B' | 'b' | '-' | '_' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }

    const fn from_digit(digit: u16) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Partial,
            _ => Self::Absent,
        }
    }
}

/// Position-by-position feedback for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Classification([Mark; EQUATION_LENGTH]);

impl Classification {
    /// All exact (the guess is the target)
    pub const PERFECT: Self = Self([Mark::Exact; EQUATION_LENGTH]);

    /// All absent
    pub const NONE: Self = Self([Mark::Absent; EQUATION_LENGTH]);

    /// Number of distinct classifications (3^8)
    pub const COUNT: u16 = 6561;

    /// Build a classification from explicit marks
    #[must_use]
    pub const fn new(marks: [Mark; EQUATION_LENGTH]) -> Self {
        Self(marks)
    }

    /// Calculate the feedback when `guess` is played against `target`
    ///
    /// Handles duplicate characters the way the word game does: exact
    /// matches claim their target character first, and partial matches only
    /// draw from what is left.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact matches and remove them from the target pool
    /// 2. Second pass: mark partials from the remaining pool, consuming one
    ///    instance per mark
    ///
    /// # Examples
    /// ```
    /// use nerdle::core::{Classification, Equation, Mark};
    ///
    /// let guess = Equation::parse("13+24=46").unwrap();
    /// let target = Equation::parse("12+34=46").unwrap();
    /// let feedback = Classification::calculate(&guess, &target);
    ///
    /// assert_eq!(feedback.marks()[1], Mark::Partial);
    /// assert_eq!(feedback.count_exact(), 6);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Equation, target: &Equation) -> Self {
        Self::score(guess.chars(), target.chars())
    }

    fn score<T: Copy + Eq + Hash>(
        guess: &[T; EQUATION_LENGTH],
        target: &[T; EQUATION_LENGTH],
    ) -> Self {
        let mut marks = [Mark::Absent; EQUATION_LENGTH];
        let mut remaining = char_counts(target);

        // First pass: exact matches
        for (i, (&g, &t)) in guess.iter().zip(target).enumerate() {
            if g == t {
                marks[i] = Mark::Exact;
                if let Some(count) = remaining.get_mut(&g) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: partial matches from what is left
        for (i, &g) in guess.iter().enumerate() {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(count) = remaining.get_mut(&g)
                && *count > 0
            {
                marks[i] = Mark::Partial;
                *count -= 1;
            }
        }

        Self(marks)
    }

    /// The marks, in guess order
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; EQUATION_LENGTH] {
        &self.0
    }

    /// Check if every position is exact
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Number of exact marks
    #[must_use]
    pub fn count_exact(self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Exact).count()
    }

    /// Number of partial marks
    #[must_use]
    pub fn count_partial(self) -> usize {
        self.0.iter().filter(|&&m| m == Mark::Partial).count()
    }

    /// Base-3 encoding of the marks (0-6560)
    #[must_use]
    pub fn value(self) -> u16 {
        let mut value = 0u16;
        let mut multiplier = 1u16;
        for mark in self.0 {
            value += mark as u16 * multiplier;
            multiplier = multiplier.saturating_mul(3);
        }
        value
    }

    /// Decode a base-3 value produced by [`Classification::value`]
    #[must_use]
    pub fn from_value(value: u16) -> Option<Self> {
        if value >= Self::COUNT {
            return None;
        }
        let mut marks = [Mark::Absent; EQUATION_LENGTH];
        let mut rest = value;
        for mark in &mut marks {
            *mark = Mark::from_digit(rest % 3);
            rest /= 3;
        }
        Some(Self(marks))
    }

    /// Parse a classification from a string like "GYGBBGGG" or "🟩🟨🟩⬜⬜🟩🟩🟩"
    ///
    /// # Examples
    /// ```
    /// use nerdle::core::Classification;
    ///
    /// let a = Classification::from_str("GY-GY---").unwrap();
    /// let b = Classification::from_str("🟩🟨⬜🟩🟨⬜⬜⬜").unwrap();
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != EQUATION_LENGTH {
            return None;
        }

        let mut marks = [Mark::Absent; EQUATION_LENGTH];
        for (mark, ch) in marks.iter_mut().zip(chars) {
            *mark = Mark::from_char(ch)?;
        }
        Some(Self(marks))
    }

    /// Convert to a string of colored squares
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|m| m.emoji()).collect()
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid classification string: {s}"))
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in self.0 {
            write!(f, "{}", mark.letter())?;
        }
        Ok(())
    }
}

/// Compare two arbitrary strings
///
/// Unlike [`Classification::calculate`] this accepts unvalidated input and
/// scores character by character. Anything that is not exactly 8 characters
/// on both sides yields all-absent rather than an error.
///
/// # Examples
/// ```
/// use nerdle::core::{Classification, compare};
///
/// assert!(compare("12+34=46", "12+34=46").is_perfect());
/// assert_eq!(compare("12+34", "12+34=46"), Classification::NONE);
/// ```
#[must_use]
pub fn compare(guess: &str, target: &str) -> Classification {
    let (Some(guess), Some(target)) = (fixed_chars(guess), fixed_chars(target)) else {
        return Classification::NONE;
    };
    Classification::score(&guess, &target)
}

fn fixed_chars(text: &str) -> Option<[char; EQUATION_LENGTH]> {
    let mut chars = [' '; EQUATION_LENGTH];
    let mut iter = text.chars();
    for slot in &mut chars {
        *slot = iter.next()?;
    }
    iter.next().is_none().then_some(chars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Mark::{Absent as A, Exact as E, Partial as P};

    fn marks(guess: &str, target: &str) -> [Mark; EQUATION_LENGTH] {
        *compare(guess, target).marks()
    }

    #[test]
    fn exact_match_is_perfect() {
        for text in ["12+34=46", "11+22=33", "3*34=102", "252/36=7"] {
            let eq = Equation::parse(text).unwrap();
            assert_eq!(Classification::calculate(&eq, &eq), Classification::PERFECT);
        }
    }

    #[test]
    fn duplicates_swapped() {
        // Each swapped pair has two instances in the target, so all are partial
        assert_eq!(marks("22+11=33", "11+22=33"), [P, P, E, P, P, E, E, E]);
    }

    #[test]
    fn mixed_feedback() {
        assert_eq!(marks("13+24=46", "12+34=46"), [E, P, E, P, E, E, E, E]);
    }

    #[test]
    fn mostly_absent() {
        assert_eq!(marks("87-59=03", "12+34=46"), [A, A, A, A, A, E, A, P]);
    }

    #[test]
    fn all_partial_except_fixed_symbols() {
        assert_eq!(marks("21+43=64", "12+34=46"), [P, P, E, P, P, E, P, P]);
    }

    #[test]
    fn exact_takes_priority_over_partial() {
        // Target has two '4's; the exact match at position 6 claims one, so
        // only one of the leading '4's can be partial
        assert_eq!(marks("44+02=46", "12+34=46"), [P, A, E, A, P, E, E, E]);
    }

    #[test]
    fn repeated_guess_character_limited_by_target_count() {
        // The target's only '1' and only '2' are each claimed once
        assert_eq!(marks("11+11=22", "10+20=30"), [E, A, E, A, A, E, P, A]);
    }

    #[test]
    fn unequal_lengths_are_absent() {
        assert_eq!(compare("12+34=46", "1+2=3"), Classification::NONE);
        assert_eq!(compare("", "12+34=46"), Classification::NONE);
        assert_eq!(compare("12+34=467", "12+34=467"), Classification::NONE);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        // 7 characters in 8 bytes
        assert_eq!(compare("é234567", "12+34=46"), Classification::NONE);
        assert_eq!(compare("12+34=46", "é234567"), Classification::NONE);

        // 8 characters in 9 bytes still gets scored
        assert_eq!(marks("é2+34=46", "12+34=46"), [A, E, E, E, E, E, E, E]);
    }

    #[test]
    fn counts() {
        let feedback = compare("13+24=46", "12+34=46");
        assert_eq!(feedback.count_exact(), 6);
        assert_eq!(feedback.count_partial(), 2);
        assert!(!feedback.is_perfect());
    }

    #[test]
    fn value_encoding() {
        assert_eq!(Classification::NONE.value(), 0);
        assert_eq!(Classification::PERFECT.value(), Classification::COUNT - 1);

        let feedback = compare("13+24=46", "12+34=46");
        assert_eq!(Classification::from_value(feedback.value()), Some(feedback));
        assert_eq!(Classification::from_value(Classification::COUNT), None);
    }

    #[test]
    fn from_str_valid() {
        let a = Classification::from_str("GYGBBGGG").unwrap();
        let b = Classification::from_str("gyg--ggg").unwrap();
        let c = Classification::from_str("🟩🟨🟩⬜⬜🟩🟩🟩").unwrap();
        assert_eq!(a, b);
        assert_eq!(a, c);
        assert_eq!(a.marks(), &[E, P, E, A, A, E, E, E]);
    }

    #[test]
    fn from_str_invalid() {
        assert!(Classification::from_str("GYG").is_none());
        assert!(Classification::from_str("GYGBBGGGG").is_none());
        assert!(Classification::from_str("GYGXBGGG").is_none());
        assert!(Classification::from_str("").is_none());
    }

    #[test]
    fn display_and_emoji() {
        let feedback = compare("87-59=03", "12+34=46");
        assert_eq!(feedback.to_string(), "BBBBBGBY");
        assert_eq!(feedback.to_emoji(), "⬜⬜⬜⬜⬜🟩⬜🟨");
    }
}
