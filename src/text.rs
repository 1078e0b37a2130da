use {
    crate::{check_index, Error, Sortable},
    std::fmt,
};

/// A character string ordered almost case-insensitively: only the letters
/// `a` and `b` fold their case during comparison. Every other character,
/// including every other letter, ranks by its raw code point.
///
/// The characters live in a mutable buffer, so a swap is a plain O(1)
/// exchange; the text is materialized again on [`Characters::as_string`] or
/// through [`Display`](fmt::Display).
#[derive(Clone, Debug, Default)]
pub struct Characters {
    chars: Vec<char>,
}

impl Characters {
    /// Creates a collection over the characters of `text`.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }

    /// Number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Whether the text holds no character.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Materializes the current character order as a `String`.
    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }

    /// The rank a character compares under: `'A'` and `'B'` count as their
    /// lowercase forms, everything else counts as itself. Stored characters
    /// are never rewritten; folding exists only inside `compare`.
    fn fold_case(c: char) -> char {
        match c {
            'A' => 'a',
            'B' => 'b',
            _ => c,
        }
    }
}

impl From<&str> for Characters {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Characters {
    fn from(text: String) -> Self {
        Self::new(&text)
    }
}

impl FromIterator<char> for Characters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Characters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl Sortable for Characters {
    fn len(&self) -> usize {
        Characters::len(self)
    }

    fn compare(&self, left: usize, right: usize) -> Result<bool, Error> {
        check_index(left, self.chars.len())?;
        check_index(right, self.chars.len())?;
        Ok(Self::fold_case(self.chars[left]) > Self::fold_case(self.chars[right]))
    }

    fn swap(&mut self, left: usize, right: usize) -> Result<(), Error> {
        check_index(left, self.chars.len())?;
        check_index(right, self.chars.len())?;
        // `Vec` has no inherent `swap`; an unqualified call here resolves to
        // `Sortable` for `Vec<char>` through auto-ref.
        <[char]>::swap(&mut self.chars, left, right);
        Ok(())
    }

    fn print(&self) {
        println!("{}", self);
    }
}
