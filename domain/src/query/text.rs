//! Text length limit value object

/// Maximum length used when a caller does not pick one
pub const DEFAULT_MAX_LENGTH: usize = 25;

/// Optional cap on the number of characters in a text answer
///
/// Length is counted in Unicode scalar values, not bytes. A limit of
/// zero only accepts the empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextLimit {
    max_chars: Option<usize>,
}

/// A text answer went past its [`TextLimit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextTooLong {
    pub length: usize,
    pub max: usize,
}

impl TextLimit {
    pub fn new(max_chars: Option<usize>) -> Self {
        Self { max_chars }
    }

    pub fn at_most(max_chars: usize) -> Self {
        Self {
            max_chars: Some(max_chars),
        }
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    pub fn check(&self, text: &str) -> Result<(), TextTooLong> {
        match self.max_chars {
            Some(max) => {
                let length = text.chars().count();
                if length > max {
                    Err(TextTooLong { length, max })
                } else {
                    Ok(())
                }
            }
            None => Ok(()),
        }
    }
}

impl Default for TextLimit {
    fn default() -> Self {
        Self::at_most(DEFAULT_MAX_LENGTH)
    }
}
