use std::fmt::{self, Display};

const ANSI_RESET: &str = "\x1B[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Gray,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Self::Red => 91,
            Self::Gray => 90,
        }
    }
}

/// Wraps `content` in a colour that is always reset after it is written.
pub(crate) struct Styled<T> {
    color: Option<Color>,
    content: T,
}

impl<T> Styled<T> {
    pub fn new(color: Color, enabled: bool, content: T) -> Self {
        Self {
            color: enabled.then_some(color),
            content,
        }
    }
}

impl<T: Display> Display for Styled<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.color {
            Some(color) => write!(f, "\x1B[{}m{}{ANSI_RESET}", color.code(), self.content),
            None => self.content.fmt(f),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Color, Styled};

    #[test]
    fn reset_follows_content() {
        let s = Styled::new(Color::Red, true, "oops").to_string();
        assert_eq!(s, "\x1B[91moops\x1B[0m");
    }

    #[test]
    fn disabled_is_plain() {
        assert_eq!(Styled::new(Color::Gray, false, 42).to_string(), "42");
    }
}
