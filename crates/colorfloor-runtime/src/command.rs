#![forbid(unsafe_code)]

//! The single-character command language.
//!
//! Input arrives as a submitted text line. It is trimmed and matched
//! case-insensitively against the four recognized commands; anything else is
//! a [`CommandError::Unrecognized`] the caller shows to the user.

/// A recognized floor command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Enable drawing mode with black.
    Paint,
    /// Enable drawing mode with white (the eraser).
    Erase,
    /// Start disco mode.
    Disco,
    /// Stop drawing and disco modes.
    Stop,
}

impl Command {
    /// Parse a submitted input line.
    pub fn parse(input: &str) -> Result<Self, CommandError> {
        let trimmed = input.trim();
        match trimmed.to_ascii_lowercase().as_str() {
            "p" => Ok(Self::Paint),
            "e" => Ok(Self::Erase),
            "d" => Ok(Self::Disco),
            "s" => Ok(Self::Stop),
            _ => Err(CommandError::Unrecognized(trimmed.to_string())),
        }
    }
}

/// Error for input that matches no command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The (trimmed) input did not match any command.
    Unrecognized(String),
}

impl core::fmt::Display for CommandError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Unrecognized(input) => {
                write!(f, "invalid input {input:?}: use 'p', 'e', 'd', or 's'")
            }
        }
    }
}

impl std::error::Error for CommandError {}


#[cfg(test)]
mod command_proptests {
    use super::Command;
    use proptest::prelude::*;

    fn arb_padding() -> impl Strategy<Value = String> {
        proptest::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..4)
            .prop_map(|chars| chars.into_iter().collect())
    }

    proptest! {
        #[test]
        fn padding_and_case_never_change_the_verdict(
            tuple in (arb_padding(), arb_padding(), prop_oneof![
                Just(('p', Command::Paint)),
                Just(('e', Command::Erase)),
                Just(('d', Command::Disco)),
                Just(('s', Command::Stop)),
            ], any::<bool>()),
        ) {
            let (lead, trail, (ch, expected), upper) = tuple;
            let ch = if upper { ch.to_ascii_uppercase() } else { ch };
            let input = format!("{lead}{ch}{trail}");
            prop_assert_eq!(Command::parse(&input), Ok(expected));
        }

        #[test]
        fn multi_character_words_are_always_rejected(word in "[a-z]{2,8}") {
            prop_assert!(Command::parse(&word).is_err());
        }
    }
}
