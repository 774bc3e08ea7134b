//! Splitting submitted lines into tokens
//!
//! Every single space ends a token, so two spaces in a row leave an
//! empty token between them. Handlers see that as a missing argument.

use heapless::String;

use crate::command::Args;

/// `N` token slots of up to `T - 1` bytes each
pub struct TokenArray<const N: usize, const T: usize> {
    tokens: [String<T>; N],
}

impl<const N: usize, const T: usize> TokenArray<N, T> {
    pub fn new() -> Self {
        Self {
            tokens: core::array::from_fn(|_| String::new()),
        }
    }

    /// Maximum number of bytes kept per token
    pub const fn token_limit() -> usize {
        T.saturating_sub(1)
    }

    /// Split `line` into the token slots, replacing whatever they held.
    ///
    /// Over-long tokens are cut at the slot capacity. Once the last slot
    /// is reached every further token replaces its content. Control
    /// bytes and bytes outside ASCII never become token content.
    pub fn tokenize(&mut self, line: &[u8]) {
        self.clear();

        if N == 0 {
            return;
        }

        let mut index = 0;
        let mut new_token = false;

        for &byte in line {
            match byte {
                b' ' => {
                    if index < N - 1 {
                        index += 1;
                    } else {
                        new_token = true;
                    }
                }
                0x21..=0x7e => {
                    let token = &mut self.tokens[index];

                    if new_token {
                        token.clear();
                        new_token = false;
                    }

                    if token.len() < Self::token_limit() {
                        // Cannot fail, the length is checked above
                        let _ = token.push(byte as char);
                    }
                }
                _ => {}
            }
        }
    }

    /// Empty all slots
    pub fn clear(&mut self) {
        for token in self.tokens.iter_mut() {
            token.clear();
        }
    }

    /// Name of the command, the first token
    pub fn command(&self) -> &str {
        self.token(0)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.iter().all(|token| token.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.as_str())
    }
}

impl<const N: usize, const T: usize> Default for TokenArray<N, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const T: usize> Args for TokenArray<N, T> {
    fn token(&self, index: usize) -> &str {
        self.tokens.get(index).map(|token| token.as_str()).unwrap_or("")
    }

    fn capacity(&self) -> usize {
        N
    }
}
