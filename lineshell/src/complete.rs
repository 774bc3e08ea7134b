//! Tab completion

/// A type that provides possible line completions
///
/// ```
/// use lineshell::complete::Completer;
///
/// static FRUIT_LIST: [&str; 6] = ["Apple", "Banana", "Grape", "Peach", "Pear", "Plum"];
///
/// struct Fruit;
///
/// impl Completer for Fruit {
///     fn complete(&self, line: &str, n: usize) -> Option<&str> {
///         FRUIT_LIST.iter()
///             .filter(|candidate| candidate.starts_with(line))
///             .nth(n)
///             .map(|candidate| &candidate[line.len()..])
///     }
/// }
///
/// assert_eq!(Fruit.complete("Pe", 1), Some("ar"))
/// ```
pub trait Completer {
    /// Given `line` return the continuation of the `n`'th candidate
    /// starting with `line`
    fn complete(&self, line: &str, n: usize) -> Option<&str>;
}

impl Completer for () {
    fn complete(&self, _: &str, _: usize) -> Option<&str> {
        None
    }
}

impl<T: Completer> Completer for &T {
    fn complete(&self, line: &str, n: usize) -> Option<&str> {
        T::complete(self, line, n)
    }
}

/// Outcome of completing a prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion<'a> {
    NoMatch,
    /// Exactly one candidate, holds the part missing from the prefix
    Unique(&'a str),
    /// Number of candidates when there is more than one
    Ambiguous(usize),
}

impl<'a> Completion<'a> {
    /// Classify `prefix` against the candidates of `completer`
    pub fn find<C: Completer + ?Sized>(completer: &'a C, prefix: &str) -> Self {
        match completer.complete(prefix, 0) {
            None => Completion::NoMatch,
            Some(suffix) => match completer.complete(prefix, 1) {
                None => Completion::Unique(suffix),
                Some(_) => Completion::Ambiguous(Candidates::new(completer, prefix).count()),
            },
        }
    }
}

/// Iterator over the continuations offered for a prefix
pub struct Candidates<'a, 'p, C: ?Sized> {
    completer: &'a C,
    prefix: &'p str,
    n: usize,
}

impl<'a, 'p, C: Completer + ?Sized> Candidates<'a, 'p, C> {
    pub fn new(completer: &'a C, prefix: &'p str) -> Self {
        Self {
            completer,
            prefix,
            n: 0,
        }
    }
}

impl<'a, 'p, C: Completer + ?Sized> Iterator for Candidates<'a, 'p, C> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let suffix = self.completer.complete(self.prefix, self.n)?;
        self.n += 1;

        Some(suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    struct Words(&'static [&'static str]);

    impl Completer for Words {
        fn complete(&self, line: &str, n: usize) -> Option<&str> {
            self.0
                .iter()
                .filter(|word| word.starts_with(line))
                .nth(n)
                .map(|word| &word[line.len()..])
        }
    }

    const CALC: Words = Words(&["add", "sub", "mul", "div"]);

    #[test]
    fn unique() {
        assert_eq!(Completion::find(&CALC, "a"), Completion::Unique("dd"));
        assert_eq!(Completion::find(&CALC, "s"), Completion::Unique("ub"));
        assert_eq!(Completion::find(&CALC, "add"), Completion::Unique(""));
    }

    #[test]
    fn no_match() {
        assert_eq!(Completion::find(&CALC, "x"), Completion::NoMatch);
        assert_eq!(Completion::find(&CALC, "add "), Completion::NoMatch);
        // Prefix match is case sensitive
        assert_eq!(Completion::find(&CALC, "A"), Completion::NoMatch);
        assert_eq!(Completion::find(&(), ""), Completion::NoMatch);
    }

    #[test]
    fn ambiguous() {
        assert_eq!(Completion::find(&CALC, ""), Completion::Ambiguous(4));

        let words = Words(&["set", "show", "stats", "add"]);
        assert_eq!(Completion::find(&words, "s"), Completion::Ambiguous(3));

        let candidates: Vec<&str> = Candidates::new(&words, "s").collect();
        assert_eq!(candidates, ["et", "how", "tats"]);
    }
}
