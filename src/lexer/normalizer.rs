use std::iter::FusedIterator;

/// Rewrites `"\r\n"` and a lone `'\r'` to a single `'\n'`
///
/// Holds at most one character of lookahead: when a `'\r'` is followed by
/// anything other than `'\n'`, that character is parked in `cached` and
/// rewritten on the next call. A raw `'\r'` is never yielded.
#[derive(Debug, Clone)]
pub struct NewlineNormalizer<I> {
    /// Underlying character source
    inner: I,
    /// Character read past a lone `'\r'`
    cached: Option<char>,
}

impl<I> NewlineNormalizer<I>
where
    I: Iterator<Item = char>,
{
    /// Wraps a character source
    pub fn new(inner: I) -> Self {
        NewlineNormalizer {
            inner,
            cached: None,
        }
    }
}

impl<I> Iterator for NewlineNormalizer<I>
where
    I: Iterator<Item = char>,
{
    type Item = char;

    fn next(&mut self) -> Option<char> {
        // A parked character is rewritten like any other, so "\r\r" yields two '\n'
        let c = match self.cached.take() {
            Some(c) => c,
            None => self.inner.next()?,
        };

        match c {
            '\r' => {
                // "\r\n" collapses into this '\n'; anything else waits for the next read
                match self.inner.next() {
                    Some('\n') | None => {}
                    Some(other) => self.cached = Some(other),
                }
                Some('\n')
            }
            c => Some(c),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        let cached = usize::from(self.cached.is_some());
        // Every "\r\n" pair halves, so at least half of the remaining input survives
        (
            lower.div_ceil(2).saturating_add(cached),
            upper.and_then(|u| u.checked_add(cached)),
        )
    }
}

impl<I> FusedIterator for NewlineNormalizer<I> where I: FusedIterator<Item = char> {}
