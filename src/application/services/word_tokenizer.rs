//! Whitespace-delimited word scanning and rewriting.

use std::borrow::Cow;
use std::ops::Range;
use std::sync::LazyLock;

use regex::{Matches, Regex};

static WORD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+").unwrap());

/// A maximal run of non-whitespace characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word<'a> {
    /// Byte range in the scanned message.
    pub span: Range<usize>,
    /// The word itself.
    pub text: &'a str,
}

/// Lazy iterator over the words of a message.
pub struct Words<'a> {
    inner: Matches<'static, 'a>,
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|m| Word {
            span: m.range(),
            text: m.as_str(),
        })
    }
}

/// Scans `message` left to right for words.
#[must_use]
pub fn words(message: &str) -> Words<'_> {
    Words {
        inner: WORD_RE.find_iter(message),
    }
}

/// Rebuilds `message`, replacing every word for which `replace` returns
/// `Some`. Text between words is copied unchanged and inserted replacements
/// are never scanned again.
pub fn rewrite_words<F>(message: &str, mut replace: F) -> Cow<'_, str>
where
    F: FnMut(&str) -> Option<String>,
{
    let mut output: Option<String> = None;
    let mut copied = 0;

    for word in words(message) {
        if let Some(replacement) = replace(word.text) {
            let out = output.get_or_insert_with(|| String::with_capacity(message.len()));
            out.push_str(&message[copied..word.span.start]);
            out.push_str(&replacement);
            copied = word.span.end;
        }
    }

    match output {
        Some(mut out) => {
            out.push_str(&message[copied..]);
            Cow::Owned(out)
        }
        None => Cow::Borrowed(message),
    }
}
