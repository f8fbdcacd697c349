//! `emoticons.xml` descriptor parsing.
//!
//! Sample descriptor:
//!
//! ```xml
//! <?xml version='1.0'?>
//! <messaging-emoticon-map>
//!   <emoticon file="smile.png">
//!     <string>:)</string>
//!     <string>:-)</string>
//!   </emoticon>
//!   <emoticon file="sad.png">
//!     <string>:(</string>
//!   </emoticon>
//! </messaging-emoticon-map>
//! ```

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use tracing::{trace, warn};

use crate::domain::entities::{EmoticonEntry, PackDescriptor};

const EMOTICON_TAG: &[u8] = b"emoticon";
const STRING_TAG: &[u8] = b"string";
const FILE_ATTRIBUTE: &str = "file";

/// Parses pack descriptors.
pub struct DescriptorParser;

/// Token currently being collected from a `string` element.
struct OpenString {
    depth: usize,
    text: String,
}

/// `emoticon` element that has not been closed yet.
struct OpenEmoticon {
    depth: usize,
    index: usize,
}

impl DescriptorParser {
    /// Parses descriptor text into entries.
    ///
    /// `emoticon` elements are collected at any depth in document order.
    /// Their tokens are the texts of their direct `string` children. A
    /// missing `file` attribute yields an empty file name. Parsing stops at
    /// the first XML error, keeping everything read up to that point.
    #[must_use]
    pub fn parse(content: &str) -> PackDescriptor {
        let mut reader = Reader::from_str(content);
        let mut entries: Vec<EmoticonEntry> = Vec::new();
        let mut emoticons: Vec<OpenEmoticon> = Vec::new();
        let mut string: Option<OpenString> = None;
        let mut depth = 0usize;

        loop {
            match reader.read_event() {
                Ok(Event::Start(e)) => {
                    depth += 1;
                    if string.is_some() {
                        continue;
                    }
                    match e.local_name().as_ref() {
                        EMOTICON_TAG => {
                            emoticons.push(OpenEmoticon {
                                depth,
                                index: entries.len(),
                            });
                            entries.push(EmoticonEntry::new(file_attribute(&e)));
                        }
                        STRING_TAG if is_token_depth(&emoticons, depth) => {
                            string = Some(OpenString {
                                depth,
                                text: String::new(),
                            });
                        }
                        _ => {}
                    }
                }
                Ok(Event::Empty(e)) => {
                    if string.is_some() {
                        continue;
                    }
                    match e.local_name().as_ref() {
                        EMOTICON_TAG => entries.push(EmoticonEntry::new(file_attribute(&e))),
                        STRING_TAG if is_token_depth(&emoticons, depth + 1) => {
                            push_token(&mut entries, &emoticons, String::new());
                        }
                        _ => {}
                    }
                }
                Ok(Event::Text(t)) => {
                    if let Some(open) = string.as_mut() {
                        match t.unescape() {
                            Ok(text) => open.text.push_str(&text),
                            Err(e) => {
                                warn!(error = %e, "Invalid escape in emoticon token");
                                open.text.push_str(&String::from_utf8_lossy(&t));
                            }
                        }
                    }
                }
                Ok(Event::CData(c)) => {
                    if let Some(open) = string.as_mut() {
                        open.text.push_str(&String::from_utf8_lossy(&c));
                    }
                }
                Ok(Event::End(_)) => {
                    if string.as_ref().is_some_and(|s| s.depth == depth) {
                        if let Some(open) = string.take() {
                            push_token(&mut entries, &emoticons, open.text);
                        }
                    } else if string.is_none()
                        && emoticons.last().is_some_and(|open| open.depth == depth)
                    {
                        emoticons.pop();
                    }
                    depth = depth.saturating_sub(1);
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    warn!(
                        position = reader.error_position(),
                        error = %e,
                        parsed = entries.len(),
                        "Malformed emoticon descriptor, keeping entries read so far"
                    );
                    break;
                }
                Ok(_) => {}
            }
        }

        trace!(entries = entries.len(), "Parsed emoticon descriptor");
        PackDescriptor { entries }
    }
}

fn file_attribute(element: &BytesStart<'_>) -> String {
    match element.try_get_attribute(FILE_ATTRIBUTE) {
        Ok(Some(attr)) => attr
            .unescape_value()
            .map_or_else(
                |_| String::from_utf8_lossy(&attr.value).into_owned(),
                Cow::into_owned,
            ),
        Ok(None) => String::new(),
        Err(e) => {
            warn!(error = %e, "Invalid emoticon attributes");
            String::new()
        }
    }
}

fn is_token_depth(emoticons: &[OpenEmoticon], depth: usize) -> bool {
    emoticons.last().is_some_and(|open| open.depth + 1 == depth)
}

fn push_token(entries: &mut [EmoticonEntry], emoticons: &[OpenEmoticon], token: String) {
    if let Some(entry) = emoticons.last().and_then(|open| entries.get_mut(open.index)) {
        entry.tokens.push(token);
    }
}
