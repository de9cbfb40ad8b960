//! Escaping of path segments embedded in resource identifiers.
//!
//! Object keys and field names may contain the character used to separate
//! identifier segments. Every segment is passed through [`escape`] before it
//! is joined into an identifier and through [`unescape`] after an identifier
//! is split, so that structural splits never collide with data.
//!
//! Within a segment the escape character and the delimiter are each prefixed
//! with the escape character:
//!
//! ```text
//! segment      token
//! report.csv   report.csv
//! a/b          a\/b
//! c:\tmp       c:\\tmp
//! ```

use crate::error::{Error, Result};

/// The delimiter and escape characters used to build identifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierScheme {
    /// Separates segments of an identifier.
    pub delimiter: char,
    /// Prefixes a delimiter or escape character that belongs to segment data.
    pub escape: char,
}

impl Default for IdentifierScheme {
    fn default() -> Self {
        Self {
            delimiter: '/',
            escape: '\\',
        }
    }
}

impl IdentifierScheme {
    /// Creates a scheme with the given delimiter and escape characters.
    ///
    /// # Errors
    /// Returns an error if the two characters are equal.
    pub fn new(delimiter: char, escape: char) -> Result<Self> {
        if delimiter == escape {
            return Err(Error::invalid_identifier(
                delimiter.to_string(),
                "delimiter and escape character must differ",
            ));
        }
        Ok(Self { delimiter, escape })
    }

    /// Escapes a single segment so it can be embedded in an identifier.
    #[must_use]
    pub fn escape(&self, segment: &str) -> String {
        let mut token = String::with_capacity(segment.len());
        for c in segment.chars() {
            if c == self.delimiter || c == self.escape {
                token.push(self.escape);
            }
            token.push(c);
        }
        token
    }

    /// Reverses [`IdentifierScheme::escape`].
    ///
    /// # Errors
    /// Returns an error on a dangling escape character, an escape in front of
    /// an ordinary character, or an unescaped delimiter.
    pub fn unescape(&self, token: &str) -> Result<String> {
        let mut segment = String::with_capacity(token.len());
        let mut chars = token.chars();
        while let Some(c) = chars.next() {
            if c == self.escape {
                match chars.next() {
                    Some(next) if next == self.delimiter || next == self.escape => {
                        segment.push(next);
                    }
                    Some(next) => {
                        return Err(Error::invalid_identifier(
                            token,
                            format!("invalid escape sequence `{}{next}`", self.escape),
                        ));
                    }
                    None => {
                        return Err(Error::invalid_identifier(token, "dangling escape character"));
                    }
                }
            } else if c == self.delimiter {
                return Err(Error::invalid_identifier(
                    token,
                    "unescaped delimiter inside a segment",
                ));
            } else {
                segment.push(c);
            }
        }
        Ok(segment)
    }

    /// Splits a path on unescaped delimiters and unescapes every segment.
    ///
    /// An empty path has no segments. A trailing delimiter produces a final
    /// empty segment; see [`IdentifierScheme::split_folder`].
    ///
    /// # Errors
    /// Returns an error if any segment fails to unescape.
    pub fn split(&self, path: &str) -> Result<Vec<String>> {
        if path.is_empty() {
            return Ok(Vec::new());
        }

        let mut segments = Vec::new();
        let mut token = String::new();
        let mut chars = path.chars();
        while let Some(c) = chars.next() {
            if c == self.escape {
                token.push(c);
                match chars.next() {
                    Some(next) => token.push(next),
                    None => {
                        return Err(Error::invalid_identifier(path, "dangling escape character"));
                    }
                }
            } else if c == self.delimiter {
                segments.push(self.unescape(&token)?);
                token.clear();
            } else {
                token.push(c);
            }
        }
        segments.push(self.unescape(&token)?);
        Ok(segments)
    }

    /// Splits a folder path, dropping the trailing delimiter if present.
    ///
    /// # Errors
    /// Returns an error if any segment fails to unescape.
    pub fn split_folder(&self, path: &str) -> Result<Vec<String>> {
        let mut segments = self.split(path)?;
        if segments.last().is_some_and(String::is_empty) {
            segments.pop();
        }
        Ok(segments)
    }

    /// Escapes every segment and joins them with the delimiter.
    #[must_use]
    pub fn join<S: AsRef<str>>(&self, segments: &[S]) -> String {
        let mut path = String::new();
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                path.push(self.delimiter);
            }
            path.push_str(&self.escape(segment.as_ref()));
        }
        path
    }

    /// Joins segments as a folder path, terminated by the delimiter.
    #[must_use]
    pub fn join_folder<S: AsRef<str>>(&self, segments: &[S]) -> String {
        let mut path = self.join(segments);
        if !segments.is_empty() {
            path.push(self.delimiter);
        }
        path
    }

    /// Returns true if the path ends with a delimiter that is not escaped.
    #[must_use]
    pub fn ends_with_delimiter(&self, path: &str) -> bool {
        let Some(body) = path.strip_suffix(self.delimiter) else {
            return false;
        };
        let escapes = body.chars().rev().take_while(|c| *c == self.escape).count();
        escapes % 2 == 0
    }
}

/// Escapes a segment with the default `/` and `\` scheme.
#[must_use]
pub fn escape(segment: &str) -> String {
    IdentifierScheme::default().escape(segment)
}

/// Unescapes a token with the default `/` and `\` scheme.
///
/// # Errors
/// Returns an error if the token is not a valid escaped segment.
pub fn unescape(token: &str) -> Result<String> {
    IdentifierScheme::default().unescape(token)
}
