//! Resource identifiers for storage objects.
//!
//! Identifiers take the form `<base>/keys/<key>` where `<base>` names the
//! container (for object storage, `//s3/cloud/aws/buckets/<bucket>`) and each
//! key segment is escaped with the [`IdentifierScheme`].

use crate::error::{Error, ErrorKind, Result};
use crate::escape::IdentifierScheme;

/// URL scheme accepted by [`parse_s3_url`].
pub const S3_URL_SCHEME: &str = "s3://";

/// Builds resource identifiers below a container base.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResourcePath {
    base: String,
    scheme: IdentifierScheme,
}

impl ResourcePath {
    /// Creates a builder rooted at an arbitrary base identifier.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            scheme: IdentifierScheme::default(),
        }
    }

    /// Creates a builder for an object-storage bucket.
    #[must_use]
    pub fn s3(bucket: &str) -> Self {
        let scheme = IdentifierScheme::default();
        Self {
            base: format!("//s3/cloud/aws/buckets/{}", scheme.escape(bucket)),
            scheme,
        }
    }

    /// Uses a different identifier scheme for key segments.
    #[must_use]
    pub fn with_scheme(mut self, scheme: IdentifierScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Returns the container base identifier.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Returns the scheme used for key segments.
    #[must_use]
    pub const fn scheme(&self) -> IdentifierScheme {
        self.scheme
    }

    /// Returns the identifier of an object key.
    ///
    /// `key` is a raw storage key whose `/` characters separate folders.
    /// A trailing `/` is preserved so folder keys produce folder identifiers.
    #[must_use]
    pub fn key(&self, key: &str) -> String {
        let segments: Vec<&str> = key.split('/').collect();
        format!(
            "{}/keys{}{}",
            self.base,
            self.scheme.delimiter,
            self.scheme.join(&segments)
        )
    }

    /// Returns the base identifier under which a dataset's columns live.
    #[must_use]
    pub fn columns(&self, key: &str) -> String {
        format!("{}/columns", self.key(key))
    }
}

/// Splits an `s3://bucket/key` URL into bucket and key.
///
/// # Errors
/// Returns an error if the URL lacks the scheme or a bucket name.
pub fn parse_s3_url(url: &str) -> Result<(String, String)> {
    let rest = url
        .strip_prefix(S3_URL_SCHEME)
        .ok_or_else(|| Error::new(ErrorKind::InvalidUrl(format!("`{url}` must start with s3://"))))?;
    let (bucket, key) = split_bucket_key(rest);
    if bucket.is_empty() {
        return Err(Error::new(ErrorKind::InvalidUrl(format!(
            "`{url}` has no bucket"
        ))));
    }
    Ok((bucket, key))
}

/// Splits `bucket/some/key` into `("bucket", "some/key")`.
#[must_use]
pub fn split_bucket_key(path: &str) -> (String, String) {
    match path.split_once('/') {
        Some((bucket, key)) => (bucket.to_string(), key.to_string()),
        None => (path.to_string(), String::new()),
    }
}
