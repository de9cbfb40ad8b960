//! Dataset records for files in object storage.

use std::fmt;

use serde::{Deserialize, Serialize};
use strata_foundation::{
    Error, ErrorContext, ErrorKind, ResourcePath, Result, S3_URL_SCHEME, UnknownTypeWarning,
    parse_s3_url, split_bucket_key,
};
use strata_schema::{FieldRecord, MapperConfig, map_column};

/// File formats a dataset can be read as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetFormat {
    /// Comma-separated values.
    Csv,
    /// Tab-separated values.
    Tsv,
    /// Apache Parquet.
    Parquet,
    /// JSON documents or JSON lines.
    Json,
}

const EXTENSIONS: [(&str, DatasetFormat); 10] = [
    (".csv", DatasetFormat::Csv),
    (".csv.gz", DatasetFormat::Csv),
    (".csv.bz2", DatasetFormat::Csv),
    (".tsv", DatasetFormat::Tsv),
    (".tsv.gz", DatasetFormat::Tsv),
    (".tsv.bz2", DatasetFormat::Tsv),
    (".parquet", DatasetFormat::Parquet),
    (".json", DatasetFormat::Json),
    (".jsonl", DatasetFormat::Json),
    (".ndjson", DatasetFormat::Json),
];

impl DatasetFormat {
    /// Detects the format of a dataset from its path, ignoring case.
    ///
    /// # Errors
    /// Returns `InvalidFileFormat` if the extension is not recognized.
    pub fn detect(path: &str) -> Result<Self> {
        let lower = path.to_ascii_lowercase();
        EXTENSIONS
            .iter()
            .find(|(ext, _)| lower.ends_with(ext))
            .map(|(_, format)| *format)
            .ok_or_else(|| {
                Error::new(ErrorKind::InvalidFileFormat {
                    path: path.to_string(),
                    supported: Self::supported_extensions().join(", "),
                })
            })
    }

    /// Returns every extension [`DatasetFormat::detect`] accepts.
    #[must_use]
    pub fn supported_extensions() -> Vec<&'static str> {
        EXTENSIONS.iter().map(|(ext, _)| *ext).collect()
    }

    /// Returns the lowercase format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Tsv => "tsv",
            Self::Parquet => "parquet",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file dataset and its flattened schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetRecord {
    /// Object key within its bucket.
    pub name: String,
    /// Identifier of the dataset.
    pub resource_id: String,
    /// Detected file format.
    pub format: DatasetFormat,
    /// Row count, when the reader reported one.
    pub rows: Option<u64>,
    /// Fields of every column, each column in pre-order.
    pub fields: Vec<FieldRecord>,
}

/// A mapped dataset together with the non-fatal warnings raised for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappedDataset {
    /// The dataset record.
    pub record: DatasetRecord,
    /// Unknown-type warnings from its columns.
    pub warnings: Vec<UnknownTypeWarning>,
}

/// Maps storage locations and column descriptors to dataset records.
#[derive(Clone, Debug, Default)]
pub struct DatasetMapper {
    config: MapperConfig,
}

impl DatasetMapper {
    /// Creates a mapper with the given type-mapping configuration.
    #[must_use]
    pub fn new(config: MapperConfig) -> Self {
        Self { config }
    }

    /// Maps one dataset.
    ///
    /// `location` is either `s3://bucket/key` or `bucket/key`. `columns`
    /// pairs each column name with its type descriptor.
    ///
    /// # Errors
    /// Returns an error if the location is malformed, its format is not
    /// supported, or a column descriptor does not parse. The error's context
    /// names the location and, for descriptor errors, the column.
    pub fn map<N, D>(
        &self,
        location: &str,
        columns: &[(N, D)],
        rows: Option<u64>,
    ) -> Result<MappedDataset>
    where
        N: AsRef<str>,
        D: AsRef<str>,
    {
        let unit = ErrorContext::new().with_unit(location);
        let (bucket, key) = if location.starts_with(S3_URL_SCHEME) {
            parse_s3_url(location).map_err(|e| e.with_context(unit.clone()))?
        } else {
            split_bucket_key(location)
        };
        let format = DatasetFormat::detect(&key).map_err(|e| e.with_context(unit.clone()))?;

        let resource = ResourcePath::s3(&bucket).with_scheme(self.config.scheme);
        let base_id = resource.columns(&key);

        let mut fields = Vec::new();
        let mut warnings = Vec::new();
        for (name, descriptor) in columns {
            let name = name.as_ref();
            let mapped = map_column(name, descriptor.as_ref(), &base_id, &self.config)
                .map_err(|e| e.with_context(unit.clone().with_frame(format!("column {name}"))))?;
            fields.extend(mapped.fields);
            warnings.extend(mapped.warnings);
        }

        tracing::debug!(
            location,
            %format,
            columns = columns.len(),
            fields = fields.len(),
            "mapped dataset"
        );

        Ok(MappedDataset {
            record: DatasetRecord {
                resource_id: resource.key(&key),
                name: key,
                format,
                rows,
                fields,
            },
            warnings,
        })
    }
}
