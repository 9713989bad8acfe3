use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::group::Counts;
use crate::io::open_maybe_gz;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    /// Header line as read, without the line terminator.
    pub raw: String,
    pub columns: Vec<String>,
}

impl TableHeader {
    pub fn parse(line: &str) -> Self {
        let raw = line.trim_end_matches(['\r', '\n']).to_string();
        let columns = raw.split('\t').map(|s| s.to_string()).collect();
        Self { raw, columns }
    }

    /// Number of value columns after the key column.
    pub fn n_values(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }
}

#[derive(Debug, Clone)]
pub struct Record {
    pub line_no: usize,
    pub key: String,
    pub fields: Vec<String>,
}

/// Line-oriented TSV reader: one header line, then `key<TAB>fields...` records.
pub struct TableReader<R> {
    inner: R,
    source: String,
    header: TableHeader,
    line_no: usize,
    buf: String,
}

impl TableReader<Box<dyn BufRead>> {
    pub fn open(path: &Path) -> Result<Self> {
        let reader =
            open_maybe_gz(path).with_context(|| format!("failed to open {}", path.display()))?;
        Self::new(reader, &path.display().to_string())
    }
}

impl<R: BufRead> TableReader<R> {
    pub fn new(mut inner: R, source: &str) -> Result<Self> {
        let mut buf = String::new();
        let n = inner
            .read_line(&mut buf)
            .with_context(|| format!("failed to read header of {}", source))?;
        if n == 0 {
            bail!("{}: table is empty (missing header)", source);
        }
        Ok(Self {
            inner,
            source: source.to_string(),
            header: TableHeader::parse(&buf),
            line_no: 1,
            buf: String::new(),
        })
    }

    pub fn header(&self) -> &TableHeader {
        &self.header
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn next_record(&mut self) -> Result<Option<Record>> {
        loop {
            self.buf.clear();
            let n = self
                .inner
                .read_line(&mut self.buf)
                .with_context(|| format!("{}:{} read failed", self.source, self.line_no + 1))?;
            if n == 0 {
                return Ok(None);
            }
            self.line_no += 1;
            let line = self.buf.trim_end_matches(['\r', '\n']);
            if line.trim().is_empty() {
                continue;
            }
            let mut parts = line.split('\t');
            let key = parts.next().unwrap_or_default().to_string();
            let fields = parts.map(|s| s.to_string()).collect();
            return Ok(Some(Record {
                line_no: self.line_no,
                key,
                fields,
            }));
        }
    }

    /// Reads the next record as a count row, checking it against the header width.
    pub fn next_counts(&mut self) -> Result<Option<(String, Counts)>> {
        let Some(record) = self.next_record()? else {
            return Ok(None);
        };
        let expected = self.header.n_values();
        if record.fields.len() != expected {
            bail!(
                "{}:{} malformed row '{}' (expected {} count columns, found {})",
                self.source,
                record.line_no,
                record.key,
                expected,
                record.fields.len()
            );
        }
        let counts = parse_counts(&record.fields, &self.source, record.line_no)?;
        Ok(Some((record.key, counts)))
    }
}

pub fn parse_counts(fields: &[String], source: &str, line_no: usize) -> Result<Counts> {
    fields
        .iter()
        .map(|f| {
            f.trim().parse::<u64>().with_context(|| {
                format!("{}:{} invalid count '{}'", source, line_no, f)
            })
        })
        .collect()
}
