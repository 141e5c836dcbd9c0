use crate::{
    domain::{RawSubscriber, RecordError, Subscriber},
    subscriber_list::SubscriberList,
};
use std::{
    fs::File,
    fmt,
    io::{self, Cursor, Read},
    path::{Path, PathBuf},
};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to open the export at `{}`", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to read the export as `;`-separated UTF-8 text")]
    MalformedCsv(#[from] csv::Error),
    /// `line` is the 1-based line in the export file, the header being line 1.
    #[error("Row on file line {line} of the export is malformed")]
    MalformedRow {
        line: u64,
        #[source]
        source: RecordError,
    },
}

/// A subscriber export waiting to be parsed.
///
/// The underlying stream is consumed by [`CsvSource::parse`] and closed when
/// it returns, whether parsing succeeded or not. Dropping an unparsed source
/// closes it as well.
pub struct CsvSource {
    origin: String,
    stream: Box<dyn Read + Send>,
}

impl fmt::Debug for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CsvSource")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl CsvSource {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = open_file(path).map_err(|source| LoadError::SourceNotFound {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(Self::from_reader(path.display().to_string(), file))
    }

    /// Wraps an export that was obtained without touching the filesystem.
    pub fn from_bytes(content: impl Into<Vec<u8>>) -> Self {
        Self::from_reader("memory", Cursor::new(content.into()))
    }

    /// Wraps any readable stream; `origin` only names it in logs.
    pub fn from_reader(origin: impl Into<String>, reader: impl Read + Send + 'static) -> Self {
        Self {
            origin: origin.into(),
            stream: Box::new(reader),
        }
    }

    /// Parses every row of the export. A single malformed row fails the
    /// whole load.
    #[tracing::instrument(name = "Parse subscriber export", skip(self), fields(origin = %self.origin))]
    pub fn parse(self) -> Result<SubscriberList, LoadError> {
        let stream = skip_bom(self.stream).map_err(csv::Error::from)?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b';')
            .quote(b'"')
            .trim(csv::Trim::Headers)
            .from_reader(stream);
        let headers = reader.headers()?.clone();

        let mut records = Vec::new();
        for row in reader.records() {
            let row = row?;
            let line = row.position().map_or(0, |position| position.line());
            let raw: RawSubscriber = row.deserialize(Some(&headers))?;
            let subscriber = Subscriber::try_from(raw)
                .map_err(|source| LoadError::MalformedRow { line, source })?;
            records.push(subscriber);
        }

        let subscribers = SubscriberList::new(records);
        tracing::debug!(
            records = subscribers.records().len(),
            active = subscribers.active_records().count(),
            prices = subscribers.distinct_active_prices().len(),
            "Parsed subscriber export"
        );

        Ok(subscribers)
    }
}

fn open_file(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "expected a file, found a directory",
        ));
    }
    Ok(file)
}

// Reads until three bytes or EOF, so short reads cannot hide the mark.
fn skip_bom(mut stream: impl Read) -> io::Result<impl Read> {
    let mut prefix = Vec::with_capacity(UTF8_BOM.len());
    (&mut stream)
        .take(UTF8_BOM.len() as u64)
        .read_to_end(&mut prefix)?;
    if prefix == UTF8_BOM {
        prefix.clear();
    }
    Ok(Cursor::new(prefix).chain(stream))
}
