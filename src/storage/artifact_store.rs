use crate::models::SalesRecord;
use crate::storage::{ArtifactError, ArtifactStore};
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufReader, ErrorKind};
use std::path::{Path, PathBuf};

const HEADER: [&str; 3] = ["sales", "date", "region"];

/// Keeps the sales summary as a CSV file with header `sales,date,region`.
pub struct CsvArtifactStore {
    path: PathBuf
}

impl CsvArtifactStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into()
        }
    }

    fn temporary_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(OsString::from).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> ArtifactError {
        ArtifactError::Io { path: self.path.clone(), source }
    }

    fn csv_error(&self, source: csv::Error) -> ArtifactError {
        ArtifactError::Csv { path: self.path.clone(), source }
    }

    fn write_records(&self, target: &Path, records: &[SalesRecord]) -> Result<(), ArtifactError> {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(target)
            .map_err(|error| self.csv_error(error))?;

        writer.write_record(HEADER).map_err(|error| self.csv_error(error))?;

        for record in records {
            writer.serialize(record).map_err(|error| self.csv_error(error))?;
        }

        writer.flush().map_err(|error| self.io_error(error))
    }
}

impl ArtifactStore for CsvArtifactStore {
    fn save(&self, records: &[SalesRecord]) -> Result<(), ArtifactError> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|error| self.io_error(error))?;
        }

        //NOTE: Written beside the target and renamed over it so a reader never sees a half written summary
        let temporary = self.temporary_path();

        if let Err(error) = self.write_records(&temporary, records) {
            let _ = fs::remove_file(&temporary);
            return Err(error);
        }

        fs::rename(&temporary, &self.path).map_err(|error| {
            let _ = fs::remove_file(&temporary);
            self.io_error(error)
        })
    }

    fn load(&self) -> Result<Vec<SalesRecord>, ArtifactError> {
        let file = File::open(&self.path).map_err(|error| match error.kind() {
            ErrorKind::NotFound => ArtifactError::NotFound { path: self.path.clone() },
            _ => self.io_error(error)
        })?;

        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        if reader.headers().map_err(|error| self.csv_error(error))?.is_empty() {
            return Ok(Vec::new());
        }

        reader.deserialize::<SalesRecord>()
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| self.csv_error(error))
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
