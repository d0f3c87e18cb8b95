//! CSV Audit Log Adapter - Implementation of AuditLog.
//!
//! Appends one row per submission to a single CSV file. The header row is
//! written when the file is created (or found empty). An existing file's
//! header is checked once per process before the first append, and a
//! missing final line break is restored so the next row starts on its own
//! line. A write that fails partway is truncated back off the file.
//!
//! All appends go through one async mutex and the file is opened in append
//! mode, so concurrent submissions never interleave or lose rows.

use async_trait::async_trait;
use serde::Serialize;
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncSeekExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;

use crate::domain::assessment::PredictionRecord;
use crate::ports::{AuditLog, AuditLogError, AUDIT_COLUMNS};

/// One log row, in `AUDIT_COLUMNS` order.
#[derive(Debug, Serialize)]
struct AuditRow {
    age: u16,
    sex: &'static str,
    chest_pain_type: &'static str,
    resting_bp: u16,
    cholesterol: u16,
    fasting_blood_sugar: &'static str,
    rest_ecg: &'static str,
    max_heart_rate: u16,
    exercise_angina: &'static str,
    oldpeak: f64,
    slope: &'static str,
    major_vessels: &'static str,
    thalassemia: &'static str,
    prediction: &'static str,
    risk_probability: f64,
}

impl From<&PredictionRecord> for AuditRow {
    fn from(record: &PredictionRecord) -> Self {
        let inputs = record.inputs();
        let assessment = record.assessment();
        Self {
            age: inputs.age.value(),
            sex: inputs.sex.label(),
            chest_pain_type: inputs.chest_pain_type.label(),
            resting_bp: inputs.resting_bp.value(),
            cholesterol: inputs.cholesterol.value(),
            fasting_blood_sugar: inputs.fasting_blood_sugar.label(),
            rest_ecg: inputs.rest_ecg.label(),
            max_heart_rate: inputs.max_heart_rate.value(),
            exercise_angina: inputs.exercise_angina.label(),
            oldpeak: inputs.oldpeak.value(),
            slope: inputs.slope.label(),
            major_vessels: inputs.major_vessels.label(),
            thalassemia: inputs.thalassemia.label(),
            prediction: assessment.label.as_str(),
            risk_probability: assessment.probability.rounded(),
        }
    }
}

#[derive(Debug, Default)]
struct WriterState {
    header_verified: bool,
}

/// Append-only CSV log of submissions.
#[derive(Debug)]
pub struct CsvAuditLog {
    path: PathBuf,
    state: Mutex<WriterState>,
}

impl CsvAuditLog {
    /// Create a log writing to `path`. Nothing touches the disk until the
    /// first append.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            state: Mutex::new(WriterState::default()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn display_path(&self) -> String {
        self.path.display().to_string()
    }

    fn io_error(&self, err: std::io::Error) -> AuditLogError {
        AuditLogError::from_io(self.display_path(), &err)
    }

    async fn ensure_parent_dir(&self) -> Result<(), AuditLogError> {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent)
                .await
                .map_err(|e| self.io_error(e)),
            _ => Ok(()),
        }
    }

    /// True when the file is missing or has no content yet.
    async fn needs_header(&self) -> Result<bool, AuditLogError> {
        match fs::metadata(&self.path).await {
            Ok(metadata) => Ok(metadata.len() == 0),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(true),
            Err(e) => Err(self.io_error(e)),
        }
    }

    /// Compares the first line of an existing log against `AUDIT_COLUMNS`.
    async fn verify_header(&self) -> Result<(), AuditLogError> {
        let file = fs::File::open(&self.path).await.map_err(|e| self.io_error(e))?;
        let mut first_line = String::new();
        BufReader::new(file)
            .read_line(&mut first_line)
            .await
            .map_err(|e| self.io_error(e))?;

        let line = first_line.trim_start_matches('\u{feff}');
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(line.as_bytes());
        let found = match reader.records().next() {
            Some(Ok(record)) => record,
            Some(Err(e)) => return Err(AuditLogError::encoding(e.to_string())),
            None => csv::StringRecord::new(),
        };

        if found.iter().ne(AUDIT_COLUMNS) {
            return Err(AuditLogError::schema_mismatch(
                self.display_path(),
                found.iter().collect::<Vec<_>>().join(","),
            ));
        }
        Ok(())
    }

    /// True when the (non-empty) file's last byte is not `\n`.
    async fn missing_final_newline(&self) -> Result<bool, AuditLogError> {
        let mut file = fs::File::open(&self.path).await.map_err(|e| self.io_error(e))?;
        file.seek(SeekFrom::End(-1))
            .await
            .map_err(|e| self.io_error(e))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)
            .await
            .map_err(|e| self.io_error(e))?;
        Ok(last[0] != b'\n')
    }

    /// Appends `bytes`, cutting the file back to its previous length if the
    /// write does not complete.
    async fn append_or_roll_back(&self, bytes: &[u8]) -> Result<(), AuditLogError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;
        let original_len = file.metadata().await.map_err(|e| self.io_error(e))?.len();

        let written = match file.write_all(bytes).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };
        if let Err(err) = written {
            if let Err(truncate_err) = file.set_len(original_len).await {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %truncate_err,
                    "Failed to roll back partial audit row"
                );
            }
            return Err(self.io_error(err));
        }
        Ok(())
    }
}

/// Encodes the optional header and one row as CSV bytes.
fn encode_row(row: &AuditRow, with_header: bool) -> Result<Vec<u8>, AuditLogError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    if with_header {
        writer
            .write_record(AUDIT_COLUMNS)
            .map_err(|e| AuditLogError::encoding(e.to_string()))?;
    }
    writer
        .serialize(row)
        .map_err(|e| AuditLogError::encoding(e.to_string()))?;
    writer
        .into_inner()
        .map_err(|e| AuditLogError::encoding(e.to_string()))
}

#[async_trait]
impl AuditLog for CsvAuditLog {
    async fn append(&self, record: &PredictionRecord) -> Result<(), AuditLogError> {
        let mut state = self.state.lock().await;

        self.ensure_parent_dir().await?;
        let with_header = self.needs_header().await?;

        let mut bytes = Vec::new();
        if !with_header && !state.header_verified {
            self.verify_header().await?;
            if self.missing_final_newline().await? {
                bytes.push(b'\n');
            }
        }
        bytes.extend(encode_row(&AuditRow::from(record), with_header)?);

        self.append_or_roll_back(&bytes).await?;

        state.header_verified = true;
        tracing::debug!(
            path = %self.path.display(),
            submission_id = %record.submission_id(),
            "Appended submission to audit log"
        );
        Ok(())
    }
}
