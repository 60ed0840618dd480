//! CSV Upload
//!
//! Parses a user-supplied comma-separated file into an in-memory table for
//! preview. The first record is the header row.

use super::error::{AnalysisError, AnalysisResult};

/// Rows shown in the upload preview
pub const PREVIEW_ROWS: usize = 5;

/// Parsed upload, kept only for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDataset {
    pub file_name: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl UploadedDataset {
    /// Parse CSV bytes.
    ///
    /// Short records are padded with empty fields; a record longer than the
    /// header, invalid UTF-8 or a missing header row fails. Blank header
    /// names become `Unnamed: <index>`.
    pub fn from_csv(file_name: impl Into<String>, data: &[u8]) -> AnalysisResult<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                if h.trim().is_empty() {
                    format!("Unnamed: {}", i)
                } else {
                    h.to_string()
                }
            })
            .collect();
        if headers.is_empty() {
            return Err(AnalysisError::Parse("No columns to parse from file".to_string()));
        }

        let width = headers.len();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() > width {
                let line = record.position().map(|p| p.line()).unwrap_or_default();
                return Err(AnalysisError::Parse(format!(
                    "Expected {} fields in line {}, saw {}",
                    width,
                    line,
                    record.len()
                )));
            }
            let mut row: Vec<String> = record.iter().map(|field| field.to_string()).collect();
            row.resize(width, String::new());
            rows.push(row);
        }

        Ok(Self {
            file_name: file_name.into(),
            headers,
            rows,
        })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// First [`PREVIEW_ROWS`] rows
    pub fn preview(&self) -> &[Vec<String>] {
        &self.rows[..self.rows.len().min(PREVIEW_ROWS)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sensor_log() {
        let csv_data = "timestamp,machine,vibration,temp
2024-01-15 08:00,CNC-01,2.4,68.1
2024-01-15 09:00,CNC-01,2.6,68.9
2024-01-15 10:00,Press-04,1.1,85.2";

        let dataset = UploadedDataset::from_csv("log.csv", csv_data.as_bytes()).unwrap();

        assert_eq!(dataset.file_name, "log.csv");
        assert_eq!(dataset.column_count(), 4);
        assert_eq!(dataset.row_count(), 3);
        assert_eq!(dataset.rows[2][1], "Press-04");
    }

    #[test]
    fn test_header_only_is_valid() {
        let dataset = UploadedDataset::from_csv("empty.csv", b"a,b,c\n").unwrap();
        assert_eq!(dataset.column_count(), 3);
        assert_eq!(dataset.row_count(), 0);
    }

    #[test]
    fn test_preview_limits_rows() {
        let mut csv_data = String::from("id,value\n");
        for i in 0..12 {
            csv_data.push_str(&format!("{},{}\n", i, i * 10));
        }

        let dataset = UploadedDataset::from_csv("big.csv", csv_data.as_bytes()).unwrap();
        assert_eq!(dataset.row_count(), 12);
        assert_eq!(dataset.preview().len(), PREVIEW_ROWS);
        assert_eq!(dataset.preview()[0][0], "0");
    }

    #[test]
    fn test_empty_file_fails() {
        let result = UploadedDataset::from_csv("nothing.csv", b"");
        assert!(matches!(result, Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn test_long_row_fails() {
        let csv_data = "a,b\n1,2\n3,4,5\n";
        let result = UploadedDataset::from_csv("ragged.csv", csv_data.as_bytes());
        assert!(matches!(result, Err(AnalysisError::Parse(_))));
    }

    #[test]
    fn test_short_row_padded() {
        let dataset =
            UploadedDataset::from_csv("short.csv", b"machine,temp,rpm\nCNC-01,68.5\n").unwrap();
        assert_eq!(dataset.row_count(), 1);
        assert_eq!(dataset.rows[0], vec!["CNC-01", "68.5", ""]);
    }

    #[test]
    fn test_blank_headers_named() {
        let dataset = UploadedDataset::from_csv("blank.csv", b",,\n1,2,3\n").unwrap();
        assert_eq!(dataset.headers, vec!["Unnamed: 0", "Unnamed: 1", "Unnamed: 2"]);
        assert_eq!(dataset.rows[0], vec!["1", "2", "3"]);
    }

    #[test]
    fn test_binary_content_fails() {
        let data: &[u8] = &[0x89, 0x50, 0x4e, 0x47, 0xff, 0xfe, b'\n', 0x00, 0xc3];
        let result = UploadedDataset::from_csv("image.png", data);
        assert!(matches!(result, Err(AnalysisError::Parse(_))));
    }
}
