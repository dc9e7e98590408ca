//! Test data conversion for the text-to-speech benchmark model
//!
//! The TTS benchmark reads its input and expected output vectors as raw
//! little-endian `f32` arrays. Reference vectors are exported as CSV; only
//! the first row of each file is used.

use crate::error::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the model input vector
pub const TTS_INPUT_FILE: &str = "tts.input";

/// File name of the expected model output vector
pub const TTS_OUTPUT_FILE: &str = "tts.output";

/// Paths written by [`generate_tts_data`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TtsDataFiles {
    /// Model input vector
    pub input: PathBuf,
    /// Expected model output vector
    pub output: PathBuf,
}

/// Convert the first row of each CSV into `tts.input` / `tts.output` in `out_dir`
pub fn generate_tts_data(
    input_csv: &Path,
    output_csv: &Path,
    out_dir: &Path,
) -> Result<TtsDataFiles> {
    let files = TtsDataFiles {
        input: out_dir.join(TTS_INPUT_FILE),
        output: out_dir.join(TTS_OUTPUT_FILE),
    };

    for (csv_path, bin_path) in [(input_csv, &files.input), (output_csv, &files.output)] {
        let values = read_first_row(csv_path)?;
        fs::write(bin_path, encode_f32_le(&values)).map_err(|e| ReportError::io(bin_path, e))?;
        log::info!(
            "Wrote {} values from {} to {}",
            values.len(),
            csv_path.display(),
            bin_path.display()
        );
    }

    Ok(files)
}

/// Read the first row of a CSV file as `f32` values
pub fn read_first_row(path: &Path) -> Result<Vec<f32>> {
    let text = fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    parse_first_row(&text)
}

/// Parse the first row of CSV text as `f32` values
pub fn parse_first_row(text: &str) -> Result<Vec<f32>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let record = match reader.records().next() {
        Some(record) => record.map_err(|e| {
            let line = e.position().map_or(0, |p| p.line());
            ReportError::format(line, e.to_string())
        })?,
        None => return Err(ReportError::format(0, "vector file has no data row")),
    };
    let line = record.position().map_or(0, |p| p.line());

    record
        .iter()
        .enumerate()
        .map(|(column, field)| {
            field.parse::<f64>().map(|v| v as f32).map_err(|_| {
                ReportError::format(
                    line,
                    format!("invalid value {field:?} in column {}", column + 1),
                )
            })
        })
        .collect()
}

/// Flat little-endian dump of `values`
pub fn encode_f32_le(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_first_row_only() {
        let values = parse_first_row("1.0,2.5,-3.0\n4.0,5.0\n").unwrap();
        assert_eq!(values, vec![1.0, 2.5, -3.0]);
    }

    #[test]
    fn test_parse_skips_comments_and_blank_lines() {
        let values = parse_first_row("# exported vector\n\n0.5, 0.25\n").unwrap();
        assert_eq!(values, vec![0.5, 0.25]);
    }

    #[test]
    fn test_parse_narrows_to_f32() {
        let values = parse_first_row("0.1\n").unwrap();
        assert_eq!(values, vec![0.1_f32]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(
            parse_first_row("").unwrap_err(),
            ReportError::Format { .. }
        ));
    }

    #[test]
    fn test_parse_invalid_value() {
        let err = parse_first_row("1.0,abc\n").unwrap_err();
        assert!(err.to_string().contains("column 2"));
    }

    #[test]
    fn test_parse_empty_field_is_rejected() {
        let err = parse_first_row("1.0,2.0,\n").unwrap_err();
        match err {
            ReportError::Format { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("column 3"), "reason was {reason:?}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_encode_little_endian() {
        let bytes = encode_f32_le(&[1.0, -2.0]);
        assert_eq!(bytes, vec![0x00, 0x00, 0x80, 0x3f, 0x00, 0x00, 0x00, 0xc0]);
    }

    #[test]
    fn test_generate_tts_data() {
        let dir = TempDir::new().unwrap();
        let input_csv = dir.path().join("input.csv");
        let output_csv = dir.path().join("output.csv");
        fs::write(&input_csv, "1.0,2.5,-3.0\n9,9,9\n").unwrap();
        fs::write(&output_csv, "0.5\n").unwrap();

        let files = generate_tts_data(&input_csv, &output_csv, dir.path()).unwrap();
        assert_eq!(files.input, dir.path().join("tts.input"));

        let input = fs::read(&files.input).unwrap();
        assert_eq!(input, encode_f32_le(&[1.0, 2.5, -3.0]));
        assert_eq!(input.len(), 12);

        let output = fs::read(&files.output).unwrap();
        assert_eq!(output, 0.5_f32.to_le_bytes().to_vec());
    }

    #[test]
    fn test_generate_into_missing_directory() {
        let dir = TempDir::new().unwrap();
        let input_csv = dir.path().join("input.csv");
        fs::write(&input_csv, "1.0\n").unwrap();

        let err = generate_tts_data(&input_csv, &input_csv, &dir.path().join("missing"))
            .unwrap_err();
        assert!(matches!(err, ReportError::Io { .. }));
    }
}
