//! pyradiomics CSV reader with encoding and delimiter auto-detection.
//!
//! A pyradiomics batch export has one header row and one row per case. This
//! converter produces one assessor per run, so only the last data row is kept:
//! earlier rows are replaced wholesale, never merged.

pub mod column;

use std::path::Path;

use crate::error::{CsvError, CsvResult};

pub use column::{
    parse_column_name, resolve_column, ColumnName, ResolvedColumn, SkipReason, SkippedColumn,
    RESERVED_COLUMNS,
};

/// Result of reading a measurement CSV
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Column headers
    pub headers: Vec<String>,
    /// Values of the last data row, aligned with `headers`
    pub row: Vec<String>,
    /// Number of data rows in the file
    pub row_count: usize,
    /// Detected encoding
    pub encoding: String,
    /// Detected delimiter
    pub delimiter: char,
}

impl ParseResult {
    /// Iterate `(header, value)` pairs of the retained row.
    pub fn columns(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.row.iter().map(String::as_str))
    }
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let charset = chardet::detect(bytes).0;

    match charset.to_lowercase().as_str() {
        "" | "ascii" | "utf-8" | "utf8" | "utf-8-sig" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        other => other.to_string(),
    }
}

/// Decode bytes to string using the specified encoding.
///
/// A leading byte order mark is dropped. Unknown labels fall back to lossy UTF-8.
pub fn decode_content(bytes: &[u8], encoding: &str) -> CsvResult<String> {
    match encoding_rs::Encoding::for_label(encoding.as_bytes()) {
        Some(enc) if enc == encoding_rs::UTF_8 => {
            let (text, had_errors) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
            if had_errors {
                return Err(CsvError::Encoding("invalid UTF-8 sequence".to_string()));
            }
            Ok(text.into_owned())
        }
        Some(enc) => Ok(enc.decode(bytes).0.into_owned()),
        None => Ok(String::from_utf8_lossy(bytes)
            .trim_start_matches('\u{feff}')
            .to_string()),
    }
}

/// Detect the delimiter by counting occurrences in the header line
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text with an explicit delimiter, keeping the last data row.
pub fn parse_csv_str(content: &str, delimiter: char, encoding: String) -> CsvResult<ParseResult> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(CsvError::NoHeaders);
    }

    let mut last = None;
    let mut row_count = 0;
    for record in reader.records() {
        last = Some(record?);
        row_count += 1;
    }

    let record = last.ok_or(CsvError::NoDataRows)?;
    let row = (0..headers.len())
        .map(|i| record.get(i).unwrap_or("").to_string())
        .collect();

    Ok(ParseResult {
        headers,
        row,
        row_count,
        encoding,
        delimiter,
    })
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> CsvResult<ParseResult> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyFile);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    parse_csv_str(&content, delimiter, encoding)
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
pub fn parse_csv_file_auto<P: AsRef<Path>>(path: P) -> CsvResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_row() {
        let csv = "Image,Mask,original_firstorder_Mean\nimg.nii,mask.nii,12.5";
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();

        assert_eq!(result.delimiter, ',');
        assert_eq!(result.row_count, 1);
        assert_eq!(result.headers, vec!["Image", "Mask", "original_firstorder_Mean"]);
        assert_eq!(result.row, vec!["img.nii", "mask.nii", "12.5"]);
    }

    #[test]
    fn test_quoted_value_with_delimiter() {
        let csv = "general_info_BoundingBox,original_firstorder_Mean\n\"[0,0,0,10,10,10]\",1";
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();

        let cols: Vec<_> = result.columns().collect();
        assert_eq!(cols[0], ("general_info_BoundingBox", "[0,0,0,10,10,10]"));
        assert_eq!(cols[1], ("original_firstorder_Mean", "1"));
    }

    #[test]
    fn test_last_row_wins() {
        let csv = "original_firstorder_Mean,original_firstorder_Energy\n1,2\n3,\n";
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();

        assert_eq!(result.row_count, 2);
        assert_eq!(result.row, vec!["3", ""]);
    }

    #[test]
    fn test_short_row_padded() {
        let csv = "a_b_c,d_e_f\n1";
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();
        assert_eq!(result.row, vec!["1", ""]);
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(parse_bytes_auto(b""), Err(CsvError::EmptyFile)));
        assert!(matches!(parse_bytes_auto(b"  \n"), Err(CsvError::EmptyFile)));
    }

    #[test]
    fn test_header_only() {
        let result = parse_bytes_auto(b"Image,Mask\n");
        assert!(matches!(result, Err(CsvError::NoDataRows)));
    }

    #[test]
    fn test_bom_removed() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"Image,original_shape_Elongation\na,0.5");
        let result = parse_bytes_auto(&bytes).unwrap();
        assert_eq!(result.headers[0], "Image");
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
        assert_eq!(detect_delimiter("a\tb\tc"), '\t');
        assert_eq!(detect_delimiter("a|b|c"), '|');
        assert_eq!(detect_delimiter("single"), ',');
    }

    #[test]
    fn test_semicolon_file() {
        let csv = "Image;original_glcm_Id\nimg;0.25";
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();
        assert_eq!(result.delimiter, ';');
        assert_eq!(result.row, vec!["img", "0.25"]);
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert_eq!(decoded, "Société");
    }

    #[test]
    fn test_invalid_utf8_rejected() {
        let bytes: &[u8] = &[0x61, 0xFF, 0x62];
        assert!(matches!(decode_content(bytes, "utf-8"), Err(CsvError::Encoding(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = parse_csv_file_auto("/nonexistent/radiomics.csv");
        assert!(matches!(result, Err(CsvError::Io(_))));
    }
}
