use crate::arff::parser::{is_comment_or_empty, parse_header, parse_row_values};
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind};
use std::path::Path;
use std::sync::Arc;

/// Loads a nominal-only ARFF file into an in-memory dataset.
///
/// `class_index` defaults to the last declared attribute. Malformed rows are
/// surfaced as errors; nothing is skipped silently.
pub fn load_dataset(path: &Path, class_index: Option<usize>) -> Result<Dataset, Error> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);

    let (relation, attributes) = parse_header(&mut reader)?;
    let class_index = class_index.unwrap_or(attributes.len().saturating_sub(1));
    let header = InstanceHeader::new(relation, attributes, class_index)
        .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))?;
    let header = Arc::new(header);

    let mut dataset = Dataset::new(Arc::clone(&header));
    let mut line = String::new();
    loop {
        line.clear();
        let n = reader.read_line(&mut line)?;
        if n == 0 {
            break;
        }
        if is_comment_or_empty(&line) {
            continue;
        }
        let values = parse_row_values(&header, line.trim())?;
        dataset
            .add_row(values)
            .map_err(|e| Error::new(ErrorKind::InvalidData, e.to_string()))?;
    }

    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut f = NamedTempFile::new().expect("tempfile");
        f.write_all(contents.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    const WEATHER: &str = "\
% toy weather relation
@relation weather

@attribute outlook { sunny, rainy }
@attribute windy { yes, no }
@attribute play { yes, no }

@data
sunny, no, yes
rainy, yes, no

sunny, yes, yes
";

    #[test]
    fn loads_rows_with_last_attribute_as_class() {
        let tf = write_temp(WEATHER);
        let data = load_dataset(tf.path(), None).unwrap();

        assert_eq!(data.header().relation_name(), "weather");
        assert_eq!(data.header().class_index(), 2);
        assert_eq!(data.header().number_of_classes(), 2);
        assert_eq!(data.num_instances(), 3);

        let row = data.row(1).unwrap();
        assert_eq!(row.value(0), Some(1));
        assert_eq!(row.value(1), Some(0));
        assert_eq!(row.class_value(), 1);
    }

    #[test]
    fn honors_explicit_class_index() {
        let tf = write_temp(WEATHER);
        let data = load_dataset(tf.path(), Some(0)).unwrap();
        assert_eq!(data.header().class_index(), 0);
        assert_eq!(data.header().class_attribute().name(), "outlook");
        assert_eq!(data.row(0).unwrap().class_value(), 0);
    }

    #[test]
    fn rejects_out_of_range_class_index() {
        let tf = write_temp(WEATHER);
        let err = load_dataset(tf.path(), Some(7)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_dataset(Path::new("/nonexistent/file.arff"), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn numeric_attribute_is_rejected() {
        let tf = write_temp(
            "@relation r\n@attribute t numeric\n@attribute c {a, b}\n@data\n1, a\n",
        );
        let err = load_dataset(tf.path(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn missing_value_marker_is_rejected() {
        let tf = write_temp(
            "@relation r\n@attribute a {x, y}\n@attribute c {a, b}\n@data\n?, a\n",
        );
        let err = load_dataset(tf.path(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn unknown_label_is_rejected() {
        let tf = write_temp(
            "@relation r\n@attribute a {x, y}\n@attribute c {a, b}\n@data\nz, a\n",
        );
        let err = load_dataset(tf.path(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidData);
    }

    #[test]
    fn file_without_data_section_fails() {
        let tf = write_temp("@relation r\n@attribute a {x}\n");
        let err = load_dataset(tf.path(), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEof);
    }
}
