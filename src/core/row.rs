use crate::core::error::DataError;
use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

/// One labeled instance: a value index per attribute slot, including the
/// class slot designated by the header. Values are validated against the
/// header at construction, so accessors cannot observe out-of-range indices
/// for the header the row was built with.
#[derive(Debug, Clone)]
pub struct Row {
    header: Arc<InstanceHeader>,
    values: Vec<usize>,
}

impl Row {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<usize>) -> Result<Row, DataError> {
        if values.len() != header.number_of_attributes() {
            return Err(DataError::ArityMismatch {
                expected: header.number_of_attributes(),
                found: values.len(),
            });
        }
        for (index, &value) in values.iter().enumerate() {
            let attribute = header
                .attribute(index)
                .ok_or(DataError::ArityMismatch {
                    expected: header.number_of_attributes(),
                    found: values.len(),
                })?;
            if value >= attribute.number_of_values() {
                return Err(DataError::ValueOutOfRange {
                    attribute: attribute.name().to_string(),
                    value,
                    limit: attribute.number_of_values(),
                });
            }
        }
        Ok(Row { header, values })
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    pub fn value(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }

    pub fn class_value(&self) -> usize {
        self.values[self.header.class_index()]
    }
}
