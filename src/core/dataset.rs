use crate::core::error::DataError;
use crate::core::instance_header::InstanceHeader;
use crate::core::row::Row;
use std::sync::Arc;

/// An ordered, in-memory collection of labeled rows sharing one header.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    rows: Vec<Row>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>) -> Dataset {
        Dataset {
            header,
            rows: Vec::new(),
        }
    }

    /// Validates `values` against the dataset header and appends the row.
    pub fn add_row(&mut self, values: Vec<usize>) -> Result<(), DataError> {
        let row = Row::new(Arc::clone(&self.header), values)?;
        self.rows.push(row);
        Ok(())
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn header_arc(&self) -> Arc<InstanceHeader> {
        Arc::clone(&self.header)
    }

    pub fn num_instances(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// New dataset over the same header containing the rows at `indices`,
    /// in the given order. Out-of-range indices are skipped.
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        Dataset {
            header: Arc::clone(&self.header),
            rows,
        }
    }
}
