use std::collections::HashMap;

/// A categorical attribute with a fixed, ordered set of value labels.
///
/// Value indices are positions in `values`; rows store indices, not labels.
#[derive(Debug, Clone)]
pub struct NominalAttribute {
    name: String,
    values: Vec<String>,
    label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> NominalAttribute {
        let mut label_to_index = HashMap::with_capacity(values.len());
        for (i, v) in values.iter().enumerate() {
            label_to_index.insert(v.clone(), i);
        }
        NominalAttribute {
            name: name.into(),
            values,
            label_to_index,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn index_of_value(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    pub fn value_label(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }
}
