use crate::core::attributes::NominalAttribute;
use crate::core::error::DataError;

/// Shared metadata for a tabular relation: attribute declarations plus the
/// index of the attribute that acts as the class label.
#[derive(Debug, Clone)]
pub struct InstanceHeader {
    relation_name: String,
    attributes: Vec<NominalAttribute>,
    class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<NominalAttribute>,
        class_index: usize,
    ) -> Result<InstanceHeader, DataError> {
        if class_index >= attributes.len() {
            return Err(DataError::ClassIndexOutOfRange {
                class_index,
                attributes: attributes.len(),
            });
        }
        for attribute in &attributes {
            if attribute.number_of_values() == 0 {
                return Err(DataError::EmptyValueSet {
                    attribute: attribute.name().to_string(),
                });
            }
        }
        Ok(InstanceHeader {
            relation_name,
            attributes,
            class_index,
        })
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute(&self, index: usize) -> Option<&NominalAttribute> {
        self.attributes.get(index)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.attributes[self.class_index]
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute().number_of_values()
    }
}
