//! Table schema configuration (Functional Core - pure data).

use viewfinder_core::storage::IMAGES_BY_GALLERY_INDEX;

/// Table schema configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    pub table_name: String,
    pub partition_key: KeyAttribute,
    pub gsis: Vec<GsiConfig>,
    pub billing_mode: BillingMode,
}

/// A key attribute definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyAttribute {
    pub name: String,
    pub attribute_type: AttributeType,
}

impl KeyAttribute {
    fn string(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::String,
        }
    }

    fn number(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attribute_type: AttributeType::Number,
        }
    }
}

/// DynamoDB attribute types used by the key schemas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeType {
    String,
    Number,
}

/// Global Secondary Index configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GsiConfig {
    pub name: String,
    pub partition_key: KeyAttribute,
    pub sort_key: Option<KeyAttribute>,
    pub projection: ProjectionType,
}

/// GSI projection type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionType {
    All,
}

/// Billing mode for the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingMode {
    PayPerRequest,
}

/// Returns the canonical configurations for the three viewfinder tables.
/// This is a pure function - no I/O.
pub fn table_configs(
    galleries_table: &str,
    images_table: &str,
    sessions_table: &str,
) -> Vec<TableConfig> {
    vec![
        TableConfig {
            table_name: galleries_table.to_string(),
            partition_key: KeyAttribute::string("id"),
            gsis: vec![],
            billing_mode: BillingMode::PayPerRequest,
        },
        TableConfig {
            table_name: images_table.to_string(),
            partition_key: KeyAttribute::string("id"),
            gsis: vec![GsiConfig {
                name: IMAGES_BY_GALLERY_INDEX.to_string(),
                partition_key: KeyAttribute::string("galleryId"),
                sort_key: Some(KeyAttribute::number("sortOrder")),
                projection: ProjectionType::All,
            }],
            billing_mode: BillingMode::PayPerRequest,
        },
        TableConfig {
            table_name: sessions_table.to_string(),
            partition_key: KeyAttribute::string("email"),
            gsis: vec![],
            billing_mode: BillingMode::PayPerRequest,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_tables_with_expected_keys() {
        let configs = table_configs("galleries", "images", "auth-sessions");

        assert_eq!(configs.len(), 3);
        assert_eq!(configs[0].partition_key.name, "id");
        assert_eq!(configs[1].partition_key.name, "id");
        assert_eq!(configs[2].partition_key.name, "email");
    }

    #[test]
    fn test_only_images_table_has_a_gsi() {
        let configs = table_configs("galleries", "images", "auth-sessions");

        assert!(configs[0].gsis.is_empty());
        assert!(configs[2].gsis.is_empty());

        let gsi = &configs[1].gsis[0];
        assert_eq!(gsi.name, "galleryId-sortOrder-index");
        assert_eq!(gsi.partition_key.name, "galleryId");
        assert_eq!(gsi.partition_key.attribute_type, AttributeType::String);
        let sort_key = gsi.sort_key.as_ref().unwrap();
        assert_eq!(sort_key.name, "sortOrder");
        assert_eq!(sort_key.attribute_type, AttributeType::Number);
    }
}
