//! Pure functions for calculating deployment plans (Functional Core).

use super::config::{GsiConfig, TableConfig};

/// Current state of a table.
#[derive(Debug, Clone)]
pub struct TableState {
    pub status: TableStatus,
    pub gsis: Vec<GsiState>,
}

/// Table status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// GSI state.
#[derive(Debug, Clone)]
pub struct GsiState {
    pub name: String,
    pub status: GsiStatus,
}

/// GSI status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GsiStatus {
    Active,
    Creating,
    Updating,
    Deleting,
}

/// Planned changes for one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeployPlan {
    /// Table doesn't exist, needs to be created.
    CreateTable { config: TableConfig },
    /// Table exists, GSIs need to be added.
    AddGsis {
        table_name: String,
        gsis_to_add: Vec<GsiConfig>,
    },
    /// Table is up to date, no changes needed.
    NoChanges { table_name: String },
}

impl DeployPlan {
    pub fn is_no_changes(&self) -> bool {
        matches!(self, DeployPlan::NoChanges { .. })
    }
}

/// Plan for destroying one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestroyPlan {
    /// Table exists and will be deleted.
    DeleteTable { table_name: String },
    /// Table doesn't exist, nothing to do.
    AlreadyGone { table_name: String },
}

impl DestroyPlan {
    pub fn is_already_gone(&self) -> bool {
        matches!(self, DestroyPlan::AlreadyGone { .. })
    }
}

/// Pure function: Calculate what changes are needed to reach desired state.
pub fn calculate_deploy_plan(current: Option<&TableState>, desired: &TableConfig) -> DeployPlan {
    let Some(state) = current else {
        return DeployPlan::CreateTable {
            config: desired.clone(),
        };
    };

    let gsis_to_add: Vec<GsiConfig> = desired
        .gsis
        .iter()
        .filter(|gsi| !state.gsis.iter().any(|existing| existing.name == gsi.name))
        .cloned()
        .collect();

    if gsis_to_add.is_empty() {
        DeployPlan::NoChanges {
            table_name: desired.table_name.clone(),
        }
    } else {
        DeployPlan::AddGsis {
            table_name: desired.table_name.clone(),
            gsis_to_add,
        }
    }
}

/// Pure function: Calculate destroy plan.
pub fn calculate_destroy_plan(current: Option<&TableState>, table_name: &str) -> DestroyPlan {
    match current {
        Some(_) => DestroyPlan::DeleteTable {
            table_name: table_name.to_string(),
        },
        None => DestroyPlan::AlreadyGone {
            table_name: table_name.to_string(),
        },
    }
}

/// Pure function: Format a deploy plan for display.
pub fn format_deploy_plan(plan: &DeployPlan) -> Vec<String> {
    match plan {
        DeployPlan::CreateTable { config } => {
            let mut lines = vec![
                format!("+ Create table: {}", config.table_name),
                format!(
                    "  Partition key: {} ({:?})",
                    config.partition_key.name, config.partition_key.attribute_type
                ),
            ];
            for gsi in &config.gsis {
                lines.push(format!("  + GSI: {}", gsi.name));
                lines.push(format!(
                    "    Partition key: {} ({:?})",
                    gsi.partition_key.name, gsi.partition_key.attribute_type
                ));
                if let Some(sk) = &gsi.sort_key {
                    lines.push(format!("    Sort key: {} ({:?})", sk.name, sk.attribute_type));
                }
            }
            lines.push("  Billing: PAY_PER_REQUEST".to_string());
            lines
        }
        DeployPlan::AddGsis {
            table_name,
            gsis_to_add,
        } => {
            let mut lines = vec![format!("~ Update table: {}", table_name)];
            for gsi in gsis_to_add {
                lines.push(format!("  + Add GSI: {}", gsi.name));
            }
            lines
        }
        DeployPlan::NoChanges { table_name } => {
            vec![format!("= Table '{}' is up to date", table_name)]
        }
    }
}

/// Pure function: Format a destroy plan for display.
pub fn format_destroy_plan(plan: &DestroyPlan) -> Vec<String> {
    match plan {
        DestroyPlan::DeleteTable { table_name } => {
            vec![format!(
                "- Delete table: {} (ALL DATA WILL BE LOST)",
                table_name
            )]
        }
        DestroyPlan::AlreadyGone { table_name } => {
            vec![format!("= Table '{}' does not exist", table_name)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamodb::config::table_configs;

    fn images_config() -> TableConfig {
        table_configs("galleries", "images", "auth-sessions")
            .into_iter()
            .nth(1)
            .unwrap()
    }

    #[test]
    fn test_missing_table_plans_create() {
        let plan = calculate_deploy_plan(None, &images_config());
        assert!(matches!(plan, DeployPlan::CreateTable { .. }));
    }

    #[test]
    fn test_table_without_gsi_plans_add() {
        let state = TableState {
            status: TableStatus::Active,
            gsis: vec![],
        };

        let plan = calculate_deploy_plan(Some(&state), &images_config());

        match plan {
            DeployPlan::AddGsis {
                table_name,
                gsis_to_add,
            } => {
                assert_eq!(table_name, "images");
                assert_eq!(gsis_to_add.len(), 1);
                assert_eq!(gsis_to_add[0].name, "galleryId-sortOrder-index");
            }
            other => panic!("unexpected plan: {other:?}"),
        }
    }

    #[test]
    fn test_up_to_date_table_plans_no_changes() {
        let state = TableState {
            status: TableStatus::Active,
            gsis: vec![GsiState {
                name: "galleryId-sortOrder-index".to_string(),
                status: GsiStatus::Active,
            }],
        };

        let plan = calculate_deploy_plan(Some(&state), &images_config());
        assert!(plan.is_no_changes());
    }

    #[test]
    fn test_destroy_plan_for_existing_and_missing_tables() {
        let state = TableState {
            status: TableStatus::Active,
            gsis: vec![],
        };

        assert!(matches!(
            calculate_destroy_plan(Some(&state), "images"),
            DestroyPlan::DeleteTable { .. }
        ));
        assert!(calculate_destroy_plan(None, "images").is_already_gone());
    }

    #[test]
    fn test_format_create_plan_mentions_gsi_keys() {
        let plan = calculate_deploy_plan(None, &images_config());
        let lines = format_deploy_plan(&plan);

        assert!(lines[0].contains("+ Create table: images"));
        assert!(lines.iter().any(|l| l.contains("galleryId-sortOrder-index")));
        assert!(lines.iter().any(|l| l.contains("sortOrder (Number)")));
    }
}
