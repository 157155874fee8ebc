// src/core/endless_catalog/endless_catalog_audit.rs

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;
use log::warn;
use super::{Catalog, ComplexityMultipliers};
use crate::core::endless_types::InputType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Befund einer optionalen Katalogprüfung. Der Katalog selbst wird nie beim Laden geprüft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogIssue {
    DuplicateActionId { action: String },
    DuplicateFieldId { action: String, field: String },
    SelectWithoutOptions { action: String, field: String },
    AffectsGasWithoutVariableGas { action: String, field: String },
    UnknownMultiplierKey { action: String, field: String, value: String },
    SharedMultiplierKey { key: String, actions: Vec<String> },
}

impl CatalogIssue {
    pub fn severity(&self) -> IssueSeverity {
        match self {
            CatalogIssue::DuplicateActionId { .. }
            | CatalogIssue::DuplicateFieldId { .. }
            | CatalogIssue::SelectWithoutOptions { .. } => IssueSeverity::Error,
            _ => IssueSeverity::Warning,
        }
    }
}

impl fmt::Display for CatalogIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogIssue::DuplicateActionId { action } => write!(f, "duplicate action id '{}'", action),
            CatalogIssue::DuplicateFieldId { action, field } => {
                write!(f, "{}: duplicate input id '{}'", action, field)
            }
            CatalogIssue::SelectWithoutOptions { action, field } => {
                write!(f, "{}.{}: select input has no options", action, field)
            }
            CatalogIssue::AffectsGasWithoutVariableGas { action, field } => {
                write!(f, "{}.{}: affects gas but the action has no variableGas", action, field)
            }
            CatalogIssue::UnknownMultiplierKey { action, field, value } => {
                write!(f, "{}.{}: option '{}' has no complexity multiplier (falls back to 1)", action, field, value)
            }
            CatalogIssue::SharedMultiplierKey { key, actions } => {
                write!(f, "multiplier key '{}' is shared by: {}", key, actions.join(", "))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogAudit {
    pub issues: Vec<CatalogIssue>,
}

impl CatalogAudit {
    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn errors(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.issues.iter().filter(|i| i.severity() == IssueSeverity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &CatalogIssue> {
        self.issues.iter().filter(|i| i.severity() == IssueSeverity::Warning)
    }
}

pub fn audit_catalog(catalog: &Catalog, multipliers: &ComplexityMultipliers) -> CatalogAudit {
    let mut issues = Vec::new();
    let mut action_ids = HashSet::new();
    // Multiplikator-Schlüssel -> Aktionen, deren gas-relevante Felder ihn nutzen
    let mut key_users: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();

    for action in catalog.iter() {
        if !action_ids.insert(action.id.as_str()) {
            issues.push(CatalogIssue::DuplicateActionId { action: action.id.clone() });
        }

        let mut field_ids = HashSet::new();
        for input in &action.inputs {
            if !field_ids.insert(input.id.as_str()) {
                issues.push(CatalogIssue::DuplicateFieldId { action: action.id.clone(), field: input.id.clone() });
            }
            if input.input_type == InputType::Select && input.option_values().next().is_none() {
                issues.push(CatalogIssue::SelectWithoutOptions { action: action.id.clone(), field: input.id.clone() });
            }
            if !input.affects_gas {
                continue;
            }
            if action.variable_gas_or_zero() == 0 {
                issues.push(CatalogIssue::AffectsGasWithoutVariableGas {
                    action: action.id.clone(),
                    field: input.id.clone(),
                });
            }
            for value in input.option_values() {
                if multipliers.contains(value) {
                    key_users.entry(value).or_default().insert(action.id.as_str());
                } else {
                    issues.push(CatalogIssue::UnknownMultiplierKey {
                        action: action.id.clone(),
                        field: input.id.clone(),
                        value: value.to_string(),
                    });
                }
            }
        }
    }

    for (key, actions) in key_users {
        if actions.len() > 1 {
            issues.push(CatalogIssue::SharedMultiplierKey {
                key: key.to_string(),
                actions: actions.into_iter().map(str::to_string).collect(),
            });
        }
    }

    for issue in &issues {
        warn!("Catalog audit: {}", issue);
    }
    CatalogAudit { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::endless_catalog::{ACTION_CATALOG, COMPLEXITY_MULTIPLIERS};
    use crate::core::endless_types::{ActionCategory, ActionDescriptor, InputFieldDescriptor};

    #[test]
    fn test_builtin_catalog_has_no_errors() {
        let audit = audit_catalog(&ACTION_CATALOG, &COMPLEXITY_MULTIPLIERS);
        assert!(!audit.has_errors(), "unexpected errors: {:?}", audit.issues);
    }

    #[test]
    fn test_builtin_catalog_warnings() {
        let audit = audit_catalog(&ACTION_CATALOG, &COMPLEXITY_MULTIPLIERS);
        assert!(audit.issues.contains(&CatalogIssue::AffectsGasWithoutVariableGas {
            action: "create-proposal".into(),
            field: "proposalType".into(),
        }));
        assert!(audit.issues.contains(&CatalogIssue::AffectsGasWithoutVariableGas {
            action: "register-did".into(),
            field: "didDocument".into(),
        }));
        assert!(audit.issues.contains(&CatalogIssue::SharedMultiplierKey {
            key: "small".into(),
            actions: vec!["deploy-contract".into(), "mint-miniapp".into()],
        }));
        assert!(audit.issues.contains(&CatalogIssue::SharedMultiplierKey {
            key: "simple".into(),
            actions: vec!["call-contract".into(), "deploy-contract".into()],
        }));
        // lockPeriod beeinflusst kein Gas, daher keine Meldung für "30"
        assert!(!audit.issues.iter().any(|i| matches!(i, CatalogIssue::UnknownMultiplierKey { .. })));
    }

    #[test]
    fn test_malformed_catalog_errors() {
        let action = ActionDescriptor::new("broken", "Broken", "", ActionCategory::Nft, 1_000, 2_000)
            .with_variable_gas(10)
            .with_input(InputFieldDescriptor::new("size", "Size", InputType::Select, true).affecting_gas(1.0))
            .with_input(InputFieldDescriptor::new("size", "Size again", InputType::Text, false))
            .with_input(
                InputFieldDescriptor::new("tier", "Tier", InputType::Select, true)
                    .affecting_gas(1.0)
                    .with_options(&[("platinum", "Platinum")]),
            );
        let catalog = Catalog::new(vec![action.clone(), action]);
        let audit = audit_catalog(&catalog, &COMPLEXITY_MULTIPLIERS);

        assert!(audit.has_errors());
        assert!(audit.issues.contains(&CatalogIssue::DuplicateActionId { action: "broken".into() }));
        assert!(audit.issues.contains(&CatalogIssue::DuplicateFieldId { action: "broken".into(), field: "size".into() }));
        assert!(audit.issues.contains(&CatalogIssue::SelectWithoutOptions { action: "broken".into(), field: "size".into() }));
        assert!(audit.warnings().any(|i| matches!(i, CatalogIssue::UnknownMultiplierKey { value, .. } if value == "platinum")));
    }
}
