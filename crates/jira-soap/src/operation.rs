//! Operation descriptor table.
//!
//! Every service operation is described once (wire name, positional
//! parameters with their schema types, return type, declared faults). The
//! table is built lazily from the service declaration and is read-only
//! after.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use jira_core::{FaultKind, XmlType};
use serde::Serialize;

use crate::service;

/// One positional parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDescriptor {
    /// Rust-side parameter name, e.g. `issue_key`.
    pub name: &'static str,
    /// Positional part name on the wire: `in0`, `in1`, ...
    pub part: String,
    pub xml_type: XmlType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationDescriptor {
    /// Wire name, e.g. `getIssue`.
    pub name: &'static str,
    /// Method name on [`JiraSoapService`](crate::JiraSoapService).
    pub method: &'static str,
    pub params: Vec<ParamDescriptor>,
    pub return_type: XmlType,
    pub faults: &'static [FaultKind],
}

impl OperationDescriptor {
    pub(crate) fn new(
        name: &'static str,
        method: &'static str,
        params: Vec<(&'static str, XmlType)>,
        return_type: XmlType,
        faults: &'static [FaultKind],
    ) -> Self {
        let params = params
            .into_iter()
            .enumerate()
            .map(|(index, (name, xml_type))| ParamDescriptor {
                name,
                part: format!("in{index}"),
                xml_type,
            })
            .collect();
        Self {
            name,
            method,
            params,
            return_type,
            faults,
        }
    }

    /// Name of the response wrapper element, `<name>Response`.
    #[must_use]
    pub fn response_element(&self) -> String {
        format!("{}Response", self.name)
    }

    /// Name of the return part, `<name>Return`.
    #[must_use]
    pub fn return_part(&self) -> String {
        format!("{}Return", self.name)
    }

    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self.return_type, XmlType::Void)
    }

    #[must_use]
    pub fn declares(&self, kind: FaultKind) -> bool {
        self.faults.contains(&kind)
    }

    /// Serializable summary for listings.
    #[must_use]
    pub fn summary(&self) -> OperationSummary {
        OperationSummary {
            name: self.name,
            method: self.method,
            params: self
                .params
                .iter()
                .map(|param| format!("{} {}: {}", param.part, param.name, param.xml_type))
                .collect(),
            returns: self.return_type.to_string(),
            faults: self.faults.iter().map(|kind| kind.type_name()).collect(),
        }
    }
}

/// Flattened, string-typed view of a descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSummary {
    pub name: &'static str,
    pub method: &'static str,
    pub params: Vec<String>,
    pub returns: String,
    pub faults: Vec<&'static str>,
}

static OPERATIONS: LazyLock<BTreeMap<&'static str, OperationDescriptor>> = LazyLock::new(|| {
    service::descriptors()
        .into_iter()
        .map(|op| (op.name, op))
        .collect()
});

/// Look up an operation by wire name.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static OperationDescriptor> {
    OPERATIONS.get(name)
}

/// All operations, ordered by wire name.
pub fn operations() -> impl Iterator<Item = &'static OperationDescriptor> {
    OPERATIONS.values()
}
