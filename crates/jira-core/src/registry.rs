//! Bean type registry.
//!
//! Maps every bean's schema type name to its descriptor (parent type and
//! ordered fields). It is built once, on first use, and is read-only after.
//! Decoders consult it to reject elements whose `xsi:type` is not
//! assignable to the expected type, and to pick the concrete type of
//! polymorphic values.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::encoding::{DecodeError, Node, SoapType, XmlType, ns};
use crate::entities::{
    RemoteAttachment, RemoteAvatar, RemoteComment, RemoteComponent, RemoteConfiguration,
    RemoteCustomFieldValue, RemoteField, RemoteFieldValue, RemoteFilter, RemoteGroup, RemoteIssue,
    RemoteIssueType, RemoteNamedObject, RemoteNotificationScheme, RemotePermission,
    RemotePermissionMapping, RemotePermissionScheme, RemotePriority, RemoteProject,
    RemoteProjectRole, RemoteProjectRoleActors, RemoteResolution, RemoteRoleActor,
    RemoteRoleActors, RemoteScheme, RemoteSecurityLevel, RemoteServerInfo, RemoteStatus,
    RemoteTimeInfo, RemoteUser, RemoteVersion, RemoteWorklog,
};

/// Implemented by every concrete bean type.
pub trait SoapBean: SoapType {
    const TYPE_NAME: &'static str;
    const PARENT: Option<&'static str>;

    /// Declared fields in wire order, inherited ones included.
    fn fields() -> Vec<FieldDescriptor>;
}

/// One bean field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub xml_type: XmlType,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(name: &'static str, xml_type: XmlType) -> Self {
        Self { name, xml_type }
    }
}

/// A registered bean type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeanDescriptor {
    pub name: &'static str,
    pub namespace: &'static str,
    pub parent: Option<&'static str>,
    pub is_abstract: bool,
    pub fields: Vec<FieldDescriptor>,
}

#[derive(Debug, Default)]
pub struct TypeRegistry {
    beans: BTreeMap<&'static str, BeanDescriptor>,
}

static REGISTRY: LazyLock<TypeRegistry> = LazyLock::new(TypeRegistry::build);

/// The process-wide registry.
pub fn registry() -> &'static TypeRegistry {
    &REGISTRY
}

impl TypeRegistry {
    fn build() -> Self {
        let string = || XmlType::Xsd("string");
        let mut registry = Self::default();

        registry.register_abstract("AbstractRemoteEntity", None, vec![
            FieldDescriptor::new("id", string()),
        ]);
        registry.register_abstract(
            "AbstractNamedRemoteEntity",
            Some("AbstractRemoteEntity"),
            vec![
                FieldDescriptor::new("id", string()),
                FieldDescriptor::new("name", string()),
            ],
        );
        registry.register_abstract(
            "AbstractRemoteConstant",
            Some("AbstractNamedRemoteEntity"),
            vec![
                FieldDescriptor::new("id", string()),
                FieldDescriptor::new("name", string()),
                FieldDescriptor::new("description", string()),
                FieldDescriptor::new("icon", string()),
            ],
        );
        registry.register_abstract("RemoteEntity", None, Vec::new());

        registry.register::<RemoteIssueType>();
        registry.register::<RemotePriority>();
        registry.register::<RemoteStatus>();
        registry.register::<RemoteResolution>();
        registry.register::<RemoteComponent>();
        registry.register::<RemoteVersion>();
        registry.register::<RemoteCustomFieldValue>();
        registry.register::<RemoteIssue>();
        registry.register::<RemoteComment>();
        registry.register::<RemoteUser>();
        registry.register::<RemoteGroup>();
        registry.register::<RemoteScheme>();
        registry.register::<RemoteNotificationScheme>();
        registry.register::<RemotePermission>();
        registry.register::<RemotePermissionMapping>();
        registry.register::<RemotePermissionScheme>();
        registry.register::<RemoteSecurityLevel>();
        registry.register::<RemoteProject>();
        registry.register::<RemoteWorklog>();
        registry.register::<RemoteTimeInfo>();
        registry.register::<RemoteServerInfo>();
        registry.register::<RemoteConfiguration>();
        registry.register::<RemoteFilter>();
        registry.register::<RemoteField>();
        registry.register::<RemoteFieldValue>();
        registry.register::<RemoteNamedObject>();
        registry.register::<RemoteAttachment>();
        registry.register::<RemoteAvatar>();
        registry.register::<RemoteProjectRole>();
        registry.register::<RemoteRoleActor>();
        registry.register::<RemoteRoleActors>();
        registry.register::<RemoteProjectRoleActors>();

        registry
    }

    fn register<T: SoapBean>(&mut self) {
        self.beans.insert(T::TYPE_NAME, BeanDescriptor {
            name: T::TYPE_NAME,
            namespace: ns::BEANS,
            parent: T::PARENT,
            is_abstract: false,
            fields: T::fields(),
        });
    }

    fn register_abstract(
        &mut self,
        name: &'static str,
        parent: Option<&'static str>,
        fields: Vec<FieldDescriptor>,
    ) {
        self.beans.insert(name, BeanDescriptor {
            name,
            namespace: ns::BEANS,
            parent,
            is_abstract: true,
            fields,
        });
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&BeanDescriptor> {
        self.beans.get(name)
    }

    /// All registered types, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &BeanDescriptor> {
        self.beans.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.beans.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.beans.is_empty()
    }

    /// Whether a value of type `actual` may stand where `expected` is
    /// declared (same type, or `expected` is an ancestor of `actual`).
    #[must_use]
    pub fn is_assignable(&self, actual: &str, expected: &str) -> bool {
        let mut current = Some(actual);
        while let Some(name) = current {
            if name == expected {
                return true;
            }
            current = self.get(name).and_then(|bean| bean.parent);
        }
        false
    }

    /// Validate an element's `xsi:type` against the expected bean type.
    ///
    /// Elements without `xsi:type` are accepted; the operation descriptor
    /// already fixes their type.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::TypeMismatch`] if `xsi:type` names a type that
    /// is not assignable to `expected`.
    pub fn check_element(&self, node: Node<'_>, expected: &str) -> Result<(), DecodeError> {
        match node.xsi_type() {
            Some(actual) if !self.is_assignable(actual, expected) => {
                Err(DecodeError::TypeMismatch {
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                })
            }
            _ => Ok(()),
        }
    }
}
