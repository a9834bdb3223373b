//! Derivation rules for list and form field layouts
//!
//! `derive_fields` applies, in order:
//! 1. relation resolution for every property carrying a relation binding
//! 2. list views: removal of long text and credential fields;
//!    form views: removal of audit and remark fields when the entity tracks them
//! 3. pairing of `*IP` / `*Uri` fields with their `*Address` counterpart
//!
//! Later rules see the list as left by earlier ones, so the order is fixed.

use super::collection::FieldList;
use crate::model::{EntityProperty, FieldDescriptor, RelationBinding};
use crate::util::{eq_any_ci, strip_suffix_ci};

/// Text fields longer than this are left out of list views
pub const MAX_LIST_TEXT_LENGTH: i32 = 200;

/// Field names treated as credentials
const CREDENTIAL_NAMES: &[&str] = &["password", "pass"];

/// Suffixes of fields that carry a network location
const LOCATION_SUFFIXES: &[&str] = &["IP", "Uri"];

pub const CREATE_FIELDS: &[&str] = &[
    "CreateUserID",
    "CreateUserName",
    "CreateTime",
    "CreateIP",
    "CreateAddress",
];

// Names CreateAddress rather than UpdateAddress; existing layouts rely on this set.
pub const UPDATE_FIELDS: &[&str] = &[
    "UpdateUserID",
    "UpdateUserName",
    "UpdateTime",
    "UpdateIP",
    "CreateAddress",
];

pub const REMARK_FIELDS: &[&str] = &["Remark", "Description"];

impl<'a> FieldList<'a> {
    /// Apply the full layout policy for a list (`is_form == false`) or form view.
    ///
    /// Mutates this list in place; running it twice on the same list is not idempotent.
    pub fn derive_fields(&mut self, is_form: bool) -> &[&'a FieldDescriptor] {
        tracing::debug!(entity = self.entity.name(), is_form, "deriving field list");

        self.resolve_relations(is_form);

        if !is_form {
            self.suppress_sensitive();
        } else if self.entity.has_audit_capability() {
            self.remove_create_fields();
            self.remove_update_fields();
            self.remove_remark_fields();
        }

        self.pair_addresses();

        &self.fields
    }

    /// Resolve every relation binding, in property declaration order.
    pub fn resolve_relations(&mut self, is_form: bool) -> &mut Self {
        let entity = self.entity;
        for property in entity.properties() {
            if let Some(binding) = &property.relation {
                self.resolve_relation(property, binding, is_form);
            }
        }
        self
    }

    fn resolve_relation(
        &mut self,
        property: &EntityProperty,
        binding: &RelationBinding,
        is_form: bool,
    ) {
        let entity = self.entity;

        if binding.is_self_relation(entity.name()) {
            if let Some(column) = binding.relation_column.as_deref().filter(|c| !c.is_empty()) {
                self.replace(column, &property.name);
            }
            return;
        }

        let Some(related) = self.registry.and_then(|r| r.resolve(&binding.relation_entity)) else {
            tracing::debug!(
                entity = entity.name(),
                property = %property.name,
                related = %binding.relation_entity,
                "related entity not registered, skipping relation"
            );
            return;
        };
        let Some(related_master) = related.master_field() else {
            tracing::debug!(
                entity = entity.name(),
                related = related.name(),
                "related entity has no master field, skipping relation"
            );
            return;
        };

        // First convention that names a property of this entity wins
        let candidates = [
            format!("{}{}", property.name, related_master.name),
            format!("{}{}", binding.relation_entity, related_master.name),
            format!("{}Name", property.name),
        ];
        let Some(master) = candidates.iter().find_map(|c| entity.find_property(c)) else {
            return;
        };

        if is_form {
            self.add_after(&binding.local_column, &master.name);
        } else {
            self.replace(&binding.local_column, &master.name);
        }
    }

    /// Drop stored text fields that are unbounded, longer than
    /// [`MAX_LIST_TEXT_LENGTH`], or named like a password.
    pub fn suppress_sensitive(&mut self) -> &mut Self {
        self.fields.retain(|f| !is_sensitive(f));
        self
    }

    /// Place `<Prefix>Address` right after each `<Prefix>IP` / `<Prefix>Uri` field.
    pub fn pair_addresses(&mut self) -> &mut Self {
        let entity = self.entity;
        let mut i = self.fields.len();
        while i > 0 {
            i -= 1;
            let field = self.fields[i];
            let Some(prefix) = strip_suffix_ci(&field.name, LOCATION_SUFFIXES) else {
                continue;
            };
            let Some(address) = entity.find_field(&format!("{prefix}Address")) else {
                continue;
            };

            self.place_after(i, address);
        }
        self
    }

    pub fn remove_create_fields(&mut self) -> &mut Self {
        self.fields.retain(|f| !eq_any_ci(&f.name, CREATE_FIELDS));
        self
    }

    pub fn remove_update_fields(&mut self) -> &mut Self {
        self.fields.retain(|f| !eq_any_ci(&f.name, UPDATE_FIELDS));
        self
    }

    pub fn remove_remark_fields(&mut self) -> &mut Self {
        self.fields.retain(|f| !eq_any_ci(&f.name, REMARK_FIELDS));
        self
    }
}

fn is_sensitive(field: &FieldDescriptor) -> bool {
    if !field.is_stored || !field.data_type.is_text() {
        return false;
    }
    let oversized = field
        .max_length
        .map_or(true, |len| len <= 0 || len > MAX_LIST_TEXT_LENGTH);
    oversized || eq_any_ci(&field.name, CREDENTIAL_NAMES)
}
