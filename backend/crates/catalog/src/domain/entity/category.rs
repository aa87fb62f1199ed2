//! Category Entity
//!
//! Aggregate root of the catalog. Fields are private; state changes go
//! through named operations:
//!
//! - content changes (`change_name`, `change_description`) validate the
//!   candidate field set and commit only when it passes
//! - status changes (`activate`, `deactivate`) are never validated, since
//!   no rule governs `is_active`

use chrono::{DateTime, Utc};
use kernel::clock::{Clock, SystemClock};
use kernel::entity::Entity;
use kernel::id::{IdGenerator, InvalidIdError, RandomIdGenerator};
use kernel::validation::{EntityValidationError, FieldsErrors, Rule};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::validator::{CategoryFields, CategoryRules, CategoryValidator};
use crate::domain::value_object::category_id::CategoryId;
use crate::error::CategoryResult;

/// Data for rebuilding a category from a trusted source
#[derive(Debug, Clone, Default)]
pub struct CategoryProps {
    /// Generated when absent
    pub category_id: Option<CategoryId>,
    pub name: String,
    pub description: Option<String>,
    /// Defaults to `true`
    pub is_active: Option<bool>,
    /// Defaults to the clock's current instant
    pub created_at: Option<DateTime<Utc>>,
}

impl CategoryProps {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the identifier from its textual form
    pub fn with_id_str(mut self, category_id: &str) -> Result<Self, InvalidIdError> {
        self.category_id = Some(CategoryId::parse(category_id)?);
        Ok(self)
    }

    pub fn with_id(mut self, category_id: CategoryId) -> Self {
        self.category_id = Some(category_id);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }

    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }
}

/// Input of [`Category::create`]
///
/// `name` is optional here so a missing name is reported by validation
/// together with every other violation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CategoryCreateCommand {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

impl CategoryCreateCommand {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_is_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Category entity
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    category_id: CategoryId,
    name: String,
    description: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Category {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Rebuild a category without validating
    ///
    /// Generates the identifier (v4) and `created_at` (now) when omitted.
    pub fn new(mut props: CategoryProps) -> Self {
        let category_id = props.category_id.take().unwrap_or_default();
        Self::assemble(category_id, props, &SystemClock)
    }

    /// [`Category::new`] with explicit identifier and time sources
    pub fn new_with(
        mut props: CategoryProps,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> Result<Self, InvalidIdError> {
        let category_id = match props.category_id.take() {
            Some(category_id) => category_id,
            None => CategoryId::generate(ids)?,
        };
        Ok(Self::assemble(category_id, props, clock))
    }

    fn assemble(category_id: CategoryId, props: CategoryProps, clock: &dyn Clock) -> Self {
        Self {
            category_id,
            name: props.name,
            description: props.description,
            is_active: props.is_active.unwrap_or(true),
            created_at: props.created_at.unwrap_or_else(|| clock.now()),
        }
    }

    /// Create a new category, validating it once
    pub fn create(
        command: CategoryCreateCommand,
        validator: &dyn CategoryValidator,
    ) -> CategoryResult<Self> {
        Self::create_with(command, validator, &RandomIdGenerator, &SystemClock)
    }

    /// [`Category::create`] with explicit identifier and time sources
    pub fn create_with(
        command: CategoryCreateCommand,
        validator: &dyn CategoryValidator,
        ids: &dyn IdGenerator,
        clock: &dyn Clock,
    ) -> CategoryResult<Self> {
        let fields = CategoryFields::new(command.name.clone(), command.description.clone());
        validator.validate(&fields)?;

        // A validator that lets a missing name through still can't produce
        // a nameless category.
        let name = command.name.ok_or_else(missing_name)?;

        let category = Self::new_with(
            CategoryProps {
                category_id: None,
                name,
                description: command.description,
                is_active: command.is_active,
                created_at: None,
            },
            ids,
            clock,
        )?;

        tracing::debug!(
            category_id = %category.category_id,
            name = %category.name,
            "Category created"
        );
        Ok(category)
    }

    /// Run the default category rules over `fields`
    pub fn validate(fields: &CategoryFields) -> Result<(), EntityValidationError> {
        CategoryRules::new().validate(fields)
    }

    // ========================================================================
    // Content changes (validated)
    // ========================================================================

    /// Rename the category
    ///
    /// On failure the current name is kept.
    pub fn change_name(
        &mut self,
        name: impl Into<String>,
        validator: &dyn CategoryValidator,
    ) -> Result<(), EntityValidationError> {
        let name = name.into();
        validator.validate(&CategoryFields::new(
            Some(name.clone()),
            self.description.clone(),
        ))?;
        self.name = name;
        tracing::debug!(category_id = %self.category_id, name = %self.name, "Category renamed");
        Ok(())
    }

    /// Replace (or clear, with `None`) the description
    ///
    /// On failure the current description is kept.
    pub fn change_description(
        &mut self,
        description: Option<String>,
        validator: &dyn CategoryValidator,
    ) -> Result<(), EntityValidationError> {
        validator.validate(&CategoryFields::new(
            Some(self.name.clone()),
            description.clone(),
        ))?;
        self.description = description;
        tracing::debug!(category_id = %self.category_id, "Category description changed");
        Ok(())
    }

    // ========================================================================
    // Status changes (not validated)
    // ========================================================================

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn category_id(&self) -> &CategoryId {
        &self.category_id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The validated field set as currently held
    pub fn fields(&self) -> CategoryFields {
        CategoryFields::new(Some(self.name.clone()), self.description.clone())
    }

    /// Plain JSON snapshot of every field
    pub fn to_json(&self) -> Value {
        json!({
            "category_id": self.category_id.as_str(),
            "name": self.name,
            "description": self.description,
            "is_active": self.is_active,
            "created_at": self.created_at,
        })
    }
}

impl Entity for Category {
    type Id = CategoryId;

    fn entity_id(&self) -> &CategoryId {
        &self.category_id
    }
}

/// Entities compare by identity only
impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.same_identity_as(other)
    }
}

impl Eq for Category {}

fn missing_name() -> EntityValidationError {
    let mut errors = FieldsErrors::new();
    errors.push("name", Rule::Required.message("name"));
    EntityValidationError::new(errors)
}

// ============================================================================
// Tests
// ============================================================================
