use std::fmt;

use uuid::Uuid;
use validator::Validate;

use crate::core::error::Result;
use crate::shared::validation::validate_category_name;

/// Domain model for category
///
/// Always valid once constructed: every mutation that touches `name` is
/// validated against the proposed state before it is committed.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Category {
    id: Uuid,
    #[validate(custom(function = "validate_category_name"))]
    name: String,
    description: String,
    is_active: bool,
}

impl Category {
    /// Create an active category with an empty description and a fresh id
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Self::builder().name(name).build()
    }

    pub fn builder() -> CategoryBuilder {
        CategoryBuilder::default()
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Re-check the current state against the field rules
    pub fn validate(&self) -> Result<()> {
        Validate::validate(self)?;
        Ok(())
    }

    /// Replace name and description together
    ///
    /// On error the category is left exactly as it was.
    pub fn update_name_and_description(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let updated = Self {
            name: name.into(),
            description: description.into(),
            ..self.clone()
        };

        if let Err(e) = updated.validate() {
            tracing::warn!(category_id = %self.id, "Rejected category update: {}", e);
            return Err(e);
        }

        *self = updated;
        tracing::debug!(category_id = %self.id, name = %self.name, "Category updated");
        Ok(())
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        tracing::debug!(category_id = %self.id, "Category activated");
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        tracing::debug!(category_id = %self.id, "Category deactivated");
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Builder for [`Category`]
///
/// A builder whose name was never set is treated like a null name.
#[derive(Debug, Clone)]
pub struct CategoryBuilder {
    id: Option<Uuid>,
    name: Option<String>,
    description: String,
    is_active: bool,
}

impl Default for CategoryBuilder {
    fn default() -> Self {
        Self {
            id: None,
            name: None,
            description: String::new(),
            is_active: true,
        }
    }
}

impl CategoryBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn is_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn build(self) -> Result<Category> {
        let category = Category {
            id: self.id.unwrap_or_else(Uuid::new_v4),
            name: self.name.unwrap_or_default(),
            description: self.description,
            is_active: self.is_active,
        };
        category.validate()?;

        tracing::debug!(category_id = %category.id, name = %category.name, "Category created");
        Ok(category)
    }
}
