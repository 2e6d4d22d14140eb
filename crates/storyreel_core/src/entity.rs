//! Story entities (characters, locations, props).

use crate::SegmentCategory;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recurring element of the story that segments can reference by id.
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder,
)]
#[builder(setter(into), default)]
#[serde(default)]
pub struct Entity {
    /// Unique identifier
    pub id: String,
    /// Display name
    pub label: String,
    /// Kind of entity
    pub category: SegmentCategory,
    /// Free-form description
    pub description: String,
    /// Visual appearance, preferred over the description in image prompts
    pub appearance: String,
    /// Reference image used to keep the entity's identity consistent
    pub image_id: Option<String>,
}

impl Default for Entity {
    fn default() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            label: String::new(),
            category: SegmentCategory::Characters,
            description: String::new(),
            appearance: String::new(),
            image_id: None,
        }
    }
}

impl Entity {
    /// Creates a new entity builder.
    pub fn builder() -> EntityBuilder {
        EntityBuilder::default()
    }

    /// The text that best describes what the entity looks like.
    pub fn visual_description(&self) -> &str {
        if !self.appearance.trim().is_empty() {
            &self.appearance
        } else {
            &self.description
        }
    }
}

/// Lookup table from entity id to entity.
pub type EntityIndex<'a> = HashMap<&'a str, &'a Entity>;
