use std::collections::BTreeMap;

use crate::params::{Field, GenerationParams};

/// Per-field validation messages for the required form fields. Built fresh
/// on every validation pass; empty means the record is submittable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    /// Clears the message for one field, leaving the others intact.
    pub fn clear_field(&mut self, field: Field) {
        self.0.remove(&field);
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Checks the four required enum fields. Pure over the parameter record so
/// it can be exercised without any UI.
pub fn validate(params: &GenerationParams) -> ValidationErrors {
    let mut errors = ValidationErrors::default();
    if params.piece_type.is_none() {
        errors.insert(Field::Type, "Please select a type.");
    }
    if params.genre.is_none() {
        errors.insert(Field::Genre, "Please select a genre.");
    }
    if params.tone.is_none() {
        errors.insert(Field::Tone, "Please select a tone.");
    }
    if params.length.is_none() {
        errors.insert(Field::Length, "Please select a length.");
    }
    errors
}
