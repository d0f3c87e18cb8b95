//! GetFormSchemaHandler - Query handler for the form layout.

use crate::domain::assessment::{FormSchema, RawPatientInputs};

/// Query for the form, optionally pre-filled with previous values.
#[derive(Debug, Clone, Default)]
pub struct GetFormSchemaQuery {
    pub previous: Option<RawPatientInputs>,
}

/// Result of a form query.
#[derive(Debug, Clone)]
pub struct FormView {
    pub schema: &'static FormSchema,
    pub values: RawPatientInputs,
}

/// Handler returning the form schema and the values to render.
#[derive(Debug, Clone, Default)]
pub struct GetFormSchemaHandler;

impl GetFormSchemaHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, query: GetFormSchemaQuery) -> FormView {
        let schema = FormSchema::standard();
        let values = query.previous.unwrap_or_else(|| schema.initial_values());
        FormView { schema, values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::fixtures::raw_inputs;

    #[test]
    fn fresh_form_uses_initial_values() {
        let view = GetFormSchemaHandler::new().handle(GetFormSchemaQuery::default());
        assert_eq!(view.schema.fields.len(), 13);
        assert_eq!(view.values, view.schema.initial_values());
    }

    #[test]
    fn previous_values_are_kept() {
        let view = GetFormSchemaHandler::new().handle(GetFormSchemaQuery {
            previous: Some(raw_inputs()),
        });
        assert_eq!(view.values, raw_inputs());
    }
}
