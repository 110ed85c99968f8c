//! The `mn-select` element. Only its definition exists: the host gets its
//! class and nothing else reacts.

use crate::element::{CustomElement, ElementContext};
use dom::DomError;
use dom::dom_utils::add_class;
use std::any::Any;

#[derive(Debug, Default)]
pub struct SelectField;

impl SelectField {
    pub const TAG: &'static str = "mn-select";

    pub fn construct() -> Box<dyn CustomElement> {
        Box::new(Self)
    }
}

impl CustomElement for SelectField {
    fn observed_attributes(&self) -> &'static [&'static str] {
        &[]
    }

    fn on_create(&mut self, cx: &mut ElementContext<'_>) -> Result<(), DomError> {
        add_class(cx.doc, cx.host, Self::TAG).map(drop)
    }

    fn on_attribute_change(
        &mut self,
        _cx: &mut ElementContext<'_>,
        _name: &str,
        _old: Option<&str>,
        _new: Option<&str>,
    ) -> Result<(), DomError> {
        Ok(())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
