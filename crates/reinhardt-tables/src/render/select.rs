//! Select component and renderer

use crate::error::Result;
use indexmap::IndexMap;
use reinhardt_template::{
	AttributeValue, Attributes, SELECT_TEMPLATE, Sanitizer, TemplateEngine, resolve,
	resolve_classes,
};
use serde::Serialize;
use std::sync::Arc;

/// An `<option>` of a [`Select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	/// Submitted value
	pub value: String,
	/// Displayed text
	pub text: String,
	/// Whether the option is preselected
	pub selected: bool,
}

impl SelectOption {
	/// Creates an unselected option
	pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			text: text.into(),
			selected: false,
		}
	}

	/// Sets whether the option is preselected
	pub fn selected(mut self, selected: bool) -> Self {
		self.selected = selected;
		self
	}
}

/// A `<select>` element
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Select {
	id: String,
	options: Vec<SelectOption>,
	opt_groups: IndexMap<String, Vec<SelectOption>>,
	attributes: Attributes,
	disabled: bool,
}

impl Select {
	/// Creates an empty select
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the element id
	pub fn id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	/// Appends an option
	pub fn option(mut self, option: SelectOption) -> Self {
		self.options.push(option);
		self
	}

	/// Appends options
	pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
		self.options.extend(options);
		self
	}

	/// Appends an option group
	pub fn opt_group(mut self, label: impl Into<String>, options: Vec<SelectOption>) -> Self {
		self.opt_groups.insert(label.into(), options);
		self
	}

	/// Sets an HTML attribute
	pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
		self.attributes.insert(name.into(), value.into());
		self
	}

	/// Sets whether the select is disabled
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Marks the option with `value` as selected and every other as not
	pub fn selected_value(mut self, value: &str) -> Self {
		let all = self
			.options
			.iter_mut()
			.chain(self.opt_groups.values_mut().flatten());
		for option in all {
			option.selected = option.value == value;
		}
		self
	}
}

/// Template data for an option
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionData {
	/// Sanitized value
	pub value: String,
	/// Sanitized text
	pub text: String,
	/// Whether the option is selected
	pub is_selected: bool,
}

/// Template data for an option group
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptGroupData {
	/// Sanitized label
	pub label: String,
	/// Options in the group
	pub options: Vec<OptionData>,
}

/// Template data for a select
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectData {
	/// Sanitized element id
	pub id: String,
	/// Extra CSS classes
	pub classes: String,
	/// Resolved attribute string, without `class`
	pub attributes: String,
	/// Whether the select is disabled
	pub is_disabled: bool,
	/// Top-level options
	pub options: Vec<OptionData>,
	/// Option groups
	pub opt_groups: Vec<OptGroupData>,
}

/// Renders [`Select`] components
#[derive(Clone)]
pub struct SelectRenderer {
	sanitizer: Sanitizer,
	engine: Arc<dyn TemplateEngine>,
}

impl SelectRenderer {
	/// Creates a renderer using `engine`
	pub fn new(engine: Arc<dyn TemplateEngine>) -> Self {
		Self {
			sanitizer: Sanitizer::new(),
			engine,
		}
	}

	/// Builds the template data for `select`
	pub fn prepare(&self, select: &Select) -> SelectData {
		let attributes = self.sanitizer.sanitize_attributes(&select.attributes);
		SelectData {
			id: self.sanitizer.sanitize_text(&select.id),
			classes: resolve_classes(&attributes),
			attributes: resolve(&attributes),
			is_disabled: select.disabled,
			options: self.prepare_options(&select.options),
			opt_groups: select
				.opt_groups
				.iter()
				.map(|(label, options)| OptGroupData {
					label: self.sanitizer.sanitize_text(label),
					options: self.prepare_options(options),
				})
				.collect(),
		}
	}

	/// Renders `select` to HTML
	pub fn render(&self, select: &Select) -> Result<String> {
		let data = serde_json::to_value(self.prepare(select))?;
		Ok(self.engine.render(SELECT_TEMPLATE, &data)?)
	}

	fn prepare_options(&self, options: &[SelectOption]) -> Vec<OptionData> {
		options
			.iter()
			.map(|option| OptionData {
				value: self.sanitizer.sanitize_text(&option.value),
				text: self.sanitizer.sanitize_text(&option.text),
				is_selected: option.selected,
			})
			.collect()
	}
}

impl std::fmt::Debug for SelectRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("SelectRenderer").finish_non_exhaustive()
	}
}
