//! Pager renderer

use crate::error::Result;
use crate::pager::{Pager, PagerAction};
use crate::render::select::{Select, SelectOption, SelectRenderer};
use crate::request::{PARAM_LIMIT, PARAM_OFFSET};
use reinhardt_i18n::{Localizer, messages};
use reinhardt_template::{PAGER_TEMPLATE, Sanitizer, TemplateEngine};
use serde::Serialize;
use std::sync::Arc;

/// Template data for a pager button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ButtonData {
	/// Action name (`first`, `previous`, `next`, `last`)
	pub action: &'static str,
	/// True when the action has no offset to submit
	pub is_disabled: bool,
	/// Visual weight
	pub weight: &'static str,
	/// Whether only the icon is shown
	pub icon_only: bool,
	/// Message key of the accessible label
	pub aria_label_key: &'static str,
	/// Localized, sanitized accessible label
	pub aria_label: String,
	/// Icon CSS class
	pub icon_class: String,
	/// Button type
	#[serde(rename = "type")]
	pub button_type: &'static str,
	/// Submitted field name
	pub name: &'static str,
	/// Submitted offset token; empty when disabled
	pub value: String,
}

/// A hidden form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
	/// Sanitized field name
	pub key: String,
	/// Sanitized field value
	pub value: String,
}

/// Template data for a pager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagerData {
	/// Sanitized element id
	pub id: String,
	/// Position name
	pub position: &'static str,
	/// Current page size
	pub limit: usize,
	/// Ordinal of the first row shown
	pub start_ordinal: usize,
	/// Ordinal of the last row shown
	pub end_ordinal: usize,
	/// Rows in the whole collection
	pub total_results: usize,
	/// Pages at the current page size
	pub total_pages: usize,
	/// True when there is nothing to show
	pub is_pending: bool,
	/// True when the collection has rows
	pub has_total_results: bool,
	/// Localized status text
	pub status: String,
	/// Rendered page size selector
	pub select: String,
	/// First, previous, next and last buttons, in that order
	pub buttons: Vec<ButtonData>,
	/// Query values resubmitted with the form
	pub hidden_fields: Vec<HiddenField>,
}

/// Renders [`Pager`] models
///
/// # Example
///
/// ```rust
/// use reinhardt_i18n::CatalogLocalizer;
/// use reinhardt_pagination::PageSizeOptions;
/// use reinhardt_tables::{Pager, PagerRenderer};
/// use reinhardt_template::TeraEngine;
/// use std::sync::Arc;
///
/// let renderer = PagerRenderer::new(
///     Arc::new(TeraEngine::new()),
///     Arc::new(CatalogLocalizer::english()),
/// );
/// let pager = Pager::new(PageSizeOptions::default());
///
/// let data = renderer.prepare(&pager).unwrap();
/// assert!(data.is_pending);
/// assert_eq!(data.status, "No results");
/// assert!(data.buttons.iter().all(|b| b.is_disabled));
/// ```
#[derive(Clone)]
pub struct PagerRenderer {
	sanitizer: Sanitizer,
	engine: Arc<dyn TemplateEngine>,
	localizer: Arc<dyn Localizer>,
	select: SelectRenderer,
}

impl PagerRenderer {
	/// Creates a renderer using `engine` and `localizer`
	pub fn new(engine: Arc<dyn TemplateEngine>, localizer: Arc<dyn Localizer>) -> Self {
		Self {
			sanitizer: Sanitizer::new(),
			select: SelectRenderer::new(Arc::clone(&engine)),
			engine,
			localizer,
		}
	}

	/// Builds the template data for `pager`
	///
	/// The page size selector is rendered here, so this can fail.
	pub fn prepare(&self, pager: &Pager) -> Result<PagerData> {
		let status = if pager.is_pending() {
			self.localizer.msg(messages::PAGER_ITEMS_PENDING, &[])
		} else {
			self.localizer.msg(
				messages::PAGER_ITEMS_CURRENT,
				&[
					pager.start_ordinal().to_string(),
					pager.end_ordinal().to_string(),
					pager.total_results().to_string(),
				],
			)
		};

		Ok(PagerData {
			id: self.sanitizer.sanitize_text(pager.id()),
			position: pager.position().as_str(),
			limit: pager.limit(),
			start_ordinal: pager.start_ordinal(),
			end_ordinal: pager.end_ordinal(),
			total_results: pager.total_results(),
			total_pages: pager.total_pages(),
			is_pending: pager.is_pending(),
			has_total_results: pager.has_total_results(),
			status: self.sanitizer.sanitize_text(&status),
			select: self.select.render(&self.page_size_select(pager))?,
			buttons: PagerAction::ALL
				.iter()
				.map(|action| self.button(pager, *action))
				.collect(),
			hidden_fields: pager
				.hidden_fields()
				.iter()
				.map(|(key, value)| HiddenField {
					key: self.sanitizer.sanitize_text(key),
					value: self.sanitizer.sanitize_text(value),
				})
				.collect(),
		})
	}

	/// Renders `pager` to HTML
	pub fn render(&self, pager: &Pager) -> Result<String> {
		let data = serde_json::to_value(self.prepare(pager)?)?;
		Ok(self.engine.render(PAGER_TEMPLATE, &data)?)
	}

	fn button(&self, pager: &Pager, action: PagerAction) -> ButtonData {
		let label = self.localizer.msg(action.label_key(), &[]);
		ButtonData {
			action: action.as_str(),
			is_disabled: pager.is_disabled(action),
			weight: "quiet",
			icon_only: true,
			aria_label_key: action.label_key(),
			aria_label: self.sanitizer.sanitize_text(&label),
			icon_class: self.sanitizer.sanitize_text(pager.icon_class(action)),
			button_type: "submit",
			name: PARAM_OFFSET,
			value: self
				.sanitizer
				.sanitize_text(pager.offset(action).unwrap_or_default()),
		}
	}

	fn page_size_select(&self, pager: &Pager) -> Select {
		let options = pager.page_sizes().sizes().iter().map(|size| {
			let text = self
				.localizer
				.msg(messages::PAGER_ITEMS_PER_PAGE, &[size.to_string()]);
			SelectOption::new(size.to_string(), text).selected(*size == pager.limit())
		});

		Select::new()
			.options(options)
			.attribute("name", PARAM_LIMIT)
			.attribute("onchange", "this.form.submit();")
	}
}

impl std::fmt::Debug for PagerRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("PagerRenderer").finish_non_exhaustive()
	}
}
