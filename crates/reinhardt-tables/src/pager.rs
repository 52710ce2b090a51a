//! Pager model
//!
//! A [`Pager`] carries everything the pager renderer needs: the navigation
//! tokens of a computed [`Page`], the ordinal range, the page size
//! allow-list and the query values the pager form must resubmit.

use indexmap::IndexMap;
use reinhardt_i18n::messages;
use reinhardt_pagination::{Page, PageSizeOptions};
use serde::{Deserialize, Serialize};

/// Where the pager is shown relative to the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PagerPosition {
	/// Above the table
	Top,
	/// Below the table
	#[default]
	Bottom,
	/// Above and below the table
	Both,
}

impl PagerPosition {
	/// Returns the position name
	pub fn as_str(&self) -> &'static str {
		match self {
			PagerPosition::Top => "top",
			PagerPosition::Bottom => "bottom",
			PagerPosition::Both => "both",
		}
	}

	/// Returns true if the pager is shown above the table
	pub fn shows_top(&self) -> bool {
		matches!(self, PagerPosition::Top | PagerPosition::Both)
	}

	/// Returns true if the pager is shown below the table
	pub fn shows_bottom(&self) -> bool {
		matches!(self, PagerPosition::Bottom | PagerPosition::Both)
	}
}

/// A pager navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PagerAction {
	/// Jump to the first page
	First,
	/// Go back one page
	Previous,
	/// Go forward one page
	Next,
	/// Jump to the last page
	Last,
}

impl PagerAction {
	/// All actions in display order
	pub const ALL: [PagerAction; 4] = [
		PagerAction::First,
		PagerAction::Previous,
		PagerAction::Next,
		PagerAction::Last,
	];

	/// Returns the action name
	pub fn as_str(&self) -> &'static str {
		match self {
			PagerAction::First => "first",
			PagerAction::Previous => "previous",
			PagerAction::Next => "next",
			PagerAction::Last => "last",
		}
	}

	/// Returns the message key of the button's accessible label
	pub fn label_key(&self) -> &'static str {
		match self {
			PagerAction::First => messages::PAGER_FIRST_PAGE,
			PagerAction::Previous => messages::PAGER_PREV_PAGE,
			PagerAction::Next => messages::PAGER_NEXT_PAGE,
			PagerAction::Last => messages::PAGER_LAST_PAGE,
		}
	}

	/// Returns the default icon class
	pub fn default_icon_class(&self) -> &'static str {
		match self {
			PagerAction::First => "ui-icon--move-first",
			PagerAction::Previous => "ui-icon--previous",
			PagerAction::Next => "ui-icon--next",
			PagerAction::Last => "ui-icon--move-last",
		}
	}
}

/// Pager state for one render
///
/// # Example
///
/// ```rust
/// use reinhardt_pagination::{CursorPaginator, OpaqueCursorCodec, SortDirection};
/// use reinhardt_tables::{Pager, PagerAction};
///
/// let paginator = CursorPaginator::new(OpaqueCursorCodec::new());
/// let rows: Vec<String> = (1..=12).map(|n| format!("{:02}", n)).collect();
/// let request = paginator.request(None, Some("5"), SortDirection::Ascending);
/// let page = paginator.paginate(&rows, |r| Ok(r.clone()), &request).unwrap();
///
/// let pager = Pager::new(paginator.page_size_options().clone()).with_page(&page);
///
/// assert_eq!(pager.limit(), 5);
/// assert!(pager.is_disabled(PagerAction::Previous));
/// assert!(!pager.is_disabled(PagerAction::Next));
/// assert_eq!((pager.start_ordinal(), pager.end_ordinal()), (1, 5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Pager {
	id: String,
	position: PagerPosition,
	page_sizes: PageSizeOptions,
	limit: usize,
	start_ordinal: usize,
	end_ordinal: usize,
	total_results: usize,
	total_pages: usize,
	first_offset: Option<String>,
	prev_offset: Option<String>,
	next_offset: Option<String>,
	last_offset: Option<String>,
	icon_classes: IndexMap<PagerAction, String>,
	hidden_fields: IndexMap<String, String>,
}

impl Pager {
	/// Creates an empty pager using the default page size
	pub fn new(page_sizes: PageSizeOptions) -> Self {
		let icon_classes = PagerAction::ALL
			.iter()
			.map(|action| (*action, action.default_icon_class().to_string()))
			.collect();
		Self {
			id: String::new(),
			position: PagerPosition::default(),
			limit: page_sizes.default_size(),
			page_sizes,
			start_ordinal: 1,
			end_ordinal: 0,
			total_results: 0,
			total_pages: 0,
			first_offset: None,
			prev_offset: None,
			next_offset: None,
			last_offset: None,
			icon_classes,
			hidden_fields: IndexMap::new(),
		}
	}

	/// Copies the navigation state of a computed page
	pub fn with_page<T>(mut self, page: &Page<T>) -> Self {
		self.limit = page.limit;
		self.start_ordinal = page.start_ordinal;
		self.end_ordinal = page.end_ordinal;
		self.total_results = page.total_results;
		self.total_pages = page.total_pages();
		self.first_offset = page.first_offset.clone();
		self.prev_offset = page.prev_offset.clone();
		self.next_offset = page.next_offset.clone();
		self.last_offset = page.last_offset.clone();
		self
	}

	/// Sets the element id
	pub fn with_id(mut self, id: impl Into<String>) -> Self {
		self.id = id.into();
		self
	}

	/// Sets the position
	pub fn with_position(mut self, position: PagerPosition) -> Self {
		self.position = position;
		self
	}

	/// Overrides the icon class of a button
	pub fn with_icon_class(mut self, action: PagerAction, class: impl Into<String>) -> Self {
		self.icon_classes.insert(action, class.into());
		self
	}

	/// Sets the query values resubmitted as hidden form fields
	pub fn with_hidden_fields(mut self, fields: IndexMap<String, String>) -> Self {
		self.hidden_fields = fields;
		self
	}

	/// Returns the element id
	pub fn id(&self) -> &str {
		&self.id
	}

	/// Returns the position
	pub fn position(&self) -> PagerPosition {
		self.position
	}

	/// Returns the page size allow-list
	pub fn page_sizes(&self) -> &PageSizeOptions {
		&self.page_sizes
	}

	/// Returns the current page size
	pub fn limit(&self) -> usize {
		self.limit
	}

	/// Returns the 1-based ordinal of the first row shown
	pub fn start_ordinal(&self) -> usize {
		self.start_ordinal
	}

	/// Returns the 1-based ordinal of the last row shown
	pub fn end_ordinal(&self) -> usize {
		self.end_ordinal
	}

	/// Returns the number of rows in the whole collection
	pub fn total_results(&self) -> usize {
		self.total_results
	}

	/// Returns the number of pages at the current page size
	pub fn total_pages(&self) -> usize {
		self.total_pages
	}

	/// Returns true when there is nothing to show
	pub fn is_pending(&self) -> bool {
		self.end_ordinal < self.start_ordinal
	}

	/// Returns true if the collection has any rows
	pub fn has_total_results(&self) -> bool {
		self.total_results > 0
	}

	/// Returns the offset token submitted by `action`
	pub fn offset(&self, action: PagerAction) -> Option<&str> {
		match action {
			PagerAction::First => self.first_offset.as_deref(),
			PagerAction::Previous => self.prev_offset.as_deref(),
			PagerAction::Next => self.next_offset.as_deref(),
			PagerAction::Last => self.last_offset.as_deref(),
		}
	}

	/// Returns true if `action` has nowhere to go
	pub fn is_disabled(&self, action: PagerAction) -> bool {
		self.offset(action).is_none()
	}

	/// Returns the icon class of `action`
	pub fn icon_class(&self, action: PagerAction) -> &str {
		self.icon_classes
			.get(&action)
			.map(String::as_str)
			.unwrap_or_default()
	}

	/// Returns the hidden form fields
	pub fn hidden_fields(&self) -> &IndexMap<String, String> {
		&self.hidden_fields
	}
}
