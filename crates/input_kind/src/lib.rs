//! # input_kind
//!
//! UI-agnostic classification of form controls for the browser engine.
//!
//! This crate answers one question: does an element behave as a free-text
//! input control? Higher layers use the answer to decide whether to track
//! caret/selection state, fire text-change events, or route text-editing
//! shortcuts to the element.
//!
//! - [`ElementLike`]: the narrow interface an element must expose (tag name
//!   and `type` attribute)
//! - [`TextInputType`]: the fixed set of `<input type>` keywords that are
//!   text-capable
//! - [`is_text_input_element`] / [`text_control`]: the classifier
//!
//! ## Design Principles
//!
//! The classifier is pure and total: it never mutates or retains the element,
//! never panics, and maps every input (including an absent element) to a
//! result. Tag names and input types are compared ASCII case-insensitively.
//!
//! ## Integration
//!
//! DOM-based systems implement [`ElementLike`] for their node type:
//! ```ignore
//! impl ElementLike for html::Node {
//!     fn tag_name(&self) -> Option<&str> {
//!         match self {
//!             Node::Element { name, .. } => Some(name),
//!             _ => None,
//!         }
//!     }
//!
//!     fn input_type(&self) -> Option<&str> {
//!         match self {
//!             Node::Element { attributes, .. } => attributes
//!                 .iter()
//!                 .find(|(k, _)| k.eq_ignore_ascii_case("type"))
//!                 .and_then(|(_, v)| v.as_deref()),
//!             _ => None,
//!         }
//!     }
//! }
//! ```

mod classify;
mod element;
mod input_type;

pub use classify::{ElementKind, TextControl, is_text_input_element, text_control};
pub use element::{ElementDesc, ElementLike};
pub use input_type::{TEXT_INPUT_TYPES, TextInputType, UnknownInputType, is_text_input_type};
