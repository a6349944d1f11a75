//! Text-input classification.
//!
//! An element is a text input when its kind is `textarea`, or when its kind
//! is `input` and its `type` attribute names a [`TextInputType`]. Every other
//! element, and an absent element, is not.

use crate::element::ElementLike;
use crate::input_type::TextInputType;

/// Kind dispatch for classification. Tag names are matched ASCII case-insensitively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Textarea,
    Input,
    Other,
}

impl ElementKind {
    pub fn from_tag_name(tag_name: &str) -> Self {
        if tag_name.eq_ignore_ascii_case("textarea") {
            ElementKind::Textarea
        } else if tag_name.eq_ignore_ascii_case("input") {
            ElementKind::Input
        } else {
            ElementKind::Other
        }
    }
}

/// A text-capable control, as identified by [`text_control`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextControl {
    Textarea,
    Input(TextInputType),
}

impl TextControl {
    /// Only textareas accept line breaks.
    #[inline]
    pub fn is_multiline(self) -> bool {
        matches!(self, TextControl::Textarea)
    }

    /// The `<input>` subtype, if this is an input.
    #[inline]
    pub fn input_type(self) -> Option<TextInputType> {
        match self {
            TextControl::Input(ty) => Some(ty),
            TextControl::Textarea => None,
        }
    }
}

/// Identify the text control `element` represents, if any.
///
/// Returns `None` for an absent element, an element with no (or an empty)
/// tag name, an `<input>` whose `type` is missing or outside the text-input
/// set, and every other kind of element.
pub fn text_control<E: ElementLike + ?Sized>(element: Option<&E>) -> Option<TextControl> {
    let element = element?;
    let tag_name = element.tag_name().filter(|name| !name.is_empty())?;

    let control = match ElementKind::from_tag_name(tag_name) {
        ElementKind::Textarea => Some(TextControl::Textarea),
        ElementKind::Input => element
            .input_type()
            .and_then(TextInputType::from_keyword)
            .map(TextControl::Input),
        ElementKind::Other => None,
    };

    log::trace!(
        target: "input_kind",
        "classify <{tag_name} type={:?}>: {control:?}",
        element.input_type()
    );
    control
}

/// Returns `true` if `element` behaves as a free-text input control.
///
/// Total and side-effect free: every input, including `None`, yields a bool.
#[inline]
pub fn is_text_input_element<E: ElementLike + ?Sized>(element: Option<&E>) -> bool {
    text_control(element).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementDesc;

    fn input(ty: &str) -> ElementDesc {
        ElementDesc::input(ty)
    }

    #[test]
    fn absent_element_is_not_text() {
        assert!(!is_text_input_element::<ElementDesc>(None));
        assert_eq!(text_control::<ElementDesc>(None), None);
    }

    #[test]
    fn missing_or_empty_tag_name_is_not_text() {
        assert!(!is_text_input_element(Some(&ElementDesc::default())));
        assert!(!is_text_input_element(Some(&ElementDesc::new(""))));
        // A subtype alone does not make an element an input.
        assert!(!is_text_input_element(Some(
            &ElementDesc::default().with_input_type("text")
        )));
    }

    #[test]
    fn textarea_is_text_regardless_of_type() {
        assert_eq!(
            text_control(Some(&ElementDesc::textarea())),
            Some(TextControl::Textarea)
        );
        assert!(is_text_input_element(Some(&ElementDesc::new("TEXTAREA"))));
        assert!(is_text_input_element(Some(
            &ElementDesc::new("TextArea").with_input_type("checkbox")
        )));
    }

    #[test]
    fn input_with_text_type_is_text() {
        assert_eq!(
            text_control(Some(&input("password"))),
            Some(TextControl::Input(TextInputType::Password))
        );
        assert!(is_text_input_element(Some(&input("week"))));
    }

    #[test]
    fn input_and_type_case_fold_independently() {
        assert!(is_text_input_element(Some(
            &ElementDesc::new("INPUT").with_input_type("text")
        )));
        assert!(is_text_input_element(Some(
            &ElementDesc::new("input").with_input_type("Text")
        )));
        assert!(is_text_input_element(Some(
            &ElementDesc::new("InPuT").with_input_type("DATETIME-LOCAL")
        )));
    }

    #[test]
    fn input_without_text_type_is_not_text() {
        assert!(!is_text_input_element(Some(&ElementDesc::new("input"))));
        assert!(!is_text_input_element(Some(&input(""))));
        assert!(!is_text_input_element(Some(&input("not supported"))));
        assert!(!is_text_input_element(Some(&input("checkbox"))));
        assert!(!is_text_input_element(Some(&input("hidden"))));
    }

    #[test]
    fn other_kinds_are_not_text() {
        for tag in ["select", "button", "div", "option", "inputs", "text"] {
            assert!(
                !is_text_input_element(Some(&ElementDesc::new(tag).with_input_type("text"))),
                "<{tag}> should not be text"
            );
        }
    }

    #[test]
    fn element_kind_dispatch() {
        assert_eq!(ElementKind::from_tag_name("Input"), ElementKind::Input);
        assert_eq!(ElementKind::from_tag_name("textarea"), ElementKind::Textarea);
        assert_eq!(ElementKind::from_tag_name("select"), ElementKind::Other);
        assert_eq!(ElementKind::from_tag_name(""), ElementKind::Other);
    }

    #[test]
    fn text_control_accessors() {
        assert!(TextControl::Textarea.is_multiline());
        assert_eq!(TextControl::Textarea.input_type(), None);

        let email = TextControl::Input(TextInputType::Email);
        assert!(!email.is_multiline());
        assert_eq!(email.input_type(), Some(TextInputType::Email));
    }

    #[test]
    fn predicate_agrees_with_text_control() {
        let cases = [
            ElementDesc::default(),
            ElementDesc::textarea(),
            input("url"),
            input("radio"),
            ElementDesc::new("select"),
        ];
        for case in &cases {
            assert_eq!(
                is_text_input_element(Some(case)),
                text_control(Some(case)).is_some()
            );
        }
    }

    #[test]
    fn works_through_trait_objects() {
        let element: &dyn ElementLike = &input("tel");
        assert!(is_text_input_element(Some(element)));
    }
}
