//! Narrow element interface consumed by the classifier.
//!
//! The classifier reads exactly two string attributes from an element. This
//! module defines the trait exposing them and a plain-data implementation for
//! callers that have no node type of their own.

/// Read-only view of the two attributes the classifier inspects.
///
/// Implementations must not allocate or mutate; both accessors are expected
/// to be cheap field reads.
pub trait ElementLike {
    /// The element's kind identifier (e.g. `"input"`, `"TEXTAREA"`).
    ///
    /// `None` and `Some("")` both mean the element has no usable kind.
    fn tag_name(&self) -> Option<&str>;

    /// The declared `type` attribute, exactly as the element reports it.
    ///
    /// Only consulted when the kind is `input`. No default is applied.
    fn input_type(&self) -> Option<&str>;

    /// Shorthand for [`is_text_input_element`](crate::is_text_input_element)
    /// on a present element.
    #[inline]
    fn is_text_input(&self) -> bool {
        crate::is_text_input_element(Some(self))
    }
}

impl<T: ElementLike + ?Sized> ElementLike for &T {
    #[inline]
    fn tag_name(&self) -> Option<&str> {
        (**self).tag_name()
    }

    #[inline]
    fn input_type(&self) -> Option<&str> {
        (**self).input_type()
    }
}

impl<T: ElementLike + ?Sized> ElementLike for Box<T> {
    #[inline]
    fn tag_name(&self) -> Option<&str> {
        (**self).tag_name()
    }

    #[inline]
    fn input_type(&self) -> Option<&str> {
        (**self).input_type()
    }
}

impl<T: ElementLike> ElementLike for Option<T> {
    #[inline]
    fn tag_name(&self) -> Option<&str> {
        self.as_ref().and_then(ElementLike::tag_name)
    }

    #[inline]
    fn input_type(&self) -> Option<&str> {
        self.as_ref().and_then(ElementLike::input_type)
    }
}

/// Owned description of an element: tag name plus optional `type` attribute.
///
/// `ElementDesc::default()` describes an element with no kind, which never
/// classifies as a text input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ElementDesc {
    pub tag_name: Option<String>,
    pub input_type: Option<String>,
}

impl ElementDesc {
    /// An element of the given kind with no `type` attribute.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self {
            tag_name: Some(tag_name.into()),
            input_type: None,
        }
    }

    /// An `<input>` with the given `type` attribute.
    pub fn input(input_type: impl Into<String>) -> Self {
        Self::new("input").with_input_type(input_type)
    }

    pub fn textarea() -> Self {
        Self::new("textarea")
    }

    pub fn with_input_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }
}

impl ElementLike for ElementDesc {
    #[inline]
    fn tag_name(&self) -> Option<&str> {
        self.tag_name.as_deref()
    }

    #[inline]
    fn input_type(&self) -> Option<&str> {
        self.input_type.as_deref()
    }
}
