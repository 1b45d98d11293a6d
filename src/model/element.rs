//! Shared contract of sections and settings.

use crate::error::{Error, Result};

use super::Comment;

/// A named node of a configuration that can carry comments.
///
/// Implemented by [`Section`](super::Section) and [`Setting`](super::Setting).
pub trait Element {
    /// The element's name. Never empty.
    ///
    /// Names of contained elements change only through
    /// [`Section::rename`](super::Section::rename) and
    /// [`Configuration::rename`](super::Configuration::rename), which keep
    /// them unique.
    fn name(&self) -> &str;

    /// Comment on the same line as the element.
    fn comment(&self) -> Option<&Comment>;

    fn set_comment(&mut self, comment: Option<Comment>);

    /// Comment lines directly above the element, in order.
    fn pre_comments(&self) -> &[Comment];

    fn pre_comments_mut(&mut self) -> &mut Vec<Comment>;
}

/// Name and comments common to every element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header {
    pub(crate) name: String,
    pub(crate) comment: Option<Comment>,
    pub(crate) pre_comments: Vec<Comment>,
}

impl Header {
    pub(crate) fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            name,
            comment: None,
            pre_comments: Vec::new(),
        })
    }

    pub(crate) fn rename(&mut self, name: &str) -> Result<()> {
        validate_name(name)?;
        self.name = name.to_owned();
        Ok(())
    }

    /// Renders the pre-comment block followed by `line` and its inline comment.
    pub(crate) fn render_around(&self, line: &str, include_comments: bool) -> String {
        if !include_comments {
            return line.to_owned();
        }

        let mut rendered = String::new();

        for pre_comment in &self.pre_comments {
            rendered.push_str(&pre_comment.to_string());
            rendered.push('\n');
        }

        rendered.push_str(line);

        if let Some(comment) = &self.comment {
            rendered.push(' ');
            rendered.push_str(&comment.to_string());
        }

        rendered
    }
}

pub(crate) fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_argument("element name must not be empty"));
    }

    Ok(())
}

/// Case-insensitive name comparison used for section and setting lookup.
pub(crate) fn names_equal(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
        || a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
}

macro_rules! impl_element {
    ($t:ty) => {
        impl $crate::model::Element for $t {
            fn name(&self) -> &str {
                &self.header.name
            }

            fn comment(&self) -> Option<&$crate::model::Comment> {
                self.header.comment.as_ref()
            }

            fn set_comment(&mut self, comment: Option<$crate::model::Comment>) {
                self.header.comment = comment;
            }

            fn pre_comments(&self) -> &[$crate::model::Comment] {
                &self.header.pre_comments
            }

            fn pre_comments_mut(&mut self) -> &mut Vec<$crate::model::Comment> {
                &mut self.header.pre_comments
            }
        }

        impl $t {
            /// Returns the element under a new name.
            ///
            /// Takes the element by value, so it cannot be a member of a
            /// collection while renamed.
            ///
            /// # Errors
            ///
            /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument)
            /// if `name` is empty.
            pub fn with_name(mut self, name: &str) -> $crate::error::Result<Self> {
                self.header.rename(name)?;
                Ok(self)
            }
        }
    };
}

pub(crate) use impl_element;
