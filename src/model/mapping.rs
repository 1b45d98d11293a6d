//! Binding a section's settings onto a host struct.
//!
//! # Design
//!
//! - **Declared, not discovered**: the host lists its fields once in a
//!   [`FieldMap`], pairing each setting name with a typed assignment.
//! - **Exact names**: a field binds only to a setting whose name matches
//!   case-sensitively. Fields without a matching setting are left untouched.
//! - **Typed**: each binding converts through [`FromSettingValue`], so
//!   conversion errors surface as [`crate::Error::ValueCast`] or
//!   [`crate::Error::KindMismatch`].

use std::fmt;

use crate::convert::FromSettingValue;
use crate::error::Result;
use crate::options::NumberFormat;

use super::{Element, Section, Setting};

type Assign<T> = Box<dyn Fn(&mut T, &Setting, &NumberFormat) -> Result<()>>;

struct FieldBinding<T> {
    name: String,
    assign: Assign<T>,
}

/// Declarative list of the fields of `T` that can be filled from a section.
///
/// # Examples
///
/// ```
/// use sharpini::{Configuration, FieldMap, NumberFormat, ParseOptions};
///
/// #[derive(Default)]
/// struct Window {
///     width: u32,
///     title: String,
///     sizes: Vec<u16>,
/// }
///
/// let fields = FieldMap::new()
///     .field("Width", |w: &mut Window, v| w.width = v)
///     .field("Title", |w: &mut Window, v| w.title = v)
///     .array_field("Sizes", |w: &mut Window, v| w.sizes = v);
///
/// let config = Configuration::parse(
///     "[Window]\nWidth=800\nTitle=Main\nSizes={1,2}",
///     &ParseOptions::default(),
/// )
/// .unwrap();
///
/// let section = config.section("Window").unwrap();
/// let window: Window = section
///     .create_object(&fields, &NumberFormat::invariant())
///     .unwrap();
///
/// assert_eq!(window.width, 800);
/// assert_eq!(window.title, "Main");
/// assert_eq!(window.sizes, vec![1, 2]);
/// ```
pub struct FieldMap<T> {
    fields: Vec<FieldBinding<T>>,
}

impl<T> Default for FieldMap<T> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<T> FieldMap<T> {
    /// Creates an empty map (binds nothing).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a scalar field to the setting called `name`.
    #[must_use]
    pub fn field<V, F>(mut self, name: impl Into<String>, assign: F) -> Self
    where
        T: 'static,
        V: FromSettingValue + 'static,
        F: Fn(&mut T, V) + 'static,
    {
        self.fields.push(FieldBinding {
            name: name.into(),
            assign: Box::new(move |target: &mut T, setting: &Setting, format: &NumberFormat| {
                assign(target, setting.get::<V>(format)?);
                Ok(())
            }),
        });
        self
    }

    /// Binds an array field to the setting called `name`.
    #[must_use]
    pub fn array_field<V, F>(mut self, name: impl Into<String>, assign: F) -> Self
    where
        T: 'static,
        V: FromSettingValue + 'static,
        F: Fn(&mut T, Vec<V>) + 'static,
    {
        self.fields.push(FieldBinding {
            name: name.into(),
            assign: Box::new(move |target: &mut T, setting: &Setting, format: &NumberFormat| {
                assign(target, setting.get_array::<V>(format)?);
                Ok(())
            }),
        });
        self
    }

    /// Number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<T> fmt::Debug for FieldMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldMap")
            .field(
                "fields",
                &self.fields.iter().map(|b| b.name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

impl Section {
    /// Assigns every declared field that has a setting of the same name.
    ///
    /// Returns the number of fields assigned.
    ///
    /// # Errors
    ///
    /// Returns the first conversion error. Fields assigned before the
    /// failing one keep their new values.
    pub fn map_to<T>(
        &self,
        target: &mut T,
        fields: &FieldMap<T>,
        format: &NumberFormat,
    ) -> Result<usize> {
        let mut assigned = 0;

        for binding in &fields.fields {
            let Some(setting) = self.iter().find(|s| s.name() == binding.name) else {
                continue;
            };

            (binding.assign)(target, setting, format)?;
            assigned += 1;
        }

        Ok(assigned)
    }

    /// Builds a default `T` and fills it with [`Section::map_to`].
    ///
    /// # Errors
    ///
    /// Returns the first conversion error.
    pub fn create_object<T: Default>(
        &self,
        fields: &FieldMap<T>,
        format: &NumberFormat,
    ) -> Result<T> {
        let mut target = T::default();
        self.map_to(&mut target, fields, format)?;
        Ok(target)
    }
}
