//! The root aggregate: an ordered, name-unique collection of sections.

use crate::error::{Error, Result};

use super::Section;
use super::element::{Element, names_equal};

/// A configuration made of sections, each holding settings.
///
/// Section names are unique, compared case-insensitively, and sections keep
/// their insertion order.
///
/// # Examples
///
/// ```
/// use sharpini::Configuration;
///
/// let mut config = Configuration::new();
/// config.entry("Video").unwrap().entry("Width").unwrap().set(1920);
///
/// let width = config.section("video").unwrap().setting("WIDTH").unwrap();
/// assert_eq!(width.raw_value(), "1920");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    sections: Vec<Section>,
}

impl Configuration {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Section> {
        self.sections.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Section> {
        self.sections.iter_mut()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections
            .iter()
            .position(|section| names_equal(section.name(), name))
    }

    /// Returns `true` if a section with this name (any case) exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Looks up a section by case-insensitive name.
    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.position(name).map(|i| &self.sections[i])
    }

    pub fn section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.position(name).map(move |i| &mut self.sections[i])
    }

    /// Returns the section with this name, appending an empty one if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the section must be created and
    /// `name` is empty.
    pub fn entry(&mut self, name: &str) -> Result<&mut Section> {
        let index = match self.position(name) {
            Some(i) => i,
            None => {
                self.sections.push(Section::new(name)?);
                self.sections.len() - 1
            }
        };

        Ok(&mut self.sections[index])
    }

    /// Returns the section at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Section> {
        let len = self.sections.len();
        self.sections
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the section at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Section> {
        let len = self.sections.len();
        self.sections
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Appends a section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSection`] if a section with an equal name exists.
    pub fn add(&mut self, section: Section) -> Result<()> {
        if self.contains(section.name()) {
            return Err(Error::DuplicateSection(section.header.name));
        }

        self.sections.push(section);
        Ok(())
    }

    /// Replaces the section at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for a bad index, or
    /// [`Error::DuplicateSection`] if another section already has the new name.
    pub fn replace(&mut self, index: usize, section: Section) -> Result<Section> {
        let len = self.sections.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        if self.position(section.name()).is_some_and(|i| i != index) {
            return Err(Error::DuplicateSection(section.header.name));
        }

        Ok(std::mem::replace(&mut self.sections[index], section))
    }

    /// Stores `section` in place of the one with the same name, or appends it.
    ///
    /// Returns the section that was replaced, if any.
    pub fn insert_or_replace(&mut self, section: Section) -> Option<Section> {
        match self.position(section.name()) {
            Some(i) => Some(std::mem::replace(&mut self.sections[i], section)),
            None => {
                self.sections.push(section);
                None
            }
        }
    }

    /// Renames a section, keeping names unique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if `from` does not exist,
    /// [`Error::DuplicateSection`] if a different section is already called `to`,
    /// or [`Error::InvalidArgument`] if `to` is empty.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        let index = self
            .position(from)
            .ok_or_else(|| Error::SectionNotFound(from.to_owned()))?;

        if self.position(to).is_some_and(|i| i != index) {
            return Err(Error::DuplicateSection(to.to_owned()));
        }

        self.sections[index].header.rename(to)
    }

    /// Removes a section by case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SectionNotFound`] if no such section exists.
    pub fn remove(&mut self, name: &str) -> Result<Section> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::SectionNotFound(name.to_owned()))?;

        Ok(self.sections.remove(index))
    }

    /// Removes all sections.
    pub fn clear(&mut self) {
        self.sections.clear();
    }

    /// Appends a section the parser has already checked for uniqueness.
    pub(crate) fn push_unchecked(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub(crate) fn last_section_mut(&mut self) -> Option<&mut Section> {
        self.sections.last_mut()
    }
}

impl<'a> IntoIterator for &'a Configuration {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}

impl<'a> IntoIterator for &'a mut Configuration {
    type Item = &'a mut Section;
    type IntoIter = std::slice::IterMut<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter_mut()
    }
}

impl IntoIterator for Configuration {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}
