//! An ordered, name-unique collection of settings.

use std::fmt;

use crate::error::{Error, Result};

use super::Setting;
use super::element::{Element, Header, impl_element, names_equal};

/// A named section holding settings in insertion order.
///
/// Setting names are unique within a section, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub(crate) header: Header,
    settings: Vec<Setting>,
}

impl_element!(Section);

impl Section {
    /// Creates an empty section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `name` is empty.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        Ok(Self {
            header: Header::new(name)?,
            settings: Vec::new(),
        })
    }

    pub(crate) const fn from_header(header: Header) -> Self {
        Self {
            header,
            settings: Vec::new(),
        }
    }

    /// Number of settings in the section.
    #[must_use]
    pub fn len(&self) -> usize {
        self.settings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.settings.is_empty()
    }

    #[must_use]
    pub fn settings(&self) -> &[Setting] {
        &self.settings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Setting> {
        self.settings.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Setting> {
        self.settings.iter_mut()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.settings
            .iter()
            .position(|setting| names_equal(setting.name(), name))
    }

    /// Returns `true` if a setting with this name (any case) exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Looks up a setting by case-insensitive name.
    #[must_use]
    pub fn setting(&self, name: &str) -> Option<&Setting> {
        self.position(name).map(|i| &self.settings[i])
    }

    pub fn setting_mut(&mut self, name: &str) -> Option<&mut Setting> {
        self.position(name).map(move |i| &mut self.settings[i])
    }

    /// Returns the setting with this name, appending an empty one if absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if the setting must be created and
    /// `name` is empty.
    pub fn entry(&mut self, name: &str) -> Result<&mut Setting> {
        let index = match self.position(name) {
            Some(i) => i,
            None => {
                self.settings.push(Setting::new(name)?);
                self.settings.len() - 1
            }
        };

        Ok(&mut self.settings[index])
    }

    /// Returns the setting at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Setting> {
        let len = self.settings.len();
        self.settings
            .get(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Returns the setting at `index` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut Setting> {
        let len = self.settings.len();
        self.settings
            .get_mut(index)
            .ok_or(Error::IndexOutOfRange { index, len })
    }

    /// Appends a setting.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DuplicateSetting`] if a setting with an equal name exists.
    pub fn add(&mut self, setting: Setting) -> Result<()> {
        if self.contains(setting.name()) {
            return Err(Error::DuplicateSetting(setting.header.name));
        }

        self.settings.push(setting);
        Ok(())
    }

    /// Replaces the setting at `index`, returning the old one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] for a bad index, or
    /// [`Error::DuplicateSetting`] if another setting already has the new name.
    pub fn replace(&mut self, index: usize, setting: Setting) -> Result<Setting> {
        let len = self.settings.len();
        if index >= len {
            return Err(Error::IndexOutOfRange { index, len });
        }

        if self.position(setting.name()).is_some_and(|i| i != index) {
            return Err(Error::DuplicateSetting(setting.header.name));
        }

        Ok(std::mem::replace(&mut self.settings[index], setting))
    }

    /// Stores `setting` in place of the one with the same name, or appends it.
    ///
    /// Returns the setting that was replaced, if any.
    pub fn insert_or_replace(&mut self, setting: Setting) -> Option<Setting> {
        match self.position(setting.name()) {
            Some(i) => Some(std::mem::replace(&mut self.settings[i], setting)),
            None => {
                self.settings.push(setting);
                None
            }
        }
    }

    /// Renames a setting, keeping names unique.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingNotFound`] if `from` does not exist,
    /// [`Error::DuplicateSetting`] if a different setting is already called `to`,
    /// or [`Error::InvalidArgument`] if `to` is empty.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<()> {
        let index = self
            .position(from)
            .ok_or_else(|| Error::SettingNotFound(from.to_owned()))?;

        if self.position(to).is_some_and(|i| i != index) {
            return Err(Error::DuplicateSetting(to.to_owned()));
        }

        self.settings[index].header.rename(to)
    }

    /// Removes a setting by case-insensitive name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SettingNotFound`] if no such setting exists.
    pub fn remove(&mut self, name: &str) -> Result<Setting> {
        let index = self
            .position(name)
            .ok_or_else(|| Error::SettingNotFound(name.to_owned()))?;

        Ok(self.settings.remove(index))
    }

    /// Removes all settings.
    pub fn clear(&mut self) {
        self.settings.clear();
    }

    pub(crate) fn push_unchecked(&mut self, setting: Setting) {
        self.settings.push(setting);
    }

    pub(crate) fn last_setting_mut(&mut self) -> Option<&mut Setting> {
        self.settings.last_mut()
    }

    /// Renders the section header, `[name]`.
    ///
    /// With `include_comments`, pre-comments precede the header and the
    /// inline comment follows it. Settings are not included.
    #[must_use]
    pub fn render(&self, include_comments: bool) -> String {
        let line = format!("[{}]", self.header.name);
        self.header.render_around(&line, include_comments)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

impl<'a> IntoIterator for &'a Section {
    type Item = &'a Setting;
    type IntoIter = std::slice::Iter<'a, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter()
    }
}

impl<'a> IntoIterator for &'a mut Section {
    type Item = &'a mut Setting;
    type IntoIter = std::slice::IterMut<'a, Setting>;

    fn into_iter(self) -> Self::IntoIter {
        self.settings.iter_mut()
    }
}
