//! Parsed schedule data.

mod section;
pub use section::{Section, SectionBuilder};

use derive_more::Deref;

/// Sections in source row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Schedule {
    sections: Vec<Section>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }
}

impl FromIterator<Section> for Schedule {
    fn from_iter<T: IntoIterator<Item = Section>>(iter: T) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Schedule {
    type Item = Section;
    type IntoIter = std::vec::IntoIter<Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.into_iter()
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a Section;
    type IntoIter = std::slice::Iter<'a, Section>;

    fn into_iter(self) -> Self::IntoIter {
        self.sections.iter()
    }
}
