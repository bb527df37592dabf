// Grouping of candidate files by fingerprint.
//
// Groups are kept in the order their fingerprint was first seen. Within a
// group the keeper is the widest file so far; a later file only replaces it
// when strictly wider, so ties stay with the earlier file.

use std::collections::HashMap;

use crate::core::fingerprint::ImageFingerprint;
use crate::core::image::CandidateFile;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FingerprintGroup {
    pub fingerprint: ImageFingerprint,
    pub keeper: CandidateFile,
    /// Every other file with this fingerprint, in the order it was demoted or seen.
    pub duplicates: Vec<CandidateFile>,
}

impl FingerprintGroup {
    fn new(fingerprint: ImageFingerprint, keeper: CandidateFile) -> Self {
        Self {
            fingerprint,
            keeper,
            duplicates: Vec::new(),
        }
    }

    pub fn has_duplicates(&self) -> bool {
        !self.duplicates.is_empty()
    }

    /// Keeper followed by duplicates.
    pub fn files(&self) -> impl Iterator<Item = &CandidateFile> {
        std::iter::once(&self.keeper).chain(self.duplicates.iter())
    }
}

/// Where an inserted file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// First file with this fingerprint.
    NewGroup,
    /// Became the keeper; the previous keeper was moved to the duplicates.
    Keeper { displaced: CandidateFile },
    /// Appended to the duplicates of an existing keeper.
    Duplicate { keeper: CandidateFile },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DuplicateGroups {
    groups: Vec<FingerprintGroup>,
    index: HashMap<ImageFingerprint, usize>,
}

impl DuplicateGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, fingerprint: ImageFingerprint, file: CandidateFile) -> Placement {
        let Some(&slot) = self.index.get(&fingerprint) else {
            self.index.insert(fingerprint.clone(), self.groups.len());
            self.groups.push(FingerprintGroup::new(fingerprint, file));
            return Placement::NewGroup;
        };

        let group = &mut self.groups[slot];
        if group.keeper.width < file.width {
            let displaced = std::mem::replace(&mut group.keeper, file);
            group.duplicates.push(displaced.clone());
            Placement::Keeper { displaced }
        } else {
            let keeper = group.keeper.clone();
            group.duplicates.push(file);
            Placement::Duplicate { keeper }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn get(&self, fingerprint: &ImageFingerprint) -> Option<&FingerprintGroup> {
        self.index.get(fingerprint).map(|&slot| &self.groups[slot])
    }

    /// All groups, in first-seen order.
    pub fn iter(&self) -> std::slice::Iter<'_, FingerprintGroup> {
        self.groups.iter()
    }

    /// Groups holding at least one duplicate, in first-seen order.
    pub fn with_duplicates(&self) -> impl Iterator<Item = &FingerprintGroup> {
        self.groups.iter().filter(|g| g.has_duplicates())
    }

    pub fn duplicate_count(&self) -> usize {
        self.groups.iter().map(|g| g.duplicates.len()).sum()
    }

    pub fn file_count(&self) -> usize {
        self.len() + self.duplicate_count()
    }
}

impl<'a> IntoIterator for &'a DuplicateGroups {
    type Item = &'a FingerprintGroup;
    type IntoIter = std::slice::Iter<'a, FingerprintGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(ImageFingerprint, CandidateFile)> for DuplicateGroups {
    fn from_iter<I: IntoIterator<Item = (ImageFingerprint, CandidateFile)>>(iter: I) -> Self {
        let mut groups = DuplicateGroups::new();
        for (fingerprint, file) in iter {
            groups.insert(fingerprint, file);
        }
        groups
    }
}
