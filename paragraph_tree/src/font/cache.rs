// Copyright 2024 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use std::sync::{PoisonError, RwLock};

use hashbrown::HashMap;
use text_primitives::{FontStyle, FontWeight};

use super::matching::match_face;
use super::{split_family_list, FaceId, FontDescription, FontHandle, FontSelector};

/// A face registered with a [`FontCache`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FaceInfo {
    /// Identifier handed back in [`FontHandle::face`].
    pub id: FaceId,
    /// Weight of the face.
    pub weight: FontWeight,
    /// Style of the face.
    pub style: FontStyle,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SelectionKey {
    family: Option<Arc<str>>,
    weight: FontWeight,
    style: FontStyle,
}

#[derive(Debug, Default)]
struct Inner {
    families: HashMap<Arc<str>, Vec<FaceInfo>>,
    default_family: Option<Arc<str>>,
    selections: HashMap<SelectionKey, Option<FontHandle>>,
}

/// An in-memory face registry with memoized selection.
///
/// The cache may be shared by every builder in the process, including builders on different
/// threads. Lookups take a read lock; only the first lookup of a given family, weight and style
/// takes the write lock to record its result.
///
/// Family names are matched ASCII case-insensitively. A description's family may be a comma
/// separated list, tried in order. A description without a family uses the family set with
/// [`set_default_family`](Self::set_default_family).
#[derive(Debug, Default)]
pub struct FontCache {
    inner: RwLock<Inner>,
}

impl FontCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a face to `family`.
    ///
    /// Previously memoized selections are discarded, since the new face may be a better match.
    pub fn register(&self, family: &str, face: FaceInfo) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let key = family_key(family);
        inner.families.entry(key).or_default().push(face);
        inner.selections.clear();
    }

    /// Sets the family used by descriptions that do not name one.
    pub fn set_default_family(&self, family: &str) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.default_family = Some(Arc::from(family));
        inner.selections.clear();
    }

    /// Number of memoized selections, hits and misses alike.
    pub fn cached_selections(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .selections
            .len()
    }
}

impl FontSelector for FontCache {
    fn resolve(&self, description: &FontDescription) -> Option<FontHandle> {
        let key = SelectionKey {
            family: description.family.clone(),
            weight: description.weight(),
            style: description.style(),
        };
        {
            let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(selection) = inner.selections.get(&key) {
                return selection.clone();
            }
        }
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let selection = inner.select(&key);
        inner.selections.insert(key, selection.clone());
        selection
    }
}

impl Inner {
    fn select(&self, key: &SelectionKey) -> Option<FontHandle> {
        let names = match key.family.as_deref() {
            Some(list) => split_family_list(list),
            None => self.default_family.as_deref().into_iter().collect(),
        };
        names.into_iter().find_map(|name| {
            let faces = self.families.get(&family_key(name))?;
            let index = match_face(faces, key.style, key.weight)?;
            Some(FontHandle::new(Some(Arc::from(name)), faces[index].id))
        })
    }
}

fn family_key(name: &str) -> Arc<str> {
    Arc::from(name.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roboto() -> FontCache {
        let cache = FontCache::new();
        for (id, weight, style) in [
            (1, FontWeight::NORMAL, FontStyle::Normal),
            (2, FontWeight::BOLD, FontStyle::Normal),
            (3, FontWeight::NORMAL, FontStyle::Italic),
        ] {
            cache.register(
                "Roboto",
                FaceInfo {
                    id: FaceId(id),
                    weight,
                    style,
                },
            );
        }
        cache
    }

    #[test]
    fn selects_registered_face() {
        let cache = roboto();
        let description = FontDescription::default()
            .with_family("roboto")
            .with_weight(FontWeight::BOLD);
        let handle = cache.resolve(&description).unwrap();
        assert_eq!(handle.face(), FaceId(2));
        assert!(!handle.is_fallback());
    }

    #[test]
    fn family_list_is_tried_in_order() {
        let cache = roboto();
        let description = FontDescription::default()
            .with_family("Missing, Roboto")
            .with_style(FontStyle::Italic);
        assert_eq!(cache.resolve(&description).unwrap().face(), FaceId(3));
    }

    #[test]
    fn unknown_family_misses_and_is_memoized() {
        let cache = roboto();
        let description = FontDescription::default().with_family("Missing");
        assert_eq!(cache.resolve(&description), None);
        assert_eq!(cache.resolve(&description), None);
        assert_eq!(cache.cached_selections(), 1);
    }

    #[test]
    fn default_family_serves_unnamed_descriptions() {
        let cache = roboto();
        assert_eq!(cache.resolve(&FontDescription::default()), None);
        cache.set_default_family("Roboto");
        assert_eq!(
            cache.resolve(&FontDescription::default()).unwrap().face(),
            FaceId(1)
        );
    }

    #[test]
    fn registering_invalidates_selections() {
        let cache = roboto();
        let description = FontDescription::default()
            .with_family("Roboto")
            .with_weight(FontWeight::BLACK);
        assert_eq!(cache.resolve(&description).unwrap().face(), FaceId(2));
        cache.register(
            "Roboto",
            FaceInfo {
                id: FaceId(4),
                weight: FontWeight::BLACK,
                style: FontStyle::Normal,
            },
        );
        assert_eq!(cache.resolve(&description).unwrap().face(), FaceId(4));
    }

    #[test]
    fn cache_is_shareable_across_threads() {
        let cache = Arc::new(roboto());
        let workers: Vec<_> = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    let description = FontDescription::default().with_family("Roboto");
                    cache.resolve(&description).map(|handle| handle.face())
                })
            })
            .collect();
        for worker in workers {
            assert_eq!(worker.join().unwrap(), Some(FaceId(1)));
        }
    }
}
