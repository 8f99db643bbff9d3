use crate::model::{ApiType, Binding, ViewModelItem};
use ahash::AHashMap;
use std::sync::Arc;

/// Memoizes computed items by structural key, one bucket per binding family.
///
/// A parameter such as a `page` query parameter shared by many operations is
/// built once; later occurrences get the same `Arc`. The cache belongs to one
/// [`ApiViewModel`](crate::builder::ApiViewModel) and lives until
/// [`ResolutionCache::clear`] or the engine is dropped.
#[derive(Debug, Default, Clone)]
pub struct ResolutionCache {
    path: AHashMap<String, Arc<ViewModelItem>>,
    query: AHashMap<String, Arc<ViewModelItem>>,
    other: AHashMap<String, Arc<ViewModelItem>>,
}

/// Builds the structural key: `name-apiType`, plus `-enum` and `-required`
/// suffixes when they apply.
pub fn cache_key(name: &str, api_type: ApiType, is_enum: bool, required: bool) -> String {
    let mut key = format!("{}-{}", name, api_type);
    if is_enum {
        key.push_str("-enum");
    }
    if required {
        key.push_str("-required");
    }
    key
}

/// The key an already built item is stored under.
pub fn item_key(item: &ViewModelItem) -> String {
    cache_key(
        &item.name,
        item.schema.api_type,
        item.schema.enum_values.is_some(),
        item.schema.required,
    )
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn bucket(&self, binding: Binding) -> &AHashMap<String, Arc<ViewModelItem>> {
        match binding {
            Binding::Query => &self.query,
            Binding::Path => &self.path,
            Binding::Header | Binding::Type => &self.other,
        }
    }

    fn bucket_mut(&mut self, binding: Binding) -> &mut AHashMap<String, Arc<ViewModelItem>> {
        match binding {
            Binding::Query => &mut self.query,
            Binding::Path => &mut self.path,
            Binding::Header | Binding::Type => &mut self.other,
        }
    }

    pub fn get(&self, binding: Binding, key: &str) -> Option<Arc<ViewModelItem>> {
        self.bucket(binding).get(key).cloned()
    }

    /// Stores an item unless one is already cached under the same key.
    /// Returns whether the item was stored.
    pub fn put(&mut self, binding: Binding, key: String, item: Arc<ViewModelItem>) -> bool {
        let bucket = self.bucket_mut(binding);
        if bucket.contains_key(&key) {
            return false;
        }
        bucket.insert(key, item);
        true
    }

    /// Drops every cached item in all buckets.
    pub fn clear(&mut self) {
        self.path.clear();
        self.query.clear();
        self.other.clear();
    }

    pub fn len(&self) -> usize {
        self.path.len() + self.query.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
