//! Process-wide cache of computed field lists.
//!
//! The core walker recomputes from the type description on every call; this
//! module is the wrapping layer for callers that enumerate the same types
//! repeatedly (code generators, schema builders). Keyed by type signature
//! and recursion option, safe to use from any thread.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock, RwLock};

use crate::errors::StructError;
use crate::field::Field;
use crate::resolve;
use crate::walker::{self, FieldsInput, RecursiveOption};

#[derive(Debug, Clone, Hash, PartialEq, Eq)]
struct CacheKey {
    signature: &'static str,
    recursive_option: RecursiveOption,
}

static CACHE: OnceLock<RwLock<HashMap<CacheKey, Arc<[Field]>>>> = OnceLock::new();

fn cache() -> &'static RwLock<HashMap<CacheKey, Arc<[Field]>>> {
    CACHE.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Like [`walker::fields`], computing at most once per type signature and
/// recursion option.
pub fn cached_fields(input: FieldsInput) -> Result<Arc<[Field]>, StructError> {
    let root = resolve::resolve_shape(input.shape)?;
    let key = CacheKey {
        signature: root.signature(),
        recursive_option: input.recursive_option,
    };
    if let Some(hit) = cache().read().unwrap().get(&key) {
        return Ok(Arc::clone(hit));
    }
    let computed: Arc<[Field]> = walker::fields(input)?.into();
    let mut guard = cache().write().unwrap();
    Ok(Arc::clone(guard.entry(key).or_insert(computed)))
}

/// Drop every cached field list (test cleanup).
pub fn clear_cache() {
    cache().write().unwrap().clear();
}
