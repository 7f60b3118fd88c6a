#![forbid(unsafe_code)]

//! The injected image lookup capability.
//!
//! The converter never loads images itself. It asks an [`ImageLookup`] for a
//! handle by key and carries whatever comes back into the converted output.
//! A handle can be a decoded image, a file path, a texture id or simply the
//! key.
//!
//! ```
//! use std::collections::HashSet;
//! use emojiswap::lookup::{ImageLookup, lookup_fn};
//!
//! let catalog: HashSet<String> = ["1f600".to_string()].into_iter().collect();
//! assert_eq!(catalog.lookup("1f600"), Some("1f600".to_string()));
//! assert_eq!(catalog.lookup("1f601"), None);
//!
//! let paths = lookup_fn(|key: &str| (key == "1f600").then(|| format!("assets/{key}.png")));
//! assert_eq!(paths.lookup("1f600").as_deref(), Some("assets/1f600.png"));
//! ```

use std::collections::{HashMap, HashSet};
use std::hash::BuildHasher;

use rustc_hash::FxHashMap;

/// Key to handle catalog with a fast hasher for short hex keys.
pub type ImageMap<H> = FxHashMap<String, H>;

/// Resolve a lookup key to an image handle.
pub trait ImageLookup {
    /// The handle returned for a hit.
    type Handle;

    /// Return the image for `key`, or `None` when the image set lacks it.
    fn lookup(&self, key: &str) -> Option<Self::Handle>;
}

impl<T: ImageLookup + ?Sized> ImageLookup for &T {
    type Handle = T::Handle;

    fn lookup(&self, key: &str) -> Option<Self::Handle> {
        (**self).lookup(key)
    }
}

impl<H: Clone, S: BuildHasher> ImageLookup for HashMap<String, H, S> {
    type Handle = H;

    fn lookup(&self, key: &str) -> Option<H> {
        self.get(key).cloned()
    }
}

/// A set of available keys; the handle is the key itself.
impl<S: BuildHasher> ImageLookup for HashSet<String, S> {
    type Handle = String;

    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

/// Adapter turning a closure into an [`ImageLookup`].
#[derive(Debug, Clone, Copy)]
pub struct FnLookup<F>(pub F);

impl<F, H> ImageLookup for FnLookup<F>
where
    F: Fn(&str) -> Option<H>,
{
    type Handle = H;

    fn lookup(&self, key: &str) -> Option<H> {
        (self.0)(key)
    }
}

/// Wrap a closure as an [`ImageLookup`].
#[must_use]
pub fn lookup_fn<F, H>(f: F) -> FnLookup<F>
where
    F: Fn(&str) -> Option<H>,
{
    FnLookup(f)
}

/// A lookup that never finds anything. Converting with it leaves every
/// input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImages;

impl ImageLookup for NoImages {
    type Handle = ();

    fn lookup(&self, _key: &str) -> Option<()> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_lookup_clones_handle() {
        let mut map = HashMap::new();
        map.insert("1f600".to_string(), 7u32);
        assert_eq!(map.lookup("1f600"), Some(7));
        assert_eq!(map.lookup("1f601"), None);
    }

    #[test]
    fn fx_map_lookup() {
        let mut map: ImageMap<&str> = ImageMap::default();
        map.insert("2764".to_string(), "heart.png");
        assert_eq!(map.lookup("2764"), Some("heart.png"));
    }

    #[test]
    fn reference_forwards() {
        let set: HashSet<String> = ["1f44d".to_string()].into_iter().collect();
        let by_ref = &set;
        assert_eq!(by_ref.lookup("1f44d"), Some("1f44d".to_string()));
    }

    #[test]
    fn closure_lookup() {
        let lookup = lookup_fn(|key: &str| key.strip_prefix("1f").map(str::len));
        assert_eq!(lookup.lookup("1f600"), Some(3));
        assert_eq!(lookup.lookup("2764"), None);
    }

    #[test]
    fn no_images_never_hits() {
        assert_eq!(NoImages.lookup("1f600"), None);
    }
}
