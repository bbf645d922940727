//! Wildcard compression and expansion of permission sets
//!
//! Permission codes take three shapes:
//!
//! ```text
//! items.create   concrete
//! items.*        every action on `items`
//! *.*            every permission in the catalog
//! ```
//!
//! [`compress`] collapses fully selected resource groups into wildcards and
//! [`expand`] resolves wildcards back against a catalog. For any selection
//! `S` of concrete catalog codes, `expand(compress(S)) == S`. Nothing here
//! fails: unknown codes are passed through as-is.

mod compressor;
mod grouping;
mod patterns;

pub use compressor::{compress, compress_with, covers_catalog, expand};
pub use grouping::{ResourceGroup, ResourceGroups};
pub use patterns::{
    FULL_ACCESS, RESOURCE_WILDCARD_SUFFIX, WildcardType, classify, get_wildcard_type, is_valid_wildcard,
    is_wildcard, resource_wildcard,
};
