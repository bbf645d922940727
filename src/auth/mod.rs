//! Permission set handling for role management
//!
//! - [`wildcard`]: compression, expansion and classification of codes
//! - [`catalog`]: the immutable permission snapshot everything resolves against
//! - [`matrix`]: per-resource selection state for the editor grid
//! - [`danger`]: warnings for broad or destructive grants
//! - [`suggestion`]: wildcards the current selection could collapse into
//! - [`editor`]: role draft store with change listeners

pub mod catalog;
pub mod danger;
pub mod editor;
pub mod matrix;
pub mod suggestion;
mod types;
pub mod wildcard;

pub use catalog::PermissionCatalog;
pub use danger::{DangerLevel, DangerReason, DangerousPermission};
pub use editor::{RoleDraft, RoleEditor, RoleEditorListener, RoleSubmission, SubscriptionId};
pub use matrix::{MatrixCell, MatrixRow, PermissionMatrix, SelectionState};
pub use suggestion::WildcardSuggestion;
pub use types::{CODE_SEPARATOR, Permission, action_of, resource_of};
pub use wildcard::{
    FULL_ACCESS, WildcardType, classify, compress, compress_with, expand, get_wildcard_type,
    is_valid_wildcard, is_wildcard,
};
