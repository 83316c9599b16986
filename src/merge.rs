use crate::table::KeyValueTable;

/// Fold `overlay` on top of `base`. For a key present in both, `overlay`'s
/// value wins; all other keys are kept from either side.
pub fn overlay(mut base: KeyValueTable, overlay: KeyValueTable) -> KeyValueTable {
    base.extend(overlay);
    base
}
