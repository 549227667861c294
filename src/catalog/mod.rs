pub mod defs;

pub use defs::{DEFAULT_RATING, DOMAIN_COUNT, DomainDef, MAX_RATING, MIN_RATING};

/// Catalog index of the domain named by `key`.
///
/// Keys match either the stable identifier or the original label, exactly.
pub fn lookup(key: &str) -> Option<usize> {
    defs::builtin_domains()
        .iter()
        .position(|d| d.id == key || d.label == key)
}

pub fn domain(idx: usize) -> &'static DomainDef {
    &defs::builtin_domains()[idx]
}

pub fn domains() -> &'static [DomainDef] {
    defs::builtin_domains()
}

pub fn max_total() -> u32 {
    DOMAIN_COUNT as u32 * MAX_RATING as u32
}

#[cfg(test)]
#[path = "../../tests/src_inline/catalog/tests.rs"]
mod tests;
