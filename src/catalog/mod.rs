//! Static catalogs: ranks, weapons, helmets and skills
//!
//! Every catalog is a closed enum backed by an immutable lookup table.
//! Soldiers store the tag; metadata is read from the table on demand.

pub mod helmets;
pub mod rank;
pub mod skills;
pub mod weapons;

pub use helmets::HelmetType;
pub use rank::Rank;
pub use skills::SkillType;
pub use weapons::{WeaponProfile, WeaponType};

/// Case-insensitive lookup by tag (`sniper_rifle`) or display name (`Sniper Rifle`)
pub(crate) fn lookup<T: Copy>(
    all: &[T],
    name: &str,
    tag: impl Fn(&T) -> &'static str,
    display: impl Fn(&T) -> &'static str,
) -> Option<T> {
    let wanted = name.trim();
    all.iter()
        .find(|item| tag(item).eq_ignore_ascii_case(wanted) || display(item).eq_ignore_ascii_case(wanted))
        .copied()
}
