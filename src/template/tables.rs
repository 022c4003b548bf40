//! Shared progression cost templates
//!
//! Quantities per breakpoint for every progression axis. All characters
//! share one schedule; weapons split by rarity. Binding these to an
//! entity's materials happens in the roster layer.

use super::SlotCost::{Flat, Tiered};
use super::{Slot, TemplateEntry};

const fn row(
    level: u32,
    ascension: Option<u8>,
    costs: &'static [(Slot, super::SlotCost)],
) -> TemplateEntry {
    TemplateEntry {
        level,
        ascension,
        costs,
    }
}

pub static CHARACTER_ASCENSION: &[TemplateEntry] = &[
    row(20, Some(1), &[(Slot::Boss, Flat(0)), (Slot::Enemy, Tiered([4, 0, 0, 0])), (Slot::Specialty, Flat(0)), (Slot::Credits, Flat(5000))]),
    row(40, Some(2), &[(Slot::Boss, Flat(3)), (Slot::Enemy, Tiered([0, 4, 0, 0])), (Slot::Specialty, Flat(4)), (Slot::Credits, Flat(10000))]),
    row(50, Some(3), &[(Slot::Boss, Flat(6)), (Slot::Enemy, Tiered([0, 8, 0, 0])), (Slot::Specialty, Flat(8)), (Slot::Credits, Flat(15000))]),
    row(60, Some(4), &[(Slot::Boss, Flat(9)), (Slot::Enemy, Tiered([0, 0, 4, 0])), (Slot::Specialty, Flat(12)), (Slot::Credits, Flat(20000))]),
    row(70, Some(5), &[(Slot::Boss, Flat(12)), (Slot::Enemy, Tiered([0, 0, 8, 0])), (Slot::Specialty, Flat(16)), (Slot::Credits, Flat(40000))]),
    row(80, Some(6), &[(Slot::Boss, Flat(16)), (Slot::Enemy, Tiered([0, 0, 0, 4])), (Slot::Specialty, Flat(20)), (Slot::Credits, Flat(80000))]),
];

pub static WEAPON_ASCENSION_5: &[TemplateEntry] = &[
    row(20, Some(1), &[(Slot::Forgery, Tiered([0, 0, 0, 0])), (Slot::Enemy, Tiered([6, 0, 0, 0])), (Slot::Credits, Flat(10000))]),
    row(40, Some(2), &[(Slot::Forgery, Tiered([6, 0, 0, 0])), (Slot::Enemy, Tiered([0, 6, 0, 0])), (Slot::Credits, Flat(20000))]),
    row(50, Some(3), &[(Slot::Forgery, Tiered([0, 8, 0, 0])), (Slot::Enemy, Tiered([0, 0, 4, 0])), (Slot::Credits, Flat(40000))]),
    row(60, Some(4), &[(Slot::Forgery, Tiered([0, 0, 6, 0])), (Slot::Enemy, Tiered([0, 0, 6, 0])), (Slot::Credits, Flat(60000))]),
    row(70, Some(5), &[(Slot::Forgery, Tiered([0, 0, 0, 8])), (Slot::Enemy, Tiered([0, 0, 0, 4])), (Slot::Credits, Flat(80000))]),
    row(80, Some(6), &[(Slot::Forgery, Tiered([0, 0, 0, 12])), (Slot::Enemy, Tiered([0, 0, 0, 8])), (Slot::Credits, Flat(120000))]),
];

pub static WEAPON_ASCENSION_4: &[TemplateEntry] = &[
    row(20, Some(1), &[(Slot::Forgery, Tiered([0, 0, 0, 0])), (Slot::Enemy, Tiered([5, 0, 0, 0])), (Slot::Credits, Flat(8000))]),
    row(40, Some(2), &[(Slot::Forgery, Tiered([5, 0, 0, 0])), (Slot::Enemy, Tiered([0, 5, 0, 0])), (Slot::Credits, Flat(16000))]),
    row(50, Some(3), &[(Slot::Forgery, Tiered([0, 7, 0, 0])), (Slot::Enemy, Tiered([0, 0, 4, 0])), (Slot::Credits, Flat(32000))]),
    row(60, Some(4), &[(Slot::Forgery, Tiered([0, 0, 5, 0])), (Slot::Enemy, Tiered([0, 0, 5, 0])), (Slot::Credits, Flat(48000))]),
    row(70, Some(5), &[(Slot::Forgery, Tiered([0, 0, 0, 7])), (Slot::Enemy, Tiered([0, 0, 0, 4])), (Slot::Credits, Flat(64000))]),
    row(80, Some(6), &[(Slot::Forgery, Tiered([0, 0, 0, 10])), (Slot::Enemy, Tiered([0, 0, 0, 7])), (Slot::Credits, Flat(96000))]),
];

pub static CHARACTER_EXP: &[TemplateEntry] = &[
    row(20, None, &[(Slot::Xp, Flat(33300)), (Slot::Credits, Flat(11655))]),
    row(40, None, &[(Slot::Xp, Flat(175500)), (Slot::Credits, Flat(61425))]),
    row(50, None, &[(Slot::Xp, Flat(188300)), (Slot::Credits, Flat(65905))]),
    row(60, None, &[(Slot::Xp, Flat(286600)), (Slot::Credits, Flat(100310))]),
    row(70, None, &[(Slot::Xp, Flat(413000)), (Slot::Credits, Flat(144550))]),
    row(80, None, &[(Slot::Xp, Flat(572400)), (Slot::Credits, Flat(200340))]),
    row(90, None, &[(Slot::Xp, Flat(768900)), (Slot::Credits, Flat(269115))]),
];

pub static WEAPON_EXP_5: &[TemplateEntry] = &[
    row(20, None, &[(Slot::Xp, Flat(38700)), (Slot::Credits, Flat(15480))]),
    row(40, None, &[(Slot::Xp, Flat(187400)), (Slot::Credits, Flat(74690))]),
    row(50, None, &[(Slot::Xp, Flat(199900)), (Slot::Credits, Flat(79960))]),
    row(60, None, &[(Slot::Xp, Flat(302400)), (Slot::Credits, Flat(120960))]),
    row(70, None, &[(Slot::Xp, Flat(432100)), (Slot::Credits, Flat(172840))]),
    row(80, None, &[(Slot::Xp, Flat(590700)), (Slot::Credits, Flat(236280))]),
    row(90, None, &[(Slot::Xp, Flat(941200)), (Slot::Credits, Flat(376480))]),
];

pub static WEAPON_EXP_4: &[TemplateEntry] = &[
    row(20, None, &[(Slot::Xp, Flat(36900)), (Slot::Credits, Flat(14760))]),
    row(40, None, &[(Slot::Xp, Flat(150800)), (Slot::Credits, Flat(60320))]),
    row(50, None, &[(Slot::Xp, Flat(150800)), (Slot::Credits, Flat(60320))]),
    row(60, None, &[(Slot::Xp, Flat(227900)), (Slot::Credits, Flat(91160))]),
    row(70, None, &[(Slot::Xp, Flat(333600)), (Slot::Credits, Flat(133440))]),
    row(80, None, &[(Slot::Xp, Flat(474800)), (Slot::Credits, Flat(189920))]),
    row(90, None, &[(Slot::Xp, Flat(914400)), (Slot::Credits, Flat(365760))]),
];

pub static SKILL: &[TemplateEntry] = &[
    row(2, None, &[(Slot::Forgery, Tiered([2, 0, 0, 0])), (Slot::Enemy, Tiered([2, 0, 0, 0])), (Slot::Weekly, Flat(0)), (Slot::Credits, Flat(1500))]),
    row(3, None, &[(Slot::Forgery, Tiered([3, 0, 0, 0])), (Slot::Enemy, Tiered([3, 0, 0, 0])), (Slot::Weekly, Flat(0)), (Slot::Credits, Flat(2000))]),
    row(4, None, &[(Slot::Forgery, Tiered([0, 2, 0, 0])), (Slot::Enemy, Tiered([0, 2, 0, 0])), (Slot::Weekly, Flat(0)), (Slot::Credits, Flat(4500))]),
    row(5, None, &[(Slot::Forgery, Tiered([0, 3, 0, 0])), (Slot::Enemy, Tiered([0, 3, 0, 0])), (Slot::Weekly, Flat(0)), (Slot::Credits, Flat(6000))]),
    row(6, None, &[(Slot::Forgery, Tiered([0, 0, 3, 0])), (Slot::Enemy, Tiered([0, 0, 2, 0])), (Slot::Weekly, Flat(0)), (Slot::Credits, Flat(16000))]),
    row(7, None, &[(Slot::Forgery, Tiered([0, 0, 5, 0])), (Slot::Enemy, Tiered([0, 0, 3, 0])), (Slot::Weekly, Flat(1)), (Slot::Credits, Flat(30000))]),
    row(8, None, &[(Slot::Forgery, Tiered([0, 0, 0, 2])), (Slot::Enemy, Tiered([0, 0, 0, 2])), (Slot::Weekly, Flat(1)), (Slot::Credits, Flat(50000))]),
    row(9, None, &[(Slot::Forgery, Tiered([0, 0, 0, 3])), (Slot::Enemy, Tiered([0, 0, 0, 3])), (Slot::Weekly, Flat(1)), (Slot::Credits, Flat(70000))]),
    row(10, None, &[(Slot::Forgery, Tiered([0, 0, 0, 6])), (Slot::Enemy, Tiered([0, 0, 0, 4])), (Slot::Weekly, Flat(1)), (Slot::Credits, Flat(100000))]),
];

pub static STAT_NODE: &[TemplateEntry] = &[
    row(1, None, &[(Slot::Forgery, Tiered([0, 0, 3, 0])), (Slot::Enemy, Tiered([0, 0, 3, 0])), (Slot::Weekly, Flat(0)), (Slot::Credits, Flat(50000))]),
    row(2, None, &[(Slot::Forgery, Tiered([0, 0, 0, 3])), (Slot::Enemy, Tiered([0, 0, 0, 3])), (Slot::Weekly, Flat(1)), (Slot::Credits, Flat(100000))]),
];

pub static INHERENT_SKILL: &[TemplateEntry] = &[
    row(1, None, &[(Slot::Forgery, Tiered([0, 3, 0, 0])), (Slot::Enemy, Tiered([0, 3, 0, 0])), (Slot::Weekly, Flat(1)), (Slot::Credits, Flat(10000))]),
    row(2, None, &[(Slot::Forgery, Tiered([0, 0, 3, 0])), (Slot::Enemy, Tiered([0, 0, 3, 0])), (Slot::Weekly, Flat(1)), (Slot::Credits, Flat(20000))]),
];
