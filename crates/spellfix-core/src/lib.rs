// spellfix-core: types shared by the corrector and its tools.

pub mod case;
pub mod character;
pub mod enums;
