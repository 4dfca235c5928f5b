use crate::world::person::roles::InfoRole;

/// The answer a console line was reduced to, trimmed and lowercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer(pub String);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutantMove {
    Kill,
    Infect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DoctorMove {
    Kill,
    Heal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HackerChoice {
    Hack(InfoRole),
    GiveUp,
    Unknown,
}
