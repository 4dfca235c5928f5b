use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Mutant,
    Doctor,
    Psychologist,
    Geneticist,
    Technician,
    Hacker,
    Spy,
    Traitor,
}

impl Role {
    /// Night order. Traitor has no night action and is left out.
    pub const NIGHT_ORDER: [Role; 7] = [
        Role::Mutant,
        Role::Doctor,
        Role::Technician,
        Role::Psychologist,
        Role::Geneticist,
        Role::Hacker,
        Role::Spy,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Role::Mutant => "mutant",
            Role::Doctor => "doctor",
            Role::Psychologist => "psychologist",
            Role::Geneticist => "geneticist",
            Role::Technician => "technician",
            Role::Hacker => "hacker",
            Role::Spy => "spy",
            Role::Traitor => "traitor",
        }
    }

    /// Roles whose holders never receive an extra genome at setup.
    pub fn keeps_genome(&self) -> bool {
        matches!(self, Role::Mutant | Role::Doctor)
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The three roles whose findings the hacker can steal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfoRole {
    Psychologist,
    Geneticist,
    Technician,
}

impl InfoRole {
    pub const ALL: [InfoRole; 3] = [
        InfoRole::Psychologist,
        InfoRole::Geneticist,
        InfoRole::Technician,
    ];

    /// Case-insensitive prefix match. Empty input matches nothing.
    pub fn from_prefix(input: &str) -> Option<InfoRole> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return None;
        }

        Self::ALL
            .into_iter()
            .find(|role| role.role().name().starts_with(&input))
    }

    pub fn role(&self) -> Role {
        match self {
            InfoRole::Psychologist => Role::Psychologist,
            InfoRole::Geneticist => Role::Geneticist,
            InfoRole::Technician => Role::Technician,
        }
    }
}

impl Display for InfoRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.role())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Genome {
    Resistant,
    #[default]
    Normal,
    Weak,
}

impl Display for Genome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Genome::Resistant => write!(f, "Resistant"),
            Genome::Normal => write!(f, "Normal"),
            Genome::Weak => write!(f, "Weak"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_role_prefix() {
        assert_eq!(InfoRole::from_prefix("psy"), Some(InfoRole::Psychologist));
        assert_eq!(InfoRole::from_prefix("G"), Some(InfoRole::Geneticist));
        assert_eq!(InfoRole::from_prefix("technician"), Some(InfoRole::Technician));
        assert_eq!(InfoRole::from_prefix("spy"), None);
        assert_eq!(InfoRole::from_prefix(""), None);
    }

    #[test]
    fn roles_parse_lowercase() {
        let roles: Vec<Role> = serde_yaml::from_str("[mutant, doctor, traitor]").unwrap();
        assert_eq!(roles, vec![Role::Mutant, Role::Doctor, Role::Traitor]);
    }

    #[test]
    fn only_mutant_and_doctor_keep_their_genome() {
        let keepers: Vec<Role> = Role::NIGHT_ORDER
            .into_iter()
            .chain([Role::Traitor])
            .filter(Role::keeps_genome)
            .collect();
        assert_eq!(keepers, vec![Role::Mutant, Role::Doctor]);
    }
}
