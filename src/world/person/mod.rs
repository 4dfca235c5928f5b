pub mod assigner;
pub mod roles;

use serde::{Deserialize, Serialize};

use self::roles::{Genome, Role};

/// What was done to a person during the current round. Only the spy sees it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spied {
    pub mutated: bool,
    pub paralyzed: bool,
    pub healed: bool,
    pub psychologized: bool,
    pub geneticized: bool,
}

impl Spied {
    pub fn fields(&self) -> [(&'static str, bool); 5] {
        [
            ("mutated", self.mutated),
            ("paralyzed", self.paralyzed),
            ("healed", self.healed),
            ("psychologized", self.psychologized),
            ("geneticized", self.geneticized),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub role: Option<Role>,
    #[serde(default)]
    pub mutant: bool,
    #[serde(default)]
    pub genome: Genome,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub paralyzed: bool,
    #[serde(default)]
    pub spied: Spied,
}

impl Person {
    pub fn new(name: &str, role: Option<Role>) -> Self {
        Person {
            name: name.to_string(),
            role,
            mutant: false,
            genome: Genome::Normal,
            dead: false,
            paralyzed: false,
            spied: Spied::default(),
        }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == Some(role)
    }

    /// Alive and not paralyzed.
    pub fn can_act(&self) -> bool {
        !self.dead && !self.paralyzed
    }

    pub fn role_name(&self) -> &'static str {
        match self.role {
            Some(role) => role.name(),
            None => "nobody",
        }
    }

    pub(crate) fn reset_round(&mut self) {
        self.paralyzed = false;
        self.spied = Spied::default();
    }
}
