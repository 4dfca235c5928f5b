use crate::world::person::roles::InfoRole;

/// What the information roles found out tonight, kept for the hacker.
pub(super) struct NightEventsStorage {
    psychologist_info: Option<String>,
    geneticist_info: Option<String>,
    technician_info: Option<String>,
}

impl NightEventsStorage {
    pub(super) fn new() -> Self {
        Self {
            psychologist_info: None,
            geneticist_info: None,
            technician_info: None,
        }
    }

    fn slot(&mut self, role: InfoRole) -> &mut Option<String> {
        match role {
            InfoRole::Psychologist => &mut self.psychologist_info,
            InfoRole::Geneticist => &mut self.geneticist_info,
            InfoRole::Technician => &mut self.technician_info,
        }
    }

    pub(super) fn set_info(&mut self, role: InfoRole, info: &str) {
        *self.slot(role) = Some(info.to_string());
    }

    pub(super) fn info(&self, role: InfoRole) -> Option<&str> {
        match role {
            InfoRole::Psychologist => self.psychologist_info.as_deref(),
            InfoRole::Geneticist => self.geneticist_info.as_deref(),
            InfoRole::Technician => self.technician_info.as_deref(),
        }
    }
}
