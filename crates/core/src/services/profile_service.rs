use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::chart::ChartSpec;
use crate::models::profile::{ContactAcknowledgment, ContactSubmission, SkillRating, SKILLS};
use crate::models::settings::DashboardSettings;
use crate::services::chart_service::ChartService;

/// Message shown when a contact form field is left blank.
pub const MISSING_FIELDS_MESSAGE: &str = "Fill in all fields.";

/// Message shown when a contact form is accepted.
pub const ACKNOWLEDGMENT_MESSAGE: &str = "Message received (demo only).";

/// Portfolio page logic: the skill chart and the demo contact form.
pub struct ProfileService {
    chart_service: ChartService,
}

impl ProfileService {
    pub fn new() -> Self {
        Self {
            chart_service: ChartService::new(),
        }
    }

    /// The fixed skill table, in table order.
    pub fn skills(&self) -> Vec<SkillRating> {
        SKILLS
            .iter()
            .map(|(skill, level)| SkillRating::new(*skill, *level))
            .collect()
    }

    /// Skills sorted by level, highest first. Ties keep table order.
    pub fn ranked_skills(&self) -> Vec<SkillRating> {
        let mut skills = self.skills();
        skills.sort_by(|a, b| b.level.cmp(&a.level));
        skills
    }

    pub fn skill_chart(&self, settings: &DashboardSettings) -> ChartSpec {
        self.chart_service.skill_chart(&self.ranked_skills(), settings)
    }

    /// Validate a contact form and acknowledge it locally.
    ///
    /// Every field must contain non-whitespace text. Nothing is sent or stored.
    pub fn submit_contact(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactAcknowledgment, CoreError> {
        let fields = [&submission.name, &submission.email, &submission.message];
        if fields.iter().any(|f| f.trim().is_empty()) {
            log::warn!("contact form rejected: blank field");
            return Err(CoreError::ValidationError(MISSING_FIELDS_MESSAGE.into()));
        }

        Ok(ContactAcknowledgment {
            receipt_id: Uuid::new_v4(),
            message: ACKNOWLEDGMENT_MESSAGE.into(),
        })
    }
}

impl Default for ProfileService {
    fn default() -> Self {
        Self::new()
    }
}
