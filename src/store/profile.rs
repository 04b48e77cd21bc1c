use uuid::Uuid;

use crate::error::AppError;
use crate::model::profile::{
    Achievement, CreateAchievement, CreateEducation, CreateExperience, CreateSkill, Education,
    Experience, Skill, UpdateBasicInfo, UserProfile,
};
use crate::store::kv::KvStore;

/// Per-user profile collections persisted through the key-value store, one
/// JSON value under `profile_{user_id}`. Update and delete of an id that does
/// not exist fail with NotFound rather than silently doing nothing.
pub struct ProfileStore {
    kv: Box<dyn KvStore>,
}

impl ProfileStore {
    pub fn new(kv: Box<dyn KvStore>) -> Self {
        Self { kv }
    }

    fn key(user_id: &str) -> String {
        format!("profile_{}", user_id)
    }

    pub fn load(&self, user_id: &str) -> UserProfile {
        match self.kv.get(&Self::key(user_id)) {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(profile) => profile,
                Err(e) => {
                    tracing::warn!(error = %e, user_id, "Stored profile unreadable, starting fresh");
                    UserProfile::default()
                }
            },
            None => UserProfile::default(),
        }
    }

    fn save(&self, user_id: &str, profile: &UserProfile) {
        let raw = serde_json::to_string(profile).expect("profile serializes to JSON");
        self.kv.set(&Self::key(user_id), raw);
    }

    pub fn update_basic_info(&self, user_id: &str, input: UpdateBasicInfo) -> UserProfile {
        let mut profile = self.load(user_id);
        if let Some(bio) = input.bio {
            profile.bio = bio;
        }
        if let Some(phone) = input.phone {
            profile.phone = phone;
        }
        if let Some(location) = input.location {
            profile.location = location;
        }
        self.save(user_id, &profile);
        profile
    }

    // ------------- skills -------------

    pub fn add_skill(&self, user_id: &str, input: CreateSkill) -> Skill {
        let skill = Skill {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            level: input.level,
            endorsements: 0,
        };
        let mut profile = self.load(user_id);
        profile.skills.push(skill.clone());
        self.save(user_id, &profile);
        skill
    }

    pub fn update_skill(
        &self,
        user_id: &str,
        skill_id: &str,
        input: CreateSkill,
    ) -> Result<Skill, AppError> {
        let mut profile = self.load(user_id);
        let skill = profile
            .skills
            .iter_mut()
            .find(|s| s.id == skill_id)
            .ok_or_else(|| AppError::NotFound(format!("skill {} not found", skill_id)))?;

        // Endorsements survive edits; only the submitted fields change.
        skill.name = input.name;
        skill.level = input.level;
        let updated = skill.clone();
        self.save(user_id, &profile);
        Ok(updated)
    }

    pub fn delete_skill(&self, user_id: &str, skill_id: &str) -> Result<(), AppError> {
        let mut profile = self.load(user_id);
        let before = profile.skills.len();
        profile.skills.retain(|s| s.id != skill_id);
        if profile.skills.len() == before {
            return Err(AppError::NotFound(format!("skill {} not found", skill_id)));
        }
        self.save(user_id, &profile);
        Ok(())
    }

    // ------------- experience -------------

    pub fn add_experience(&self, user_id: &str, input: CreateExperience) -> Experience {
        let experience = Experience {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            company: input.company,
            location: input.location,
            start_date: input.start_date,
            end_date: input.end_date,
            current: input.current,
            description: input.description,
        };
        let mut profile = self.load(user_id);
        profile.experience.push(experience.clone());
        self.save(user_id, &profile);
        experience
    }

    pub fn update_experience(
        &self,
        user_id: &str,
        experience_id: &str,
        input: CreateExperience,
    ) -> Result<Experience, AppError> {
        let mut profile = self.load(user_id);
        let experience = profile
            .experience
            .iter_mut()
            .find(|e| e.id == experience_id)
            .ok_or_else(|| AppError::NotFound(format!("experience {} not found", experience_id)))?;

        experience.title = input.title;
        experience.company = input.company;
        experience.location = input.location;
        experience.start_date = input.start_date;
        experience.end_date = input.end_date;
        experience.current = input.current;
        experience.description = input.description;
        let updated = experience.clone();
        self.save(user_id, &profile);
        Ok(updated)
    }

    pub fn delete_experience(&self, user_id: &str, experience_id: &str) -> Result<(), AppError> {
        let mut profile = self.load(user_id);
        let before = profile.experience.len();
        profile.experience.retain(|e| e.id != experience_id);
        if profile.experience.len() == before {
            return Err(AppError::NotFound(format!(
                "experience {} not found",
                experience_id
            )));
        }
        self.save(user_id, &profile);
        Ok(())
    }

    // ------------- education -------------

    pub fn add_education(&self, user_id: &str, input: CreateEducation) -> Education {
        let education = Education {
            id: Uuid::new_v4().to_string(),
            degree: input.degree,
            institution: input.institution,
            year: input.year,
            grade: input.grade,
        };
        let mut profile = self.load(user_id);
        profile.education.push(education.clone());
        self.save(user_id, &profile);
        education
    }

    pub fn update_education(
        &self,
        user_id: &str,
        education_id: &str,
        input: CreateEducation,
    ) -> Result<Education, AppError> {
        let mut profile = self.load(user_id);
        let education = profile
            .education
            .iter_mut()
            .find(|e| e.id == education_id)
            .ok_or_else(|| AppError::NotFound(format!("education {} not found", education_id)))?;

        education.degree = input.degree;
        education.institution = input.institution;
        education.year = input.year;
        education.grade = input.grade;
        let updated = education.clone();
        self.save(user_id, &profile);
        Ok(updated)
    }

    pub fn delete_education(&self, user_id: &str, education_id: &str) -> Result<(), AppError> {
        let mut profile = self.load(user_id);
        let before = profile.education.len();
        profile.education.retain(|e| e.id != education_id);
        if profile.education.len() == before {
            return Err(AppError::NotFound(format!(
                "education {} not found",
                education_id
            )));
        }
        self.save(user_id, &profile);
        Ok(())
    }

    // ------------- achievements -------------

    pub fn add_achievement(&self, user_id: &str, input: CreateAchievement) -> Achievement {
        let achievement = Achievement {
            id: Uuid::new_v4().to_string(),
            title: input.title,
            organization: input.organization,
            date: input.date,
            category: input.category,
            description: input.description,
        };
        let mut profile = self.load(user_id);
        profile.achievements.push(achievement.clone());
        self.save(user_id, &profile);
        achievement
    }

    pub fn update_achievement(
        &self,
        user_id: &str,
        achievement_id: &str,
        input: CreateAchievement,
    ) -> Result<Achievement, AppError> {
        let mut profile = self.load(user_id);
        let achievement = profile
            .achievements
            .iter_mut()
            .find(|a| a.id == achievement_id)
            .ok_or_else(|| {
                AppError::NotFound(format!("achievement {} not found", achievement_id))
            })?;

        achievement.title = input.title;
        achievement.organization = input.organization;
        achievement.date = input.date;
        achievement.category = input.category;
        achievement.description = input.description;
        let updated = achievement.clone();
        self.save(user_id, &profile);
        Ok(updated)
    }

    pub fn delete_achievement(&self, user_id: &str, achievement_id: &str) -> Result<(), AppError> {
        let mut profile = self.load(user_id);
        let before = profile.achievements.len();
        profile.achievements.retain(|a| a.id != achievement_id);
        if profile.achievements.len() == before {
            return Err(AppError::NotFound(format!(
                "achievement {} not found",
                achievement_id
            )));
        }
        self.save(user_id, &profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::profile::SkillLevel;
    use crate::store::kv::MemoryKv;

    fn store() -> ProfileStore {
        ProfileStore::new(Box::new(MemoryKv::new()))
    }

    fn skill(name: &str) -> CreateSkill {
        CreateSkill {
            name: name.to_string(),
            level: SkillLevel::Advanced,
        }
    }

    #[test]
    fn added_skill_starts_with_zero_endorsements() {
        let store = store();
        let added = store.add_skill("1", skill("Machine Learning"));

        let profile = store.load("1");
        assert_eq!(profile.skills.len(), 1);
        assert_eq!(profile.skills[0].id, added.id);
        assert_eq!(profile.skills[0].endorsements, 0);
    }

    #[test]
    fn deleted_skill_disappears_from_retrieval() {
        let store = store();
        let added = store.add_skill("1", skill("Machine Learning"));
        store.add_skill("1", skill("Compilers"));

        store.delete_skill("1", &added.id).unwrap();

        let profile = store.load("1");
        assert_eq!(profile.skills.len(), 1);
        assert!(profile.skills.iter().all(|s| s.id != added.id));
    }

    #[test]
    fn updating_missing_skill_is_not_found() {
        let store = store();
        store.add_skill("1", skill("Machine Learning"));

        let err = store.update_skill("1", "no-such-id", skill("Databases")).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        let err = store.delete_skill("1", "no-such-id").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn update_keeps_id_and_endorsements() {
        let store = store();
        let added = store.add_skill("1", skill("Machine Learning"));

        let updated = store
            .update_skill(
                "1",
                &added.id,
                CreateSkill {
                    name: "Deep Learning".to_string(),
                    level: SkillLevel::Expert,
                },
            )
            .unwrap();

        assert_eq!(updated.id, added.id);
        assert_eq!(updated.name, "Deep Learning");
        assert_eq!(updated.endorsements, 0);
    }

    #[test]
    fn profiles_are_isolated_per_user() {
        let store = store();
        store.add_skill("1", skill("Machine Learning"));

        assert!(store.load("2").skills.is_empty());
    }

    #[test]
    fn basic_info_updates_are_partial() {
        let store = store();
        store.update_basic_info(
            "1",
            UpdateBasicInfo {
                bio: Some("Teaching since 2010".to_string()),
                phone: None,
                location: Some("Amravati".to_string()),
            },
        );
        let profile = store.update_basic_info(
            "1",
            UpdateBasicInfo {
                bio: None,
                phone: Some("+91 98765 43210".to_string()),
                location: None,
            },
        );

        assert_eq!(profile.bio, "Teaching since 2010");
        assert_eq!(profile.phone, "+91 98765 43210");
        assert_eq!(profile.location, "Amravati");
    }
}
