//! Tests for resources module
//!
//! These tests verify:
//! - Wire shapes of records and drafts
//! - Required-field declarations against empty drafts
//! - Soft-delete reporting and status vocabularies

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::common::{RequiredFields, Validator};
    use serde_json::json;

    fn missing_fields<R: Resource>() -> Vec<String> {
        let result = RequiredFields::new(R::REQUIRED).validate(&R::Draft::default());
        result.errors.into_iter().map(|e| e.field).collect()
    }

    #[test]
    fn test_empty_drafts_fail_every_required_field() {
        assert_eq!(missing_fields::<Skills>(), vec!["name"]);
        assert_eq!(missing_fields::<Qualifications>(), vec!["name"]);
        assert_eq!(
            missing_fields::<Jobs>(),
            vec!["title", "jobTypeId", "location"]
        );
        assert_eq!(
            missing_fields::<Candidates>(),
            vec!["firstName", "lastName", "email"]
        );
        assert_eq!(missing_fields::<Users>(), vec!["name", "email", "roleId"]);
        assert_eq!(missing_fields::<Events>(), vec!["title", "startDate"]);
        assert_eq!(
            missing_fields::<OfferLetters>(),
            vec!["candidateId", "jobId", "salary", "joiningDate"]
        );
    }

    #[test]
    fn test_required_fields_are_draft_wire_names() {
        fn check<R: Resource>() {
            let draft = serde_json::to_value(R::Draft::default()).expect("draft");
            for field in R::REQUIRED {
                assert!(
                    draft.get(*field).is_some(),
                    "{} draft has no field {}",
                    R::LABEL,
                    field
                );
            }
        }

        check::<Skills>();
        check::<JobTypes>();
        check::<Roles>();
        check::<Users>();
        check::<EmailTemplates>();
        check::<Documents>();
        check::<Verifications>();
        check::<Jobs>();
        check::<Candidates>();
        check::<OfferLetters>();
        check::<Interviews>();
        check::<Positions>();
        check::<Applications>();
    }

    #[test]
    fn test_job_wire_shape() {
        let job: Job = serde_json::from_value(json!({
            "id": 12,
            "title": "Backend Engineer",
            "jobTypeId": 2,
            "location": "Pune",
            "requiredSkillIds": [1, 4],
            "status": "Open"
        }))
        .expect("job");

        assert_eq!(job.job_type_id, Some(2));
        assert_eq!(job.required_skill_ids, vec![1, 4]);
        assert!(!job.is_deleted());

        let draft = Jobs::draft_from(&job);
        let wire = serde_json::to_value(&draft).expect("draft");
        assert_eq!(wire["title"], "Backend Engineer");
        assert_eq!(wire["jobTypeId"], 2);
    }

    #[test]
    fn test_closed_job_reports_deleted() {
        let job: Job = serde_json::from_value(json!({
            "id": 3, "title": "Old role", "jobTypeId": null, "status": "closed"
        }))
        .expect("job");

        assert!(job.is_deleted());
        assert_eq!(Jobs::DELETION, Deletion::Soft);
    }

    #[test]
    fn test_user_soft_delete_flag() {
        let user: User = serde_json::from_value(json!({
            "id": 5, "name": "Asha", "email": "asha@example.com",
            "roleId": 2, "roleName": "HR", "isDeleted": true
        }))
        .expect("user");

        assert!(user.is_deleted());
        assert_eq!(Users::DELETION, Deletion::Soft);
        assert_eq!(Users::MANAGERS, &[crate::auth::ADMIN]);

        let draft = Users::draft_from(&user);
        let wire = serde_json::to_value(&draft).expect("draft");
        assert!(wire.get("password").is_none());
    }

    #[test]
    fn test_hard_delete_is_default() {
        assert_eq!(Skills::DELETION, Deletion::Hard);
        assert_eq!(Candidates::DELETION, Deletion::Hard);
        assert_eq!(Skills::MANAGERS, crate::auth::MANAGERS);
    }

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(ResourceClient::<Skills>::item_path(42), "/api/skills/42");
        assert_eq!(
            ResourceClient::<OfferLetters>::item_path(-1),
            "/api/offerletters/-1"
        );
    }

    #[test]
    fn test_status_vocabularies() {
        assert!(Applications::STATUSES.contains(&"Shortlisted"));
        assert!(Interviews::STATUSES.contains(&"Completed"));
        assert!(Verifications::STATUSES.contains(&"Verified"));
        assert!(Jobs::STATUSES.contains(&jobs::STATUS_CLOSED));
    }

    #[test]
    fn test_default_filters_start_inactive() {
        assert!(!Skills::default_filters().is_active());
        assert!(!Jobs::default_filters().is_active());

        // includeDeleted=false is always sent
        let users = Users::default_filters();
        assert_eq!(users.get("includeDeleted"), Some("false"));
    }

    #[test]
    fn test_screening_result_wire_shape() {
        let result: applications::ScreeningResult = serde_json::from_value(json!({
            "applicationId": 9,
            "score": 72.5,
            "passed": true,
            "matchedSkills": ["Rust", "SQL"]
        }))
        .expect("screening");

        assert!(result.passed);
        assert_eq!(result.matched_skills.len(), 2);
        assert!(result.missing_skills.is_empty());
    }

    #[test]
    fn test_generate_pdf_request_omits_absent_fields() {
        let wire = serde_json::to_value(offer_letters::GeneratePdfRequest::default())
            .expect("request");
        assert_eq!(wire, json!({}));

        let today = offer_letters::GeneratePdfRequest::issued_today();
        assert!(today.issue_date.is_some());
        assert_eq!(offer_letters::pdf_file_name(4), "offer_letter_4.pdf");
    }
}
