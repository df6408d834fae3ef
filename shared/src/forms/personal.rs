use crate::forms::draft::{non_empty, or_empty, DraftRecord};
use crate::locations;
use crate::models::personal_info::{Gender, PersonalInfo};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonalDraft {
    pub full_name: String,
    pub phone_number: String,
    pub gender: Gender,
    pub niche: String,
    pub bio: String,
    pub state: String,
    pub city: String,
}

impl PersonalDraft {
    pub fn city_options(&self) -> &'static [&'static str] {
        locations::cities_for(&self.state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersonalField {
    FullName,
    PhoneNumber,
    Gender,
    Niche,
    Bio,
    State,
    City,
}

impl DraftRecord for PersonalInfo {
    type Draft = PersonalDraft;
    type Field = PersonalField;

    fn to_draft(&self) -> PersonalDraft {
        PersonalDraft {
            full_name: or_empty(&self.full_name),
            phone_number: or_empty(&self.phone_number),
            gender: self.gender,
            niche: or_empty(&self.niche),
            bio: or_empty(&self.bio),
            state: or_empty(&self.state),
            city: or_empty(&self.city),
        }
    }

    fn from_draft(draft: &PersonalDraft) -> Self {
        Self {
            full_name: non_empty(&draft.full_name),
            phone_number: non_empty(&draft.phone_number),
            gender: draft.gender,
            niche: non_empty(&draft.niche),
            bio: non_empty(&draft.bio),
            state: non_empty(&draft.state),
            city: non_empty(&draft.city),
        }
    }

    fn apply(draft: &mut PersonalDraft, field: PersonalField, value: String) {
        match field {
            PersonalField::FullName => draft.full_name = value,
            PersonalField::PhoneNumber => draft.phone_number = value,
            PersonalField::Gender => draft.gender = Gender::parse(&value),
            PersonalField::Niche => draft.niche = value,
            PersonalField::Bio => draft.bio = value,
            PersonalField::State => {
                draft.state = value;
                draft.city.clear();
            }
            PersonalField::City => draft.city = value,
        }
    }
}

/// Niches offered in the influencer form's dropdown.
pub const NICHES: &[&str] = &[
    "Fashion",
    "Beauty",
    "Lifestyle",
    "Food",
    "Travel",
    "Fitness",
    "Tech",
    "Gaming",
    "Music",
    "Comedy",
    "Education",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::draft::{FormPhase, FormState};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn full_record() -> PersonalInfo {
        PersonalInfo {
            full_name: Some("Ada Obi".into()),
            phone_number: Some("+2348012345678".into()),
            gender: Gender::Female,
            niche: Some("Fashion".into()),
            bio: Some("Lagos-based stylist".into()),
            state: Some("Lagos".into()),
            city: Some("Lekki".into()),
        }
    }

    #[rstest]
    fn populated_draft_mirrors_record(full_record: PersonalInfo) {
        let mut form = FormState::<PersonalInfo>::new();
        assert!(form.sync(Some(&full_record)));

        let draft = form.draft();
        assert_eq!(draft.full_name, "Ada Obi");
        assert_eq!(draft.phone_number, "+2348012345678");
        assert_eq!(draft.gender, Gender::Female);
        assert_eq!(draft.niche, "Fashion");
        assert_eq!(draft.bio, "Lagos-based stylist");
        assert_eq!(draft.state, "Lagos");
        assert_eq!(draft.city, "Lekki");
        assert_eq!(form.record(), full_record);
        assert_eq!(form.phase(), FormPhase::Populated);
    }

    #[test]
    fn missing_record_yields_empty_defaults() {
        let mut form = FormState::<PersonalInfo>::new();
        assert_eq!(form.phase(), FormPhase::Uninitialized);
        form.sync(None);

        assert_eq!(form.draft(), &PersonalDraft::default());
        assert_eq!(form.draft().gender, Gender::Male);
        assert_eq!(form.draft().full_name, "");
        assert_eq!(form.phase(), FormPhase::Populated);
    }

    #[test]
    fn partial_record_fills_gaps_with_empty_strings() {
        let record = PersonalInfo {
            full_name: Some("Ada".into()),
            ..Default::default()
        };
        let draft = record.to_draft();
        assert_eq!(draft.full_name, "Ada");
        assert_eq!(draft.bio, "");
        assert_eq!(draft.city, "");
        assert_eq!(draft.gender, Gender::Male);
    }

    #[rstest]
    fn submit_returns_edited_draft_not_seed(full_record: PersonalInfo) {
        let mut form = FormState::<PersonalInfo>::new();
        form.sync(Some(&full_record));
        form.edit(PersonalField::FullName, "Ada O.".into());
        form.edit(PersonalField::Bio, String::new());
        assert_eq!(form.phase(), FormPhase::Editing);
        assert!(form.is_dirty());

        let saved = form.submit();
        assert_eq!(form.phase(), FormPhase::Submitting);
        assert_eq!(saved.full_name.as_deref(), Some("Ada O."));
        assert_eq!(saved.bio, None);
        assert_eq!(saved.city.as_deref(), Some("Lekki"));
        assert_ne!(saved, full_record);

        form.finish();
        assert_eq!(form.phase(), FormPhase::Populated);
    }

    #[rstest]
    fn same_source_does_not_reset_edits(full_record: PersonalInfo) {
        let mut form = FormState::<PersonalInfo>::new();
        form.sync(Some(&full_record));
        form.edit(PersonalField::Niche, "Beauty".into());

        assert!(!form.sync(Some(&full_record)));
        assert_eq!(form.draft().niche, "Beauty");
        assert!(form.is_dirty());
    }

    #[rstest]
    fn new_source_replaces_draft_wholesale(full_record: PersonalInfo) {
        let mut form = FormState::<PersonalInfo>::new();
        form.sync(Some(&full_record));
        form.edit(PersonalField::Niche, "Beauty".into());

        let saved = PersonalInfo {
            niche: Some("Travel".into()),
            ..full_record.clone()
        };
        assert!(form.sync(Some(&saved)));
        assert_eq!(form.draft().niche, "Travel");
        assert!(!form.is_dirty());
    }

    #[rstest]
    fn changing_state_clears_city(full_record: PersonalInfo) {
        let mut form = FormState::<PersonalInfo>::new();
        form.sync(Some(&full_record));
        assert_eq!(form.draft().city, "Lekki");

        form.edit(PersonalField::State, "Oyo".into());
        assert_eq!(form.draft().city, "");
        assert_eq!(form.draft().city_options(), locations::cities_for("Oyo"));
    }

    #[test]
    fn every_state_offers_exactly_its_cities() {
        let mut form = FormState::<PersonalInfo>::new();
        form.sync(None);
        for state in locations::states() {
            form.edit(PersonalField::City, "Somewhere".into());
            form.edit(PersonalField::State, state.to_string());
            assert_eq!(form.draft().city, "");
            assert_eq!(form.draft().city_options(), locations::cities_for(state));
        }
        form.edit(PersonalField::State, String::new());
        assert!(form.draft().city_options().is_empty());
    }

    #[rstest]
    fn reset_restores_seed(full_record: PersonalInfo) {
        let mut form = FormState::<PersonalInfo>::new();
        form.sync(Some(&full_record));
        form.edit(PersonalField::Gender, "male".into());
        form.reset();
        assert_eq!(form.draft().gender, Gender::Female);
        assert_eq!(form.phase(), FormPhase::Populated);
    }

    fn field_value() -> impl Strategy<Value = Option<String>> {
        proptest::option::of("[A-Za-z][A-Za-z0-9 ]{0,20}")
    }

    proptest! {
        #[test]
        fn draft_conversion_preserves_non_empty_records(
            full_name in field_value(),
            niche in field_value(),
            bio in field_value(),
            female in any::<bool>(),
        ) {
            let record = PersonalInfo {
                full_name,
                niche,
                bio,
                gender: if female { Gender::Female } else { Gender::Male },
                ..Default::default()
            };
            prop_assert_eq!(PersonalInfo::from_draft(&record.to_draft()), record);
        }
    }
}
