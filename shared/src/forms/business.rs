use crate::forms::draft::{non_empty, or_empty, DraftRecord};
use crate::locations;
use crate::models::business_info::BusinessInfo;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BusinessDraft {
    pub business_name: String,
    pub business_website: String,
    pub phone_number: String,
    pub industry: String,
    pub state: String,
    pub city: String,
    pub additional_info: String,
}

impl BusinessDraft {
    pub fn city_options(&self) -> &'static [&'static str] {
        locations::cities_for(&self.state)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessField {
    BusinessName,
    BusinessWebsite,
    PhoneNumber,
    Industry,
    State,
    City,
    AdditionalInfo,
}

impl DraftRecord for BusinessInfo {
    type Draft = BusinessDraft;
    type Field = BusinessField;

    fn to_draft(&self) -> BusinessDraft {
        BusinessDraft {
            business_name: or_empty(&self.business_name),
            business_website: or_empty(&self.business_website),
            phone_number: or_empty(&self.phone_number),
            industry: or_empty(&self.industry),
            state: or_empty(&self.state),
            city: or_empty(&self.city),
            additional_info: or_empty(&self.additional_info),
        }
    }

    fn from_draft(draft: &BusinessDraft) -> Self {
        Self {
            business_name: non_empty(&draft.business_name),
            business_website: non_empty(&draft.business_website),
            phone_number: non_empty(&draft.phone_number),
            industry: non_empty(&draft.industry),
            state: non_empty(&draft.state),
            city: non_empty(&draft.city),
            additional_info: non_empty(&draft.additional_info),
        }
    }

    fn apply(draft: &mut BusinessDraft, field: BusinessField, value: String) {
        match field {
            BusinessField::BusinessName => draft.business_name = value,
            BusinessField::BusinessWebsite => draft.business_website = value,
            BusinessField::PhoneNumber => draft.phone_number = value,
            BusinessField::Industry => draft.industry = value,
            BusinessField::State => {
                draft.state = value;
                draft.city.clear();
            }
            BusinessField::City => draft.city = value,
            BusinessField::AdditionalInfo => draft.additional_info = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::draft::FormState;
    use pretty_assertions::assert_eq;
    use validator::Validate;

    fn acme() -> BusinessInfo {
        BusinessInfo {
            business_name: Some("Acme Foods".into()),
            business_website: Some("https://acme.example".into()),
            phone_number: Some("08012345678".into()),
            industry: Some("Food & Beverage".into()),
            state: Some("Rivers".into()),
            city: Some("Port Harcourt".into()),
            additional_info: Some("Snacks and drinks".into()),
        }
    }

    #[test]
    fn draft_mirrors_every_field() {
        let mut form = FormState::<BusinessInfo>::new();
        form.sync(Some(&acme()));
        let draft = form.draft();
        assert_eq!(draft.business_name, "Acme Foods");
        assert_eq!(draft.business_website, "https://acme.example");
        assert_eq!(draft.phone_number, "08012345678");
        assert_eq!(draft.industry, "Food & Beverage");
        assert_eq!(draft.state, "Rivers");
        assert_eq!(draft.city, "Port Harcourt");
        assert_eq!(draft.additional_info, "Snacks and drinks");
        assert_eq!(form.record(), acme());
    }

    #[test]
    fn state_change_clears_city_and_swaps_options() {
        let mut form = FormState::<BusinessInfo>::new();
        form.sync(Some(&acme()));
        form.edit(BusinessField::State, "Kano".into());
        assert_eq!(form.draft().city, "");
        assert!(form.draft().city_options().contains(&"Kano"));
        assert!(!form.draft().city_options().contains(&"Port Harcourt"));
    }

    #[test]
    fn submitted_record_reflects_edits_and_validates() {
        let mut form = FormState::<BusinessInfo>::new();
        form.sync(None);
        form.edit(BusinessField::BusinessName, "Kola Studio".into());
        form.edit(BusinessField::BusinessWebsite, "https://kola.example".into());
        form.edit(BusinessField::State, "Lagos".into());
        form.edit(BusinessField::City, "Yaba".into());

        let record = form.submit();
        assert_eq!(record.business_name.as_deref(), Some("Kola Studio"));
        assert_eq!(record.city.as_deref(), Some("Yaba"));
        assert_eq!(record.industry, None);
        assert!(record.validate().is_ok());
    }
}
