use serde::{Deserialize, Serialize};

/// A sales prospect.
///
/// Every field except `id` is stored trimmed and non-empty; [`Lead::from_form`]
/// is the only constructor used by the command layer and it assumes the form
/// already passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub source: String,
    pub status: String,
}

impl Lead {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        phone: impl Into<String>,
        source: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            source: source.into(),
            status: status.into(),
        }
    }

    pub fn from_form(id: String, form: &LeadForm) -> Self {
        Self {
            id,
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            source: form.source.trim().to_string(),
            status: form.status.trim().to_string(),
        }
    }
}

/// Raw values as typed into the lead form.
///
/// `id` is `Some` while editing an existing lead and `None` when adding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub id: Option<String>,
    pub name: String,
    pub phone: String,
    pub source: String,
    pub status: String,
}

impl LeadForm {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        source: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            phone: phone.into(),
            source: source.into(),
            status: status.into(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Populates a form from a stored lead, as when the user clicks "edit".
    pub fn from_lead(lead: &Lead) -> Self {
        Self {
            id: Some(lead.id.clone()),
            name: lead.name.clone(),
            phone: lead.phone.clone(),
            source: lead.source.clone(),
            status: lead.status.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_form_trims_every_field() {
        let form = LeadForm::new("  Jo Smith ", " 555-1234567", "web ", " new ");
        let lead = Lead::from_form("abc".into(), &form);
        assert_eq!(lead, Lead::new("abc", "Jo Smith", "555-1234567", "web", "new"));
    }

    #[test]
    fn form_round_trips_through_lead() {
        let lead = Lead::new("x", "Ann", "555 0000", "referral", "contacted");
        let form = LeadForm::from_lead(&lead);
        assert_eq!(form.id.as_deref(), Some("x"));
        assert_eq!(Lead::from_form("x".into(), &form), lead);
    }

    #[test]
    fn serializes_as_flat_record() {
        let lead = Lead::new("x", "Ann", "555 0000", "web", "new");
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["id"], "x");
        assert_eq!(json["status"], "new");
    }
}
