use crate::model::Lead;

/// Search + status filter applied to the lead list.
///
/// Build it with [`LeadFilter::new`], which normalizes the raw inputs: the search
/// term is trimmed and lower-cased, the status is trimmed. An empty value on
/// either side matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadFilter {
    search: String,
    status: String,
}

impl LeadFilter {
    pub fn new(search: &str, status: &str) -> Self {
        Self {
            search: search.trim().to_lowercase(),
            status: status.trim().to_string(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn matches(&self, lead: &Lead) -> bool {
        let search_ok = self.search.is_empty()
            || lead.name.to_lowercase().contains(&self.search)
            || lead.phone.to_lowercase().contains(&self.search);
        let status_ok = self.status.is_empty() || lead.status == self.status;
        search_ok && status_ok
    }
}

/// Returns the leads matching `filter`, in their original order.
pub fn filter(leads: &[Lead], filter: &LeadFilter) -> Vec<Lead> {
    leads
        .iter()
        .filter(|lead| filter.matches(lead))
        .cloned()
        .collect()
}
