//! # Display Indexes
//!
//! Lead ids are long and opaque, so the CLI lets users address leads by their
//! 1-based position in the stored list instead (`leadz edit 3`). Positions are
//! assigned over the **full, unfiltered** list, so the number a lead shows under
//! `leadz list --status new` is the same number `leadz delete` accepts.
//!
//! Anything that is not a plain positive number is taken as a lead id.

use crate::model::Lead;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLead {
    pub index: usize,
    pub lead: Lead,
}

/// A user input selecting one lead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeadSelector {
    Index(usize),
    Id(String),
}

impl std::fmt::Display for LeadSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LeadSelector::Index(i) => write!(f, "{}", i),
            LeadSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for LeadSelector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty lead selector".to_string());
        }
        match s.parse::<usize>() {
            Ok(0) => Err("Lead indexes start at 1".to_string()),
            Ok(n) => Ok(LeadSelector::Index(n)),
            Err(_) => Ok(LeadSelector::Id(s.to_string())),
        }
    }
}

/// Pairs each lead with its 1-based position in storage order.
pub fn index_leads(leads: Vec<Lead>) -> Vec<DisplayLead> {
    leads
        .into_iter()
        .enumerate()
        .map(|(i, lead)| DisplayLead { index: i + 1, lead })
        .collect()
}

/// Finds the lead a selector points at.
pub fn find<'a>(leads: &'a [DisplayLead], selector: &LeadSelector) -> Option<&'a DisplayLead> {
    leads.iter().find(|dl| match selector {
        LeadSelector::Index(i) => dl.index == *i,
        LeadSelector::Id(id) => &dl.lead.id == id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_as_indexes() {
        assert_eq!("3".parse::<LeadSelector>(), Ok(LeadSelector::Index(3)));
        assert_eq!(" 12 ".parse::<LeadSelector>(), Ok(LeadSelector::Index(12)));
    }

    #[test]
    fn parses_everything_else_as_id() {
        assert_eq!(
            "lq3k9x2a-00ff".parse::<LeadSelector>(),
            Ok(LeadSelector::Id("lq3k9x2a-00ff".into()))
        );
    }

    #[test]
    fn rejects_zero_and_empty() {
        assert!("0".parse::<LeadSelector>().is_err());
        assert!("".parse::<LeadSelector>().is_err());
    }

    #[test]
    fn indexes_follow_storage_order() {
        let indexed = index_leads(vec![
            Lead::new("a", "A", "5551234", "web", "new"),
            Lead::new("b", "B", "5551234", "web", "new"),
        ]);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[1].lead.id, "b");
        assert_eq!(indexed[1].index, 2);
    }

    #[test]
    fn find_by_index_or_id() {
        let indexed = index_leads(vec![
            Lead::new("a", "A", "5551234", "web", "new"),
            Lead::new("b", "B", "5551234", "web", "new"),
        ]);
        assert_eq!(find(&indexed, &LeadSelector::Index(2)).unwrap().lead.id, "b");
        assert_eq!(find(&indexed, &LeadSelector::Id("a".into())).unwrap().index, 1);
        assert!(find(&indexed, &LeadSelector::Index(3)).is_none());
    }
}
