//! Directory view derivation
//!
//! Pure transformation of the raw member collection into the rendered
//! directory: search filtering, officer/other partitioning, rank and name
//! ordering, and contact suppression. No state is kept anywhere; every call
//! recomputes the view from its inputs.

mod rank;

pub use rank::OfficerRank;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Member;

/// Render-ready projection of a member.
///
/// Contact fields are already suppressed when the member asked for it, so a
/// card never carries data the UI must hide. Ownership checks run against
/// raw [`Member`] values, not cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberCard {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub officer_title: Option<String>,
    /// True when email/phone were suppressed; the UI shows a "hidden" marker.
    pub contact_hidden: bool,
    pub updated_at: DateTime<Utc>,
}

impl From<&Member> for MemberCard {
    fn from(member: &Member) -> Self {
        let hidden = member.hide_contact_info;
        Self {
            first_name: member.first_name.clone(),
            last_name: member.last_name.clone(),
            email: if hidden { None } else { Some(member.email.clone()) },
            phone: if hidden { None } else { member.phone.clone() },
            photo_url: member.photo_url.clone(),
            officer_title: member.officer_title.clone(),
            contact_hidden: hidden,
            updated_at: member.updated_at,
        }
    }
}

/// The derived directory: officers first, everyone else after.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryView {
    pub officers: Vec<MemberCard>,
    pub others: Vec<MemberCard>,
}

impl DirectoryView {
    /// Derive the directory from the full collection and a search term.
    ///
    /// Matching is a case-insensitive substring test over first name, last
    /// name, email, and officer title (absent title counts as empty). An
    /// empty term matches everyone. Officers order by [`OfficerRank`], other
    /// members by last name; both sorts are stable.
    pub fn derive(members: &[Member], term: &str) -> Self {
        let term = term.to_lowercase();

        let mut officers: Vec<&Member> = Vec::new();
        let mut others: Vec<&Member> = Vec::new();
        for member in members.iter().filter(|m| matches_term(m, &term)) {
            match member.officer_title.as_deref() {
                Some(title) if !title.is_empty() => officers.push(member),
                _ => others.push(member),
            }
        }

        officers.sort_by_key(|m| OfficerRank::from_title(m.officer_title.as_deref().unwrap_or("")));
        others.sort_by(|a, b| {
            a.last_name
                .to_lowercase()
                .cmp(&b.last_name.to_lowercase())
        });

        Self {
            officers: officers.into_iter().map(MemberCard::from).collect(),
            others: others.into_iter().map(MemberCard::from).collect(),
        }
    }

    /// Total number of cards in the view.
    pub fn len(&self) -> usize {
        self.officers.len() + self.others.len()
    }

    /// True when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.officers.is_empty() && self.others.is_empty()
    }
}

fn matches_term(member: &Member, lower_term: &str) -> bool {
    if lower_term.is_empty() {
        return true;
    }
    [
        member.first_name.as_str(),
        member.last_name.as_str(),
        member.email.as_str(),
        member.officer_title.as_deref().unwrap_or(""),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(lower_term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(first: &str, last: &str, email: &str, title: Option<&str>) -> Member {
        Member {
            first_name: first.to_string(),
            last_name: last.to_string(),
            email: email.to_string(),
            phone: Some("555-0100".to_string()),
            photo_url: None,
            officer_title: title.map(str::to_string),
            hide_contact_info: false,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_term_matches_all() {
        let members = vec![
            member("Ada", "Lovelace", "ada@example.com", None),
            member("Grace", "Hopper", "grace@example.com", Some("President")),
        ];
        let view = DirectoryView::derive(&members, "");
        assert_eq!(view.len(), 2);
        assert_eq!(view.officers.len(), 1);
        assert_eq!(view.others.len(), 1);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let members = vec![
            member("Grace", "Hopper", "grace@example.com", Some("President")),
            member("Ada", "Lovelace", "ada@example.com", Some("Secretary")),
        ];
        let view = DirectoryView::derive(&members, "pres");
        assert_eq!(view.officers.len(), 1);
        assert_eq!(view.officers[0].first_name, "Grace");
        assert!(view.others.is_empty());
    }

    #[test]
    fn test_match_covers_all_four_fields() {
        let members = vec![
            member("Ada", "Lovelace", "ada@example.com", None),
            member("Grace", "Hopper", "grace@club.org", None),
        ];
        // first name
        assert_eq!(DirectoryView::derive(&members, "ADA").len(), 1);
        // last name
        assert_eq!(DirectoryView::derive(&members, "hopp").len(), 1);
        // email domain
        assert_eq!(DirectoryView::derive(&members, "club.org").len(), 1);
        // nothing
        assert!(DirectoryView::derive(&members, "zzz").is_empty());
    }

    #[test]
    fn test_absent_title_does_not_match() {
        // A missing officer_title is treated as the empty string, which
        // contains nothing.
        let members = vec![member("Ada", "Lovelace", "ada@example.com", None)];
        assert!(DirectoryView::derive(&members, "president").is_empty());
    }

    #[test]
    fn test_officers_sorted_by_rank() {
        let members = vec![
            member("C", "Clark", "c@example.com", Some("Treasurer")),
            member("A", "Adams", "a@example.com", Some("President")),
            member("B", "Baker", "b@example.com", Some("Secretary")),
        ];
        let view = DirectoryView::derive(&members, "");
        let titles: Vec<_> = view
            .officers
            .iter()
            .map(|c| c.officer_title.clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["President", "Secretary", "Treasurer"]);
    }

    #[test]
    fn test_unlisted_title_sorts_after_known_ranks() {
        let members = vec![
            member("A", "Adams", "a@example.com", Some("Chaplain")),
            member("B", "Baker", "b@example.com", Some("Oktoberfest Chair")),
            member("C", "Clark", "c@example.com", Some("President")),
        ];
        let view = DirectoryView::derive(&members, "");
        let titles: Vec<_> = view
            .officers
            .iter()
            .map(|c| c.officer_title.clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["President", "Oktoberfest Chair", "Chaplain"]);
    }

    #[test]
    fn test_rank_sort_is_stable() {
        let first = member("A", "Adams", "a@example.com", Some("Chaplain"));
        let second = member("B", "Baker", "b@example.com", Some("Quartermaster"));
        let view = DirectoryView::derive(&[first, second], "");
        // Both unranked: insertion order is preserved.
        assert_eq!(view.officers[0].first_name, "A");
        assert_eq!(view.officers[1].first_name, "B");
    }

    #[test]
    fn test_others_sorted_by_last_name() {
        let members = vec![
            member("X", "young", "x@example.com", None),
            member("Y", "Adams", "y@example.com", None),
            member("Z", "Miller", "z@example.com", None),
        ];
        let view = DirectoryView::derive(&members, "");
        let names: Vec<_> = view.others.iter().map(|c| c.last_name.clone()).collect();
        // Case-insensitive: "young" lands after "Miller" despite lowercase.
        assert_eq!(names, vec!["Adams", "Miller", "young"]);
    }

    #[test]
    fn test_last_name_sort_is_stable() {
        let members = vec![
            member("First", "Smith", "first@example.com", None),
            member("Second", "Smith", "second@example.com", None),
        ];
        let view = DirectoryView::derive(&members, "");
        assert_eq!(view.others[0].first_name, "First");
        assert_eq!(view.others[1].first_name, "Second");
    }

    #[test]
    fn test_empty_title_is_not_an_officer() {
        let m = member("Ada", "Lovelace", "ada@example.com", Some(""));
        let view = DirectoryView::derive(&[m], "");
        assert!(view.officers.is_empty());
        assert_eq!(view.others.len(), 1);
    }

    #[test]
    fn test_hidden_contact_is_suppressed_on_cards() {
        let mut m = member("Ada", "Lovelace", "ada@example.com", None);
        m.hide_contact_info = true;
        let view = DirectoryView::derive(&[m], "");
        let card = &view.others[0];
        assert!(card.email.is_none());
        assert!(card.phone.is_none());
        assert!(card.contact_hidden);
    }

    #[test]
    fn test_visible_contact_is_carried() {
        let m = member("Ada", "Lovelace", "ada@example.com", None);
        let view = DirectoryView::derive(&[m], "");
        let card = &view.others[0];
        assert_eq!(card.email.as_deref(), Some("ada@example.com"));
        assert_eq!(card.phone.as_deref(), Some("555-0100"));
        assert!(!card.contact_hidden);
    }

    #[test]
    fn test_hidden_member_still_matches_by_email() {
        // Suppression is presentation only; search still sees the record.
        let mut m = member("Ada", "Lovelace", "ada@example.com", None);
        m.hide_contact_info = true;
        let view = DirectoryView::derive(&[m], "ada@example");
        assert_eq!(view.len(), 1);
        assert!(view.others[0].email.is_none());
    }
}
