//! Officer rank ordering

/// Officer precedence in the rendered directory.
///
/// Declaration order is display order. Titles outside the recognized
/// vocabulary map to [`OfficerRank::Unranked`] and sort after every listed
/// rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OfficerRank {
    President,
    VicePresident,
    Secretary,
    Treasurer,
    OktoberfestChair,
    Unranked,
}

impl OfficerRank {
    /// Map a stored officer title to its rank. Exact match, case-sensitive.
    pub fn from_title(title: &str) -> Self {
        match title {
            "President" => Self::President,
            "Vice-President" => Self::VicePresident,
            "Secretary" => Self::Secretary,
            "Treasurer" => Self::Treasurer,
            "Oktoberfest Chair" => Self::OktoberfestChair,
            _ => Self::Unranked,
        }
    }
}
