use super::Name;
use std::cmp::Ordering;

/// Orders two names by surname, then by the space-joined given names.
///
/// Both keys use ordinal (byte-wise) string comparison. Names that compare
/// `Equal` are indistinguishable for sorting; a stable sort keeps their input order.
pub fn compare(a: &Name, b: &Name) -> Ordering {
    a.surname()
        .cmp(b.surname())
        .then_with(|| a.given_names_joined().cmp(b.given_names_joined()))
}

impl Name {
    /// Compares against a possibly absent name. A present name is always
    /// greater than an absent one, so missing values sort first.
    pub fn compare_to(&self, other: Option<&Name>) -> Ordering {
        match other {
            Some(other) => compare(self, other),
            None => Ordering::Greater,
        }
    }
}

impl Ord for Name {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl PartialOrd for Name {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
