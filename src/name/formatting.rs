//! Rendering names back into their canonical text form.

use super::Name;
use std::fmt;

/// Builds a full name from given names and a surname.
///
/// # Example
/// ```
/// use name_sorter::name::build_full_name;
///
/// assert_eq!(build_full_name(&["Adonis", "Julius"], "Archer"), "Adonis Julius Archer");
/// ```
pub fn build_full_name<S: AsRef<str>>(given_names: &[S], surname: &str) -> String {
    let mut full_name = given_names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(" ");
    full_name.push(' ');
    full_name.push_str(surname);
    full_name
}

/// Returns the canonical display string of a name.
pub fn format_name(name: &Name) -> String {
    name.full_name().to_string()
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.full_name())
    }
}
