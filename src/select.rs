//! Candidate selection: reduce a list of matching entities to exactly one.

use crate::display::{self, Theme};
use crate::error::Result;
use crate::models::{Project, Section, Task};
use crate::prompt::PromptProvider;

/// An entity kind the selector can disambiguate.
pub trait Named {
    const KIND: &'static str;

    fn display_name(&self) -> &str;
}

impl Named for Project {
    const KIND: &'static str = "project";

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Section {
    const KIND: &'static str = "section";

    fn display_name(&self) -> &str {
        &self.name
    }
}

impl Named for Task {
    const KIND: &'static str = "task";

    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Pick exactly one entity out of a candidate list.
///
/// Zero candidates is `Ok(None)`; the caller decides whether that is fatal.
/// One candidate is returned without touching the prompter. Several
/// candidates are listed with zero-based indices and the user is re-prompted
/// until a valid index comes back. Indices are only meaningful against the
/// list as printed; order is whatever the server returned.
pub fn select_one<'a, T, P>(
    items: &'a [T],
    theme: &Theme,
    prompter: &mut P,
) -> Result<Option<&'a T>>
where
    T: Named,
    P: PromptProvider,
{
    match items {
        [] => Ok(None),
        [only] => Ok(Some(only)),
        _ => {
            display::candidate_listing(theme, items, |item| item.display_name());
            display::notice(
                theme,
                &format!("Multiple {}s are found, select one.", T::KIND),
            );

            loop {
                let index = prompter.choose_index(T::KIND, items.len())?;
                if index < items.len() {
                    return Ok(Some(&items[index]));
                }
                display::notice(theme, &format!("Select a valid {} index", T::KIND));
            }
        },
    }
}
