use std::cmp::Ordering;

use super::collate::is_numeric_term;
use crate::participant::Participant;

/// A sortable table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    #[default]
    BibNumber,
    FullName,
    Age,
    Category,
    Club,
}

impl SortColumn {
    pub const ALL: [SortColumn; 5] = [
        SortColumn::BibNumber,
        SortColumn::FullName,
        SortColumn::Age,
        SortColumn::Category,
        SortColumn::Club,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SortColumn::BibNumber => "Bib",
            SortColumn::FullName => "Name",
            SortColumn::Age => "Age",
            SortColumn::Category => "Category",
            SortColumn::Club => "Club",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, SortColumn::BibNumber | SortColumn::Age)
    }

    fn numeric_key(self, p: &Participant) -> u32 {
        match self {
            SortColumn::BibNumber => p.bib_number,
            SortColumn::Age => p.age.unwrap_or(0),
            _ => 0,
        }
    }

    fn text_key(self, p: &Participant) -> String {
        let value = match self {
            SortColumn::FullName => Some(p.full_name.as_str()),
            SortColumn::Category => p.category.as_deref(),
            SortColumn::Club => p.club.as_deref(),
            _ => None,
        };
        value.unwrap_or_default().to_lowercase()
    }

    fn compare(self, a: &Participant, b: &Participant) -> Ordering {
        if self.is_numeric() {
            self.numeric_key(a).cmp(&self.numeric_key(b))
        } else {
            self.text_key(a).cmp(&self.text_key(b))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active table sort, changed only by header clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    /// Header click: flip direction on the active column, otherwise switch
    /// to `column` ascending
    pub fn click(&mut self, column: SortColumn) {
        if self.column == column {
            self.direction = self.direction.toggled();
        } else {
            self.column = column;
            self.direction = SortDirection::Ascending;
        }
    }
}

/// Keep participants matching the (already lower-cased) filter term
pub fn filter_participants<'a>(
    participants: &'a [Participant],
    filter_term: &str,
) -> Vec<&'a Participant> {
    if filter_term.is_empty() {
        return participants.iter().collect();
    }

    participants
        .iter()
        .filter(|p| {
            let contains = |field: Option<&str>| {
                field.is_some_and(|text| text.to_lowercase().contains(filter_term))
            };
            p.bib_text().starts_with(filter_term)
                || contains(Some(p.full_name.as_str()))
                || contains(p.club.as_deref())
                || contains(p.category.as_deref())
        })
        .collect()
}

/// Stable sort by the given column and direction; ties keep input order
pub fn sort_participants(rows: &mut [&Participant], sort: SortState) {
    rows.sort_by(|a, b| {
        let ordering = sort.column.compare(a, b);
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Rows to display for the current filter and sort
///
/// A numeric filter overrides the chosen sort: rows go by ascending bib with
/// an exact bib match pulled to the top, mirroring how lookups rank.
pub fn render_table<'a>(
    participants: &'a [Participant],
    filter_term: &str,
    sort: SortState,
) -> Vec<&'a Participant> {
    let mut rows = filter_participants(participants, filter_term);

    if !filter_term.is_empty() && is_numeric_term(filter_term) {
        rows.sort_by_key(|p| p.bib_number);
        rows.sort_by_key(|p| p.bib_text() != filter_term);
    } else {
        sort_participants(&mut rows, sort);
    }

    rows
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
