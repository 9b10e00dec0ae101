//! Pure projection of the note collection into display partitions.

use crate::models::Note;

/// The three disjoint display groups derived from a note collection.
///
/// Partition membership is a pure function of `(is_pinned, is_archived)`:
/// the archive bit wins, so an archived-and-pinned note lands in
/// [`BoardView::archived`]. Within each partition the collection order is
/// preserved. Pinned notes render before the others.
#[derive(Debug, Default)]
pub struct BoardView<'a> {
    pub pinned: Vec<&'a Note>,
    pub others: Vec<&'a Note>,
    pub archived: Vec<&'a Note>,
}

impl<'a> BoardView<'a> {
    pub fn len(&self) -> usize {
        self.pinned.len() + self.others.len() + self.archived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition `notes` into the three display groups.
pub fn project(notes: &[Note]) -> BoardView<'_> {
    let mut view = BoardView::default();
    for note in notes {
        if note.is_archived {
            view.archived.push(note);
        } else if note.is_pinned {
            view.pinned.push(note);
        } else {
            view.others.push(note);
        }
    }
    view
}

/// Owned counterpart of [`BoardView`], for callers that want to keep the
/// partitions past the collection snapshot they came from.
#[derive(Debug, Default)]
pub struct Board {
    pub pinned: Vec<Note>,
    pub others: Vec<Note>,
    pub archived: Vec<Note>,
}

impl Board {
    /// Partition `notes`, consuming them.
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut board = Board::default();
        for note in notes {
            if note.is_archived {
                board.archived.push(note);
            } else if note.is_pinned {
                board.pinned.push(note);
            } else {
                board.others.push(note);
            }
        }
        board
    }

    pub fn len(&self) -> usize {
        self.pinned.len() + self.others.len() + self.archived.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
