//! View model behind the FAQ section.
//!
//! Each [`FaqEntry`] owns exactly one visibility flag. The [`FaqBoard`] only
//! keeps the entries in order; it never couples one entry's flag to another,
//! so any number of answers can be open at the same time.

use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::content::FaqContent;

/// Expanded/collapsed flag of a single disclosure widget.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    expanded: bool,
}

impl Disclosure {
    pub fn collapsed() -> Self {
        Self { expanded: false }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
    disclosure: Disclosure,
}

impl FaqEntry {
    pub fn new(question: impl Into<AttrValue>, answer: impl Into<AttrValue>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            disclosure: Disclosure::collapsed(),
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.disclosure.is_expanded()
    }

    pub fn toggle(&mut self) {
        self.disclosure.toggle();
    }
}

/// The only way an entry's flag changes is a user activating that entry.
pub enum FaqAction {
    Toggle(usize),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FaqBoard {
    entries: Vec<FaqEntry>,
}

impl FaqBoard {
    /// Builds one collapsed entry per pair, keeping the input order.
    pub fn new<I, Q, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<AttrValue>,
        A: Into<AttrValue>,
    {
        Self {
            entries: pairs
                .into_iter()
                .map(|(question, answer)| FaqEntry::new(question, answer))
                .collect(),
        }
    }

    pub fn from_content(content: &[FaqContent]) -> Self {
        Self::new(content.iter().map(|c| (c.question, c.answer)))
    }

    pub fn entries(&self) -> &[FaqEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn expanded_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_expanded()).count()
    }

    /// Flips entry `index` and returns its new state. Other entries are left
    /// untouched.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        match self.entries.get_mut(index) {
            Some(entry) => {
                entry.toggle();
                debug!("faq entry {} expanded={}", index, entry.is_expanded());
                Some(entry.is_expanded())
            }
            None => {
                warn!("ignoring toggle for missing faq entry {}", index);
                None
            }
        }
    }
}

impl Reducible for FaqBoard {
    type Action = FaqAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            FaqAction::Toggle(index) => next.toggle(index).is_some(),
        };
        if changed {
            Rc::new(next)
        } else {
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRICE_Q: &str = "Quanto custa uma consulta jurídica?";
    const REACH_Q: &str = "Atendem em todo o Brasil?";

    fn scenario_board() -> FaqBoard {
        FaqBoard::new([(PRICE_Q, "Depende do caso."), (REACH_Q, "Sim, em todo o país.")])
    }

    fn flags(board: &FaqBoard) -> Vec<bool> {
        board.entries().iter().map(FaqEntry::is_expanded).collect()
    }

    #[test]
    fn disclosure_starts_collapsed() {
        assert!(!Disclosure::collapsed().is_expanded());
        assert_eq!(Disclosure::default(), Disclosure::collapsed());
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut d = Disclosure::collapsed();
        d.toggle();
        assert!(d.is_expanded());
        d.toggle();
        assert_eq!(d, Disclosure::collapsed());
    }

    #[test]
    fn board_keeps_pairs_verbatim_and_in_order() {
        let board = FaqBoard::from_content(crate::content::FAQ);
        assert_eq!(board.len(), crate::content::FAQ.len());
        for (entry, content) in board.entries().iter().zip(crate::content::FAQ) {
            assert_eq!(entry.question.as_str(), content.question);
            assert_eq!(entry.answer.as_str(), content.answer);
            assert!(!entry.is_expanded());
        }
    }

    #[test]
    fn empty_board_is_valid() {
        let board = FaqBoard::from_content(&[]);
        assert!(board.is_empty());
        assert_eq!(board.expanded_count(), 0);
    }

    #[test]
    fn toggling_one_entry_leaves_the_rest_alone() {
        let mut board = FaqBoard::from_content(crate::content::FAQ);
        for i in 0..board.len() {
            let before = flags(&board);
            assert_eq!(board.toggle(i), Some(!before[i]));
            let after = flags(&board);
            for j in 0..board.len() {
                if j != i {
                    assert_eq!(before[j], after[j], "entry {} changed when toggling {}", j, i);
                }
            }
        }
        assert_eq!(board.expanded_count(), board.len());
    }

    #[test]
    fn out_of_range_toggle_is_a_no_op() {
        let mut board = scenario_board();
        assert_eq!(board.toggle(7), None);
        assert_eq!(flags(&board), vec![false, false]);
    }

    #[test]
    fn pricing_then_reach_scenario() {
        let mut board = scenario_board();
        assert_eq!(flags(&board), vec![false, false]);

        board.toggle(0);
        assert_eq!(flags(&board), vec![true, false]);

        board.toggle(1);
        assert_eq!(flags(&board), vec![true, true]);

        board.toggle(0);
        assert_eq!(flags(&board), vec![false, true]);
    }

    #[test]
    fn reducer_toggles_and_skips_bad_indices() {
        let board = Rc::new(scenario_board());
        let next = board.clone().reduce(FaqAction::Toggle(1));
        assert_eq!(flags(&next), vec![false, true]);

        let same = next.clone().reduce(FaqAction::Toggle(9));
        assert!(Rc::ptr_eq(&same, &next));
    }

    #[test]
    fn building_and_reading_never_expands_an_entry() {
        let board = FaqBoard::from_content(crate::content::FAQ);
        let copy = board.clone();
        assert_eq!(board.expanded_count(), 0);
        assert_eq!(copy.expanded_count(), 0);
        assert!(board.entries().iter().all(|e| !e.is_expanded()));

        let mut touched = board.clone();
        touched.toggle(1);
        assert_eq!(flags(&touched), vec![false, true, false, false]);
        assert_eq!(flags(&board), vec![false, false, false, false]);
    }
}
