//! FAQ accordion: at most one item open after any click.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionOptions {
    pub item_selector: String,
    pub trigger_selector: String,
    pub active_class: String,
}

impl Default for AccordionOptions {
    fn default() -> Self {
        Self {
            item_selector: ".faq-item".to_string(),
            trigger_selector: ".faq-question".to_string(),
            active_class: "active".to_string(),
        }
    }
}

/// What a click changed. Items in `closed` get `aria-expanded="false"` on
/// their trigger, the `opened` item gets `"true"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccordionChange {
    pub closed: Vec<usize>,
    pub opened: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accordion {
    open: Vec<bool>,
}

impl Accordion {
    pub fn new(len: usize) -> Self {
        Self {
            open: vec![false; len],
        }
    }

    /// Start from the current page state; markup may ship with several
    /// items already open.
    pub fn from_open_flags(open: Vec<bool>) -> Self {
        Self { open }
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Close every open item, then open `index` unless it was the one open.
    pub fn toggle(&mut self, index: usize) -> AccordionChange {
        if index >= self.open.len() {
            return AccordionChange::default();
        }
        let was_open = self.open[index];

        let closed: Vec<usize> = self
            .open
            .iter()
            .enumerate()
            .filter_map(|(i, open)| open.then_some(i))
            .collect();
        for &i in &closed {
            self.open[i] = false;
        }

        let opened = if was_open {
            None
        } else {
            self.open[index] = true;
            Some(index)
        };
        AccordionChange { closed, opened }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_closed_item() {
        let mut acc = Accordion::new(3);
        let change = acc.toggle(1);
        assert_eq!(change, AccordionChange { closed: vec![], opened: Some(1) });
        assert!(acc.is_open(1));
    }

    #[test]
    fn test_opening_another_closes_previous() {
        let mut acc = Accordion::new(3);
        acc.toggle(0);
        let change = acc.toggle(2);
        assert_eq!(change, AccordionChange { closed: vec![0], opened: Some(2) });
        assert!(!acc.is_open(0));
        assert!(acc.is_open(2));
    }

    #[test]
    fn test_clicking_open_item_closes_it() {
        let mut acc = Accordion::new(2);
        acc.toggle(1);
        let change = acc.toggle(1);
        assert_eq!(change, AccordionChange { closed: vec![1], opened: None });
        assert!(!acc.is_open(1));
    }

    #[test]
    fn test_multiple_initially_open() {
        let mut acc = Accordion::from_open_flags(vec![true, false, true]);
        let change = acc.toggle(1);
        assert_eq!(change, AccordionChange { closed: vec![0, 2], opened: Some(1) });
        assert_eq!((0..3).filter(|&i| acc.is_open(i)).count(), 1);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let mut acc = Accordion::new(1);
        assert_eq!(acc.toggle(5), AccordionChange::default());
        assert!(!acc.is_open(0));
    }
}
