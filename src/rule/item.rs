//! Rule list item
//!
//! Holds the condition labels of one rule and forwards edit/delete presses
//! to a delegate. The item does not own its delegate; the list that owns the
//! items passes itself in when a button is pressed.

use super::{Condition, Rule};

/// Buttons shown on a rule item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleButton {
    Edit,
    Delete,
}

/// Receives button presses from rule items
pub trait RuleItemDelegate {
    fn edit_pressed(&mut self, item: &RuleItem);
    fn delete_pressed(&mut self, item: &RuleItem);
}

/// Presentation state for one rule in the rule list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleItem {
    index: usize,
    labels: Vec<String>,
}

impl RuleItem {
    /// Create an empty item at `index` in the rule list
    pub fn new(index: usize) -> Self {
        Self {
            index,
            labels: Vec::new(),
        }
    }

    /// Position of the item in the rule list
    pub fn index(&self) -> usize {
        self.index
    }

    /// Condition labels, one per condition, in rule order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Replace the labels with those of `rule`'s conditions
    pub fn configure<R: Rule>(&mut self, rule: &R) {
        self.labels.clear();
        self.labels.extend(
            rule.conditions()
                .iter()
                .map(Condition::display_description),
        );
    }

    /// Report a button press to `delegate`
    pub fn press(&self, button: RuleButton, delegate: &mut dyn RuleItemDelegate) {
        tracing::debug!(index = self.index, ?button, "rule item button pressed");
        match button {
            RuleButton::Edit => delegate.edit_pressed(self),
            RuleButton::Delete => delegate.delete_pressed(self),
        }
    }
}
