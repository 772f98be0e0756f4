//! Rule module - Filter rules as shown in the rule list
//!
//! Only the presentation side lives here: a rule is a list of conditions,
//! each of which can describe itself for a label. Evaluating rules against
//! the tree is not part of this crate.

pub mod item;

pub use item::{RuleButton, RuleItem, RuleItemDelegate};

/// A single condition of a rule
pub trait Condition {
    /// Human readable description used as the condition's label
    fn display_description(&self) -> String;
}

/// A filter rule made of ordered conditions
pub trait Rule {
    type Condition: Condition;

    fn conditions(&self) -> &[Self::Condition];
}
