//! Element categories.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// The closed set of categories an element can be assigned.
///
/// Every variant except [`Category::Parenthesis`] may be chosen by the external
/// classifier. `Parenthesis` is assigned structurally to spans wrapped in
/// parentheses and is never offered as a choice.
///
/// # Examples
///
/// ```
/// use slugline_core::Category;
///
/// assert_eq!(Category::Cast.to_string(), "CAST");
/// assert_eq!("PROP".parse::<Category>().unwrap(), Category::Prop);
/// assert!(!Category::Parenthesis.is_assignable());
/// assert_eq!(Category::assignable().count(), 15);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// A speaking or named character
    Cast,
    /// An object handled or referenced on screen
    Prop,
    /// A place
    Location,
    /// An editorial transition (CUT TO, FADE OUT)
    Transition,
    /// A sound effect
    Sound,
    /// A described action
    Action,
    /// A shot description
    Shot,
    /// An animal
    Animal,
    /// A vehicle
    Vehicle,
    /// Music cue
    Music,
    /// Weather condition
    Weather,
    /// Time of day
    Time,
    /// Calendar date
    Date,
    /// A span of time
    Duration,
    /// Camera direction
    Camera,
    /// Text wrapped in parentheses, resolved without the classifier
    Parenthesis,
}

impl Category {
    /// Whether the external classifier may assign this category.
    pub fn is_assignable(self) -> bool {
        self != Category::Parenthesis
    }

    /// Categories the external classifier may choose from, in declaration order.
    pub fn assignable() -> impl Iterator<Item = Category> {
        Category::iter().filter(|c| c.is_assignable())
    }
}
