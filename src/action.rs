//! Activity-to-action mapping
//!
//! Activities are the raw event-type codes in the input; actions are the
//! three normalized categories written to the CSV.

/// Normalized output category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,      // createdDoc, addedText, changedText
    Remove,   // deletedDoc, deletedText, archived
    Accessed, // viewedDoc
}

/// The full domain of recognized activity codes.
pub const ACTIVITIES: [&str; 7] = [
    "createdDoc",
    "addedText",
    "changedText",
    "deletedDoc",
    "deletedText",
    "archived",
    "viewedDoc",
];

impl Action {
    /// Map an activity code to its action, or `None` if the activity is
    /// unknown (including a missing activity).
    pub fn from_activity(activity: Option<&str>) -> Option<Self> {
        match activity? {
            "createdDoc" | "addedText" | "changedText" => Some(Action::Add),
            "deletedDoc" | "deletedText" | "archived" => Some(Action::Remove),
            "viewedDoc" => Some(Action::Accessed),
            _ => None,
        }
    }

    /// Membership check against [`ACTIVITIES`], used by the pipeline for
    /// the "no action mapping" classification.
    pub fn is_known_activity(activity: Option<&str>) -> bool {
        matches!(activity, Some(a) if ACTIVITIES.contains(&a))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Add => "ADD",
            Action::Remove => "REMOVE",
            Action::Accessed => "ACCESSED",
        }
    }
}
