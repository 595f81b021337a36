//! One level of the dataset/model/attribute path.
//!
//! Routers hand us reserved words ("init", "default", "index") when the user
//! has not picked anything yet at that level. We turn those into `Unselected`
//! so a real dataset called "default" never collides with the model sentinel.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Dataset,
    Model,
    Attribute,
}

impl Level {
    /// Reserved word the router uses for "nothing chosen" at this level.
    pub fn sentinel(self) -> &'static str {
        match self {
            Level::Dataset => "init",
            Level::Model => "default",
            Level::Attribute => "index",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Selected(String),
    Unselected,
}

impl Segment {
    /// Absent, empty, and sentinel values all resolve to `Unselected`.
    pub fn resolve(level: Level, raw: Option<&str>) -> Self {
        match raw {
            None | Some("") => Segment::Unselected,
            Some(s) if s == level.sentinel() => Segment::Unselected,
            Some(s) => Segment::Selected(s.to_string()),
        }
    }

    pub fn selected(&self) -> Option<&str> {
        match self {
            Segment::Selected(s) => Some(s),
            Segment::Unselected => None,
        }
    }

    pub fn is_unselected(&self) -> bool {
        matches!(self, Segment::Unselected)
    }

    /// Wire form: the selected name, or the level's sentinel word.
    pub fn wire(&self, level: Level) -> &str {
        self.selected().unwrap_or(level.sentinel())
    }
}
