use std::fmt;

/// A mutually exclusive mode of the omnibar. Exactly one workflow is
/// current at a time; it decides which search domain the input feeds and
/// which canned starter phrase an empty input receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Workflow {
  Chat,
  Search,
  Story,
  Image,
}

impl Workflow {
  pub const ALL: [Workflow; 4] = [
    Workflow::Chat,
    Workflow::Search,
    Workflow::Story,
    Workflow::Image,
  ];
  pub const COUNT: usize = Self::ALL.len();

  /// Stable index for per-workflow storage.
  pub fn as_index(self) -> usize {
    match self {
      Workflow::Chat => 0,
      Workflow::Search => 1,
      Workflow::Story => 2,
      Workflow::Image => 3,
    }
  }

  /// The canned starter phrase prefilled into an empty input, if this
  /// workflow has one. `Search` deliberately has none: its input starts
  /// blank so the trending list shows.
  pub fn prefill_phrase(self) -> Option<&'static str> {
    match self {
      Workflow::Chat => Some("Ask anything"),
      Workflow::Search => None,
      Workflow::Story => Some("Search stories"),
      Workflow::Image => Some("Imagine an image of"),
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      Workflow::Chat => "Chat",
      Workflow::Search => "Search",
      Workflow::Story => "Story",
      Workflow::Image => "Image",
    }
  }

  /// Next workflow in display order, wrapping. Used by front-ends to
  /// cycle modes.
  pub fn next(self) -> Workflow {
    let idx = self.as_index();
    Self::ALL[(idx + 1) % Self::COUNT]
  }
}

impl Default for Workflow {
  fn default() -> Self {
    Workflow::Chat
  }
}

impl fmt::Display for Workflow {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

/// What a selectable result points at. Closed set; URL resolution matches
/// exhaustively over it, so every item has a destination by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
  Story,
  Profile,
  Topic,
  Chat,
}

/// A selectable search or trending result. Immutable once constructed;
/// selection state clones it, never mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
  /// Identifier used for URL resolution (e.g. a story slug).
  pub value: String,
  /// Human-readable text shown in the list.
  pub label: String,
  pub kind:  ItemKind,
}

impl MenuItem {
  pub fn new(kind: ItemKind, value: impl Into<String>, label: impl Into<String>) -> Self {
    Self {
      value: value.into(),
      label: label.into(),
      kind,
    }
  }
}
